use serde::Deserialize;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NearbyQueryParams {
    pub lat: f64,
    pub lng: f64,
    pub count: Option<usize>,
    pub radius_km: Option<f64>,
}
