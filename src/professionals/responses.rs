use crate::map::models::LatLng;
use crate::professionals::models::Professional;
use serde::{Deserialize, Serialize};

#[derive(Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NearbyProfessionalsResponse {
    pub error: bool,
    pub professionals: Vec<NearbyProfessional>,
}

#[derive(Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NearbyProfessional {
    pub professional: Professional,
    pub position: LatLng,
    pub distance_meters: f64,
    /// One professional per non-empty response is the "matched" one that the
    /// widget highlights and draws a route to.
    pub matched: bool,
}

#[derive(Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NearbyProfessionalsError {
    pub error: bool,
    pub reason: String,
}
