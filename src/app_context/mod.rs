use crate::cli::Args;
use crate::professions::consts::UPSTREAM_TIMEOUT;
use url::Url;

#[derive(Clone)]
pub struct AppContext {
    pub http_client: reqwest::Client,
    pub professions_api_url: Url,
    pub scatter_radius_km: f64,
    pub marker_count: usize,
}

pub fn init(args: &Args) -> AppContext {
    let http_client = reqwest::Client::builder()
        .timeout(UPSTREAM_TIMEOUT)
        .build()
        .expect("Failed to build the upstream HTTP client.");
    AppContext {
        http_client,
        professions_api_url: args.professions_api_url.clone(),
        scatter_radius_km: args.scatter_radius_km,
        marker_count: args.marker_count,
    }
}
