use crate::map::consts::{DEFAULT_MARKER_COUNT, DEFAULT_SCATTER_RADIUS_KM};
use clap::Parser;
use std::net::SocketAddr;
use url::Url;
#[cfg(test)]
pub mod tests;

#[derive(Debug, Parser)]
pub struct Args {
    #[arg(long)]
    #[arg(default_value = "0.0.0.0:3030")]
    pub listen_address: SocketAddr,
    #[arg(long)]
    #[arg(default_value = "https://api.chances.com.ar:4101/api/professions")]
    pub professions_api_url: Url,
    #[arg(long)]
    #[arg(default_value_t = DEFAULT_SCATTER_RADIUS_KM)]
    pub scatter_radius_km: f64,
    #[arg(long)]
    #[arg(default_value_t = DEFAULT_MARKER_COUNT)]
    pub marker_count: usize,
}
