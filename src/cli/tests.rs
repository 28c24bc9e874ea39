use crate::cli::Args;
use crate::map::consts::{DEFAULT_MARKER_COUNT, DEFAULT_SCATTER_RADIUS_KM};
use std::{net::SocketAddr, str::FromStr};
use url::Url;

pub fn fake_args() -> Args {
    Args {
        listen_address: SocketAddr::from_str("0.0.0.0:3030")
            .expect("Failed to construct fake listen address."),
        // Port 9 is the discard service, so upstream calls fail fast in tests.
        professions_api_url: Url::from_str("http://127.0.0.1:9/api/professions")
            .expect("Failed to construct fake professions API URL."),
        scatter_radius_km: DEFAULT_SCATTER_RADIUS_KM,
        marker_count: DEFAULT_MARKER_COUNT,
    }
}
