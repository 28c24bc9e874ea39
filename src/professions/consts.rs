use std::time::Duration;

/// How long to wait for the upstream professions API before serving the
/// fallback list.
pub const UPSTREAM_TIMEOUT: Duration = Duration::from_secs(5);
