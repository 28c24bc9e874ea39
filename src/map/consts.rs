/// Mean Earth radius in meters, used by the haversine distance.
pub const EARTH_RADIUS: f64 = 6371e3;

/// Kilometers spanned by one degree of latitude.
pub const KM_PER_DEGREE_LAT: f64 = 111.32;

/// How many professional markers the map widget shows by default.
pub const DEFAULT_MARKER_COUNT: usize = 5;

/// Default scatter radius around the visitor's location, in kilometers.
pub const DEFAULT_SCATTER_RADIUS_KM: f64 = 2.0;
