use serde::{Deserialize, Serialize};

#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct LatLng {
    pub lat: f64,
    pub lng: f64,
}

/// One candidate chosen out of a list, together with its position in that
/// list so callers can line it up with index-aligned data.
#[derive(Debug, PartialEq)]
pub struct Picked<'a, T> {
    pub index: usize,
    pub item: &'a T,
}
