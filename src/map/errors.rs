use std::error::Error;
use std::fmt;

#[derive(Copy, Clone, Debug, PartialEq)]
pub enum GeoError {
    /// The scatter radius must be a positive number of kilometers.
    InvalidRadius(f64),
    /// Picking from an empty candidate list has no valid index.
    NoCandidates,
}

impl fmt::Display for GeoError {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GeoError::InvalidRadius(radius_km) => {
                write!(formatter, "Scatter radius must be positive, got {radius_km} km.")
            }
            GeoError::NoCandidates => {
                write!(formatter, "Cannot pick from an empty candidate list.")
            }
        }
    }
}

impl Error for GeoError {}
