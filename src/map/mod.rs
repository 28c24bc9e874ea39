use crate::map::consts::{EARTH_RADIUS, KM_PER_DEGREE_LAT};
use crate::map::errors::GeoError;
use crate::map::models::{LatLng, Picked};
use crate::map::rng::RandomSource;

pub mod consts;
pub mod errors;
pub mod models;
pub mod rng;
#[cfg(test)]
pub mod tests;

/// Scatters `count` points approximately uniformly over a disk of
/// `radius_km` kilometers around `center`.
///
/// The longitude offset is divided by the cosine of the center latitude to
/// compensate for meridian convergence. This is a planar approximation; it
/// only holds for small radii and degrades near the poles.
pub fn scatter(
    center: LatLng,
    count: usize,
    radius_km: f64,
    rng: &mut impl RandomSource,
) -> Result<Vec<LatLng>, GeoError> {
    if !(radius_km > 0.0) {
        return Err(GeoError::InvalidRadius(radius_km));
    }
    let radius_deg = radius_km / KM_PER_DEGREE_LAT;
    let lng_scale = (center.lat * std::f64::consts::PI / 180.0).cos();
    let mut points = Vec::with_capacity(count);
    for _ in 0..count {
        let u = rng.next_unit();
        let v = rng.next_unit();
        // The square root keeps the distribution uniform over the disk area
        // rather than clustered at the center.
        let w = radius_deg * u.sqrt();
        let t = 2.0 * std::f64::consts::PI * v;
        let dx = w * t.cos();
        let dy = w * t.sin();
        points.push(LatLng {
            lat: center.lat + dy,
            lng: center.lng + dx / lng_scale,
        });
    }
    Ok(points)
}

/// Picks one candidate uniformly at random. The index mapping is
/// `floor(u * n)`; the clamp guards against the product rounding up to `n`
/// for `u` just below one.
pub fn pick<'a, T>(
    candidates: &'a [T],
    rng: &mut impl RandomSource,
) -> Result<Picked<'a, T>, GeoError> {
    if candidates.is_empty() {
        return Err(GeoError::NoCandidates);
    }
    let index =
        ((rng.next_unit() * candidates.len() as f64) as usize).min(candidates.len() - 1);
    Ok(Picked {
        index,
        item: &candidates[index],
    })
}

/// Great-circle distance between two points, in meters (haversine formula).
pub fn distance_meters(from: LatLng, to: LatLng) -> f64 {
    let phi_1 = from.lat * std::f64::consts::PI / 180.0;
    let phi_2 = to.lat * std::f64::consts::PI / 180.0;
    let delta_phi = (to.lat - from.lat) * std::f64::consts::PI / 180.0;
    let delta_lambda = (to.lng - from.lng) * std::f64::consts::PI / 180.0;
    let h = (delta_phi / 2.0).sin().powi(2)
        + phi_1.cos() * phi_2.cos() * (delta_lambda / 2.0).sin().powi(2);
    let c = 2.0 * (h.sqrt().atan2((1.0 - h).sqrt()));
    EARTH_RADIUS * c
}
