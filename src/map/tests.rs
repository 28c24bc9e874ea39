use crate::map::consts::KM_PER_DEGREE_LAT;
use crate::map::errors::GeoError;
use crate::map::models::LatLng;
use crate::map::rng::{RandomSource, ThreadRandom};
use crate::map::{distance_meters, pick, scatter};

/// Replays a fixed sequence of unit floats, cycling when exhausted.
pub struct ScriptedRandom {
    values: Vec<f64>,
    cursor: usize,
}

impl ScriptedRandom {
    pub fn new(values: &[f64]) -> Self {
        Self {
            values: values.to_vec(),
            cursor: 0,
        }
    }
}

impl RandomSource for ScriptedRandom {
    fn next_unit(&mut self) -> f64 {
        let value = self.values[self.cursor % self.values.len()];
        self.cursor += 1;
        value
    }
}

const BUENOS_AIRES: LatLng = LatLng {
    lat: -34.603722,
    lng: -58.381592,
};

#[test]
fn test_scatter_returns_requested_number_of_points() {
    let mut rng = ThreadRandom;

    for count in [0, 1, 5, 42] {
        let points = scatter(BUENOS_AIRES, count, 2.0, &mut rng).unwrap();
        assert_eq!(points.len(), count);
    }
}

#[test]
fn test_scatter_with_zero_count_returns_empty_vec() {
    let mut rng = ScriptedRandom::new(&[0.5]);

    let points = scatter(BUENOS_AIRES, 0, 2.0, &mut rng).unwrap();

    assert!(points.is_empty());
}

#[test]
fn test_scatter_rejects_non_positive_radius() {
    let mut rng = ThreadRandom;

    for radius_km in [0.0, -1.0, f64::NAN] {
        let result = scatter(BUENOS_AIRES, 3, radius_km, &mut rng);
        assert!(matches!(result, Err(GeoError::InvalidRadius(_))));
    }
}

#[test]
fn test_scattered_points_stay_within_radius() {
    let mut rng = ThreadRandom;
    let radius_km = 2.0;

    let points = scatter(BUENOS_AIRES, 200, radius_km, &mut rng).unwrap();

    // The longitude correction is a planar approximation, so allow a small
    // overshoot over the nominal great-circle radius.
    let max_distance = radius_km * 1000.0 * 1.05;
    for point in points {
        assert!(distance_meters(BUENOS_AIRES, point) <= max_distance);
    }
}

#[test]
fn test_scatter_matches_reference_arithmetic() {
    let pairs = [0.5, 0.0, 0.25, 0.25, 0.81, 0.5, 0.0, 0.75];
    let mut rng = ScriptedRandom::new(&pairs);

    let points = scatter(BUENOS_AIRES, 4, 2.0, &mut rng).unwrap();

    // First pair: u = 0.5, v = 0.0 puts the point due east of the center.
    let radius_deg = 2.0 / KM_PER_DEGREE_LAT;
    let w = radius_deg * 0.5_f64.sqrt();
    let lng_scale = (BUENOS_AIRES.lat * std::f64::consts::PI / 180.0).cos();
    let expected_lng = BUENOS_AIRES.lng + w / lng_scale;
    assert!((points[0].lat - BUENOS_AIRES.lat).abs() < 1e-12);
    assert!((points[0].lng - expected_lng).abs() < 1e-9);
    assert!((points[0].lng + 58.36616).abs() < 1e-4);

    // Second pair: t = π/2 puts the point due north.
    let expected_lat = BUENOS_AIRES.lat + radius_deg * 0.25_f64.sqrt();
    assert!((points[1].lat - expected_lat).abs() < 1e-9);
    assert!((points[1].lng - BUENOS_AIRES.lng).abs() < 1e-9);

    // Third pair: t = π puts the point due west.
    assert!(points[2].lng < BUENOS_AIRES.lng);
    assert!((points[2].lat - BUENOS_AIRES.lat).abs() < 1e-9);

    // Fourth pair: u = 0 collapses onto the center itself.
    assert!((points[3].lat - BUENOS_AIRES.lat).abs() < 1e-12);
    assert!((points[3].lng - BUENOS_AIRES.lng).abs() < 1e-12);
}

#[test]
fn test_scatter_is_reproducible_with_the_same_script() {
    let pairs = [0.1, 0.9, 0.33, 0.66, 0.5, 0.5];

    let first = scatter(BUENOS_AIRES, 3, 2.0, &mut ScriptedRandom::new(&pairs)).unwrap();
    let second = scatter(BUENOS_AIRES, 3, 2.0, &mut ScriptedRandom::new(&pairs)).unwrap();

    assert_eq!(first, second);
}

#[test]
fn test_pick_single_candidate_always_wins() {
    let candidates = ["plomero"];

    for unit in [0.0, 0.5, 0.999] {
        let picked = pick(&candidates, &mut ScriptedRandom::new(&[unit])).unwrap();
        assert_eq!(picked.index, 0);
        assert_eq!(*picked.item, "plomero");
    }
}

#[test]
fn test_pick_from_empty_list_fails() {
    let candidates: [&str; 0] = [];

    let result = pick(&candidates, &mut ScriptedRandom::new(&[0.5]));

    assert_eq!(result.unwrap_err(), GeoError::NoCandidates);
}

#[test]
fn test_pick_maps_unit_floats_onto_indices() {
    let candidates = ["a", "b", "c"];

    let picked = pick(&candidates, &mut ScriptedRandom::new(&[0.5])).unwrap();
    assert_eq!(picked.index, 1);
    assert_eq!(*picked.item, "b");

    let picked = pick(&candidates, &mut ScriptedRandom::new(&[0.0])).unwrap();
    assert_eq!(picked.index, 0);

    let picked = pick(&candidates, &mut ScriptedRandom::new(&[0.999_999])).unwrap();
    assert_eq!(picked.index, 2);
}

#[test]
fn test_scatter_and_pick_share_one_source() {
    let candidates = ["a", "b", "c"];
    // Three (u, v) pairs for the scatter, then one draw for the pick.
    let script = [0.5, 0.0, 0.25, 0.25, 0.81, 0.5, 0.5];
    let mut rng = ScriptedRandom::new(&script);

    let points = scatter(BUENOS_AIRES, candidates.len(), 2.0, &mut rng).unwrap();
    let picked = pick(&candidates, &mut rng).unwrap();

    assert_eq!(points.len(), candidates.len());
    assert_eq!(picked.index, 1);
    assert_eq!(*picked.item, "b");
}

#[test]
fn test_lat_lng_serializes_the_way_the_widget_expects() {
    let point = LatLng { lat: 1.5, lng: -2.25 };

    let as_json = serde_json::to_string(&point).unwrap();

    assert_eq!(as_json, r#"{"lat":1.5,"lng":-2.25}"#);
}

#[test]
fn test_distance_between_identical_points_is_zero() {
    assert_eq!(distance_meters(BUENOS_AIRES, BUENOS_AIRES), 0.0);
}
