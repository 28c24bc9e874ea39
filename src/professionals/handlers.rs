use crate::app_context::AppContext;
use crate::map;
use crate::map::models::LatLng;
use crate::map::rng::ThreadRandom;
use crate::professionals::models::demo_roster;
use crate::professionals::requests::NearbyQueryParams;
use crate::professionals::responses::{
    NearbyProfessional, NearbyProfessionalsError, NearbyProfessionalsResponse,
};
use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::Json;

/// Scatters demo professionals around the visitor's location and marks one
/// of them as matched, index-aligned so the widget can zip markers with
/// cards.
#[axum::debug_handler]
pub async fn nearby(
    State(app_context): State<AppContext>,
    Query(params): Query<NearbyQueryParams>,
) -> Result<Json<NearbyProfessionalsResponse>, (StatusCode, Json<NearbyProfessionalsError>)> {
    let center = LatLng {
        lat: params.lat,
        lng: params.lng,
    };
    let radius_km = params.radius_km.unwrap_or(app_context.scatter_radius_km);
    let roster = demo_roster();
    let count = params
        .count
        .unwrap_or(app_context.marker_count)
        .min(roster.len());

    let mut rng = ThreadRandom;
    let positions = map::scatter(center, count, radius_km, &mut rng).map_err(|err| {
        (
            StatusCode::UNPROCESSABLE_ENTITY,
            Json(NearbyProfessionalsError {
                error: true,
                reason: err.to_string(),
            }),
        )
    })?;
    let candidates = &roster[..count];
    // With zero candidates there is nothing to highlight.
    let matched_index = map::pick(candidates, &mut rng).ok().map(|picked| picked.index);

    let professionals = candidates
        .iter()
        .zip(positions)
        .enumerate()
        .map(|(index, (professional, position))| NearbyProfessional {
            professional: professional.clone(),
            distance_meters: map::distance_meters(center, position),
            position,
            matched: Some(index) == matched_index,
        })
        .collect();

    Ok(Json(NearbyProfessionalsResponse {
        error: false,
        professionals,
    }))
}
