use crate::app_context::AppContext;
use crate::professions::fallback::fallback_professions;
use crate::professions::models::Profession;
use axum::extract::State;
use axum::response::Json;

/// Lists professions for the search form dropdown. Never fails toward the
/// client: any upstream problem degrades to the static fallback list.
#[axum::debug_handler]
pub async fn list(State(app_context): State<AppContext>) -> Json<Vec<Profession>> {
    match fetch_upstream(&app_context).await {
        Ok(professions) if !professions.is_empty() => Json(professions),
        Ok(_) => {
            tracing::warn!("The upstream professions API returned an empty list.");
            Json(fallback_professions())
        }
        Err(err) => {
            tracing::warn!("Failed to fetch professions from the upstream API: {err}.");
            Json(fallback_professions())
        }
    }
}

async fn fetch_upstream(app_context: &AppContext) -> Result<Vec<Profession>, reqwest::Error> {
    let response = app_context
        .http_client
        .get(app_context.professions_api_url.clone())
        .send()
        .await?
        .error_for_status()?;
    response.json::<Vec<Profession>>().await
}
