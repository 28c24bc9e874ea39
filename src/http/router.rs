use crate::app_context::AppContext;
use crate::http::{cors, middleware};
use crate::{health, professionals, professions};
use axum::routing::get;
use axum::Router;

pub fn new(app_context: AppContext) -> Router {
    let cors_policy = cors();
    tracing::info!("Initialized HTTP configuration.");

    let health_routes = Router::new().route("/check", get(health::handlers::healthcheck));
    let professions_routes = Router::new().route("/", get(professions::handlers::list));
    let professionals_routes =
        Router::new().route("/nearby", get(professionals::handlers::nearby));

    Router::new()
        .nest("/health", health_routes)
        .nest("/professions", professions_routes)
        .nest("/professionals", professionals_routes)
        .with_state(app_context)
        .layer(cors_policy)
        .layer(axum::middleware::from_fn(middleware::tracing))
}
