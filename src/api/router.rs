//! API router.
//!
//! Returns a composable `Router` that can be mounted on any axum server.
//! Routes are nested under `/api/`. The service is meant for a trusted
//! local network; CORS is open so browser clients can reach it directly.

use axum::routing::{delete, get, post};
use axum::Router;
use tower_http::cors::CorsLayer;

use crate::api::endpoints;
use crate::api::types::ApiContext;

/// Build the triage API router.
///
/// Endpoint handlers use `State<ApiContext>` (provided via `with_state`).
///
/// NOTE: Path params use `:param` syntax (matchit 0.7 / axum 0.7).
pub fn triage_api_router(ctx: ApiContext) -> Router {
    let api = Router::new()
        .route("/health", get(endpoints::health::check))
        .route("/symptoms", get(endpoints::symptoms::list))
        .route("/triage", post(endpoints::triage::score))
        .route("/triage/assess", post(endpoints::triage::assess))
        .route(
            "/cases",
            post(endpoints::cases::submit).get(endpoints::cases::list),
        )
        .route("/cases/:id", delete(endpoints::cases::remove))
        .route("/chat", post(endpoints::chat::send))
        .with_state(ctx);

    Router::new().nest("/api", api).layer(CorsLayer::permissive())
}
