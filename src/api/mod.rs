//! REST API module using Axum
//!
//! Read-only HTTP surface over the efficiency engine. Every response uses
//! the envelope in [`envelope`].

pub mod envelope;
pub mod handlers;
mod routes;

pub use handlers::EfficiencyState;

use std::sync::Arc;

use axum::http::{header, Method};
use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::efficiency::VariantCache;

/// Build a CORS layer that is restrictive by default (same-origin only).
///
/// Set `EFFICIENCY_CORS_ORIGINS` to a comma-separated list of allowed origins
/// to let browser clients on other hosts call the API.
fn build_cors_layer() -> CorsLayer {
    let base = CorsLayer::new()
        .allow_methods([Method::GET, Method::POST])
        .allow_headers([header::CONTENT_TYPE]);

    match std::env::var("EFFICIENCY_CORS_ORIGINS") {
        Ok(origins) => {
            let allowed: Vec<_> = origins
                .split(',')
                .filter_map(|o| o.trim().parse().ok())
                .collect();
            tracing::info!(origins = %origins, "CORS: allowing configured origins");
            base.allow_origin(allowed)
        }
        Err(_) => base,
    }
}

/// Create the complete application router.
pub fn create_app(cache: Arc<VariantCache>) -> Router {
    let state = EfficiencyState::new(cache);

    Router::new()
        .nest("/api/v1/efficiency", routes::efficiency_routes(state.clone()))
        .merge(routes::health_routes(state))
        .layer(TraceLayer::new_for_http())
        .layer(build_cors_layer())
}
