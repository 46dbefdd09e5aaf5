//! API route definitions
//!
//! - /health - liveness and served variants
//! - /api/v1/efficiency/variants - baselines per variant
//! - /api/v1/efficiency/rates - skill or boss rates of a variant
//! - /api/v1/efficiency/compute - every metric for a snapshot
//! - /api/v1/efficiency/skills/:skill - one skill's contribution
//! - /api/v1/efficiency/bosses/:boss - one boss's contribution

use axum::{
    routing::{get, post},
    Router,
};

use super::handlers::{self, EfficiencyState};

/// Efficiency endpoints, nested under `/api/v1/efficiency`
pub fn efficiency_routes(state: EfficiencyState) -> Router {
    Router::new()
        .route("/variants", get(handlers::get_variants))
        .route("/rates", get(handlers::get_rates))
        .route("/compute", post(handlers::compute_efficiency))
        .route("/skills/:skill", post(handlers::compute_skill_ehp))
        .route("/bosses/:boss", post(handlers::compute_boss_ehb))
        .with_state(state)
}

/// Health endpoint at root level
pub fn health_routes(state: EfficiencyState) -> Router {
    Router::new()
        .route("/health", get(handlers::get_health))
        .with_state(state)
}
