//! Health, variant and rate-table endpoints

use axum::extract::{Query, State};
use axum::response::Response;
use serde::{Deserialize, Serialize};

use super::EfficiencyState;
use crate::api::envelope::{ApiErrorResponse, ApiResponse};
use crate::types::AlgorithmVariant;

// ============================================================================
// Health
// ============================================================================

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub variants: Vec<AlgorithmVariant>,
}

/// GET /health - Liveness plus the variants this instance serves
pub async fn get_health(State(state): State<EfficiencyState>) -> Response {
    ApiResponse::ok(HealthResponse {
        status: "ok",
        variants: state.cache.iter().map(|a| a.variant()).collect(),
    })
}

// ============================================================================
// Variants
// ============================================================================

#[derive(Debug, Serialize)]
pub struct VariantSummary {
    pub name: AlgorithmVariant,
    pub maximum_ehp: f64,
    pub maxed_ehp: f64,
    pub skills: usize,
    pub bosses: usize,
}

/// GET /api/v1/efficiency/variants - Baselines for every variant
pub async fn get_variants(State(state): State<EfficiencyState>) -> Response {
    let summaries: Vec<VariantSummary> = state
        .cache
        .iter()
        .map(|a| VariantSummary {
            name: a.variant(),
            maximum_ehp: a.maximum_ehp(),
            maxed_ehp: a.maxed_ehp(),
            skills: a.skill_rates().len(),
            bosses: a.boss_rates().len(),
        })
        .collect();
    ApiResponse::ok(summaries)
}

// ============================================================================
// Rates
// ============================================================================

/// Query for the rates endpoint
#[derive(Debug, Default, Deserialize)]
pub struct RatesQuery {
    /// `ehp` (skill rates, default) or `ehb` (boss rates)
    pub metric: Option<String>,
    /// Variant name, default `main`
    #[serde(rename = "type")]
    pub variant: Option<String>,
}

/// GET /api/v1/efficiency/rates?metric=ehp|ehb&type=<variant>
pub async fn get_rates(
    State(state): State<EfficiencyState>,
    Query(query): Query<RatesQuery>,
) -> Response {
    let variant = match query.variant.as_deref().map(str::parse::<AlgorithmVariant>) {
        None => AlgorithmVariant::Main,
        Some(Ok(v)) => v,
        Some(Err(e)) => return ApiErrorResponse::bad_request(e.to_string()),
    };
    let algo = state.cache.get(variant);

    match query.metric.as_deref().unwrap_or("ehp") {
        "ehp" => ApiResponse::ok(algo.skill_rates()),
        "ehb" => ApiResponse::ok(algo.boss_rates()),
        other => ApiErrorResponse::bad_request(format!(
            "unknown metric '{other}' (expected one of: ehp, ehb)"
        )),
    }
}
