//! Efficiency computation endpoints

use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::response::Response;
use axum::Json;
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::EfficiencyState;
use crate::api::envelope::{ApiErrorResponse, ApiResponse};
use crate::efficiency::{EfficiencyAlgorithm, EfficiencyMap};
use crate::types::{AlgorithmVariant, Boss, ExperienceMap, KillcountMap, PlayerBuild, PlayerType, Skill};

// ============================================================================
// Request
// ============================================================================

/// Snapshot submitted for computation.
///
/// Every field is optional: a missing type/build selects the main variant and
/// missing maps read as all zero.
#[derive(Debug, Default, Deserialize)]
pub struct ComputeRequest {
    #[serde(rename = "type")]
    pub player_type: Option<String>,
    pub build: Option<String>,
    #[serde(default)]
    pub experience: ExperienceMap,
    #[serde(default)]
    pub killcounts: KillcountMap,
}

impl ComputeRequest {
    fn classification(&self) -> Result<(PlayerType, PlayerBuild), String> {
        let player_type = match self.player_type.as_deref() {
            Some(t) => t.parse::<PlayerType>().map_err(|e| e.to_string())?,
            None => PlayerType::default(),
        };
        let build = match self.build.as_deref() {
            Some(b) => b.parse::<PlayerBuild>().map_err(|e| e.to_string())?,
            None => PlayerBuild::default(),
        };
        Ok((player_type, build))
    }
}

/// Unwrap the body and pick the algorithm, or produce the 400 response.
fn resolve<'a>(
    state: &'a EfficiencyState,
    body: Result<Json<ComputeRequest>, JsonRejection>,
) -> Result<(&'a EfficiencyAlgorithm, ComputeRequest), Response> {
    let Json(request) = body.map_err(|e| ApiErrorResponse::bad_request(e.body_text()))?;
    let (player_type, build) = request.classification().map_err(ApiErrorResponse::bad_request)?;
    let algo = state.cache.for_player(player_type, build);
    debug!(%player_type, %build, variant = %algo.variant(), "Selected efficiency variant");
    Ok((algo, request))
}

// ============================================================================
// Responses
// ============================================================================

#[derive(Debug, Serialize)]
pub struct ComputeResponse {
    pub variant: AlgorithmVariant,
    #[serde(flatten)]
    pub map: EfficiencyMap,
}

#[derive(Debug, Serialize)]
pub struct SkillEhpResponse {
    pub variant: AlgorithmVariant,
    pub skill: Skill,
    pub ehp: f64,
}

#[derive(Debug, Serialize)]
pub struct BossEhbResponse {
    pub variant: AlgorithmVariant,
    pub boss: Boss,
    pub ehb: f64,
}

// ============================================================================
// Handlers
// ============================================================================

/// POST /api/v1/efficiency/compute - Every metric for one snapshot
pub async fn compute_efficiency(
    State(state): State<EfficiencyState>,
    body: Result<Json<ComputeRequest>, JsonRejection>,
) -> Response {
    let (algo, request) = match resolve(&state, body) {
        Ok(r) => r,
        Err(resp) => return resp,
    };
    ApiResponse::ok(ComputeResponse {
        variant: algo.variant(),
        map: algo.efficiency_map(&request.experience, &request.killcounts),
    })
}

/// POST /api/v1/efficiency/skills/:skill - Hours contributed by one skill
pub async fn compute_skill_ehp(
    State(state): State<EfficiencyState>,
    Path(skill): Path<String>,
    body: Result<Json<ComputeRequest>, JsonRejection>,
) -> Response {
    let skill = match skill.parse::<Skill>() {
        Ok(s) => s,
        Err(e) => return ApiErrorResponse::not_found(e.to_string()),
    };
    let (algo, request) = match resolve(&state, body) {
        Ok(r) => r,
        Err(resp) => return resp,
    };
    ApiResponse::ok(SkillEhpResponse {
        variant: algo.variant(),
        skill,
        ehp: algo.skill_ehp(skill, &request.experience),
    })
}

/// POST /api/v1/efficiency/bosses/:boss - Hours bossed at one boss
pub async fn compute_boss_ehb(
    State(state): State<EfficiencyState>,
    Path(boss): Path<String>,
    body: Result<Json<ComputeRequest>, JsonRejection>,
) -> Response {
    let boss = match boss.parse::<Boss>() {
        Ok(b) => b,
        Err(e) => return ApiErrorResponse::not_found(e.to_string()),
    };
    let (algo, request) = match resolve(&state, body) {
        Ok(r) => r,
        Err(resp) => return resp,
    };
    ApiResponse::ok(BossEhbResponse {
        variant: algo.variant(),
        boss,
        ehb: algo.boss_ehb(boss, &request.killcounts),
    })
}
