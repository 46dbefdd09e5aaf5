//! API route handlers
//!
//! Request handling logic for all API endpoints:
//! - Service health and variant baselines
//! - Rate tables per variant
//! - Efficiency computations for a submitted snapshot

mod compute;
mod rates;

pub use compute::*;
pub use rates::*;

use std::sync::Arc;

use crate::efficiency::VariantCache;

// ============================================================================
// API State
// ============================================================================

/// Shared state for API handlers
#[derive(Clone)]
pub struct EfficiencyState {
    /// Immutable per-variant algorithms, built before the server starts
    pub cache: Arc<VariantCache>,
}

impl EfficiencyState {
    pub fn new(cache: Arc<VariantCache>) -> Self {
        Self { cache }
    }
}
