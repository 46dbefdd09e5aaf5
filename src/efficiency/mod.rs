//! Efficiency Engine
//!
//! Converts raw progress (experience per skill, kill count per boss) into
//! hours of optimal play.
//!
//! ## Layers
//!
//! - `bonuses`: cross-skill bonus experience for a snapshot
//! - `integrator`: TT200m, hours left to the experience ceiling
//! - `algorithm`: EHP, TTM, per-skill EHP, EHB for one variant
//! - `variants`: one algorithm per variant, built once at startup

pub mod algorithm;
pub mod bonuses;
pub mod integrator;
pub mod variants;

pub use algorithm::{EfficiencyAlgorithm, EfficiencyMap};
pub use bonuses::{calculate_bonuses, BonusMap};
pub use variants::{select_variant, VariantCache};

/// Round to `places` decimal places, half away from zero.
pub fn round_to(value: f64, places: i32) -> f64 {
    let factor = 10f64.powi(places);
    (value * factor).round() / factor
}

/// Round a derived hour value and clamp it at zero.
///
/// Differences of rounded values can land a hair below zero; those (and
/// `-0.0` or NaN) read as `0`.
pub(crate) fn non_negative_hours(value: f64) -> f64 {
    let rounded = round_to(value, crate::config::defaults::PRECISION);
    if rounded > 0.0 {
        rounded
    } else {
        0.0
    }
}
