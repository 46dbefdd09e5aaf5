//! Efficiency Engine: hours of optimal play from raw game progress
//!
//! Expresses experience per skill and kill count per boss as efficient hours
//! played (EHP) and efficient hours bossed (EHB).
//!
//! ## Architecture
//!
//! - **Rate Tables**: per-variant training methods, bonuses and boss rates,
//!   loaded from TOML and validated at startup
//! - **Efficiency**: bonus propagation, TT200m integration and the derived
//!   metrics (EHP, TTM, per-skill EHP, EHB)
//! - **API**: read-only HTTP surface over the variant cache
//! - **Config**: service settings (listen address, rates directory, logging)

pub mod api;
pub mod config;
pub mod efficiency;
pub mod rates;
pub mod types;

// Re-export configuration
pub use config::EngineConfig;

// Re-export the engine entry points
pub use efficiency::{select_variant, EfficiencyAlgorithm, EfficiencyMap, VariantCache};
pub use rates::RateTableError;

// Re-export commonly used types
pub use types::{
    AlgorithmVariant, Boss, ExperienceMap, KillcountMap, PlayerBuild, PlayerType, Skill, Snapshot,
};
