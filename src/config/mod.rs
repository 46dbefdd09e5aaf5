//! Engine Configuration Module
//!
//! Service settings loaded from TOML: listen address, rate-table override
//! directory and log output.
//!
//! ## Loading Order
//!
//! 1. `EFFICIENCY_CONFIG` environment variable (path to TOML file)
//! 2. `efficiency.toml` in the current working directory
//! 3. Built-in defaults
//!
//! The loaded `EngineConfig` is passed to whatever needs it; there is no
//! process-wide instance.

mod engine_config;
pub mod defaults;
pub mod validation;

pub use engine_config::*;
