//! System-wide default constants.
//!
//! Grouped by subsystem for easy discovery.

// ============================================================================
// Progress Model
// ============================================================================

/// Experience ceiling of a single skill.
pub const MAX_EXP: u64 = 200_000_000;

/// Experience at level 99, the "maxed" threshold for time-to-max.
pub const LEVEL_99_EXP: u64 = 13_034_431;

/// Decimal places kept on every reported hour value.
pub const PRECISION: i32 = 5;

// ============================================================================
// Service
// ============================================================================

/// Listen address of the HTTP API when nothing else is configured.
pub const DEFAULT_SERVER_ADDR: &str = "0.0.0.0:5000";

/// Log filter used when `RUST_LOG` is unset and the config names none.
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// Environment variable naming the service configuration file.
pub const CONFIG_ENV_VAR: &str = "EFFICIENCY_CONFIG";

/// Configuration file looked up in the working directory.
pub const CONFIG_FILE_NAME: &str = "efficiency.toml";

/// API version reported in response envelopes.
pub const API_VERSION: &str = "v1";
