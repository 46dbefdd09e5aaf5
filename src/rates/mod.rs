//! Rate Tables
//!
//! One TOML file per algorithm variant. The shipped tables are compiled into
//! the binary; a configured directory may replace any of them at startup.
//!
//! ## File Layout
//!
//! ```toml
//! variant = "main"
//!
//! [[skills]]
//! skill = "woodcutting"
//! methods = [ { start_exp = 0, rate = 7_000, description = "Normal trees" } ]
//! bonuses = [
//!   { origin_skill = "woodcutting", bonus_skill = "firemaking", start_exp = 302_288, end_exp = 200_000_000, end = true, ratio = 0.1 },
//! ]
//!
//! [[bosses]]
//! boss = "zulrah"
//! rate = 35
//! ```

mod validation;

use std::path::{Path, PathBuf};
use tracing::{debug, warn};

use crate::types::{AlgorithmVariant, RateTable};
use validation::RawRateFile;

// ============================================================================
// Error Type
// ============================================================================

#[derive(Debug, thiserror::Error)]
pub enum RateTableError {
    #[error("rate table I/O error ({}): {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("rate table parse error ({origin}): {source}")]
    Parse {
        origin: String,
        #[source]
        source: toml::de::Error,
    },

    #[error("invalid {variant} rate table:\n  - {}", .errors.join("\n  - "))]
    Validation {
        variant: AlgorithmVariant,
        errors: Vec<String>,
    },
}

// ============================================================================
// Embedded Tables
// ============================================================================

/// The rate table shipped with the binary for `variant`.
pub const fn embedded_source(variant: AlgorithmVariant) -> &'static str {
    match variant {
        AlgorithmVariant::Main => include_str!("../../rates/main.toml"),
        AlgorithmVariant::Ironman => include_str!("../../rates/ironman.toml"),
        AlgorithmVariant::Ultimate => include_str!("../../rates/ultimate.toml"),
        AlgorithmVariant::Lvl3 => include_str!("../../rates/lvl3.toml"),
        AlgorithmVariant::F2p => include_str!("../../rates/f2p.toml"),
    }
}

// ============================================================================
// Loading
// ============================================================================

/// Parse and validate rate-table text for `variant`.
///
/// `origin` names the source in error messages (a path or "embedded").
pub fn parse_rate_table(
    variant: AlgorithmVariant,
    origin: &str,
    text: &str,
) -> Result<RateTable, RateTableError> {
    let raw: RawRateFile = toml::from_str(text).map_err(|source| RateTableError::Parse {
        origin: origin.to_string(),
        source,
    })?;
    validation::resolve(raw, variant).map_err(|errors| RateTableError::Validation { variant, errors })
}

pub fn load_embedded(variant: AlgorithmVariant) -> Result<RateTable, RateTableError> {
    parse_rate_table(variant, "embedded", embedded_source(variant))
}

/// Load `<dir>/<variant>.toml`, falling back to the embedded table when the
/// file does not exist. A file that exists but fails to load is an error.
pub fn load_from_dir(variant: AlgorithmVariant, dir: &Path) -> Result<RateTable, RateTableError> {
    let path = dir.join(variant.file_name());
    if !path.exists() {
        warn!(
            variant = %variant,
            path = %path.display(),
            "No rate table override found, using embedded table"
        );
        return load_embedded(variant);
    }

    let text = std::fs::read_to_string(&path).map_err(|source| RateTableError::Io {
        path: path.clone(),
        source,
    })?;
    let table = parse_rate_table(variant, &path.display().to_string(), &text)?;
    debug!(variant = %variant, path = %path.display(), "Loaded rate table override");
    Ok(table)
}

/// Load every variant's table, from `dir` when given.
pub fn load_all(dir: Option<&Path>) -> Result<Vec<RateTable>, RateTableError> {
    AlgorithmVariant::ALL
        .iter()
        .map(|&variant| match dir {
            Some(d) => load_from_dir(variant, d),
            None => load_embedded(variant),
        })
        .collect()
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Boss, Skill};

    #[test]
    fn test_all_embedded_tables_validate() {
        for variant in AlgorithmVariant::ALL {
            let table = load_embedded(variant)
                .unwrap_or_else(|e| panic!("{variant} failed to load: {e}"));
            assert_eq!(table.variant, variant);
            assert_eq!(table.skills.len(), 23);
        }
    }

    #[test]
    fn test_main_boss_rates() {
        let table = load_embedded(AlgorithmVariant::Main).unwrap();
        assert_eq!(table.boss(Boss::Cerberus).map(|b| b.rate), Some(61.0));
        assert_eq!(table.boss(Boss::Nex).map(|b| b.rate), Some(12.0));
        assert_eq!(table.boss(Boss::TzkalZuk).map(|b| b.rate), Some(0.8));
        assert_eq!(table.boss(Boss::Zulrah).map(|b| b.rate), Some(35.0));
    }

    #[test]
    fn test_hitpoints_is_zero_time_on_main() {
        let table = load_embedded(AlgorithmVariant::Main).unwrap();
        assert!(table.skill(Skill::Hitpoints).is_some_and(|m| m.is_zero_time()));
        assert!(!table.skill(Skill::Woodcutting).is_some_and(|m| m.is_zero_time()));
    }

    #[test]
    fn test_parse_error_names_origin() {
        let err = parse_rate_table(AlgorithmVariant::Main, "broken.toml", "variant = ").unwrap_err();
        assert!(matches!(err, RateTableError::Parse { .. }));
        assert!(err.to_string().contains("broken.toml"));
    }

    #[test]
    fn test_unknown_top_level_key_is_parse_error() {
        let err = parse_rate_table(AlgorithmVariant::Main, "x", "variant = \"main\"\nextra = 1\n")
            .unwrap_err();
        assert!(matches!(err, RateTableError::Parse { .. }));
    }
}
