//! Variant cache and player-to-variant selection

use std::path::Path;
use tracing::info;

use crate::rates::{self, RateTableError};
use crate::types::{AlgorithmVariant, PlayerBuild, PlayerType, RateTable};

use super::EfficiencyAlgorithm;

/// Pick the rate-table variant for a player.
///
/// Account type wins over build: an ultimate f2p account uses ultimate rates.
pub const fn select_variant(player_type: PlayerType, build: PlayerBuild) -> AlgorithmVariant {
    match (player_type, build) {
        (PlayerType::Ultimate, _) => AlgorithmVariant::Ultimate,
        (PlayerType::Ironman | PlayerType::Hardcore, _) => AlgorithmVariant::Ironman,
        (_, PlayerBuild::F2p) => AlgorithmVariant::F2p,
        (_, PlayerBuild::Lvl3) => AlgorithmVariant::Lvl3,
        _ => AlgorithmVariant::Main,
    }
}

/// One immutable `EfficiencyAlgorithm` per variant.
///
/// Built once before serving and shared read-only afterwards.
#[derive(Debug)]
pub struct VariantCache {
    // Indexed by `AlgorithmVariant::index`; always holds every variant.
    algorithms: Vec<EfficiencyAlgorithm>,
}

impl VariantCache {
    /// Load and validate every rate table, from `dir` when given.
    ///
    /// Fails on the first variant whose table does not validate.
    pub fn build(dir: Option<&Path>) -> Result<Self, RateTableError> {
        let tables = rates::load_all(dir)?;
        Ok(Self::from_tables(tables))
    }

    /// Cache over the rate tables compiled into the binary.
    pub fn embedded() -> Result<Self, RateTableError> {
        Self::build(None)
    }

    fn from_tables(tables: Vec<RateTable>) -> Self {
        let algorithms = tables
            .into_iter()
            .map(|table| {
                let algo = EfficiencyAlgorithm::new(table);
                info!(
                    variant = %algo.variant(),
                    maximum_ehp = algo.maximum_ehp(),
                    maxed_ehp = algo.maxed_ehp(),
                    skills = algo.skill_rates().len(),
                    bosses = algo.boss_rates().len(),
                    "Efficiency variant ready"
                );
                algo
            })
            .collect();
        Self { algorithms }
    }

    pub fn get(&self, variant: AlgorithmVariant) -> &EfficiencyAlgorithm {
        &self.algorithms[variant.index()]
    }

    /// The algorithm that applies to a player of this type and build.
    pub fn for_player(&self, player_type: PlayerType, build: PlayerBuild) -> &EfficiencyAlgorithm {
        self.get(select_variant(player_type, build))
    }

    pub fn iter(&self) -> impl Iterator<Item = &EfficiencyAlgorithm> + '_ {
        self.algorithms.iter()
    }
}
