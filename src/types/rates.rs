//! Rate-table records: training methods, bonuses, skill and boss metadata

use serde::{Deserialize, Serialize};

use super::metric::{Boss, Skill};
use super::player::AlgorithmVariant;

/// One training segment of a skill.
///
/// The segment covers `[start_exp, next.start_exp)`; the last segment of a
/// skill is open-ended. `rate` is experience per hour, `0` marks a segment
/// that cannot be trained directly.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrainingMethod {
    pub start_exp: u64,
    pub rate: f64,
    #[serde(default)]
    pub description: String,
}

/// Cross-skill experience transfer.
///
/// Training `origin_skill` inside `[start_exp, end_exp)` credits `ratio`
/// experience to `bonus_skill` per unit trained, up to `max_bonus`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Bonus {
    pub origin_skill: Skill,
    pub bonus_skill: Skill,
    pub start_exp: u64,
    pub end_exp: u64,
    /// `false` credits the target's start position, `true` reduces its target.
    pub end: bool,
    pub ratio: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_bonus: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SkillMeta {
    pub skill: Skill,
    pub methods: Vec<TrainingMethod>,
    #[serde(default)]
    pub bonuses: Vec<Bonus>,
}

impl SkillMeta {
    /// A skill with a single zero-rate method only progresses through bonuses.
    pub fn is_zero_time(&self) -> bool {
        matches!(self.methods.as_slice(), [only] if only.rate == 0.0)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BossMeta {
    pub boss: Boss,
    /// Kills per hour; `0` when there is no tracked method.
    pub rate: f64,
}

/// A validated, immutable rate table for one variant.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RateTable {
    pub variant: AlgorithmVariant,
    pub skills: Vec<SkillMeta>,
    pub bosses: Vec<BossMeta>,
}

impl RateTable {
    pub fn skill(&self, skill: Skill) -> Option<&SkillMeta> {
        self.skills.iter().find(|m| m.skill == skill)
    }

    pub fn boss(&self, boss: Boss) -> Option<&BossMeta> {
        self.bosses.iter().find(|m| m.boss == boss)
    }

    /// Bonuses of one kind in declaration order: skill order, then bonus
    /// order within the skill.
    pub fn bonuses(&self, end: bool) -> impl Iterator<Item = &Bonus> + '_ {
        self.skills
            .iter()
            .flat_map(|m| m.bonuses.iter())
            .filter(move |b| b.end == end)
    }
}
