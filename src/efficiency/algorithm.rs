//! Derived efficiency metrics for one variant
//!
//! Every metric is expressed through `tt200m`:
//!
//! - `EHP(s)        = maximum_ehp - TT200m(s)`
//! - `TTM(s)        = maxed_ehp - EHP(s capped at level 99)`
//! - `SkillEHP(k,s) = TT200m(s with k = 0) - TT200m(s)`
//! - `EHB(kc)       = sum of kc[boss] / rate[boss]`

use std::collections::BTreeMap;

use serde::Serialize;

use crate::config::defaults::{LEVEL_99_EXP, PRECISION};
use crate::types::{
    AlgorithmVariant, Boss, BossMeta, ExperienceMap, KillcountMap, RateTable, Skill, SkillMeta,
};

use super::integrator;
use super::{non_negative_hours, round_to};

/// Every metric for one snapshot, keyed by identifier.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EfficiencyMap {
    pub skills: BTreeMap<Skill, f64>,
    pub bosses: BTreeMap<Boss, f64>,
    pub ehp: f64,
    pub ehb: f64,
    pub ttm: f64,
    pub tt200m: f64,
}

/// A validated rate table plus the baselines derived from it.
///
/// Immutable once built; share it behind an `Arc`.
#[derive(Debug, Clone)]
pub struct EfficiencyAlgorithm {
    table: RateTable,
    maximum_ehp: f64,
    maxed_ehp: f64,
}

impl EfficiencyAlgorithm {
    pub fn new(table: RateTable) -> Self {
        let maximum_ehp = integrator::tt200m(&table, &ExperienceMap::new());
        let at_99 = ExperienceMap::uniform(Skill::trainable(), LEVEL_99_EXP as f64);
        let maxed_ehp = non_negative_hours(maximum_ehp - integrator::tt200m(&table, &at_99));

        Self { table, maximum_ehp, maxed_ehp }
    }

    pub fn variant(&self) -> AlgorithmVariant {
        self.table.variant
    }

    pub fn rate_table(&self) -> &RateTable {
        &self.table
    }

    pub fn skill_rates(&self) -> &[SkillMeta] {
        &self.table.skills
    }

    pub fn boss_rates(&self) -> &[BossMeta] {
        &self.table.bosses
    }

    /// Hours from nothing to `MAX_EXP` in every skill.
    pub fn maximum_ehp(&self) -> f64 {
        self.maximum_ehp
    }

    /// Hours from nothing to level 99 in every skill.
    pub fn maxed_ehp(&self) -> f64 {
        self.maxed_ehp
    }

    // ========================================================================
    // Skilling
    // ========================================================================

    pub fn tt200m(&self, experience: &ExperienceMap) -> f64 {
        integrator::tt200m(&self.table, experience)
    }

    /// Efficient hours played: training time already covered by `experience`.
    pub fn ehp(&self, experience: &ExperienceMap) -> f64 {
        non_negative_hours(self.maximum_ehp - self.tt200m(experience))
    }

    /// Time to max: hours until every skill reaches level 99.
    pub fn ttm(&self, experience: &ExperienceMap) -> f64 {
        let capped = experience.capped(LEVEL_99_EXP as f64);
        non_negative_hours(self.maxed_ehp - self.ehp(&capped))
    }

    /// Hours contributed by one skill, cross-skill bonuses included.
    ///
    /// For `overall` this is the whole EHP.
    pub fn skill_ehp(&self, skill: Skill, experience: &ExperienceMap) -> f64 {
        if !skill.is_trainable() {
            return self.ehp(experience);
        }
        let without = experience.clone().with(skill, 0.0);
        non_negative_hours(self.tt200m(&without) - self.tt200m(experience))
    }

    // ========================================================================
    // Bossing
    // ========================================================================

    /// Efficient hours bossed for one boss.
    pub fn boss_ehb(&self, boss: Boss, killcounts: &KillcountMap) -> f64 {
        let kc = killcounts.get(boss);
        if kc <= 0.0 {
            return 0.0;
        }
        match self.table.boss(boss) {
            Some(meta) if meta.rate > 0.0 => round_to(kc / meta.rate, PRECISION),
            _ => 0.0,
        }
    }

    pub fn ehb(&self, killcounts: &KillcountMap) -> f64 {
        let total: f64 = self
            .table
            .bosses
            .iter()
            .map(|meta| self.boss_ehb(meta.boss, killcounts))
            .sum();
        round_to(total, PRECISION)
    }

    // ========================================================================
    // Combined
    // ========================================================================

    pub fn efficiency_map(&self, experience: &ExperienceMap, killcounts: &KillcountMap) -> EfficiencyMap {
        let tt200m = self.tt200m(experience);
        let ehp = non_negative_hours(self.maximum_ehp - tt200m);

        let mut skills: BTreeMap<Skill, f64> = Skill::trainable()
            .map(|s| {
                let without = experience.clone().with(s, 0.0);
                (s, non_negative_hours(self.tt200m(&without) - tt200m))
            })
            .collect();
        skills.insert(Skill::Overall, ehp);

        let bosses = Boss::ALL.iter().map(|&b| (b, self.boss_ehb(b, killcounts))).collect();

        EfficiencyMap {
            skills,
            bosses,
            ehp,
            ehb: self.ehb(killcounts),
            ttm: self.ttm(experience),
            tt200m,
        }
    }
}
