//! Bonus propagation
//!
//! Training one skill can credit experience to another (combat skills feed
//! hitpoints, woodcutting feeds firemaking). Given a snapshot, this computes
//! how much each target skill receives from the training its origins still
//! have left.

use std::collections::BTreeMap;

use crate::config::defaults::MAX_EXP;
use crate::types::{Bonus, ExperienceMap, Skill};

/// Accumulated bonus experience per target skill.
pub type BonusMap = BTreeMap<Skill, f64>;

/// Apply `rules` in order and sum the bonus each target receives.
///
/// A rule's origin may itself be a target of an earlier rule in the same
/// pass; the origin's remaining training then shrinks by what it was already
/// credited, so chains compound (woodcutting -> firemaking -> cooking).
pub fn calculate_bonuses<'a>(
    experience: &ExperienceMap,
    rules: impl IntoIterator<Item = &'a Bonus>,
) -> BonusMap {
    let mut map = BonusMap::new();

    for rule in rules {
        let ceiling = rule.end_exp.min(MAX_EXP) as f64;
        let floor = experience.get(rule.origin_skill).max(rule.start_exp as f64);
        let already_credited = map.get(&rule.origin_skill).copied().unwrap_or(0.0);
        let remaining = ceiling - already_credited;

        let cap = rule.max_bonus.unwrap_or(MAX_EXP as f64);
        let contribution = (rule.ratio * (remaining - floor).max(0.0)).min(cap);

        *map.entry(rule.bonus_skill).or_insert(0.0) += contribution;
    }

    map
}
