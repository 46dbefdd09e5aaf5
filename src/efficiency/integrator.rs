//! Time integration: hours to bring every skill to the experience ceiling

use crate::config::defaults::{MAX_EXP, PRECISION};
use crate::types::{ExperienceMap, RateTable, SkillMeta};

use super::bonuses::calculate_bonuses;
use super::round_to;

/// Hours of optimal training left until every skill reaches `MAX_EXP`,
/// after bonus experience is credited.
///
/// Start bonuses advance a skill's starting point; end bonuses lower its
/// target, since that share will arrive from training other skills.
pub fn tt200m(table: &RateTable, experience: &ExperienceMap) -> f64 {
    let start_bonuses = calculate_bonuses(experience, table.bonuses(false));
    let end_bonuses = calculate_bonuses(experience, table.bonuses(true));

    let mut total = 0.0;
    for meta in &table.skills {
        let start = experience.get(meta.skill) + start_bonuses.get(&meta.skill).copied().unwrap_or(0.0);
        let target = MAX_EXP as f64 - end_bonuses.get(&meta.skill).copied().unwrap_or(0.0);
        total += skill_hours(meta, start, target);
    }

    round_to(total, PRECISION)
}

/// Hours to train one skill from `start` to `target`.
pub fn skill_hours(meta: &SkillMeta, start: f64, target: f64) -> f64 {
    if !meta.skill.is_trainable() {
        return 0.0;
    }

    // Bonus-only: one nominal hour per full ceiling of missing experience.
    if meta.is_zero_time() {
        return (target - start).max(0.0) / MAX_EXP as f64;
    }

    let mut hours = 0.0;
    for (i, method) in meta.methods.iter().enumerate() {
        if method.rate <= 0.0 {
            continue;
        }
        let lo = method.start_exp as f64;
        let hi = meta.methods.get(i + 1).map_or(f64::INFINITY, |next| next.start_exp as f64);

        let from = lo.max(start);
        let to = hi.min(target);
        if to > from {
            hours += (to - from) / method.rate;
        }
    }
    hours
}
