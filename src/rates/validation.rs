//! Rate-table resolution and validation
//!
//! Raw string-keyed records are resolved into typed identifiers and checked
//! against the table invariants. Every violation is collected so one run
//! reports all of them.

use std::collections::BTreeSet;

use serde::Deserialize;

use crate::config::validation::suggest_correction;
use crate::types::{
    AlgorithmVariant, Boss, BossMeta, Bonus, RateTable, Skill, SkillMeta, TrainingMethod,
};

// ============================================================================
// Raw Records
// ============================================================================

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub(crate) struct RawRateFile {
    pub variant: String,
    #[serde(default)]
    pub skills: Vec<RawSkillMeta>,
    #[serde(default)]
    pub bosses: Vec<RawBossMeta>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub(crate) struct RawSkillMeta {
    pub skill: String,
    #[serde(default)]
    pub methods: Vec<TrainingMethod>,
    #[serde(default)]
    pub bonuses: Vec<RawBonus>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub(crate) struct RawBonus {
    pub origin_skill: String,
    pub bonus_skill: String,
    pub start_exp: u64,
    pub end_exp: u64,
    pub end: bool,
    pub ratio: f64,
    #[serde(default)]
    pub max_bonus: Option<f64>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub(crate) struct RawBossMeta {
    pub boss: String,
    pub rate: f64,
}

// ============================================================================
// Identifier Resolution
// ============================================================================

fn resolve_skill(name: &str, at: &str, errors: &mut Vec<String>) -> Option<Skill> {
    match name.parse::<Skill>() {
        Ok(skill) => Some(skill),
        Err(e) => {
            errors.push(with_suggestion(format!("{at}: {e}"), name, Skill::keys()));
            None
        }
    }
}

fn resolve_boss(name: &str, at: &str, errors: &mut Vec<String>) -> Option<Boss> {
    match name.parse::<Boss>() {
        Ok(boss) => Some(boss),
        Err(e) => {
            errors.push(with_suggestion(format!("{at}: {e}"), name, Boss::keys()));
            None
        }
    }
}

fn with_suggestion(
    message: String,
    name: &str,
    known: impl IntoIterator<Item = &'static str>,
) -> String {
    match suggest_correction(name, known) {
        Some(s) => format!("{message} (did you mean '{s}'?)"),
        None => message,
    }
}

fn non_negative(value: f64) -> bool {
    value.is_finite() && value >= 0.0
}

// ============================================================================
// Resolution Entry Point
// ============================================================================

/// Resolve and validate a raw rate file for `expected`.
///
/// Returns the typed table, or every violation found.
pub(crate) fn resolve(
    raw: RawRateFile,
    expected: AlgorithmVariant,
) -> Result<RateTable, Vec<String>> {
    let mut errors = Vec::new();

    match raw.variant.parse::<AlgorithmVariant>() {
        Ok(v) if v == expected => {}
        Ok(v) => errors.push(format!("variant: file declares '{v}' but was loaded as '{expected}'")),
        Err(e) => errors.push(format!("variant: {e}")),
    }

    let skills = resolve_skills(raw.skills, &mut errors);
    let bosses = resolve_bosses(raw.bosses, &mut errors);

    let table = RateTable { variant: expected, skills, bosses };
    check_chain_order(&table, &mut errors);

    if errors.is_empty() {
        Ok(table)
    } else {
        Err(errors)
    }
}

fn resolve_skills(raw: Vec<RawSkillMeta>, errors: &mut Vec<String>) -> Vec<SkillMeta> {
    let mut seen = BTreeSet::new();
    let mut skills = Vec::with_capacity(raw.len());

    for (i, entry) in raw.into_iter().enumerate() {
        let at = format!("skills[{i}]");
        let Some(skill) = resolve_skill(&entry.skill, &at, errors) else {
            continue;
        };
        let at = format!("skills[{i}] ({skill})");

        if !skill.is_trainable() {
            errors.push(format!("{at}: '{skill}' is an aggregate and cannot carry rates"));
            continue;
        }
        if !seen.insert(skill) {
            errors.push(format!("{at}: declared more than once"));
            continue;
        }

        check_methods(&entry.methods, &at, errors);

        let bonuses = entry
            .bonuses
            .into_iter()
            .enumerate()
            .filter_map(|(j, b)| resolve_bonus(b, skill, &format!("{at} bonuses[{j}]"), errors))
            .collect();

        skills.push(SkillMeta { skill, methods: entry.methods, bonuses });
    }

    for skill in Skill::trainable() {
        if !seen.contains(&skill) {
            errors.push(format!("skills: missing '{skill}'"));
        }
    }

    skills
}

fn check_methods(methods: &[TrainingMethod], at: &str, errors: &mut Vec<String>) {
    let Some(first) = methods.first() else {
        errors.push(format!("{at}: no training methods"));
        return;
    };
    if first.start_exp != 0 {
        errors.push(format!(
            "{at}: first method starts at {} (must start at 0)",
            first.start_exp
        ));
    }
    for pair in methods.windows(2) {
        if pair[1].start_exp < pair[0].start_exp {
            errors.push(format!(
                "{at}: methods out of order ({} after {})",
                pair[1].start_exp, pair[0].start_exp
            ));
        }
    }
    for m in methods {
        if !non_negative(m.rate) {
            errors.push(format!(
                "{at}: method at {} has rate {} (must be finite and >= 0)",
                m.start_exp, m.rate
            ));
        }
    }
}

fn resolve_bonus(
    raw: RawBonus,
    declared_under: Skill,
    at: &str,
    errors: &mut Vec<String>,
) -> Option<Bonus> {
    let origin = resolve_skill(&raw.origin_skill, at, errors);
    let target = resolve_skill(&raw.bonus_skill, at, errors);
    let (origin, target) = (origin?, target?);
    let before = errors.len();

    if origin != declared_under {
        errors.push(format!(
            "{at}: origin '{origin}' does not match the skill it is declared under"
        ));
    }
    if target == origin {
        errors.push(format!("{at}: '{origin}' cannot give a bonus to itself"));
    }
    if !target.is_trainable() {
        errors.push(format!("{at}: '{target}' cannot receive bonuses"));
    }
    if raw.start_exp >= raw.end_exp {
        errors.push(format!(
            "{at}: start_exp {} must be below end_exp {}",
            raw.start_exp, raw.end_exp
        ));
    }
    if !non_negative(raw.ratio) {
        errors.push(format!("{at}: ratio {} must be finite and >= 0", raw.ratio));
    }
    if let Some(max) = raw.max_bonus {
        if !non_negative(max) {
            errors.push(format!("{at}: max_bonus {max} must be finite and >= 0"));
        }
    }

    (errors.len() == before).then_some(Bonus {
        origin_skill: origin,
        bonus_skill: target,
        start_exp: raw.start_exp,
        end_exp: raw.end_exp,
        end: raw.end,
        ratio: raw.ratio,
        max_bonus: raw.max_bonus,
    })
}

fn resolve_bosses(raw: Vec<RawBossMeta>, errors: &mut Vec<String>) -> Vec<BossMeta> {
    let mut seen = BTreeSet::new();
    let mut bosses = Vec::with_capacity(raw.len());

    for (i, entry) in raw.into_iter().enumerate() {
        let Some(boss) = resolve_boss(&entry.boss, &format!("bosses[{i}]"), errors) else {
            continue;
        };
        if !seen.insert(boss) {
            errors.push(format!("bosses[{i}] ({boss}): declared more than once"));
            continue;
        }
        if !non_negative(entry.rate) {
            errors.push(format!(
                "bosses[{i}] ({boss}): rate {} must be finite and >= 0",
                entry.rate
            ));
        }
        bosses.push(BossMeta { boss, rate: entry.rate });
    }

    bosses
}

/// Within one pass, a bonus reads what earlier bonuses credited to its
/// origin. A bonus that feeds an origin must therefore come first.
fn check_chain_order(table: &RateTable, errors: &mut Vec<String>) {
    for end in [false, true] {
        let pass: Vec<&Bonus> = table.bonuses(end).collect();
        for (i, bonus) in pass.iter().enumerate() {
            if let Some(feeder) = pass[i + 1..]
                .iter()
                .find(|later| later.bonus_skill == bonus.origin_skill)
            {
                errors.push(format!(
                    "bonus {} -> {} is declared before {} -> {}, which feeds its origin",
                    bonus.origin_skill, bonus.bonus_skill, feeder.origin_skill, feeder.bonus_skill
                ));
            }
        }
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(text: &str) -> RawRateFile {
        toml::from_str(text).unwrap()
    }

    /// Every trainable skill with one flat method, plus `extra` appended.
    fn full_table(extra: &str) -> String {
        let mut text = String::from("variant = \"main\"\n");
        for skill in Skill::trainable() {
            text.push_str(&format!(
                "[[skills]]\nskill = \"{skill}\"\nmethods = [ {{ start_exp = 0, rate = 10_000 }} ]\n"
            ));
        }
        text.push_str(extra);
        text
    }

    fn errors_of(text: &str) -> Vec<String> {
        resolve(parse(text), AlgorithmVariant::Main).unwrap_err()
    }

    #[test]
    fn test_minimal_complete_table_resolves() {
        let table = resolve(parse(&full_table("")), AlgorithmVariant::Main).unwrap();
        assert_eq!(table.skills.len(), 23);
        assert!(table.bosses.is_empty());
    }

    #[test]
    fn test_unknown_skill_suggests_closest() {
        let text = full_table("[[skills]]\nskill = \"woodcuting\"\nmethods = [ { start_exp = 0, rate = 1 } ]\n");
        let errors = errors_of(&text);
        assert_eq!(errors.len(), 1);
        assert!(errors[0].contains("unknown skill 'woodcuting'"));
        assert!(errors[0].contains("did you mean 'woodcutting'"));
    }

    #[test]
    fn test_missing_and_duplicate_skills_reported_together() {
        let text = "variant = \"main\"\n\
            [[skills]]\nskill = \"attack\"\nmethods = [ { start_exp = 0, rate = 1 } ]\n\
            [[skills]]\nskill = \"attack\"\nmethods = [ { start_exp = 0, rate = 1 } ]\n";
        let errors = errors_of(text);
        assert!(errors.iter().any(|e| e.contains("declared more than once")));
        assert!(errors.iter().any(|e| e == "skills: missing 'construction'"));
        assert_eq!(errors.len(), 1 + 22);
    }

    #[test]
    fn test_overall_is_rejected() {
        let text = full_table("[[skills]]\nskill = \"overall\"\nmethods = [ { start_exp = 0, rate = 1 } ]\n");
        assert!(errors_of(&text)[0].contains("aggregate"));
    }

    #[test]
    fn test_method_order_and_origin_checked() {
        let text = "variant = \"main\"\n[[skills]]\nskill = \"attack\"\n\
            methods = [ { start_exp = 10, rate = 1 }, { start_exp = 5, rate = -2 } ]\n";
        let errors = errors_of(text);
        assert!(errors.iter().any(|e| e.contains("must start at 0")));
        assert!(errors.iter().any(|e| e.contains("out of order")));
        assert!(errors.iter().any(|e| e.contains("rate -2")));
    }

    #[test]
    fn test_bonus_rules() {
        let text = full_table("").replacen(
            "skill = \"attack\"\nmethods = [ { start_exp = 0, rate = 10_000 } ]\n",
            "skill = \"attack\"\nmethods = [ { start_exp = 0, rate = 10_000 } ]\nbonuses = [\n\
              { origin_skill = \"defence\", bonus_skill = \"hitpoints\", start_exp = 0, end_exp = 10, end = false, ratio = 1 },\n\
              { origin_skill = \"attack\", bonus_skill = \"attack\", start_exp = 5, end_exp = 5, end = false, ratio = 1 },\n\
            ]\n",
            1,
        );
        let errors = errors_of(&text);
        assert!(errors.iter().any(|e| e.contains("does not match")));
        assert!(errors.iter().any(|e| e.contains("bonus to itself")));
        assert!(errors.iter().any(|e| e.contains("must be below end_exp")));
    }

    #[test]
    fn test_chain_order_violation() {
        // cooking -> attack is read before woodcutting -> cooking credits cooking.
        let text = full_table("")
            .replacen(
                "skill = \"cooking\"\nmethods = [ { start_exp = 0, rate = 10_000 } ]\n",
                "skill = \"cooking\"\nmethods = [ { start_exp = 0, rate = 10_000 } ]\nbonuses = [ { origin_skill = \"cooking\", bonus_skill = \"attack\", start_exp = 0, end_exp = 100, end = true, ratio = 0.5 } ]\n",
                1,
            )
            .replacen(
                "skill = \"woodcutting\"\nmethods = [ { start_exp = 0, rate = 10_000 } ]\n",
                "skill = \"woodcutting\"\nmethods = [ { start_exp = 0, rate = 10_000 } ]\nbonuses = [ { origin_skill = \"woodcutting\", bonus_skill = \"cooking\", start_exp = 0, end_exp = 100, end = true, ratio = 0.5 } ]\n",
                1,
            );
        let errors = errors_of(&text);
        assert_eq!(errors.len(), 1);
        assert!(errors[0].contains("cooking -> attack is declared before woodcutting -> cooking"));
    }

    #[test]
    fn test_duplicate_and_unknown_bosses() {
        let text = full_table(
            "[[bosses]]\nboss = \"zulrah\"\nrate = 35\n\
             [[bosses]]\nboss = \"zulrah\"\nrate = 30\n\
             [[bosses]]\nboss = \"cerberos\"\nrate = 61\n",
        );
        let errors = errors_of(&text);
        assert_eq!(errors.len(), 2);
        assert!(errors[0].contains("declared more than once"));
        assert!(errors[1].contains("did you mean 'cerberus'"));
    }

    #[test]
    fn test_variant_mismatch() {
        let text = full_table("").replace("variant = \"main\"", "variant = \"ironman\"");
        let errors = errors_of(&text);
        assert_eq!(errors, vec!["variant: file declares 'ironman' but was loaded as 'main'"]);
    }
}
