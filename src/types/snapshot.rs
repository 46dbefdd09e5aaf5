//! Progress snapshots: experience per skill and kill count per boss

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::collections::{BTreeMap, HashMap};
use std::str::FromStr;

use super::metric::{Boss, Skill};

/// Experience per skill.
pub type ExperienceMap = ProgressMap<Skill>;

/// Kill count per boss.
pub type KillcountMap = ProgressMap<Boss>;

/// A player's full progress at one point in time.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    #[serde(default)]
    pub experience: ExperienceMap,
    #[serde(default)]
    pub killcounts: KillcountMap,
}

/// A sparse map from identifier to a non-negative progress value.
///
/// Values are sanitized on insertion: negatives (including the `-1`
/// "unranked" sentinel) and non-finite numbers are stored as `0`. Missing
/// identifiers read as `0`.
#[derive(Debug, Clone, PartialEq)]
pub struct ProgressMap<K: Ord>(BTreeMap<K, f64>);

impl<K: Ord> Default for ProgressMap<K> {
    fn default() -> Self {
        Self(BTreeMap::new())
    }
}

fn sanitize(value: f64) -> f64 {
    if value.is_finite() && value > 0.0 {
        value
    } else {
        0.0
    }
}

impl<K: Ord + Copy> ProgressMap<K> {
    pub fn new() -> Self {
        Self::default()
    }

    /// A map holding the same value for every given key.
    pub fn uniform(keys: impl IntoIterator<Item = K>, value: f64) -> Self {
        keys.into_iter().map(|k| (k, value)).collect()
    }

    /// Progress for `key`, or `0` when absent.
    pub fn get(&self, key: K) -> f64 {
        self.0.get(&key).copied().unwrap_or(0.0)
    }

    pub fn set(&mut self, key: K, value: f64) {
        self.0.insert(key, sanitize(value));
    }

    /// Builder-style `set`.
    pub fn with(mut self, key: K, value: f64) -> Self {
        self.set(key, value);
        self
    }

    /// Copy of this map with every value capped at `cap`.
    pub fn capped(&self, cap: f64) -> Self {
        Self(self.0.iter().map(|(k, v)| (*k, v.min(cap))).collect())
    }

    pub fn iter(&self) -> impl Iterator<Item = (K, f64)> + '_ {
        self.0.iter().map(|(k, v)| (*k, *v))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<K: Ord + Copy + FromStr> ProgressMap<K> {
    /// Build from string-keyed input, ignoring identifiers that do not parse.
    pub fn from_raw<S: AsRef<str>>(entries: impl IntoIterator<Item = (S, f64)>) -> Self {
        let mut map = Self::new();
        for (key, value) in entries {
            match key.as_ref().parse::<K>() {
                Ok(k) => map.set(k, value),
                Err(_) => tracing::debug!(key = key.as_ref(), "Ignoring unknown identifier"),
            }
        }
        map
    }
}

impl<K: Ord + Copy> FromIterator<(K, f64)> for ProgressMap<K> {
    fn from_iter<I: IntoIterator<Item = (K, f64)>>(iter: I) -> Self {
        let mut map = Self::new();
        for (k, v) in iter {
            map.set(k, v);
        }
        map
    }
}

impl<K: Ord + Serialize> Serialize for ProgressMap<K> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.0.serialize(serializer)
    }
}

impl<'de, K: Ord + Copy + FromStr> Deserialize<'de> for ProgressMap<K> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = HashMap::<String, f64>::deserialize(deserializer)?;
        Ok(Self::from_raw(raw))
    }
}
