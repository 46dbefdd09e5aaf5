//! Player classification and algorithm variants

use serde::{Deserialize, Serialize};
use std::str::FromStr;

// ============================================================================
// Player Classification
// ============================================================================

/// Account type of a player.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default, Hash)]
#[serde(rename_all = "snake_case")]
pub enum PlayerType {
    #[default]
    Unknown,
    Regular,
    Ironman,
    Hardcore,
    Ultimate,
}

impl PlayerType {
    pub const ALL: [PlayerType; 5] = [
        PlayerType::Unknown,
        PlayerType::Regular,
        PlayerType::Ironman,
        PlayerType::Hardcore,
        PlayerType::Ultimate,
    ];

    pub const fn as_str(self) -> &'static str {
        match self {
            PlayerType::Unknown => "unknown",
            PlayerType::Regular => "regular",
            PlayerType::Ironman => "ironman",
            PlayerType::Hardcore => "hardcore",
            PlayerType::Ultimate => "ultimate",
        }
    }
}

/// Account build of a player (stat restrictions it plays under).
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default, Hash)]
#[serde(rename_all = "snake_case")]
pub enum PlayerBuild {
    #[default]
    Main,
    F2p,
    Lvl3,
    Zerker,
    Def1,
    Hp10,
}

impl PlayerBuild {
    pub const ALL: [PlayerBuild; 6] = [
        PlayerBuild::Main,
        PlayerBuild::F2p,
        PlayerBuild::Lvl3,
        PlayerBuild::Zerker,
        PlayerBuild::Def1,
        PlayerBuild::Hp10,
    ];

    pub const fn as_str(self) -> &'static str {
        match self {
            PlayerBuild::Main => "main",
            PlayerBuild::F2p => "f2p",
            PlayerBuild::Lvl3 => "lvl3",
            PlayerBuild::Zerker => "zerker",
            PlayerBuild::Def1 => "def1",
            PlayerBuild::Hp10 => "hp10",
        }
    }
}

// ============================================================================
// Algorithm Variant
// ============================================================================

/// A named rate-table configuration.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(rename_all = "snake_case")]
pub enum AlgorithmVariant {
    Main,
    Ironman,
    Ultimate,
    Lvl3,
    F2p,
}

impl AlgorithmVariant {
    pub const ALL: [AlgorithmVariant; 5] = [
        AlgorithmVariant::Main,
        AlgorithmVariant::Ironman,
        AlgorithmVariant::Ultimate,
        AlgorithmVariant::Lvl3,
        AlgorithmVariant::F2p,
    ];

    pub const fn as_str(self) -> &'static str {
        match self {
            AlgorithmVariant::Main => "main",
            AlgorithmVariant::Ironman => "ironman",
            AlgorithmVariant::Ultimate => "ultimate",
            AlgorithmVariant::Lvl3 => "lvl3",
            AlgorithmVariant::F2p => "f2p",
        }
    }

    /// File name of this variant's rate table.
    pub fn file_name(self) -> String {
        format!("{}.toml", self.as_str())
    }

    /// Position in [`AlgorithmVariant::ALL`].
    pub const fn index(self) -> usize {
        self as usize
    }
}

// ============================================================================
// String Conversions
// ============================================================================

/// A classification string that matches no known value.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown {kind} '{value}' (expected one of: {expected})")]
pub struct ParseClassificationError {
    pub kind: &'static str,
    pub value: String,
    pub expected: String,
}

fn parse_from<T: Copy>(
    kind: &'static str,
    value: &str,
    all: &[T],
    as_str: impl Fn(T) -> &'static str,
) -> Result<T, ParseClassificationError> {
    let needle = value.trim().to_ascii_lowercase();
    all.iter()
        .copied()
        .find(|v| as_str(*v) == needle)
        .ok_or_else(|| ParseClassificationError {
            kind,
            value: value.to_string(),
            expected: all.iter().map(|v| as_str(*v)).collect::<Vec<_>>().join(", "),
        })
}

impl FromStr for PlayerType {
    type Err = ParseClassificationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_from("player type", s, &Self::ALL, Self::as_str)
    }
}

impl FromStr for PlayerBuild {
    type Err = ParseClassificationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_from("player build", s, &Self::ALL, Self::as_str)
    }
}

impl FromStr for AlgorithmVariant {
    type Err = ParseClassificationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_from("variant", s, &Self::ALL, Self::as_str)
    }
}

impl std::fmt::Display for PlayerType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::fmt::Display for PlayerBuild {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::fmt::Display for AlgorithmVariant {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
