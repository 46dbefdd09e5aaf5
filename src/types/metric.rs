//! Skill and boss identifiers
//!
//! Both sets are closed: every identifier a rate table, snapshot or request
//! may name is listed here. The string keys are the snake_case names used in
//! rate files, JSON bodies and URL paths.

use serde::{Deserialize, Serialize};

/// Returned when a string does not name a known skill or boss.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown {kind} '{name}'")]
pub struct UnknownMetric {
    pub kind: &'static str,
    pub name: String,
}

macro_rules! metric_enum {
    (
        $(#[$meta:meta])*
        pub enum $name:ident ($kind:literal) {
            $( $variant:ident => $key:literal ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        pub enum $name {
            $( #[serde(rename = $key)] $variant, )+
        }

        impl $name {
            /// Every identifier, in declaration order.
            pub const ALL: &'static [$name] = &[ $( $name::$variant ),+ ];

            pub const fn as_str(self) -> &'static str {
                match self {
                    $( $name::$variant => $key, )+
                }
            }

            /// All string keys, used for typo suggestions.
            pub fn keys() -> impl Iterator<Item = &'static str> {
                Self::ALL.iter().map(|m| m.as_str())
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl std::str::FromStr for $name {
            type Err = UnknownMetric;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $( $key => Ok($name::$variant), )+
                    _ => Err(UnknownMetric { kind: $kind, name: s.to_string() }),
                }
            }
        }
    };
}

metric_enum! {
    /// A skill tracked by experience.
    ///
    /// `Overall` is the aggregate of all other skills. It is never trained
    /// directly and never appears in a rate table.
    pub enum Skill ("skill") {
        Overall => "overall",
        Attack => "attack",
        Defence => "defence",
        Strength => "strength",
        Hitpoints => "hitpoints",
        Ranged => "ranged",
        Prayer => "prayer",
        Magic => "magic",
        Cooking => "cooking",
        Woodcutting => "woodcutting",
        Fletching => "fletching",
        Fishing => "fishing",
        Firemaking => "firemaking",
        Crafting => "crafting",
        Smithing => "smithing",
        Mining => "mining",
        Herblore => "herblore",
        Agility => "agility",
        Thieving => "thieving",
        Slayer => "slayer",
        Farming => "farming",
        Runecrafting => "runecrafting",
        Hunter => "hunter",
        Construction => "construction",
    }
}

impl Skill {
    /// Whether the skill can carry training methods (everything but overall).
    pub const fn is_trainable(self) -> bool {
        !matches!(self, Skill::Overall)
    }

    pub fn trainable() -> impl Iterator<Item = Skill> {
        Self::ALL.iter().copied().filter(|s| s.is_trainable())
    }
}

metric_enum! {
    /// A boss tracked by kill count.
    pub enum Boss ("boss") {
        AbyssalSire => "abyssal_sire",
        AlchemicalHydra => "alchemical_hydra",
        Artio => "artio",
        BarrowsChests => "barrows_chests",
        Bryophyta => "bryophyta",
        Callisto => "callisto",
        Calvarion => "calvarion",
        Cerberus => "cerberus",
        ChambersOfXeric => "chambers_of_xeric",
        ChambersOfXericChallengeMode => "chambers_of_xeric_challenge_mode",
        ChaosElemental => "chaos_elemental",
        ChaosFanatic => "chaos_fanatic",
        CommanderZilyana => "commander_zilyana",
        CorporealBeast => "corporeal_beast",
        CrazyArchaeologist => "crazy_archaeologist",
        DagannothPrime => "dagannoth_prime",
        DagannothRex => "dagannoth_rex",
        DagannothSupreme => "dagannoth_supreme",
        DerangedArchaeologist => "deranged_archaeologist",
        DukeSucellus => "duke_sucellus",
        GeneralGraardor => "general_graardor",
        GiantMole => "giant_mole",
        GrotesqueGuardians => "grotesque_guardians",
        Hespori => "hespori",
        KalphiteQueen => "kalphite_queen",
        KingBlackDragon => "king_black_dragon",
        Kraken => "kraken",
        Kreearra => "kreearra",
        KrilTsutsaroth => "kril_tsutsaroth",
        Mimic => "mimic",
        Nex => "nex",
        Nightmare => "nightmare",
        Obor => "obor",
        PhantomMuspah => "phantom_muspah",
        PhosanisNightmare => "phosanis_nightmare",
        Sarachnis => "sarachnis",
        Scorpia => "scorpia",
        Scurrius => "scurrius",
        Skotizo => "skotizo",
        Spindel => "spindel",
        Tempoross => "tempoross",
        TheCorruptedGauntlet => "the_corrupted_gauntlet",
        TheGauntlet => "the_gauntlet",
        TheLeviathan => "the_leviathan",
        TheWhisperer => "the_whisperer",
        TheatreOfBlood => "theatre_of_blood",
        TheatreOfBloodHardMode => "theatre_of_blood_hard_mode",
        ThermonuclearSmokeDevil => "thermonuclear_smoke_devil",
        TombsOfAmascut => "tombs_of_amascut",
        TombsOfAmascutExpert => "tombs_of_amascut_expert",
        TzkalZuk => "tzkal_zuk",
        TztokJad => "tztok_jad",
        Vardorvis => "vardorvis",
        Venenatis => "venenatis",
        Vetion => "vetion",
        Vorkath => "vorkath",
        Wintertodt => "wintertodt",
        Zalcano => "zalcano",
        Zulrah => "zulrah",
    }
}
