use std::fmt;

use serde::{Deserialize, Serialize};

/// Number of factions (and therefore seats) in every game.
pub const FACTION_COUNT: usize = 7;

/// One of the seven great powers a player can be assigned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Faction {
    /// Austria-Hungary.
    Austria,
    /// England.
    England,
    /// France.
    France,
    /// Germany.
    Germany,
    /// Italy.
    Italy,
    /// Russia.
    Russia,
    /// Turkey.
    Turkey,
}

impl Faction {
    /// All factions in the fixed nation order used for rendering.
    pub const ALL: [Faction; FACTION_COUNT] = [
        Self::Austria,
        Self::England,
        Self::France,
        Self::Germany,
        Self::Italy,
        Self::Russia,
        Self::Turkey,
    ];

    /// Display name, e.g. `"Austria"`.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Austria => "Austria",
            Self::England => "England",
            Self::France => "France",
            Self::Germany => "Germany",
            Self::Italy => "Italy",
            Self::Russia => "Russia",
            Self::Turkey => "Turkey",
        }
    }

    /// Lowercase slug used for the faction's channel and role names.
    pub fn slug(&self) -> &'static str {
        match self {
            Self::Austria => "austria",
            Self::England => "england",
            Self::France => "france",
            Self::Germany => "germany",
            Self::Italy => "italy",
            Self::Russia => "russia",
            Self::Turkey => "turkey",
        }
    }
}

impl fmt::Display for Faction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
