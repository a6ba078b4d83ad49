use std::fmt;

use serde::{Deserialize, Serialize};

/// The year every game opens in.
pub const START_YEAR: u32 = 1901;

/// A phase of the game year.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Season {
    /// Spring movement.
    Spring,
    /// Fall movement.
    Fall,
    /// Winter builds and disbands.
    Winter,
}

impl Season {
    /// The season that follows this one.
    pub fn next(&self) -> Self {
        match self {
            Self::Spring => Self::Fall,
            Self::Fall => Self::Winter,
            Self::Winter => Self::Spring,
        }
    }
}

impl fmt::Display for Season {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Spring => "Spring",
            Self::Fall => "Fall",
            Self::Winter => "Winter",
        })
    }
}

/// Tracks the current season and year of a game.
///
/// The clock never advances on its own; the adjudication step calls
/// [`GameClock::advance`] once per resolved turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameClock {
    season: Season,
    year: u32,
}

impl GameClock {
    /// Clock at Spring of the opening year.
    pub fn new() -> Self {
        Self {
            season: Season::Spring,
            year: START_YEAR,
        }
    }

    /// Current season.
    pub fn season(&self) -> Season {
        self.season
    }

    /// Current year.
    pub fn year(&self) -> u32 {
        self.year
    }

    /// Move to the next season. The year rolls over on Winter to Spring.
    pub fn advance(&mut self) {
        if self.season == Season::Winter {
            self.year += 1;
        }
        self.season = self.season.next();
    }
}

impl Default for GameClock {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for GameClock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.season, self.year)
    }
}
