//! Random assignment of seated players to factions.

use rand::Rng;
use rand::seq::SliceRandom;
use serde::{Deserialize, Serialize};

use dip_core::{FACTION_COUNT, Faction, Participant, ParticipantId};

/// The seven seats at the table in join order; `None` marks an empty seat.
pub type Seats = [Option<Participant>; FACTION_COUNT];

/// Pad a roster with empty seats up to exactly seven, keeping join order.
///
/// Players beyond the seventh are ignored; the roster never grows that large.
pub fn seat_roster(roster: &[Participant]) -> Seats {
    std::array::from_fn(|i| roster.get(i).cloned())
}

/// A complete faction-to-player mapping.
///
/// Every faction is always present; `None` means the faction is unfilled.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Assignment {
    seats: Seats,
}

impl Assignment {
    /// All factions in nation order with their players.
    pub fn iter(&self) -> impl Iterator<Item = (Faction, Option<&Participant>)> {
        Faction::ALL
            .into_iter()
            .zip(self.seats.iter().map(Option::as_ref))
    }

    /// The faction controlled by the given player.
    pub fn faction_of(&self, id: ParticipantId) -> Option<Faction> {
        self.iter()
            .find(|(_, p)| p.is_some_and(|p| p.id == id))
            .map(|(f, _)| f)
    }

    /// Number of factions held by a player.
    pub fn filled(&self) -> usize {
        self.seats.iter().filter(|s| s.is_some()).count()
    }
}

/// Draw a uniformly random bijection between the seats and the factions.
///
/// The seats are Fisher-Yates shuffled with `rng` and dealt out in nation
/// order, so each seat lands on exactly one faction. Pass a seeded RNG for a
/// reproducible draw.
pub fn draw_factions<R: Rng + ?Sized>(seats: Seats, rng: &mut R) -> Assignment {
    let mut seats = seats;
    seats.shuffle(rng);
    Assignment { seats }
}
