use std::fmt;
use std::hash::{Hash, Hasher};

use serde::{Deserialize, Serialize};

/// Stable platform identifier for a participant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ParticipantId(pub u64);

impl fmt::Display for ParticipantId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A player identity handed to the engine by the transport.
///
/// Two participants are the same player exactly when their ids match; the
/// display name is carried for rendering only and may change between
/// commands.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Participant {
    /// Platform user id.
    pub id: ParticipantId,
    /// Display name at the time the command was issued.
    pub name: String,
}

impl Participant {
    /// Create a participant from a raw platform id and a display name.
    pub fn new(id: u64, name: impl Into<String>) -> Self {
        Self {
            id: ParticipantId(id),
            name: name.into(),
        }
    }
}

impl PartialEq for Participant {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Participant {}

impl Hash for Participant {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl fmt::Display for Participant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn equality_ignores_display_name() {
        let a = Participant::new(7, "alice");
        let renamed = Participant::new(7, "Alice the Great");
        assert_eq!(a, renamed);
        assert_ne!(a, Participant::new(8, "alice"));
    }

    #[test]
    fn hashing_follows_id() {
        let mut set = HashSet::new();
        set.insert(Participant::new(1, "bob"));
        assert!(set.contains(&Participant::new(1, "robert")));
        assert!(!set.contains(&Participant::new(2, "bob")));
    }

    #[test]
    fn displays_name() {
        assert_eq!(Participant::new(3, "carol").to_string(), "carol");
        assert_eq!(ParticipantId(42).to_string(), "42");
    }
}
