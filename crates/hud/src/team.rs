//! Team identifiers as they appear on the event wire.

use serde::{Deserialize, Serialize};

/// A team slot. Wire ids match the game's team table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Team {
    #[default]
    Unassigned,
    Spectator,
    Red,
    Blue,
}

impl Team {
    /// Integer id carried in event `team` fields.
    pub const fn id(self) -> i32 {
        match self {
            Team::Unassigned => 0,
            Team::Spectator => 1,
            Team::Red => 2,
            Team::Blue => 3,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Team::Unassigned => "Unassigned",
            Team::Spectator => "Spectator",
            Team::Red => "RED",
            Team::Blue => "BLU",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wire_ids_match_team_table() {
        assert_eq!(Team::Unassigned.id(), 0);
        assert_eq!(Team::Spectator.id(), 1);
        assert_eq!(Team::Red.id(), 2);
        assert_eq!(Team::Blue.id(), 3);
        assert_eq!(Team::default(), Team::Unassigned);
    }
}
