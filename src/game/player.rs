//! Players and their per-player state.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::game::{Move, Trail};
use crate::map::Location;

/// Number of players in a game.
pub const NUM_PLAYERS: usize = 5;

/// One of the five players, in turn order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Player {
    /// Lord Godalming.
    Godalming,
    /// Dr. Seward.
    Seward,
    /// Van Helsing.
    VanHelsing,
    /// Mina Harker.
    Mina,
    /// Dracula.
    Dracula,
}

impl Player {
    /// All players in turn order.
    pub const ALL: [Player; NUM_PLAYERS] = [
        Player::Godalming,
        Player::Seward,
        Player::VanHelsing,
        Player::Mina,
        Player::Dracula,
    ];

    /// The four hunters in turn order.
    pub const HUNTERS: [Player; 4] = [
        Player::Godalming,
        Player::Seward,
        Player::VanHelsing,
        Player::Mina,
    ];

    /// Position in turn order.
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Player at a position in turn order.
    #[must_use]
    pub const fn from_index(index: usize) -> Option<Self> {
        match index {
            0 => Some(Player::Godalming),
            1 => Some(Player::Seward),
            2 => Some(Player::VanHelsing),
            3 => Some(Player::Mina),
            4 => Some(Player::Dracula),
            _ => None,
        }
    }

    /// Player identified by a log tag.
    #[must_use]
    pub const fn from_tag(tag: char) -> Option<Self> {
        match tag {
            'G' => Some(Player::Godalming),
            'S' => Some(Player::Seward),
            'H' => Some(Player::VanHelsing),
            'M' => Some(Player::Mina),
            'D' => Some(Player::Dracula),
            _ => None,
        }
    }

    /// Log tag of this player.
    #[must_use]
    pub const fn tag(self) -> char {
        match self {
            Player::Godalming => 'G',
            Player::Seward => 'S',
            Player::VanHelsing => 'H',
            Player::Mina => 'M',
            Player::Dracula => 'D',
        }
    }

    /// Check if this player is Dracula.
    #[must_use]
    pub const fn is_dracula(self) -> bool {
        matches!(self, Player::Dracula)
    }

    /// Check if this player is a hunter.
    #[must_use]
    pub const fn is_hunter(self) -> bool {
        !self.is_dracula()
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Player::Godalming => "Godalming",
            Player::Seward => "Seward",
            Player::VanHelsing => "Van Helsing",
            Player::Mina => "Mina",
            Player::Dracula => "Dracula",
        };
        f.write_str(name)
    }
}

/// State tracked for a single player during replay.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayerState {
    /// Health (hunters) or blood points (Dracula). May go negative while
    /// replaying; clamped once the replay completes.
    pub health: i32,
    /// Every move token played, oldest first.
    pub moves: Vec<Move>,
    /// Every resolved location, oldest first.
    pub locations: Vec<Location>,
    /// Bounded trail of recent resolved locations.
    pub trail: Trail,
    /// Whether the hunter is lying in hospital.
    pub in_hospital: bool,
}

impl PlayerState {
    /// Fresh state with the given starting health.
    #[must_use]
    pub fn new(health: i32) -> Self {
        Self {
            health,
            moves: Vec::new(),
            locations: Vec::new(),
            trail: Trail::new(),
            in_hospital: false,
        }
    }

    /// Most recent resolved location, if the player has moved.
    #[must_use]
    pub fn location(&self) -> Option<Location> {
        self.locations.last().copied()
    }

    /// Resolved location before the most recent one.
    #[must_use]
    pub fn previous_location(&self) -> Option<Location> {
        self.locations.iter().rev().nth(1).copied()
    }

    /// Number of moves made.
    #[must_use]
    pub fn moves_made(&self) -> usize {
        self.moves.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::map::PlaceId;

    #[test]
    fn test_player_order() {
        for (index, player) in Player::ALL.iter().enumerate() {
            assert_eq!(player.index(), index);
            assert_eq!(Player::from_index(index), Some(*player));
        }
        assert_eq!(Player::from_index(5), None);
    }

    #[test]
    fn test_player_tags() {
        for player in Player::ALL {
            assert_eq!(Player::from_tag(player.tag()), Some(player));
        }
        assert_eq!(Player::from_tag('X'), None);
        assert_eq!(Player::from_tag('g'), None);
    }

    #[test]
    fn test_hunters() {
        assert!(Player::HUNTERS.iter().all(|p| p.is_hunter()));
        assert!(Player::Dracula.is_dracula());
        assert_eq!(Player::VanHelsing.to_string(), "Van Helsing");
    }

    #[test]
    fn test_player_state_locations() {
        let mut state = PlayerState::new(9);
        assert_eq!(state.location(), None);
        assert_eq!(state.previous_location(), None);

        state.locations.push(Location::Place(PlaceId::new(1)));
        state.locations.push(Location::CityUnknown);
        assert_eq!(state.location(), Some(Location::CityUnknown));
        assert_eq!(state.previous_location(), Some(Location::Place(PlaceId::new(1))));
    }
}
