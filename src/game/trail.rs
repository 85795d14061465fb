//! Trails and resolution of relative move tokens.
//!
//! Dracula's hide and double-back moves name a location by pointing back
//! into his own history, and the slot they point at may itself be relative.
//! [`resolve_at`] follows those references over the full move history. Each
//! step strictly decreases the index, so resolution always terminates.
//!
//! [`Trail`] is the bounded window of recent resolved locations. It keeps
//! one slot beyond the public window: the location that has just dropped off
//! the end is what a trap malfunction removes.

use std::collections::VecDeque;

use crate::error::ResolveError;
use crate::game::Move;
use crate::map::{Location, Map};

/// Number of locations in a player's public trail.
pub const TRAIL_SIZE: usize = 6;

/// Number of locations a [`Trail`] retains: the public window plus the
/// location that most recently left it.
pub const RETAINED_DEPTH: usize = TRAIL_SIZE + 1;

/// Resolve the move at `index` of `moves` to a location.
///
/// # Errors
///
/// Returns [`ResolveError::BeforeHistory`] if a hide or double-back points
/// before the first move.
pub fn resolve_at(map: &Map, moves: &[Move], index: usize) -> Result<Location, ResolveError> {
    let offset = match moves.get(index) {
        Some(Move::Place(id)) => return Ok(Location::Place(*id)),
        Some(Move::CityUnknown) => return Ok(Location::CityUnknown),
        Some(Move::SeaUnknown) => return Ok(Location::SeaUnknown),
        Some(Move::Teleport) => return Ok(Location::Place(map.castle())),
        Some(Move::Hide) => 1,
        Some(Move::DoubleBack(k)) => usize::from(*k),
        None => return Err(ResolveError::BeforeHistory { index, offset: 0 }),
    };
    let target = index
        .checked_sub(offset)
        .ok_or(ResolveError::BeforeHistory { index, offset })?;
    resolve_at(map, moves, target)
}

/// Bounded history of resolved locations, newest first.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Trail {
    entries: VecDeque<Location>,
}

impl Trail {
    /// Empty trail.
    #[must_use]
    pub fn new() -> Self {
        Self {
            entries: VecDeque::with_capacity(RETAINED_DEPTH),
        }
    }

    /// Push a new location, dropping the oldest retained one if full.
    pub fn push(&mut self, location: Location) {
        if self.entries.len() == RETAINED_DEPTH {
            self.entries.pop_back();
        }
        self.entries.push_front(location);
    }

    /// The public trail, newest first, at most [`TRAIL_SIZE`] entries.
    pub fn recent(&self) -> impl Iterator<Item = Location> + '_ {
        self.entries.iter().take(TRAIL_SIZE).copied()
    }

    /// Location `n` moves ago (0 is the current one), within the retained depth.
    #[must_use]
    pub fn get(&self, n: usize) -> Option<Location> {
        self.entries.get(n).copied()
    }

    /// The location that has just left the public trail, if any.
    #[must_use]
    pub fn departed(&self) -> Option<Location> {
        self.get(TRAIL_SIZE)
    }

    /// Number of entries in the public trail.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len().min(TRAIL_SIZE)
    }

    /// Check if nothing has been pushed.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
