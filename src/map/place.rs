//! Place identifiers and resolved locations.

use serde::{Deserialize, Serialize};

/// Index of a place in its [`Map`](crate::map::Map).
///
/// Ids are dense: a map with `n` places uses ids `0..n`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct PlaceId(u8);

impl PlaceId {
    /// Create an id from a raw index.
    #[must_use]
    pub const fn new(index: u8) -> Self {
        Self(index)
    }

    /// Raw index into the place table.
    #[must_use]
    #[inline]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

/// Terrain category of a place.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PlaceKind {
    /// A city or town reached by road, rail or harbour.
    Land,
    /// A sea zone, only reachable by boat.
    Sea,
}

impl PlaceKind {
    /// Check if this is a sea zone.
    #[must_use]
    pub const fn is_sea(self) -> bool {
        matches!(self, PlaceKind::Sea)
    }
}

/// Static description of one place on the map.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Place {
    /// Two-letter code used in play logs.
    pub abbrev: String,
    /// Human-readable name.
    pub name: String,
    /// Terrain category.
    pub kind: PlaceKind,
}

/// Where a player's trail entry ends up once every relative move is resolved.
///
/// Dracula's concealed moves never resolve to a real place from a hunter's
/// point of view, so the two "unknown" variants are locations in their own
/// right: traps and vampires can sit on them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Location {
    /// A real place on the map.
    Place(PlaceId),
    /// Some city, not disclosed.
    CityUnknown,
    /// Some sea zone, not disclosed.
    SeaUnknown,
}

impl Location {
    /// The real place, if disclosed.
    #[must_use]
    pub const fn place(self) -> Option<PlaceId> {
        match self {
            Location::Place(id) => Some(id),
            Location::CityUnknown | Location::SeaUnknown => None,
        }
    }
}

impl From<PlaceId> for Location {
    fn from(id: PlaceId) -> Self {
        Location::Place(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_location_place() {
        let id = PlaceId::new(7);
        assert_eq!(Location::from(id).place(), Some(id));
        assert_eq!(Location::CityUnknown.place(), None);
        assert_eq!(Location::SeaUnknown.place(), None);
    }

    #[test]
    fn test_place_kind_sea() {
        assert!(PlaceKind::Sea.is_sea());
        assert!(!PlaceKind::Land.is_sea());
    }
}
