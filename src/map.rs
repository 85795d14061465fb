//! Transportation graph.
//!
//! The map is a static, undirected multigraph of places joined by typed
//! connections (road, rail, boat). It is built once, either from the
//! standard map of Europe or from [`MapData`] loaded as JSON, and never
//! changes afterwards.
//!
//! Rail travel is governed by a timetable: the number of rail legs a hunter
//! may chain in one move is `(round + offset) % rail_cycle`, where the offset
//! is the hunter's position in turn order. See [`Map::rail_legs`].

mod europe;
mod place;

pub use place::{Location, Place, PlaceId, PlaceKind};

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::error::MapError;

/// Rail timetable cycle of the standard map.
pub const DEFAULT_RAIL_CYCLE: usize = 4;

/// Longest rail timetable cycle a map may declare.
pub const MAX_RAIL_CYCLE: usize = 64;

/// Mode of travel along a connection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Transport {
    /// Road between two land places.
    Road,
    /// Railway between two land places.
    Rail,
    /// Boat between a sea and a port or another sea.
    Boat,
}

/// A subset of transport types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TransportMask {
    /// Allow road connections.
    pub road: bool,
    /// Allow rail connections.
    pub rail: bool,
    /// Allow boat connections.
    pub boat: bool,
}

impl TransportMask {
    /// Every transport type.
    pub const ALL: Self = Self {
        road: true,
        rail: true,
        boat: true,
    };

    /// No transport at all.
    pub const NONE: Self = Self {
        road: false,
        rail: false,
        boat: false,
    };

    /// Build a mask from three flags.
    #[must_use]
    pub const fn new(road: bool, rail: bool, boat: bool) -> Self {
        Self { road, rail, boat }
    }

    /// Check if a transport type is enabled.
    #[must_use]
    pub const fn allows(self, transport: Transport) -> bool {
        match transport {
            Transport::Road => self.road,
            Transport::Rail => self.rail,
            Transport::Boat => self.boat,
        }
    }
}

/// One outgoing edge of a place.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Connection {
    /// The place at the other end.
    pub to: PlaceId,
    /// How the edge is travelled.
    pub transport: Transport,
}

/// Serializable description of a place.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlaceData {
    /// Two-letter code.
    pub abbrev: String,
    /// Display name.
    pub name: String,
    /// Terrain category.
    pub kind: PlaceKind,
}

/// Serializable description of an undirected connection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConnectionData {
    /// Abbreviation of one endpoint.
    pub from: String,
    /// Abbreviation of the other endpoint.
    pub to: String,
    /// Transport type.
    pub transport: Transport,
}

/// Serializable map description, as consumed by [`Map::from_data`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MapData {
    /// Places, in id order.
    pub places: Vec<PlaceData>,
    /// Undirected connections; each is stored in both directions.
    pub connections: Vec<ConnectionData>,
    /// Abbreviation of the hospital hunters are sent to.
    pub hospital: String,
    /// Abbreviation of Dracula's castle.
    pub castle: String,
    /// Rail timetable cycle length.
    #[serde(default = "default_rail_cycle")]
    pub rail_cycle: usize,
}

const fn default_rail_cycle() -> usize {
    DEFAULT_RAIL_CYCLE
}

/// The game map.
#[derive(Debug, Clone)]
pub struct Map {
    /// Places indexed by id.
    places: Vec<Place>,
    /// Adjacency lists indexed by id.
    connections: Vec<Vec<Connection>>,
    /// Abbreviation lookup.
    by_abbrev: HashMap<String, PlaceId>,
    /// Safe haven for hunters.
    hospital: PlaceId,
    /// Dracula's home.
    castle: PlaceId,
    /// Rail timetable cycle length.
    rail_cycle: usize,
}

impl Map {
    /// The standard map of Europe.
    ///
    /// # Panics
    ///
    /// Never in practice: the built-in tables are covered by tests.
    #[must_use]
    #[allow(clippy::missing_panics_doc, clippy::expect_used)]
    pub fn europe() -> Self {
        Self::from_data(europe::europe_data()).expect("built-in map data is valid")
    }

    /// Build a map from its serializable description.
    ///
    /// # Errors
    ///
    /// Returns an error if the data references unknown places, repeats a
    /// place or connection, contains a self-loop, or has a rail cycle that is
    /// zero or longer than [`MAX_RAIL_CYCLE`].
    pub fn from_data(data: MapData) -> Result<Self, MapError> {
        if data.places.len() > usize::from(u8::MAX) + 1 {
            return Err(MapError::TooManyPlaces(data.places.len()));
        }
        if data.rail_cycle == 0 {
            return Err(MapError::ZeroRailCycle);
        }
        if data.rail_cycle > MAX_RAIL_CYCLE {
            return Err(MapError::RailCycleTooLong {
                cycle: data.rail_cycle,
                max: MAX_RAIL_CYCLE,
            });
        }

        let mut by_abbrev = HashMap::with_capacity(data.places.len());
        let mut places = Vec::with_capacity(data.places.len());
        for (index, place) in data.places.into_iter().enumerate() {
            #[allow(clippy::cast_possible_truncation)]
            let id = PlaceId::new(index as u8);
            if by_abbrev.insert(place.abbrev.clone(), id).is_some() {
                return Err(MapError::DuplicatePlace(place.abbrev));
            }
            places.push(Place {
                abbrev: place.abbrev,
                name: place.name,
                kind: place.kind,
            });
        }

        let lookup = |abbrev: &str| {
            by_abbrev
                .get(abbrev)
                .copied()
                .ok_or_else(|| MapError::UnknownPlace(abbrev.to_string()))
        };

        let mut connections: Vec<Vec<Connection>> = vec![Vec::new(); places.len()];
        for edge in &data.connections {
            let from = lookup(&edge.from)?;
            let to = lookup(&edge.to)?;
            if from == to {
                return Err(MapError::SelfLoop(edge.from.clone()));
            }
            let forward = Connection {
                to,
                transport: edge.transport,
            };
            if connections[from.index()].contains(&forward) {
                return Err(MapError::DuplicateConnection {
                    from: edge.from.clone(),
                    to: edge.to.clone(),
                });
            }
            connections[from.index()].push(forward);
            connections[to.index()].push(Connection {
                to: from,
                transport: edge.transport,
            });
        }

        let hospital = lookup(&data.hospital)?;
        let castle = lookup(&data.castle)?;

        Ok(Self {
            places,
            connections,
            by_abbrev,
            hospital,
            castle,
            rail_cycle: data.rail_cycle,
        })
    }

    /// Parse a JSON map description.
    ///
    /// # Errors
    ///
    /// Returns an error if the JSON is malformed or fails validation.
    pub fn from_json(json: &str) -> Result<Self, MapError> {
        let data: MapData = serde_json::from_str(json)?;
        Self::from_data(data)
    }

    /// Number of places on the map.
    #[must_use]
    pub fn num_places(&self) -> usize {
        self.places.len()
    }

    /// Iterate over all place ids.
    pub fn place_ids(&self) -> impl Iterator<Item = PlaceId> + use<> {
        #[allow(clippy::cast_possible_truncation)]
        (0..self.places.len()).map(|index| PlaceId::new(index as u8))
    }

    /// Get a place by id.
    #[must_use]
    pub fn place(&self, id: PlaceId) -> Option<&Place> {
        self.places.get(id.index())
    }

    /// Look up a place by its two-letter code.
    #[must_use]
    pub fn find(&self, abbrev: &str) -> Option<PlaceId> {
        self.by_abbrev.get(abbrev).copied()
    }

    /// Two-letter code of a place, or `"??"` for an id not on this map.
    #[must_use]
    pub fn abbrev(&self, id: PlaceId) -> &str {
        self.place(id).map_or("??", |place| place.abbrev.as_str())
    }

    /// Log code of a resolved location.
    #[must_use]
    pub fn location_code(&self, location: Location) -> &str {
        match location {
            Location::Place(id) => self.abbrev(id),
            Location::CityUnknown => "C?",
            Location::SeaUnknown => "S?",
        }
    }

    /// Check if a place is a sea zone. Unknown ids are not.
    #[must_use]
    pub fn is_sea(&self, id: PlaceId) -> bool {
        self.place(id).is_some_and(|place| place.kind.is_sea())
    }

    /// Check if a resolved location is at sea.
    ///
    /// An undisclosed sea move counts as sea.
    #[must_use]
    pub fn is_sea_location(&self, location: Location) -> bool {
        match location {
            Location::Place(id) => self.is_sea(id),
            Location::SeaUnknown => true,
            Location::CityUnknown => false,
        }
    }

    /// Outgoing connections of a place, empty for an unknown id.
    #[must_use]
    pub fn connections(&self, id: PlaceId) -> &[Connection] {
        self.connections.get(id.index()).map_or(&[], Vec::as_slice)
    }

    /// Neighbours of a place reachable by a single connection of the given type.
    pub fn neighbours(&self, id: PlaceId, transport: Transport) -> impl Iterator<Item = PlaceId> + '_ {
        self.connections(id)
            .iter()
            .filter(move |conn| conn.transport == transport)
            .map(|conn| conn.to)
    }

    /// The hospital hunters are sent to when their health runs out.
    #[must_use]
    pub const fn hospital(&self) -> PlaceId {
        self.hospital
    }

    /// Dracula's castle: teleport target and blood-regeneration place.
    #[must_use]
    pub const fn castle(&self) -> PlaceId {
        self.castle
    }

    /// Rail timetable cycle length.
    #[must_use]
    pub const fn rail_cycle(&self) -> usize {
        self.rail_cycle
    }

    /// Number of rail legs that may be chained in one move.
    ///
    /// `offset` is the mover's position in turn order. Zero means rail is
    /// closed for that move.
    #[must_use]
    pub const fn rail_legs(&self, round: usize, offset: usize) -> usize {
        (round % self.rail_cycle + offset % self.rail_cycle) % self.rail_cycle
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn id(map: &Map, abbrev: &str) -> PlaceId {
        map.find(abbrev).unwrap()
    }

    #[test]
    fn test_europe_loads() {
        let map = Map::europe();
        assert_eq!(map.num_places(), 71);
        assert_eq!(map.abbrev(map.hospital()), "JM");
        assert_eq!(map.abbrev(map.castle()), "CD");
        assert_eq!(map.rail_cycle(), DEFAULT_RAIL_CYCLE);
    }

    #[test]
    fn test_connections_symmetric() {
        let map = Map::europe();
        for from in map.place_ids() {
            for conn in map.connections(from) {
                let back = Connection {
                    to: from,
                    transport: conn.transport,
                };
                assert!(
                    map.connections(conn.to).contains(&back),
                    "{} -> {} has no reverse edge",
                    map.abbrev(from),
                    map.abbrev(conn.to)
                );
            }
        }
    }

    #[test]
    fn test_seas_only_have_boats() {
        let map = Map::europe();
        for place in map.place_ids().filter(|&p| map.is_sea(p)) {
            assert!(
                map.connections(place)
                    .iter()
                    .all(|conn| conn.transport == Transport::Boat)
            );
        }
    }

    #[test]
    fn test_neighbours_by_type() {
        let map = Map::europe();
        let mut road: Vec<_> = map
            .neighbours(id(&map, "GA"), Transport::Road)
            .map(|p| map.abbrev(p).to_string())
            .collect();
        road.sort();
        assert_eq!(road, vec!["BC", "CD", "CN", "KL"]);
        assert_eq!(map.neighbours(id(&map, "AT"), Transport::Rail).count(), 0);
    }

    #[test]
    fn test_unknown_place_has_no_connections() {
        let map = Map::europe();
        assert!(map.connections(PlaceId::new(200)).is_empty());
        assert_eq!(map.abbrev(PlaceId::new(200)), "??");
    }

    #[test]
    fn test_rail_legs_cycle() {
        let map = Map::europe();
        assert_eq!(map.rail_legs(0, 0), 0);
        assert_eq!(map.rail_legs(1, 0), 1);
        assert_eq!(map.rail_legs(2, 0), 2);
        assert_eq!(map.rail_legs(1, 2), 3);
        assert_eq!(map.rail_legs(2, 2), 0);
    }

    #[test]
    fn test_location_code() {
        let map = Map::europe();
        assert_eq!(map.location_code(Location::CityUnknown), "C?");
        assert_eq!(map.location_code(Location::SeaUnknown), "S?");
        assert_eq!(map.location_code(Location::Place(id(&map, "ST"))), "ST");
        assert!(map.is_sea_location(Location::SeaUnknown));
        assert!(!map.is_sea_location(Location::CityUnknown));
    }

    #[test]
    fn test_from_json_rejects_unknown_place() {
        let json = r#"{
            "places": [{"abbrev": "AA", "name": "A", "kind": "land"}],
            "connections": [{"from": "AA", "to": "BB", "transport": "road"}],
            "hospital": "AA",
            "castle": "AA"
        }"#;
        assert!(matches!(
            Map::from_json(json),
            Err(MapError::UnknownPlace(abbrev)) if abbrev == "BB"
        ));
    }

    #[test]
    fn test_from_json_defaults_rail_cycle() {
        let json = r#"{
            "places": [
                {"abbrev": "AA", "name": "A", "kind": "land"},
                {"abbrev": "BB", "name": "B", "kind": "sea"}
            ],
            "connections": [{"from": "AA", "to": "BB", "transport": "boat"}],
            "hospital": "AA",
            "castle": "AA"
        }"#;
        let map = Map::from_json(json).unwrap();
        assert_eq!(map.rail_cycle(), DEFAULT_RAIL_CYCLE);
        assert!(map.is_sea(id(&map, "BB")));
        assert_eq!(map.connections(id(&map, "BB")).len(), 1);
    }

    #[test]
    fn test_from_data_rejects_duplicates() {
        let mut data = europe::europe_data();
        data.connections.push(ConnectionData {
            from: "GA".to_string(),
            to: "CD".to_string(),
            transport: Transport::Road,
        });
        assert!(matches!(
            Map::from_data(data),
            Err(MapError::DuplicateConnection { .. })
        ));

        let mut data = europe::europe_data();
        data.rail_cycle = 0;
        assert!(matches!(Map::from_data(data), Err(MapError::ZeroRailCycle)));

        let mut data = europe::europe_data();
        data.rail_cycle = MAX_RAIL_CYCLE;
        assert!(Map::from_data(data).is_ok());
    }
}
