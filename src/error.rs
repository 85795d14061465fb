//! Error types for log parsing, trail resolution, replay and map loading.
//!
//! Every error here is fatal for the operation that raised it: a replay that
//! fails returns no partial state. Query misuse (unknown places, out-of-range
//! history lengths) is not an error and degrades to empty results instead.

use thiserror::Error;

/// Failure to tokenize a play log.
///
/// `group` is the zero-based index of the offending play in the log.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// A play is not exactly seven characters wide.
    #[error("play {group}: expected 7 characters, found {width}")]
    BadWidth {
        /// Index of the play.
        group: usize,
        /// Actual width in characters.
        width: usize,
    },
    /// The first character is not a player tag.
    #[error("play {group}: unknown player tag {tag:?}")]
    UnknownPlayer {
        /// Index of the play.
        group: usize,
        /// The offending character.
        tag: char,
    },
    /// The location code is not valid for the player.
    #[error("play {group}: unknown location code {code:?}")]
    UnknownLocation {
        /// Index of the play.
        group: usize,
        /// The two-character code.
        code: String,
    },
    /// An encounter or action character is not allowed in its position.
    #[error("play {group}: bad action character {found:?} at position {position}")]
    BadEncounter {
        /// Index of the play.
        group: usize,
        /// Character position within the play (3..=6).
        position: usize,
        /// The offending character.
        found: char,
    },
}

/// Failure to resolve a relative move token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ResolveError {
    /// A hide or double-back points before the first recorded move.
    #[error("move {index} refers {offset} moves back, before the start of history")]
    BeforeHistory {
        /// Index of the move being resolved.
        index: usize,
        /// How far back the token points.
        offset: usize,
    },
}

/// Failure to replay a play log.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GameError {
    /// The log could not be tokenized.
    #[error(transparent)]
    Parse(#[from] ParseError),
    /// A relative move could not be resolved.
    #[error("play {play}: {source}")]
    Resolve {
        /// Index of the play.
        play: usize,
        /// Underlying resolution failure.
        source: ResolveError,
    },
    /// A play was made by someone other than the player whose turn it is.
    #[error("play {play}: expected {expected} to move, found {found}")]
    OutOfTurn {
        /// Index of the play.
        play: usize,
        /// Player due to move.
        expected: crate::game::Player,
        /// Player found in the log.
        found: crate::game::Player,
    },
}

/// Failure to build a map.
#[derive(Debug, Error)]
pub enum MapError {
    /// The JSON description could not be decoded.
    #[error("invalid map JSON: {0}")]
    Json(#[from] serde_json::Error),
    /// A connection or special place names an abbreviation not on the map.
    #[error("unknown place {0:?}")]
    UnknownPlace(String),
    /// Two places share an abbreviation.
    #[error("duplicate place {0:?}")]
    DuplicatePlace(String),
    /// The same connection is listed twice.
    #[error("duplicate connection {from} - {to}")]
    DuplicateConnection {
        /// One endpoint.
        from: String,
        /// The other endpoint.
        to: String,
    },
    /// A connection joins a place to itself.
    #[error("connection from {0:?} to itself")]
    SelfLoop(String),
    /// More places than a [`PlaceId`](crate::map::PlaceId) can index.
    #[error("too many places: {0}")]
    TooManyPlaces(usize),
    /// The rail timetable cycle is zero.
    #[error("rail cycle must be positive")]
    ZeroRailCycle,
    /// The rail timetable cycle exceeds the supported maximum.
    #[error("rail cycle {cycle} is longer than the maximum of {max}")]
    RailCycleTooLong {
        /// Declared cycle.
        cycle: usize,
        /// Largest accepted cycle.
        max: usize,
    },
}
