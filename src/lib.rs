// Allow unwrap in tests (test code is not production)
#![cfg_attr(test, allow(clippy::unwrap_used))]
//! Fury: a deterministic state engine for a hidden-movement pursuit game.
//!
//! Four hunters chase Dracula across a map of Europe. Hunters move in the
//! open; Dracula moves covertly and may conceal, hide, double back or
//! teleport. This crate provides:
//! - Replay of a play log into the full game state
//! - Resolution of Dracula's relative moves through his trail
//! - Reachability and shortest-path queries with the rail timetable
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────┐
//! │   GameView (queries, valid moves)   │
//! ├──────────────────┬──────────────────┤
//! │  Replay (game)   │  Queries (query) │
//! ├──────────────────┴──────────────────┤
//! │       Transportation graph (map)    │
//! └─────────────────────────────────────┘
//! ```
//!
//! # Example
//!
//! ```
//! use fury::{GameView, Map, Player};
//!
//! let map = Map::europe();
//! let view = GameView::new("GST.... SAO.... HZU.... MBB.... DC?.V..", &map).unwrap();
//! assert_eq!(view.round(), 1);
//! assert_eq!(view.current_player(), Player::Godalming);
//! assert_eq!(view.score(), 365);
//! ```

pub mod error;
pub mod game;
pub mod map;
pub mod query;
pub mod rules;
pub mod view;

pub use error::{GameError, MapError, ParseError, ResolveError};

// Re-export key types at crate root for convenience
pub use game::{GameState, Move, Play, Player};
pub use map::{Location, Map, PlaceId, Transport, TransportMask};
pub use rules::Rules;
pub use view::GameView;
