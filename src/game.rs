//! Game layer.
//!
//! Turns a play log into game state:
//! - Players and their per-player state
//! - Move tokens and log parsing
//! - Trails and relative-move resolution
//! - Replay of plays into a [`GameState`]

mod play;
mod player;
mod state;
mod trail;

pub use play::{
    parse_plays, Action, DraculaAction, Expiry, HunterEncounter, Move, Play, MAX_DOUBLE_BACK,
    PLAY_WIDTH,
};
pub use player::{Player, PlayerState, NUM_PLAYERS};
pub use state::GameState;
pub use trail::{resolve_at, Trail, RETAINED_DEPTH, TRAIL_SIZE};
