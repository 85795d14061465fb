//! Tunable game constants.
//!
//! [`Rules::default`] is the standard game. Every field has a serde default,
//! so a JSON file only needs to name the values it overrides.

use serde::{Deserialize, Serialize};

/// Score and health constants applied during replay.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Rules {
    /// Score at the start of the game.
    pub start_score: i32,
    /// Score lost at the end of each Dracula turn.
    pub score_per_dracula_turn: i32,
    /// Score lost when a hunter is sent to hospital.
    pub score_hunter_hospital: i32,
    /// Score lost when a vampire matures.
    pub score_vampire_matures: i32,
    /// Starting and maximum hunter health.
    pub hunter_life: i32,
    /// Dracula's starting blood.
    pub dracula_blood: i32,
    /// Hunter health lost per trap.
    pub trap_damage: i32,
    /// Hunter health lost when meeting Dracula.
    pub hunter_hit_by_dracula: i32,
    /// Dracula blood lost when meeting a hunter.
    pub dracula_hit_by_hunter: i32,
    /// Dracula blood lost per turn at sea.
    pub sea_damage: i32,
    /// Dracula blood gained per turn in his castle.
    pub castle_regen: i32,
    /// Hunter health gained by staying put.
    pub rest_gain: i32,
}

impl Default for Rules {
    fn default() -> Self {
        Self {
            start_score: 366,
            score_per_dracula_turn: 1,
            score_hunter_hospital: 6,
            score_vampire_matures: 13,
            hunter_life: 9,
            dracula_blood: 40,
            trap_damage: 2,
            hunter_hit_by_dracula: 4,
            dracula_hit_by_hunter: 10,
            sea_damage: 2,
            castle_regen: 10,
            rest_gain: 3,
        }
    }
}

impl Rules {
    /// Parse rules from JSON. Missing fields keep their standard values.
    ///
    /// # Errors
    ///
    /// Returns an error if the JSON is malformed or has a field of the
    /// wrong type.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}
