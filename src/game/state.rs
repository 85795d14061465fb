//! Game state reconstruction.
//!
//! [`GameState::replay`] folds a parsed log into the state after the last
//! play. The fold is all-or-nothing: any malformed or out-of-turn play
//! aborts the replay and no state is returned.

use tracing::{debug, trace};

use crate::error::GameError;
use crate::game::{
    parse_plays, resolve_at, Action, DraculaAction, Expiry, HunterEncounter, Play, Player,
    PlayerState, NUM_PLAYERS, TRAIL_SIZE,
};
use crate::map::{Location, Map};
use crate::rules::Rules;

/// Complete game state after replaying a log.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    /// Number of plays replayed.
    turns: usize,
    /// Current score.
    score: i32,
    /// Per-player state in turn order.
    players: [PlayerState; NUM_PLAYERS],
    /// Location of the immature vampire, if one is waiting to mature.
    vampire: Option<Location>,
    /// Locations of active traps, oldest first. A location may repeat.
    /// Never longer than [`TRAIL_SIZE`].
    traps: Vec<Location>,
    /// Constants the state was built with.
    rules: Rules,
}

impl GameState {
    /// State before anyone has moved.
    #[must_use]
    pub fn new(rules: Rules) -> Self {
        let players = Player::ALL.map(|player| {
            if player.is_dracula() {
                PlayerState::new(rules.dracula_blood)
            } else {
                PlayerState::new(rules.hunter_life)
            }
        });

        Self {
            turns: 0,
            score: rules.start_score,
            players,
            vampire: None,
            traps: Vec::new(),
            rules,
        }
    }

    /// Replay plays with the standard rules.
    ///
    /// # Errors
    ///
    /// Returns an error if a play is out of turn or a relative move cannot
    /// be resolved.
    pub fn replay(plays: &[Play], map: &Map) -> Result<Self, GameError> {
        Self::replay_with(plays, map, &Rules::default())
    }

    /// Replay plays with the given rules.
    ///
    /// # Errors
    ///
    /// Returns an error if a play is out of turn or a relative move cannot
    /// be resolved.
    pub fn replay_with(plays: &[Play], map: &Map, rules: &Rules) -> Result<Self, GameError> {
        let mut state = Self::new(*rules);
        for play in plays {
            state.apply(play, map)?;
        }
        for player in &mut state.players {
            player.health = player.health.max(0);
        }
        Ok(state)
    }

    /// Parse and replay a log with the standard rules.
    ///
    /// # Errors
    ///
    /// Returns an error if the log is malformed or cannot be replayed.
    pub fn from_log(log: &str, map: &Map) -> Result<Self, GameError> {
        Self::from_log_with(log, map, &Rules::default())
    }

    /// Parse and replay a log with the given rules.
    ///
    /// # Errors
    ///
    /// Returns an error if the log is malformed or cannot be replayed.
    pub fn from_log_with(log: &str, map: &Map, rules: &Rules) -> Result<Self, GameError> {
        let plays = parse_plays(log, map)?;
        Self::replay_with(&plays, map, rules)
    }

    fn apply(&mut self, play: &Play, map: &Map) -> Result<(), GameError> {
        let index = self.turns;
        let expected = self.current_player();
        if play.player != expected {
            return Err(GameError::OutOfTurn {
                play: index,
                expected,
                found: play.player,
            });
        }

        let state = &mut self.players[play.player.index()];
        state.moves.push(play.mv);
        let location = resolve_at(map, &state.moves, state.moves.len() - 1)
            .map_err(|source| GameError::Resolve { play: index, source })?;
        state.locations.push(location);
        state.trail.push(location);

        trace!(
            play = index,
            player = %play.player,
            code = play.mv.code(map),
            at = map.location_code(location),
            "replay"
        );

        match &play.action {
            Action::Hunter(encounters) => self.hunter_turn(play.player, location, encounters),
            Action::Dracula(action) => self.dracula_turn(location, *action, map),
        }

        self.turns += 1;
        Ok(())
    }

    fn hunter_turn(&mut self, player: Player, location: Location, encounters: &[HunterEncounter]) {
        let rules = self.rules;
        let index = player.index();

        if self.players[index].in_hospital {
            self.players[index].health = rules.hunter_life;
            self.players[index].in_hospital = false;
        }

        let mut hospitalised = false;
        for encounter in encounters {
            match encounter {
                HunterEncounter::Trap => {
                    if let Some(pos) = self.traps.iter().position(|&t| t == location) {
                        self.traps.remove(pos);
                    }
                    self.players[index].health -= rules.trap_damage;
                }
                HunterEncounter::ImmatureVampire => {
                    debug!(%player, "vampire vanquished");
                    self.vampire = None;
                }
                HunterEncounter::Dracula => {
                    self.players[index].health -= rules.hunter_hit_by_dracula;
                    self.players[Player::Dracula.index()].health -= rules.dracula_hit_by_hunter;
                }
            }
            if self.players[index].health <= 0 {
                debug!(%player, "hunter sent to hospital");
                let state = &mut self.players[index];
                state.health = 0;
                state.in_hospital = true;
                self.score -= rules.score_hunter_hospital;
                hospitalised = true;
                break;
            }
        }

        let state = &mut self.players[index];
        if !hospitalised && state.previous_location() == Some(location) {
            state.health = (state.health + rules.rest_gain).min(rules.hunter_life);
        }
    }

    fn dracula_turn(&mut self, location: Location, action: DraculaAction, map: &Map) {
        let rules = self.rules;

        match action.expiry {
            Some(Expiry::TrapMalfunction) => {
                let departed = self.players[Player::Dracula.index()].trail.departed();
                if let Some(pos) = departed.and_then(|d| self.traps.iter().position(|&t| t == d)) {
                    debug!(at = map.location_code(self.traps[pos]), "trap malfunction");
                    self.traps.remove(pos);
                }
            }
            Some(Expiry::VampireMatured) => {
                debug!("vampire matured");
                self.score -= rules.score_vampire_matures;
                self.vampire = None;
            }
            None => {}
        }

        if action.placed_trap {
            if self.traps.len() >= TRAIL_SIZE {
                self.evict_trap(map);
            }
            self.traps.push(location);
        }
        if action.placed_vampire {
            self.vampire = Some(location);
        }

        let dracula = &mut self.players[Player::Dracula.index()];
        if map.is_sea_location(location) {
            dracula.health -= rules.sea_damage;
        }
        if location == Location::Place(map.castle()) {
            dracula.health += rules.castle_regen;
        }

        self.score -= rules.score_per_dracula_turn;
    }

    /// Make room for a new trap: the one on the departed trail entry goes
    /// first, otherwise the oldest.
    fn evict_trap(&mut self, map: &Map) {
        let departed = self.players[Player::Dracula.index()].trail.departed();
        let pos = departed
            .and_then(|d| self.traps.iter().position(|&t| t == d))
            .unwrap_or(0);
        debug!(at = map.location_code(self.traps[pos]), "trap evicted");
        self.traps.remove(pos);
    }

    /// Number of plays replayed.
    #[must_use]
    pub const fn turns(&self) -> usize {
        self.turns
    }

    /// Current round, starting at 0.
    #[must_use]
    pub const fn round(&self) -> usize {
        self.turns / NUM_PLAYERS
    }

    /// Player whose turn it is.
    #[must_use]
    pub const fn current_player(&self) -> Player {
        match Player::from_index(self.turns % NUM_PLAYERS) {
            Some(player) => player,
            None => Player::Godalming,
        }
    }

    /// Current score.
    #[must_use]
    pub const fn score(&self) -> i32 {
        self.score
    }

    /// Current health or blood points. Never negative.
    #[must_use]
    pub const fn health(&self, player: Player) -> i32 {
        self.players[player.index()].health
    }

    /// Full state of one player.
    #[must_use]
    pub const fn player(&self, player: Player) -> &PlayerState {
        &self.players[player.index()]
    }

    /// Location of the immature vampire, if any.
    #[must_use]
    pub const fn vampire(&self) -> Option<Location> {
        self.vampire
    }

    /// Locations of active traps, oldest first.
    #[must_use]
    pub fn traps(&self) -> &[Location] {
        &self.traps
    }

    /// Constants used for this replay.
    #[must_use]
    pub const fn rules(&self) -> &Rules {
        &self.rules
    }
}
