//! CLI command implementations for Fury.

pub(crate) mod moves;
pub(crate) mod path;
pub(crate) mod reachable;
pub(crate) mod state;

mod output;

use clap::ValueEnum;
use fury::{GameError, GameView, Location, Map, MapError, PlaceId, Player, Rules, TransportMask};
use std::error::Error;
use std::fmt;
use std::fs;
use std::path::Path;

/// Output format for every command.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub(crate) enum OutputFormat {
    /// Human-readable text output.
    Text,
    /// Machine-readable JSON output.
    Json,
}

/// Player selector accepting names or log tags.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub(crate) enum PlayerArg {
    /// Lord Godalming.
    #[value(alias = "G")]
    Godalming,
    /// Dr. Seward.
    #[value(alias = "S")]
    Seward,
    /// Van Helsing.
    #[value(alias = "H")]
    VanHelsing,
    /// Mina Harker.
    #[value(alias = "M")]
    Mina,
    /// Dracula.
    #[value(alias = "D")]
    Dracula,
}

impl From<PlayerArg> for Player {
    fn from(arg: PlayerArg) -> Self {
        match arg {
            PlayerArg::Godalming => Player::Godalming,
            PlayerArg::Seward => Player::Seward,
            PlayerArg::VanHelsing => Player::VanHelsing,
            PlayerArg::Mina => Player::Mina,
            PlayerArg::Dracula => Player::Dracula,
        }
    }
}

/// Map and rules shared by every command.
#[derive(Debug)]
pub(crate) struct Setup {
    pub(crate) map: Map,
    pub(crate) rules: Rules,
}

impl Setup {
    /// Load the map and rules, falling back to the built-in defaults.
    ///
    /// # Errors
    ///
    /// Returns an error if a file cannot be read or parsed.
    pub(crate) fn load(map_path: Option<&Path>, rules_path: Option<&Path>) -> Result<Self, CliError> {
        let map = match map_path {
            Some(path) => {
                let json = fs::read_to_string(path).map_err(|e| {
                    CliError::new(format!("Failed to read map {}: {e}", path.display()))
                })?;
                let map = Map::from_json(&json)?;
                tracing::info!(path = %path.display(), places = map.num_places(), "Loaded map");
                map
            }
            None => Map::europe(),
        };

        let rules = match rules_path {
            Some(path) => {
                let json = fs::read_to_string(path).map_err(|e| {
                    CliError::new(format!("Failed to read rules {}: {e}", path.display()))
                })?;
                let rules = Rules::from_json(&json)
                    .map_err(|e| CliError::new(format!("Invalid rules {}: {e}", path.display())))?;
                tracing::info!(path = %path.display(), "Loaded rules");
                rules
            }
            None => Rules::default(),
        };

        Ok(Self { map, rules })
    }

    /// Replay a log against this setup.
    ///
    /// # Errors
    ///
    /// Returns an error if the log is malformed or cannot be replayed.
    pub(crate) fn view(&self, log: &str) -> Result<GameView<'_>, CliError> {
        let view = GameView::with_rules(log, &self.map, &self.rules)?;
        tracing::debug!(round = view.round(), score = view.score(), "Replayed log");
        Ok(view)
    }

    /// Look up a place code.
    ///
    /// # Errors
    ///
    /// Returns an error if the code is not on the map.
    pub(crate) fn place(&self, code: &str) -> Result<PlaceId, CliError> {
        self.map
            .find(code)
            .ok_or_else(|| CliError::new(format!("Unknown place {code:?}")))
    }

    /// Log code of an optional location, `--` for nowhere.
    pub(crate) fn code(&self, location: Option<Location>) -> String {
        location.map_or_else(|| "--".to_string(), |l| self.map.location_code(l).to_string())
    }
}

/// Build a transport mask; no flags at all means every transport.
pub(crate) const fn transport_mask(road: bool, rail: bool, boat: bool) -> TransportMask {
    if road || rail || boat {
        TransportMask::new(road, rail, boat)
    } else {
        TransportMask::ALL
    }
}

/// CLI error type.
#[derive(Debug)]
pub(crate) struct CliError {
    message: String,
}

impl CliError {
    /// Create a new CLI error.
    pub(crate) fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl Error for CliError {}

impl From<GameError> for CliError {
    fn from(e: GameError) -> Self {
        Self::new(format!("Invalid log: {e}"))
    }
}

impl From<MapError> for CliError {
    fn from(e: MapError) -> Self {
        Self::new(format!("Invalid map: {e}"))
    }
}

impl From<serde_json::Error> for CliError {
    fn from(e: serde_json::Error) -> Self {
        Self::new(e.to_string())
    }
}
