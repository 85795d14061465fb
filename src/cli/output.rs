//! Output formatting utilities for CLI.

use fury::{GameView, Location, PlaceId, Player};
use serde::Serialize;
use std::fmt::Write;

use super::{CliError, OutputFormat, Setup};

/// JSON-serializable game state.
#[derive(Debug, Serialize)]
pub(super) struct JsonState {
    /// Current round.
    pub(super) round: usize,
    /// Player due to move.
    pub(super) current_player: String,
    /// Current score.
    pub(super) score: i32,
    /// Per-player summary in turn order.
    pub(super) players: Vec<JsonPlayer>,
    /// Immature vampire location (null if none).
    pub(super) vampire: Option<String>,
    /// Active trap locations, oldest first.
    pub(super) traps: Vec<String>,
}

/// JSON-serializable player summary.
#[derive(Debug, Serialize)]
pub(super) struct JsonPlayer {
    /// Log tag.
    pub(super) tag: char,
    /// Display name.
    pub(super) name: String,
    /// Health or blood points.
    pub(super) health: i32,
    /// Current location (null before the first move).
    pub(super) location: Option<String>,
    /// Public trail, newest first.
    pub(super) trail: Vec<String>,
}

impl JsonState {
    /// Create from a game view.
    pub(super) fn from_view(setup: &Setup, view: &GameView<'_>) -> Self {
        let code = |l: Location| setup.map.location_code(l).to_string();
        Self {
            round: view.round(),
            current_player: view.current_player().to_string(),
            score: view.score(),
            players: Player::ALL
                .iter()
                .map(|&player| JsonPlayer {
                    tag: player.tag(),
                    name: player.to_string(),
                    health: view.health(player),
                    location: view.location(player).map(code),
                    trail: view.trail(player).into_iter().map(code).collect(),
                })
                .collect(),
            vampire: view.vampire_location().map(code),
            traps: view.trap_locations().into_iter().map(code).collect(),
        }
    }
}

/// Format a game state as human-readable text.
pub(super) fn format_state_text(setup: &Setup, view: &GameView<'_>) -> String {
    let mut output = String::new();

    let _ = writeln!(
        output,
        "Round {} | {} to move | Score {}",
        view.round(),
        view.current_player(),
        view.score()
    );
    output.push('\n');

    for player in Player::ALL {
        let trail: Vec<String> = view
            .trail(player)
            .into_iter()
            .map(|l| setup.code(Some(l)))
            .collect();
        let _ = writeln!(
            output,
            "  {:<12} {:>3} hp  at {}  trail [{}]",
            player.to_string(),
            view.health(player),
            setup.code(view.location(player)),
            trail.join(" ")
        );
    }
    output.push('\n');

    let _ = writeln!(output, "  Vampire: {}", setup.code(view.vampire_location()));
    let traps: Vec<String> = view
        .trap_locations()
        .into_iter()
        .map(|l| setup.code(Some(l)))
        .collect();
    let _ = writeln!(output, "  Traps:   [{}]", traps.join(" "));

    output
}

/// Print a list of place codes.
///
/// # Errors
///
/// Returns an error if JSON serialization fails.
pub(super) fn print_places(
    setup: &Setup,
    places: &[PlaceId],
    format: OutputFormat,
) -> Result<(), CliError> {
    let codes: Vec<&str> = places.iter().map(|&p| setup.map.abbrev(p)).collect();
    match format {
        OutputFormat::Text => println!("{}", codes.join(" ")),
        OutputFormat::Json => println!("{}", serde_json::to_string(&codes)?),
    }
    Ok(())
}
