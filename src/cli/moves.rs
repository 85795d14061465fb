//! Moves command implementation.

use fury::{Move, Player};

use super::{CliError, OutputFormat, Setup};

/// Execute the moves command.
///
/// Hunters get the places they can reach; Dracula gets his legal move codes,
/// including hides and double-backs, or `TP` when he is cornered.
///
/// # Errors
///
/// Returns an error if the log cannot be replayed.
pub(crate) fn execute(setup: &Setup, log: &str, format: OutputFormat) -> Result<(), CliError> {
    let view = setup.view(log)?;
    let player = view.current_player();

    let codes: Vec<String> = if player == Player::Dracula {
        if view.dracula_must_teleport() {
            vec![Move::Teleport.code(&setup.map).to_string()]
        } else {
            view.dracula_valid_moves()
                .into_iter()
                .map(|mv| mv.code(&setup.map).to_string())
                .collect()
        }
    } else {
        view.where_can_they_go(player)
            .into_iter()
            .map(|place| setup.map.abbrev(place).to_string())
            .collect()
    };
    tracing::debug!(%player, count = codes.len(), "Valid moves");

    match format {
        OutputFormat::Text => {
            if codes.is_empty() {
                println!("{player}: any starting place");
            } else {
                println!("{player}: {}", codes.join(" "));
            }
        }
        OutputFormat::Json => {
            let json = serde_json::json!({
                "player": player.to_string(),
                "moves": codes,
            });
            println!("{}", serde_json::to_string_pretty(&json)?);
        }
    }

    Ok(())
}
