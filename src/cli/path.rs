//! Path command implementation.

use fury::Player;

use super::output::print_places;
use super::{CliError, OutputFormat, Setup};

/// Execute the path command.
///
/// # Errors
///
/// Returns an error if the log cannot be replayed, the destination is
/// unknown, or no route exists.
pub(crate) fn execute(
    setup: &Setup,
    log: &str,
    player: Player,
    to: &str,
    format: OutputFormat,
) -> Result<(), CliError> {
    if player.is_dracula() {
        return Err(CliError::new("Shortest paths are only available to hunters"));
    }

    let view = setup.view(log)?;
    let destination = setup.place(to)?;
    let path = view
        .shortest_path(player, destination)
        .ok_or_else(|| CliError::new(format!("No route for {player} to {to}")))?;

    print_places(setup, &path, format)
}
