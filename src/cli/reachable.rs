//! Reachable command implementation.

use fury::{Location, Player, TransportMask};

use super::output::print_places;
use super::{CliError, OutputFormat, Setup};

/// Execute the reachable command.
///
/// # Errors
///
/// Returns an error if the log cannot be replayed, the origin is unknown,
/// or the player has no known location to start from.
pub(crate) fn execute(
    setup: &Setup,
    log: &str,
    player: Player,
    from: Option<&str>,
    round: Option<usize>,
    mask: TransportMask,
    format: OutputFormat,
) -> Result<(), CliError> {
    let view = setup.view(log)?;

    let origin = match from {
        Some(code) => setup.place(code)?,
        None => view
            .location(player)
            .and_then(Location::place)
            .ok_or_else(|| CliError::new(format!("{player} has no known location; pass --from")))?,
    };
    let round = round.unwrap_or_else(|| view.next_round(player));

    let places = view.reachable_by_type(player, round, origin, mask);
    tracing::debug!(%player, round, count = places.len(), "Reachable");
    print_places(setup, &places, format)
}
