//! State command implementation.

use super::output::{format_state_text, JsonState};
use super::{CliError, OutputFormat, Setup};

/// Execute the state command.
///
/// # Errors
///
/// Returns an error if the log cannot be replayed.
pub(crate) fn execute(setup: &Setup, log: &str, format: OutputFormat) -> Result<(), CliError> {
    let view = setup.view(log)?;

    match format {
        OutputFormat::Text => print!("{}", format_state_text(setup, &view)),
        OutputFormat::Json => {
            let json = JsonState::from_view(setup, &view);
            println!("{}", serde_json::to_string_pretty(&json)?);
        }
    }

    Ok(())
}
