use anyhow::{Context, Result};
use inquire::{Confirm, InquireError};
use std::io::BufRead;

mod spinner;
mod style;

pub use spinner::Spinner;
pub use style::Style;

/// Check if the inquire error is a user cancellation/interruption.
const fn is_prompt_cancelled(err: &InquireError) -> bool {
    matches!(
        err,
        InquireError::OperationCanceled | InquireError::OperationInterrupted
    )
}

/// Maps a prompt answer so that cancelling (Ctrl+C or Escape) means "no".
fn answer_or_decline(answer: Result<bool, InquireError>) -> Result<bool> {
    match answer {
        Ok(answer) => Ok(answer),
        Err(e) if is_prompt_cancelled(&e) => {
            eprintln!();
            Ok(false)
        }
        Err(e) => Err(e.into()),
    }
}

/// Asks a yes/no question on the terminal. Defaults to "no".
///
/// When standard input is not a terminal the answer is read as a plain line
/// instead, so answers can be piped in.
pub fn confirm(message: &str) -> Result<bool> {
    match Confirm::new(message).with_default(false).prompt() {
        Err(InquireError::NotTTY) => confirm_from_line(message, &mut std::io::stdin().lock()),
        answer => answer_or_decline(answer),
    }
}

/// Reads one line from `input`; only `y` (any case) is a yes. EOF is a no.
fn confirm_from_line<R: BufRead>(message: &str, input: &mut R) -> Result<bool> {
    eprint!("{message} (y/n): ");

    let mut line = String::new();
    let read = input
        .read_line(&mut line)
        .context("Failed to read answer from standard input")?;
    if read == 0 {
        eprintln!();
        return Ok(false);
    }

    Ok(line.trim().eq_ignore_ascii_case("y"))
}
