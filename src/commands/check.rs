//! Score an arbitrary guess against an arbitrary target

use crate::core::{GuessRecord, Word};
use crate::output::{Theme, print_guess};
use anyhow::{Result, bail};
use std::io::Write;

/// Print the feedback `guess` would get against `target`
///
/// Neither word has to be in a word list; they only need the same length.
///
/// # Errors
///
/// Returns an error if either word is invalid, the lengths differ, or
/// writing fails.
pub fn run_check<W: Write>(target: &str, guess: &str, theme: Theme, out: &mut W) -> Result<GuessRecord> {
    let target = Word::new(target)?;
    let guess = Word::new(guess)?;
    if target.len() != guess.len() {
        bail!(
            "guess has {} letters but target has {}",
            guess.len(),
            target.len()
        );
    }

    let record = GuessRecord::score(guess, &target);
    print_guess(out, &record, theme)?;
    Ok(record)
}
