//! Show account statistics

use super::Context;
use crate::core::BoardConfig;
use crate::output::{Theme, print_statistics};
use anyhow::Result;
use std::io::Write;

/// Print statistics for the configured account
///
/// The histogram is shown for `config`, or for the classic board when none
/// is given.
///
/// # Errors
///
/// Returns an error if the account cannot be loaded or writing fails.
pub fn run_stats<W: Write>(ctx: &Context, config: Option<BoardConfig>, out: &mut W) -> Result<()> {
    let account = ctx.account()?;
    let theme = Theme::from(account.preferences);
    print_statistics(
        out,
        &account.statistics,
        config.unwrap_or_default(),
        theme,
    )?;
    Ok(())
}
