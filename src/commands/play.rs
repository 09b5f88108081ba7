//! Line-based play mode
//!
//! Plays today's board for the configured account. Progress is saved after
//! every accepted guess so the board can be resumed later the same day.

use super::Context;
use crate::core::BoardConfig;
use crate::engine::GameSession;
use crate::output::{Theme, print_board, print_guess, print_outcome, print_statistics};
use anyhow::Result;
use colored::Colorize;
use std::io::{BufRead, Write};
use tracing::{info, instrument};

/// Options for one `play` run
#[derive(Debug, Clone, Copy, Default)]
pub struct PlayOptions {
    pub config: BoardConfig,
    /// Force hard mode on regardless of the account preference
    ///
    /// Only applies to a fresh board; a saved board keeps its own rules.
    pub hard: bool,
}

/// Play today's board, reading guesses from `input`
///
/// Returns the session as it stands when play stops, finished or not.
///
/// # Errors
///
/// Returns an error if the account or target cannot be loaded, state cannot
/// be saved, or reading/writing the terminal fails.
#[instrument(skip_all, fields(config = %options.config))]
pub fn run_play<R: BufRead, W: Write>(
    ctx: &Context,
    options: PlayOptions,
    input: &mut R,
    out: &mut W,
) -> Result<GameSession> {
    let mut account = ctx.account()?;
    let today = ctx.selector.today();
    account.prune_boards(today);
    let theme = Theme::from(account.preferences);

    // A board in progress keeps the rules it was started under.
    let (hard, saved) = match account.saved_board(options.config, today) {
        Some(board) => (board.hard_mode, board.guesses.clone()),
        None => (options.hard || account.preferences.hard_mode, Vec::new()),
    };
    let mut session = GameSession::resume(&ctx.selector, options.config, hard, &saved)?;

    writeln!(
        out,
        "{} {}{}",
        "Wordle".bright_cyan().bold(),
        options.config,
        if hard { " (hard mode)".yellow() } else { "".normal() }
    )?;
    print_board(out, &session, theme)?;

    if session.status().is_terminal() {
        writeln!(out, "You already finished today's {} board.", options.config)?;
        print_outcome(out, &session, theme)?;
        account.finish_session(&session, today)?;
        ctx.accounts.save(&account)?;
        return Ok(session);
    }

    writeln!(out, "Type a guess, or 'quit' to stop (progress is saved).\n")?;

    let mut line = String::new();
    while !session.status().is_terminal() {
        write!(
            out,
            "Guess {}/{}: ",
            session.guesses().len() + 1,
            options.config.rows()
        )?;
        out.flush()?;

        line.clear();
        if input.read_line(&mut line)? == 0 {
            writeln!(out)?;
            break;
        }

        let guess = line.trim();
        if guess.is_empty() {
            continue;
        }
        if matches!(guess, "quit" | "q" | "exit") {
            break;
        }

        match session.submit_guess(guess) {
            Ok(record) => {
                print_guess(out, &record, theme)?;
                account.save_board(&session, today);
                ctx.accounts.save(&account)?;
            }
            Err(err) => writeln!(out, "{} {err}", "✗".red())?,
        }
    }

    if session.status().is_terminal() {
        writeln!(out)?;
        print_outcome(out, &session, theme)?;
        if account.finish_session(&session, today)? {
            info!(status = ?session.status(), guesses = session.guesses().len(), "game recorded");
        }
        ctx.accounts.save(&account)?;
        print_statistics(out, &account.statistics, options.config, theme)?;
    } else {
        writeln!(out, "Board saved. Come back later today to finish it.")?;
    }

    Ok(session)
}
