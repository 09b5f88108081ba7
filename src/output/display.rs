//! Display functions for boards, results and statistics

use super::formatters::{create_progress_bar, empty_row, feedback_to_emoji, guess_tiles};
use super::theme::Theme;
use crate::core::{BoardConfig, GuessRecord};
use crate::engine::{GameSession, SessionStatus};
use crate::stats::{Preferences, UserStatistics};
use colored::Colorize;
use std::io::{self, Write};

const BAR_WIDTH: usize = 30;

/// Print the rows played so far and empty rows for the rest
///
/// # Errors
/// Returns any error from writing to `out`.
pub fn print_board<W: Write>(out: &mut W, session: &GameSession, theme: Theme) -> io::Result<()> {
    let config = session.config();
    writeln!(out)?;
    for record in session.guesses() {
        writeln!(out, "  {}", guess_tiles(record, theme))?;
    }
    for _ in 0..session.remaining() {
        writeln!(out, "  {}", empty_row(config.word_len()).bright_black())?;
    }
    writeln!(out)
}

/// Print one scored guess
///
/// # Errors
/// Returns any error from writing to `out`.
pub fn print_guess<W: Write>(out: &mut W, record: &GuessRecord, theme: Theme) -> io::Result<()> {
    writeln!(
        out,
        "  {}  {}",
        guess_tiles(record, theme),
        record.feedback.to_string().bright_black()
    )
}

/// Print the end-of-game banner and a shareable grid
///
/// Prints nothing while the game is still running.
///
/// # Errors
/// Returns any error from writing to `out`.
pub fn print_outcome<W: Write>(out: &mut W, session: &GameSession, theme: Theme) -> io::Result<()> {
    let config = session.config();
    let hard = if session.is_hard_mode() { "*" } else { "" };

    match session.status() {
        SessionStatus::InProgress => return Ok(()),
        SessionStatus::Won => {
            let used = session.guesses().len();
            writeln!(
                out,
                "{}",
                format!("Solved in {used}/{}{hard}!", config.rows()).green().bold()
            )?;
        }
        SessionStatus::Lost => {
            writeln!(
                out,
                "{} {}",
                "Out of guesses. The word was".red().bold(),
                session.target().text().to_uppercase().bright_yellow().bold()
            )?;
        }
    }

    writeln!(out)?;
    writeln!(out, "Wordle {config}{hard}")?;
    for record in session.guesses() {
        writeln!(out, "{}", feedback_to_emoji(&record.feedback, theme))?;
    }
    writeln!(out)
}

/// Print counters, streaks and the guess histogram for `config`
///
/// # Errors
/// Returns any error from writing to `out`.
pub fn print_statistics<W: Write>(
    out: &mut W,
    stats: &UserStatistics,
    config: BoardConfig,
    theme: Theme,
) -> io::Result<()> {
    writeln!(out, "\n{}", "STATISTICS".bright_cyan().bold())?;
    writeln!(out, "   Played:          {}", stats.games_played())?;
    writeln!(
        out,
        "   Win %:           {}",
        format!("{:.0}", stats.win_rate() * 100.0).bright_yellow()
    )?;
    writeln!(out, "   Current streak:  {}", stats.current_streak())?;
    writeln!(out, "   Max streak:      {}", stats.max_streak())?;

    let dist = stats.distribution(config);
    let max = dist.max();
    writeln!(
        out,
        "\n{} {}",
        "GUESS DISTRIBUTION".bright_cyan().bold(),
        config.to_string().bright_black()
    )?;
    for (guesses, count) in dist.iter() {
        let bar = create_progress_bar(f64::from(count), f64::from(max), BAR_WIDTH);
        let bar = if count == max && max > 0 {
            bar.custom_color(theme.highlight())
        } else {
            bar.bright_black()
        };
        writeln!(out, "   {guesses}: {bar} {count}")?;
    }
    writeln!(out)
}

/// Print the current preferences
///
/// # Errors
/// Returns any error from writing to `out`.
pub fn print_preferences<W: Write>(out: &mut W, username: &str, prefs: Preferences) -> io::Result<()> {
    let flag = |on: bool| if on { "on".green() } else { "off".bright_black() };

    writeln!(out, "\n{} {}", "SETTINGS".bright_cyan().bold(), username.bright_white())?;
    writeln!(out, "   Dark mode:       {}", flag(prefs.dark_mode))?;
    writeln!(out, "   High contrast:   {}", flag(prefs.high_contrast))?;
    writeln!(out, "   Hard mode:       {}", flag(prefs.hard_mode))?;
    writeln!(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Word;
    use crate::wordlists::WordList;
    use std::sync::Arc;

    fn render<F>(f: F) -> String
    where
        F: FnOnce(&mut Vec<u8>) -> io::Result<()>,
    {
        colored::control::set_override(false);
        let mut buf = Vec::new();
        f(&mut buf).unwrap();
        String::from_utf8(buf).unwrap()
    }

    fn finished_game() -> GameSession {
        let words = Arc::new(WordList::from_words(["thank"], ["smart"]));
        let mut game =
            GameSession::new(BoardConfig::CLASSIC, Word::new("smart").unwrap(), words, false)
                .unwrap();
        game.submit_guess("thank").unwrap();
        game.submit_guess("smart").unwrap();
        game
    }

    #[test]
    fn outcome_includes_share_grid() {
        let game = finished_game();
        let text = render(|out| print_outcome(out, &game, Theme::default()));

        assert!(text.contains("Solved in 2/6!"));
        assert!(text.contains("Wordle 6x5"));
        assert!(text.contains("🟨⬜🟩⬜⬜\n🟩🟩🟩🟩🟩"));
    }

    #[test]
    fn board_pads_unused_rows() {
        let game = finished_game();
        let text = render(|out| print_board(out, &game, Theme::default()));
        assert_eq!(text.matches(" · ").count(), 4 * 5);
    }

    #[test]
    fn statistics_show_histogram_for_board() {
        let mut stats = UserStatistics::new();
        stats.record_outcome(BoardConfig::CLASSIC, true, 3).unwrap();
        stats.record_outcome(BoardConfig::CLASSIC, false, 6).unwrap();

        let text = render(|out| print_statistics(out, &stats, BoardConfig::CLASSIC, Theme::default()));
        assert!(text.contains("Played:          2"));
        assert!(text.contains("Win %:           50"));
        assert!(text.contains(&format!("3: {} 1", "█".repeat(BAR_WIDTH))));
        assert!(text.contains("6: "));
        assert!(!text.contains("7: "));
    }
}
