//! Wordle Engine - CLI
//!
//! Play the daily board, score arbitrary guesses and manage an account.

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::io;
use wordle_engine::{
    commands::{Context, PlayOptions, PreferenceUpdate, run_check, run_play, run_settings, run_stats},
    config::Settings,
    core::BoardConfig,
    logging::init_tracing,
    output::Theme,
};

#[derive(Parser)]
#[command(
    name = "wordle_engine",
    about = "Daily Wordle on boards from 3x3 to 7x7, with hard mode and statistics",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    #[command(flatten)]
    settings: Settings,
}

#[derive(Subcommand)]
enum Commands {
    /// Play today's board (default)
    Play {
        /// Number of guesses allowed (3-7)
        #[arg(short, long, default_value_t = 6)]
        rows: u8,

        /// Word length (3-7)
        #[arg(short, long, default_value_t = 5)]
        cols: u8,

        /// Play in hard mode even if the account preference is off
        #[arg(long)]
        hard: bool,
    },

    /// Show the feedback a guess would get against a target
    Check {
        /// The target word
        target: String,

        /// The guessed word
        guess: String,
    },

    /// Show statistics for the current account
    Stats {
        /// Board rows for the histogram (default 6)
        #[arg(short, long)]
        rows: Option<u8>,

        /// Board columns for the histogram (default 5)
        #[arg(short, long)]
        cols: Option<u8>,
    },

    /// Show or change account preferences
    Settings {
        #[arg(long)]
        dark_mode: Option<bool>,

        #[arg(long)]
        high_contrast: Option<bool>,

        #[arg(long)]
        hard_mode: Option<bool>,

        /// Zero all statistics
        #[arg(long)]
        reset_stats: bool,

        /// Protect the account with a new password
        #[arg(long)]
        new_password: Option<String>,
    },
}

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play {
        rows: 6,
        cols: 5,
        hard: false,
    });

    let ctx = Context::open(&cli.settings);
    let mut stdout = io::stdout().lock();

    match command {
        Commands::Play { rows, cols, hard } => {
            let options = PlayOptions {
                config: BoardConfig::new(rows, cols)?,
                hard,
            };
            run_play(&ctx, options, &mut io::stdin().lock(), &mut stdout)?;
        }
        Commands::Check { target, guess } => {
            let theme = Theme::from(ctx.account()?.preferences);
            run_check(&target, &guess, theme, &mut stdout)?;
        }
        Commands::Stats { rows, cols } => {
            let config = match (rows, cols) {
                (None, None) => None,
                (rows, cols) => Some(BoardConfig::new(rows.unwrap_or(6), cols.unwrap_or(5))?),
            };
            run_stats(&ctx, config, &mut stdout)?;
        }
        Commands::Settings {
            dark_mode,
            high_contrast,
            hard_mode,
            reset_stats,
            new_password,
        } => {
            let update = PreferenceUpdate {
                dark_mode,
                high_contrast,
                hard_mode,
                reset_stats,
                new_password,
            };
            run_settings(&ctx, &update, &mut stdout)?;
        }
    }

    Ok(())
}
