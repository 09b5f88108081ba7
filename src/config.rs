//! Runtime settings
//!
//! Every option can come from a flag or an environment variable; flags win.

use crate::storage::{FileStore, Store};
use crate::wordlists::{WordList, loader};
use std::path::PathBuf;
use std::sync::Arc;
use tracing::info;

/// Where state lives, which words to use and who is playing
#[derive(clap::Args, Debug, Clone)]
pub struct Settings {
    /// Directory for persisted targets and accounts
    #[arg(long, global = true, env = "WORDLE_DATA_DIR", default_value = "wordle-data")]
    pub data_dir: PathBuf,

    /// Directory with legal-N.txt / pickable-N.txt files (default: built-in lists)
    #[arg(long, global = true, env = "WORDLE_WORDS_DIR")]
    pub words_dir: Option<PathBuf>,

    /// Account to play as
    #[arg(short, long, global = true, env = "WORDLE_USER", default_value = "guest")]
    pub user: String,

    /// Password for the account; a new account is protected with it
    #[arg(long, global = true, env = "WORDLE_PASSWORD", hide_env_values = true)]
    pub password: Option<String>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from("wordle-data"),
            words_dir: None,
            user: "guest".to_string(),
            password: None,
        }
    }
}

impl Settings {
    /// Load the configured word list
    ///
    /// Falls back to the built-in lists when no directory is set.
    #[must_use]
    pub fn word_list(&self) -> WordList {
        let words = match &self.words_dir {
            Some(dir) => loader::load_dir(dir),
            None => WordList::embedded(),
        };
        info!(lengths = ?words.lengths(), "loaded word lists");
        words
    }

    /// File store rooted at the data directory
    #[must_use]
    pub fn store(&self) -> Arc<dyn Store> {
        Arc::new(FileStore::new(&self.data_dir))
    }
}
