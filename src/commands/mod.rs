//! Command implementations

pub mod check;
pub mod play;
pub mod settings;
pub mod stats;

pub use check::run_check;
pub use play::{PlayOptions, run_play};
pub use settings::{PreferenceUpdate, run_settings};
pub use stats::run_stats;

use crate::config::Settings;
use crate::engine::{Clock, SystemClock, TargetSelector};
use crate::error::AccountError;
use crate::stats::{Accounts, UserAccount};
use crate::storage::Store;
use crate::wordlists::WordList;
use std::sync::Arc;

/// Shared state every command works against
pub struct Context {
    pub user: String,
    pub password: Option<String>,
    pub selector: TargetSelector,
    pub accounts: Accounts,
}

impl Context {
    /// Build a context from settings, using the wall clock
    #[must_use]
    pub fn open(settings: &Settings) -> Self {
        let mut ctx = Self::with_parts(
            &settings.user,
            Arc::new(settings.word_list()),
            settings.store(),
            Arc::new(SystemClock),
        );
        ctx.password.clone_from(&settings.password);
        ctx
    }

    #[must_use]
    pub fn with_parts(
        user: &str,
        words: Arc<WordList>,
        store: Arc<dyn Store>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            user: user.to_string(),
            password: None,
            selector: TargetSelector::new(words, Arc::clone(&store), clock),
            accounts: Accounts::new(store),
        }
    }

    /// Open the account of the configured user
    ///
    /// # Errors
    /// See [`Accounts::load`].
    pub fn account(&self) -> Result<UserAccount, AccountError> {
        self.accounts.load(&self.user, self.password.as_deref())
    }
}
