//! Player accounts: preferences, statistics and boards in progress

use super::credential::{hash_password, verify_password};
use super::statistics::UserStatistics;
use crate::core::{BoardConfig, Word};
use crate::engine::GameSession;
use crate::error::{AccountError, ConfigurationError, StorageError};
use crate::storage::{Store, load_record, save_record};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::sync::Arc;
use tracing::{debug, info, instrument, warn};

const MAX_USERNAME_LEN: usize = 32;

/// Display and rules preferences
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Preferences {
    pub dark_mode: bool,
    pub high_contrast: bool,
    pub hard_mode: bool,
}

/// Guesses made on one board on one day
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SavedBoard {
    pub date: NaiveDate,
    pub guesses: Vec<Word>,
    /// Rules the board was started under; a resumed board keeps them
    #[serde(default)]
    pub hard_mode: bool,
    /// Set once the finished game has been counted in the statistics
    #[serde(default)]
    pub recorded: bool,
}

/// Everything persisted for one player
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserAccount {
    username: String,
    #[serde(default)]
    pub preferences: Preferences,
    #[serde(default)]
    pub statistics: UserStatistics,
    #[serde(default)]
    saved_boards: BTreeMap<BoardConfig, SavedBoard>,
    /// Argon2 hash; accounts without one open with any password
    #[serde(default, skip_serializing_if = "Option::is_none")]
    password_hash: Option<String>,
}

impl UserAccount {
    /// Fresh account with default preferences and empty statistics
    ///
    /// # Errors
    /// Returns `ConfigurationError::Username` if the name is not a valid key.
    pub fn new(username: &str) -> Result<Self, ConfigurationError> {
        Ok(Self {
            username: normalize_username(username)?,
            preferences: Preferences::default(),
            statistics: UserStatistics::new(),
            saved_boards: BTreeMap::new(),
            password_hash: None,
        })
    }

    #[must_use]
    pub fn username(&self) -> &str {
        &self.username
    }

    /// Protect the account with `password`, replacing any previous one
    ///
    /// # Errors
    /// See [`hash_password`].
    pub fn set_password(&mut self, password: &str) -> Result<(), AccountError> {
        self.password_hash = Some(hash_password(password)?);
        Ok(())
    }

    #[must_use]
    pub fn has_password(&self) -> bool {
        self.password_hash.is_some()
    }

    /// Check `password` against the stored hash
    ///
    /// # Errors
    /// Returns `AccountError::PasswordRequired` when the account is protected
    /// and no password was given, `AccountError::WrongPassword` on a mismatch.
    pub fn check_password(&self, password: Option<&str>) -> Result<(), AccountError> {
        let Some(hash) = &self.password_hash else {
            return Ok(());
        };
        match password {
            None => Err(AccountError::PasswordRequired(self.username.clone())),
            Some(password) if verify_password(password, hash) => Ok(()),
            Some(_) => Err(AccountError::WrongPassword(self.username.clone())),
        }
    }

    /// Snapshot the guesses of `session` for `today`
    ///
    /// Keeps the recorded flag when the same day's board is saved again.
    pub fn save_board(&mut self, session: &GameSession, today: NaiveDate) {
        let config = session.config();
        let recorded = self
            .saved_boards
            .get(&config)
            .is_some_and(|board| board.date == today && board.recorded);

        self.saved_boards.insert(
            config,
            SavedBoard {
                date: today,
                guesses: session.guesses().iter().map(|r| r.word.clone()).collect(),
                hard_mode: session.is_hard_mode(),
                recorded,
            },
        );
    }

    /// The board saved for `config` today, if any
    #[must_use]
    pub fn saved_board(&self, config: BoardConfig, today: NaiveDate) -> Option<&SavedBoard> {
        self.saved_boards
            .get(&config)
            .filter(|board| board.date == today)
    }

    pub fn clear_board(&mut self, config: BoardConfig) {
        self.saved_boards.remove(&config);
    }

    /// Save the board and count a finished game exactly once per day
    ///
    /// Returns `Ok(true)` when the outcome was added to the statistics.
    ///
    /// # Errors
    /// See [`UserStatistics::record_session`].
    pub fn finish_session(
        &mut self,
        session: &GameSession,
        today: NaiveDate,
    ) -> Result<bool, ConfigurationError> {
        self.save_board(session, today);

        let config = session.config();
        if self
            .saved_board(config, today)
            .is_some_and(|board| board.recorded)
        {
            return Ok(false);
        }

        let counted = self.statistics.record_session(session)?;
        if counted && let Some(board) = self.saved_boards.get_mut(&config) {
            board.recorded = true;
        }
        Ok(counted)
    }

    /// Drop boards from earlier days
    pub fn prune_boards(&mut self, today: NaiveDate) {
        self.saved_boards.retain(|_, board| board.date == today);
    }
}

/// Trim, lowercase and check a username
///
/// # Errors
/// Returns `ConfigurationError::Username` unless the result is 1-32 characters
/// of `a-z`, `0-9`, `_` or `-`.
pub fn normalize_username(raw: &str) -> Result<String, ConfigurationError> {
    let name = raw.trim().to_ascii_lowercase();
    let valid = !name.is_empty()
        && name.len() <= MAX_USERNAME_LEN
        && name
            .bytes()
            .all(|b| b.is_ascii_lowercase() || b.is_ascii_digit() || b == b'_' || b == b'-');

    if valid {
        Ok(name)
    } else {
        Err(ConfigurationError::Username(raw.to_string()))
    }
}

/// Loads and saves accounts in a [`Store`]
#[derive(Clone)]
pub struct Accounts {
    store: Arc<dyn Store>,
}

impl Accounts {
    #[must_use]
    pub fn new(store: Arc<dyn Store>) -> Self {
        Self { store }
    }

    /// Storage key for a normalised username
    #[must_use]
    pub fn key(username: &str) -> String {
        format!("accounts/{username}")
    }

    /// Open an account, starting fresh if none is stored or it is unreadable
    ///
    /// A new account adopts `password` if one is given. A stored account with
    /// a password hash only opens with the matching password.
    ///
    /// # Errors
    /// Returns `AccountError::Configuration` for an invalid name and the
    /// errors of [`UserAccount::check_password`] for a protected account.
    #[instrument(skip(self, password))]
    pub fn load(
        &self,
        username: &str,
        password: Option<&str>,
    ) -> Result<UserAccount, AccountError> {
        let name = normalize_username(username)?;
        match load_record::<UserAccount>(self.store.as_ref(), &Self::key(&name)) {
            Some(mut account) => {
                account.username = name;
                if let Err(err) = account.check_password(password) {
                    warn!(user = %account.username, "account login refused");
                    return Err(err);
                }
                account.statistics.normalize();
                debug!(games = account.statistics.games_played(), "loaded account");
                Ok(account)
            }
            None => {
                info!(user = %name, "starting new account");
                let mut account = UserAccount::new(&name)?;
                if let Some(password) = password {
                    account.set_password(password)?;
                }
                Ok(account)
            }
        }
    }

    /// Persist an account
    ///
    /// # Errors
    /// Returns `StorageError` if the record cannot be written.
    pub fn save(&self, account: &UserAccount) -> Result<(), StorageError> {
        save_record(self.store.as_ref(), &Self::key(account.username()), account)
    }
}

impl std::fmt::Debug for Accounts {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Accounts").finish_non_exhaustive()
    }
}
