//! Daily target selection
//!
//! One target word per `BoardConfig`, rotated on the first request of each
//! calendar day and persisted so restarts keep the same word.

use super::clock::Clock;
use crate::core::{BoardConfig, Word};
use crate::error::{ConfigurationError, Error};
use crate::storage::{Store, load_record, save_record};
use crate::wordlists::WordList;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::sync::{Arc, Mutex, PoisonError};
use tracing::{debug, info, instrument};

const SLOTS: usize = 25;

/// Active target for one board
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TargetState {
    pub word: Word,
    pub date: NaiveDate,
}

#[derive(Debug, Default)]
struct Slot {
    state: Option<TargetState>,
    forced: bool,
}

/// Owns the current target of every board size
///
/// Each board has its own lock, so the read-compare-rotate-persist sequence is
/// atomic per board while different boards never contend.
pub struct TargetSelector {
    words: Arc<WordList>,
    store: Arc<dyn Store>,
    clock: Arc<dyn Clock>,
    slots: [Mutex<Slot>; SLOTS],
}

impl TargetSelector {
    #[must_use]
    pub fn new(words: Arc<WordList>, store: Arc<dyn Store>, clock: Arc<dyn Clock>) -> Self {
        Self {
            words,
            store,
            clock,
            slots: std::array::from_fn(|_| Mutex::default()),
        }
    }

    /// Word list targets are drawn from
    #[must_use]
    pub fn words(&self) -> &Arc<WordList> {
        &self.words
    }

    /// Today's date according to the selector's clock
    #[must_use]
    pub fn today(&self) -> NaiveDate {
        self.clock.today()
    }

    /// Today's target for `config`, rotating it if needed
    ///
    /// Missing, stale or unusable persisted state is replaced with a freshly
    /// picked word.
    ///
    /// # Errors
    /// - `Error::Configuration` if no pickable words exist for `config.cols()`
    /// - `Error::Storage` if the new target cannot be persisted
    #[instrument(skip_all, fields(config = %config))]
    pub fn current_target(&self, config: BoardConfig) -> Result<Word, Error> {
        let mut slot = self.lock(config);
        let today = self.clock.today();

        if let Some(state) = &slot.state
            && state.date == today
        {
            return Ok(state.word.clone());
        }

        let key = Self::key(config);
        if let Some(stored) = load_record::<TargetState>(self.store.as_ref(), &key) {
            if stored.date == today && self.is_usable(&stored.word, config) {
                debug!(date = %stored.date, "restored persisted target");
                let word = stored.word.clone();
                slot.state = Some(stored);
                slot.forced = false;
                return Ok(word);
            }
            debug!(date = %stored.date, "persisted target is stale or unusable");
        }

        let word = self.words.random_target(config.word_len())?;
        let state = TargetState {
            word: word.clone(),
            date: today,
        };
        save_record(self.store.as_ref(), &key, &state)?;
        info!(date = %today, "rotated target");

        slot.state = Some(state);
        slot.forced = false;
        Ok(word)
    }

    /// Override the target of one board for the rest of today
    ///
    /// The override is held in memory only; the persisted daily word is not
    /// touched, and other boards are unaffected.
    ///
    /// # Errors
    /// Returns `ConfigurationError::ForcedTarget` if `word` is not a legal
    /// word of length `config.cols()`.
    pub fn force_target(&self, config: BoardConfig, word: Word) -> Result<(), ConfigurationError> {
        if !self.is_usable(&word, config) {
            return Err(ConfigurationError::ForcedTarget {
                word: word.to_string(),
                cols: config.cols(),
            });
        }

        let mut slot = self.lock(config);
        debug!(%config, "forced target");
        slot.state = Some(TargetState {
            word,
            date: self.clock.today(),
        });
        slot.forced = true;
        Ok(())
    }

    /// Cached state for `config` without rotating
    #[must_use]
    pub fn peek(&self, config: BoardConfig) -> Option<TargetState> {
        self.lock(config).state.clone()
    }

    /// True if the cached target for `config` was set by `force_target`
    #[must_use]
    pub fn is_forced(&self, config: BoardConfig) -> bool {
        self.lock(config).forced
    }

    /// Storage key for a board's target
    #[must_use]
    pub fn key(config: BoardConfig) -> String {
        format!("targets/{config}")
    }

    fn is_usable(&self, word: &Word, config: BoardConfig) -> bool {
        word.len() == config.word_len() && self.words.contains(word)
    }

    fn lock(&self, config: BoardConfig) -> std::sync::MutexGuard<'_, Slot> {
        let index = usize::from(config.rows() - 3) * 5 + usize::from(config.cols() - 3);
        self.slots[index]
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
    }
}

impl std::fmt::Debug for TargetSelector {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TargetSelector")
            .field("lengths", &self.words.lengths())
            .field("today", &self.clock.today())
            .finish_non_exhaustive()
    }
}
