//! A single game on one board
//!
//! The session owns its target for its whole lifetime; a rotation in the
//! selector never changes a game that is already running.

use super::evaluator::{GuessEvaluator, check_hard_mode};
use super::target::TargetSelector;
use crate::core::{BoardConfig, GuessRecord, Word};
use crate::error::{ConfigurationError, Error, GuessError};
use crate::wordlists::WordList;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::{debug, info};

/// Where a game stands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SessionStatus {
    #[default]
    InProgress,
    Won,
    Lost,
}

impl SessionStatus {
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        !matches!(self, Self::InProgress)
    }
}

/// Snapshot of a session
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SessionState {
    /// Index of the next row to fill
    pub row: usize,
    pub guesses: Vec<GuessRecord>,
    pub status: SessionStatus,
}

/// One game: a board, a fixed target and the guesses so far
#[derive(Debug)]
pub struct GameSession {
    config: BoardConfig,
    target: Word,
    hard_mode: bool,
    evaluator: GuessEvaluator,
    state: SessionState,
}

impl GameSession {
    /// Create a session with an explicit target
    ///
    /// # Errors
    /// Returns `ConfigurationError::ForcedTarget` if `target` does not fit the
    /// board or is not in `words`.
    pub fn new(
        config: BoardConfig,
        target: Word,
        words: Arc<WordList>,
        hard_mode: bool,
    ) -> Result<Self, ConfigurationError> {
        if target.len() != config.word_len() || !words.contains(&target) {
            return Err(ConfigurationError::ForcedTarget {
                word: target.to_string(),
                cols: config.cols(),
            });
        }

        Ok(Self {
            config,
            target,
            hard_mode,
            evaluator: GuessEvaluator::new(words),
            state: SessionState::default(),
        })
    }

    /// Start a session on today's target for `config`
    ///
    /// # Errors
    /// Propagates target selection failures.
    pub fn start(
        selector: &TargetSelector,
        config: BoardConfig,
        hard_mode: bool,
    ) -> Result<Self, Error> {
        let target = selector.current_target(config)?;
        let session = Self::new(config, target, Arc::clone(selector.words()), hard_mode)?;
        info!(%config, hard_mode, "started session");
        Ok(session)
    }

    /// Start today's session and replay previously saved guesses
    ///
    /// # Errors
    /// Propagates target selection failures.
    pub fn resume(
        selector: &TargetSelector,
        config: BoardConfig,
        hard_mode: bool,
        saved: &[Word],
    ) -> Result<Self, Error> {
        let mut session = Self::start(selector, config, hard_mode)?;
        let replayed = session.replay(saved);
        if replayed > 0 {
            info!(%config, replayed, "resumed saved board");
        }
        Ok(session)
    }

    /// Submit `words` in order, stopping at the first one that is refused
    ///
    /// Returns how many were accepted.
    pub fn replay(&mut self, words: &[Word]) -> usize {
        let mut accepted = 0;
        for word in words {
            if let Err(err) = self.submit_guess(word.text()) {
                debug!(word = %word, %err, "stopped replay");
                break;
            }
            accepted += 1;
        }
        accepted
    }

    /// Validate, score and record a guess
    ///
    /// A refused guess leaves the session exactly as it was.
    ///
    /// # Errors
    /// - `GuessError::SessionTerminated` if the game is already over
    /// - `GuessError::InvalidLength` / `GuessError::IllegalWord` from validation
    /// - `GuessError::HardMode` if hard mode is on and the previous hints are ignored
    pub fn submit_guess(&mut self, guess: &str) -> Result<GuessRecord, GuessError> {
        if self.state.status.is_terminal() {
            return Err(GuessError::SessionTerminated {
                config: self.config,
            });
        }

        let word = self.evaluator.validate(guess, self.config)?;
        if self.hard_mode
            && let Some(previous) = self.state.guesses.last()
        {
            check_hard_mode(previous, &word)?;
        }

        let feedback = self.evaluator.evaluate(&word, &self.target);
        let record = GuessRecord { word, feedback };

        self.state.guesses.push(record.clone());
        self.state.row += 1;
        if record.is_win() {
            self.state.status = SessionStatus::Won;
        } else if self.state.row == usize::from(self.config.rows()) {
            self.state.status = SessionStatus::Lost;
        }

        debug!(
            config = %self.config,
            row = self.state.row,
            feedback = %record.feedback,
            status = ?self.state.status,
            "scored guess"
        );
        Ok(record)
    }

    /// Copy of the current state
    #[must_use]
    pub fn current_state(&self) -> SessionState {
        self.state.clone()
    }

    /// `Some((won, guesses_used))` once the game is over
    #[must_use]
    pub fn outcome(&self) -> Option<(bool, usize)> {
        match self.state.status {
            SessionStatus::InProgress => None,
            SessionStatus::Won => Some((true, self.state.row)),
            SessionStatus::Lost => Some((false, self.state.row)),
        }
    }

    #[must_use]
    pub fn config(&self) -> BoardConfig {
        self.config
    }

    #[must_use]
    pub fn status(&self) -> SessionStatus {
        self.state.status
    }

    #[must_use]
    pub fn guesses(&self) -> &[GuessRecord] {
        &self.state.guesses
    }

    #[must_use]
    pub fn is_hard_mode(&self) -> bool {
        self.hard_mode
    }

    /// Guesses left before the game is lost
    #[must_use]
    pub fn remaining(&self) -> usize {
        usize::from(self.config.rows()).saturating_sub(self.state.row)
    }

    /// The target, intended for reveal after the game ends
    #[must_use]
    pub fn target(&self) -> &Word {
        &self.target
    }

    #[must_use]
    pub fn evaluator(&self) -> &GuessEvaluator {
        &self.evaluator
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::LetterFeedback::{Absent, Correct, Present};
    use crate::engine::clock::FixedClock;
    use crate::error::HardModeViolation;
    use crate::storage::MemoryStore;
    use chrono::NaiveDate;
    use pretty_assertions::assert_eq;

    fn words() -> Arc<WordList> {
        Arc::new(WordList::from_words(
            [
                "thank", "think", "shirt", "green", "poked", "crane", "scald", "trick", "cat",
                "dog", "cot",
            ],
            ["smart", "cat"],
        ))
    }

    fn session(target: &str, config: BoardConfig, hard_mode: bool) -> GameSession {
        GameSession::new(config, Word::new(target).unwrap(), words(), hard_mode).unwrap()
    }

    #[test]
    fn winning_guess_ends_the_game() {
        let mut game = session("smart", BoardConfig::CLASSIC, false);

        let record = game.submit_guess("thank").unwrap();
        assert_eq!(
            record.feedback.marks(),
            &[Present, Absent, Correct, Absent, Absent]
        );
        assert_eq!(game.status(), SessionStatus::InProgress);
        assert_eq!(game.outcome(), None);

        let record = game.submit_guess("SMART").unwrap();
        assert!(record.is_win());
        assert_eq!(game.status(), SessionStatus::Won);
        assert_eq!(game.outcome(), Some((true, 2)));
        assert_eq!(game.current_state().row, 2);
    }

    #[test]
    fn game_is_lost_exactly_after_last_row() {
        let mut game = session("smart", BoardConfig::CLASSIC, false);
        let misses = ["thank", "think", "shirt", "green", "poked"];

        for guess in misses {
            game.submit_guess(guess).unwrap();
            assert_eq!(game.status(), SessionStatus::InProgress);
        }
        assert_eq!(game.remaining(), 1);

        game.submit_guess("crane").unwrap();
        assert_eq!(game.status(), SessionStatus::Lost);
        assert_eq!(game.outcome(), Some((false, 6)));
        assert_eq!(game.remaining(), 0);
    }

    #[test]
    fn win_on_last_row_is_a_win() {
        let mut game = session("cat", BoardConfig::new(3, 3).unwrap(), false);
        game.submit_guess("dog").unwrap();
        game.submit_guess("cot").unwrap();
        game.submit_guess("cat").unwrap();
        assert_eq!(game.outcome(), Some((true, 3)));
    }

    #[test]
    fn refused_guesses_do_not_change_state() {
        let mut game = session("smart", BoardConfig::CLASSIC, false);
        game.submit_guess("thank").unwrap();
        let before = game.current_state();

        assert_eq!(
            game.submit_guess("cat"),
            Err(GuessError::InvalidLength {
                expected: 5,
                actual: 3
            })
        );
        assert_eq!(
            game.submit_guess("zzzzz"),
            Err(GuessError::IllegalWord("zzzzz".to_string()))
        );
        assert_eq!(game.current_state(), before);
        assert_eq!(game.evaluator().scored(), 1);
    }

    #[test]
    fn finished_session_refuses_guesses() {
        let mut game = session("smart", BoardConfig::CLASSIC, false);
        game.submit_guess("smart").unwrap();

        assert_eq!(
            game.submit_guess("thank"),
            Err(GuessError::SessionTerminated {
                config: BoardConfig::CLASSIC
            })
        );
        assert_eq!(game.guesses().len(), 1);
    }

    #[test]
    fn hard_mode_enforces_previous_hints() {
        let mut game = session("smart", BoardConfig::CLASSIC, true);
        game.submit_guess("thank").unwrap();

        assert_eq!(
            game.submit_guess("scald"),
            Err(GuessError::HardMode(HardModeViolation::MissingPresent {
                letter: 't'
            }))
        );
        assert_eq!(
            game.submit_guess("trick"),
            Err(GuessError::HardMode(HardModeViolation::MissingCorrect {
                letter: 'a',
                position: 2
            }))
        );
        assert_eq!(game.current_state().row, 1);
        assert!(game.submit_guess("smart").unwrap().is_win());
    }

    #[test]
    fn easy_mode_ignores_hints() {
        let mut game = session("smart", BoardConfig::CLASSIC, false);
        game.submit_guess("thank").unwrap();
        assert!(game.submit_guess("scald").is_ok());
    }

    #[test]
    fn current_state_is_a_copy() {
        let mut game = session("smart", BoardConfig::CLASSIC, false);
        game.submit_guess("thank").unwrap();

        let mut snapshot = game.current_state();
        snapshot.guesses.clear();
        snapshot.status = SessionStatus::Won;

        assert_eq!(game.guesses().len(), 1);
        assert_eq!(game.status(), SessionStatus::InProgress);
    }

    #[test]
    fn new_rejects_target_that_does_not_fit() {
        let err = GameSession::new(
            BoardConfig::CLASSIC,
            Word::new("cat").unwrap(),
            words(),
            false,
        )
        .unwrap_err();
        assert_eq!(
            err,
            ConfigurationError::ForcedTarget {
                word: "cat".to_string(),
                cols: 5
            }
        );
    }

    #[test]
    fn replay_matches_live_submissions() {
        let mut live = session("smart", BoardConfig::CLASSIC, false);
        for guess in ["thank", "shirt"] {
            live.submit_guess(guess).unwrap();
        }

        let saved: Vec<Word> = live.guesses().iter().map(|r| r.word.clone()).collect();
        let mut replayed = session("smart", BoardConfig::CLASSIC, false);
        assert_eq!(replayed.replay(&saved), 2);
        assert_eq!(replayed.current_state(), live.current_state());
    }

    #[test]
    fn replay_stops_at_first_refused_word() {
        let mut game = session("smart", BoardConfig::CLASSIC, true);
        let saved = [
            Word::new("thank").unwrap(),
            Word::new("scald").unwrap(),
            Word::new("smart").unwrap(),
        ];
        assert_eq!(game.replay(&saved), 1);
        assert_eq!(game.status(), SessionStatus::InProgress);
    }

    #[test]
    fn start_and_resume_use_the_daily_target() {
        let clock = Arc::new(FixedClock::new(NaiveDate::from_ymd_opt(2024, 5, 1).unwrap()));
        let selector = TargetSelector::new(words(), Arc::new(MemoryStore::new()), clock);

        let mut game = GameSession::start(&selector, BoardConfig::CLASSIC, false).unwrap();
        assert_eq!(game.target().text(), "smart");
        game.submit_guess("thank").unwrap();

        let saved = vec![Word::new("thank").unwrap()];
        let resumed = GameSession::resume(&selector, BoardConfig::CLASSIC, false, &saved).unwrap();
        assert_eq!(resumed.current_state(), game.current_state());
    }

    #[test]
    fn target_is_fixed_for_the_session() {
        let clock = Arc::new(FixedClock::new(NaiveDate::from_ymd_opt(2024, 5, 1).unwrap()));
        let selector = TargetSelector::new(words(), Arc::new(MemoryStore::new()), clock);

        let mut game = GameSession::start(&selector, BoardConfig::CLASSIC, false).unwrap();
        selector
            .force_target(BoardConfig::CLASSIC, Word::new("thank").unwrap())
            .unwrap();

        assert_eq!(game.target().text(), "smart");
        assert!(!game.submit_guess("thank").unwrap().is_win());
    }
}
