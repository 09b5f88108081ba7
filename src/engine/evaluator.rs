//! Guess validation and scoring
//!
//! The evaluator decides whether a guess may be played on a board and scores
//! it against a target. Hard-mode checks live here too.

use crate::core::{BoardConfig, Feedback, GuessRecord, LetterFeedback, Word};
use crate::error::{GuessError, HardModeViolation};
use crate::wordlists::WordList;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

/// Validates and scores guesses against a word list
#[derive(Debug)]
pub struct GuessEvaluator {
    words: Arc<WordList>,
    scored: AtomicUsize,
}

impl GuessEvaluator {
    #[must_use]
    pub fn new(words: Arc<WordList>) -> Self {
        Self {
            words,
            scored: AtomicUsize::new(0),
        }
    }

    /// The word list guesses are checked against
    #[must_use]
    pub fn words(&self) -> &Arc<WordList> {
        &self.words
    }

    /// True iff `guess` has the board's word length and is a legal word
    #[must_use]
    pub fn can_guess(&self, guess: &str, config: BoardConfig) -> bool {
        self.validate(guess, config).is_ok()
    }

    /// Parse and validate a guess for `config`
    ///
    /// # Errors
    /// - `GuessError::InvalidLength` if the guess is not `config.cols()` letters
    /// - `GuessError::IllegalWord` if it is not in the word list
    pub fn validate(&self, guess: &str, config: BoardConfig) -> Result<Word, GuessError> {
        let trimmed = guess.trim();
        let actual = trimmed.chars().count();
        if actual != config.word_len() {
            return Err(GuessError::InvalidLength {
                expected: config.word_len(),
                actual,
            });
        }

        Word::new(trimmed)
            .ok()
            .filter(|word| self.words.contains(word))
            .ok_or_else(|| GuessError::IllegalWord(trimmed.to_lowercase()))
    }

    /// Score `guess` against `target`
    ///
    /// Pure apart from bumping the scored-guess counter.
    #[must_use]
    pub fn evaluate(&self, guess: &Word, target: &Word) -> Feedback {
        self.scored.fetch_add(1, Ordering::Relaxed);
        Feedback::calculate(guess, target)
    }

    /// How many guesses this evaluator has scored
    #[must_use]
    pub fn scored(&self) -> usize {
        self.scored.load(Ordering::Relaxed)
    }
}

/// Check `guess` against the hints revealed by `previous`
///
/// Every `Correct` letter must stay in place and every `Present` letter must
/// be reused somewhere. Positions are checked left to right, so the first
/// offending letter is the one reported.
///
/// # Errors
/// Returns the first `HardModeViolation` found.
pub fn check_hard_mode(previous: &GuessRecord, guess: &Word) -> Result<(), HardModeViolation> {
    for (position, (letter, mark)) in previous.iter().enumerate() {
        if mark == LetterFeedback::Correct && guess.letters().get(position) != Some(&letter) {
            return Err(HardModeViolation::MissingCorrect {
                letter: char::from(letter),
                position,
            });
        }
    }

    for (letter, mark) in previous.iter() {
        if mark == LetterFeedback::Present && !guess.has_letter(letter) {
            return Err(HardModeViolation::MissingPresent {
                letter: char::from(letter),
            });
        }
    }

    Ok(())
}
