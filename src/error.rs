//! Error types shared across the engine
//!
//! Validation failures (`GuessError`) are recoverable: the session is untouched
//! and the caller is expected to ask the player again. Configuration errors point
//! at missing word data or a bad integration and should not happen at runtime.

use crate::core::BoardConfig;
use thiserror::Error;

/// Crate-level error
#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Configuration(#[from] ConfigurationError),
    #[error(transparent)]
    Guess(#[from] GuessError),
    #[error(transparent)]
    Storage(#[from] StorageError),
    #[error(transparent)]
    Account(#[from] AccountError),
}

/// Missing or invalid word-length data, board sizes or account names
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigurationError {
    #[error("no pickable words are loaded for length {0}")]
    NoPickableWords(usize),
    #[error("board size {rows}x{cols} is outside 3..=7")]
    BoardSize { rows: u8, cols: u8 },
    #[error("{guesses} guesses is not possible on a board with {rows} rows")]
    GuessCount { guesses: usize, rows: u8 },
    #[error("forced target '{word}' is not a legal {cols}-letter word")]
    ForcedTarget { word: String, cols: u8 },
    #[error("invalid username '{0}' (use 1-32 of a-z, 0-9, '_' or '-')")]
    Username(String),
    #[error("invalid word: {0}")]
    Word(#[from] crate::core::WordError),
}

/// An account could not be opened or its password could not be changed
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AccountError {
    #[error(transparent)]
    Configuration(#[from] ConfigurationError),
    #[error("account '{0}' is password protected; pass --password")]
    PasswordRequired(String),
    #[error("wrong password for account '{0}'")]
    WrongPassword(String),
    #[error("password must not be empty")]
    EmptyPassword,
    #[error("password hashing failed: {0}")]
    Hash(String),
}

/// A guess the session refused; session state is unchanged
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GuessError {
    #[error("guess must be {expected} letters, got {actual}")]
    InvalidLength { expected: usize, actual: usize },
    #[error("'{0}' is not in the word list")]
    IllegalWord(String),
    #[error("hard mode: {0}")]
    HardMode(#[from] HardModeViolation),
    #[error("the {config} board is already finished")]
    SessionTerminated { config: BoardConfig },
}

/// Why a guess breaks the hard-mode rules
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HardModeViolation {
    #[error("letter {ordinal} must be '{letter}'", ordinal = .position + 1)]
    MissingCorrect { letter: char, position: usize },
    #[error("guess must contain '{letter}'")]
    MissingPresent { letter: char },
}

/// Failure while writing persisted state
///
/// Read failures never surface as errors: they fall back to fresh defaults.
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("storage I/O failed for '{key}': {source}")]
    Io {
        key: String,
        #[source]
        source: std::io::Error,
    },
    #[error("could not encode record '{key}': {source}")]
    Encode {
        key: String,
        #[source]
        source: serde_json::Error,
    },
}

pub type Result<T, E = Error> = std::result::Result<T, E>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hard_mode_messages_are_one_based() {
        let err = HardModeViolation::MissingCorrect {
            letter: 't',
            position: 0,
        };
        assert_eq!(err.to_string(), "letter 1 must be 't'");

        let err = HardModeViolation::MissingPresent { letter: 'a' };
        assert_eq!(err.to_string(), "guess must contain 'a'");
    }

    #[test]
    fn guess_error_wraps_hard_mode() {
        let err: GuessError = HardModeViolation::MissingPresent { letter: 'z' }.into();
        assert_eq!(err.to_string(), "hard mode: guess must contain 'z'");
    }

    #[test]
    fn account_error_names_the_user() {
        let err = AccountError::WrongPassword("alice".to_string());
        assert_eq!(err.to_string(), "wrong password for account 'alice'");

        let err: Error = AccountError::from(ConfigurationError::Username("a b".into())).into();
        assert!(matches!(err, Error::Account(AccountError::Configuration(_))));
    }
}
