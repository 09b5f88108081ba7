//! Board size configuration
//!
//! A `BoardConfig` is always keyed as `(rows, cols)`: rows is the number of
//! guesses allowed, cols is the word length.

use super::word::{MAX_LEN, MIN_LEN};
use crate::error::ConfigurationError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// One game-size variant
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct BoardConfig {
    rows: u8,
    cols: u8,
}

impl BoardConfig {
    /// Classic 6 guesses of 5 letters
    pub const CLASSIC: Self = Self { rows: 6, cols: 5 };

    /// Create a board config
    ///
    /// # Errors
    /// Returns `ConfigurationError::BoardSize` unless both values are in 3..=7.
    pub fn new(rows: u8, cols: u8) -> Result<Self, ConfigurationError> {
        let range = MIN_LEN..=MAX_LEN;
        if range.contains(&usize::from(rows)) && range.contains(&usize::from(cols)) {
            Ok(Self { rows, cols })
        } else {
            Err(ConfigurationError::BoardSize { rows, cols })
        }
    }

    /// Number of guesses allowed
    #[inline]
    #[must_use]
    pub const fn rows(self) -> u8 {
        self.rows
    }

    /// Word length
    #[inline]
    #[must_use]
    pub const fn cols(self) -> u8 {
        self.cols
    }

    /// Word length as `usize`
    #[inline]
    #[must_use]
    pub const fn word_len(self) -> usize {
        self.cols as usize
    }

    /// Every supported board, rows-major
    pub fn all() -> impl Iterator<Item = Self> {
        let range = MIN_LEN as u8..=MAX_LEN as u8;
        range
            .clone()
            .flat_map(move |rows| range.clone().map(move |cols| Self { rows, cols }))
    }

    /// Storage key fragment, e.g. `6x5`
    #[must_use]
    pub fn key(self) -> String {
        self.to_string()
    }
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self::CLASSIC
    }
}

impl fmt::Display for BoardConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.rows, self.cols)
    }
}

impl FromStr for BoardConfig {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (rows, cols) = s
            .split_once('x')
            .ok_or_else(|| format!("Invalid board config: {s}"))?;
        let rows = rows.parse().map_err(|_| format!("Invalid row count: {rows}"))?;
        let cols = cols.parse().map_err(|_| format!("Invalid column count: {cols}"))?;
        Self::new(rows, cols).map_err(|e| e.to_string())
    }
}

impl TryFrom<String> for BoardConfig {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<BoardConfig> for String {
    fn from(config: BoardConfig) -> Self {
        config.to_string()
    }
}
