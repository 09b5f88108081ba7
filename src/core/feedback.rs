//! Guess feedback calculation and representation
//!
//! Feedback is a per-letter classification of a guess against a target:
//! - `Correct` (right letter, right position)
//! - `Present` (letter is in the target elsewhere)
//! - `Absent` (letter is not available in the target)
//!
//! Colours are a presentation concern and never appear here.

use super::Word;
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Classification of a single guessed letter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LetterFeedback {
    Correct,
    Present,
    Absent,
}

impl LetterFeedback {
    /// Single-character code used by `Feedback`'s string form
    #[must_use]
    pub const fn code(self) -> char {
        match self {
            Self::Correct => 'G',
            Self::Present => 'Y',
            Self::Absent => '-',
        }
    }
}

/// Feedback for a whole guess, one entry per letter
///
/// Returned by value; callers cannot reach back into evaluator state.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Feedback(Vec<LetterFeedback>);

impl Feedback {
    /// Calculate the feedback when `guess` is played against `target`
    ///
    /// # Algorithm
    /// 1. First pass: exact matches are `Correct`; any other letter found
    ///    somewhere in the target is provisionally `Present`, else `Absent`.
    /// 2. Second pass: for letters whose count in the guess differs from the
    ///    count in the target, walk the `Present` marks left to right and keep
    ///    only as many as the target has copies left after the `Correct` ones.
    ///
    /// # Panics
    /// Panics in debug mode if the words differ in length.
    ///
    /// # Examples
    /// ```
    /// use wordle_engine::core::{Feedback, Word};
    ///
    /// let target = Word::new("jazzy").unwrap();
    /// let guess = Word::new("pzazz").unwrap();
    /// let feedback = Feedback::calculate(&guess, &target);
    ///
    /// assert_eq!(feedback.to_string(), "-YYG-");
    /// ```
    #[must_use]
    pub fn calculate(guess: &Word, target: &Word) -> Self {
        debug_assert_eq!(guess.len(), target.len(), "words must be the same length");

        let guess_letters = guess.letters();
        let target_letters = target.letters();

        // First pass: greens, plus provisional yellows
        let mut result: Vec<LetterFeedback> = guess_letters
            .iter()
            .zip(target_letters)
            .map(|(&g, &t)| {
                if g == t {
                    LetterFeedback::Correct
                } else if target.has_letter(g) {
                    LetterFeedback::Present
                } else {
                    LetterFeedback::Absent
                }
            })
            .collect();

        let target_counts = target.letter_counts();
        let guess_counts = guess.letter_counts();
        let mut correct_counts: FxHashMap<u8, usize> = FxHashMap::default();
        for (&letter, mark) in guess_letters.iter().zip(&result) {
            if *mark == LetterFeedback::Correct {
                *correct_counts.entry(letter).or_insert(0) += 1;
            }
        }

        // Second pass: drop surplus yellows, earliest positions win
        let mut kept: FxHashMap<u8, usize> = FxHashMap::default();
        for (i, &letter) in guess_letters.iter().enumerate() {
            if result[i] != LetterFeedback::Present {
                continue;
            }

            let in_target = target_counts.get(&letter).copied().unwrap_or(0);
            let in_guess = guess_counts.get(&letter).copied().unwrap_or(0);
            if in_guess == in_target {
                continue;
            }

            let correct = correct_counts.get(&letter).copied().unwrap_or(0);
            let counter = kept.entry(letter).or_insert(0);
            if in_target > correct + *counter {
                *counter += 1;
            } else {
                result[i] = LetterFeedback::Absent;
            }
        }

        Self(result)
    }

    /// Per-letter marks
    #[inline]
    #[must_use]
    pub fn marks(&self) -> &[LetterFeedback] {
        &self.0
    }

    /// Number of letters
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// True for an empty feedback, which `calculate` never produces
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Check if every letter is correct
    #[must_use]
    pub fn is_perfect(&self) -> bool {
        !self.0.is_empty() && self.0.iter().all(|&m| m == LetterFeedback::Correct)
    }

    /// Count the number of correct letters
    #[must_use]
    pub fn count_correct(&self) -> usize {
        self.count(LetterFeedback::Correct)
    }

    /// Count the number of present letters
    #[must_use]
    pub fn count_present(&self) -> usize {
        self.count(LetterFeedback::Present)
    }

    fn count(&self, kind: LetterFeedback) -> usize {
        self.0.iter().filter(|&&m| m == kind).count()
    }

    /// Parse feedback from a string like "GY-GY"
    ///
    /// Accepts 'G'/'g' for correct, 'Y'/'y' for present, '-'/'_' for absent.
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        let marks = s
            .chars()
            .map(|ch| match ch {
                'G' | 'g' => Some(LetterFeedback::Correct),
                'Y' | 'y' => Some(LetterFeedback::Present),
                '-' | '_' => Some(LetterFeedback::Absent),
                _ => None,
            })
            .collect::<Option<Vec<_>>>()?;

        (super::word::MIN_LEN..=super::word::MAX_LEN)
            .contains(&marks.len())
            .then_some(Self(marks))
    }
}

impl fmt::Display for Feedback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.iter().try_for_each(|m| write!(f, "{}", m.code()))
    }
}

impl std::str::FromStr for Feedback {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| format!("Invalid feedback string: {s}"))
    }
}

impl<'a> IntoIterator for &'a Feedback {
    type Item = &'a LetterFeedback;
    type IntoIter = std::slice::Iter<'a, LetterFeedback>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

/// A played word together with its feedback
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GuessRecord {
    pub word: Word,
    pub feedback: Feedback,
}

impl GuessRecord {
    /// Score `word` against `target` and pair the two
    #[must_use]
    pub fn score(word: Word, target: &Word) -> Self {
        let feedback = Feedback::calculate(&word, target);
        Self { word, feedback }
    }

    /// Letters paired with their marks
    pub fn iter(&self) -> impl Iterator<Item = (u8, LetterFeedback)> + '_ {
        self.word
            .letters()
            .iter()
            .copied()
            .zip(self.feedback.marks().iter().copied())
    }

    /// True when the guess matched the target
    #[must_use]
    pub fn is_win(&self) -> bool {
        self.feedback.is_perfect()
    }
}
