//! Word lists for Wordle
//!
//! Every supported length has a legal set (accepted guesses) and a pickable
//! set (candidates for the daily target). Pickable words are always legal.

mod embedded;
pub mod loader;

pub use embedded::{LEGAL, PICKABLE};

use crate::core::Word;
use crate::error::ConfigurationError;
use rand::Rng;
use rand::seq::IndexedRandom;
use rustc_hash::{FxHashMap, FxHashSet};

/// Legal and pickable words, partitioned by length
///
/// Loaded once and immutable afterwards. A length with no data is simply
/// unavailable.
#[derive(Debug, Clone, Default)]
pub struct WordList {
    legal: FxHashMap<usize, FxHashSet<Word>>,
    pickable: FxHashMap<usize, Vec<Word>>,
}

impl WordList {
    /// An empty list with no lengths available
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The word lists compiled into the binary
    #[must_use]
    pub fn embedded() -> Self {
        loader::load_embedded()
    }

    /// Build a list from arbitrary words, grouping them by length
    ///
    /// Invalid entries are skipped.
    ///
    /// # Examples
    /// ```
    /// use wordle_engine::wordlists::WordList;
    ///
    /// let list = WordList::from_words(["thank", "think"], ["thank"]);
    /// assert!(list.is_legal("Think"));
    /// assert!(!list.is_legal("thunk"));
    /// ```
    #[must_use]
    pub fn from_words<'a, L, P>(legal: L, pickable: P) -> Self
    where
        L: IntoIterator<Item = &'a str>,
        P: IntoIterator<Item = &'a str>,
    {
        let mut legal_by_len: FxHashMap<usize, Vec<Word>> = FxHashMap::default();
        for word in legal.into_iter().filter_map(|s| Word::new(s).ok()) {
            legal_by_len.entry(word.len()).or_default().push(word);
        }

        let mut pickable_by_len: FxHashMap<usize, Vec<Word>> = FxHashMap::default();
        for word in pickable.into_iter().filter_map(|s| Word::new(s).ok()) {
            pickable_by_len.entry(word.len()).or_default().push(word);
        }

        let mut lengths: Vec<usize> = legal_by_len
            .keys()
            .chain(pickable_by_len.keys())
            .copied()
            .collect();
        lengths.sort_unstable();
        lengths.dedup();

        let mut list = Self::new();
        for len in lengths {
            list.insert_length(
                len,
                legal_by_len.remove(&len).unwrap_or_default(),
                pickable_by_len.remove(&len).unwrap_or_default(),
            );
        }
        list
    }

    /// Install the word sets for one length, replacing any previous ones
    ///
    /// Pickable words are merged into the legal set.
    pub fn insert_length(&mut self, len: usize, legal: Vec<Word>, mut pickable: Vec<Word>) {
        pickable.retain(|w| w.len() == len);
        pickable.sort();
        pickable.dedup();

        let legal: FxHashSet<Word> = legal
            .into_iter()
            .filter(|w| w.len() == len)
            .chain(pickable.iter().cloned())
            .collect();

        self.legal.insert(len, legal);
        self.pickable.insert(len, pickable);
    }

    /// True iff a legal set exists for the word's length and contains it
    ///
    /// Case-insensitive; anything that is not a valid word is illegal.
    #[must_use]
    pub fn is_legal(&self, word: &str) -> bool {
        Word::new(word).is_ok_and(|w| self.contains(&w))
    }

    /// Membership test for an already-parsed word
    #[must_use]
    pub fn contains(&self, word: &Word) -> bool {
        self.legal
            .get(&word.len())
            .is_some_and(|set| set.contains(word))
    }

    /// Uniformly pick a target of the given length
    ///
    /// # Errors
    /// Returns `ConfigurationError::NoPickableWords` if nothing is pickable
    /// for `len`.
    pub fn random_target(&self, len: usize) -> Result<Word, ConfigurationError> {
        self.random_target_with(len, &mut rand::rng())
    }

    /// Like [`random_target`](Self::random_target) with a caller-supplied RNG
    ///
    /// # Errors
    /// Returns `ConfigurationError::NoPickableWords` if nothing is pickable
    /// for `len`.
    pub fn random_target_with<R: Rng + ?Sized>(
        &self,
        len: usize,
        rng: &mut R,
    ) -> Result<Word, ConfigurationError> {
        self.pickable
            .get(&len)
            .and_then(|words| words.choose(rng))
            .cloned()
            .ok_or(ConfigurationError::NoPickableWords(len))
    }

    /// Lengths with a non-empty legal set, ascending
    #[must_use]
    pub fn lengths(&self) -> Vec<usize> {
        let mut lengths: Vec<usize> = self
            .legal
            .iter()
            .filter(|(_, set)| !set.is_empty())
            .map(|(&len, _)| len)
            .collect();
        lengths.sort_unstable();
        lengths
    }

    /// Number of legal words of length `len`
    #[must_use]
    pub fn legal_count(&self, len: usize) -> usize {
        self.legal.get(&len).map_or(0, FxHashSet::len)
    }

    /// Number of pickable words of length `len`
    #[must_use]
    pub fn pickable_count(&self, len: usize) -> usize {
        self.pickable.get(&len).map_or(0, Vec::len)
    }
}
