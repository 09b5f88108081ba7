//! Word list loading utilities
//!
//! Loads word lists from a directory of `legal-{n}.txt` / `pickable-{n}.txt`
//! files or from the embedded tables.

use super::{WordList, embedded};
use crate::core::{MAX_LEN, MIN_LEN, Word};
use std::fs;
use std::io;
use std::path::Path;
use tracing::{debug, warn};

/// Load words from a file
///
/// Returns a vector of valid Word instances, skipping any invalid entries.
///
/// # Errors
///
/// Returns an I/O error if the file cannot be read or opened.
///
/// # Examples
/// ```no_run
/// use wordle_engine::wordlists::loader::load_from_file;
///
/// let words = load_from_file("data/legal-5.txt").unwrap();
/// println!("Loaded {} words", words.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> io::Result<Vec<Word>> {
    let content = fs::read_to_string(path)?;

    let words = content
        .lines()
        .filter_map(|line| {
            let trimmed = line.trim();
            if trimmed.is_empty() {
                None
            } else {
                Word::new(trimmed).ok()
            }
        })
        .collect();

    Ok(words)
}

/// Convert embedded string slice to Word vector
///
/// # Examples
/// ```
/// use wordle_engine::wordlists::loader::words_from_slice;
///
/// let words = words_from_slice(&["crane", "x", "slate"]);
/// assert_eq!(words.len(), 2);
/// ```
#[must_use]
pub fn words_from_slice(slice: &[&str]) -> Vec<Word> {
    slice.iter().filter_map(|&s| Word::new(s).ok()).collect()
}

/// Build a `WordList` from the embedded tables
#[must_use]
pub fn load_embedded() -> WordList {
    let mut list = WordList::new();

    for &(len, legal) in embedded::LEGAL {
        let pickable = embedded::PICKABLE
            .iter()
            .find(|&&(l, _)| l == len)
            .map_or(&[][..], |&(_, words)| words);

        if legal.is_empty() && pickable.is_empty() {
            warn!(len, "no embedded words for this length");
            continue;
        }

        list.insert_length(len, words_from_slice(legal), words_from_slice(pickable));
    }

    list
}

/// Load every supported length from `dir`
///
/// A missing or unreadable file only disables its length; it is logged and
/// loading carries on.
pub fn load_dir<P: AsRef<Path>>(dir: P) -> WordList {
    let dir = dir.as_ref();
    let mut list = WordList::new();

    for len in MIN_LEN..=MAX_LEN {
        let legal = read_length(dir, "legal", len);
        let pickable = read_length(dir, "pickable", len);

        if legal.is_none() && pickable.is_none() {
            warn!(len, dir = %dir.display(), "no word files for this length");
            continue;
        }

        list.insert_length(len, legal.unwrap_or_default(), pickable.unwrap_or_default());
    }

    list
}

fn read_length(dir: &Path, kind: &str, len: usize) -> Option<Vec<Word>> {
    let path = dir.join(format!("{kind}-{len}.txt"));

    match load_from_file(&path) {
        Ok(words) => {
            let total = words.len();
            let words: Vec<Word> = words.into_iter().filter(|w| w.len() == len).collect();
            if words.len() != total {
                warn!(
                    path = %path.display(),
                    skipped = total - words.len(),
                    "skipped words of the wrong length"
                );
            }
            debug!(path = %path.display(), count = words.len(), "loaded word file");
            Some(words)
        }
        Err(err) => {
            warn!(path = %path.display(), %err, "word file unavailable");
            None
        }
    }
}
