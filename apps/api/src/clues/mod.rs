//! Clue Source — supplies the word→clue mapping the puzzle engine consumes.
//!
//! The engine treats the source as an opaque fallible capability behind the
//! [`ClueSource`] trait; implementations live alongside it (`llm` for the
//! Gemini-backed source, `sample` for the bundled offline data set). The
//! source is injected at startup via `AppState` — no module-scope singleton.

use async_trait::async_trait;
use thiserror::Error;
use tracing::warn;

use crate::llm_client::LlmError;

pub mod llm;
pub mod prompts;
pub mod sample;

/// Longest word a source may hand to the engine. A word anchored at
/// `dimension / 2` of a `len + 20` grid stays in bounds only up to this
/// length, so longer LLM output is discarded during normalization.
pub const MAX_WORD_LEN: usize = 20;

// ────────────────────────────────────────────────────────────────────────────
// Errors
// ────────────────────────────────────────────────────────────────────────────

/// Failure of a clue source call. One error kind for the whole boundary —
/// callers only need the underlying message.
#[derive(Debug, Error)]
pub enum ClueSourceError {
    #[error("LLM call failed: {0}")]
    Llm(#[from] LlmError),

    #[error("Malformed clue payload: {0}")]
    MalformedPayload(String),
}

// ────────────────────────────────────────────────────────────────────────────
// Trait
// ────────────────────────────────────────────────────────────────────────────

/// A capability that produces word→clue pairs for a category.
///
/// A single call per puzzle generation; implementations must not retry
/// internally — retry policy belongs above the `generate` call.
#[async_trait]
pub trait ClueSource: Send + Sync {
    async fn fetch_clues(
        &self,
        category: &str,
        num_words: usize,
    ) -> Result<ClueSet, ClueSourceError>;
}

// ────────────────────────────────────────────────────────────────────────────
// ClueSet
// ────────────────────────────────────────────────────────────────────────────

/// An insertion-ordered word→clue mapping.
///
/// Order matters twice downstream: the longest-word tie-break picks the
/// first-encountered word, and placement attempts run in mapping order.
/// Inserting a word that is already present replaces its clue text but keeps
/// its original position (plain map-overwrite semantics).
#[derive(Debug, Clone, Default)]
pub struct ClueSet {
    entries: Vec<(String, String)>,
}

impl ClueSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, word: String, clue: String) {
        match self.entries.iter().position(|(w, _)| *w == word) {
            Some(i) => self.entries[i].1 = clue,
            None => self.entries.push((word, clue)),
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Words in insertion order.
    pub fn words(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(w, _)| w.as_str())
    }

    pub fn clue_for(&self, word: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(w, _)| w == word)
            .map(|(_, c)| c.as_str())
    }

    /// The longest word by character count; first-encountered wins ties.
    pub fn longest_word(&self) -> Option<&str> {
        let mut best: Option<&str> = None;
        for (word, _) in &self.entries {
            let longer = match best {
                Some(b) => word.chars().count() > b.chars().count(),
                None => true,
            };
            if longer {
                best = Some(word);
            }
        }
        best
    }
}

impl FromIterator<(String, String)> for ClueSet {
    fn from_iter<I: IntoIterator<Item = (String, String)>>(iter: I) -> Self {
        let mut set = ClueSet::new();
        for (word, clue) in iter {
            set.insert(word, clue);
        }
        set
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Word normalization
// ────────────────────────────────────────────────────────────────────────────

/// Normalizes a raw word from a clue source into grid form.
///
/// Whitespace is removed (multi-word answers collapse into one run of
/// letters) and the result uppercased. Returns `None` for words the engine
/// cannot hold: empty after stripping, non-alphabetic, or longer than
/// [`MAX_WORD_LEN`].
pub(crate) fn normalize_word(raw: &str) -> Option<String> {
    let word: String = raw
        .chars()
        .filter(|c| !c.is_whitespace())
        .collect::<String>()
        .to_uppercase();

    if word.is_empty() || word.chars().count() > MAX_WORD_LEN {
        return None;
    }
    if !word.chars().all(|c| c.is_ascii_alphabetic()) {
        return None;
    }
    Some(word)
}

/// Builds a [`ClueSet`] from raw (word, clue) pairs, dropping entries whose
/// word fails normalization. Drops are logged, never errors — the source is
/// allowed to be imperfect and the engine best-effort.
pub(crate) fn normalized_clue_set<I>(pairs: I) -> ClueSet
where
    I: IntoIterator<Item = (String, String)>,
{
    let mut set = ClueSet::new();
    for (raw_word, clue) in pairs {
        match normalize_word(&raw_word) {
            Some(word) => set.insert(word, clue),
            None => warn!("Discarding unusable word from clue source: {raw_word:?}"),
        }
    }
    set
}
