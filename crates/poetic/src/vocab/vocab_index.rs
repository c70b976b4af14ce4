//! # Vocabulary Index

use crate::{
    errors::{PoeticError, PoeticResult},
    types::{CommonHashMap, UNKNOWN_ID, WordId},
};

/// `{ String -> WordId }` map.
///
/// ## Style Hints
/// Instance names should prefer `word_ids`, or `word_id_map`.
pub type WordIdMap = CommonHashMap<String, WordId>;

/// Bidirectional word/id lookup table.
///
/// Every word has at most one id; ids are not required to be dense.
/// Loaded once and shared read-only across predictions.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct VocabularyIndex {
    word_ids: WordIdMap,
    id_words: CommonHashMap<WordId, String>,
    num_docs: usize,
}

impl VocabularyIndex {
    /// Build an index from ``(word, id)`` pairs.
    ///
    /// ## Returns
    /// The index, or [`PoeticError::VocabConflict`] if a word or an id is
    /// listed twice.
    pub fn from_pairs<I, S>(pairs: I) -> PoeticResult<Self>
    where
        I: IntoIterator<Item = (S, WordId)>,
        S: Into<String>,
    {
        let mut index = Self::default();
        for (word, id) in pairs {
            index.insert(word.into(), id)?;
        }
        Ok(index)
    }

    pub(crate) fn insert(
        &mut self,
        word: String,
        id: WordId,
    ) -> PoeticResult<()> {
        if self.word_ids.contains_key(&word) {
            return Err(PoeticError::VocabConflict(format!(
                "duplicate word: {word:?}"
            )));
        }
        if let Some(prev) = self.id_words.get(&id) {
            return Err(PoeticError::VocabConflict(format!(
                "duplicate id {id}: {prev:?} and {word:?}"
            )));
        }
        self.id_words.insert(id, word.clone());
        self.word_ids.insert(word, id);
        Ok(())
    }

    pub(crate) fn set_num_docs(
        &mut self,
        num_docs: usize,
    ) {
        self.num_docs = num_docs;
    }

    /// The document count recorded with the vocabulary.
    pub fn num_docs(&self) -> usize {
        self.num_docs
    }

    /// The number of words.
    pub fn len(&self) -> usize {
        self.word_ids.len()
    }

    /// True if the index holds no words.
    pub fn is_empty(&self) -> bool {
        self.word_ids.is_empty()
    }

    /// Look up a word, if present.
    pub fn get(
        &self,
        word: &str,
    ) -> Option<WordId> {
        self.word_ids.get(word).copied()
    }

    /// Look up a word, substituting [`UNKNOWN_ID`] when absent.
    pub fn id_or_unknown(
        &self,
        word: &str,
    ) -> WordId {
        self.get(word).unwrap_or(UNKNOWN_ID)
    }

    /// Reverse lookup.
    pub fn id_to_word(
        &self,
        id: WordId,
    ) -> Option<&str> {
        self.id_words.get(&id).map(String::as_str)
    }

    /// All ``(word, id)`` pairs, sorted by id.
    pub fn sorted_pairs(&self) -> Vec<(&str, WordId)> {
        let mut pairs: Vec<(&str, WordId)> = self
            .word_ids
            .iter()
            .map(|(w, &id)| (w.as_str(), id))
            .collect();
        pairs.sort_by_key(|&(w, id)| (id, w));
        pairs
    }

    /// Map a 2-d token table to ids, preserving its shape.
    ///
    /// Tokens are looked up as given; callers case-fold beforehand.
    /// Unknown tokens become [`UNKNOWN_ID`].
    pub fn word_ids<S: AsRef<str>>(
        &self,
        sentences: &[Vec<S>],
    ) -> Vec<Vec<WordId>> {
        sentences
            .iter()
            .map(|tokens| {
                tokens
                    .iter()
                    .map(|t| self.id_or_unknown(t.as_ref()))
                    .collect()
            })
            .collect()
    }
}
