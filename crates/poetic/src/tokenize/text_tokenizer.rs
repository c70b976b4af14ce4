//! # Text Tokenizer

use crate::tokenize::{SentenceSplitter, WordSplitter};

/// One segmented sentence: the source text and its word tokens.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sentence {
    /// The trimmed source substring.
    pub text: String,

    /// Word and punctuation tokens, in order.
    pub tokens: Vec<String>,
}

/// The output of [`TextTokenizer::tokenize`].
///
/// An empty value is the "nothing to score" signal; tokenization itself
/// never fails.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TokenizedText {
    /// Sentences, in source order.
    pub sentences: Vec<Sentence>,
}

impl TokenizedText {
    /// The number of sentences.
    pub fn len(&self) -> usize {
        self.sentences.len()
    }

    /// True when no sentences were found.
    pub fn is_empty(&self) -> bool {
        self.sentences.is_empty()
    }

    /// Iterate over the source text of each sentence.
    pub fn source_sentences(&self) -> impl Iterator<Item = &str> {
        self.sentences.iter().map(|s| s.text.as_str())
    }

    /// The 2-d token table, as produced.
    pub fn tokens(&self) -> Vec<Vec<String>> {
        self.sentences.iter().map(|s| s.tokens.clone()).collect()
    }

    /// The 2-d token table, case-folded for vocabulary lookup.
    pub fn lowercase_tokens(&self) -> Vec<Vec<String>> {
        self.sentences
            .iter()
            .map(|s| s.tokens.iter().map(|t| t.to_lowercase()).collect())
            .collect()
    }
}

/// Sentence, then word, segmentation.
#[derive(Debug, Clone, Default)]
pub struct TextTokenizer {
    sentence_splitter: SentenceSplitter,
    word_splitter: WordSplitter,
}

impl TextTokenizer {
    /// Build a tokenizer from its two passes.
    pub fn new(
        sentence_splitter: SentenceSplitter,
        word_splitter: WordSplitter,
    ) -> Self {
        Self {
            sentence_splitter,
            word_splitter,
        }
    }

    /// Get the sentence splitter.
    pub fn sentence_splitter(&self) -> &SentenceSplitter {
        &self.sentence_splitter
    }

    /// Get the word splitter.
    pub fn word_splitter(&self) -> &WordSplitter {
        &self.word_splitter
    }

    /// Segment `text` into sentences of word tokens.
    pub fn tokenize(
        &self,
        text: &str,
    ) -> TokenizedText {
        let sentences = self
            .sentence_splitter
            .split(text)
            .into_iter()
            .map(|sentence| Sentence {
                text: sentence.to_string(),
                tokens: self.word_splitter.split(sentence),
            })
            .collect();

        TokenizedText { sentences }
    }
}
