//! # Text Tokenization
//!
//! Text is segmented in two passes:
//! * [`SentenceSplitter`] finds sentence boundaries and yields the trimmed
//!   source substring of each sentence.
//! * [`WordSplitter`] breaks each sentence into word and punctuation tokens.
//!
//! [`TextTokenizer`] runs both passes and returns a [`TokenizedText`],
//! which keeps the source sentences next to their tokens so that reports
//! can echo the source text.

pub mod sentence_splitter;
pub mod text_tokenizer;
pub mod word_splitter;

#[doc(inline)]
pub use sentence_splitter::SentenceSplitter;
#[doc(inline)]
pub use text_tokenizer::{Sentence, TextTokenizer, TokenizedText};
#[doc(inline)]
pub use word_splitter::WordSplitter;
