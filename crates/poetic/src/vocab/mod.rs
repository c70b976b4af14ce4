//! # Vocabulary
//!
//! [`VocabularyIndex`] is the immutable ``{ word <-> id }`` table used to
//! encode tokens for the scoring model. Words absent from the index map to
//! [`UNKNOWN_ID`](crate::types::UNKNOWN_ID).
//!
//! ## Vocabulary IO
//!
//! The dictionary text format is read and written by [`io`]:
//!
//! ```text
//! 1000
//! 141	you	512
//! 142	the	980
//! ```
//!
//! The first line is the document count of the source corpus; each following
//! line is ``id<TAB>word<TAB>document_frequency``.

pub mod io;
pub mod vocab_index;

#[doc(inline)]
pub use vocab_index::{VocabularyIndex, WordIdMap};
