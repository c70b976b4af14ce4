//! # Fixed-Width Sequences
//!
//! The scoring model consumes a 2-d array of ids, one row per sentence,
//! every row exactly `width` long. [`pad_sequences`] normalizes ragged id
//! sequences into a [`PaddedBatch`] according to [`PadOptions`].

pub mod padded_batch;
pub mod padding;

#[doc(inline)]
pub use padded_batch::PaddedBatch;
#[doc(inline)]
pub use padding::{PadOptions, PadSide, pad_sequence, pad_sequences};
