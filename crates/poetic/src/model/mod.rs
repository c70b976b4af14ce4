//! # Scoring Models
//!
//! A [`ScoringModel`] declares the row width it expects and scores a
//! [`PaddedBatch`] with one value per row. The model's internals are opaque
//! to the pipeline; [`LexicalModel`] is a small JSON-loadable implementation.

pub mod lexical_model;

#[doc(inline)]
pub use lexical_model::LexicalModel;

use std::sync::Arc;

use crate::{errors::PoeticResult, sequence::PaddedBatch};

/// A per-sentence score.
pub type Score = f64;

/// A pretrained sentence scoring model.
///
/// Implementations are read-only after load, and may be shared freely
/// between predictions.
pub trait ScoringModel: Send + Sync {
    /// The declared input row width.
    fn input_width(&self) -> usize;

    /// Score every row of `batch`.
    ///
    /// ## Returns
    /// One score per row, in row order. Scores are nominally in ``[0, 1]``;
    /// no clamp is applied.
    fn predict_batch(
        &self,
        batch: &PaddedBatch,
    ) -> PoeticResult<Vec<Score>>;
}

impl<M: ScoringModel + ?Sized> ScoringModel for Arc<M> {
    fn input_width(&self) -> usize {
        (**self).input_width()
    }

    fn predict_batch(
        &self,
        batch: &PaddedBatch,
    ) -> PoeticResult<Vec<Score>> {
        (**self).predict_batch(batch)
    }
}

impl<M: ScoringModel + ?Sized> ScoringModel for Box<M> {
    fn input_width(&self) -> usize {
        (**self).input_width()
    }

    fn predict_batch(
        &self,
        batch: &PaddedBatch,
    ) -> PoeticResult<Vec<Score>> {
        (**self).predict_batch(batch)
    }
}
