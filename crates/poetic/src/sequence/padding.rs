//! # Sequence Padding

use crate::{
    sequence::PaddedBatch,
    types::{UNKNOWN_ID, WordId},
};

/// Which end of a sequence to pad or truncate.
#[derive(
    Default,
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    strum_macros::EnumString,
    strum_macros::EnumIter,
    strum_macros::Display,
)]
#[strum(serialize_all = "lowercase")]
pub enum PadSide {
    /// The start of the sequence.
    #[default]
    Pre,

    /// The end of the sequence.
    Post,
}

/// Padding policy.
///
/// The default left-pads with `0`, and truncates long sequences from the
/// front, keeping the *last* `width` ids.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PadOptions {
    /// Where padding values are inserted.
    pub padding: PadSide,

    /// Where excess ids are removed.
    pub truncating: PadSide,

    /// The padding value.
    pub value: WordId,
}

impl Default for PadOptions {
    fn default() -> Self {
        Self {
            padding: PadSide::Pre,
            truncating: PadSide::Pre,
            value: UNKNOWN_ID,
        }
    }
}

impl PadOptions {
    /// Set the padding side.
    pub fn with_padding(
        self,
        padding: PadSide,
    ) -> Self {
        Self { padding, ..self }
    }

    /// Set the truncation side.
    pub fn with_truncating(
        self,
        truncating: PadSide,
    ) -> Self {
        Self { truncating, ..self }
    }

    /// Set the padding value.
    pub fn with_value(
        self,
        value: WordId,
    ) -> Self {
        Self { value, ..self }
    }
}

/// Normalize one sequence to exactly `width` ids.
pub fn pad_sequence(
    ids: &[WordId],
    width: usize,
    options: &PadOptions,
) -> Vec<WordId> {
    if ids.len() >= width {
        let kept = match options.truncating {
            PadSide::Pre => &ids[ids.len() - width..],
            PadSide::Post => &ids[..width],
        };
        return kept.to_vec();
    }

    let fill = core::iter::repeat_n(options.value, width - ids.len());
    match options.padding {
        PadSide::Pre => fill.chain(ids.iter().copied()).collect(),
        PadSide::Post => ids.iter().copied().chain(fill).collect(),
    }
}

/// Normalize every sequence to exactly `width` ids.
///
/// ## Arguments
/// * `sequences` - ragged id sequences, one per sentence.
/// * `width` - the model's declared input width.
/// * `options` - the padding policy.
pub fn pad_sequences<S: AsRef<[WordId]>>(
    sequences: &[S],
    width: usize,
    options: &PadOptions,
) -> PaddedBatch {
    let mut batch = PaddedBatch::with_width(width);
    for ids in sequences {
        batch.push_row(&pad_sequence(ids.as_ref(), width, options));
    }
    batch
}
