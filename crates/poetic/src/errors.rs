//! # Error Types

/// Errors from poetic operations.
#[derive(Debug, thiserror::Error)]
pub enum PoeticError {
    /// Tokenization produced no sentences; there is nothing to score.
    #[error("input length out of bound: {0}")]
    InputLength(String),

    /// Sentence and file input were requested in the same invocation.
    #[error("unsupported configuration: {0}")]
    UnsupportedConfig(String),

    /// A vocabulary file line could not be parsed.
    #[error("malformed vocabulary at line {line}: {reason}")]
    VocabFormat {
        /// The 1-based line number.
        line: usize,

        /// What was wrong with the line.
        reason: String,
    },

    /// A word or an id appears twice in a vocabulary.
    #[error("vocabulary conflict: {0}")]
    VocabConflict(String),

    /// The model returned a different number of scores than rows submitted.
    #[error("model returned {actual} scores for a batch of {expected} sequences")]
    ModelShape {
        /// The number of rows submitted.
        expected: usize,

        /// The number of scores returned.
        actual: usize,
    },

    /// I/O error.
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// CSV writer error.
    #[error(transparent)]
    Csv(#[from] csv::Error),

    /// JSON (de)serialization error.
    #[error(transparent)]
    Json(#[from] serde_json::Error),

    /// Error from an external component.
    #[error("{0}")]
    External(String),
}

impl PoeticError {
    /// The canonical "nothing to score" error.
    pub fn empty_input() -> Self {
        Self::InputLength("must contain at least one sentence".to_string())
    }

    /// Is this an [`PoeticError::InputLength`] error?
    pub fn is_input_length(&self) -> bool {
        matches!(self, Self::InputLength(_))
    }
}

/// Result type for poetic operations.
pub type PoeticResult<T> = core::result::Result<T, PoeticError>;
