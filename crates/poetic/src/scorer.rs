//! # Scorer
//!
//! The text-to-score pipeline:
//!
//! ```text
//! text -> TextTokenizer -> lowercase -> VocabularyIndex -> pad_sequences
//!      -> ScoringModel::predict_batch -> ResultSet
//! ```

use std::{fs, path::Path, sync::Arc};

use crate::{
    errors::{PoeticError, PoeticResult},
    model::ScoringModel,
    results::ResultSet,
    sequence::{PadOptions, PaddedBatch, pad_sequences},
    tokenize::{TextTokenizer, TokenizedText},
    types::WordId,
    vocab::VocabularyIndex,
};

/// Scores text sentence by sentence.
///
/// The scorer remembers the sentences of the most recent tokenization and
/// attaches them to the next [`ResultSet`]. That slot is overwritten on every
/// call, hence the `&mut self` receivers; share a scorer between threads
/// through a single queue such as `PredictionWorker`.
///
/// The model and vocabulary are read-only, and may be shared between scorers.
#[derive(Debug, Clone)]
pub struct Scorer<M: ScoringModel> {
    model: M,
    vocab: Arc<VocabularyIndex>,
    tokenizer: TextTokenizer,
    pad_options: PadOptions,
    last_sentences: Vec<String>,
}

impl<M: ScoringModel> Scorer<M> {
    /// Build a scorer with the default tokenizer and padding policy.
    ///
    /// ## Arguments
    /// * `model` - the scoring model.
    /// * `vocab` - the vocabulary index.
    pub fn new<V>(
        model: M,
        vocab: V,
    ) -> Self
    where
        V: Into<Arc<VocabularyIndex>>,
    {
        Self {
            model,
            vocab: vocab.into(),
            tokenizer: TextTokenizer::default(),
            pad_options: PadOptions::default(),
            last_sentences: Vec::new(),
        }
    }

    /// Replace the tokenizer.
    pub fn with_tokenizer(
        self,
        tokenizer: TextTokenizer,
    ) -> Self {
        Self { tokenizer, ..self }
    }

    /// Replace the padding policy.
    pub fn with_pad_options(
        self,
        pad_options: PadOptions,
    ) -> Self {
        Self {
            pad_options,
            ..self
        }
    }

    /// Get the model.
    pub fn model(&self) -> &M {
        &self.model
    }

    /// Get the vocabulary.
    pub fn vocab(&self) -> &Arc<VocabularyIndex> {
        &self.vocab
    }

    /// Get the tokenizer.
    pub fn tokenizer(&self) -> &TextTokenizer {
        &self.tokenizer
    }

    /// Get the padding policy.
    pub fn pad_options(&self) -> &PadOptions {
        &self.pad_options
    }

    /// The source sentences of the most recent tokenization.
    pub fn last_sentences(&self) -> &[String] {
        &self.last_sentences
    }

    /// Segment `text` into sentences of word tokens.
    ///
    /// Records the source sentences for the next [`ResultSet`].
    pub fn tokenize(
        &mut self,
        text: &str,
    ) -> TokenizedText {
        let tokenized = self.tokenizer.tokenize(text);
        self.last_sentences = tokenized.source_sentences().map(str::to_string).collect();
        log::debug!("tokenized {} sentences", tokenized.len());
        tokenized
    }

    /// Map a case-folded 2-d token table to vocabulary ids.
    ///
    /// Unknown words map to [`UNKNOWN_ID`](crate::types::UNKNOWN_ID).
    pub fn word_id<S: AsRef<str>>(
        &self,
        tokens: &[Vec<S>],
    ) -> Vec<Vec<WordId>> {
        self.vocab.word_ids(tokens)
    }

    /// Tokenize, lowercase, encode, and pad `text` for the model.
    ///
    /// ## Returns
    /// A batch of `model.input_width()` wide rows, one per sentence; or
    /// [`PoeticError::InputLength`] when `text` holds no sentences.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self, text)))]
    pub fn preprocess(
        &mut self,
        text: &str,
    ) -> PoeticResult<PaddedBatch> {
        let tokenized = self.tokenize(text);
        if tokenized.is_empty() {
            return Err(PoeticError::empty_input());
        }

        let ids = self.word_id(&tokenized.lowercase_tokens());
        let batch = pad_sequences(&ids, self.model.input_width(), &self.pad_options);

        log::debug!("preprocessed batch shape: {:?}", batch.shape());
        Ok(batch)
    }

    /// Score each sentence of `text`.
    ///
    /// The model is not invoked when `text` holds no sentences.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self, text)))]
    pub fn predict(
        &mut self,
        text: &str,
    ) -> PoeticResult<ResultSet> {
        let batch = self.preprocess(text)?;

        let scores = self.model.predict_batch(&batch)?;
        if scores.len() != batch.num_rows() {
            return Err(PoeticError::ModelShape {
                expected: batch.num_rows(),
                actual: scores.len(),
            });
        }

        log::info!("scored {} sentences", scores.len());
        Ok(ResultSet::with_sentences(
            scores,
            self.last_sentences.iter().cloned(),
        ))
    }

    /// Read a UTF-8 text file, and score each of its sentences.
    pub fn predict_file<P: AsRef<Path>>(
        &mut self,
        path: P,
    ) -> PoeticResult<ResultSet> {
        let path = path.as_ref();
        log::debug!("reading input file: {}", path.display());
        let text = fs::read_to_string(path)?;
        self.predict(&text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        model::{LexicalModel, Score},
        types::UNKNOWN_ID,
    };
    use core::sync::atomic::{AtomicUsize, Ordering};

    /// Scores rows by their count of known ids, and counts invocations.
    #[derive(Debug, Default)]
    struct CountingModel {
        width: usize,
        calls: AtomicUsize,
    }

    impl ScoringModel for CountingModel {
        fn input_width(&self) -> usize {
            self.width
        }

        fn predict_batch(
            &self,
            batch: &PaddedBatch,
        ) -> PoeticResult<Vec<Score>> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            Ok(batch
                .rows()
                .map(|row| row.iter().filter(|&&id| id != UNKNOWN_ID).count() as Score)
                .collect())
        }
    }

    /// Always returns one score, whatever the batch.
    struct BrokenModel;

    impl ScoringModel for BrokenModel {
        fn input_width(&self) -> usize {
            4
        }

        fn predict_batch(
            &self,
            _batch: &PaddedBatch,
        ) -> PoeticResult<Vec<Score>> {
            Ok(vec![0.5])
        }
    }

    fn vocab() -> VocabularyIndex {
        VocabularyIndex::from_pairs([("this", 3), ("is", 4), ("a", 5), ("test", 6), (".", 1), ("you", 141)])
            .unwrap()
    }

    fn scorer(width: usize) -> Scorer<CountingModel> {
        Scorer::new(
            CountingModel {
                width,
                ..Default::default()
            },
            vocab(),
        )
    }

    #[test]
    fn test_word_id() {
        let scorer = scorer(8);
        assert_eq!(scorer.word_id(&[vec!["you"]]), vec![vec![141]]);
        assert_eq!(scorer.word_id(&[vec!["this_is_a_test"]]), vec![vec![UNKNOWN_ID]]);
    }

    #[test]
    fn test_tokenize_records_sentences() {
        let mut scorer = scorer(8);
        let tokenized = scorer.tokenize("This is just a test. Hi.");
        assert_eq!(
            tokenized.tokens(),
            vec![vec!["This", "is", "just", "a", "test", "."], vec!["Hi", "."]]
        );
        assert_eq!(scorer.last_sentences(), &["This is just a test.", "Hi."]);
    }

    #[test]
    fn test_preprocess() {
        let mut scorer = scorer(8);
        let batch = scorer.preprocess("This is just a test. Hi.").unwrap();
        assert_eq!(batch.shape(), (2, 8));
        assert_eq!(
            batch.to_vecs(),
            vec![vec![0, 0, 3, 4, 0, 5, 6, 1], vec![0, 0, 0, 0, 0, 0, 0, 1]]
        );
    }

    #[test]
    fn test_preprocess_width_follows_model() {
        let mut scorer = scorer(3);
        let batch = scorer.preprocess("This is just a test.").unwrap();
        assert_eq!(batch.to_vecs(), vec![vec![5, 6, 1]]);
    }

    #[test]
    fn test_predict() {
        let mut scorer = scorer(8);
        let results = scorer.predict("This is just a test. Hi.").unwrap();

        assert_eq!(results.predictions(), &[5.0, 1.0]);
        assert_eq!(results.sentence(0), Some("This is just a test."));
        assert_eq!(results.sentence(1), Some("Hi."));
        assert_eq!(results.diagnostics(), None);
        assert_eq!(scorer.model().calls.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_predict_empty_skips_model() {
        let mut scorer = scorer(8);
        for text in ["", "   \n\t"] {
            let err = scorer.predict(text).unwrap_err();
            assert!(err.is_input_length());
        }
        assert_eq!(scorer.model().calls.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn test_model_shape_mismatch() {
        let mut scorer = Scorer::new(BrokenModel, vocab());
        let err = scorer.predict("One. Two.").unwrap_err();
        assert!(matches!(
            err,
            PoeticError::ModelShape {
                expected: 2,
                actual: 1
            }
        ));
    }

    #[test]
    fn test_predict_file() {
        let mut scorer = scorer(8);

        tempdir::TempDir::new("scorer_test")
            .and_then(|dir| {
                let path = dir.path().join("file_test.txt");
                fs::write(&path, "This is just a test.")?;
                let results = scorer.predict_file(&path).unwrap();
                assert_eq!(results.len(), 1);

                let empty = dir.path().join("empty.txt");
                fs::write(&empty, "")?;
                assert!(scorer.predict_file(&empty).unwrap_err().is_input_length());

                let missing = dir.path().join("missing.txt");
                assert!(matches!(
                    scorer.predict_file(&missing).unwrap_err(),
                    PoeticError::Io(_)
                ));
                Ok(())
            })
            .unwrap();
    }

    #[test]
    fn test_lexical_model_bounds() {
        let model = LexicalModel::new(456, -0.5, vec![0.0, 0.1, 0.0, 1.5, 0.2, 0.0, 2.0]);
        let mut scorer = Scorer::new(Arc::new(model), vocab());
        let results = scorer.predict("This is just a test. Hi.").unwrap();
        assert_eq!(results.len(), 2);
        assert!(results.predictions().iter().all(|&s| (0.0..=1.0).contains(&s)));
    }
}
