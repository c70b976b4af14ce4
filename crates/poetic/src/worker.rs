//! # Prediction Worker
//!
//! Serializes predictions onto a single background thread, so one
//! [`Scorer`] can be shared by any number of callers. Requests run in
//! submission order.

use std::{
    any::Any,
    panic::{self, AssertUnwindSafe},
    path::PathBuf,
    sync::{Arc, mpsc},
};

use parking_lot::Mutex;

use crate::{
    errors::{PoeticError, PoeticResult},
    model::ScoringModel,
    results::ResultSet,
    scorer::Scorer,
};

/// A pending prediction.
#[derive(Debug)]
pub struct PredictionHandle {
    receiver: mpsc::Receiver<PoeticResult<ResultSet>>,
}

impl PredictionHandle {
    /// Block until the prediction completes.
    ///
    /// ## Returns
    /// The prediction result; or [`PoeticError::External`] if the worker
    /// dropped the request without answering.
    pub fn wait(self) -> PoeticResult<ResultSet> {
        self.receiver
            .recv()
            .map_err(|_| PoeticError::External("prediction worker stopped".to_string()))?
    }

    /// Return the result if the prediction has completed.
    pub fn try_wait(&self) -> Option<PoeticResult<ResultSet>> {
        self.receiver.try_recv().ok()
    }
}

/// Single-threaded FIFO prediction queue around a shared [`Scorer`].
pub struct PredictionWorker<M: ScoringModel + 'static> {
    pool: rayon::ThreadPool,
    scorer: Arc<Mutex<Scorer<M>>>,
}

impl<M: ScoringModel + 'static> PredictionWorker<M> {
    /// Start a worker thread owning `scorer`.
    pub fn new(scorer: Scorer<M>) -> PoeticResult<Self> {
        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(1)
            .thread_name(|idx| format!("poetic-predict-{idx}"))
            .build()
            .map_err(|e| PoeticError::External(e.to_string()))?;

        Ok(Self {
            pool,
            scorer: Arc::new(Mutex::new(scorer)),
        })
    }

    /// Run `f` with exclusive access to the scorer.
    ///
    /// Waits for any in-flight prediction to release the scorer.
    pub fn with_scorer<R>(
        &self,
        f: impl FnOnce(&mut Scorer<M>) -> R,
    ) -> R {
        f(&mut *self.scorer.lock())
    }

    /// Queue a prediction over `text`.
    pub fn submit_text<S: Into<String>>(
        &self,
        text: S,
    ) -> PredictionHandle {
        let text = text.into();
        self.submit(move |scorer| scorer.predict(&text))
    }

    /// Queue a prediction over the contents of the file at `path`.
    pub fn submit_file<P: Into<PathBuf>>(
        &self,
        path: P,
    ) -> PredictionHandle {
        let path = path.into();
        self.submit(move |scorer| scorer.predict_file(&path))
    }

    fn submit<F>(
        &self,
        job: F,
    ) -> PredictionHandle
    where
        F: FnOnce(&mut Scorer<M>) -> PoeticResult<ResultSet> + Send + 'static,
    {
        let (sender, receiver) = mpsc::channel();
        let scorer = self.scorer.clone();

        self.pool.spawn_fifo(move || {
            // The scorer lock does not poison; a panicking model leaves the
            // worker usable for later jobs.
            let result = panic::catch_unwind(AssertUnwindSafe(move || job(&mut *scorer.lock())))
                .unwrap_or_else(|payload| {
                    let msg = panic_message(payload.as_ref());
                    log::error!("prediction panicked: {msg}");
                    Err(PoeticError::External(format!("prediction panicked: {msg}")))
                });
            if sender.send(result).is_err() {
                log::debug!("prediction handle dropped before completion");
            }
        });

        PredictionHandle { receiver }
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> &str {
    if let Some(msg) = payload.downcast_ref::<&str>() {
        msg
    } else if let Some(msg) = payload.downcast_ref::<String>() {
        msg
    } else {
        "unknown panic"
    }
}

impl<M: ScoringModel + 'static> core::fmt::Debug for PredictionWorker<M> {
    fn fmt(
        &self,
        f: &mut core::fmt::Formatter<'_>,
    ) -> core::fmt::Result {
        f.debug_struct("PredictionWorker")
            .field("num_threads", &self.pool.current_num_threads())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        model::Score,
        sequence::PaddedBatch,
        vocab::VocabularyIndex,
    };
    use std::{thread, time::Duration};

    /// Sleeps per batch, then scores rows by their index in the batch.
    struct SlowModel;

    impl ScoringModel for SlowModel {
        fn input_width(&self) -> usize {
            4
        }

        fn predict_batch(
            &self,
            batch: &PaddedBatch,
        ) -> PoeticResult<Vec<Score>> {
            thread::sleep(Duration::from_millis(5));
            Ok((0..batch.num_rows()).map(|i| i as Score).collect())
        }
    }

    /// Panics on batches of more than one row.
    struct FragileModel;

    impl ScoringModel for FragileModel {
        fn input_width(&self) -> usize {
            4
        }

        fn predict_batch(
            &self,
            batch: &PaddedBatch,
        ) -> PoeticResult<Vec<Score>> {
            assert!(batch.num_rows() < 2, "too many rows: {}", batch.num_rows());
            Ok(vec![0.5; batch.num_rows()])
        }
    }

    fn worker() -> PredictionWorker<SlowModel> {
        PredictionWorker::new(Scorer::new(SlowModel, VocabularyIndex::default())).unwrap()
    }

    #[test]
    fn test_fifo_order() {
        let worker = worker();

        let handles: Vec<_> = (0..8)
            .map(|i| worker.submit_text(format!("Sentence {i}. ").repeat(i + 1)))
            .collect();

        for (i, handle) in handles.into_iter().enumerate() {
            let results = handle.wait().unwrap();
            assert_eq!(results.len(), i + 1);
            assert_eq!(results.sentence(0), Some(format!("Sentence {i}.").as_str()));
        }
    }

    #[test]
    fn test_errors_are_delivered() {
        let worker = worker();

        let empty = worker.submit_text("");
        let missing = worker.submit_file("/nonexistent/poetic/input.txt");
        let ok = worker.submit_text("Fine.");

        assert!(empty.wait().unwrap_err().is_input_length());
        assert!(matches!(missing.wait().unwrap_err(), PoeticError::Io(_)));
        assert_eq!(ok.wait().unwrap().len(), 1);
    }

    #[test]
    fn test_with_scorer() {
        let worker = worker();
        worker.submit_text("One. Two.").wait().unwrap();

        let last = worker.with_scorer(|scorer| scorer.last_sentences().to_vec());
        assert_eq!(last, vec!["One.", "Two."]);
        assert!(format!("{worker:?}").contains("num_threads: 1"));
    }

    #[test]
    fn test_model_panic_is_an_error() {
        let worker =
            PredictionWorker::new(Scorer::new(FragileModel, VocabularyIndex::default())).unwrap();

        let bad = worker.submit_text("One. Two.");
        let good = worker.submit_text("Just one.");

        let err = bad.wait().unwrap_err();
        assert!(matches!(err, PoeticError::External(_)));
        assert!(err.to_string().contains("too many rows: 2"));

        assert_eq!(good.wait().unwrap().predictions(), &[0.5]);
    }
}
