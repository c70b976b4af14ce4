//! # `poetic` Sentence Scorer
//!
//! Scores natural-language text sentence by sentence with a pretrained
//! model, and summarizes, reports, and exports the results.
//!
//! See:
//! * [`scorer`] to run the `text -> scores` pipeline.
//! * [`tokenize`] to segment text into sentences and word tokens.
//! * [`vocab`] to load vocabularies and map words to ids.
//! * [`sequence`] to pad id sequences to a fixed width.
//! * [`model`] to load a model, or plug in your own.
//! * [`results`] for diagnostics, reports, and CSV export.
//! * [`assets`] to locate the vocabulary and model files.
//!
//! ## Crate Features
//!
//! #### feature: ``default``
//!
//! * ``ahash``
//! * ``rayon``
//!
//! #### feature: ``ahash``
//!
//! This swaps the vocabulary's HashMap implementation for ``ahash``.
//!
//! This is done by the ``types::CommonHashMap`` type alias.
//!
//! #### feature: ``rayon``
//!
//! This enables the [`worker::PredictionWorker`] background queue.
//!
//! #### feature: ``tracing``
//!
//! This enables ``tracing`` spans on the scorer's pipeline stages.
//!
//! ## Scoring Text
//!
//! ```rust,ignore
//! use poetic::assets::{AssetPaths, POETIC_ASSETS};
//!
//! let mut scorer = AssetPaths::default().load_scorer(&POETIC_ASSETS)?;
//!
//! let mut results = scorer.predict("Roses are red. Violets are blue.")?;
//! results.run_diagnostics();
//!
//! println!("{}", results.generate_report());
//! results.to_csv("results.csv")?;
//! ```
#![warn(missing_docs, unused)]

#[cfg(feature = "rayon")]
pub mod worker;

pub mod assets;
pub mod errors;
pub mod info;
pub mod model;
pub mod results;
pub mod scorer;
pub mod sequence;
pub mod tokenize;
pub mod types;
pub mod vocab;

#[doc(inline)]
pub use errors::{PoeticError, PoeticResult};
#[doc(inline)]
pub use info::{PACKAGE_INFO, PackageInfo};
#[doc(inline)]
pub use results::ResultSet;
#[doc(inline)]
pub use scorer::Scorer;
