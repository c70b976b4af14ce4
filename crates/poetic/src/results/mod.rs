//! # Prediction Results
//!
//! [`ResultSet`] bundles per-sentence scores with their source sentences and
//! optional [`Diagnostics`]. This module also provides:
//! * [`five_number_summary`] - standalone summary statistics,
//! * [`export`] - CSV and report export with stdout fallback,
//! * [`available_save_path`] - collision-free output naming.

pub mod export;
pub mod report;
pub mod result_set;
pub mod save_path;
pub mod summary;

#[doc(inline)]
pub use export::ExportFormat;
#[doc(inline)]
pub use result_set::{Diagnostics, ResultSet};
#[doc(inline)]
pub use save_path::available_save_path;
#[doc(inline)]
pub use summary::{FiveNumberSummary, five_number_summary};
