//! # Lexical Model
//!
//! A bag-of-words logistic scorer:
//!
//! ```text
//! score(row) = sigmoid(bias + mean(weights[id] for id in row if id != 0))
//! ```
//!
//! Ids beyond the weight table contribute `0.0`; a row of only padding
//! scores `sigmoid(bias)`.

use std::{
    fs::File,
    io::{BufReader, BufWriter, Read, Write},
    path::Path,
};

use crate::{
    errors::PoeticResult,
    model::{Score, ScoringModel},
    sequence::PaddedBatch,
    types::{UNKNOWN_ID, WordId},
};

/// JSON-serializable lexical scoring model.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct LexicalModel {
    /// The declared input row width.
    pub input_width: usize,

    /// The logit bias.
    #[serde(default)]
    pub bias: f64,

    /// Per-id logit weights, indexed by id.
    pub weights: Vec<f64>,
}

impl LexicalModel {
    /// Build a model.
    pub fn new(
        input_width: usize,
        bias: f64,
        weights: Vec<f64>,
    ) -> Self {
        Self {
            input_width,
            bias,
            weights,
        }
    }

    /// Load a model from a JSON file.
    ///
    /// ## Arguments
    /// * `path` - the path to the model file.
    pub fn load_path<P: AsRef<Path>>(path: P) -> PoeticResult<Self> {
        let path = path.as_ref();
        log::debug!("loading lexical model: {}", path.display());
        let model = Self::read_json(BufReader::new(File::open(path)?))?;
        log::info!(
            "loaded lexical model: input width {}, {} weights",
            model.input_width,
            model.weights.len()
        );
        Ok(model)
    }

    /// Read a model from a JSON stream.
    pub fn read_json<R: Read>(reader: R) -> PoeticResult<Self> {
        Ok(serde_json::from_reader(reader)?)
    }

    /// Save the model to a JSON file.
    pub fn save_path<P: AsRef<Path>>(
        &self,
        path: P,
    ) -> PoeticResult<()> {
        let mut writer = BufWriter::new(File::create(path)?);
        self.write_json(&mut writer)?;
        writer.flush()?;
        Ok(())
    }

    /// Write the model as JSON.
    pub fn write_json<W: Write>(
        &self,
        writer: W,
    ) -> PoeticResult<()> {
        serde_json::to_writer(writer, self)?;
        Ok(())
    }

    /// Score a single row.
    pub fn score_row(
        &self,
        row: &[WordId],
    ) -> Score {
        let (sum, count) = row
            .iter()
            .filter(|&&id| id != UNKNOWN_ID)
            .fold((0.0, 0usize), |(sum, count), &id| {
                let w = self.weights.get(id as usize).copied().unwrap_or(0.0);
                (sum + w, count + 1)
            });

        let mean = if count == 0 { 0.0 } else { sum / count as f64 };
        sigmoid(self.bias + mean)
    }
}

impl ScoringModel for LexicalModel {
    fn input_width(&self) -> usize {
        self.input_width
    }

    fn predict_batch(
        &self,
        batch: &PaddedBatch,
    ) -> PoeticResult<Vec<Score>> {
        Ok(batch.rows().map(|row| self.score_row(row)).collect())
    }
}

fn sigmoid(x: f64) -> f64 {
    1.0 / (1.0 + (-x).exp())
}
