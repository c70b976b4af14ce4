//! # Result Set

use core::{
    cmp::Ordering,
    fmt,
    ops::{Add, AddAssign},
};

use crate::{
    model::Score,
    results::summary::{FiveNumberSummary, five_number_summary, mean},
};

/// The record produced by [`ResultSet::run_diagnostics`].
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct Diagnostics {
    /// The number of scored sentences.
    #[serde(rename = "Sentence_count")]
    pub sentence_count: usize,

    /// Summary statistics; `None` for an empty result set.
    #[serde(rename = "Five_num")]
    pub summary: Option<FiveNumberSummary>,

    /// The raw scores the statistics were computed over.
    #[serde(rename = "Predictions")]
    pub predictions: Vec<Score>,
}

impl Diagnostics {
    /// Compute diagnostics over `predictions`.
    pub fn compute(predictions: &[Score]) -> Self {
        Self {
            sentence_count: predictions.len(),
            summary: five_number_summary(predictions),
            predictions: predictions.to_vec(),
        }
    }
}

/// Per-sentence scores, their source sentences, and optional diagnostics.
///
/// A result set starts without diagnostics; [`ResultSet::run_diagnostics`]
/// may be called any number of times and always recomputes from scratch.
///
/// ## Ordering
/// The comparison operators (`<`, `<=`, `>`, `>=`) rank result sets by the
/// mean of their scores; this suits roughly normal score distributions and
/// is sensitive to outliers. `==` remains structural, so distinct result
/// sets with equal means are unordered, as are result sets with no scores.
/// [`ResultSet::cmp_mean`] compares the means alone.
#[derive(Debug, Clone, Default, PartialEq, serde::Serialize)]
pub struct ResultSet {
    predictions: Vec<Score>,
    sentences: Option<Vec<Option<String>>>,
    diagnostics: Option<Diagnostics>,
}

impl ResultSet {
    /// Build a result set of scores without sentences.
    pub fn new(predictions: Vec<Score>) -> Self {
        Self {
            predictions,
            sentences: None,
            diagnostics: None,
        }
    }

    /// Build a result set of scores and their 1:1 source sentences.
    pub fn with_sentences<I, S>(
        predictions: Vec<Score>,
        sentences: I,
    ) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            predictions,
            sentences: Some(sentences.into_iter().map(|s| Some(s.into())).collect()),
            diagnostics: None,
        }
    }

    /// The scores, in sentence order.
    pub fn predictions(&self) -> &[Score] {
        &self.predictions
    }

    /// The source sentences, if attached.
    ///
    /// Entries are `None` at positions merged in from a result set
    /// without sentences.
    pub fn sentences(&self) -> Option<&[Option<String>]> {
        self.sentences.as_deref()
    }

    /// The source sentence for score `idx`, if known.
    pub fn sentence(
        &self,
        idx: usize,
    ) -> Option<&str> {
        self.sentences.as_ref()?.get(idx)?.as_deref()
    }

    /// The computed diagnostics, if [`ResultSet::run_diagnostics`] has run.
    pub fn diagnostics(&self) -> Option<&Diagnostics> {
        self.diagnostics.as_ref()
    }

    /// The number of scores.
    pub fn len(&self) -> usize {
        self.predictions.len()
    }

    /// True if there are no scores.
    pub fn is_empty(&self) -> bool {
        self.predictions.is_empty()
    }

    /// The mean score; `None` when empty.
    pub fn mean(&self) -> Option<Score> {
        mean(&self.predictions)
    }

    /// Compare mean scores; `None` if either result set is empty.
    ///
    /// Unlike `partial_cmp`, distinct result sets may compare `Equal`.
    pub fn cmp_mean(
        &self,
        other: &ResultSet,
    ) -> Option<Ordering> {
        self.mean()?.partial_cmp(&other.mean()?)
    }

    /// Compute (or recompute) the [`Diagnostics`] record.
    pub fn run_diagnostics(&mut self) -> &Diagnostics {
        self.diagnostics.insert(Diagnostics::compute(&self.predictions))
    }

    /// Do the attached sentences line up 1:1 with the scores?
    fn aligned_sentences(&self) -> Option<&[Option<String>]> {
        self.sentences
            .as_deref()
            .filter(|s| s.len() == self.predictions.len())
    }

    /// Concatenate `other` onto `self`.
    fn extend_from(
        &mut self,
        other: &ResultSet,
    ) {
        let left = self.aligned_sentences().map(<[_]>::to_vec);
        let right = other.aligned_sentences();

        self.sentences = match (left, right) {
            (None, None) => None,
            (left, right) => {
                let mut merged = left.unwrap_or_else(|| vec![None; self.predictions.len()]);
                match right {
                    Some(r) => merged.extend_from_slice(r),
                    None => merged.extend(core::iter::repeat_n(None, other.len())),
                }
                Some(merged)
            }
        };

        let rerun = self.diagnostics.is_some() || other.diagnostics.is_some();
        self.predictions.extend_from_slice(&other.predictions);

        if rerun {
            self.run_diagnostics();
        } else {
            self.diagnostics = None;
        }
    }
}

impl PartialOrd for ResultSet {
    fn partial_cmp(
        &self,
        other: &Self,
    ) -> Option<Ordering> {
        if self == other {
            return Some(Ordering::Equal);
        }
        match self.cmp_mean(other)? {
            Ordering::Equal => None,
            ord => Some(ord),
        }
    }
}

impl AddAssign<&ResultSet> for ResultSet {
    fn add_assign(
        &mut self,
        rhs: &ResultSet,
    ) {
        self.extend_from(rhs);
    }
}

impl AddAssign for ResultSet {
    fn add_assign(
        &mut self,
        rhs: ResultSet,
    ) {
        self.extend_from(&rhs);
    }
}

impl Add<&ResultSet> for &ResultSet {
    type Output = ResultSet;

    fn add(
        self,
        rhs: &ResultSet,
    ) -> ResultSet {
        let mut out = self.clone();
        out.extend_from(rhs);
        out
    }
}

impl Add for ResultSet {
    type Output = ResultSet;

    fn add(
        mut self,
        rhs: ResultSet,
    ) -> ResultSet {
        self.extend_from(&rhs);
        self
    }
}

impl fmt::Display for ResultSet {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        let mut rendered = String::from("[");
        for (idx, p) in self.predictions.iter().enumerate() {
            if idx > 0 {
                rendered.push_str(", ");
            }
            rendered.push_str(&p.to_string());
        }
        rendered.push(']');

        if rendered.chars().count() > 15 {
            rendered = rendered.chars().take(14).collect();
            rendered.push_str("...");
        }

        write!(f, "Diagnostics object for the following predictions: {rendered}")
    }
}
