//! # Padded Batch

use crate::types::WordId;

/// Row-major fixed-width id array.
#[derive(Debug, Clone, PartialEq, Eq, Default, serde::Serialize)]
pub struct PaddedBatch {
    width: usize,
    num_rows: usize,
    data: Vec<WordId>,
}

impl PaddedBatch {
    /// Build an empty batch of the given width.
    pub fn with_width(width: usize) -> Self {
        Self {
            width,
            num_rows: 0,
            data: Vec::new(),
        }
    }

    /// Append a row.
    ///
    /// ## Panics
    /// If `row.len() != self.width()`.
    pub fn push_row(
        &mut self,
        row: &[WordId],
    ) {
        assert_eq!(
            row.len(),
            self.width,
            "row length {} does not match batch width {}",
            row.len(),
            self.width
        );
        self.data.extend_from_slice(row);
        self.num_rows += 1;
    }

    /// The row width.
    pub fn width(&self) -> usize {
        self.width
    }

    /// The number of rows.
    pub fn num_rows(&self) -> usize {
        self.num_rows
    }

    /// True if the batch has no rows.
    pub fn is_empty(&self) -> bool {
        self.num_rows == 0
    }

    /// ``(num_rows, width)``.
    pub fn shape(&self) -> (usize, usize) {
        (self.num_rows, self.width)
    }

    /// Get a row.
    pub fn row(
        &self,
        idx: usize,
    ) -> Option<&[WordId]> {
        if idx >= self.num_rows {
            return None;
        }
        let start = idx * self.width;
        Some(&self.data[start..start + self.width])
    }

    /// Iterate over the rows.
    pub fn rows(&self) -> impl Iterator<Item = &[WordId]> {
        (0..self.num_rows).map(move |idx| {
            let start = idx * self.width;
            &self.data[start..start + self.width]
        })
    }

    /// The flat row-major data.
    pub fn as_slice(&self) -> &[WordId] {
        &self.data
    }

    /// Copy out as nested rows.
    pub fn to_vecs(&self) -> Vec<Vec<WordId>> {
        self.rows().map(<[WordId]>::to_vec).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rows() {
        let mut batch = PaddedBatch::with_width(3);
        assert!(batch.is_empty());

        batch.push_row(&[0, 1, 2]);
        batch.push_row(&[3, 4, 5]);

        assert_eq!(batch.shape(), (2, 3));
        assert_eq!(batch.row(1), Some(&[3, 4, 5][..]));
        assert_eq!(batch.row(2), None);
        assert_eq!(batch.as_slice(), &[0, 1, 2, 3, 4, 5]);
        assert_eq!(batch.to_vecs(), vec![vec![0, 1, 2], vec![3, 4, 5]]);
    }

    #[test]
    fn test_zero_width() {
        let mut batch = PaddedBatch::with_width(0);
        batch.push_row(&[]);
        batch.push_row(&[]);
        assert_eq!(batch.shape(), (2, 0));
        assert_eq!(batch.rows().count(), 2);
    }

    #[test]
    #[should_panic(expected = "does not match batch width")]
    fn test_bad_row() {
        PaddedBatch::with_width(2).push_row(&[1]);
    }
}
