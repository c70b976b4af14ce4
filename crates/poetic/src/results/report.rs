//! # Diagnostic Report

use core::fmt::Write;

use crate::{
    info::{PACKAGE_INFO, PackageInfo},
    results::{Diagnostics, ResultSet},
};

/// The model label printed in reports.
pub const MODEL_LABEL: &str = "Lexical Model";

/// Render the report text for `diagnostics`.
///
/// Section order: banner, sentence count, five number summary, per-sentence scores.
pub fn render_report(
    diagnostics: &Diagnostics,
    info: &PackageInfo,
) -> String {
    let mut r = String::new();

    // Writing into a String cannot fail.
    let _ = write_report(&mut r, diagnostics, info);
    r
}

fn write_report(
    r: &mut String,
    diagnostics: &Diagnostics,
    info: &PackageInfo,
) -> core::fmt::Result {
    writeln!(r)?;
    writeln!(r, "{}", info.name)?;
    writeln!(r, "Version: {}", info.version)?;
    writeln!(r, "For latest updates: {}", info.homepage)?;
    writeln!(r)?;

    writeln!(r, "Diagnostics Report")?;
    writeln!(r)?;
    writeln!(r, "Model: {MODEL_LABEL}")?;
    writeln!(r, "Number of Sentences: {}", diagnostics.sentence_count)?;
    writeln!(r)?;

    writeln!(r, "~~~Five Number Summary~~~")?;
    match &diagnostics.summary {
        Some(s) => {
            writeln!(r, "Minimum: {}", s.min)?;
            writeln!(r, "Mean: {}", s.mean)?;
            writeln!(r, "Median: {}", s.median)?;
            writeln!(r, "Maximum: {}", s.max)?;
            writeln!(r, "Standard Deviation: {}", s.stdev)?;
        }
        None => {
            for label in ["Minimum", "Mean", "Median", "Maximum", "Standard Deviation"] {
                writeln!(r, "{label}: NA")?;
            }
        }
    }
    writeln!(r)?;

    writeln!(r, "~~~All Scores~~~")?;
    for (idx, score) in diagnostics.predictions.iter().enumerate() {
        writeln!(r, "Sentence #{}: {}", idx + 1, score)?;
    }

    Ok(())
}

impl ResultSet {
    /// Generate the diagnostic report with the crate's [`PACKAGE_INFO`] banner.
    ///
    /// ## Panics
    /// If [`ResultSet::run_diagnostics`] has not been called.
    pub fn generate_report(&self) -> String {
        self.generate_report_with(&PACKAGE_INFO)
    }

    /// Generate the diagnostic report with the given banner.
    ///
    /// ## Panics
    /// If [`ResultSet::run_diagnostics`] has not been called.
    pub fn generate_report_with(
        &self,
        info: &PackageInfo,
    ) -> String {
        match self.try_generate_report_with(info) {
            Some(report) => report,
            None => panic!("generate_report() requires run_diagnostics() to be called first"),
        }
    }

    /// Generate the report, or `None` if diagnostics have not been run.
    pub fn try_generate_report(&self) -> Option<String> {
        self.try_generate_report_with(&PACKAGE_INFO)
    }

    /// Generate the report with the given banner, or `None` if diagnostics
    /// have not been run.
    pub fn try_generate_report_with(
        &self,
        info: &PackageInfo,
    ) -> Option<String> {
        self.diagnostics().map(|d| render_report(d, info))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const INFO: PackageInfo = PackageInfo {
        name: "Poetic",
        version: "9.9.9",
        build: "Dev",
        homepage: "example.org/poetic",
    };

    #[test]
    fn test_report_layout() {
        let mut results = ResultSet::new(vec![1.0, 0.0, 1.0, 0.0]);
        results.run_diagnostics();

        let expected = "\nPoetic\nVersion: 9.9.9\nFor latest updates: example.org/poetic\n\n\
            Diagnostics Report\n\nModel: Lexical Model\nNumber of Sentences: 4\n\n\
            ~~~Five Number Summary~~~\nMinimum: 0\nMean: 0.5\nMedian: 0.5\nMaximum: 1\n\
            Standard Deviation: 0.5\n\n\
            ~~~All Scores~~~\nSentence #1: 1\nSentence #2: 0\nSentence #3: 1\nSentence #4: 0\n";

        assert_eq!(results.generate_report_with(&INFO), expected);
    }

    #[test]
    fn test_report_contents() {
        let mut results = ResultSet::new(vec![0.125, 0.75]);
        results.run_diagnostics();
        let report = results.generate_report();

        assert!(report.contains(PACKAGE_INFO.version));
        assert!(report.contains("Number of Sentences: 2"));
        assert!(report.contains("Sentence #1: 0.125"));
        assert!(report.contains("Sentence #2: 0.75"));
        assert!(report.contains("Mean: 0.4375"));
    }

    #[test]
    fn test_empty_report() {
        let mut results = ResultSet::default();
        results.run_diagnostics();
        let report = results.generate_report_with(&INFO);
        assert!(report.contains("Number of Sentences: 0"));
        assert!(report.contains("Median: NA"));
        assert!(report.ends_with("~~~All Scores~~~\n"));
    }

    #[test]
    fn test_try_before_diagnostics() {
        let results = ResultSet::new(vec![0.5]);
        assert_eq!(results.try_generate_report_with(&INFO), None);
    }

    #[test]
    #[should_panic(expected = "requires run_diagnostics()")]
    fn test_report_before_diagnostics_panics() {
        ResultSet::new(vec![0.5]).generate_report();
    }
}
