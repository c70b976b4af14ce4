//! # Result Export
//!
//! Results are written either as a delimited table
//! (``Sentence_num,Sentence,Score``) or as the plain-text diagnostic report.
//!
//! Exports never silently lose data: when the destination cannot be written,
//! the generated content is echoed to a fallback writer (stdout by default),
//! followed by a warning line, and the I/O error is returned.

use std::{
    fs,
    io::{self, Write},
    path::Path,
};

use crate::{
    errors::{PoeticError, PoeticResult},
    info::{PACKAGE_INFO, PackageInfo},
    results::ResultSet,
};

/// The warning echoed to the fallback writer when an export fails.
pub const EXPORT_WARNING: &str = "Warning: Unable to open file at designated path.";

/// Placeholder for sentences that are not known.
pub const MISSING_SENTENCE: &str = "NA";

/// Export file formats.
#[derive(
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
pub enum ExportFormat {
    /// ``Sentence_num,Sentence,Score`` table.
    Csv,

    /// Plain-text diagnostic report.
    Report,
}

impl ExportFormat {
    /// Select the format for a destination path: `.csv` is a table,
    /// anything else is a report.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Self {
        match path.as_ref().extension() {
            Some(ext) if ext == "csv" => Self::Csv,
            _ => Self::Report,
        }
    }
}

impl ResultSet {
    /// Render the score table as CSV bytes.
    pub fn csv_contents(&self) -> PoeticResult<Vec<u8>> {
        let mut writer = csv::Writer::from_writer(Vec::new());
        writer.write_record(["Sentence_num", "Sentence", "Score"])?;

        for (idx, score) in self.predictions().iter().enumerate() {
            let sentence = self.sentence(idx).unwrap_or(MISSING_SENTENCE);
            writer.write_record([
                (idx + 1).to_string().as_str(),
                sentence,
                score.to_string().as_str(),
            ])?;
        }

        writer
            .into_inner()
            .map_err(|e| PoeticError::Io(e.into_error()))
    }

    /// Save the score table to a CSV file.
    ///
    /// On failure, the table is echoed to stdout before the error is returned.
    pub fn to_csv<P: AsRef<Path>>(
        &self,
        path: P,
    ) -> PoeticResult<()> {
        self.to_csv_with_fallback(path, &mut io::stdout().lock())
    }

    /// Save the score table to a CSV file, echoing to `fallback` on failure.
    pub fn to_csv_with_fallback<P: AsRef<Path>>(
        &self,
        path: P,
        fallback: &mut dyn Write,
    ) -> PoeticResult<()> {
        let contents = self.csv_contents()?;
        write_or_fallback(path.as_ref(), &contents, fallback)
    }

    /// Save the results, choosing the format by extension.
    ///
    /// A `.csv` path is equivalent to [`ResultSet::to_csv`]; any other path
    /// receives the [`ResultSet::generate_report`] text.
    ///
    /// ## Panics
    /// For report destinations, if [`ResultSet::run_diagnostics`] has not
    /// been called.
    pub fn to_file<P: AsRef<Path>>(
        &self,
        path: P,
    ) -> PoeticResult<()> {
        self.to_file_with_fallback(path, &PACKAGE_INFO, &mut io::stdout().lock())
    }

    /// Save the results by extension, echoing to `fallback` on failure.
    ///
    /// ## Panics
    /// For report destinations, if [`ResultSet::run_diagnostics`] has not
    /// been called.
    pub fn to_file_with_fallback<P: AsRef<Path>>(
        &self,
        path: P,
        info: &PackageInfo,
        fallback: &mut dyn Write,
    ) -> PoeticResult<()> {
        let path = path.as_ref();
        match ExportFormat::from_path(path) {
            ExportFormat::Csv => self.to_csv_with_fallback(path, fallback),
            ExportFormat::Report => {
                let report = self.generate_report_with(info);
                write_or_fallback(path, report.as_bytes(), fallback)
            }
        }
    }
}

fn write_or_fallback(
    path: &Path,
    contents: &[u8],
    fallback: &mut dyn Write,
) -> PoeticResult<()> {
    match fs::write(path, contents) {
        Ok(()) => {
            log::info!("wrote results: {}", path.display());
            Ok(())
        }
        Err(err) => {
            log::warn!("unable to write {}: {err}", path.display());

            if let Err(echo_err) = echo(contents, fallback) {
                log::error!("fallback output failed: {echo_err}");
            }

            Err(err.into())
        }
    }
}

fn echo(
    contents: &[u8],
    fallback: &mut dyn Write,
) -> io::Result<()> {
    fallback.write_all(contents)?;
    writeln!(fallback, "\n{EXPORT_WARNING}\n")?;
    fallback.flush()
}

#[cfg(test)]
mod tests {
    use strum::IntoEnumIterator;

    use super::*;

    fn diagnosed() -> ResultSet {
        let mut results = ResultSet::new(vec![1.0, 0.0, 1.0, 0.0]);
        results.run_diagnostics();
        results
    }

    #[test]
    fn test_format_from_path() {
        assert_eq!(ExportFormat::from_path("out/results.csv"), ExportFormat::Csv);
        assert_eq!(ExportFormat::from_path("results.txt"), ExportFormat::Report);
        assert_eq!(ExportFormat::from_path("results"), ExportFormat::Report);
        assert_eq!(ExportFormat::from_path("results.csv.txt"), ExportFormat::Report);

        let names: Vec<String> = ExportFormat::iter().map(|f| f.to_string()).collect();
        assert_eq!(names, ["csv", "report"]);
    }

    #[test]
    fn test_csv_contents_without_sentences() {
        let text = String::from_utf8(diagnosed().csv_contents().unwrap()).unwrap();
        assert_eq!(
            text,
            "Sentence_num,Sentence,Score\n1,NA,1\n2,NA,0\n3,NA,1\n4,NA,0\n"
        );
    }

    #[test]
    fn test_csv_contents_quotes_sentences() {
        let results = ResultSet::with_sentences(vec![0.5], ["Roses, violets."]);
        let text = String::from_utf8(results.csv_contents().unwrap()).unwrap();
        assert_eq!(text, "Sentence_num,Sentence,Score\n1,\"Roses, violets.\",0.5\n");
    }

    #[test]
    fn test_to_csv_and_to_file_agree() {
        let results = ResultSet::with_sentences(vec![0.25, 0.75], ["This", "is"]);

        tempdir::TempDir::new("export_test")
            .and_then(|dir| {
                let direct = dir.path().join("direct.csv");
                let dispatched = dir.path().join("dispatched.csv");

                results.to_csv(&direct).expect("to_csv failed");
                results.to_file(&dispatched).expect("to_file failed");

                let direct = fs::read_to_string(direct)?;
                assert_eq!(direct, fs::read_to_string(dispatched)?);
                assert!(direct.contains("This"));
                assert!(direct.contains("is"));
                Ok(())
            })
            .unwrap();
    }

    #[test]
    fn test_to_file_report() {
        let results = diagnosed();

        tempdir::TempDir::new("export_test")
            .and_then(|dir| {
                let path = dir.path().join("report.txt");
                results.to_file(&path).expect("to_file failed");
                assert_eq!(fs::read_to_string(&path)?, results.generate_report());
                Ok(())
            })
            .unwrap();
    }

    #[test]
    fn test_csv_failure_echoes_and_errors() {
        let results = diagnosed();
        let mut echoed: Vec<u8> = Vec::new();

        let err = results
            .to_csv_with_fallback("./nonexistent/poetic/a.csv", &mut echoed)
            .unwrap_err();
        assert!(matches!(err, PoeticError::Io(_)));

        let echoed = String::from_utf8(echoed).unwrap();
        assert!(echoed.starts_with("Sentence_num,Sentence,Score\n"));
        assert!(echoed.contains(EXPORT_WARNING));
    }

    #[test]
    fn test_report_failure_echoes_and_errors() {
        let results = diagnosed();
        let mut echoed: Vec<u8> = Vec::new();

        let err = results
            .to_file_with_fallback("./nonexistent/poetic/a.txt", &PACKAGE_INFO, &mut echoed)
            .unwrap_err();
        assert!(matches!(err, PoeticError::Io(_)));

        let echoed = String::from_utf8(echoed).unwrap();
        assert!(echoed.starts_with(&results.generate_report()));
        assert!(echoed.contains(EXPORT_WARNING));
    }
}
