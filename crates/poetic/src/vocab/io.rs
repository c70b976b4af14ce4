//! # Dictionary Text IO

use std::{
    fs::File,
    io::{BufRead, BufReader, BufWriter, Write},
    path::Path,
};

use crate::{
    errors::{PoeticError, PoeticResult},
    types::WordId,
    vocab::VocabularyIndex,
};

/// Load a [`VocabularyIndex`] from a dictionary text file.
///
/// # Arguments
/// * `path` - the path to the dictionary file.
pub fn load_dictionary_text_path<P: AsRef<Path>>(path: P) -> PoeticResult<VocabularyIndex> {
    let path = path.as_ref();
    log::debug!("loading vocabulary: {}", path.display());

    let reader = BufReader::new(File::open(path)?);
    let vocab = read_dictionary_text(reader)?;

    log::info!("loaded {} vocabulary words from {}", vocab.len(), path.display());
    Ok(vocab)
}

/// Read a [`VocabularyIndex`] from a dictionary text [`BufRead`] stream.
///
/// Blank lines are skipped. The document frequency column is optional.
///
/// # Arguments
/// * `reader` - the line reader.
pub fn read_dictionary_text<R: BufRead>(reader: R) -> PoeticResult<VocabularyIndex> {
    let mut vocab = VocabularyIndex::default();
    let mut seen_header = false;

    for (idx, line) in reader.lines().enumerate() {
        let line = line?;
        let lineno = idx + 1;
        let line = line.trim_end_matches(['\r', '\n']);
        if line.trim().is_empty() {
            continue;
        }

        if !seen_header {
            seen_header = true;
            let num_docs = line
                .trim()
                .parse::<usize>()
                .map_err(|e| format_error(lineno, format!("bad document count: {e}")))?;
            vocab.set_num_docs(num_docs);
            continue;
        }

        let mut fields = line.split('\t');
        let (Some(id), Some(word)) = (fields.next(), fields.next()) else {
            return Err(format_error(lineno, "expected id<TAB>word".to_string()));
        };
        let id = id
            .trim()
            .parse::<WordId>()
            .map_err(|e| format_error(lineno, format!("bad id {id:?}: {e}")))?;
        if word.is_empty() {
            return Err(format_error(lineno, "empty word".to_string()));
        }

        vocab
            .insert(word.to_string(), id)
            .map_err(|e| format_error(lineno, e.to_string()))?;
    }

    Ok(vocab)
}

/// Save a [`VocabularyIndex`] to a dictionary text file.
///
/// # Arguments
/// * `vocab` - the vocabulary to save.
/// * `path` - the path to save the vocabulary to.
pub fn save_dictionary_text_path<P: AsRef<Path>>(
    vocab: &VocabularyIndex,
    path: P,
) -> PoeticResult<()> {
    let mut writer = BufWriter::new(File::create(path)?);
    write_dictionary_text(vocab, &mut writer)?;
    writer.flush()?;
    Ok(())
}

/// Write a [`VocabularyIndex`] to a [`Write`] writer, sorted by id.
///
/// Document frequencies are not tracked, and are written as `0`.
pub fn write_dictionary_text<W: Write>(
    vocab: &VocabularyIndex,
    writer: &mut W,
) -> PoeticResult<()> {
    writeln!(writer, "{}", vocab.num_docs())?;
    for (word, id) in vocab.sorted_pairs() {
        writeln!(writer, "{id}\t{word}\t0")?;
    }
    Ok(())
}

impl VocabularyIndex {
    /// Load an index from a dictionary text file.
    ///
    /// See [`load_dictionary_text_path`].
    pub fn load_dictionary_text<P: AsRef<Path>>(path: P) -> PoeticResult<Self> {
        load_dictionary_text_path(path)
    }

    /// Save the index to a dictionary text file.
    ///
    /// See [`save_dictionary_text_path`].
    pub fn save_dictionary_text<P: AsRef<Path>>(
        &self,
        path: P,
    ) -> PoeticResult<()> {
        save_dictionary_text_path(self, path)
    }
}

fn format_error(
    line: usize,
    reason: String,
) -> PoeticError {
    PoeticError::VocabFormat { line, reason }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "12\n141\tyou\t5\n7\trose\t2\n\n8\tred\t3\n";

    #[test]
    fn test_read_dictionary_text() {
        let vocab = read_dictionary_text(SAMPLE.as_bytes()).unwrap();
        assert_eq!(vocab.num_docs(), 12);
        assert_eq!(vocab.len(), 3);
        assert_eq!(vocab.get("you"), Some(141));
        assert_eq!(vocab.get("red"), Some(8));
    }

    #[test]
    fn test_read_errors() {
        let err = read_dictionary_text("x\n".as_bytes()).unwrap_err();
        assert!(matches!(err, PoeticError::VocabFormat { line: 1, .. }));

        let err = read_dictionary_text("1\n-3\tyou\t1\n".as_bytes()).unwrap_err();
        assert!(matches!(err, PoeticError::VocabFormat { line: 2, .. }));

        let err = read_dictionary_text("1\n3 you\n".as_bytes()).unwrap_err();
        assert!(matches!(err, PoeticError::VocabFormat { line: 2, .. }));

        let err = read_dictionary_text("1\n3\tyou\t1\n4\tyou\t1\n".as_bytes()).unwrap_err();
        assert!(matches!(err, PoeticError::VocabFormat { line: 3, .. }));

        let err = read_dictionary_text("1\n3\tyou\t1\n3\tme\t1\n".as_bytes()).unwrap_err();
        assert!(matches!(err, PoeticError::VocabFormat { line: 3, .. }));
        assert!(err.to_string().contains("duplicate id 3"));
    }

    #[test]
    fn test_save_load_dictionary_text() {
        let vocab = read_dictionary_text(SAMPLE.as_bytes()).unwrap();

        tempdir::TempDir::new("vocab_test")
            .and_then(|dir| {
                let path = dir.path().join("word_dictionary.txt");

                save_dictionary_text_path(&vocab, &path).expect("Failed to save vocab");

                let loaded = load_dictionary_text_path(&path).expect("Failed to load vocab");
                assert_eq!(loaded, vocab);

                let text = std::fs::read_to_string(&path)?;
                assert_eq!(text, "12\n7\trose\t0\n8\tred\t0\n141\tyou\t0\n");

                Ok(())
            })
            .unwrap();
    }

    #[test]
    fn test_missing_file() {
        let err = load_dictionary_text_path("/nonexistent/poetic/dict.txt").unwrap_err();
        assert!(matches!(err, PoeticError::Io(_)));
    }
}
