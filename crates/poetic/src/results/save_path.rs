//! # Collision-Free Save Paths

use std::path::{Path, PathBuf};

/// Find an unused path for ``{stem}.{extension}`` in `dir`.
///
/// Tries ``results.txt``, then ``results(2).txt``, ``results(3).txt``, ...
/// until a path does not exist. Never returns an existing path.
///
/// * Does not create the file; a concurrent writer may still claim it.
///
/// # Arguments
/// * `dir` - the containing directory.
/// * `stem` - the desired base name.
/// * `extension` - the extension, with or without the leading `.`.
pub fn available_save_path<P, S, E>(
    dir: P,
    stem: S,
    extension: E,
) -> PathBuf
where
    P: AsRef<Path>,
    S: AsRef<str>,
    E: AsRef<str>,
{
    let dir = dir.as_ref();
    let stem = stem.as_ref();
    let extension = extension.as_ref().trim_start_matches('.');

    let file_name = |suffix: Option<usize>| {
        let counter = suffix.map(|n| format!("({n})")).unwrap_or_default();
        if extension.is_empty() {
            format!("{stem}{counter}")
        } else {
            format!("{stem}{counter}.{extension}")
        }
    };

    let mut path = dir.join(file_name(None));
    let mut n = 2;
    while path.exists() {
        path = dir.join(file_name(Some(n)));
        n += 1;
    }

    log::debug!("selected save path: {}", path.display());
    path
}
