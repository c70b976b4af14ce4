//! # Asset Resolution
//!
//! Locates the vocabulary and model files a [`Scorer`] is built from.
//! Assets are never downloaded; a missing asset is an [`PoeticError::Io`]
//! error naming the path that was tried.

use std::{
    env,
    io,
    path::{Path, PathBuf},
};

use directories_next::ProjectDirs;

use crate::{
    errors::{PoeticError, PoeticResult},
    model::LexicalModel,
    scorer::Scorer,
    vocab::VocabularyIndex,
};

/// The default vocabulary file name.
pub const VOCAB_FILE_NAME: &str = "word_dictionary_complete.txt";

/// The default model file name.
pub const MODEL_FILE_NAME: &str = "lexical_model.json";

/// The environment variable overriding the asset directory.
pub const DATA_DIR_ENV_VAR: &str = "POETIC_DATA_DIR";

/// Static configuration for asset directory resolution.
#[derive(Debug, Clone, Copy)]
pub struct AssetResolver {
    /// The qualifier for [`ProjectDirs`].
    pub qualifier: &'static str,

    /// The organization for [`ProjectDirs`].
    pub organization: &'static str,

    /// The application for [`ProjectDirs`].
    pub application: &'static str,

    /// The resolution order for data directory environment variables.
    pub data_env_vars: &'static [&'static str],
}

/// The library's asset resolver.
pub const POETIC_ASSETS: AssetResolver = AssetResolver {
    qualifier: "io",
    organization: "poetic",
    application: "poetic",
    data_env_vars: &[DATA_DIR_ENV_VAR],
};

impl Default for AssetResolver {
    fn default() -> Self {
        POETIC_ASSETS
    }
}

impl AssetResolver {
    /// Get the [`ProjectDirs`] for this config.
    pub fn project_dirs(&self) -> Option<ProjectDirs> {
        ProjectDirs::from(self.qualifier, self.organization, self.application)
    }

    /// Resolve the asset directory.
    ///
    /// Resolution Order:
    /// 1. `path`, if present.
    /// 2. ``env[$VAR]`` for each `self.data_env_vars`; in order.
    /// 3. `self.project_dirs().data_dir()`, if present.
    /// 4. `None`
    pub fn resolve_data_dir<P: AsRef<Path>>(
        &self,
        path: Option<P>,
    ) -> Option<PathBuf> {
        if let Some(path) = path.as_ref() {
            return Some(path.as_ref().to_path_buf());
        }

        for env_var in self.data_env_vars {
            if let Ok(path) = env::var(env_var) {
                return Some(PathBuf::from(path));
            }
        }

        self.project_dirs().map(|pds| pds.data_dir().to_path_buf())
    }
}

/// User overrides for asset locations.
///
/// Explicit file paths win over the resolved asset directory.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AssetPaths {
    /// The asset directory.
    pub data_dir: Option<PathBuf>,

    /// The vocabulary file.
    pub vocab: Option<PathBuf>,

    /// The model file.
    pub model: Option<PathBuf>,
}

impl AssetPaths {
    /// Resolve the vocabulary file path.
    pub fn vocab_path(
        &self,
        resolver: &AssetResolver,
    ) -> PoeticResult<PathBuf> {
        self.file_path(&self.vocab, VOCAB_FILE_NAME, resolver)
    }

    /// Resolve the model file path.
    pub fn model_path(
        &self,
        resolver: &AssetResolver,
    ) -> PoeticResult<PathBuf> {
        self.file_path(&self.model, MODEL_FILE_NAME, resolver)
    }

    /// Load the vocabulary.
    pub fn load_vocab(
        &self,
        resolver: &AssetResolver,
    ) -> PoeticResult<VocabularyIndex> {
        let path = self.vocab_path(resolver)?;
        VocabularyIndex::load_dictionary_text(&path).map_err(|e| name_path(e, &path))
    }

    /// Load the model.
    pub fn load_model(
        &self,
        resolver: &AssetResolver,
    ) -> PoeticResult<LexicalModel> {
        let path = self.model_path(resolver)?;
        LexicalModel::load_path(&path).map_err(|e| name_path(e, &path))
    }

    /// Load both assets, and build a [`Scorer`] from them.
    pub fn load_scorer(
        &self,
        resolver: &AssetResolver,
    ) -> PoeticResult<Scorer<LexicalModel>> {
        Ok(Scorer::new(
            self.load_model(resolver)?,
            self.load_vocab(resolver)?,
        ))
    }

    fn file_path(
        &self,
        explicit: &Option<PathBuf>,
        file_name: &str,
        resolver: &AssetResolver,
    ) -> PoeticResult<PathBuf> {
        if let Some(path) = explicit {
            return Ok(path.clone());
        }
        resolver
            .resolve_data_dir(self.data_dir.as_ref())
            .map(|dir| dir.join(file_name))
            .ok_or_else(|| {
                PoeticError::Io(io::Error::new(
                    io::ErrorKind::NotFound,
                    format!("no asset directory for {file_name}"),
                ))
            })
    }
}

fn name_path(
    err: PoeticError,
    path: &Path,
) -> PoeticError {
    match err {
        PoeticError::Io(e) => PoeticError::Io(io::Error::new(
            e.kind(),
            format!("{}: {e}", path.display()),
        )),
        other => other,
    }
}
