use std::path::PathBuf;

use poetic::assets::AssetPaths;

/// Asset location arg group.
#[derive(clap::Args, Debug)]
pub struct AssetArgs {
    /// Directory holding the vocabulary and model files.
    ///
    /// Defaults to `$POETIC_DATA_DIR`, then the platform data directory.
    #[arg(long, default_value = None)]
    pub data_dir: Option<PathBuf>,

    /// Vocabulary file; overrides `--data-dir`.
    #[arg(long, default_value = None)]
    pub vocab: Option<PathBuf>,

    /// Model file; overrides `--data-dir`.
    #[arg(long, default_value = None)]
    pub model: Option<PathBuf>,
}

impl AssetArgs {
    /// The library asset overrides.
    pub fn asset_paths(&self) -> AssetPaths {
        AssetPaths {
            data_dir: self.data_dir.clone(),
            vocab: self.vocab.clone(),
            model: self.model.clone(),
        }
    }
}
