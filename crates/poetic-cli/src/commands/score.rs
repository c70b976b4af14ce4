use std::path::PathBuf;

use poetic::{PoeticError, PoeticResult, ResultSet, Scorer, assets::POETIC_ASSETS, model::ScoringModel};

use crate::assets::AssetArgs;

/// Text input arg group; exactly one source is required.
#[derive(clap::Args, Debug)]
#[group(required = true, multiple = false)]
pub struct InputArgs {
    /// Sentence(s) to score.
    #[arg(short, long)]
    pub sentence: Option<String>,

    /// UTF-8 text file to score.
    #[arg(short, long)]
    pub file: Option<PathBuf>,
}

impl InputArgs {
    /// Score the selected input.
    pub fn predict<M: ScoringModel>(
        &self,
        scorer: &mut Scorer<M>,
    ) -> PoeticResult<ResultSet> {
        match (&self.sentence, &self.file) {
            (Some(sentence), None) => scorer.predict(sentence),
            (None, Some(file)) => scorer.predict_file(file),
            _ => Err(PoeticError::UnsupportedConfig(
                "exactly one of --sentence or --file is required".to_string(),
            )),
        }
    }
}

/// Args for the score command.
#[derive(clap::Args, Debug)]
pub struct ScoreArgs {
    #[command(flatten)]
    input: InputArgs,

    /// Save results here: `.csv` for the score table, anything else for the report.
    ///
    /// Without it, the report is printed to stdout.
    #[arg(short, long, default_value = None)]
    out: Option<PathBuf>,

    #[command(flatten)]
    assets: AssetArgs,
}

impl ScoreArgs {
    /// Run the score command.
    pub fn run(&self) -> Result<(), Box<dyn std::error::Error>> {
        let mut scorer = self.assets.asset_paths().load_scorer(&POETIC_ASSETS)?;

        let mut results = self.input.predict(&mut scorer)?;
        results.run_diagnostics();

        match &self.out {
            Some(path) => {
                results.to_file(path)?;
                log::info!("saved results to {}", path.display());
            }
            None => println!("{}", results.generate_report()),
        }

        Ok(())
    }
}
