use annocat_pipeline::{Diagnostics, Pipeline, read_catalog};
use std::path::PathBuf;
use tracing::info;

use super::{ReferenceArg, apply_references, check_strict, emit, load_config, pipeline_options};

/// Input parameters for the Enrich command strategy.
#[derive(Debug, Clone)]
pub struct EnrichInput {
    /// Catalog JSON written by a previous `convert`
    pub catalog: PathBuf,
    pub config: Option<PathBuf>,
    pub output: Option<PathBuf>,
    pub references: Vec<ReferenceArg>,
    pub strict: bool,
}

/// Strategy for attaching references to an existing catalog.
///
/// Reads the catalog, applies every reference table with a path and writes
/// the result. Annotation files are not read.
#[derive(Debug, Clone, Copy)]
pub struct EnrichStrategy;

impl super::CommandStrategy for EnrichStrategy {
    type Input = EnrichInput;

    async fn execute(&self, input: Self::Input) -> anyhow::Result<()> {
        let mut config = load_config(input.config.as_deref())?;
        apply_references(&mut config, input.references)?;

        if config.active_references().is_empty() {
            anyhow::bail!(
                "No reference tables to apply. Pass --reference CATEGORY=PATH or set a path in the config."
            );
        }

        let mut catalog = read_catalog(&input.catalog)?;
        info!(
            "Loaded {} entities from {}",
            catalog.len(),
            input.catalog.display()
        );

        let pipeline = Pipeline::new(pipeline_options(&config))?;
        let mut diagnostics = Diagnostics::new();
        pipeline.enrich(&mut catalog, &mut diagnostics)?;
        diagnostics.log_summary();

        emit(&catalog, config.output.indent, input.output.as_deref())?;
        check_strict(&diagnostics, input.strict)
    }
}
