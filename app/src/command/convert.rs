use annocat_pipeline::Pipeline;
use std::path::PathBuf;
use tracing::info;

use super::{ReferenceArg, apply_references, check_strict, emit, load_config, pipeline_options};

/// Input parameters for the Convert command strategy.
#[derive(Debug, Clone)]
pub struct ConvertInput {
    /// Config file to use instead of `~/annocat/config.json`
    pub config: Option<PathBuf>,
    /// Glob overriding `source.pattern`
    pub pattern: Option<String>,
    /// File to write the catalog to (stdout if not set)
    pub output: Option<PathBuf>,
    /// Reference tables given on the command line
    pub references: Vec<ReferenceArg>,
    /// Skip enrichment even if the config names reference tables
    pub no_references: bool,
    /// Fail if any diagnostics were reported
    pub strict: bool,
}

/// Strategy for the full annotation-to-catalog run.
///
/// This strategy handles:
/// - Loading configuration and applying command line overrides
/// - Running the pipeline (load, aggregate, merge, collect, enrich)
/// - Writing the catalog JSON
#[derive(Debug, Clone, Copy)]
pub struct ConvertStrategy;

impl super::CommandStrategy for ConvertStrategy {
    type Input = ConvertInput;

    async fn execute(&self, input: Self::Input) -> anyhow::Result<()> {
        let mut config = load_config(input.config.as_deref())?;

        if let Some(pattern) = input.pattern {
            config.source.pattern = pattern;
        }
        apply_references(&mut config, input.references)?;
        if input.no_references {
            config.references.clear();
        }

        info!(
            "Converting {} ({} reference tables)",
            config.source.pattern,
            config.active_references().len()
        );

        let pipeline = Pipeline::new(pipeline_options(&config))?;
        let output = pipeline.run()?;

        emit(&output.catalog, config.output.indent, input.output.as_deref())?;
        check_strict(&output.diagnostics, input.strict)
    }
}
