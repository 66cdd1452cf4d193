//! Static strategy pattern for CLI commands.
//!
//! Each command is a separate strategy with its own input type; dispatch
//! happens at compile time in `main`.

use annocat_config::Config;
use annocat_core::{Catalog, Category};
use annocat_pipeline::{Diagnostics, PipelineOptions, write_catalog, write_catalog_file};
use std::path::{Path, PathBuf};
use tracing::info;

mod convert;
mod enrich;
mod info;
mod init;
mod version;

pub use convert::{ConvertInput, ConvertStrategy};
pub use enrich::{EnrichInput, EnrichStrategy};
pub use info::InfoStrategy;
pub use init::InitStrategy;
pub use version::VersionStrategy;

/// Core trait defining the contract for all command strategies.
///
/// # Example
/// ```rust
/// struct MyStrategy;
///
/// impl CommandStrategy for MyStrategy {
///     type Input = MyInput;
///
///     async fn execute(&self, input: Self::Input) -> anyhow::Result<()> {
///         // Command logic here
///         Ok(())
///     }
/// }
/// ```
pub trait CommandStrategy: Send + Sync + 'static {
    /// The input type this strategy accepts.
    type Input;

    /// Execute the command with the given input.
    ///
    /// # Errors
    /// Returns an error if command execution fails.
    async fn execute(&self, input: Self::Input) -> anyhow::Result<()>;
}

/// A `CATEGORY=PATH` reference table argument.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReferenceArg {
    pub category: Category,
    pub path: PathBuf,
}

impl std::str::FromStr for ReferenceArg {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let Some((category, path)) = s.split_once('=') else {
            anyhow::bail!("expected CATEGORY=PATH, got '{s}'");
        };
        if path.is_empty() {
            anyhow::bail!("missing path for '{category}'");
        }
        Ok(Self {
            category: category.parse()?,
            path: PathBuf::from(path),
        })
    }
}

/// Explicit config file, else `~/annocat/config.json` if present, else defaults.
fn load_config(path: Option<&Path>) -> anyhow::Result<Config> {
    match path {
        Some(path) => {
            info!("Loading config from {}", path.display());
            Config::load_from(path)
        }
        None => Config::load_or_default(),
    }
}

fn apply_references(config: &mut Config, references: Vec<ReferenceArg>) -> anyhow::Result<()> {
    for reference in references {
        config.set_reference_path(reference.category, reference.path)?;
    }
    Ok(())
}

fn pipeline_options(config: &Config) -> PipelineOptions {
    PipelineOptions {
        pattern: config.source.pattern.clone(),
        file_name_pattern: config.source.file_name_pattern.clone(),
        page_offset: config.source.page_offset,
        layouts: config.source.layouts.clone(),
        boundary: config.aggregation.boundary,
        merge_key: config.aggregation.merge_key,
        unknown_lemma: config.aggregation.unknown_lemma.clone(),
        references: config.references.clone(),
    }
}

/// Write the catalog to `output`, or stdout when none is given.
fn emit(catalog: &Catalog, indent: usize, output: Option<&Path>) -> anyhow::Result<()> {
    match output {
        Some(path) => {
            write_catalog_file(catalog, indent, path)?;
            info!("Wrote {} entities to {}", catalog.len(), path.display());
        }
        None => write_catalog(catalog, indent, std::io::stdout().lock())?,
    }
    Ok(())
}

/// Turn diagnostics into a failure when running strict.
fn check_strict(diagnostics: &Diagnostics, strict: bool) -> anyhow::Result<()> {
    if strict && !diagnostics.is_empty() {
        anyhow::bail!(
            "{} diagnostics reported and --strict is set",
            diagnostics.len()
        );
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_reference_argument() {
        let arg: ReferenceArg = "persons=refs/persons.csv"
            .parse()
            .unwrap_or_else(|e| panic!("{e}"));
        assert_eq!(arg.category, Category::Persons);
        assert_eq!(arg.path, PathBuf::from("refs/persons.csv"));
    }

    #[test]
    fn rejects_malformed_reference_argument() {
        assert!("persons".parse::<ReferenceArg>().is_err());
        assert!("persons=".parse::<ReferenceArg>().is_err());
        assert!("people=x.csv".parse::<ReferenceArg>().is_err());
    }

    #[test]
    fn options_follow_config() {
        let mut config = Config::default();
        config.source.page_offset = 3;
        apply_references(
            &mut config,
            vec![ReferenceArg {
                category: Category::Locations,
                path: PathBuf::from("places.csv"),
            }],
        )
        .unwrap_or_else(|e| panic!("{e}"));

        let options = pipeline_options(&config);
        assert_eq!(options.page_offset, 3);
        assert_eq!(
            options
                .references
                .iter()
                .filter(|t| t.path.is_some())
                .count(),
            1
        );
    }

    #[test]
    fn reference_without_table_layout_is_rejected() {
        let mut config = Config::default();
        let result = apply_references(
            &mut config,
            vec![ReferenceArg {
                category: Category::Timespans,
                path: PathBuf::from("dates.csv"),
            }],
        );
        assert!(result.is_err());
    }

    #[test]
    fn strict_fails_only_with_diagnostics() {
        let mut diagnostics = Diagnostics::new();
        assert!(check_strict(&diagnostics, true).is_ok());

        diagnostics.report(annocat_pipeline::Diagnostic::UnparsableFileName {
            name: "x".into(),
        });
        assert!(check_strict(&diagnostics, false).is_ok());
        assert!(check_strict(&diagnostics, true).is_err());
    }
}
