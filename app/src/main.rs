#![deny(
    clippy::all,
    clippy::nursery,
    clippy::pedantic,
    clippy::style,
    clippy::complexity,
    clippy::perf,
    clippy::correctness,
    clippy::suspicious,
    clippy::unwrap_used,
    clippy::expect_used
)]
#![allow(
    clippy::similar_names,
    clippy::missing_safety_doc,
    clippy::missing_panics_doc,
    clippy::missing_errors_doc
)]

mod command;

use clap::{Parser, Subcommand};
use command::{
    CommandStrategy, ConvertInput, ConvertStrategy, EnrichInput, EnrichStrategy, InfoStrategy,
    InitStrategy, ReferenceArg, VersionStrategy,
};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "annocat")]
#[command(about = "Build an entity catalog from token-level NER annotations", long_about = None)]
struct Cli {
    /// Log debug output
    #[arg(short, long, global = true, conflicts_with = "quiet")]
    verbose: bool,

    /// Only log warnings and errors
    #[arg(short, long, global = true)]
    quiet: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Convert annotation files into an entity catalog
    Convert {
        /// Config file (defaults to ~/annocat/config.json)
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Glob selecting the annotation files
        #[arg(short, long)]
        pattern: Option<String>,

        /// Write the catalog here instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Reference table as CATEGORY=PATH (repeatable)
        #[arg(short, long = "reference", value_name = "CATEGORY=PATH")]
        references: Vec<ReferenceArg>,

        /// Do not attach references
        #[arg(long, conflicts_with = "references")]
        no_references: bool,

        /// Exit with an error if anything was skipped
        #[arg(long)]
        strict: bool,
    },
    /// Attach references to an existing catalog
    Enrich {
        /// Catalog JSON to enrich
        #[arg(long)]
        catalog: PathBuf,

        #[arg(short, long)]
        config: Option<PathBuf>,

        #[arg(short, long)]
        output: Option<PathBuf>,

        #[arg(short, long = "reference", value_name = "CATEGORY=PATH")]
        references: Vec<ReferenceArg>,

        #[arg(long)]
        strict: bool,
    },
    /// Initialize configuration
    Init,
    /// Show effective configuration
    Info {
        #[arg(short, long)]
        config: Option<PathBuf>,
    },
    /// Show version
    Version,
}

fn init_tracing(verbose: bool, quiet: bool) -> anyhow::Result<()> {
    let default_level = if verbose {
        "debug"
    } else if quiet {
        "warn"
    } else {
        "info"
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    // stdout carries the catalog
    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .finish();

    tracing::subscriber::set_global_default(subscriber)?;
    Ok(())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose, cli.quiet)?;

    match cli.command {
        Commands::Convert {
            config,
            pattern,
            output,
            references,
            no_references,
            strict,
        } => {
            ConvertStrategy
                .execute(ConvertInput {
                    config,
                    pattern,
                    output,
                    references,
                    no_references,
                    strict,
                })
                .await
        }
        Commands::Enrich {
            catalog,
            config,
            output,
            references,
            strict,
        } => {
            EnrichStrategy
                .execute(EnrichInput {
                    catalog,
                    config,
                    output,
                    references,
                    strict,
                })
                .await
        }
        Commands::Init => InitStrategy.execute(()).await,
        Commands::Info { config } => InfoStrategy.execute(config).await,
        Commands::Version => VersionStrategy.execute(()).await,
    }
}
