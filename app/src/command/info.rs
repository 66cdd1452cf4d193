use annocat_config::Config;
use annocat_core::ReferenceTableSpec;
use std::path::PathBuf;

/// Strategy for displaying configuration information.
///
/// This strategy outputs the effective configuration:
/// - Config file location and whether it exists
/// - Source pattern, page naming and row layouts
/// - Aggregation settings
/// - Reference tables and their columns
#[derive(Debug, Clone, Copy)]
pub struct InfoStrategy;

impl super::CommandStrategy for InfoStrategy {
    type Input = Option<PathBuf>;

    async fn execute(&self, input: Self::Input) -> anyhow::Result<()> {
        let config = super::load_config(input.as_deref())?;

        println!("=== annocat Configuration ===\n");

        let config_path = input.map_or_else(Config::config_path, Ok)?;
        println!("Config File:");
        println!("  Path: {}", config_path.display());
        println!(
            "  Status: {}",
            if config_path.exists() {
                "found"
            } else {
                "not found (using defaults)"
            }
        );
        println!();

        println!("Source:");
        println!("  Pattern: {}", config.source.pattern);
        println!("  File Name Pattern: {}", config.source.file_name_pattern);
        println!("  Page Offset: {}", config.source.page_offset);
        println!("  Layouts:");
        for layout in &config.source.layouts {
            let lemma = layout
                .lemma_column
                .map_or_else(|| "-".to_string(), |c| c.to_string());
            println!(
                "    {}: width >= {}, index {}, surface {}, lemma {lemma}, tag {}",
                layout.name,
                layout.min_width,
                layout.index_column,
                layout.surface_column,
                layout.tag_column
            );
        }
        println!();

        println!("Aggregation:");
        println!("  Boundary: {:?}", config.aggregation.boundary);
        println!("  Merge Key: {:?}", config.aggregation.merge_key);
        println!("  Unknown Lemma: {}", config.aggregation.unknown_lemma);
        println!();

        println!("References:");
        if config.references.is_empty() {
            println!("  (none)");
        }
        for table in &config.references {
            println!("  {}", describe_table(table));
        }
        println!();

        println!("Output:");
        println!("  Indent: {}", config.output.indent);

        Ok(())
    }
}

fn describe_table(table: &ReferenceTableSpec) -> String {
    let path = table
        .path
        .as_ref()
        .map_or_else(|| "(no path)".to_string(), |p| p.display().to_string());

    let mut columns: Vec<String> = table
        .authorities
        .iter()
        .map(|a| format!("{}@{}", a.authority, a.column))
        .collect();
    if let Some(column) = table.url_column {
        columns.push(format!("url@{column}"));
    }

    format!(
        "{}: {path} [term@{}, page@{}, {}]",
        table.category,
        table.term_column,
        table.page_column,
        columns.join(", ")
    )
}
