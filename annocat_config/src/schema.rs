use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

use annocat_core::{
    Category, MentionBoundary, MergeKey, ReferenceTableSpec, RowLayout, UNKNOWN_LEMMA,
    default_layouts, default_reference_tables,
};

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
pub struct Config {
    #[serde(default)]
    pub source: SourceConfig,
    #[serde(default)]
    pub aggregation: AggregationConfig,
    #[serde(default = "default_reference_tables")]
    pub references: Vec<ReferenceTableSpec>,
    #[serde(default)]
    pub output: OutputConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            source: SourceConfig::default(),
            aggregation: AggregationConfig::default(),
            references: default_reference_tables(),
            output: OutputConfig::default(),
        }
    }
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
pub struct SourceConfig {
    /// Glob selecting the annotation files.
    #[serde(default = "SourceConfig::default_pattern")]
    pub pattern: String,
    /// Regex over the file's base name: group 1 document id, group 2 page.
    #[serde(default = "SourceConfig::default_file_name_pattern")]
    pub file_name_pattern: String,
    /// Added to the page number parsed from the file name.
    #[serde(default)]
    pub page_offset: i64,
    #[serde(default = "default_layouts")]
    pub layouts: Vec<RowLayout>,
}

impl Default for SourceConfig {
    fn default() -> Self {
        Self {
            pattern: Self::default_pattern(),
            file_name_pattern: Self::default_file_name_pattern(),
            page_offset: 0,
            layouts: default_layouts(),
        }
    }
}

impl SourceConfig {
    fn default_pattern() -> String {
        "annotations/*.tsv".to_string()
    }

    fn default_file_name_pattern() -> String {
        r"^([^_]+)_page(\d{3})\.tsv$".to_string()
    }
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
pub struct AggregationConfig {
    #[serde(default)]
    pub boundary: MentionBoundary,
    #[serde(default)]
    pub merge_key: MergeKey,
    /// Lemma value treated as missing.
    #[serde(default = "AggregationConfig::default_unknown_lemma")]
    pub unknown_lemma: String,
}

impl Default for AggregationConfig {
    fn default() -> Self {
        Self {
            boundary: MentionBoundary::default(),
            merge_key: MergeKey::default(),
            unknown_lemma: Self::default_unknown_lemma(),
        }
    }
}

impl AggregationConfig {
    fn default_unknown_lemma() -> String {
        UNKNOWN_LEMMA.to_string()
    }
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
pub struct OutputConfig {
    /// Spaces per indentation level of the emitted JSON.
    #[serde(default = "OutputConfig::default_indent")]
    pub indent: usize,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            indent: Self::default_indent(),
        }
    }
}

impl OutputConfig {
    const fn default_indent() -> usize {
        4
    }
}

impl Config {
    pub fn config_dir() -> anyhow::Result<PathBuf> {
        Ok(dirs::home_dir()
            .ok_or_else(|| anyhow::anyhow!("Cannot find home directory"))?
            .join("annocat"))
    }

    pub fn config_path() -> anyhow::Result<PathBuf> {
        Ok(Self::config_dir()?.join("config.json"))
    }

    pub fn load_from(path: &Path) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            anyhow::anyhow!("Cannot read config file {}: {e}", path.display())
        })?;
        let config: Self = serde_json::from_str(&content)
            .map_err(|e| anyhow::anyhow!("Invalid config file {}: {e}", path.display()))?;

        debug!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// Load `~/annocat/config.json` if it exists, otherwise fall back to defaults.
    pub fn load_or_default() -> anyhow::Result<Self> {
        Self::load_or_default_from(&Self::config_path()?)
    }

    pub fn load_or_default_from(path: &Path) -> anyhow::Result<Self> {
        if path.exists() {
            return Self::load_from(path);
        }
        info!(
            "No config file at {}, using defaults. Run 'annocat init' to create one.",
            path.display()
        );
        Ok(Self::default())
    }

    /// Point the reference table of `category` at `path`.
    ///
    /// A category missing from the config gets its built-in table layout;
    /// categories without one must be configured explicitly.
    pub fn set_reference_path(&mut self, category: Category, path: PathBuf) -> anyhow::Result<()> {
        if let Some(table) = self.references.iter_mut().find(|t| t.category == category) {
            table.path = Some(path);
            return Ok(());
        }

        let Some(mut table) = default_reference_tables()
            .into_iter()
            .find(|t| t.category == category)
        else {
            anyhow::bail!(
                "No reference table layout for {category}. Add one to the 'references' section of the config."
            );
        };
        table.path = Some(path);
        self.references.push(table);
        Ok(())
    }

    /// Reference tables that name a file to read.
    #[must_use]
    pub fn active_references(&self) -> Vec<&ReferenceTableSpec> {
        self.references.iter().filter(|t| t.path.is_some()).collect()
    }

    pub fn ensure_config_dir() -> anyhow::Result<PathBuf> {
        let config_dir = Self::config_dir()?;
        std::fs::create_dir_all(&config_dir)?;
        Ok(config_dir)
    }

    pub fn create_config() -> anyhow::Result<()> {
        let config_dir = Self::ensure_config_dir()?;
        let config_path = config_dir.join("config.json");
        Self::write_template(&config_path)?;

        println!("✅ Created config file at: {}", config_path.display());
        println!();
        println!("📝 Next steps:");
        println!("   1. Set source.pattern to the glob matching your annotation files");
        println!("   2. Set a path on each reference table you want to enrich from");
        println!("   3. Run 'annocat convert' to build the catalog");
        println!();
        println!("🔧 Configuration options:");
        println!("   - source.page_offset: shift applied to page numbers from file names");
        println!("   - aggregation.boundary: exact_tag | category");
        println!("   - aggregation.merge_key: lemma | category_lemma");
        println!();
        Ok(())
    }

    /// Write the default configuration to `path`, refusing to overwrite.
    pub fn write_template(path: &Path) -> anyhow::Result<()> {
        if path.exists() {
            anyhow::bail!(
                "Config file already exists at: {}. Please edit it directly.",
                path.display()
            );
        }

        let template = serde_json::to_string_pretty(&Self::default())?;
        std::fs::write(path, template)?;
        Ok(())
    }
}
