use annocat_core::ReferenceTableSpec;
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::error::{PipelineError, Result};

/// One data row of a reference table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReferenceRow {
    /// Line number in the source file, for error messages.
    pub line: u64,
    pub cells: Vec<String>,
}

impl ReferenceRow {
    #[must_use]
    pub fn cell(&self, column: usize) -> &str {
        self.cells.get(column).map_or("", |cell| cell.trim())
    }

    #[must_use]
    pub fn cells(&self) -> Vec<&str> {
        self.cells.iter().map(String::as_str).collect()
    }
}

/// A semicolon-separated authority table, header skipped.
#[derive(Debug, Clone)]
pub struct ReferenceTable {
    pub spec: ReferenceTableSpec,
    pub path: PathBuf,
    pub rows: Vec<ReferenceRow>,
}

impl ReferenceTable {
    pub fn read(spec: &ReferenceTableSpec, path: &Path) -> Result<Self> {
        let file = std::fs::File::open(path).map_err(|e| PipelineError::io(path, e))?;
        Self::from_reader(spec, path, file)
    }

    /// Parse a table from any reader; `path` is only used in errors.
    pub fn from_reader(
        spec: &ReferenceTableSpec,
        path: &Path,
        reader: impl std::io::Read,
    ) -> Result<Self> {
        let csv_error = |source| PipelineError::Csv {
            path: path.to_path_buf(),
            source,
        };

        let mut reader = csv::ReaderBuilder::new()
            .delimiter(b';')
            .has_headers(true)
            .flexible(true)
            .from_reader(reader);

        let needed = spec.required_width();
        let mut rows = Vec::new();
        for record in reader.records() {
            let record = record.map_err(csv_error)?;
            let line = record.position().map_or(0, csv::Position::line);

            if record.len() < needed {
                return Err(PipelineError::ReferenceRow {
                    path: path.to_path_buf(),
                    line,
                    needed,
                    found: record.len(),
                });
            }

            rows.push(ReferenceRow {
                line,
                cells: record.iter().map(str::to_string).collect(),
            });
        }

        debug!("Read {} reference rows from {}", rows.len(), path.display());
        Ok(Self {
            spec: spec.clone(),
            path: path.to_path_buf(),
            rows,
        })
    }
}
