//! Annotation file discovery and row reading.

mod naming;

pub use naming::{PageNaming, PageRef};

use annocat_core::{RowLayout, TokenRow};
use std::path::PathBuf;
use tracing::{debug, info};

use crate::diagnostics::{Diagnostic, Diagnostics};
use crate::error::{PipelineError, Result};

/// An annotation file whose name parsed into a page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceFile {
    pub path: PathBuf,
    pub page: PageRef,
}

/// All rows of one annotation file, in file order.
#[derive(Debug, Clone)]
pub struct PageRows {
    pub path: PathBuf,
    pub rows: Vec<TokenRow>,
}

pub struct SourceLoader {
    naming: PageNaming,
    layouts: Vec<RowLayout>,
}

impl SourceLoader {
    #[must_use]
    pub const fn new(naming: PageNaming, layouts: Vec<RowLayout>) -> Self {
        Self { naming, layouts }
    }

    #[must_use]
    pub const fn naming(&self) -> &PageNaming {
        &self.naming
    }

    /// Files matching `pattern`, sorted by path. Files whose names do not
    /// parse are reported and left out.
    pub fn discover(&self, pattern: &str, diagnostics: &mut Diagnostics) -> Result<Vec<SourceFile>> {
        let mut paths = glob::glob(pattern)?.collect::<std::result::Result<Vec<_>, _>>()?;
        paths.sort();

        let mut files = Vec::with_capacity(paths.len());
        for path in paths {
            if let Some(page) = self.naming.parse_path(&path) {
                files.push(SourceFile { path, page });
            } else {
                diagnostics.report(Diagnostic::UnparsableFileName {
                    name: path.display().to_string(),
                });
            }
        }

        info!("Discovered {} annotation files matching {pattern}", files.len());
        Ok(files)
    }

    /// Read every row of `file`.
    pub fn read(&self, file: &SourceFile) -> Result<PageRows> {
        let content = std::fs::read_to_string(&file.path)
            .map_err(|e| PipelineError::io(&file.path, e))?;
        let rows = self.parse_rows(&content, &file.page);
        debug!("Read {} rows from {}", rows.len(), file.path.display());

        Ok(PageRows {
            path: file.path.clone(),
            rows,
        })
    }

    /// Split tab-separated `content` into token rows.
    ///
    /// Blank lines stay in as rows without token fields.
    #[must_use]
    pub fn parse_rows(&self, content: &str, page: &PageRef) -> Vec<TokenRow> {
        content
            .lines()
            .map(|line| {
                let fields: Vec<&str> = line.split('\t').collect();
                TokenRow {
                    document: page.document.clone(),
                    page_label: page.page_label.clone(),
                    page: page.page,
                    token: RowLayout::select(&self.layouts, &fields).map(|(_, token)| token),
                }
            })
            .collect()
    }

    /// Discover and read all files matching `pattern`.
    pub fn load(&self, pattern: &str, diagnostics: &mut Diagnostics) -> Result<Vec<PageRows>> {
        self.discover(pattern, diagnostics)?
            .iter()
            .map(|file| self.read(file))
            .collect()
    }
}
