//! Recoverable conditions reported during a run.

use annocat_core::Category;
use std::path::PathBuf;
use tracing::{info, warn};

/// A condition that skipped some input but did not stop the run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Diagnostic {
    /// The file name did not match the page naming pattern; the file (or
    /// reference row) was skipped.
    UnparsableFileName { name: String },
    /// A tag matched no category and is not a sentinel; the token was
    /// treated as outside any entity.
    UnknownTag { tag: String, file: PathBuf, line: usize },
    /// No entity carried the reference row's term on its page.
    EnrichmentMiss {
        category: Category,
        term: String,
        page: i64,
    },
    /// Two categories produced the same merge key; the later mention was
    /// folded into the record of the first category.
    CategoryCollision {
        key: String,
        kept: Category,
        merged: Category,
    },
}

impl Diagnostic {
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::UnparsableFileName { .. } => "unparsable_file_name",
            Self::UnknownTag { .. } => "unknown_tag",
            Self::EnrichmentMiss { .. } => "enrichment_miss",
            Self::CategoryCollision { .. } => "category_collision",
        }
    }
}

impl std::fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnparsableFileName { name } => write!(f, "file name not parsable: {name}"),
            Self::UnknownTag { tag, file, line } => {
                write!(f, "tag '{tag}' is not mapped ({}:{line})", file.display())
            }
            Self::EnrichmentMiss {
                category,
                term,
                page,
            } => write!(f, "no {category} entity '{term}' on page {page}"),
            Self::CategoryCollision { key, kept, merged } => write!(
                f,
                "lemma '{key}' seen as {kept} and {merged}; merged into {kept}"
            ),
        }
    }
}

/// Collected diagnostics of one run, logged as they arrive.
#[derive(Debug, Default)]
pub struct Diagnostics {
    entries: Vec<Diagnostic>,
}

impl Diagnostics {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn report(&mut self, diagnostic: Diagnostic) {
        warn!("{diagnostic}");
        self.entries.push(diagnostic);
    }

    #[must_use]
    pub fn entries(&self) -> &[Diagnostic] {
        &self.entries
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of diagnostics of each kind, in first-seen order.
    #[must_use]
    pub fn counts(&self) -> Vec<(&'static str, usize)> {
        let mut counts: Vec<(&'static str, usize)> = Vec::new();
        for entry in &self.entries {
            let kind = entry.kind();
            if let Some(position) = counts.iter().position(|(k, _)| *k == kind) {
                counts[position].1 += 1;
            } else {
                counts.push((kind, 1));
            }
        }
        counts
    }

    pub fn log_summary(&self) {
        if self.entries.is_empty() {
            info!("No diagnostics");
            return;
        }
        for (kind, n) in self.counts() {
            info!("Diagnostics: {n} x {kind}");
        }
    }
}
