use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, PipelineError>;

/// Failures that abort a run.
///
/// Recoverable conditions are not errors; they are collected as
/// [`Diagnostic`](crate::Diagnostic)s instead.
#[derive(Debug, Error)]
pub enum PipelineError {
    #[error("IO error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid glob pattern: {0}")]
    Glob(#[from] glob::PatternError),

    #[error("Cannot read directory entry: {0}")]
    GlobEntry(#[from] glob::GlobError),

    #[error("Invalid file name pattern: {0}")]
    Pattern(#[from] regex::Error),

    #[error("File name pattern needs two capture groups, found {0}")]
    PatternGroups(usize),

    #[error("CSV error in {path}: {source}")]
    Csv {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    #[error("{path}:{line}: row has {found} columns, table layout needs {needed}")]
    ReferenceRow {
        path: PathBuf,
        line: u64,
        needed: usize,
        found: usize,
    },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl PipelineError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}
