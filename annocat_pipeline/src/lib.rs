#![warn(
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

pub mod aggregate;
pub mod collect;
mod diagnostics;
pub mod emit;
pub mod enrich;
mod error;
pub mod merge;
mod pipeline;
pub mod source;

pub use aggregate::MentionAggregator;
pub use collect::collect_catalog;
pub use diagnostics::{Diagnostic, Diagnostics};
pub use emit::{read_catalog, write_catalog, write_catalog_file};
pub use enrich::{EnrichmentSummary, ReferenceEnricher, ReferenceTable};
pub use error::{PipelineError, Result};
pub use merge::{LemmaIndex, merge_mentions};
pub use pipeline::{Pipeline, PipelineOptions, PipelineOutput};
pub use source::{PageNaming, PageRef, PageRows, SourceLoader};
