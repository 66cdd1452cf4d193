//! Attaching external authority references to catalog entities.
//!
//! Each reference table row names a term and the annotation file it was
//! found in. The row's references go to the first entity in the category
//! bucket that carries the term on that page.

mod table;

pub use table::{ReferenceRow, ReferenceTable};

use annocat_core::{Bucket, Catalog};
use tracing::info;

use crate::diagnostics::{Diagnostic, Diagnostics};
use crate::source::PageNaming;

/// Outcome of applying one reference table.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EnrichmentSummary {
    pub rows: usize,
    pub matched: usize,
    pub missed: usize,
    /// Rows whose page reference did not parse.
    pub skipped: usize,
    /// References newly attached; repeats of a URL already present do not count.
    pub attached: usize,
}

pub struct ReferenceEnricher<'a> {
    naming: &'a PageNaming,
}

impl<'a> ReferenceEnricher<'a> {
    #[must_use]
    pub const fn new(naming: &'a PageNaming) -> Self {
        Self { naming }
    }

    /// Apply `table` to the bucket of its category.
    pub fn enrich_catalog(
        &self,
        catalog: &mut Catalog,
        table: &ReferenceTable,
        diagnostics: &mut Diagnostics,
    ) -> EnrichmentSummary {
        let summary = self.enrich_bucket(catalog.bucket_mut(table.spec.category), table, diagnostics);
        info!(
            "Enriched {} from {}: {} rows, {} matched, {} missed, {} skipped, {} references attached",
            table.spec.category,
            table.path.display(),
            summary.rows,
            summary.matched,
            summary.missed,
            summary.skipped,
            summary.attached
        );
        summary
    }

    /// Apply `table` to `bucket`.
    ///
    /// When several entities carry the term on the page, only the first one
    /// in bucket order is enriched.
    pub fn enrich_bucket(
        &self,
        bucket: &mut Bucket,
        table: &ReferenceTable,
        diagnostics: &mut Diagnostics,
    ) -> EnrichmentSummary {
        let spec = &table.spec;
        let mut summary = EnrichmentSummary {
            rows: table.rows.len(),
            ..EnrichmentSummary::default()
        };

        for row in &table.rows {
            let file_name = row.cell(spec.page_column);
            let Some(page_ref) = self.naming.parse(file_name) else {
                diagnostics.report(Diagnostic::UnparsableFileName {
                    name: file_name.to_string(),
                });
                summary.skipped += 1;
                continue;
            };

            let term = row.cell(spec.term_column);
            let Some(entity) = bucket.find_mut(term, page_ref.page) else {
                diagnostics.report(Diagnostic::EnrichmentMiss {
                    category: spec.category,
                    term: term.to_string(),
                    page: page_ref.page,
                });
                summary.missed += 1;
                continue;
            };

            summary.matched += 1;
            for reference in spec.references_for(&row.cells()) {
                if entity.add_reference(reference) {
                    summary.attached += 1;
                }
            }
        }

        summary
    }
}
