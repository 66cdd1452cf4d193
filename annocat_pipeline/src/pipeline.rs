//! One full batch pass: annotation files in, enriched catalog out.

use annocat_core::{
    Catalog, MentionBoundary, MergeKey, ReferenceTableSpec, RowLayout, UNKNOWN_LEMMA,
    default_layouts, default_reference_tables,
};
use tracing::info;

use crate::aggregate::MentionAggregator;
use crate::collect::collect_catalog;
use crate::diagnostics::Diagnostics;
use crate::enrich::{EnrichmentSummary, ReferenceEnricher, ReferenceTable};
use crate::error::Result;
use crate::merge::merge_mentions;
use crate::source::{PageNaming, SourceLoader};

/// Everything a run needs, independent of where it was configured.
#[derive(Debug, Clone)]
pub struct PipelineOptions {
    /// Glob selecting the annotation files.
    pub pattern: String,
    pub file_name_pattern: String,
    pub page_offset: i64,
    pub layouts: Vec<RowLayout>,
    pub boundary: MentionBoundary,
    pub merge_key: MergeKey,
    pub unknown_lemma: String,
    /// Tables without a path are ignored.
    pub references: Vec<ReferenceTableSpec>,
}

impl Default for PipelineOptions {
    fn default() -> Self {
        Self {
            pattern: "annotations/*.tsv".to_string(),
            file_name_pattern: r"^([^_]+)_page(\d{3})\.tsv$".to_string(),
            page_offset: 0,
            layouts: default_layouts(),
            boundary: MentionBoundary::default(),
            merge_key: MergeKey::default(),
            unknown_lemma: UNKNOWN_LEMMA.to_string(),
            references: default_reference_tables(),
        }
    }
}

/// Result of a run: the catalog plus everything that was skipped on the way.
#[derive(Debug)]
pub struct PipelineOutput {
    pub catalog: Catalog,
    pub diagnostics: Diagnostics,
    pub enrichment: Vec<EnrichmentSummary>,
}

pub struct Pipeline {
    options: PipelineOptions,
    loader: SourceLoader,
    aggregator: MentionAggregator,
}

impl Pipeline {
    pub fn new(options: PipelineOptions) -> Result<Self> {
        let naming = PageNaming::new(&options.file_name_pattern, options.page_offset)?;
        let loader = SourceLoader::new(naming, options.layouts.clone());
        let aggregator = MentionAggregator::new(options.boundary, options.unknown_lemma.clone());
        Ok(Self {
            options,
            loader,
            aggregator,
        })
    }

    #[must_use]
    pub const fn options(&self) -> &PipelineOptions {
        &self.options
    }

    /// Load, aggregate, merge, collect and enrich.
    pub fn run(&self) -> Result<PipelineOutput> {
        let mut diagnostics = Diagnostics::new();
        let mut catalog = self.build_catalog(&mut diagnostics)?;
        let enrichment = self.enrich(&mut catalog, &mut diagnostics)?;
        diagnostics.log_summary();

        Ok(PipelineOutput {
            catalog,
            diagnostics,
            enrichment,
        })
    }

    /// The catalog before any references are attached.
    pub fn build_catalog(&self, diagnostics: &mut Diagnostics) -> Result<Catalog> {
        let pages = self.loader.load(&self.options.pattern, diagnostics)?;
        let mentions = self.aggregator.aggregate(&pages, diagnostics);
        info!("Aggregated {} mentions from {} pages", mentions.len(), pages.len());

        let index = merge_mentions(mentions, self.options.merge_key, diagnostics);
        info!("Merged into {} entities", index.len());

        Ok(collect_catalog(index.into_records()))
    }

    /// Apply every reference table that has a path, in configuration order.
    pub fn enrich(
        &self,
        catalog: &mut Catalog,
        diagnostics: &mut Diagnostics,
    ) -> Result<Vec<EnrichmentSummary>> {
        let enricher = ReferenceEnricher::new(self.loader.naming());
        let mut summaries = Vec::new();

        for spec in &self.options.references {
            let Some(path) = &spec.path else {
                continue;
            };
            let table = ReferenceTable::read(spec, path)?;
            summaries.push(enricher.enrich_catalog(catalog, &table, diagnostics));
        }

        Ok(summaries)
    }
}
