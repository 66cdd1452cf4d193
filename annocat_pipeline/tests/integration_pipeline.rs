//! End-to-end runs over annotation and reference files on disk.
//!
//! These tests verify that:
//! - mentions group across rows and merge across pages
//! - every bucket is emitted, even when empty
//! - reference tables enrich matching entities and report misses

use annocat_core::{Category, MentionBoundary};
use annocat_pipeline::{Diagnostic, Pipeline, PipelineOptions, write_catalog};
use std::path::{Path, PathBuf};
use tempfile::TempDir;

fn row(index: usize, surface: &str, lemma: &str, tag: &str) -> String {
    format!("{index}\t{index}-{index}\t{surface}\tNE\t{lemma}\t_\t{tag}\t_\n")
}

fn write(dir: &Path, name: &str, content: &str) -> PathBuf {
    let path = dir.join(name);
    std::fs::write(&path, content).expect("fixture should be writable");
    path
}

/// Two pages of a document plus a file whose name does not parse.
fn corpus() -> TempDir {
    let dir = tempfile::tempdir().expect("temp dir");
    let annotations = dir.path().join("annotations");
    std::fs::create_dir(&annotations).expect("annotations dir");

    let page1 = [
        row(1, "Gaius", "Gaius", "PER"),
        row(2, "Iulius", "Iulius", "PER"),
        row(3, "Caesar", "Caesar", "PER"),
        row(4, "in", "in", "_"),
        row(5, "Berlin", "Berlin", "PLACE[4]"),
        row(6, "Wall", "Wall", "PLACE[4]"),
        "\n".to_string(),
        row(7, "Caesar", "Caesar", "PER"),
        row(8, "SPQR", "SPQR", "ORG"),
    ]
    .concat();
    let page2 = [
        row(1, "Caesaris", "Caesar", "PER"),
        row(2, "amphora", "<unknown>", "OBJ"),
        row(3, "anno", "annus", "DATE"),
        row(4, "52", "52", "DATE"),
    ]
    .concat();

    write(&annotations, "bg_page001.tsv", &page1);
    write(&annotations, "bg_page002.tsv", &page2);
    write(&annotations, "bg-notes.tsv", &row(1, "x", "x", "PER"));
    dir
}

fn options(dir: &Path) -> PipelineOptions {
    PipelineOptions {
        pattern: format!("{}/annotations/*.tsv", dir.display()),
        references: Vec::new(),
        ..PipelineOptions::default()
    }
}

fn pipeline(options: PipelineOptions) -> Pipeline {
    Pipeline::new(options).expect("pipeline options should be valid")
}

#[test]
fn test_builds_catalog_from_annotation_files() {
    let dir = corpus();
    let output = pipeline(options(dir.path())).run().expect("run should succeed");
    let catalog = &output.catalog;

    let persons: Vec<(&str, usize)> = catalog
        .persons
        .items
        .iter()
        .map(|e| (e.lemma.as_str(), e.count))
        .collect();
    assert_eq!(persons, vec![("Gaius Iulius Caesar", 1), ("Caesar", 2)]);

    let caesar = &catalog.persons.items[1];
    assert_eq!(caesar.id, "bg_001_7");
    assert_eq!(caesar.pages, vec![1, 2]);
    assert_eq!(caesar.terms, vec!["Caesar", "Caesaris"]);

    assert_eq!(catalog.locations.items[0].terms, vec!["Berlin Wall"]);
    assert_eq!(catalog.locations.items[0].pages, vec![1]);

    assert_eq!(catalog.objects.items[0].lemma, "amphora");
    assert_eq!(catalog.timespans.items[0].terms, vec!["anno 52"]);
    assert!(catalog.keyterms.is_empty());
}

/// A corpus of one page, `bg_page001.tsv`, with the given rows.
fn single_page(rows: &[String]) -> TempDir {
    let dir = tempfile::tempdir().expect("temp dir");
    let annotations = dir.path().join("annotations");
    std::fs::create_dir(&annotations).expect("annotations dir");
    write(&annotations, "bg_page001.tsv", &rows.concat());
    dir
}

fn person_lemmas(options: PipelineOptions) -> Vec<String> {
    let output = pipeline(options).run().expect("run should succeed");
    output
        .catalog
        .persons
        .items
        .iter()
        .map(|e| e.lemma.clone())
        .collect()
}

#[test]
fn test_adjacent_spans_with_distinct_ids_stay_apart() {
    let dir = single_page(&[
        row(1, "Caesar", "Caesar", "PER[1]"),
        row(2, "Ariovistus", "Ariovistus", "PER[2]"),
    ]);

    assert_eq!(person_lemmas(options(dir.path())), vec!["Caesar", "Ariovistus"]);
}

#[test]
fn test_category_boundary_joins_bio_tags() {
    let dir = single_page(&[
        row(1, "Gaius", "Gaius", "PER-B"),
        row(2, "Iulius", "Iulius", "PER-I"),
    ]);

    assert_eq!(person_lemmas(options(dir.path())), vec!["Gaius", "Iulius"]);

    let options = PipelineOptions {
        boundary: MentionBoundary::Category,
        ..options(dir.path())
    };
    assert_eq!(person_lemmas(options), vec!["Gaius Iulius"]);
}

#[test]
fn test_reports_soft_failures_without_aborting() {
    let dir = corpus();
    let output = pipeline(options(dir.path())).run().expect("run should succeed");

    let kinds: Vec<&str> = output.diagnostics.entries().iter().map(Diagnostic::kind).collect();
    assert_eq!(kinds, vec!["unparsable_file_name", "unknown_tag"]);
}

#[test]
fn test_empty_corpus_emits_all_buckets() {
    let dir = tempfile::tempdir().expect("temp dir");
    let output = pipeline(options(dir.path())).run().expect("run should succeed");

    let mut out = Vec::new();
    write_catalog(&output.catalog, 4, &mut out).expect("write should succeed");
    let json: serde_json::Value = serde_json::from_slice(&out).expect("valid json");

    for category in Category::ALL {
        assert_eq!(json[category.as_str()], serde_json::json!({"items": []}));
    }
}

#[test]
fn test_enriches_persons_and_reports_misses() {
    let dir = corpus();
    let persons_csv = write(
        dir.path(),
        "persons.csv",
        "term;file;gnd;viaf\n\
         Caesar;bg_page002.tsv;118518208;\n\
         Caesar;bg_page002.tsv;118518208;\n\
         Caesar;bg_page009.tsv;118518208;\n",
    );

    let mut options = options(dir.path());
    options.references = annocat_core::default_reference_tables();
    for table in &mut options.references {
        if table.category == Category::Persons {
            table.path = Some(persons_csv.clone());
        }
    }

    let output = pipeline(options).run().expect("run should succeed");

    let caesar = &output.catalog.persons.items[1];
    assert_eq!(caesar.references.len(), 1);
    assert!(caesar.references.contains_url("https://d-nb.info/gnd/118518208"));
    assert!(output.catalog.persons.items[0].references.is_empty());

    assert_eq!(output.enrichment.len(), 1);
    assert_eq!(output.enrichment[0].matched, 2);
    assert_eq!(output.enrichment[0].missed, 1);
    assert!(output.diagnostics.entries().contains(&Diagnostic::EnrichmentMiss {
        category: Category::Persons,
        term: "Caesar".into(),
        page: 9,
    }));
}

#[test]
fn test_missing_reference_table_aborts_run() {
    let dir = corpus();
    let mut options = options(dir.path());
    options.references = annocat_core::default_reference_tables();
    options.references[0].path = Some(dir.path().join("missing.csv"));

    assert!(pipeline(options).run().is_err());
}

#[test]
fn test_page_offset_shifts_pages() {
    let dir = corpus();
    let options = PipelineOptions {
        page_offset: 100,
        ..options(dir.path())
    };
    let output = pipeline(options).run().expect("run should succeed");

    assert_eq!(output.catalog.persons.items[1].pages, vec![101, 102]);
    assert_eq!(output.catalog.persons.items[1].id, "bg_001_7");
}
