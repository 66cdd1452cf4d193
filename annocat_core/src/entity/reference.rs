//! External authority references and the table layouts they are read from.

use serde::{Deserialize, Serialize};
use std::hash::{Hash, Hasher};
use std::path::PathBuf;

use super::category::Category;

/// A link from an entity to an external authority entry.
///
/// Two references are the same reference when their URLs are equal, whatever
/// their authority or identifier say.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Reference {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub url: String,
    /// Authority name, e.g. `gnd` or `geonames`.
    #[serde(
        rename = "type",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub authority: Option<String>,
}

impl Reference {
    /// Reference into an identifier scheme; the URL is `url_prefix` + `id`.
    #[must_use]
    pub fn authority(authority: &str, id: &str, url_prefix: &str) -> Self {
        Self {
            id: Some(id.to_string()),
            url: format!("{url_prefix}{id}"),
            authority: Some(authority.to_string()),
        }
    }

    /// Reference that is only a URL.
    #[must_use]
    pub fn bare(url: &str) -> Self {
        Self {
            id: None,
            url: url.to_string(),
            authority: None,
        }
    }
}

impl PartialEq for Reference {
    fn eq(&self, other: &Self) -> bool {
        self.url == other.url
    }
}

impl Eq for Reference {}

impl Hash for Reference {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.url.hash(state);
    }
}

/// Insertion-ordered set of references, deduplicated by URL.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ReferenceSet(Vec<Reference>);

impl ReferenceSet {
    #[must_use]
    pub const fn new() -> Self {
        Self(Vec::new())
    }

    /// Insert a reference. Returns `false` if one with the same URL is present.
    pub fn insert(&mut self, reference: Reference) -> bool {
        crate::push_unique(&mut self.0, reference)
    }

    pub fn extend(&mut self, other: Self) {
        for reference in other.0 {
            self.insert(reference);
        }
    }

    #[must_use]
    pub fn contains_url(&self, url: &str) -> bool {
        self.0.iter().any(|r| r.url == url)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Reference> {
        self.0.iter()
    }
}

impl<'a> IntoIterator for &'a ReferenceSet {
    type Item = &'a Reference;
    type IntoIter = std::slice::Iter<'a, Reference>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

/// One identifier column of a reference table.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AuthorityColumn {
    /// Zero-based column index.
    pub column: usize,
    /// Authority name written to the reference's `type`.
    pub authority: String,
    /// Prepended to the identifier to build the URL.
    pub url_prefix: String,
}

/// Layout of a semicolon-separated authority table for one category.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ReferenceTableSpec {
    pub category: Category,
    /// Table to read. Tables without a path are skipped.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<PathBuf>,
    pub term_column: usize,
    /// Column holding the annotation file name the term was found in.
    pub page_column: usize,
    #[serde(default)]
    pub authorities: Vec<AuthorityColumn>,
    /// Column holding a ready-made URL, attached as a bare reference.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url_column: Option<usize>,
}

impl ReferenceTableSpec {
    /// Smallest row width that holds the term and page columns.
    ///
    /// Identifier columns past the end of a row count as blank.
    #[must_use]
    pub fn required_width(&self) -> usize {
        self.term_column.max(self.page_column) + 1
    }

    /// References carried by a single table row.
    ///
    /// Blank identifier and URL cells contribute nothing.
    #[must_use]
    pub fn references_for(&self, row: &[&str]) -> Vec<Reference> {
        let cell = |column: usize| {
            row.get(column)
                .map(|value| value.trim())
                .filter(|value| !value.is_empty())
        };

        let mut references: Vec<Reference> = self
            .authorities
            .iter()
            .filter_map(|a| {
                cell(a.column).map(|id| Reference::authority(&a.authority, id, &a.url_prefix))
            })
            .collect();

        if let Some(url) = self.url_column.and_then(cell) {
            references.push(Reference::bare(url));
        }

        references
    }
}

fn authority(column: usize, authority: &str, url_prefix: &str) -> AuthorityColumn {
    AuthorityColumn {
        column,
        authority: authority.to_string(),
        url_prefix: url_prefix.to_string(),
    }
}

/// Table layouts for locations, persons and objects.
///
/// Paths are left empty; they are supplied by configuration or the command line.
#[must_use]
pub fn default_reference_tables() -> Vec<ReferenceTableSpec> {
    vec![
        ReferenceTableSpec {
            category: Category::Locations,
            path: None,
            term_column: 0,
            page_column: 1,
            authorities: vec![
                authority(2, "geonames", "https://www.geonames.org/"),
                authority(3, "gnd", "https://d-nb.info/gnd/"),
            ],
            url_column: None,
        },
        ReferenceTableSpec {
            category: Category::Persons,
            path: None,
            term_column: 0,
            page_column: 1,
            authorities: vec![
                authority(2, "gnd", "https://d-nb.info/gnd/"),
                authority(3, "viaf", "https://viaf.org/viaf/"),
            ],
            url_column: None,
        },
        ReferenceTableSpec {
            category: Category::Objects,
            path: None,
            term_column: 0,
            page_column: 1,
            authorities: vec![authority(
                2,
                "museum-digital",
                "https://global.museum-digital.org/object/",
            )],
            url_column: Some(3),
        },
    ]
}
