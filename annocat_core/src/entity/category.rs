//! Entity categories and the tag classifier.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// The five entity kinds a catalog is partitioned into.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    /// Physical objects, tagged `OBJ`.
    Objects,
    /// People, tagged `PER`.
    Persons,
    /// Places, tagged `PLACE`.
    Locations,
    /// Dates and periods, tagged `DATE`.
    Timespans,
    /// Everything else worth indexing, tagged `MISC`.
    Keyterms,
}

/// Tag prefixes tested front to back. No prefix may be a prefix of another.
const TAG_PREFIXES: [(&str, Category); 5] = [
    ("OBJ", Category::Objects),
    ("PER", Category::Persons),
    ("PLACE", Category::Locations),
    ("DATE", Category::Timespans),
    ("MISC", Category::Keyterms),
];

/// Tags that mark a token as not belonging to any entity.
const SENTINEL_TAGS: [&str; 3] = ["", "_", "*"];

impl Category {
    /// All categories in catalog output order.
    pub const ALL: [Self; 5] = [
        Self::Objects,
        Self::Persons,
        Self::Timespans,
        Self::Locations,
        Self::Keyterms,
    ];

    /// Bucket name used in the catalog.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Objects => "objects",
            Self::Persons => "persons",
            Self::Locations => "locations",
            Self::Timespans => "timespans",
            Self::Keyterms => "keyterms",
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "objects" => Ok(Self::Objects),
            "persons" => Ok(Self::Persons),
            "locations" => Ok(Self::Locations),
            "timespans" => Ok(Self::Timespans),
            "keyterms" => Ok(Self::Keyterms),
            _ => Err(anyhow::anyhow!("unknown entity category: {s}")),
        }
    }
}

/// Outcome of classifying a single token tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TagClass {
    /// The tag belongs to an entity of this category.
    Entity(Category),
    /// One of the sentinel tags; the token is outside any entity.
    Sentinel,
    /// A non-sentinel tag matching no known prefix.
    Unknown,
}

/// Map a raw tag string to its category.
///
/// Reporting of [`TagClass::Unknown`] is left to the caller.
#[must_use]
pub fn classify_tag(tag: &str) -> TagClass {
    if SENTINEL_TAGS.contains(&tag) {
        return TagClass::Sentinel;
    }
    TAG_PREFIXES
        .iter()
        .find(|(prefix, _)| tag.starts_with(prefix))
        .map_or(TagClass::Unknown, |(_, category)| TagClass::Entity(*category))
}
