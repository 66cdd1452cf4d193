//! The emitted catalog: one bucket of entities per category.

use serde::{Deserialize, Serialize};

use crate::entity::{Category, EntityRecord, Reference, ReferenceSet};

/// An entity record once it sits in its category bucket.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogEntity {
    pub id: String,
    pub terms: Vec<String>,
    pub lemma: String,
    pub pages: Vec<i64>,
    pub count: usize,
    #[serde(default)]
    pub references: ReferenceSet,
}

impl CatalogEntity {
    #[must_use]
    pub fn matches(&self, term: &str, page: i64) -> bool {
        self.terms.iter().any(|t| t == term) && self.pages.contains(&page)
    }

    pub fn add_reference(&mut self, reference: Reference) -> bool {
        self.references.insert(reference)
    }
}

impl From<EntityRecord> for CatalogEntity {
    fn from(record: EntityRecord) -> Self {
        Self {
            id: record.id,
            terms: record.terms,
            lemma: record.lemma,
            pages: record.pages,
            count: record.count,
            references: record.references,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Bucket {
    #[serde(default)]
    pub items: Vec<CatalogEntity>,
}

impl Bucket {
    /// First entity carrying `term` on `page`.
    pub fn find_mut(&mut self, term: &str, page: i64) -> Option<&mut CatalogEntity> {
        self.items.iter_mut().find(|entity| entity.matches(term, page))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// All five buckets. Field order is the JSON key order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Catalog {
    #[serde(default)]
    pub objects: Bucket,
    #[serde(default)]
    pub persons: Bucket,
    #[serde(default)]
    pub timespans: Bucket,
    #[serde(default)]
    pub locations: Bucket,
    #[serde(default)]
    pub keyterms: Bucket,
}

impl Catalog {
    #[must_use]
    pub const fn bucket(&self, category: Category) -> &Bucket {
        match category {
            Category::Objects => &self.objects,
            Category::Persons => &self.persons,
            Category::Timespans => &self.timespans,
            Category::Locations => &self.locations,
            Category::Keyterms => &self.keyterms,
        }
    }

    pub const fn bucket_mut(&mut self, category: Category) -> &mut Bucket {
        match category {
            Category::Objects => &mut self.objects,
            Category::Persons => &mut self.persons,
            Category::Timespans => &mut self.timespans,
            Category::Locations => &mut self.locations,
            Category::Keyterms => &mut self.keyterms,
        }
    }

    /// File `record` under its category, dropping the category itself.
    pub fn push(&mut self, record: EntityRecord) {
        let category = record.category;
        self.bucket_mut(category).items.push(record.into());
    }

    /// Entity count across all buckets.
    #[must_use]
    pub fn len(&self) -> usize {
        Category::ALL.iter().map(|c| self.bucket(*c).len()).sum()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entity::Mention;

    fn record(lemma: &str, category: Category) -> EntityRecord {
        Mention::new(format!("d_001_{lemma}"), lemma, lemma, 1, category).into()
    }

    #[test]
    fn empty_catalog_has_every_bucket() {
        let json = serde_json::to_value(Catalog::default()).unwrap_or_default();
        for category in Category::ALL {
            assert_eq!(json[category.as_str()], serde_json::json!({"items": []}));
        }
    }

    #[test]
    fn keys_follow_bucket_order() {
        let text = serde_json::to_string(&Catalog::default()).unwrap_or_default();
        let positions: Vec<usize> = Category::ALL
            .iter()
            .filter_map(|c| text.find(&format!("\"{c}\"")))
            .collect();
        assert_eq!(positions.len(), 5);
        assert!(positions.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn push_files_by_category_without_category_field() {
        let mut catalog = Catalog::default();
        catalog.push(record("Rhenus", Category::Locations));
        catalog.push(record("Caesar", Category::Persons));

        assert_eq!(catalog.locations.len(), 1);
        assert_eq!(catalog.persons.len(), 1);
        assert_eq!(catalog.len(), 2);

        let json = serde_json::to_value(&catalog.persons.items[0]).unwrap_or_default();
        assert!(json.get("category").is_none());
        assert_eq!(json["references"], serde_json::json!([]));
    }

    #[test]
    fn find_mut_requires_term_and_page() {
        let mut catalog = Catalog::default();
        catalog.push(record("Caesar", Category::Persons));

        assert!(catalog.persons.find_mut("Caesar", 1).is_some());
        assert!(catalog.persons.find_mut("Caesar", 2).is_none());
        assert!(catalog.persons.find_mut("Brutus", 1).is_none());
    }

    #[test]
    fn reads_catalog_without_references() {
        let text = r#"{"persons": {"items": [
            {"id": "a_001_1", "terms": ["Caesar"], "lemma": "Caesar", "pages": [1], "count": 2}
        ]}}"#;
        let catalog: Catalog = serde_json::from_str(text).unwrap_or_default();
        assert_eq!(catalog.persons.items[0].count, 2);
        assert!(catalog.objects.is_empty());
    }
}
