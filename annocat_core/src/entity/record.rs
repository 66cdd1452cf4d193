use super::category::Category;
use super::reference::ReferenceSet;
use crate::push_unique;

/// One contiguous run of tagged tokens on a single page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Mention {
    /// `{document}_{page label}_{first token index}`.
    pub id: String,
    /// Space-joined surface forms of the run.
    pub surface: String,
    /// Space-joined lemmas of the run.
    pub lemma: String,
    pub page: i64,
    pub category: Category,
}

impl Mention {
    #[must_use]
    pub fn new(id: String, surface: &str, lemma: &str, page: i64, category: Category) -> Self {
        Self {
            id,
            surface: surface.to_string(),
            lemma: lemma.to_string(),
            page,
            category,
        }
    }

    /// Append the next token of the run.
    pub fn extend(&mut self, surface: &str, lemma: &str) {
        self.surface.push(' ');
        self.surface.push_str(surface);
        self.lemma.push(' ');
        self.lemma.push_str(lemma);
    }
}

/// A corpus-wide entity: every mention sharing one merge key.
///
/// Not serialized; it becomes a [`CatalogEntity`](crate::CatalogEntity),
/// which drops the category, when filed into a bucket.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntityRecord {
    /// Id of the first mention folded into this record.
    pub id: String,
    /// Distinct surface forms, first-seen order.
    pub terms: Vec<String>,
    pub lemma: String,
    /// Distinct pages, first-seen order.
    pub pages: Vec<i64>,
    pub count: usize,
    pub category: Category,
    pub references: ReferenceSet,
}

impl From<Mention> for EntityRecord {
    fn from(mention: Mention) -> Self {
        Self {
            id: mention.id,
            terms: vec![mention.surface],
            lemma: mention.lemma,
            pages: vec![mention.page],
            count: 1,
            category: mention.category,
            references: ReferenceSet::new(),
        }
    }
}

impl EntityRecord {
    /// Fold `other` into this record.
    ///
    /// Identity (id, lemma, category) stays with `self`; counts add up and the
    /// multi-valued fields become set unions.
    pub fn merge(&mut self, other: Self) {
        self.count += other.count;
        for page in other.pages {
            push_unique(&mut self.pages, page);
        }
        for term in other.terms {
            push_unique(&mut self.terms, term);
        }
        self.references.extend(other.references);
    }
}
