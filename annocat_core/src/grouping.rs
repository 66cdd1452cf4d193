//! Knobs controlling how tokens group into mentions and mentions into entities.

use serde::{Deserialize, Serialize};

use crate::entity::Category;

/// What must stay equal between consecutive tokens for them to form one mention.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum MentionBoundary {
    /// Byte-identical tag string, so `PER[1]` followed by `PER[2]` are two mentions.
    #[default]
    ExactTag,
    /// Same category, for BIO-style tags where `PLACE-B` followed by `PLACE-I`
    /// is one mention.
    Category,
}

/// Key under which mentions are merged across the corpus.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum MergeKey {
    /// Lemma text alone. Entities of different categories sharing a lemma
    /// collapse into the first one seen.
    #[default]
    Lemma,
    /// Category plus lemma text.
    CategoryLemma,
}

impl MergeKey {
    /// Build the lookup key for a lemma of the given category.
    #[must_use]
    pub fn key_for(self, category: Category, lemma: &str) -> String {
        match self {
            Self::Lemma => lemma.to_string(),
            Self::CategoryLemma => format!("{category}\u{1f}{lemma}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lemma_key_ignores_category() {
        let a = MergeKey::Lemma.key_for(Category::Persons, "Paris");
        let b = MergeKey::Lemma.key_for(Category::Locations, "Paris");
        assert_eq!(a, b);
    }

    #[test]
    fn category_lemma_key_separates_categories() {
        let a = MergeKey::CategoryLemma.key_for(Category::Persons, "Paris");
        let b = MergeKey::CategoryLemma.key_for(Category::Locations, "Paris");
        assert_ne!(a, b);
    }

    #[test]
    fn defaults() {
        assert_eq!(MentionBoundary::default(), MentionBoundary::ExactTag);
        assert_eq!(MergeKey::default(), MergeKey::Lemma);
    }
}
