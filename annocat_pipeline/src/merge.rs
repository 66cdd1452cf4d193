//! Corpus-wide merging of mentions that share a lemma.

use annocat_core::{EntityRecord, Mention, MergeKey};
use std::collections::HashMap;

use crate::diagnostics::{Diagnostic, Diagnostics};

/// Merged records in first-seen order, addressable by merge key.
///
/// The first mention seen for a key supplies the record's id and category;
/// feed mentions in a reproducible order to get reproducible output.
#[derive(Debug, Default)]
pub struct LemmaIndex {
    merge_key: MergeKey,
    records: Vec<EntityRecord>,
    positions: HashMap<String, usize>,
}

impl LemmaIndex {
    #[must_use]
    pub fn new(merge_key: MergeKey) -> Self {
        Self {
            merge_key,
            records: Vec::new(),
            positions: HashMap::new(),
        }
    }

    /// Fold one mention in. Returns `true` if it created a new record.
    pub fn insert(&mut self, mention: Mention, diagnostics: &mut Diagnostics) -> bool {
        let key = self.merge_key.key_for(mention.category, &mention.lemma);

        if let Some(&position) = self.positions.get(&key) {
            let record = &mut self.records[position];
            if record.category != mention.category {
                diagnostics.report(Diagnostic::CategoryCollision {
                    key,
                    kept: record.category,
                    merged: mention.category,
                });
            }
            record.merge(mention.into());
            false
        } else {
            self.positions.insert(key, self.records.len());
            self.records.push(mention.into());
            true
        }
    }

    #[must_use]
    pub fn get(&self, key: &str) -> Option<&EntityRecord> {
        self.positions.get(key).map(|&position| &self.records[position])
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, EntityRecord> {
        self.records.iter()
    }

    #[must_use]
    pub fn into_records(self) -> Vec<EntityRecord> {
        self.records
    }
}

/// Merge all mentions, in order, into a [`LemmaIndex`].
pub fn merge_mentions(
    mentions: impl IntoIterator<Item = Mention>,
    merge_key: MergeKey,
    diagnostics: &mut Diagnostics,
) -> LemmaIndex {
    let mut index = LemmaIndex::new(merge_key);
    for mention in mentions {
        index.insert(mention, diagnostics);
    }
    index
}
