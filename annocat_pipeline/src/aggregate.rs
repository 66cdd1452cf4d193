//! Grouping of consecutive tagged tokens into mentions.
//!
//! One pass per page, no lookback beyond the previous token. A token either
//! extends the open mention, opens a new one, or closes whatever is open.

use annocat_core::{Category, Mention, MentionBoundary, TagClass, TokenRow, classify_tag};
use tracing::debug;

use crate::diagnostics::{Diagnostic, Diagnostics};
use crate::source::PageRows;

/// What consecutive tokens are compared on.
#[derive(Debug, Clone, PartialEq, Eq)]
enum GroupKey {
    Category(Category),
    Tag(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum ScanState {
    Idle,
    /// `mention` indexes the output vector.
    Open { key: GroupKey, mention: usize },
}

pub struct MentionAggregator {
    boundary: MentionBoundary,
    unknown_lemma: String,
}

impl MentionAggregator {
    #[must_use]
    pub fn new(boundary: MentionBoundary, unknown_lemma: impl Into<String>) -> Self {
        Self {
            boundary,
            unknown_lemma: unknown_lemma.into(),
        }
    }

    fn group_key(&self, category: Category, tag: &str) -> GroupKey {
        match self.boundary {
            MentionBoundary::Category => GroupKey::Category(category),
            MentionBoundary::ExactTag => GroupKey::Tag(tag.to_string()),
        }
    }

    /// Mentions of all pages, in page then row order.
    pub fn aggregate(&self, pages: &[PageRows], diagnostics: &mut Diagnostics) -> Vec<Mention> {
        let mut mentions = Vec::new();
        for page in pages {
            let before = mentions.len();
            self.scan_page(page, &mut mentions, diagnostics);
            debug!(
                "{} mentions on {}",
                mentions.len() - before,
                page.path.display()
            );
        }
        mentions
    }

    /// Scan one page, appending its mentions. Nothing stays open across pages.
    pub fn scan_page(
        &self,
        page: &PageRows,
        mentions: &mut Vec<Mention>,
        diagnostics: &mut Diagnostics,
    ) {
        let mut state = ScanState::Idle;
        for (line, row) in page.rows.iter().enumerate() {
            state = self.step(state, row, mentions, |tag| {
                diagnostics.report(Diagnostic::UnknownTag {
                    tag: tag.to_string(),
                    file: page.path.clone(),
                    line: line + 1,
                });
            });
        }
    }

    fn step(
        &self,
        state: ScanState,
        row: &TokenRow,
        mentions: &mut Vec<Mention>,
        mut on_unknown: impl FnMut(&str),
    ) -> ScanState {
        let Some(token) = &row.token else {
            return ScanState::Idle;
        };

        let category = match classify_tag(&token.tag) {
            TagClass::Entity(category) => category,
            TagClass::Sentinel => return ScanState::Idle,
            TagClass::Unknown => {
                on_unknown(&token.tag);
                return ScanState::Idle;
            }
        };

        let key = self.group_key(category, &token.tag);
        let lemma = TokenRow::lemma_or_surface(token, &self.unknown_lemma);

        match state {
            ScanState::Open {
                key: open_key,
                mention,
            } if open_key == key => {
                if let Some(open) = mentions.get_mut(mention) {
                    open.extend(&token.surface, lemma);
                }
                ScanState::Open { key, mention }
            }
            ScanState::Idle | ScanState::Open { .. } => {
                mentions.push(Mention::new(
                    row.mention_id(token),
                    &token.surface,
                    lemma,
                    row.page,
                    category,
                ));
                ScanState::Open {
                    key,
                    mention: mentions.len() - 1,
                }
            }
        }
    }
}
