//! Token rows and the column layouts they are cut from.

use serde::{Deserialize, Serialize};

/// Column positions of one supported annotation row shape.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RowLayout {
    pub name: String,
    /// Rows with at least this many fields use the layout.
    pub min_width: usize,
    pub index_column: usize,
    pub surface_column: usize,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lemma_column: Option<usize>,
    pub tag_column: usize,
}

impl RowLayout {
    /// Cut token fields out of a row, or `None` if the row is too narrow.
    #[must_use]
    pub fn extract(&self, fields: &[&str]) -> Option<TokenFields> {
        if fields.len() < self.min_width {
            return None;
        }
        Some(TokenFields {
            index: (*fields.get(self.index_column)?).to_string(),
            surface: (*fields.get(self.surface_column)?).to_string(),
            lemma: self
                .lemma_column
                .and_then(|column| fields.get(column))
                .map(|lemma| (*lemma).to_string()),
            tag: (*fields.get(self.tag_column)?).to_string(),
        })
    }

    /// Pick the widest layout the row satisfies and extract with it.
    #[must_use]
    pub fn select<'a>(layouts: &'a [Self], fields: &[&str]) -> Option<(&'a Self, TokenFields)> {
        layouts
            .iter()
            .filter(|layout| fields.len() >= layout.min_width)
            .max_by_key(|layout| layout.min_width)
            .and_then(|layout| layout.extract(fields).map(|token| (layout, token)))
    }
}

/// The `extended` (eight or more columns) and `compact` (three or more) layouts.
#[must_use]
pub fn default_layouts() -> Vec<RowLayout> {
    vec![
        RowLayout {
            name: "extended".to_string(),
            min_width: 8,
            index_column: 0,
            surface_column: 2,
            lemma_column: Some(4),
            tag_column: 6,
        },
        RowLayout {
            name: "compact".to_string(),
            min_width: 3,
            index_column: 0,
            surface_column: 1,
            lemma_column: None,
            tag_column: 2,
        },
    ]
}

/// The per-token fields of a row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenFields {
    pub index: String,
    pub surface: String,
    pub lemma: Option<String>,
    pub tag: String,
}

/// One row of an annotation file together with the page it came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenRow {
    pub document: String,
    /// Page number as written in the file name, zero padding kept.
    pub page_label: String,
    pub page: i64,
    /// `None` when the row is too short to carry a tag.
    pub token: Option<TokenFields>,
}

impl TokenRow {
    /// Lemma of the token, falling back to the surface form when it is
    /// missing or equal to `unknown_lemma`.
    #[must_use]
    pub fn lemma_or_surface<'a>(token: &'a TokenFields, unknown_lemma: &str) -> &'a str {
        match token.lemma.as_deref() {
            Some(lemma) if lemma != unknown_lemma => lemma,
            _ => &token.surface,
        }
    }

    #[must_use]
    pub fn mention_id(&self, token: &TokenFields) -> String {
        format!("{}_{}_{}", self.document, self.page_label, token.index)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::UNKNOWN_LEMMA;

    #[test]
    fn extended_layout_reads_lemma_and_tag() {
        let row = ["12", "0-6", "Caesar", "NE", "Caesar", "_", "PER", "_"];
        let layouts = default_layouts();
        let (layout, token) = RowLayout::select(&layouts, &row).unwrap_or_else(|| {
            panic!("row should match a layout");
        });
        assert_eq!(layout.name, "extended");
        assert_eq!(token.index, "12");
        assert_eq!(token.surface, "Caesar");
        assert_eq!(token.lemma.as_deref(), Some("Caesar"));
        assert_eq!(token.tag, "PER");
    }

    #[test]
    fn compact_layout_has_no_lemma() {
        let row = ["3", "Rhenus", "PLACE"];
        let layouts = default_layouts();
        let (layout, token) = RowLayout::select(&layouts, &row).unwrap_or_else(|| {
            panic!("row should match a layout");
        });
        assert_eq!(layout.name, "compact");
        assert_eq!(token.surface, "Rhenus");
        assert_eq!(token.lemma, None);
        assert_eq!(token.tag, "PLACE");
    }

    #[test]
    fn narrow_row_matches_nothing() {
        assert!(RowLayout::select(&default_layouts(), &[""]).is_none());
        assert!(RowLayout::select(&default_layouts(), &["1", "x"]).is_none());
    }

    #[test]
    fn unknown_lemma_falls_back_to_surface() {
        let token = TokenFields {
            index: "1".into(),
            surface: "Vercingetorix".into(),
            lemma: Some(UNKNOWN_LEMMA.into()),
            tag: "PER".into(),
        };
        assert_eq!(TokenRow::lemma_or_surface(&token, UNKNOWN_LEMMA), "Vercingetorix");
    }

    #[test]
    fn mention_id_keeps_page_padding() {
        let row = TokenRow {
            document: "bg".into(),
            page_label: "007".into(),
            page: 7,
            token: None,
        };
        let token = TokenFields {
            index: "42".into(),
            surface: "Gallia".into(),
            lemma: None,
            tag: "PLACE".into(),
        };
        assert_eq!(row.mention_id(&token), "bg_007_42");
    }
}
