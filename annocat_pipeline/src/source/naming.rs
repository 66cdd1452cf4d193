use regex::Regex;
use std::path::Path;

use crate::error::{PipelineError, Result};

/// Document and page an annotation file belongs to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageRef {
    pub document: String,
    /// Page as written in the file name.
    pub page_label: String,
    /// Page label as a number, with the configured offset applied.
    pub page: i64,
}

/// Parses annotation file names into [`PageRef`]s.
///
/// Shared by the loader and the enricher so both compute the same page number
/// for the same file name.
#[derive(Debug, Clone)]
pub struct PageNaming {
    pattern: Regex,
    offset: i64,
}

impl PageNaming {
    /// `pattern` must have two capture groups: document id, then page number.
    pub fn new(pattern: &str, offset: i64) -> Result<Self> {
        let pattern = Regex::new(pattern)?;
        let groups = pattern.captures_len() - 1;
        if groups < 2 {
            return Err(PipelineError::PatternGroups(groups));
        }
        Ok(Self { pattern, offset })
    }

    /// Parse the base name of `name`. Returns `None` if it does not match, the
    /// page group is not a number, or the offset page does not fit an `i64`.
    #[must_use]
    pub fn parse(&self, name: &str) -> Option<PageRef> {
        let base = Path::new(name.trim())
            .file_name()
            .and_then(|base| base.to_str())?;
        let caps = self.pattern.captures(base)?;
        let document = caps.get(1)?.as_str();
        let page_label = caps.get(2)?.as_str();
        let page = page_label.parse::<i64>().ok()?.checked_add(self.offset)?;

        Some(PageRef {
            document: document.to_string(),
            page_label: page_label.to_string(),
            page,
        })
    }

    #[must_use]
    pub fn parse_path(&self, path: &Path) -> Option<PageRef> {
        path.to_str().and_then(|name| self.parse(name))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DEFAULT: &str = r"^([^_]+)_page(\d{3})\.tsv$";

    fn naming(offset: i64) -> PageNaming {
        PageNaming::new(DEFAULT, offset).unwrap_or_else(|e| panic!("{e}"))
    }

    #[test]
    fn parses_document_and_page() {
        let page = naming(0).parse("annotations/bg_page012.tsv");
        assert_eq!(
            page,
            Some(PageRef {
                document: "bg".into(),
                page_label: "012".into(),
                page: 12,
            })
        );
    }

    #[test]
    fn applies_offset() {
        let page = naming(-2).parse("bg_page012.tsv").map(|p| p.page);
        assert_eq!(page, Some(10));
    }

    #[test]
    fn out_of_range_offset_leaves_name_unparsed() {
        assert!(naming(i64::MAX).parse("bg_page001.tsv").is_none());
        assert!(naming(i64::MIN).parse("bg_page000.tsv").is_some());
        assert_eq!(
            naming(i64::MAX - 1).parse("bg_page001.tsv").map(|p| p.page),
            Some(i64::MAX)
        );
    }

    #[test]
    fn rejects_other_names() {
        let naming = naming(0);
        assert!(naming.parse("bg_page12.tsv").is_none());
        assert!(naming.parse("bg_page012.csv").is_none());
        assert!(naming.parse("notes.txt").is_none());
        assert!(naming.parse("").is_none());
    }

    #[test]
    fn pattern_needs_two_groups() {
        assert!(matches!(
            PageNaming::new(r"^(\w+)\.tsv$", 0),
            Err(PipelineError::PatternGroups(1))
        ));
        assert!(matches!(
            PageNaming::new(r"^(\w+", 0),
            Err(PipelineError::Pattern(_))
        ));
    }
}
