//! Catalog JSON output and input.

use annocat_core::Catalog;
use serde::Serialize;
use serde_json::ser::PrettyFormatter;
use std::io::Write;
use std::path::Path;

use crate::error::{PipelineError, Result};

/// Write `catalog` as indented JSON. Non-ASCII text is written unescaped.
pub fn write_catalog(catalog: &Catalog, indent: usize, mut writer: impl Write) -> Result<()> {
    let indent = " ".repeat(indent);
    let formatter = PrettyFormatter::with_indent(indent.as_bytes());
    let mut serializer = serde_json::Serializer::with_formatter(&mut writer, formatter);
    catalog.serialize(&mut serializer)?;
    writeln!(writer).map_err(|e| PipelineError::io("<output>", e))?;
    Ok(())
}

/// Write `catalog` to `path`, replacing the file.
pub fn write_catalog_file(catalog: &Catalog, indent: usize, path: &Path) -> Result<()> {
    let file = std::fs::File::create(path).map_err(|e| PipelineError::io(path, e))?;
    let mut writer = std::io::BufWriter::new(file);
    write_catalog(catalog, indent, &mut writer)?;
    writer.flush().map_err(|e| PipelineError::io(path, e))
}

/// Read a catalog previously written by [`write_catalog`].
pub fn read_catalog(path: &Path) -> Result<Catalog> {
    let content = std::fs::read_to_string(path).map_err(|e| PipelineError::io(path, e))?;
    Ok(serde_json::from_str(&content)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use annocat_core::{Category, Mention};

    fn render(catalog: &Catalog, indent: usize) -> String {
        let mut out = Vec::new();
        write_catalog(catalog, indent, &mut out).unwrap_or_else(|e| panic!("{e}"));
        String::from_utf8(out).unwrap_or_else(|e| panic!("{e}"))
    }

    #[test]
    fn uses_requested_indent() {
        let text = render(&Catalog::default(), 4);
        assert!(text.starts_with("{\n    \"objects\": {\n        \"items\": []"));
        assert!(text.ends_with("}\n"));
    }

    #[test]
    fn keeps_non_ascii_text() {
        let mut catalog = Catalog::default();
        catalog.push(Mention::new("d_001_1".into(), "Köln", "Köln", 1, Category::Locations).into());
        assert!(render(&catalog, 2).contains("\"Köln\""));
    }

    #[test]
    fn file_round_trip() {
        let dir = tempfile::tempdir().unwrap_or_else(|e| panic!("{e}"));
        let path = dir.path().join("catalog.json");
        let mut catalog = Catalog::default();
        catalog.push(Mention::new("d_001_1".into(), "Caesar", "Caesar", 1, Category::Persons).into());

        write_catalog_file(&catalog, 4, &path).unwrap_or_else(|e| panic!("{e}"));
        let read = read_catalog(&path).unwrap_or_else(|e| panic!("{e}"));
        assert_eq!(read, catalog);
    }
}
