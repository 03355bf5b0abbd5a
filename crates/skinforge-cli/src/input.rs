//! Loading and writing render documents.

use anyhow::{Context, Result};
use skinforge_spec::SkinDocument;
use std::path::Path;

/// A parsed document with the provenance of its source file.
#[derive(Debug)]
pub struct LoadResult {
    pub doc: SkinDocument,
    /// BLAKE3 hash of the source file content (hex string).
    pub source_hash: String,
}

/// Read and parse a JSON document.
pub fn load_document(path: &Path) -> Result<LoadResult> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read document: {}", path.display()))?;
    let source_hash = blake3::hash(text.as_bytes()).to_hex().to_string();
    let doc = SkinDocument::from_json(&text)
        .with_context(|| format!("Failed to parse document: {}", path.display()))?;
    tracing::debug!(path = %path.display(), hash = &source_hash[..16], "document loaded");
    Ok(LoadResult { doc, source_hash })
}

/// Write a document as pretty JSON, creating parent directories.
pub fn write_document(doc: &SkinDocument, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
    }
    let json = doc.to_json_pretty()?;
    std::fs::write(path, json)
        .with_context(|| format!("Failed to write document: {}", path.display()))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round_trips_through_disk() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("doc.json");
        let doc = SkinDocument {
            resolution: 64,
            ..Default::default()
        };
        write_document(&doc, &path).unwrap();
        let loaded = load_document(&path).unwrap();
        assert_eq!(loaded.doc, doc);
        assert_eq!(loaded.source_hash.len(), 64);
    }

    #[test]
    fn unknown_root_fields_are_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("doc.json");
        std::fs::write(&path, r#"{ "resolution": 8, "colour": "red" }"#).unwrap();
        let err = load_document(&path).unwrap_err();
        assert!(format!("{:#}", err).contains("Failed to parse document"));
    }

    #[test]
    fn missing_file_names_the_path() {
        let err = load_document(Path::new("/nonexistent/doc.json")).unwrap_err();
        assert!(err.to_string().contains("/nonexistent/doc.json"));
    }
}
