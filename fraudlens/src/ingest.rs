use shared_types::DocumentError;
use std::path::Path;

/// Formats the ingestion collaborator can turn into plain text.
///
/// Binary document formats (PDF and friends) are deliberately not
/// handled here; callers check `supports` up front instead of finding
/// out through a failure deep inside a scan.
const SUPPORTED_EXTENSIONS: [&str; 4] = ["txt", "md", "csv", "log"];

/// The capability signal: which file extensions `extract_text` accepts.
pub fn supported_extensions() -> &'static [&'static str] {
    &SUPPORTED_EXTENSIONS
}

/// Whether `extract_text` can handle this path.
pub fn supports(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| {
            let ext = ext.to_ascii_lowercase();
            SUPPORTED_EXTENSIONS.contains(&ext.as_str())
        })
        .unwrap_or(false)
}

/// Read a document into the plain-text chunk the scanning engine
/// expects. Failures here are the caller's to handle; the engine
/// never sees a path or an ingestion error.
pub fn extract_text(path: &Path) -> Result<String, DocumentError> {
    if !supports(path) {
        return Err(DocumentError::UnsupportedFormat(
            path.display().to_string(),
        ));
    }

    let text = std::fs::read_to_string(path)?;
    if text.trim().is_empty() {
        tracing::warn!(path = %path.display(), "document decoded to empty text");
        return Err(DocumentError::EmptyDocument(path.display().to_string()));
    }

    Ok(text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn temp_file(name: &str, contents: &str) -> PathBuf {
        let path = std::env::temp_dir().join(format!("fraudlens-ingest-{name}"));
        std::fs::write(&path, contents).unwrap();
        path
    }

    #[test]
    fn test_capability_signal() {
        assert!(supports(Path::new("report.txt")));
        assert!(supports(Path::new("report.TXT")));
        assert!(supports(Path::new("notes.md")));
        assert!(!supports(Path::new("statement.pdf")));
        assert!(!supports(Path::new("archive")));
    }

    #[test]
    fn test_unsupported_format_rejected() {
        let err = extract_text(Path::new("statement.pdf")).unwrap_err();
        assert!(matches!(err, DocumentError::UnsupportedFormat(_)));
    }

    #[test]
    fn test_extracts_plain_text() {
        let path = temp_file("ok.txt", "wired $150,000 in Tokyo\n");
        let text = extract_text(&path).unwrap();
        assert!(text.contains("$150,000"));
        std::fs::remove_file(path).ok();
    }

    #[test]
    fn test_empty_document_rejected() {
        let path = temp_file("empty.txt", "   \n\n");
        let err = extract_text(&path).unwrap_err();
        assert!(matches!(err, DocumentError::EmptyDocument(_)));
        std::fs::remove_file(path).ok();
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let err = extract_text(Path::new("/nonexistent/fraudlens.txt")).unwrap_err();
        assert!(matches!(err, DocumentError::Io(_)));
    }
}
