use crate::{Anomaly, Entity};
use thiserror::Error;

/// Core trait that all anomaly detectors implement.
///
/// Detectors receive the extracted entity sequence together with the
/// original text, because some of them re-scan the raw text for their
/// own pattern needs. A detector never fails the whole chunk: bad
/// sub-results (unparseable time, malformed amount, unknown timezone)
/// only drop that one candidate, so the return is a plain vector.
pub trait Detector {
    /// Detect anomalies in one chunk of text.
    fn detect(&self, entities: &[Entity], text: &str) -> Vec<Anomaly>;

    /// Short identifier for logs.
    fn name(&self) -> &'static str;
}

/// Errors from the document ingestion collaborator.
///
/// These are handled by the caller before the scanning engine is ever
/// invoked; the engine itself only receives plain text.
#[derive(Debug, Error)]
pub enum DocumentError {
    #[error("Unsupported document format: {0}")]
    UnsupportedFormat(String),

    #[error("Document has no extractable text: {0}")]
    EmptyDocument(String),

    #[error("Failed to read document: {0}")]
    Io(#[from] std::io::Error),
}
