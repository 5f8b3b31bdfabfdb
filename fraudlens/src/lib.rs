//! Fraudlens
//!
//! Scans free-form narrative text (transaction descriptions pulled out
//! of documents) for candidate fraud indicators: typed entities and
//! the anomalies derived from them. The output is a prioritized list
//! of flagged spans with severity scores for downstream review, not a
//! verdict.
//!
//! # Architecture
//!
//! - **Types**: `Entity`, `Anomaly` and the `Detector` trait live in
//!   the `shared-types` crate
//! - **Extraction**: pattern tables and time parsing live in the
//!   `extractors` crate
//! - **Detection**: this crate pairs temporal and geographic entities
//!   through a timezone model (`timezone`), inspects amounts and
//!   phrasing (`transaction`), and composes detectors into one
//!   pipeline (`engine`)
//!
//! # Example
//!
//! ```rust,ignore
//! use fraudlens::AnomalyDetector;
//!
//! let engine = AnomalyDetector::new();
//! let anomalies = engine.process("多笔可疑转账 $150,000 on 2023-04-01T03:00 in Tokyo");
//! ```

pub mod engine;
pub mod ingest;
pub mod timezone;
pub mod transaction;

// Re-export commonly used types
pub use engine::AnomalyDetector;
pub use timezone::TimezoneAnomalyDetector;
pub use transaction::TransactionAnomalyDetector;

// Re-export the Detector trait from shared-types for convenience
pub use shared_types::Detector;
