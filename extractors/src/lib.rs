//! Extractors Crate
//!
//! This crate turns free-form narrative text into typed, located
//! entities and canonical timestamps. It is the leaf layer of the
//! scanning pipeline: detectors consume its output, it consumes
//! nothing but a string.
//!
//! # Architecture
//!
//! - **Types**: `Entity`, `EntityLabel` and friends live in the
//!   `shared-types` crate
//! - **Implementations**: pattern tables and the time parser are
//!   implemented here
//!
//! # Example
//!
//! ```rust,ignore
//! use extractors::EntityExtractor;
//!
//! let extractor = EntityExtractor::new();
//! let entities = extractor.extract("Transfer on 2023-04-01T03:00 in Tokyo");
//! ```

pub mod entity_patterns;
pub mod time_parser;

// Re-export commonly used types
pub use entity_patterns::{EntityExtractor, EntityPattern};
pub use time_parser::{parse_time, ParsedTime};
