pub mod anomaly;
pub mod detection;
pub mod entity;

pub use anomaly::{Anomaly, AnomalyKind};
pub use detection::{Detector, DocumentError};
pub use entity::{Entity, EntityLabel};
