use serde::{Deserialize, Serialize};

/// Labels for recognized text spans. This is a closed set: detectors
/// match on it exhaustively.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum EntityLabel {
    Date,
    Geo,
    Money,
    Account,
    Bank,
}

/// A recognized span of source text.
///
/// `start`/`end` are character offsets into the chunk the entity was
/// extracted from, with `start < end`. Entities are immutable once
/// created and compare field by field, so identical extraction runs
/// yield equal sequences.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Entity {
    pub label: EntityLabel,
    pub text: String,
    pub start: usize,
    pub end: usize,
}

impl Entity {
    pub fn new(label: EntityLabel, text: impl Into<String>, start: usize, end: usize) -> Self {
        Self {
            label,
            text: text.into(),
            start,
            end,
        }
    }

    /// Whether either endpoint of this entity's span falls inside the
    /// given window (both bounds inclusive).
    pub fn touches(&self, window_start: usize, window_end: usize) -> bool {
        (window_start <= self.start && self.start <= window_end)
            || (window_start <= self.end && self.end <= window_end)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_label_serialization() {
        let json = serde_json::to_string(&EntityLabel::Geo).unwrap();
        assert_eq!(json, "\"GEO\"");

        let back: EntityLabel = serde_json::from_str("\"MONEY\"").unwrap();
        assert_eq!(back, EntityLabel::Money);
    }

    #[test]
    fn test_entity_equality() {
        let a = Entity::new(EntityLabel::Date, "2023-04-01", 10, 20);
        let b = Entity::new(EntityLabel::Date, "2023-04-01", 10, 20);
        assert_eq!(a, b);

        let c = Entity::new(EntityLabel::Date, "2023-04-01", 11, 21);
        assert_ne!(a, c);
    }

    #[test]
    fn test_touches_window() {
        let entity = Entity::new(EntityLabel::Money, "$500", 40, 44);

        assert!(entity.touches(0, 40));
        assert!(entity.touches(44, 100));
        assert!(entity.touches(20, 60));
        assert!(!entity.touches(0, 39));
        assert!(!entity.touches(45, 100));
    }
}
