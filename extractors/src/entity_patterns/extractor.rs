use crate::entity_patterns::{create_entity_patterns, title_case, EntityPattern};
use shared_types::Entity;

/// Pattern-based entity extraction over one chunk of text.
///
/// The extractor is a single uniform loop over a declarative pattern
/// table. It holds no mutable state after construction, so one
/// instance can serve concurrent scans.
pub struct EntityExtractor {
    patterns: Vec<EntityPattern>,
}

impl EntityExtractor {
    /// Extractor with the built-in pattern table.
    pub fn new() -> Self {
        Self {
            patterns: create_entity_patterns(),
        }
    }

    /// Extractor with a deployment-configured table.
    pub fn with_patterns(patterns: Vec<EntityPattern>) -> Self {
        Self { patterns }
    }

    /// Find every match of every pattern in `text`.
    ///
    /// Overlapping and duplicate matches across patterns or labels are
    /// kept as separate entities; no merge step. The result is sorted
    /// by span, so entities of one label appear in left-to-right
    /// source order.
    pub fn extract(&self, text: &str) -> Vec<Entity> {
        let mut entities = Vec::new();

        for pattern in &self.patterns {
            for m in pattern.regex.find_iter(text) {
                let matched = if pattern.title_case {
                    title_case(m.as_str())
                } else {
                    m.as_str().to_string()
                };
                entities.push(Entity::new(pattern.label, matched, m.start(), m.end()));
            }
        }

        entities.sort_by_key(|e| (e.start, e.end));
        entities
    }
}

impl Default for EntityExtractor {
    fn default() -> Self {
        Self::new()
    }
}
