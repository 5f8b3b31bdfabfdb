use crate::{TimezoneAnomalyDetector, TransactionAnomalyDetector};
use extractors::EntityExtractor;
use shared_types::{Anomaly, Detector};

/// The scanning pipeline for one chunk of text: extract entities once,
/// then run every configured detector over them in order and
/// concatenate the findings.
///
/// No ranking, merging or dedup happens here; severity policy lives in
/// the detectors. The engine holds only immutable configuration, so a
/// single instance can serve concurrent calls, and each call returns
/// freshly allocated sequences with no state retained.
pub struct AnomalyDetector {
    extractor: EntityExtractor,
    detectors: Vec<Box<dyn Detector + Send + Sync>>,
}

impl AnomalyDetector {
    /// Default pipeline: timezone anomalies first, then transaction
    /// anomalies.
    pub fn new() -> Self {
        Self::with_detectors(
            EntityExtractor::new(),
            vec![
                Box::new(TimezoneAnomalyDetector::new()),
                Box::new(TransactionAnomalyDetector::new()),
            ],
        )
    }

    /// Pipeline with caller-chosen extraction table and detector
    /// composition. The orchestration layer decides which detectors
    /// run and in what order.
    pub fn with_detectors(
        extractor: EntityExtractor,
        detectors: Vec<Box<dyn Detector + Send + Sync>>,
    ) -> Self {
        Self {
            extractor,
            detectors,
        }
    }

    /// Analyze one chunk of text.
    pub fn process(&self, chunk: &str) -> Vec<Anomaly> {
        let entities = self.extractor.extract(chunk);
        tracing::debug!(count = entities.len(), "entities extracted");

        let mut anomalies = Vec::new();
        for detector in &self.detectors {
            let found = detector.detect(&entities, chunk);
            tracing::debug!(detector = detector.name(), count = found.len(), "detector pass");
            anomalies.extend(found);
        }
        anomalies
    }
}

impl Default for AnomalyDetector {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared_types::AnomalyKind;

    #[test]
    fn test_process_end_to_end() {
        let engine = AnomalyDetector::new();
        let text = "可疑跨境交易: wired $150,000 from New York on 2023-04-01T03:00";

        let anomalies = engine.process(text);

        let kinds: Vec<AnomalyKind> = anomalies.iter().map(|a| a.kind).collect();
        assert!(kinds.contains(&AnomalyKind::TimeAnomaly));
        assert!(kinds.contains(&AnomalyKind::LargeTransaction));
        assert!(kinds.contains(&AnomalyKind::SuspiciousPattern));
    }

    #[test]
    fn test_timezone_findings_come_first() {
        let engine = AnomalyDetector::new();
        let text = "unauthorized transfer of $250,000 in Tokyo at 2023-04-01T03:00";

        let anomalies = engine.process(text);
        assert!(anomalies.len() >= 2);
        assert_eq!(anomalies[0].kind, AnomalyKind::TimeAnomaly);
        assert!(anomalies[1..]
            .iter()
            .all(|a| a.kind != AnomalyKind::TimeAnomaly));
    }

    #[test]
    fn test_clean_text_yields_nothing() {
        let engine = AnomalyDetector::new();

        assert!(engine.process("").is_empty());
        assert!(engine
            .process("Regular payment of $200 settled 2023-04-01 10:00 in London")
            .is_empty());
    }

    #[test]
    fn test_minimal_timezone_only_pipeline() {
        let engine = AnomalyDetector::with_detectors(
            EntityExtractor::new(),
            vec![Box::new(TimezoneAnomalyDetector::new())],
        );
        let text = "unauthorized transfer of $250,000 in Tokyo at 2023-04-01T03:00";

        let anomalies = engine.process(text);
        assert!(!anomalies.is_empty());
        assert!(anomalies.iter().all(|a| a.kind == AnomalyKind::TimeAnomaly));
    }

    #[test]
    fn test_process_is_stateless_across_calls() {
        let engine = AnomalyDetector::new();
        let text = "多笔可疑转账 $500,000 于 2023-04-01T03:00 在 Tokyo";

        let first = engine.process(text);
        let second = engine.process(text);

        assert_eq!(first.len(), second.len());
        for (a, b) in first.iter().zip(&second) {
            assert_eq!(a.kind, b.kind);
            assert_eq!(a.description, b.description);
            assert_eq!(a.related_entities, b.related_entities);
        }
    }
}
