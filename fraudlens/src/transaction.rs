use regex::Regex;
use shared_types::{Anomaly, AnomalyKind, Detector, Entity, EntityLabel};

/// Policy severity for threshold breaches.
pub const LARGE_TRANSACTION_SEVERITY: f64 = 0.7;

/// Policy severity for suspicious phrasing with entity evidence.
pub const SUSPICIOUS_PATTERN_SEVERITY: f64 = 0.6;

/// Amounts strictly above this are flagged.
pub const DEFAULT_AMOUNT_THRESHOLD: f64 = 100_000.0;

/// Evidence window around a phrase match, in offset units on each side.
const CONTEXT_WINDOW: usize = 50;

/// Suspicious lexical phrasing, Chinese forms plus their English
/// equivalents.
fn create_suspicious_patterns() -> Vec<Regex> {
    [
        r"多笔.*?转账",
        r"(?i)multiple\s+(?:\w+\s+)*?transfers",
        r"可疑.*?交易",
        r"(?i)suspicious\s+(?:\w+\s+)*?transactions?",
        r"未经授权",
        r"(?i)unauthori[sz]ed",
        r"异常.*?操作",
        r"(?i)abnormal\s+(?:\w+\s+)*?operations?",
    ]
    .into_iter()
    .map(|pattern| Regex::new(pattern).unwrap())
    .collect()
}

/// Flags unusually large amounts and suspicious phrasing.
///
/// Two independent scans over the same chunk, results concatenated:
/// MONEY entities checked against the threshold, then the raw text
/// checked against the phrase patterns with contextually overlapping
/// entities attached as evidence.
pub struct TransactionAnomalyDetector {
    threshold_amount: f64,
    suspicious_patterns: Vec<Regex>,
}

impl TransactionAnomalyDetector {
    pub fn new() -> Self {
        Self::with_threshold(DEFAULT_AMOUNT_THRESHOLD)
    }

    pub fn with_threshold(threshold_amount: f64) -> Self {
        Self {
            threshold_amount,
            suspicious_patterns: create_suspicious_patterns(),
        }
    }

    /// Strip currency symbols, codes and separators, keeping digits
    /// and the decimal point. Malformed amounts are expected noise and
    /// yield `None` without a log.
    fn parse_amount(text: &str) -> Option<f64> {
        let cleaned: String = text
            .chars()
            .filter(|c| c.is_ascii_digit() || *c == '.')
            .collect();
        cleaned.parse().ok()
    }

    fn scan_large_amounts(&self, entities: &[Entity]) -> Vec<Anomaly> {
        entities
            .iter()
            .filter(|e| e.label == EntityLabel::Money)
            .filter_map(|entity| {
                let value = Self::parse_amount(&entity.text)?;
                if value <= self.threshold_amount {
                    return None;
                }
                Some(Anomaly::new(
                    AnomalyKind::LargeTransaction,
                    format!("Large transaction detected: {}", entity.text),
                    LARGE_TRANSACTION_SEVERITY,
                    vec![entity.clone()],
                ))
            })
            .collect()
    }

    fn scan_suspicious_phrases(&self, entities: &[Entity], text: &str) -> Vec<Anomaly> {
        let mut anomalies = Vec::new();

        for pattern in &self.suspicious_patterns {
            for m in pattern.find_iter(text) {
                let window_start = m.start().saturating_sub(CONTEXT_WINDOW);
                let window_end = (m.end() + CONTEXT_WINDOW).min(text.len());

                let related: Vec<Entity> = entities
                    .iter()
                    .filter(|e| e.touches(window_start, window_end))
                    .cloned()
                    .collect();

                // A bare lexical hit with no corroborating entity is
                // not worth surfacing.
                if related.is_empty() {
                    continue;
                }

                anomalies.push(Anomaly::new(
                    AnomalyKind::SuspiciousPattern,
                    format!("Suspicious transaction pattern: {}", m.as_str()),
                    SUSPICIOUS_PATTERN_SEVERITY,
                    related,
                ));
            }
        }

        anomalies
    }
}

impl Detector for TransactionAnomalyDetector {
    fn detect(&self, entities: &[Entity], text: &str) -> Vec<Anomaly> {
        let mut anomalies = self.scan_large_amounts(entities);
        anomalies.extend(self.scan_suspicious_phrases(entities, text));
        anomalies
    }

    fn name(&self) -> &'static str {
        "transaction"
    }
}

impl Default for TransactionAnomalyDetector {
    fn default() -> Self {
        Self::new()
    }
}
