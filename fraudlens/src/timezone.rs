use chrono::Timelike;
use chrono_tz::Tz;
use extractors::time_parser::{parse_time, ParsedTime};
use shared_types::{Anomaly, AnomalyKind, Detector, Entity, EntityLabel};
use std::collections::HashMap;
use std::ops::RangeInclusive;

/// Policy severity for off-hours findings.
pub const TIME_ANOMALY_SEVERITY: f64 = 0.85;

/// Local hours considered non-anomalous, both ends inclusive.
const BUSINESS_HOURS: RangeInclusive<u32> = 9..=17;

/// Built-in location -> IANA zone mapping for major financial centers.
pub fn default_timezone_map() -> HashMap<String, String> {
    [
        ("New York", "America/New_York"),
        ("London", "Europe/London"),
        ("Tokyo", "Asia/Tokyo"),
        ("Singapore", "Asia/Singapore"),
        ("Beijing", "Asia/Shanghai"),
        ("Shanghai", "Asia/Shanghai"),
        ("Hong Kong", "Asia/Hong_Kong"),
    ]
    .into_iter()
    .map(|(location, zone)| (location.to_string(), zone.to_string()))
    .collect()
}

/// Flags transactions timestamped outside the counterparty's local
/// business hours.
///
/// Every parseable DATE entity is paired with every GEO entity whose
/// location the mapping knows (the full cross product, not just
/// adjacent pairs). A location absent from the mapping is an
/// unsupported geography and is skipped silently; a mapping entry
/// whose zone identifier does not resolve is a configuration problem
/// and is logged before the pair is skipped. Neither aborts the scan.
pub struct TimezoneAnomalyDetector {
    timezone_map: HashMap<String, String>,
}

impl TimezoneAnomalyDetector {
    /// Detector with the built-in financial-center mapping.
    pub fn new() -> Self {
        Self {
            timezone_map: default_timezone_map(),
        }
    }

    /// Detector with a caller-supplied location -> zone mapping.
    pub fn with_mapping(timezone_map: HashMap<String, String>) -> Self {
        Self { timezone_map }
    }

    fn check_pair(
        &self,
        date_entity: &Entity,
        parsed: ParsedTime,
        geo_entity: &Entity,
    ) -> Option<Anomaly> {
        let zone_id = self.timezone_map.get(&geo_entity.text)?;

        let tz: Tz = match zone_id.parse() {
            Ok(tz) => tz,
            Err(_) => {
                tracing::error!(
                    location = %geo_entity.text,
                    zone = %zone_id,
                    "unknown timezone identifier in mapping"
                );
                return None;
            }
        };

        let local = parsed.in_zone(&tz)?;
        if BUSINESS_HOURS.contains(&local.hour()) {
            return None;
        }

        let description = format!(
            "Off-hours transaction: {} @ {} (local time {})",
            date_entity.text,
            geo_entity.text,
            local.format("%Y-%m-%d %H:%M"),
        );
        Some(Anomaly::new(
            AnomalyKind::TimeAnomaly,
            description,
            TIME_ANOMALY_SEVERITY,
            vec![date_entity.clone(), geo_entity.clone()],
        ))
    }
}

impl Detector for TimezoneAnomalyDetector {
    fn detect(&self, entities: &[Entity], _text: &str) -> Vec<Anomaly> {
        let dated: Vec<(&Entity, ParsedTime)> = entities
            .iter()
            .filter(|e| e.label == EntityLabel::Date)
            .filter_map(|e| parse_time(&e.text).map(|parsed| (e, parsed)))
            .collect();
        let locations: Vec<&Entity> = entities
            .iter()
            .filter(|e| e.label == EntityLabel::Geo)
            .collect();

        let mut anomalies = Vec::new();
        for (date_entity, parsed) in &dated {
            for geo_entity in &locations {
                if let Some(anomaly) = self.check_pair(date_entity, *parsed, geo_entity) {
                    anomalies.push(anomaly);
                }
            }
        }
        anomalies
    }

    fn name(&self) -> &'static str {
        "timezone"
    }
}

impl Default for TimezoneAnomalyDetector {
    fn default() -> Self {
        Self::new()
    }
}
