use chrono::{DateTime, Datelike, NaiveDate, NaiveDateTime, TimeZone, Utc};
use once_cell::sync::Lazy;
use regex::Regex;

/// A timestamp recovered from free-form text.
///
/// Inputs that carry a time-of-day but no zone stay *floating*: the
/// wall-clock reading is kept as written and only gets a zone when a
/// detector pairs it with a location. Date-only inputs assert a
/// calendar day, not a moment, so they are anchored to noon UTC.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParsedTime {
    pub naive: NaiveDateTime,
    pub utc_anchored: bool,
}

impl ParsedTime {
    fn floating(naive: NaiveDateTime) -> Self {
        Self {
            naive,
            utc_anchored: false,
        }
    }

    fn noon_utc(date: NaiveDate) -> Option<Self> {
        Some(Self {
            naive: date.and_hms_opt(12, 0, 0)?,
            utc_anchored: true,
        })
    }

    /// Express this time in `tz`.
    ///
    /// UTC-anchored values are converted; floating values are read as
    /// wall-clock time already local to `tz`. Returns `None` when a
    /// floating value names a wall-clock instant that does not exist
    /// in `tz` (a DST gap).
    pub fn in_zone<Z: TimeZone>(&self, tz: &Z) -> Option<DateTime<Z>> {
        if self.utc_anchored {
            Some(tz.from_utc_datetime(&self.naive))
        } else {
            tz.from_local_datetime(&self.naive).earliest()
        }
    }
}

/// Date-time shapes, tried in order.
const DATETIME_FORMATS: [&str; 4] = [
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M",
    "%Y/%m/%d %H:%M",
    "%d-%b-%Y %H:%M",
];

/// Date-only shapes, tried after the date-time shapes.
const DATE_FORMATS: [&str; 6] = [
    "%Y-%m-%d",
    "%Y/%m/%d",
    "%Y年%m月%d日",
    "%d/%m/%Y",
    "%m/%d/%Y",
    "%Y.%m.%d",
];

static YEAR_MONTH_SLASH: Lazy<Regex> = Lazy::new(|| Regex::new(r"^(\d{4})/(\d{1,2})$").unwrap());
static YEAR_MONTH_CN: Lazy<Regex> = Lazy::new(|| Regex::new(r"^(\d{4})年(\d{1,2})月$").unwrap());
static FALLBACK_SLASH: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(\d{4})/(\d{1,2})/(\d{1,2})$").unwrap());
static FALLBACK_MONTH_DAY: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(\d{1,2})月(\d{1,2})日$").unwrap());
static FALLBACK_CN_FULL: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(\d{4})年(\d{1,2})月(\d{1,2})日$").unwrap());

/// Parse a heterogeneous date/time string.
///
/// Tries the fixed format lists first, then a handful of targeted
/// patterns for shapes `strptime`-style formats cannot express
/// (month-day without a year, year-month without a day). A `None`
/// return is the failure signal; the input is logged for
/// observability and the candidate is simply dropped by callers.
pub fn parse_time(time_str: &str) -> Option<ParsedTime> {
    let time_str = normalize_slash_date(time_str.trim());

    for fmt in DATETIME_FORMATS {
        if let Ok(naive) = NaiveDateTime::parse_from_str(&time_str, fmt) {
            return Some(ParsedTime::floating(naive));
        }
    }

    for fmt in DATE_FORMATS {
        if let Ok(date) = NaiveDate::parse_from_str(&time_str, fmt) {
            return ParsedTime::noon_utc(date);
        }
    }

    if let Some(parsed) = parse_year_month(&time_str).or_else(|| parse_fallback(&time_str)) {
        return Some(parsed);
    }

    tracing::warn!(input = %time_str, "time string did not match any supported format");
    None
}

/// Zero-pad `YYYY/M/D` to `YYYY/MM/DD` so the slash formats accept
/// single-digit months and days, with or without a trailing time.
fn normalize_slash_date(time_str: &str) -> String {
    let (date_part, rest) = match time_str.split_once(' ') {
        Some((date, rest)) => (date, Some(rest)),
        None => (time_str, None),
    };

    let parts: Vec<&str> = date_part.split('/').collect();
    let numeric = parts.len() == 3
        && parts[0].len() == 4
        && parts
            .iter()
            .all(|p| !p.is_empty() && p.chars().all(|c| c.is_ascii_digit()));
    if !numeric {
        return time_str.to_string();
    }

    let padded = format!("{}/{:0>2}/{:0>2}", parts[0], parts[1], parts[2]);
    match rest {
        Some(rest) => format!("{padded} {rest}"),
        None => padded,
    }
}

/// `YYYY/M` and `YYYY年M月`: only a month was asserted, anchor to noon
/// UTC on the first of that month.
fn parse_year_month(time_str: &str) -> Option<ParsedTime> {
    let caps = YEAR_MONTH_SLASH
        .captures(time_str)
        .or_else(|| YEAR_MONTH_CN.captures(time_str))?;
    let year: i32 = caps[1].parse().ok()?;
    let month: u32 = caps[2].parse().ok()?;
    ParsedTime::noon_utc(NaiveDate::from_ymd_opt(year, month, 1)?)
}

/// Targeted patterns for date shapes the fixed lists miss.
fn parse_fallback(time_str: &str) -> Option<ParsedTime> {
    if let Some(caps) = FALLBACK_SLASH
        .captures(time_str)
        .or_else(|| FALLBACK_CN_FULL.captures(time_str))
    {
        let year: i32 = caps[1].parse().ok()?;
        let month: u32 = caps[2].parse().ok()?;
        let day: u32 = caps[3].parse().ok()?;
        return ParsedTime::noon_utc(NaiveDate::from_ymd_opt(year, month, day)?);
    }

    if let Some(caps) = FALLBACK_MONTH_DAY.captures(time_str) {
        let month: u32 = caps[1].parse().ok()?;
        let day: u32 = caps[2].parse().ok()?;
        let year = Utc::now().year();
        return ParsedTime::noon_utc(NaiveDate::from_ymd_opt(year, month, day)?);
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{FixedOffset, Timelike};

    fn naive(s: &str) -> NaiveDateTime {
        NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M:%S").unwrap()
    }

    #[test]
    fn test_parse_iso_datetime_is_floating() {
        let parsed = parse_time("2023-04-01T03:00").unwrap();
        assert_eq!(parsed.naive, naive("2023-04-01 03:00:00"));
        assert!(!parsed.utc_anchored);
    }

    #[test]
    fn test_parse_space_and_slash_datetimes() {
        assert_eq!(
            parse_time("2023-04-01 10:00").unwrap().naive,
            naive("2023-04-01 10:00:00")
        );
        assert_eq!(
            parse_time("2023/04/01 10:00").unwrap().naive,
            naive("2023-04-01 10:00:00")
        );
        assert_eq!(
            parse_time("15-Mar-2023 14:30").unwrap().naive,
            naive("2023-03-15 14:30:00")
        );
    }

    #[test]
    fn test_date_only_anchors_to_noon_utc() {
        for input in ["2023-04-01", "2023/04/01", "2023年4月1日", "2023.4.1"] {
            let parsed = parse_time(input).unwrap();
            assert_eq!(parsed.naive, naive("2023-04-01 12:00:00"), "input {input}");
            assert!(parsed.utc_anchored, "input {input}");
        }
    }

    #[test]
    fn test_unpadded_slash_date() {
        let parsed = parse_time("2023/4/1").unwrap();
        assert_eq!(parsed.naive, naive("2023-04-01 12:00:00"));
        assert!(parsed.utc_anchored);
    }

    #[test]
    fn test_ambiguous_slash_prefers_day_month() {
        let parsed = parse_time("03/04/2023").unwrap();
        assert_eq!(parsed.naive.month(), 4);
        assert_eq!(parsed.naive.day(), 3);
    }

    #[test]
    fn test_year_month_forms() {
        for input in ["2023/04", "2023年4月"] {
            let parsed = parse_time(input).unwrap();
            assert_eq!(parsed.naive, naive("2023-04-01 12:00:00"), "input {input}");
            assert!(parsed.utc_anchored);
        }
    }

    #[test]
    fn test_month_day_assumes_current_year() {
        let parsed = parse_time("3月4日").unwrap();
        assert_eq!(parsed.naive.year(), Utc::now().year());
        assert_eq!(parsed.naive.month(), 3);
        assert_eq!(parsed.naive.day(), 4);
        assert_eq!(parsed.naive.hour(), 12);
    }

    #[test]
    fn test_unparseable_inputs() {
        assert!(parse_time("not a date").is_none());
        assert!(parse_time("").is_none());
        assert!(parse_time("2023-13-45").is_none());
        assert!(parse_time("99月99日").is_none());
    }

    #[test]
    fn test_in_zone_floating_keeps_wall_clock() {
        let parsed = parse_time("2023-04-01T03:00").unwrap();
        let tokyo_like = FixedOffset::east_opt(9 * 3600).unwrap();
        let local = parsed.in_zone(&tokyo_like).unwrap();
        assert_eq!(local.hour(), 3);
    }

    #[test]
    fn test_in_zone_anchored_shifts() {
        let parsed = parse_time("2023-04-01").unwrap();
        let tokyo_like = FixedOffset::east_opt(9 * 3600).unwrap();
        let local = parsed.in_zone(&tokyo_like).unwrap();
        assert_eq!(local.hour(), 21);
    }
}
