// src/sample.rs
use chrono::{NaiveDateTime, Timelike};

/// Stored timestamp layout: sortable as text, microsecond precision.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S%.6f";

/// Layouts accepted when reading history back. The first one is what
/// `collect` writes; the rest cover ISO-8601 text from older tooling.
const ACCEPTED_FORMATS: &[&str] = &[
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M",
    "%Y-%m-%dT%H:%M",
];

/// One occupancy observation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Sample {
    pub timestamp: NaiveDateTime,
    pub occupancy: u8,
}

impl Sample {
    pub fn new(timestamp: NaiveDateTime, occupancy: u8) -> Self {
        Self { timestamp, occupancy }
    }
}

pub fn format_timestamp(ts: NaiveDateTime) -> String {
    ts.format(TIMESTAMP_FORMAT).to_string()
}

pub fn parse_timestamp(text: &str) -> Option<NaiveDateTime> {
    let text = text.trim();
    ACCEPTED_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(text, fmt).ok())
}

/// Drop sub-microsecond precision so the value survives a trip through
/// `TIMESTAMP_FORMAT` unchanged.
pub fn truncate_to_micros(ts: NaiveDateTime) -> NaiveDateTime {
    let nanos = ts.nanosecond();
    ts.with_nanosecond(nanos - nanos % 1_000).unwrap_or(ts)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn at(h: u32, m: u32, s: u32, micro: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2021, 3, 26)
            .unwrap()
            .and_hms_micro_opt(h, m, s, micro)
            .unwrap()
    }

    #[test]
    fn written_format_reads_back_identically() {
        let ts = at(14, 5, 9, 123_456);
        let text = format_timestamp(ts);
        assert_eq!(text, "2021-03-26 14:05:09.123456");
        assert_eq!(parse_timestamp(&text), Some(ts));
    }

    #[test]
    fn accepts_iso_variants() {
        assert_eq!(parse_timestamp("2021-03-26T14:05:09"), Some(at(14, 5, 9, 0)));
        assert_eq!(parse_timestamp("2021-03-26 14:05:09"), Some(at(14, 5, 9, 0)));
        assert_eq!(parse_timestamp("2021-03-26 14:05"), Some(at(14, 5, 0, 0)));
        assert_eq!(parse_timestamp(" 2021-03-26 14:05:09.5 "), Some(at(14, 5, 9, 500_000)));
    }

    #[test]
    fn rejects_garbage() {
        assert_eq!(parse_timestamp("yesterday"), None);
        assert_eq!(parse_timestamp("2021-13-01 00:00:00"), None);
        assert_eq!(parse_timestamp(""), None);
    }

    #[test]
    fn truncation_drops_nanoseconds_only() {
        let ts = NaiveDate::from_ymd_opt(2021, 3, 26)
            .unwrap()
            .and_hms_nano_opt(8, 0, 0, 123_456_789)
            .unwrap();
        assert_eq!(truncate_to_micros(ts), at(8, 0, 0, 123_456));
    }
}
