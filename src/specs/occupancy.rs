// src/specs/occupancy.rs
//! Reads the current occupancy off the facility page.
//!
//! The page has no stable ids or classes around the number we want; the only
//! reliable marker is that the percentage sits inside a `<strong>` element.
//! Other `<strong>` text (headings, capacity counts, labels) shows up too, so
//! the rule is: the first emphasized fragment that parses as an integer and is
//! at most 100, in document order.

use std::fmt;

use log::{debug, warn};

use crate::config::consts::MAX_OCCUPANCY;
use crate::core::html::{inner_after_open_tag, strip_tags, tag_blocks_ci};
use crate::core::sanitize::normalize_entities;

const EMPHASIS_TAG: &str = "strong";

/// Outcome of scanning a page for an occupancy value.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Reading {
    Found(u8),
    /// Nothing on the page qualified.
    Degraded,
}

impl Reading {
    /// Value written to the store. A degraded reading is recorded as 0.
    pub fn stored_value(self) -> u8 {
        match self {
            Reading::Found(pct) => pct,
            Reading::Degraded => 0,
        }
    }
}

impl fmt::Display for Reading {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Reading::Found(pct) => write!(f, "{pct}%"),
            Reading::Degraded => f.write_str("no reading"),
        }
    }
}

/// Visible text of every emphasized element, in document order.
pub fn emphasized_fragments(doc: &str) -> Vec<String> {
    tag_blocks_ci(doc, EMPHASIS_TAG)
        .into_iter()
        .map(|block| strip_tags(normalize_entities(&inner_after_open_tag(block))))
        .collect()
}

/// Parse one fragment as a percentage. `None` for anything that is not an
/// unsigned integer once `%` signs and surrounding whitespace are removed.
pub fn parse_percent(fragment: &str) -> Option<u32> {
    let cleaned = fragment.replace('%', "");
    cleaned.trim().parse::<u32>().ok()
}

/// First fragment that parses and is at most 100. Values above 100 are
/// skipped, not clamped.
pub fn first_qualifying<I, S>(fragments: I) -> Option<u8>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    fragments.into_iter().find_map(|frag| {
        let frag = frag.as_ref();
        match parse_percent(frag) {
            Some(n) if n <= u32::from(MAX_OCCUPANCY) => Some(n as u8),
            Some(n) => {
                debug!("Skipping {n}: out of range");
                None
            }
            None => {
                debug!("Skipping fragment {frag:?}: not a number");
                None
            }
        }
    })
}

pub fn extract(doc: &str) -> Reading {
    let fragments = emphasized_fragments(doc);
    debug!("Found {} <{EMPHASIS_TAG}> fragments", fragments.len());

    match first_qualifying(&fragments) {
        Some(pct) => Reading::Found(pct),
        None => {
            warn!(
                "No occupancy value among {} emphasized fragments; page layout may have changed",
                fragments.len()
            );
            Reading::Degraded
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn picks_first_value_in_range() {
        let frags = ["150%", "abc", "42%", "7%"];
        assert_eq!(first_qualifying(frags), Some(42));
    }

    #[test]
    fn nothing_qualifies() {
        assert_eq!(first_qualifying(["101%", "n/a", "", "1000"]), None);
        assert_eq!(first_qualifying(Vec::<String>::new()), None);
    }

    #[test]
    fn bounds_are_inclusive() {
        assert_eq!(first_qualifying(["100%"]), Some(100));
        assert_eq!(first_qualifying(["0%"]), Some(0));
    }

    #[test]
    fn decoration_is_stripped() {
        assert_eq!(parse_percent(" 42 % "), Some(42));
        assert_eq!(parse_percent("%%9"), Some(9));
        assert_eq!(parse_percent("-5%"), None);
        assert_eq!(parse_percent("4.5%"), None);
        assert_eq!(parse_percent("99999999999%"), None);
    }

    #[test]
    fn extracts_from_markup_in_document_order() {
        let doc = r#"
            <html><body>
              <h2><strong>Nicholas Recreation Center</strong></h2>
              <p>Max capacity <strong>1500</strong></p>
              <div class="occupancy"><STRONG>  63&#37; </STRONG> full</div>
              <p>Pool <strong>12%</strong></p>
            </body></html>"#;
        assert_eq!(extract(doc), Reading::Found(63));
    }

    #[test]
    fn page_without_a_value_degrades_to_zero() {
        let doc = "<p><strong>Closed</strong> today</p>";
        let reading = extract(doc);
        assert_eq!(reading, Reading::Degraded);
        assert_eq!(reading.stored_value(), 0);
    }

    #[test]
    fn real_zero_is_not_degraded() {
        let reading = extract("<strong>0%</strong>");
        assert_eq!(reading, Reading::Found(0));
        assert_eq!(reading.stored_value(), 0);
    }
}
