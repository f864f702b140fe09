//! Tracking code format for repair orders.
//!
//! Every repair order carries a customer-facing code of the form
//! `LPS-YYYYMMDD-NNNN`: the creation date followed by a per-day sequence
//! number, zero-padded to four digits. Codes are sortable, human-readable,
//! and unique (enforced by a unique constraint in storage).
//!
//! The per-day sequence itself is allocated by an atomic counter row in the
//! database (see `lapcare-db`); this module only knows how to format and
//! parse the string form.

use std::sync::LazyLock;

use chrono::NaiveDate;
use regex::Regex;

/// Prefix for all tracking codes.
pub const TRACKING_PREFIX: &str = "LPS";

/// Width of the zero-padded sequence component.
///
/// Sequences past 9999 widen the suffix rather than wrap; the strict parser
/// only accepts the four-digit form.
pub const SEQUENCE_WIDTH: usize = 4;

/// Strict tracking code shape: `LPS-<8 digit date>-<4 digit sequence>`.
static TRACKING_CODE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^LPS-(\d{8})-(\d{4})$").expect("valid tracking code regex"));

/// Components of a parsed tracking code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TrackingCodeParts {
    /// Calendar day the order was created.
    pub date: NaiveDate,
    /// Per-day sequence number (1-based).
    pub sequence: u32,
}

/// Format a tracking code from a date and per-day sequence number.
pub fn format_tracking_code(date: NaiveDate, sequence: u32) -> String {
    format!(
        "{TRACKING_PREFIX}-{}-{sequence:0width$}",
        date.format("%Y%m%d"),
        width = SEQUENCE_WIDTH
    )
}

/// Parse a tracking code back into its date and sequence components.
///
/// Returns `None` when the input does not match the fixed format or the
/// date component is not a real calendar date. Never panics or errors.
pub fn parse_tracking_code(code: &str) -> Option<TrackingCodeParts> {
    let captures = TRACKING_CODE_RE.captures(code)?;
    let date = NaiveDate::parse_from_str(&captures[1], "%Y%m%d").ok()?;
    let sequence: u32 = captures[2].parse().ok()?;
    Some(TrackingCodeParts { date, sequence })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn formats_with_zero_padding() {
        assert_eq!(
            format_tracking_code(day(2024, 6, 13), 1),
            "LPS-20240613-0001"
        );
        assert_eq!(
            format_tracking_code(day(2024, 1, 5), 42),
            "LPS-20240105-0042"
        );
    }

    #[test]
    fn sequence_past_9999_widens_instead_of_wrapping() {
        assert_eq!(
            format_tracking_code(day(2024, 6, 13), 10000),
            "LPS-20240613-10000"
        );
    }

    #[test]
    fn round_trip() {
        let date = day(2025, 12, 31);
        for sequence in [1, 7, 999, 9999] {
            let code = format_tracking_code(date, sequence);
            let parts = parse_tracking_code(&code).expect("generated code must parse");
            assert_eq!(parts.date, date);
            assert_eq!(parts.sequence, sequence);
        }
    }

    #[test]
    fn rejects_malformed_codes() {
        for bad in [
            "",
            "LPS-20240613",
            "LPS-20240613-1",
            "LPS-20240613-00001",
            "LPS-2024613-0001",
            "XYZ-20240613-0001",
            "lps-20240613-0001",
            "LPS-20240613-0001 ",
            " LPS-20240613-0001",
        ] {
            assert!(parse_tracking_code(bad).is_none(), "accepted: {bad:?}");
        }
    }

    #[test]
    fn rejects_impossible_dates() {
        // Matches the regex but is not a calendar date.
        assert!(parse_tracking_code("LPS-20241332-0001").is_none());
        assert!(parse_tracking_code("LPS-20240230-0001").is_none());
    }

    #[test]
    fn lexicographic_order_matches_numeric_order_within_a_day() {
        let a = format_tracking_code(day(2024, 6, 13), 7);
        let b = format_tracking_code(day(2024, 6, 13), 12);
        assert!(a < b);
    }
}
