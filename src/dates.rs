//! Date validation and conversion.

use chrono::{DateTime, NaiveDate};

/// True iff `input` is shaped `YYYY-MM-DD`: four digits, hyphen, two digits,
/// hyphen, two digits. Purely syntactic — `"2024-02-30"` passes even though
/// no such day exists.
pub fn is_valid_date(input: &str) -> bool {
	let b = input.as_bytes();
	b.len() == 10
		&& b[..4].iter().all(u8::is_ascii_digit)
		&& b[4] == b'-'
		&& b[5..7].iter().all(u8::is_ascii_digit)
		&& b[7] == b'-'
		&& b[8..].iter().all(u8::is_ascii_digit)
}

/// Epoch milliseconds for `input` parsed as an ISO calendar date (taken at
/// UTC midnight) or an RFC 3339 datetime.
///
/// Returns `None` when `input` parses as neither; callers check rather than
/// handle an error. Only ISO-style input is supported — it is the only
/// format the rest of this crate produces.
pub fn date_to_millis(input: &str) -> Option<i64> {
	let input = input.trim();
	if let Ok(date) = NaiveDate::parse_from_str(input, "%Y-%m-%d") {
		return Some(date.and_hms_opt(0, 0, 0)?.and_utc().timestamp_millis());
	}
	DateTime::parse_from_rfc3339(input).ok().map(|dt| dt.timestamp_millis())
}
