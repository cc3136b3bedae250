//! Time token resolution against a configurable format list.

use chrono::NaiveTime;

use crate::error::ParseError;

/// Priority list of time formats used when none are configured.
///
/// For the pattern syntax see [`chrono::format::strftime`].
pub const DEFAULT_TIME_FORMATS: &[&str] = &[
    "%I:%M %p", // 01:45 PM, 09:23 AM, 8:55 am
    "%H:%M",    // 13:45, 09:23, 08:55
    "%H.%M",    // 13.45, 09.23, 08.55 (easier to type with a numpad)
];

/// Parses a time token against each format pattern in order.
///
/// The first successful parse wins, so an ambiguous token resolves
/// according to format list order. Leading and trailing whitespace is
/// ignored; chrono matches AM/PM markers case-insensitively.
pub fn parse_time(token: &str, formats: &[String]) -> Result<NaiveTime, ParseError> {
    let token = token.trim();
    formats
        .iter()
        .find_map(|format| NaiveTime::parse_from_str(token, format).ok())
        .ok_or_else(|| ParseError::InvalidTime {
            token: token.to_string(),
        })
}
