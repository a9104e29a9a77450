// UTC offset handling for station configuration
//
// The station reports its UTC offset as a signed HHMM token, usually
// followed by extra fields, e.g. "-0200 -02". Decoded timestamps are
// anchored in this offset.

use chrono::FixedOffset;
use regex::Regex;

lazy_static::lazy_static! {
    static ref OFFSET_TOKEN: Regex = Regex::new(r"^([+-]\d{2})(\d{2})$").unwrap();
}

/// Parse the station's UTC-offset token into the normalized `-02:00` form.
/// Only the first whitespace-delimited token of `text` is considered.
/// Returns `None` when the token does not match; callers must treat that as
/// "offset unknown" rather than assuming UTC.
pub fn parse_utc_offset(text: &str) -> Option<String> {
    let token = text.split_whitespace().next()?;
    let caps = OFFSET_TOKEN.captures(token)?;
    Some(format!("{}:{}", &caps[1], &caps[2]))
}

/// Convert a normalized `-02:00` offset string into a `FixedOffset`
pub fn to_fixed_offset(normalized: &str) -> Option<FixedOffset> {
    let sign = normalized.chars().next()?;
    let (hours, minutes) = normalized.get(1..)?.split_once(':')?;
    let hours: i32 = hours.parse().ok()?;
    let minutes: i32 = minutes.parse().ok()?;
    let seconds = hours * 3600 + minutes * 60;
    match sign {
        '+' => FixedOffset::east_opt(seconds),
        '-' => FixedOffset::west_opt(seconds),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_utc_offset() {
        assert_eq!(parse_utc_offset("-0200 -02").as_deref(), Some("-02:00"));
        assert_eq!(parse_utc_offset("-0300 -02").as_deref(), Some("-03:00"));
        assert_eq!(parse_utc_offset("+0530").as_deref(), Some("+05:30"));
    }

    #[test]
    fn test_parse_utc_offset_malformed() {
        assert_eq!(parse_utc_offset(""), None);
        assert_eq!(parse_utc_offset("0200"), None);
        assert_eq!(parse_utc_offset("-02:00"), None);
        assert_eq!(parse_utc_offset("-020"), None);
        assert_eq!(parse_utc_offset("garbage -02"), None);
    }

    #[test]
    fn test_to_fixed_offset() {
        assert_eq!(
            to_fixed_offset("-02:00"),
            FixedOffset::west_opt(2 * 3600)
        );
        assert_eq!(
            to_fixed_offset("+05:30"),
            FixedOffset::east_opt(5 * 3600 + 30 * 60)
        );
        assert_eq!(to_fixed_offset("02:00"), None);
        assert_eq!(to_fixed_offset(""), None);
    }

    #[test]
    fn test_token_to_fixed_offset() {
        let normalized = parse_utc_offset("-0200 -02").unwrap();
        let offset = to_fixed_offset(&normalized).unwrap();
        assert_eq!(offset, FixedOffset::west_opt(2 * 3600).unwrap());
    }
}
