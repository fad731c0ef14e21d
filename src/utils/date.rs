//! Timestamps for content frontmatter.
//!
//! Frontmatter dates arrive either as TOML date/datetime literals or as
//! strings. Both end up as a [`DateTimeUtc`], which orders chronologically
//! and knows the handful of output formats the generators need.

use anyhow::{Result, bail};
use chrono::{DateTime, Datelike, Timelike, Utc};
use serde::{Deserialize, Deserializer, de};
use std::fmt;

/// UTC datetime without timezone complexity.
///
/// Field order matters: the derived `Ord` compares year first, then month,
/// and so on down to the second, which is chronological order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct DateTimeUtc {
    pub year: u16,
    pub month: u8,
    pub day: u8,
    pub hour: u8,
    pub minute: u8,
    pub second: u8,
}

impl DateTimeUtc {
    pub const fn new(year: u16, month: u8, day: u8, hour: u8, minute: u8, second: u8) -> Self {
        Self {
            year,
            month,
            day,
            hour,
            minute,
            second,
        }
    }

    pub const fn from_ymd(year: u16, month: u8, day: u8) -> Self {
        Self::new(year, month, day, 0, 0, 0)
    }

    /// Parse from one of:
    ///
    /// - `YYYY-MM-DD`
    /// - `YYYY-MM-DDTHH:MM:SS` (a space may replace the `T`)
    /// - either of the above followed by `Z`, `+00:00` or `.fff` fractional seconds
    /// - an RFC 3339 timestamp with any other offset, shifted to UTC
    pub fn parse(s: &str) -> Option<Self> {
        let s = s.trim();
        let bytes = s.as_bytes();

        if bytes.len() < 10 {
            return None;
        }

        let year = parse_u16(&bytes[0..4])?;
        if bytes[4] != b'-' || bytes[7] != b'-' {
            return None;
        }
        let month = parse_u8(&bytes[5..7])?;
        let day = parse_u8(&bytes[8..10])?;

        if bytes.len() == 10 {
            let dt = Self::from_ymd(year, month, day);
            dt.validate().ok()?;
            return Some(dt);
        }

        if bytes.len() < 19 || !matches!(bytes[10], b'T' | b' ') {
            return None;
        }
        if bytes[13] != b':' || bytes[16] != b':' {
            return None;
        }
        let (hour, minute, second) = (
            parse_u8(&bytes[11..13])?,
            parse_u8(&bytes[14..16])?,
            parse_u8(&bytes[17..19])?,
        );
        if !is_utc_suffix(&bytes[19..]) {
            return Self::parse_with_offset(s);
        }

        let dt = Self::new(year, month, day, hour, minute, second);
        dt.validate().ok()?;
        Some(dt)
    }

    /// `2024-01-15T10:00:00+02:00` → `2024-01-15T08:00:00Z`
    fn parse_with_offset(s: &str) -> Option<Self> {
        let s = s.replacen(' ', "T", 1);
        let utc = DateTime::parse_from_rfc3339(&s).ok()?.with_timezone(&Utc);
        Some(Self::new(
            u16::try_from(utc.year()).ok()?,
            utc.month() as u8,
            utc.day() as u8,
            utc.hour() as u8,
            utc.minute() as u8,
            utc.second() as u8,
        ))
    }

    pub fn validate(&self) -> Result<()> {
        let Self {
            year,
            month,
            day,
            hour,
            minute,
            second,
        } = *self;

        if !(1..=12).contains(&month) {
            bail!("month is invalid: {month}");
        }

        let max_days = Self::days_in_month(year, month);
        if day == 0 || day > max_days {
            bail!("day is invalid: {day}");
        }
        if hour > 23 {
            bail!("hour is invalid: {hour}");
        }
        if minute > 59 {
            bail!("minute is invalid: {minute}");
        }
        if second > 59 {
            bail!("second is invalid: {second}");
        }

        Ok(())
    }

    #[inline]
    fn is_leap_year(year: u16) -> bool {
        year.is_multiple_of(4) && (!year.is_multiple_of(100) || year.is_multiple_of(400))
    }

    #[inline]
    fn days_in_month(year: u16, month: u8) -> u8 {
        match month {
            1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
            4 | 6 | 9 | 11 => 30,
            2 if Self::is_leap_year(year) => 29,
            2 => 28,
            _ => 0,
        }
    }

    /// `Mon, 15 Jan 2024 10:30:45 GMT`, as RSS `pubDate` expects.
    pub fn to_rfc2822(self) -> String {
        const WEEKDAYS: [&str; 7] = ["Sat", "Sun", "Mon", "Tue", "Wed", "Thu", "Fri"];
        const MONTHS: [&str; 12] = [
            "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
        ];

        format!(
            "{}, {:02} {} {:04} {:02}:{:02}:{:02} GMT",
            WEEKDAYS[self.weekday_index()],
            self.day,
            MONTHS[(self.month - 1) as usize],
            self.year,
            self.hour,
            self.minute,
            self.second
        )
    }

    /// `2024-01-15T10:30:45Z`
    pub fn to_iso8601(self) -> String {
        format!(
            "{:04}-{:02}-{:02}T{:02}:{:02}:{:02}Z",
            self.year, self.month, self.day, self.hour, self.minute, self.second
        )
    }

    /// `01/15/2024`, the en-US numeric date shown next to posts.
    pub fn to_display(self) -> String {
        format!("{:02}/{:02}/{:04}", self.month, self.day, self.year)
    }

    /// Zeller's congruence, 0 = Saturday.
    #[inline]
    fn weekday_index(&self) -> usize {
        let (y, m) = if self.month < 3 {
            (self.year as i32 - 1, self.month as i32 + 12)
        } else {
            (self.year as i32, self.month as i32)
        };
        let d = self.day as i32;
        ((d + (13 * (m + 1)) / 5 + y + y / 4 - y / 100 + y / 400) % 7) as usize
    }
}

impl fmt::Display for DateTimeUtc {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_iso8601())
    }
}

impl<'de> Deserialize<'de> for DateTimeUtc {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        // `toml::Value` understands TOML's native datetime literals, so
        // `date = 2024-01-15` and `date = "2024-01-15"` both land here.
        let raw = match toml::Value::deserialize(deserializer)? {
            toml::Value::String(s) => s,
            toml::Value::Datetime(dt) => dt.to_string(),
            other => {
                return Err(de::Error::invalid_type(
                    de::Unexpected::Other(other.type_str()),
                    &"a date string or TOML datetime",
                ));
            }
        };
        Self::parse(&raw)
            .ok_or_else(|| de::Error::custom(format!("invalid date `{raw}`")))
    }
}

/// Accept an empty suffix, `Z`, `+00:00`, and optional fractional seconds before either.
fn is_utc_suffix(rest: &[u8]) -> bool {
    let rest = match rest.first() {
        Some(b'.') => {
            let digits = rest[1..].iter().take_while(|b| b.is_ascii_digit()).count();
            if digits == 0 {
                return false;
            }
            &rest[1 + digits..]
        }
        _ => rest,
    };
    matches!(rest, b"" | b"Z" | b"z" | b"+00:00" | b"-00:00")
}

/// Parse 2-digit ASCII number
#[inline]
fn parse_u8(bytes: &[u8]) -> Option<u8> {
    if bytes.len() != 2 {
        return None;
    }
    let d1 = bytes[0].wrapping_sub(b'0');
    let d2 = bytes[1].wrapping_sub(b'0');
    if d1 > 9 || d2 > 9 {
        return None;
    }
    Some(d1 * 10 + d2)
}

/// Parse 4-digit ASCII number
#[inline]
fn parse_u16(bytes: &[u8]) -> Option<u16> {
    if bytes.len() != 4 {
        return None;
    }
    let mut result = 0u16;
    for &b in bytes {
        let d = b.wrapping_sub(b'0');
        if d > 9 {
            return None;
        }
        result = result * 10 + d as u16;
    }
    Some(result)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Deserialize)]
    struct Holder {
        date: DateTimeUtc,
    }

    #[test]
    fn test_parse_date_only() {
        assert_eq!(
            DateTimeUtc::parse("2024-06-15"),
            Some(DateTimeUtc::from_ymd(2024, 6, 15))
        );
    }

    #[test]
    fn test_parse_datetime_variants() {
        let expected = Some(DateTimeUtc::new(2024, 6, 15, 14, 30, 45));
        assert_eq!(DateTimeUtc::parse("2024-06-15T14:30:45Z"), expected);
        assert_eq!(DateTimeUtc::parse("2024-06-15T14:30:45"), expected);
        assert_eq!(DateTimeUtc::parse("2024-06-15 14:30:45"), expected);
        assert_eq!(DateTimeUtc::parse("2024-06-15T14:30:45.123Z"), expected);
        assert_eq!(DateTimeUtc::parse("2024-06-15T14:30:45+00:00"), expected);
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert_eq!(DateTimeUtc::parse(""), None);
        assert_eq!(DateTimeUtc::parse("2024/06/15"), None);
        assert_eq!(DateTimeUtc::parse("2024-13-01"), None);
        assert_eq!(DateTimeUtc::parse("2023-02-29"), None);
        assert_eq!(DateTimeUtc::parse("2024-06-15T25:00:00Z"), None);
        assert_eq!(DateTimeUtc::parse("2024-06-15T14:30:45+2"), None);
        assert_eq!(DateTimeUtc::parse("2024-06-15T14:30:45."), None);
    }

    #[test]
    fn test_parse_shifts_offsets_to_utc() {
        assert_eq!(
            DateTimeUtc::parse("2024-01-15T10:00:00+02:00"),
            Some(DateTimeUtc::new(2024, 1, 15, 8, 0, 0))
        );
        // crosses midnight backwards and forwards
        assert_eq!(
            DateTimeUtc::parse("2024-01-01T01:30:00+02:00"),
            Some(DateTimeUtc::new(2023, 12, 31, 23, 30, 0))
        );
        assert_eq!(
            DateTimeUtc::parse("2024-02-28 22:00:00.5-05:30"),
            Some(DateTimeUtc::new(2024, 2, 29, 3, 30, 0))
        );
    }

    #[test]
    fn test_validate_leap_year() {
        assert!(DateTimeUtc::new(2024, 2, 29, 12, 0, 0).validate().is_ok());
        assert!(DateTimeUtc::new(2000, 2, 29, 12, 0, 0).validate().is_ok());
        assert!(DateTimeUtc::new(2023, 2, 29, 12, 0, 0).validate().is_err());
        assert!(DateTimeUtc::new(1900, 2, 29, 12, 0, 0).validate().is_err());
    }

    #[test]
    fn test_validate_out_of_range_time() {
        assert!(DateTimeUtc::new(2024, 6, 15, 24, 0, 0).validate().is_err());
        assert!(DateTimeUtc::new(2024, 6, 15, 12, 60, 0).validate().is_err());
        assert!(DateTimeUtc::new(2024, 6, 15, 12, 30, 60).validate().is_err());
    }

    #[test]
    fn test_ordering_is_chronological() {
        let a = DateTimeUtc::new(2023, 12, 31, 23, 59, 59);
        let b = DateTimeUtc::from_ymd(2024, 1, 1);
        let c = DateTimeUtc::new(2024, 1, 1, 0, 0, 1);
        assert!(a < b);
        assert!(b < c);
        assert_eq!(b.max(a), b);
    }

    #[test]
    fn test_to_rfc2822() {
        // 2024-01-15 was a Monday
        let dt = DateTimeUtc::new(2024, 1, 15, 10, 30, 45);
        assert_eq!(dt.to_rfc2822(), "Mon, 15 Jan 2024 10:30:45 GMT");

        // 2024-06-01 was a Saturday
        let dt = DateTimeUtc::from_ymd(2024, 6, 1);
        assert_eq!(dt.to_rfc2822(), "Sat, 01 Jun 2024 00:00:00 GMT");
    }

    #[test]
    fn test_to_iso8601_and_display() {
        let dt = DateTimeUtc::new(2024, 3, 7, 8, 5, 9);
        assert_eq!(dt.to_iso8601(), "2024-03-07T08:05:09Z");
        assert_eq!(dt.to_string(), "2024-03-07T08:05:09Z");
        assert_eq!(dt.to_display(), "03/07/2024");
    }

    #[test]
    fn test_deserialize_toml_literal_and_string() {
        let h: Holder = toml::from_str("date = 2024-01-15").unwrap();
        assert_eq!(h.date, DateTimeUtc::from_ymd(2024, 1, 15));

        let h: Holder = toml::from_str("date = 2024-01-15T10:00:00Z").unwrap();
        assert_eq!(h.date, DateTimeUtc::new(2024, 1, 15, 10, 0, 0));

        let h: Holder = toml::from_str("date = 2024-01-15T10:00:00+02:00").unwrap();
        assert_eq!(h.date, DateTimeUtc::new(2024, 1, 15, 8, 0, 0));

        let h: Holder = toml::from_str(r#"date = "2024-01-15""#).unwrap();
        assert_eq!(h.date, DateTimeUtc::from_ymd(2024, 1, 15));
    }

    #[test]
    fn test_deserialize_rejects_bad_values() {
        assert!(toml::from_str::<Holder>(r#"date = "yesterday""#).is_err());
        assert!(toml::from_str::<Holder>("date = 42").is_err());
    }
}
