//! `RedirectDueDate` text representation.
//!
//! The acquiring API expects second precision with an explicit numeric
//! offset, e.g. `2024-05-01T12:30:00+03:00`. The same text is fed into the
//! request token, so [`Display`](std::fmt::Display), serde and
//! [`FromStr`](std::str::FromStr) all go through [`FORMAT`].

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use time::OffsetDateTime;
use time::format_description::BorrowedFormatItem;
use time::macros::format_description;

/// Wire format of [`DueDate`].
pub const FORMAT: &[BorrowedFormatItem<'static>] = format_description!(
    "[year]-[month]-[day]T[hour]:[minute]:[second][offset_hour sign:mandatory]:[offset_minute]"
);

/// Expiry of a payment link.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct DueDate(pub OffsetDateTime);

impl DueDate {
    pub fn new(at: OffsetDateTime) -> Self {
        Self(at)
    }

    pub fn into_inner(self) -> OffsetDateTime {
        self.0
    }
}

impl From<OffsetDateTime> for DueDate {
    fn from(at: OffsetDateTime) -> Self {
        Self(at)
    }
}

impl fmt::Display for DueDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = self.0.format(FORMAT).map_err(|_| fmt::Error)?;
        f.write_str(&text)
    }
}

impl FromStr for DueDate {
    type Err = time::error::Parse;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        OffsetDateTime::parse(s, FORMAT).map(Self)
    }
}

impl Serialize for DueDate {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let text = self.0.format(FORMAT).map_err(serde::ser::Error::custom)?;
        serializer.serialize_str(&text)
    }
}

impl<'de> Deserialize<'de> for DueDate {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let text = String::deserialize(deserializer)?;
        text.parse().map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::macros::datetime;

    #[test]
    fn test_display_uses_offset_without_fraction() {
        let due = DueDate(datetime!(2024-05-01 12:30:00.123 +03:00));
        assert_eq!(due.to_string(), "2024-05-01T12:30:00+03:00");
    }

    #[test]
    fn test_negative_and_utc_offsets() {
        let west = DueDate(datetime!(2023-12-31 23:59:59 -05:30));
        assert_eq!(west.to_string(), "2023-12-31T23:59:59-05:30");

        let utc = DueDate(datetime!(2023-01-02 03:04:05 UTC));
        assert_eq!(utc.to_string(), "2023-01-02T03:04:05+00:00");
    }

    #[test]
    fn test_parse_matches_display() {
        let due: DueDate = "2024-05-01T12:30:00+03:00".parse().unwrap();
        assert_eq!(due.0, datetime!(2024-05-01 12:30:00 +03:00));
        assert!("2024-05-01 12:30:00".parse::<DueDate>().is_err());
    }

    #[test]
    fn test_json_is_plain_string() {
        let due = DueDate(datetime!(2024-05-01 12:30:00 +03:00));
        let json = serde_json::to_string(&due).unwrap();
        assert_eq!(json, r#""2024-05-01T12:30:00+03:00""#);
        let back: DueDate = serde_json::from_str(&json).unwrap();
        assert_eq!(back, due);
    }
}
