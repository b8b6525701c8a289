//! Date-range filters for case listings and reports.
//!
//! Clients send the bounds as query parameters (`fecha_inicio`, `fecha_fin`)
//! in one of two formats:
//!
//! Format | Example | Start bound | End bound
//! ---|---|---|---
//! Date | `2024-03-01` | `2024-03-01 00:00:00` | `2024-03-01 23:59:59`
//! Date and time | `2024-03-01T10:30:00` | as given | as given
//!
//! A missing bound leaves that side of the range open.
use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use thiserror::Error;

/// Format used to exchange timestamps with the store.
pub const STORE_DATETIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

const DATE_FORMAT: &str = "%Y-%m-%d";
const DATETIME_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";

#[derive(Error, Debug, PartialEq, Eq, Clone)]
#[error("invalid date: \"{value}\", expected YYYY-MM-DD or YYYY-MM-DDTHH:MM:SS")]
pub struct ParsePeriodError {
    pub value: String,
}

/// A closed or half-open range of registration dates.
#[derive(Debug, Default, PartialEq, Eq, Clone, Copy)]
pub struct Period {
    pub from: Option<NaiveDateTime>,
    pub to: Option<NaiveDateTime>,
}

impl Period {
    /// Builds a period from the raw query parameters.
    ///
    /// # Errors
    ///
    /// Will return a `ParsePeriodError` if any of the supplied bounds is not
    /// a valid date.
    pub fn parse(from: Option<&str>, to: Option<&str>) -> Result<Self, ParsePeriodError> {
        Ok(Self {
            from: from.map(parse_start).transpose()?,
            to: to.map(parse_end).transpose()?,
        })
    }

    #[must_use]
    pub fn from_as_store_value(&self) -> Option<String> {
        self.from.map(|from| from.format(STORE_DATETIME_FORMAT).to_string())
    }

    #[must_use]
    pub fn to_as_store_value(&self) -> Option<String> {
        self.to.map(|to| to.format(STORE_DATETIME_FORMAT).to_string())
    }
}

fn parse_start(value: &str) -> Result<NaiveDateTime, ParsePeriodError> {
    parse_bound(value, NaiveTime::MIN)
}

fn parse_end(value: &str) -> Result<NaiveDateTime, ParsePeriodError> {
    parse_bound(value, NaiveTime::from_hms_opt(23, 59, 59).unwrap_or(NaiveTime::MIN))
}

fn parse_bound(value: &str, time_for_plain_dates: NaiveTime) -> Result<NaiveDateTime, ParsePeriodError> {
    let value = value.trim();

    if let Ok(datetime) = NaiveDateTime::parse_from_str(value, DATETIME_FORMAT) {
        return Ok(datetime);
    }

    NaiveDate::parse_from_str(value, DATE_FORMAT)
        .map(|date| date.and_time(time_for_plain_dates))
        .map_err(|_| ParsePeriodError { value: value.to_string() })
}

/// Parses a timestamp as the store returns it (`YYYY-MM-DD HH:MM:SS`, with
/// optional fractional seconds).
///
/// # Errors
///
/// Will return `chrono::ParseError` if the value is not a store timestamp.
pub fn parse_store_datetime(value: &str) -> Result<NaiveDateTime, chrono::ParseError> {
    NaiveDateTime::parse_from_str(value, "%Y-%m-%d %H:%M:%S%.f")
}
