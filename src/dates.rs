//! Normalization of date-like query bounds to calendar dates

use crate::error::{AdapterError, Result};
use chrono::{DateTime, NaiveDate, NaiveDateTime, TimeZone};

const DATE_FORMATS: &[&str] = &["%Y-%m-%d", "%Y/%m/%d", "%Y%m%d"];

const DATETIME_FORMATS: &[&str] = &[
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%d %H:%M",
    "%Y/%m/%d %H:%M:%S",
];

/// A value that can be truncated to a calendar date
pub trait DateLike {
    fn to_date(&self) -> Result<NaiveDate>;
}

impl DateLike for NaiveDate {
    fn to_date(&self) -> Result<NaiveDate> {
        Ok(*self)
    }
}

impl DateLike for NaiveDateTime {
    fn to_date(&self) -> Result<NaiveDate> {
        Ok(self.date())
    }
}

impl<Tz: TimeZone> DateLike for DateTime<Tz> {
    fn to_date(&self) -> Result<NaiveDate> {
        Ok(self.date_naive())
    }
}

impl DateLike for str {
    fn to_date(&self) -> Result<NaiveDate> {
        parse_date(self)
    }
}

impl DateLike for String {
    fn to_date(&self) -> Result<NaiveDate> {
        parse_date(self)
    }
}

impl<T: DateLike + ?Sized> DateLike for &T {
    fn to_date(&self) -> Result<NaiveDate> {
        (**self).to_date()
    }
}

/// Parse a textual date or timestamp, dropping any time of day.
///
/// Accepts `2018-04-01`, `2018-4-1`, `2018/4/1`, `20180401`, naive
/// timestamps such as `2018-04-16 15:00:00` and RFC 3339 timestamps (whose
/// local date is kept).
pub fn parse_date(input: &str) -> Result<NaiveDate> {
    let s = input.trim();
    if s.is_empty() {
        return Err(AdapterError::InvalidDate(input.to_string()));
    }

    for fmt in DATE_FORMATS {
        if let Ok(date) = NaiveDate::parse_from_str(s, fmt) {
            return Ok(date);
        }
    }

    for fmt in DATETIME_FORMATS {
        if let Ok(ts) = NaiveDateTime::parse_from_str(s, fmt) {
            return Ok(ts.date());
        }
    }

    DateTime::parse_from_rfc3339(s)
        .map(|ts| ts.date_naive())
        .map_err(|_| AdapterError::InvalidDate(input.to_string()))
}
