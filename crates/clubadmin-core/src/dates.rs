//! Conversions between the date-only form value and the backend date-time.
//!
//! Form controls edit `YYYY-MM-DD`; the backend stores local date-times
//! `YYYY-MM-DDTHH:MM:SS` without zone or fractional seconds.
//!
//! ```
//! use clubadmin_core::{to_editable_date, to_storage_date_time};
//!
//! assert_eq!(to_editable_date("2024-05-01T10:15:30"), "2024-05-01");
//! assert_eq!(to_storage_date_time("2024-05-01"), "2024-05-01T00:00:00");
//! ```

use chrono::{NaiveDate, NaiveDateTime, Utc};

const DATE_FORMAT: &str = "%Y-%m-%d";
const MIDNIGHT: &str = "00:00:00";
const TIME_LEN: usize = 8;

/// A stored date in any of the shapes the editor receives.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateValue<'a> {
    /// No value at all
    Empty,
    /// Text as sent by the backend or typed by the user
    Text(&'a str),
    /// A calendar date
    Date(NaiveDate),
    /// A local date-time
    DateTime(NaiveDateTime),
}

impl<'a> From<&'a str> for DateValue<'a> {
    fn from(text: &'a str) -> Self {
        if text.is_empty() {
            DateValue::Empty
        } else {
            DateValue::Text(text)
        }
    }
}

impl<'a> From<Option<&'a str>> for DateValue<'a> {
    fn from(text: Option<&'a str>) -> Self {
        text.map_or(DateValue::Empty, DateValue::from)
    }
}

impl From<NaiveDate> for DateValue<'_> {
    fn from(date: NaiveDate) -> Self {
        DateValue::Date(date)
    }
}

impl From<NaiveDateTime> for DateValue<'_> {
    fn from(date_time: NaiveDateTime) -> Self {
        DateValue::DateTime(date_time)
    }
}

/// Projects a stored date onto the `YYYY-MM-DD` value of a date input.
///
/// An empty value yields today's (UTC) date. Text keeps whatever precedes the
/// first `T`, or else the first space, or else the whole string.
pub fn to_editable_date<'a>(value: impl Into<DateValue<'a>>) -> String {
    to_editable_date_on(value.into(), Utc::now().date_naive())
}

pub(crate) fn to_editable_date_on(value: DateValue<'_>, today: NaiveDate) -> String {
    match value {
        DateValue::Empty => today.format(DATE_FORMAT).to_string(),
        DateValue::Date(date) => date.format(DATE_FORMAT).to_string(),
        DateValue::DateTime(date_time) => date_time.date().format(DATE_FORMAT).to_string(),
        DateValue::Text(text) => {
            let separator = if text.contains('T') { 'T' } else { ' ' };
            text.split(separator).next().unwrap_or(text).to_string()
        }
    }
}

/// Turns a form date (or date-time) into the backend's `YYYY-MM-DDTHH:MM:SS`.
///
/// An empty value stays empty. A time part is cut to its first 8 characters,
/// dropping fractional seconds and zone suffixes; a missing one becomes
/// `00:00:00`.
pub fn to_storage_date_time(value: &str) -> String {
    if value.is_empty() {
        return String::new();
    }

    let separator = if value.contains('T') {
        'T'
    } else if value.contains(' ') {
        ' '
    } else {
        return format!("{value}T{MIDNIGHT}");
    };

    let mut parts = value.split(separator);
    let date = parts.next().unwrap_or_default();
    let time = match parts.next() {
        Some(time) if !time.is_empty() => time,
        _ => MIDNIGHT,
    };
    let time: String = time.chars().take(TIME_LEN).collect();
    format!("{date}T{time}")
}
