use chrono::{NaiveDate, NaiveTime};

use super::error::ReportError;

const FEED_DATE_FORMAT: &str = "%Y-%m-%d";
const DAYLIGHT_TIME_FORMAT: &str = "%H:%M";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateFormat {
    /// `January 5, 2023`
    Full,
    /// `Jan 5, 2023`
    Abbreviated,
}

impl DateFormat {
    fn pattern(self) -> &'static str {
        match self {
            Self::Full => "%B %-d, %Y",
            Self::Abbreviated => "%b %-d, %Y",
        }
    }
}

pub fn parse_fixed_date(value: &str) -> Result<NaiveDate, ReportError> {
    NaiveDate::parse_from_str(value.trim(), FEED_DATE_FORMAT)
        .map_err(|_| ReportError::parse("terrestrial_date", value))
}

pub fn parse_daylight_time(value: &str) -> Result<NaiveTime, ReportError> {
    NaiveTime::parse_from_str(value.trim(), DAYLIGHT_TIME_FORMAT)
        .map_err(|_| ReportError::parse("daylight time", value))
}

/// Integer readings arrive as strings such as `"-80"`; the feed uses `"--"`
/// when a sensor reported nothing.
pub fn parse_reading(field: &'static str, value: &str) -> Result<i32, ReportError> {
    value
        .trim()
        .parse::<i32>()
        .map_err(|_| ReportError::parse(field, value))
}

#[must_use]
pub fn format_date(value: &str, format: DateFormat) -> String {
    match parse_fixed_date(value) {
        Ok(date) => date.format(format.pattern()).to_string(),
        Err(err) => {
            log::debug!("{err}; showing it unformatted");
            value.to_string()
        }
    }
}
