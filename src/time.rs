//! Meeting times as printed in the registrar report.
//!
//! Times in the report are written `H:MM` with an optional `a`/`p` suffix.
//! Most afternoon classes omit the suffix, so catalog tokens are read with
//! [`Time::normalize`], which guesses the meridiem. Plain 24-hour strings go
//! through [`str::parse`] instead.

use crate::error::{CatalogError, CatalogResult};
use chrono::{NaiveTime, Timelike};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;
use std::fmt;
use std::num::ParseIntError;
use std::str::FromStr;

pub const MINUTES_PER_DAY: u32 = 1440;

/// Time token as it appears inside a catalog line
pub(crate) const TIME_PATTERN: &str = r"[0-9]{1,2}:[0-9]{2}[aApP]?\b";

static TIME_TOKEN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^([0-9]{1,2}):([0-9]{2})([aApP])?$").expect("time token regex is valid")
});

/// Bare times whose digits read below this (e.g. "7:00" -> 7) are afternoon classes
const AFTERNOON_CUTOFF: u32 = 8;

/// A time of day on a 24 hour clock, without seconds
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct Time {
    hour: u32,
    minute: u32,
}

impl Time {
    pub fn new(hour: u32, minute: u32) -> CatalogResult<Self> {
        if hour >= 24 || minute >= 60 {
            return Err(CatalogError::InvalidFormat(format!("{}:{:02}", hour, minute)));
        }
        Ok(Self { hour, minute })
    }

    /// Read a catalog time token, guessing PM when no marker is given.
    ///
    /// Hours wrap modulo 24 and minutes modulo 60 (no carry), so "9:74"
    /// reads as 9:14. A `p` marker adds twelve hours. Without a marker the
    /// token's digits are concatenated ("7:00" -> 700) and, when that value
    /// divided by 100 is below 8, the time is shifted twelve hours.
    pub fn normalize(token: &str) -> CatalogResult<Self> {
        Self::read(token, true)
    }

    fn read(token: &str, guess_meridiem: bool) -> CatalogResult<Self> {
        let token = token.trim();
        let caps = TIME_TOKEN
            .captures(token)
            .ok_or_else(|| CatalogError::InvalidFormat(token.to_string()))?;

        let hour_str = &caps[1];
        let minute_str = &caps[2];
        let invalid = |_: ParseIntError| CatalogError::InvalidFormat(token.to_string());
        let raw_hour: u32 = hour_str.parse().map_err(invalid)?;
        let raw_minute: u32 = minute_str.parse().map_err(invalid)?;

        let pm = match caps.get(3) {
            Some(marker) => marker.as_str().eq_ignore_ascii_case("p"),
            None if guess_meridiem => {
                let digits: u32 = format!("{}{}", hour_str, minute_str).parse().map_err(invalid)?;
                digits / 100 < AFTERNOON_CUTOFF
            }
            None => false,
        };

        let offset = if pm { 12 } else { 0 };
        Ok(Self { hour: (raw_hour % 24 + offset) % 24, minute: raw_minute % 60 })
    }

    pub fn hour(&self) -> u32 {
        self.hour
    }

    pub fn minute(&self) -> u32 {
        self.minute
    }

    pub fn minutes_since_midnight(&self) -> u32 {
        self.hour * 60 + self.minute
    }

    /// Minutes from `start` to `self`, assuming midnight is crossed when
    /// `start` is later on the clock.
    pub fn minutes_since(&self, start: Time) -> u32 {
        let end = self.minutes_since_midnight();
        let begin = start.minutes_since_midnight();
        if end >= begin { end - begin } else { MINUTES_PER_DAY - begin + end }
    }

    pub fn to_naive_time(&self) -> Option<NaiveTime> {
        NaiveTime::from_hms_opt(self.hour, self.minute, 0)
    }
}

impl From<NaiveTime> for Time {
    fn from(t: NaiveTime) -> Self {
        Self { hour: t.hour(), minute: t.minute() }
    }
}

/// Strict reading: `p` still adds twelve hours but bare times are taken as
/// written.
impl FromStr for Time {
    type Err = CatalogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::read(s, false)
    }
}

impl fmt::Display for Time {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(&format!("{}:{:02}", self.hour, self.minute))
    }
}

/// A start and end time. An end earlier than the start means the interval
/// runs past midnight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct TimeInterval {
    start: Time,
    end: Time,
}

impl TimeInterval {
    pub fn new(start: Time, end: Time) -> Self {
        Self { start, end }
    }

    /// Build an interval from two 24-hour time strings
    pub fn parse(start: &str, end: &str) -> CatalogResult<Self> {
        Ok(Self { start: start.parse()?, end: end.parse()? })
    }

    pub fn start(&self) -> Time {
        self.start
    }

    pub fn end(&self) -> Time {
        self.end
    }

    pub fn wraps_midnight(&self) -> bool {
        self.end < self.start
    }

    /// Length in minutes
    pub fn duration(&self) -> u32 {
        self.end.minutes_since(self.start)
    }

    pub fn contains(&self, time: Time) -> bool {
        if self.wraps_midnight() {
            self.start <= time || self.end >= time
        } else {
            self.start <= time && self.end >= time
        }
    }
}

impl fmt::Display for TimeInterval {
    // Pad hours so rows of intervals line up in a column
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:>5}-{:>5}", self.start, self.end)
    }
}
