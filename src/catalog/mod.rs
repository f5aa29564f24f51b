//! Object graph produced by a catalog parse.
//!
//! Department -> Course -> Lecture -> Discussion. Everything is built once by
//! the parser and only read afterwards.

use crate::time::{Time, TimeInterval};
use chrono::Weekday;
use serde::Serialize;
use std::collections::BTreeMap;
use std::fmt;

mod filter;

pub use filter::*;

/// Keys of the auxiliary info recorded for courses and lectures
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum InfoKey {
    Location,
    Capacity,
    ExamCode,
    GradeType,
    Units,
    SameAs,
    Restriction,
    EnrollmentId,
    ClassType,
}

impl InfoKey {
    pub fn as_str(&self) -> &'static str {
        match self {
            InfoKey::Location => "location",
            InfoKey::Capacity => "capacity",
            InfoKey::ExamCode => "exam_code",
            InfoKey::GradeType => "grade_type",
            InfoKey::Units => "units",
            InfoKey::SameAs => "same_as",
            InfoKey::Restriction => "restriction",
            InfoKey::EnrollmentId => "enrollment_id",
            InfoKey::ClassType => "class_type",
        }
    }
}

impl fmt::Display for InfoKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

pub type Info = BTreeMap<InfoKey, String>;

/// Map a report weekday letter (MTWRF) to a weekday
pub fn weekday_from_letter(letter: char) -> Option<Weekday> {
    match letter {
        'M' => Some(Weekday::Mon),
        'T' => Some(Weekday::Tue),
        'W' => Some(Weekday::Wed),
        'R' => Some(Weekday::Thu),
        'F' => Some(Weekday::Fri),
        _ => None,
    }
}

pub fn weekday_letter(day: Weekday) -> char {
    match day {
        Weekday::Mon => 'M',
        Weekday::Tue => 'T',
        Weekday::Wed => 'W',
        Weekday::Thu => 'R',
        Weekday::Fri => 'F',
        Weekday::Sat => 'S',
        Weekday::Sun => 'U',
    }
}

pub fn format_days(days: &[Weekday]) -> String {
    days.iter().copied().map(weekday_letter).collect()
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Department {
    pub name: String,
    pub courses: Vec<Course>,
}

impl fmt::Display for Department {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

/// A course made of one or more lectures
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Course {
    /// Title, e.g. "SOFTWARE CONST LAB"
    pub name: String,
    /// Catalog number plus suffix, e.g. "35L"
    pub number: String,
    pub lectures: Vec<Lecture>,
    pub info: Info,
}

impl Course {
    /// Duration of a lecture, taken from the first one.
    ///
    /// All lectures of a course are assumed to last equally long.
    pub fn duration(&self) -> Option<u32> {
        self.lectures.first().map(|lec| lec.time_interval.duration())
    }

    pub fn is_lab(&self) -> bool {
        self.number.to_lowercase().contains('l')
    }

    pub fn is_upper_division(&self) -> bool {
        catalog_number_value(&self.number).is_some_and(|n| n >= 100)
    }

    /// True if some lecture starts at or after `time`
    pub fn occurs_after(&self, time: Time) -> bool {
        self.lectures.iter().any(|lec| lec.time_interval.start() >= time)
    }

    /// True if some lecture ends at or before `time`
    pub fn occurs_before(&self, time: Time) -> bool {
        self.lectures.iter().any(|lec| lec.time_interval.end() <= time)
    }

    pub fn starts_at(&self, time: Time) -> bool {
        self.lectures.iter().any(|lec| lec.time_interval.start() == time)
    }

    pub fn ends_at(&self, time: Time) -> bool {
        self.lectures.iter().any(|lec| lec.time_interval.end() == time)
    }

    pub fn info(&self, key: InfoKey) -> Option<&str> {
        self.info.get(&key).map(String::as_str)
    }
}

impl fmt::Display for Course {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.number, self.name)
    }
}

/// Numeric part of a catalog number: digits up to the first period.
/// "CM121" -> 121, "35L" -> 35.
fn catalog_number_value(number: &str) -> Option<u32> {
    let digits: String = number
        .chars()
        .take_while(|&c| c != '.')
        .filter(char::is_ascii_digit)
        .collect();
    digits.parse().ok()
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Lecture {
    /// Section number, e.g. "2" or "2A"
    pub section: String,
    pub days: Vec<Weekday>,
    pub instructor: String,
    pub time_interval: TimeInterval,
    pub info: Info,
    pub discussions: Vec<Discussion>,
}

impl Lecture {
    pub fn info(&self, key: InfoKey) -> Option<&str> {
        self.info.get(&key).map(String::as_str)
    }
}

impl fmt::Display for Lecture {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "LEC {} [{:<3}] {} | {} | EnCp: {}",
            self.section,
            format_days(&self.days),
            self.time_interval,
            self.instructor,
            self.info(InfoKey::Capacity).unwrap_or_default()
        )
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Discussion {
    /// Lecture-local name, e.g. "1D"
    pub name: String,
    pub day: Weekday,
    pub ta_name: String,
    pub time_interval: TimeInterval,
}

impl fmt::Display for Discussion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "DIS {:<2} [{}] {} | {}",
            self.name,
            weekday_letter(self.day),
            self.time_interval,
            self.ta_name
        )
    }
}
