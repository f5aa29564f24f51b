//! Line grammars for course records.
//!
//! A course starts on a header line that carries the catalog number and
//! title followed by the first lecture. Later lectures of the same course
//! repeat only the lecture part. Both grammars are built from the same
//! lecture pattern so they cannot drift apart.

use crate::catalog::weekday_from_letter;
use crate::error::SkipReason;
use crate::time::{Time, TimeInterval, TIME_PATTERN};
use chrono::Weekday;
use once_cell::sync::Lazy;
use regex::{Captures, Regex};

/// Catalog number and title, up to the last Y/N flag the rest of the line allows
const TITLE_PATTERN: &str = r"(?P<number>\w+)\s+(?P<name>.+)\s+[YN]\s+";

static HEADER: Lazy<Regex> = Lazy::new(|| grammar(true));
static CONTINUATION: Lazy<Regex> = Lazy::new(|| grammar(false));
static NOTICE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)^\s*(?P<kind>SAME\s+AS|RESTRICT)\s*:").expect("notice regex is valid")
});

fn lecture_pattern() -> String {
    [
        r"(?:[YN])?\s*",
        r"(?:(?P<dashes>-+)|(?P<lec_id>[0-9]{3}-[0-9]{3}-[0-9]{3}))\s+",
        r"(?P<class_type>\w+)\s+",
        r"(?P<sec_num>[0-9][a-zA-Z]?)\s+",
        r"(?P<days>\w+)\s+",
        r"(?P<time_start>",
        TIME_PATTERN,
        r")\s*-\s*(?P<time_end>",
        TIME_PATTERN,
        r")\s+",
        // Location must end in a room number; otherwise the text is a name
        r"(?:(?P<loc>[^0-9]+[0-9]+[a-zA-Z]*)\b)?\s*",
        r"(?P<prof>[^0-9]*)\s*",
        r"(?P<capac>[0-9]+)\s+",
        r"(?P<xc>[0-9]+)\s+",
        r"(?P<grade_type>[a-zA-Z]+)\s+",
        r"(?P<units>[0-9])\.",
    ]
    .concat()
}

fn grammar(requires_title: bool) -> Regex {
    let title = if requires_title { TITLE_PATTERN } else { "" };
    let pattern = format!(r"^\s*{}{}", title, lecture_pattern());
    Regex::new(&pattern).expect("course grammar is valid")
}

/// What a catalog line represents
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind {
    CourseStart,
    Continuation,
    Noise,
}

pub fn classify(line: &str) -> LineKind {
    if HEADER.is_match(line) {
        LineKind::CourseStart
    } else if CONTINUATION.is_match(line) {
        LineKind::Continuation
    } else {
        LineKind::Noise
    }
}

pub fn is_course_start(line: &str) -> bool {
    HEADER.is_match(line)
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CourseHeader {
    pub number: String,
    pub name: String,
}

/// Fields of one lecture (or discussion) line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LectureRecord {
    pub enrollment_id: Option<String>,
    pub class_type: String,
    pub section: String,
    pub days: Vec<Weekday>,
    pub time_interval: TimeInterval,
    pub location: Option<String>,
    pub instructor: String,
    pub capacity: String,
    pub exam_code: String,
    pub grade_type: String,
    pub units: String,
}

impl LectureRecord {
    pub fn is_discussion(&self) -> bool {
        self.class_type.eq_ignore_ascii_case("DIS")
    }
}

/// A header line: the course identity plus its first lecture, which may
/// still fail to build even though the line has the header shape.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderMatch {
    pub header: CourseHeader,
    pub lecture: Result<LectureRecord, SkipReason>,
}

pub fn match_header(line: &str) -> Result<HeaderMatch, SkipReason> {
    let caps = HEADER.captures(line).ok_or(SkipReason::NoMatch)?;
    let header = CourseHeader {
        number: caps["number"].to_string(),
        name: caps["name"].trim().to_string(),
    };
    Ok(HeaderMatch { header, lecture: lecture_from(&caps) })
}

pub fn match_continuation(line: &str) -> Result<LectureRecord, SkipReason> {
    let caps = CONTINUATION.captures(line).ok_or(SkipReason::NoMatch)?;
    lecture_from(&caps)
}

fn lecture_from(caps: &Captures<'_>) -> Result<LectureRecord, SkipReason> {
    let days = caps["days"]
        .chars()
        .map(|c| weekday_from_letter(c).ok_or(SkipReason::InvalidDay(c)))
        .collect::<Result<Vec<_>, _>>()?;

    let start = Time::normalize(&caps["time_start"])?;
    let end = Time::normalize(&caps["time_end"])?;

    let text = |name: &str| caps.name(name).map(|m| m.as_str().trim().to_string());

    Ok(LectureRecord {
        enrollment_id: text("lec_id"),
        class_type: caps["class_type"].to_string(),
        section: caps["sec_num"].to_string(),
        days,
        time_interval: TimeInterval::new(start, end),
        location: text("loc").filter(|loc| !loc.is_empty()),
        instructor: text("prof").unwrap_or_default(),
        capacity: caps["capac"].to_string(),
        exam_code: caps["xc"].to_string(),
        grade_type: caps["grade_type"].to_string(),
        units: caps["units"].to_string(),
    })
}

/// Free-text notice following a lecture line
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notice {
    SameAs(String),
    Restriction(String),
}

pub fn match_notice(line: &str) -> Option<Notice> {
    let caps = NOTICE.captures(line)?;
    let text = line.trim().to_string();
    if caps["kind"].to_uppercase().starts_with("SAME") {
        Some(Notice::SameAs(text))
    } else {
        Some(Notice::Restriction(text))
    }
}
