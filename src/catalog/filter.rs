//! Course selection by schedule criteria.

use super::Course;
use crate::time::Time;

/// A single criterion a course must meet
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CourseFilter {
    DurationEq(u32),
    DurationAtLeast(u32),
    DurationAtMost(u32),
    Lab,
    UpperDivision,
    OccursAfter(Time),
    OccursBefore(Time),
    StartsAt(Time),
    EndsAt(Time),
}

impl CourseFilter {
    pub fn matches(&self, course: &Course) -> bool {
        match *self {
            CourseFilter::DurationEq(n) => course.duration() == Some(n),
            CourseFilter::DurationAtLeast(n) => course.duration().is_some_and(|d| d >= n),
            CourseFilter::DurationAtMost(n) => course.duration().is_some_and(|d| d <= n),
            CourseFilter::Lab => course.is_lab(),
            CourseFilter::UpperDivision => course.is_upper_division(),
            CourseFilter::OccursAfter(t) => course.occurs_after(t),
            CourseFilter::OccursBefore(t) => course.occurs_before(t),
            CourseFilter::StartsAt(t) => course.starts_at(t),
            CourseFilter::EndsAt(t) => course.ends_at(t),
        }
    }
}

/// One flag per course: true when the course meets every filter
pub fn filter_flags(courses: &[Course], filters: &[CourseFilter]) -> Vec<bool> {
    courses.iter().map(|course| filters.iter().all(|f| f.matches(course))).collect()
}

pub fn select<'a>(courses: &'a [Course], filters: &[CourseFilter]) -> Vec<&'a Course> {
    courses.iter().filter(|course| filters.iter().all(|f| f.matches(course))).collect()
}
