//! Builds courses out of a department's lines.

use super::grammar::{self, LectureRecord, Notice};
use crate::catalog::{Course, Department, Discussion, Info, InfoKey, Lecture};
use crate::error::SkipReason;
use log::{debug, info, trace};

pub fn assemble_department(name: &str, lines: &[&str]) -> Department {
    let courses = course_groups(lines)
        .into_iter()
        .filter_map(|group| match assemble_course(group) {
            Ok(course) => Some(course),
            Err(reason) => {
                info!("{}: skipping course '{}': {}", name, group[0].trim(), reason);
                None
            }
        })
        .collect::<Vec<_>>();

    if courses.is_empty() {
        info!("{}: no courses found in {} lines", name, lines.len());
    }
    Department { name: name.to_string(), courses }
}

/// Cut the lines into groups that each start with a course header.
/// Lines before the first header are dropped.
fn course_groups<'l, 'a>(lines: &'l [&'a str]) -> Vec<&'l [&'a str]> {
    let starts: Vec<usize> = lines
        .iter()
        .enumerate()
        .filter(|(_, line)| grammar::is_course_start(line))
        .map(|(i, _)| i)
        .collect();

    starts
        .iter()
        .enumerate()
        .map(|(n, &start)| {
            let end = starts.get(n + 1).copied().unwrap_or(lines.len());
            &lines[start..end]
        })
        .collect()
}

/// Build one course from its header line and the lines that follow it.
///
/// Fails when no lecture could be read from the group.
fn assemble_course(group: &[&str]) -> Result<Course, SkipReason> {
    let (first, rest) = group.split_first().ok_or(SkipReason::NoMatch)?;
    let header = grammar::match_header(first)?;

    let mut course = Course {
        name: header.header.name,
        number: header.header.number,
        lectures: Vec::new(),
        info: Info::new(),
    };

    if let Err(reason) = header.lecture.and_then(|record| add_record(&mut course, record)) {
        debug!("{}: first lecture unreadable: {}", course.number, reason);
    }

    for line in rest {
        if let Some(notice) = grammar::match_notice(line) {
            fold_notice(&mut course, notice);
            continue;
        }

        match grammar::match_continuation(line) {
            Ok(record) => {
                if let Err(reason) = add_record(&mut course, record) {
                    debug!("{}: dropped line '{}': {}", course.number, line.trim(), reason);
                }
            }
            Err(SkipReason::NoMatch) => trace!("noise: {}", line),
            Err(reason) => debug!("{}: dropped line '{}': {}", course.number, line.trim(), reason),
        }
    }

    if course.lectures.is_empty() {
        return Err(SkipReason::NoLectures);
    }
    Ok(course)
}

fn add_record(course: &mut Course, record: LectureRecord) -> Result<(), SkipReason> {
    if record.is_discussion() {
        let lecture = course.lectures.last_mut().ok_or(SkipReason::OrphanDiscussion)?;
        lecture.discussions.push(discussion_from(record)?);
        return Ok(());
    }

    let lecture = lecture_from(record);
    for key in [InfoKey::ExamCode, InfoKey::GradeType, InfoKey::Units] {
        if let Some(value) = lecture.info.get(&key) {
            course.info.entry(key).or_insert_with(|| value.clone());
        }
    }
    course.lectures.push(lecture);
    Ok(())
}

fn lecture_from(record: LectureRecord) -> Lecture {
    let mut info = Info::new();
    if let Some(loc) = record.location {
        info.insert(InfoKey::Location, loc);
    }
    if let Some(id) = record.enrollment_id {
        info.insert(InfoKey::EnrollmentId, id);
    }
    info.insert(InfoKey::ClassType, record.class_type);
    info.insert(InfoKey::Capacity, record.capacity);
    info.insert(InfoKey::ExamCode, record.exam_code);
    info.insert(InfoKey::GradeType, record.grade_type);
    info.insert(InfoKey::Units, record.units);

    Lecture {
        section: record.section,
        days: record.days,
        instructor: record.instructor,
        time_interval: record.time_interval,
        info,
        discussions: Vec::new(),
    }
}

fn discussion_from(record: LectureRecord) -> Result<Discussion, SkipReason> {
    if record.days.len() > 1 {
        debug!("discussion {} meets on several days, keeping the first", record.section);
    }
    let day = record.days.first().copied().ok_or(SkipReason::NoMatch)?;
    Ok(Discussion {
        name: record.section,
        day,
        ta_name: record.instructor,
        time_interval: record.time_interval,
    })
}

/// Notices apply to the course and to the lecture they follow
fn fold_notice(course: &mut Course, notice: Notice) {
    let (key, text) = match notice {
        Notice::SameAs(text) => (InfoKey::SameAs, text),
        Notice::Restriction(text) => (InfoKey::Restriction, text),
    };

    if let Some(lecture) = course.lectures.last_mut() {
        append_info(&mut lecture.info, key, &text);
    }
    append_info(&mut course.info, key, &text);
}

/// Notices of one kind are stored one per line
fn append_info(info: &mut Info, key: InfoKey, text: &str) {
    info.entry(key)
        .and_modify(|existing| {
            if !existing.lines().any(|notice| notice == text) {
                existing.push('\n');
                existing.push_str(text);
            }
        })
        .or_insert_with(|| text.to_string());
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Weekday;

    const HEADER: &str = "31 INTRO TO CS I Y N 187-030-200 LEC 1 MWF 9:00-9:50 ROLFE 1200 SMITH, J. 200 3 LG 4.";
    const SECOND: &str = "  N 187-030-201 LEC 2 TR 2:00-3:15 BOELTER 3400 JONES, A. 150 4 LG 4.";
    const DIS: &str = "    ---- DIS 2A F 12:00-12:50 DODD 147 LEE, K. 30 4 LG 0.";

    #[test]
    fn test_course_with_lectures_and_discussion() {
        let lines = ["page header", HEADER, SECOND, DIS, "  SAME AS: MATH 31", ""];
        let dept = assemble_department("COM SCI", &lines);
        assert_eq!(dept.courses.len(), 1);

        let course = &dept.courses[0];
        assert_eq!(course.number, "31");
        assert_eq!(course.name, "INTRO TO CS I Y");
        assert_eq!(course.lectures.len(), 2);
        assert_eq!(course.info(InfoKey::Units), Some("4"));
        assert_eq!(course.info(InfoKey::SameAs), Some("SAME AS: MATH 31"));

        let first = &course.lectures[0];
        assert_eq!(first.info(InfoKey::Capacity), Some("200"));
        assert_eq!(first.info(InfoKey::Location), Some("ROLFE 1200"));
        assert!(first.discussions.is_empty());
        assert_eq!(first.info(InfoKey::SameAs), None);

        let second = &course.lectures[1];
        assert_eq!(second.section, "2");
        assert_eq!(second.time_interval.to_string(), "14:00-15:15");
        assert_eq!(second.discussions.len(), 1);
        assert_eq!(second.discussions[0].name, "2A");
        assert_eq!(second.discussions[0].day, Weekday::Fri);
        assert_eq!(second.discussions[0].ta_name, "LEE, K.");
        assert_eq!(second.info(InfoKey::SameAs), Some("SAME AS: MATH 31"));
    }

    #[test]
    fn test_course_boundaries() {
        let other = "32 INTRO TO CS II N ---- LEC 1 TR 10:00-11:50 ROYCE 190 STAFF 100 5 LG 4.";
        let lines = [HEADER, "noise", other, SECOND];
        let dept = assemble_department("COM SCI", &lines);
        let numbers: Vec<_> = dept.courses.iter().map(|c| c.number.as_str()).collect();
        assert_eq!(numbers, ["31", "32"]);
        assert_eq!(dept.courses[0].lectures.len(), 1);
        assert_eq!(dept.courses[1].lectures.len(), 2);
    }

    #[test]
    fn test_course_without_lectures_is_skipped() {
        let broken = "99 BROKEN Y ---- LEC 1 MX 9:00-9:50 ROLFE 1200 SMITH 200 3 LG 4.";
        let dept = assemble_department("COM SCI", &[broken, "noise", HEADER]);
        assert_eq!(dept.courses.len(), 1);
        assert_eq!(dept.courses[0].number, "31");
    }

    #[test]
    fn test_bad_header_lecture_recovered_by_continuation() {
        let broken = "99 TOPICS Y ---- LEC 1 MX 9:00-9:50 ROLFE 1200 SMITH 200 3 LG 4.";
        let dept = assemble_department("COM SCI", &[broken, SECOND]);
        assert_eq!(dept.courses.len(), 1);
        assert_eq!(dept.courses[0].lectures[0].section, "2");
    }

    #[test]
    fn test_orphan_discussion_dropped() {
        let broken = "99 TOPICS Y ---- LEC 1 MX 9:00-9:50 ROLFE 1200 SMITH 200 3 LG 4.";
        let dept = assemble_department("COM SCI", &[broken, DIS]);
        assert!(dept.courses.is_empty());
    }

    #[test]
    fn test_notice_that_is_prefix_of_earlier_one_is_kept() {
        let lines = [HEADER, "  RESTRICT: MAJORS ONLY", SECOND, "  RESTRICT: MAJORS"];
        let course = &assemble_department("COM SCI", &lines).courses[0];
        assert_eq!(course.info(InfoKey::Restriction), Some("RESTRICT: MAJORS ONLY\nRESTRICT: MAJORS"));
        assert_eq!(course.lectures[0].info(InfoKey::Restriction), Some("RESTRICT: MAJORS ONLY"));
        assert_eq!(course.lectures[1].info(InfoKey::Restriction), Some("RESTRICT: MAJORS"));
    }

    #[test]
    fn test_notice_that_extends_earlier_one_is_kept() {
        let lines = [HEADER, "  RESTRICT: MAJORS", SECOND, "  RESTRICT: MAJORS ONLY"];
        let course = &assemble_department("COM SCI", &lines).courses[0];
        assert_eq!(course.info(InfoKey::Restriction), Some("RESTRICT: MAJORS\nRESTRICT: MAJORS ONLY"));
    }

    #[test]
    fn test_repeated_notice_stored_once() {
        let lines = [HEADER, "  SAME AS: MATH 31", SECOND, "  SAME AS: MATH 31"];
        let course = &assemble_department("COM SCI", &lines).courses[0];
        assert_eq!(course.info(InfoKey::SameAs), Some("SAME AS: MATH 31"));
        assert_eq!(course.lectures[1].info(InfoKey::SameAs), Some("SAME AS: MATH 31"));
    }

    #[test]
    fn test_lecture_info_keeps_enrollment_id_and_class_type() {
        let seminar = "   ---- SEM 3 F 10:00-11:50 ROYCE 190 STAFF 25 4 SO 2.";
        let course = &assemble_department("COM SCI", &[HEADER, seminar]).courses[0];

        let first = &course.lectures[0];
        assert_eq!(first.info(InfoKey::EnrollmentId), Some("187-030-200"));
        assert_eq!(first.info(InfoKey::ClassType), Some("LEC"));

        let second = &course.lectures[1];
        assert_eq!(second.info(InfoKey::EnrollmentId), None);
        assert_eq!(second.info(InfoKey::ClassType), Some("SEM"));
    }

    #[test]
    fn test_no_courses() {
        crate::init_logger();
        let dept = assemble_department("EMPTY", &["nothing", "to see"]);
        assert_eq!(dept.name, "EMPTY");
        assert!(dept.courses.is_empty());
    }
}
