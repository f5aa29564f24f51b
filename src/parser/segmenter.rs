//! Splits the report into per-department chunks.
//!
//! Department names appear on lines of their own, in list order. A
//! department with no classes that term may be missing from the report
//! entirely, so at every boundary the segmenter accepts either the next
//! expected name or the one after it.

use super::DepartmentList;
use crate::error::{CatalogError, CatalogResult};
use log::info;
use std::mem;

/// The lines belonging to one department
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Chunk<'a> {
    pub department: &'a str,
    pub lines: Vec<&'a str>,
}

pub fn segment<'a, I>(departments: &'a DepartmentList, lines: I) -> CatalogResult<Vec<Chunk<'a>>>
where
    I: IntoIterator<Item = &'a str>,
{
    let names = departments.names();
    if names.is_empty() {
        return Err(CatalogError::EmptyDepartmentList);
    }

    // Out-of-range lookahead never matches
    let is_name = |idx: usize, line: &str| names.get(idx).is_some_and(|name| name == line.trim());

    let mut lines = lines.into_iter();
    let mut chunks = Vec::new();

    let mut current = loop {
        let Some(line) = lines.next() else {
            return Ok(chunks);
        };
        if is_name(0, line) {
            break 0;
        }
        if is_name(1, line) {
            info!("Skipped over: {}", names[0]);
            break 1;
        }
    };

    let mut body = Vec::new();
    for line in lines {
        let next = if is_name(current + 1, line) {
            current + 1
        } else if is_name(current + 2, line) {
            info!("Skipped over: {}", names[current + 1]);
            current + 2
        } else {
            body.push(line);
            continue;
        };

        chunks.push(close(&names[current], mem::take(&mut body)));
        current = next;
    }
    chunks.push(close(&names[current], body));

    Ok(chunks)
}

fn close<'a>(department: &'a str, lines: Vec<&'a str>) -> Chunk<'a> {
    if lines.is_empty() {
        info!("Department has no lines: {}", department);
    }
    Chunk { department, lines }
}
