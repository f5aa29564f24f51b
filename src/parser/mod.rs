//! Catalog parser
//!
//! Turns a registrar report into departments, courses and lectures:
//! the segmenter cuts the report into department chunks, the grammar
//! recognizes course and lecture lines, and the assembler builds the
//! object graph for each chunk.

pub mod assembler;
pub mod departments;
pub mod grammar;
pub mod segmenter;

use crate::catalog::Department;
use crate::error::{CatalogError, CatalogResult};
use log::info;
use std::fs;
use std::path::Path;

pub use departments::DepartmentList;
pub use grammar::{classify, LineKind};
pub use segmenter::{segment, Chunk};

/// Parses catalog reports against a department list.
///
/// Each parser owns its list, so reports from different terms can be
/// parsed side by side.
#[derive(Debug, Clone, Default)]
pub struct CatalogParser {
    departments: DepartmentList,
}

impl CatalogParser {
    pub fn new(departments: DepartmentList) -> Self {
        Self { departments }
    }

    pub fn departments(&self) -> &DepartmentList {
        &self.departments
    }

    /// Replace the department list with the names read from `path`
    pub fn load_department_list(&mut self, path: impl AsRef<Path>) -> CatalogResult<()> {
        self.departments = DepartmentList::load(path)?;
        info!("Loaded {} departments", self.departments.len());
        Ok(())
    }

    /// Parse the report file at `path`.
    ///
    /// Malformed records are skipped; only a missing department list or an
    /// unreadable file fails the parse.
    pub fn parse_catalog(&self, path: impl AsRef<Path>) -> CatalogResult<Vec<Department>> {
        if self.departments.is_empty() {
            return Err(CatalogError::EmptyDepartmentList);
        }

        let path = path.as_ref();
        let bytes = fs::read(path).map_err(|e| CatalogError::io(path, e))?;
        info!("Parsing catalog {}", path.display());
        self.parse_str(&String::from_utf8_lossy(&bytes))
    }

    pub fn parse_str(&self, text: &str) -> CatalogResult<Vec<Department>> {
        let chunks = segment(&self.departments, text.lines())?;
        let departments: Vec<Department> = chunks
            .iter()
            .map(|chunk| assembler::assemble_department(chunk.department, &chunk.lines))
            .collect();

        let courses: usize = departments.iter().map(|d| d.courses.len()).sum();
        info!("Parsed {} courses in {} departments", courses, departments.len());
        Ok(departments)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_department_list() {
        let parser = CatalogParser::default();
        assert!(matches!(parser.parse_str("MATH"), Err(CatalogError::EmptyDepartmentList)));
        assert!(matches!(
            parser.parse_catalog("/nonexistent/catalog.txt"),
            Err(CatalogError::EmptyDepartmentList)
        ));
    }

    #[test]
    fn test_unreadable_catalog() {
        let parser = CatalogParser::new(DepartmentList::new(["MATH"]));
        assert!(matches!(parser.parse_catalog("/nonexistent/catalog.txt"), Err(CatalogError::Io { .. })));
    }

    #[test]
    fn test_department_without_courses() {
        let parser = CatalogParser::new(DepartmentList::new(["MATH", "PHYSICS"]));
        let depts = parser.parse_str("MATH\nno classes\nPHYSICS\n").unwrap();
        assert_eq!(depts.len(), 2);
        assert!(depts.iter().all(|d| d.courses.is_empty()));
    }
}
