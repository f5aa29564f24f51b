use crate::error::{CatalogError, CatalogResult};
use log::debug;
use std::fs;
use std::path::Path;

/// Department names in the order they appear in the report.
///
/// Names are matched exactly against report lines (case sensitive, with
/// surrounding whitespace ignored).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DepartmentList {
    names: Vec<String>,
}

impl DepartmentList {
    pub fn new<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let names = names
            .into_iter()
            .map(|name| name.as_ref().trim().to_string())
            .filter(|name| !name.is_empty())
            .collect();
        Self { names }
    }

    /// Read one department name per line
    pub fn load(path: impl AsRef<Path>) -> CatalogResult<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| CatalogError::io(path, e))?;
        let list = Self::parse(&content);
        debug!("Loaded {} department names from {}", list.len(), path.display());
        Ok(list)
    }

    pub fn parse(content: &str) -> Self {
        Self::new(content.lines())
    }

    pub fn names(&self) -> &[String] {
        &self.names
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}
