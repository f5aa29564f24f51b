use std::path::PathBuf;

/// Errors that abort a catalog parse
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("List of departments is empty")]
    EmptyDepartmentList,
    #[error("Failed to read '{}': {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Invalid time format: {0}")]
    InvalidFormat(String),
}

impl CatalogError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        CatalogError::Io { path: path.into(), source }
    }
}

pub type CatalogResult<T> = std::result::Result<T, CatalogError>;

/// Why a single catalog line did not produce a record.
///
/// These are expected while walking a noisy report and are only logged.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SkipReason {
    #[error("line does not match the lecture grammar")]
    NoMatch,
    #[error("unrecognized weekday '{0}'")]
    InvalidDay(char),
    #[error("bad meeting time: {0}")]
    BadTime(String),
    #[error("discussion has no preceding lecture")]
    OrphanDiscussion,
    #[error("course header has no readable lecture")]
    NoLectures,
}

impl From<CatalogError> for SkipReason {
    fn from(err: CatalogError) -> Self {
        SkipReason::BadTime(err.to_string())
    }
}
