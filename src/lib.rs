pub mod catalog;
pub mod cli;
pub mod config;
pub mod error;
pub mod parser;
pub mod time;

/// Install a debug-level logger; later calls are ignored
pub fn init_logger() {
    let _ = env_logger::Builder::new()
        .filter_level(log::LevelFilter::Debug)
        .format_timestamp(None)
        .format_target(false)
        .try_init();
}

// Re-export commonly used types
pub use catalog::{Course, CourseFilter, Department, Discussion, InfoKey, Lecture};
pub use config::Config;
pub use error::{CatalogError, CatalogResult, SkipReason};
pub use parser::{CatalogParser, DepartmentList};
pub use time::{Time, TimeInterval};
