use crate::catalog::CourseFilter;
use crate::time::Time;
use clap::Parser;
use std::path::PathBuf;

/// course-catalog - extract departments, courses and lectures from a registrar report
#[derive(Debug, Parser)]
#[command(name = "course-catalog")]
#[command(about = "Parse a plain-text course catalog report", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Config file (defaults to the user config directory)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Department list, one name per line in report order
    #[arg(short, long)]
    pub departments: Option<PathBuf>,

    /// Catalog report to parse
    #[arg(short, long)]
    pub catalog: Option<PathBuf>,

    /// Print the parsed catalog as JSON
    #[arg(long)]
    pub json: bool,

    #[command(flatten)]
    pub filters: FilterArgs,
}

/// Only show courses meeting every given criterion
#[derive(Debug, Default, clap::Args)]
pub struct FilterArgs {
    /// Lab courses only
    #[arg(long)]
    pub labs: bool,

    /// Upper division courses only (number 100 and above)
    #[arg(long)]
    pub upper_division: bool,

    /// Courses with a lecture starting at or after this time (H:MM, 24 hour)
    #[arg(long, value_name = "TIME")]
    pub after: Option<Time>,

    /// Courses with a lecture ending at or before this time
    #[arg(long, value_name = "TIME")]
    pub before: Option<Time>,

    /// Courses with a lecture starting exactly at this time
    #[arg(long, value_name = "TIME")]
    pub starts_at: Option<Time>,

    /// Courses with a lecture ending exactly at this time
    #[arg(long, value_name = "TIME")]
    pub ends_at: Option<Time>,

    /// Lecture length in minutes
    #[arg(long, value_name = "MINUTES")]
    pub duration: Option<u32>,

    #[arg(long, value_name = "MINUTES")]
    pub min_duration: Option<u32>,

    #[arg(long, value_name = "MINUTES")]
    pub max_duration: Option<u32>,
}

impl FilterArgs {
    pub fn to_filters(&self) -> Vec<CourseFilter> {
        let mut filters = Vec::new();
        if self.labs {
            filters.push(CourseFilter::Lab);
        }
        if self.upper_division {
            filters.push(CourseFilter::UpperDivision);
        }
        filters.extend(self.after.map(CourseFilter::OccursAfter));
        filters.extend(self.before.map(CourseFilter::OccursBefore));
        filters.extend(self.starts_at.map(CourseFilter::StartsAt));
        filters.extend(self.ends_at.map(CourseFilter::EndsAt));
        filters.extend(self.duration.map(CourseFilter::DurationEq));
        filters.extend(self.min_duration.map(CourseFilter::DurationAtLeast));
        filters.extend(self.max_duration.map(CourseFilter::DurationAtMost));
        filters
    }
}
