use anyhow::{Context, Result};
use clap::Parser;
use course_catalog::catalog::{self, Department};
use course_catalog::cli::Cli;
use course_catalog::config::{Config, OutputFormat};
use course_catalog::CatalogParser;
use env_logger::Env;
use log::info;

fn main() -> Result<()> {
    env_logger::Builder::from_env(Env::default().default_filter_or("info"))
        .format(|buf, record| {
            use chrono::Local;
            use std::io::Write;
            writeln!(
                buf,
                "{} [{}] {}",
                Local::now().format("%Y-%m-%d %H:%M:%S"),
                record.level(),
                record.args()
            )
        })
        .init();

    let cli = Cli::parse();
    let config = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };

    let departments = cli
        .departments
        .or(config.sources.department_list)
        .context("No department list given (use --departments or set sources.department_list)")?;
    let catalog_path = cli
        .catalog
        .or(config.sources.catalog)
        .context("No catalog given (use --catalog or set sources.catalog)")?;

    let mut parser = CatalogParser::default();
    parser.load_department_list(&departments)?;
    let depts = parser.parse_catalog(&catalog_path)?;

    let filters = cli.filters.to_filters();
    if !filters.is_empty() {
        info!("Applying {} course filters", filters.len());
    }
    let depts: Vec<Department> = depts
        .into_iter()
        .map(|dept| Department {
            courses: catalog::select(&dept.courses, &filters).into_iter().cloned().collect(),
            name: dept.name,
        })
        .collect();

    let format = if cli.json { OutputFormat::Json } else { config.output.format };
    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&depts)?),
        OutputFormat::Text => print_catalog(&depts, config.output.show_discussions),
    }

    info!("Listed {} departments", depts.len());
    Ok(())
}

fn print_catalog(depts: &[Department], show_discussions: bool) {
    for dept in depts {
        println!("\n----- {} -----", dept);
        for course in &dept.courses {
            println!("{}", course);
            for lec in &course.lectures {
                println!("   {}", lec);
                if show_discussions {
                    for dis in &lec.discussions {
                        println!("      {}", dis);
                    }
                }
            }
        }
    }
}

