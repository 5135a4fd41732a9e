//! Command-line browser for the catalog core.
//!
//! # Responsibility
//! - Parse browse options and verify the bundled catalog loads.
//! - Run one browse pass over the bundled catalog with deterministic output.

use clap::Parser;
use folio_core::{BrowseConfig, CatalogStore, ProjectBrowser};
use log::info;
use std::process::ExitCode;

/// Browse the bundled project catalog.
#[derive(Parser, Debug)]
#[command(name = "folio_cli", version, about, long_about = None)]
struct Args {
    /// Case-insensitive text matched against title and description
    #[arg(long)]
    query: Option<String>,

    /// Exact category, or `all`
    #[arg(long)]
    category: Option<String>,

    /// Exact technology tag, or `all`
    #[arg(long)]
    technology: Option<String>,

    /// Number of pages to show (initial page plus "load more" steps)
    #[arg(long, default_value_t = 1, value_parser = clap::value_parser!(u64).range(1..))]
    pages: u64,

    /// Absolute directory for rolling log files; logging is off when omitted
    #[arg(long)]
    log_dir: Option<String>,
}

fn main() -> ExitCode {
    let args = Args::parse();

    if let Some(log_dir) = args.log_dir.as_deref() {
        if let Err(err) = folio_core::init_logging(folio_core::default_log_level(), log_dir) {
            eprintln!("logging disabled: {err}");
        }
    }

    let catalog = match CatalogStore::try_builtin() {
        Ok(catalog) => catalog,
        Err(err) => {
            eprintln!("bundled catalog is invalid: {err}");
            return ExitCode::FAILURE;
        }
    };
    println!("folio_core version={}", folio_core::core_version());
    println!("folio_core catalog_size={}", catalog.len());

    let mut browser = ProjectBrowser::new(catalog, BrowseConfig::default());
    if let Some(query) = args.query {
        browser.set_query(query);
    }
    if let Some(category) = args.category.as_deref() {
        if let Err(err) = browser.select_category(category) {
            eprintln!("{err}");
            return ExitCode::from(2);
        }
    }
    if let Some(technology) = args.technology.as_deref() {
        if let Err(err) = browser.select_technology(technology) {
            eprintln!("{err}");
            return ExitCode::from(2);
        }
    }
    for _ in 1..args.pages {
        browser.load_more();
    }

    let view = browser.view();
    for project in &view.items {
        println!(
            "{}\t{}\t{}\t{}",
            project.id,
            project.title,
            project.category,
            project.technologies.join(", ")
        );
    }
    println!(
        "shown={} matches={} has_more={}",
        view.items.len(),
        view.total_matches,
        view.has_more
    );
    info!(
        "event=cli_browse module=cli status=ok shown={} matches={}",
        view.items.len(),
        view.total_matches
    );
    ExitCode::SUCCESS
}
