//! Library Catalog CLI
//!
//! Command-line interface for generating a library report from CSV sources.
//!
//! # Usage
//!
//! ```bash
//! cargo run -- data/catalog.csv data/user.csv
//! cargo run -- data/catalog.csv data/user.csv --report report.txt
//! cargo run -- data/catalog.csv data/user.csv --today 2024-01-01
//! ```
//!
//! The program loads the book catalog and user list from the given CSV
//! files, builds the catalog engine, generates the summary report, and
//! writes it to stdout or to the `--report` path.
//!
//! # Exit Codes
//!
//! - 0: Success
//! - 1: Error (missing source file, unresolvable user row, write failure)

use library_catalog_engine::cli::{self, CliArgs};
use library_catalog_engine::types::CatalogError;
use library_catalog_engine::{generate_report, io, LibraryCatalog};
use std::fs::File;
use std::process;

fn main() {
    // Parse command-line arguments using clap
    let args = cli::parse_args();

    if let Err(e) = run(&args) {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

/// Load sources, build the engine, and write the report
///
/// Recoverable per-row load errors are reported on stderr by the loaders;
/// only missing sources, unresolvable user rows, and sink failures are
/// fatal here.
fn run(args: &CliArgs) -> Result<(), CatalogError> {
    let books = io::load_books(&args.catalog_file)?;
    let users = io::load_users(&args.users_file)?;

    let library = LibraryCatalog::from_records(books, users, args.to_config())?;
    let report = generate_report(&library);

    match &args.report_file {
        Some(path) => {
            let mut file = File::create(path)?;
            io::write_report(&report, &mut file)
        }
        None => io::write_report(&report, &mut std::io::stdout()),
    }
}
