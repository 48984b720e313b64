use crate::core::CatalogConfig;
use chrono::NaiveDate;
use clap::Parser;
use std::path::PathBuf;

/// Generate a library report from catalog and user CSV files
#[derive(Parser, Debug)]
#[command(name = "library-catalog")]
#[command(about = "Generate a library report from catalog and user CSV files", long_about = None)]
pub struct CliArgs {
    /// Path to the book catalog CSV file
    #[arg(value_name = "CATALOG", help = "Path to the book catalog CSV file")]
    pub catalog_file: PathBuf,

    /// Path to the user CSV file
    #[arg(value_name = "USERS", help = "Path to the user CSV file")]
    pub users_file: PathBuf,

    /// Where to write the report (defaults to stdout)
    #[arg(
        long = "report",
        value_name = "PATH",
        help = "Write the report to this file instead of stdout"
    )]
    pub report_file: Option<PathBuf>,

    /// Reference date override for checkout stamps and fee computation
    #[arg(
        long = "today",
        value_name = "DATE",
        help = "Reference date as YYYY-MM-DD (default: 2023-09-15)"
    )]
    pub today: Option<NaiveDate>,
}

impl CliArgs {
    /// Create a CatalogConfig from CLI arguments
    ///
    /// Uses the `--today` override when given, otherwise the engine's stock
    /// reference date.
    ///
    /// # Returns
    ///
    /// A `CatalogConfig` carrying the effective reference date.
    pub fn to_config(&self) -> CatalogConfig {
        match self.today {
            Some(today) => CatalogConfig::new(today),
            None => CatalogConfig::default(),
        }
    }
}
