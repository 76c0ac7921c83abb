use crate::config::ScraperConfig;
use crate::constants::{DEFAULT_MAX_RECORDS, DEFAULT_OUTPUT, DEFAULT_SEARCH_URL};
use crate::downloader::{build_client, scrape_tenders, validate_url_template, ScrapeOptions};
use crate::errors::{AppError, AppResult};
use crate::writer::write_tenders_csv;
use clap::{Arg, ArgAction, ArgMatches, Command};
use std::path::{Path, PathBuf};
use tracing::info;

// CLI metadata constants
const APP_VERSION: &str = env!("CARGO_PKG_VERSION");
const APP_AUTHOR: &str = env!("CARGO_PKG_AUTHORS");
const APP_ABOUT: &str = env!("CARGO_PKG_DESCRIPTION");

/// Parameters resolved from the command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunArgs {
    pub max_records: usize,
    pub output: PathBuf,
    pub url_template: String,
    pub config_path: Option<PathBuf>,
}

/// Builds the clap command definition.
pub fn build_command() -> Command<'static> {
    Command::new("tender-scraper")
        .version(APP_VERSION)
        .author(APP_AUTHOR)
        .about(APP_ABOUT)
        .arg(
            Arg::new("max")
                .long("max")
                .help("Maximum number of tenders to collect")
                .default_value("100")
                .value_parser(clap::value_parser!(usize))
                .action(ArgAction::Set),
        )
        .arg(
            Arg::new("output")
                .long("output")
                .help("Destination CSV file")
                .default_value(DEFAULT_OUTPUT)
                .value_parser(clap::value_parser!(PathBuf))
                .action(ArgAction::Set),
        )
        .arg(
            Arg::new("url")
                .long("url")
                .help("Search URL template; '{}' is replaced by the page number")
                .default_value(DEFAULT_SEARCH_URL)
                .value_parser(clap::value_parser!(String))
                .action(ArgAction::Set),
        )
        .arg(
            Arg::new("config")
                .long("config")
                .help("Optional TOML file with scraper settings")
                .value_parser(clap::value_parser!(PathBuf))
                .action(ArgAction::Set),
        )
}

impl RunArgs {
    /// Reads resolved parameters out of parsed matches.
    pub fn from_matches(matches: &ArgMatches) -> Self {
        Self {
            max_records: matches
                .get_one::<usize>("max")
                .copied()
                .unwrap_or(DEFAULT_MAX_RECORDS),
            output: matches
                .get_one::<PathBuf>("output")
                .cloned()
                .unwrap_or_else(|| PathBuf::from(DEFAULT_OUTPUT)),
            url_template: matches
                .get_one::<String>("url")
                .cloned()
                .unwrap_or_else(|| DEFAULT_SEARCH_URL.to_string()),
            config_path: matches.get_one::<PathBuf>("config").cloned(),
        }
    }
}

/// Parses command-line arguments and runs the scrape-and-export workflow.
///
/// The workflow:
/// 1. Validates the URL template and loads the optional config file
/// 2. Prints a banner with the resolved parameters
/// 3. Fetches and parses pages until a stop condition is met
/// 4. Writes the collected records to CSV, or reports that nothing was parsed
///
/// # Errors
///
/// Returns an error if the URL template is invalid, the config file cannot be loaded,
/// the HTTP client cannot be built, or the output file cannot be written. Page
/// failures during pagination are not errors; they only end the run early.
pub async fn cli() -> AppResult<()> {
    let matches = build_command().get_matches();
    let args = RunArgs::from_matches(&matches);
    run_workflow(&args).await?;
    Ok(())
}

/// Runs the workflow for already-resolved arguments.
///
/// Returns the number of records written, zero when nothing was parsed.
pub async fn run_workflow(args: &RunArgs) -> AppResult<usize> {
    validate_url_template(&args.url_template)?;

    let config = match &args.config_path {
        Some(path) => ScraperConfig::from_toml_file(path)?,
        None => ScraperConfig::default(),
    };

    print_banner(args);

    let client = build_client(&config)?;
    let options = ScrapeOptions {
        url_template: &args.url_template,
        max_records: args.max_records,
        config: &config,
    };
    let outcome = scrape_tenders(&client, &options).await;

    if outcome.records.is_empty() {
        println!("Nothing was parsed.");
        return Ok(0);
    }

    let written = write_tenders_csv(&args.output, &outcome.records)?;
    print_saved(written, &args.output);

    info!(
        records = written,
        pages = outcome.pages_fetched,
        output = %args.output.display(),
        "All operations completed successfully"
    );
    Ok(written)
}

fn print_banner(args: &RunArgs) {
    println!("Starting tender scraper...");
    println!("Max tenders: {}", args.max_records);
    println!("Output file: {}", args.output.display());
    println!("URL: {}", args.url_template);
    if let Some(path) = &args.config_path {
        println!("Config: {}", path.display());
    }
}

fn print_saved(count: usize, output: &Path) {
    println!("\nSaved {count} tenders to '{}'", output.display());
}

/// Maps a startup failure to a printable message for `main`.
pub fn describe_error(err: &AppError) -> String {
    match err {
        AppError::InvalidInput(msg) => format!("Invalid arguments: {msg}"),
        other => other.to_string(),
    }
}
