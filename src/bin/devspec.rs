//! devspec CLI - extract a LineageOS wiki device document from a device page

use clap::{Parser, ValueEnum};
use once_cell::unsync::OnceCell;
use std::io::Write;
use std::path::PathBuf;
use std::process;

use devspec::{Config, Fetcher, OutputFormat, Pipeline, SchemaContext, ScrapeError};

#[derive(Parser)]
#[command(name = "devspec")]
#[command(version, about = "Extract a normalized device document from a device spec page", long_about = None)]
struct Cli {
    /// Page identifier, e.g. google_pixel_5-10386
    page: String,

    /// Read the page from a local HTML file instead of fetching it
    #[arg(long)]
    html: Option<PathBuf>,

    /// Read the schema from a local YAML file instead of fetching it
    #[arg(long)]
    schema: Option<PathBuf>,

    /// Configuration file (YAML)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Output format, overrides the configuration
    #[arg(short, long, value_enum)]
    format: Option<Format>,

    /// Keep the historical internal-memory collapse behavior
    #[arg(long)]
    legacy_memory: bool,
}

#[derive(Clone, Copy, ValueEnum)]
enum Format {
    Yaml,
    Json,
}

fn main() {
    dotenv::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let result = load_config(&cli).and_then(|config| run(&cli, &config, std::io::stdout().lock()));
    if let Err(e) = result {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

fn load_config(cli: &Cli) -> Result<Config, ScrapeError> {
    let mut config = match &cli.config {
        Some(path) => Config::load_from_file(path)?,
        None => Config::default(),
    };
    if cli.legacy_memory {
        config.extract.legacy_memory_collapse = true;
    }
    if let Some(format) = cli.format {
        config.output.format = match format {
            Format::Yaml => OutputFormat::Yaml,
            Format::Json => OutputFormat::Json,
        };
    }
    Ok(config)
}

fn run<W: Write>(cli: &Cli, config: &Config, out: W) -> Result<(), ScrapeError> {
    // The HTTP client is only built once something has to be downloaded
    let client = OnceCell::new();
    let fetcher = || client.get_or_try_init(|| Fetcher::new(config.clone()));

    let html = match &cli.html {
        Some(path) => std::fs::read_to_string(path)?,
        None => fetcher()?.fetch_page(&cli.page)?,
    };
    let schema = match &cli.schema {
        Some(path) => SchemaContext::load_from_file(path)?,
        None => fetcher()?.fetch_schema()?,
    };
    tracing::debug!(
        "schema: {} required keys, {} vendors",
        schema.required.len(),
        schema.vendors.len()
    );

    let table = devspec::parse_raw_table(&html);
    let document = Pipeline::standard(&config.extract).run(&table, &schema);

    devspec::write_document(out, &document, &config.output)
}
