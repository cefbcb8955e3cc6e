//! Sitescope main entry point
//!
//! Command-line interface for the site discovery and content extraction
//! pipeline.

use anyhow::Context;
use clap::{Parser, Subcommand};
use sitescope::config::{load_config, Config};
use sitescope::crawler::{crawl, CrawlRequest};
use sitescope::extract::{extract, ExtractionRequest};
use sitescope::output::{
    print_crawl_summary, print_extraction_summary, write_json_report,
};
use sitescope::results::PageRef;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// Sitescope: site discovery and content extraction
///
/// Discovers a website's reachable pages breadth-first under a page budget,
/// classifies and ranks them, and extracts clean readable text from a chosen
/// subset.
#[derive(Parser, Debug)]
#[command(name = "sitescope")]
#[command(version = "1.0.0")]
#[command(about = "Site discovery and content extraction", long_about = None)]
struct Cli {
    /// Path to TOML configuration file (defaults apply without one)
    #[arg(short, long, value_name = "CONFIG", global = true)]
    config: Option<PathBuf>,

    /// Increase logging verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Suppress non-error output
    #[arg(short, long, conflicts_with = "verbose", global = true)]
    quiet: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Discover a site's pages breadth-first from a seed URL
    Crawl {
        /// The seed URL to start from
        url: String,

        /// Maximum number of pages to visit
        #[arg(long)]
        max_pages: Option<usize>,

        /// Correlation token echoed through progress updates
        #[arg(long)]
        audit_id: Option<String>,

        /// Write the crawl result to this JSON file
        #[arg(short, long, value_name = "PATH")]
        output: Option<PathBuf>,
    },

    /// Extract readable content from a set of pages
    Extract {
        /// The site the pages belong to
        base_url: String,

        /// JSON file holding the pages to process: [{"url", "type"}, ...]
        #[arg(long, value_name = "PATH")]
        pages: PathBuf,

        /// Maximum number of pages to process
        #[arg(long)]
        max_pages: Option<usize>,

        /// Record pages without fetching or extracting content
        #[arg(long)]
        no_content: bool,

        /// Write the extraction result to this JSON file
        #[arg(short, long, value_name = "PATH")]
        output: Option<PathBuf>,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    setup_logging(cli.verbose, cli.quiet);

    let config = match &cli.config {
        Some(path) => {
            tracing::info!("Loading configuration from: {}", path.display());
            load_config(path).with_context(|| format!("failed to load {}", path.display()))?
        }
        None => Config::default(),
    };

    match cli.command {
        Command::Crawl {
            url,
            max_pages,
            audit_id,
            output,
        } => {
            let request = CrawlRequest {
                url,
                max_pages,
                audit_id,
            };

            let result = crawl(&config, &request).await?;

            if let Some(path) = output {
                write_json_report(&result, &path)?;
            }
            print_crawl_summary(&result);
        }

        Command::Extract {
            base_url,
            pages,
            max_pages,
            no_content,
            output,
        } => {
            let content = std::fs::read_to_string(&pages)
                .with_context(|| format!("failed to read {}", pages.display()))?;
            let pages: Vec<PageRef> = serde_json::from_str(&content)
                .context("pages file must be a JSON array of {url, type} objects")?;

            let request = ExtractionRequest {
                base_url,
                pages,
                max_pages,
                extract_content: !no_content,
            };

            let result = extract(&config, &request).await?;

            if let Some(path) = output {
                write_json_report(&result, &path)?;
            }
            print_extraction_summary(&result);
        }
    }

    Ok(())
}

/// Sets up the tracing subscriber based on verbosity level
fn setup_logging(verbose: u8, quiet: bool) {
    let filter = if quiet {
        EnvFilter::new("error")
    } else {
        match verbose {
            0 => EnvFilter::new("sitescope=info,warn"),
            1 => EnvFilter::new("sitescope=debug,info"),
            2 => EnvFilter::new("sitescope=trace,debug"),
            _ => EnvFilter::new("trace"),
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .init();
}
