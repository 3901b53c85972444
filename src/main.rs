// src/main.rs
// =============================================================================
// This is the entry point of our CLI application.
//
// What happens here:
// 1. Parse command-line arguments using clap
// 2. Validate the settings (before touching the network or the output file)
// 3. Ask for the URL if it wasn't passed with -u
// 4. Open the output (file or stdout) and run the crawl
// 5. Exit with proper code (0 = success, 2 = error)
//
// Rust concepts used:
// - async/await: page downloads are network I/O
// - Result<T, E>: every step that can fail returns a Result and uses `?`
// =============================================================================

// Module declarations - tells Rust about our other source files
mod cli;      // src/cli.rs - command-line parsing
mod config;   // src/config.rs - validated crawl settings
mod crawl;    // src/crawl/ - the depth-first crawl
mod error;    // src/error.rs - CrawlError
mod extract;  // src/extract/ - text and links out of HTML
mod fetch;    // src/fetch/ - downloading pages
mod logging;  // src/logging.rs - tracing setup
mod output;   // src/output/ - where and how results are written
mod words;    // src/words/ - tokenize, count, rank, mutate

use anyhow::Result;
use clap::Parser; // Parser trait enables the parse() method

use cli::Cli;
use fetch::HttpFetcher;
use output::ReportWriter;

#[tokio::main]
async fn main() {
    let exit_code = match run().await {
        Ok(()) => 0,
        Err(e) => {
            // {:#} prints the whole cause chain on one line
            eprintln!("Error: {:#}", e);
            2
        }
    };

    std::process::exit(exit_code);
}

async fn run() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    // Reject bad settings before prompting, truncating or fetching anything
    let config = cli.crawl_config();
    config.validate()?;

    let url = match &cli.url {
        Some(url) => url.clone(),
        None => cli::prompt_for_url()?,
    };

    let fetcher = HttpFetcher::new(cli.request_timeout())?;

    // Truncates an existing output file right away
    let sink = output::open_sink(cli.output.as_deref())?;
    let mut report = ReportWriter::new(sink, config.format);

    tracing::info!("Crawling {} with max depth {}", url, config.depth);

    let summary = crawl::crawl(&url, &config, &fetcher, &mut report).await?;

    tracing::info!(
        "Done: {} page(s) crawled, {} word(s) reported{}",
        summary.pages_visited,
        summary.words_emitted,
        if summary.truncated { " (stopped at page limit)" } else { "" }
    );

    Ok(())
}
