//! foodscore
//!
//! Scores an Open Food Facts JSON-lines export and writes scored products
//! as JSON lines to stdout.
//!
//! Usage: foodscore [PATH|-]

use std::fs::File;
use std::io::{self, BufReader};

use tracing_subscriber::EnvFilter;

use foodscore::build_info;
use foodscore::config::{Config, FeedSource};
use foodscore::feed::score_feed;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args: Vec<String> = std::env::args().collect();
    let config = Config::from_env().with_feed_arg(args.get(1).map(|s| s.as_str()));

    // Logs go to stderr so stdout stays valid JSON lines
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive(config.log_directive.parse()?))
        .with_writer(io::stderr)
        .init();

    build_info::print_startup_banner();

    let stdout = io::stdout().lock();
    let summary = match &config.feed {
        FeedSource::Stdin => {
            eprintln!("Reading feed from stdin...");
            score_feed(io::stdin().lock(), stdout)?
        }
        FeedSource::File(path) => {
            eprintln!("Reading feed from: {}", path.display());
            let file = File::open(path).map_err(|e| {
                tracing::error!("Cannot open feed {}: {}", path.display(), e);
                e
            })?;
            score_feed(BufReader::new(file), stdout)?
        }
    };

    eprintln!(
        "Done. Scored {} products ({} skipped, {} errors) in {} ms.",
        summary.scored,
        summary.skipped,
        summary.errors,
        (summary.finished_at - summary.started_at).num_milliseconds()
    );

    Ok(())
}
