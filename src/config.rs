//! Runtime configuration
//!
//! Read from the environment; CLI arguments override it in the binaries.

use std::env;
use std::path::PathBuf;

/// Environment variable naming the default feed file
pub const FEED_PATH_VAR: &str = "FOODSCORE_FEED_PATH";
/// Environment variable holding the default log directive
pub const LOG_VAR: &str = "FOODSCORE_LOG";

const DEFAULT_LOG_DIRECTIVE: &str = "foodscore=info";
const DEFAULT_FEED_FILE: &str = "openfoodfacts-products.jsonl";

/// Where the feed comes from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FeedSource {
    Stdin,
    File(PathBuf),
}

#[derive(Debug, Clone)]
pub struct Config {
    pub feed: FeedSource,
    pub log_directive: String,
}

impl Config {
    /// Load configuration from the environment
    pub fn from_env() -> Self {
        Self {
            feed: FeedSource::File(resolve_feed_path(env::var(FEED_PATH_VAR).ok())),
            log_directive: env::var(LOG_VAR)
                .ok()
                .filter(|d| !d.trim().is_empty())
                .unwrap_or_else(|| DEFAULT_LOG_DIRECTIVE.to_string()),
        }
    }

    /// Apply a feed argument: `-` reads stdin, anything else is a path
    pub fn with_feed_arg(mut self, arg: Option<&str>) -> Self {
        match arg {
            Some("-") => self.feed = FeedSource::Stdin,
            Some(path) => self.feed = FeedSource::File(PathBuf::from(path)),
            None => {}
        }
        self
    }
}

/// Use the configured path, or `data/` under the project root
pub fn resolve_feed_path(configured: Option<String>) -> PathBuf {
    if let Some(path) = configured.filter(|p| !p.trim().is_empty()) {
        return PathBuf::from(path);
    }

    let mut path = std::env::current_exe()
        .ok()
        .and_then(|p| p.parent().map(|p| p.to_path_buf()))
        .unwrap_or_else(|| PathBuf::from("."));

    // Go up from target/release or target/debug to project root
    if path.ends_with("release") || path.ends_with("debug") {
        if let Some(parent) = path.parent() {
            if let Some(grandparent) = parent.parent() {
                path = grandparent.to_path_buf();
            }
        }
    }

    path.push("data");
    path.push(DEFAULT_FEED_FILE);
    path
}
