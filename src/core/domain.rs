use std::env;
use serde::{Deserialize, Serialize};
use crate::core::library::SearchMode;

// Identifiable defines common traits that can be shared by catalog records. Ids are only
// present once a record has been appended to a working copy.
pub trait Identifiable: Sync + Send {
    fn id(&self) -> Option<i64>;
    fn with_id(&self, id: i64) -> Self where Self: Sized;
}

// next_id returns max(existing ids, 0) + 1 for the given collection
pub fn next_id<T: Identifiable>(items: &[T]) -> i64 {
    items.iter().filter_map(Identifiable::id).fold(0, i64::max) + 1
}

pub const DEFAULT_SEARCH_URL: &str = "https://www.googleapis.com/books/v1/volumes";

// Configuration abstracts config options for the catalog viewer
#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
pub struct Configuration {
    pub listen_addr: String,
    pub seed_path: Option<String>,
    pub catalog_latency_ms: u64,
    pub search_mode: SearchMode,
    pub search_threshold: usize,
    pub search_url: String,
    pub search_country: String,
    pub search_max_results: u32,
    pub search_timeout_secs: u64,
    pub json_logs: bool,
}

impl Configuration {
    pub fn new() -> Self {
        Configuration {
            listen_addr: "127.0.0.1:3000".to_string(),
            seed_path: None,
            catalog_latency_ms: 500,
            search_mode: SearchMode::Remote,
            search_threshold: 2,
            search_url: DEFAULT_SEARCH_URL.to_string(),
            search_country: "US".to_string(),
            search_max_results: 40,
            search_timeout_secs: 10,
            json_logs: false,
        }
    }

    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    // builds config from BOOKSHELF_* variables, keeping defaults for anything unset or invalid
    pub fn from_lookup<F: Fn(&str) -> Option<String>>(lookup: F) -> Self {
        let mut config = Configuration::new();
        if let Some(addr) = lookup("BOOKSHELF_ADDR") {
            config.listen_addr = addr;
        }
        config.seed_path = lookup("BOOKSHELF_SEED").filter(|path| !path.trim().is_empty());
        if let Some(latency) = parse_var(&lookup, "BOOKSHELF_LATENCY_MS") {
            config.catalog_latency_ms = latency;
        }
        if let Some(mode) = lookup("BOOKSHELF_SEARCH_MODE") {
            config.search_mode = SearchMode::from(mode);
        }
        if let Some(url) = lookup("BOOKSHELF_SEARCH_URL") {
            config.search_url = url;
        }
        if let Some(timeout) = parse_var(&lookup, "BOOKSHELF_SEARCH_TIMEOUT_SECS") {
            config.search_timeout_secs = timeout;
        }
        if let Some(json_logs) = parse_var(&lookup, "BOOKSHELF_JSON_LOGS") {
            config.json_logs = json_logs;
        }
        config
    }
}

impl Default for Configuration {
    fn default() -> Self {
        Self::new()
    }
}

fn parse_var<T: std::str::FromStr, F: Fn(&str) -> Option<String>>(lookup: &F, key: &str) -> Option<T> {
    let raw = lookup(key)?;
    match raw.trim().parse::<T>() {
        Ok(val) => Some(val),
        Err(_) => {
            tracing::warn!(key, value = raw.as_str(), "ignoring invalid configuration value");
            None
        }
    }
}
