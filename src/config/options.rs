// src/config/options.rs
use std::path::PathBuf;
use std::time::Duration;

use tracing::warn;

use super::consts::*;
use crate::source::DataSource;

/// Everything the front ends need to know before the first frame.
/// Built from defaults, then the environment, then (CLI only) flags.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AppOptions {
    pub dataset: DataSource,
    pub stats_url: String,
    pub detail_base_url: String,
    pub page_size: usize,
    pub stats_interval: Duration,
    pub log_dir: PathBuf,
    pub last_updated: String,
    /// Override values that were refused, kept until logging is up
    pub rejected: Vec<String>,
}

impl Default for AppOptions {
    fn default() -> Self {
        Self {
            dataset: DataSource::parse(DEFAULT_DATASET),
            stats_url: STATS_URL.to_string(),
            detail_base_url: DETAIL_BASE_URL.to_string(),
            page_size: PAGE_SIZE,
            stats_interval: Duration::from_secs(STATS_POLL_SECS),
            log_dir: PathBuf::from(STORE_DIR),
            last_updated: LAST_UPDATED.to_string(),
            rejected: Vec::new(),
        }
    }
}

impl AppOptions {
    /// Defaults overridden by process environment (and `.env`, if present).
    pub fn from_env() -> Self {
        dotenv::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as `from_env`, but reads variables through `lookup`.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut opts = Self::default();
        let get = |key: &str| lookup(key).map(|v| v.trim().to_string()).filter(|v| !v.is_empty());

        if let Some(v) = get(ENV_DATASET) {
            opts.dataset = DataSource::parse(&v);
        }
        if let Some(v) = get(ENV_STATS_URL) {
            opts.stats_url = v;
        }
        if let Some(v) = get(ENV_DETAIL_URL) {
            opts.detail_base_url = v;
        }
        if let Some(v) = get(ENV_PAGE_SIZE) {
            opts.set_page_size_text(&v);
        }
        if let Some(v) = get(ENV_LOG_DIR) {
            opts.log_dir = PathBuf::from(v);
        }
        opts
    }

    /// Accepts a positive integer; anything else keeps the current value
    /// and is noted in `rejected`.
    pub fn set_page_size_text(&mut self, text: &str) {
        match text.trim().parse::<usize>() {
            Ok(n) if n > 0 => self.page_size = n,
            _ => self
                .rejected
                .push(format!("ignoring invalid page size {:?}, keeping {}", text, self.page_size)),
        }
    }

    /// Emit the refused overrides. Call once the subscriber is installed.
    pub fn log_rejected(&self) {
        for msg in &self.rejected {
            warn!("Config: {msg}");
        }
    }
}
