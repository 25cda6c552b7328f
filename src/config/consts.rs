// src/config/consts.rs

// Data sources
pub const DEFAULT_DATASET: &str = "data/vacancies-aktif.json";
pub const STATS_URL: &str = "https://maganghub.kemnaker.go.id/be/v1/api/statistik_front_page";
pub const DETAIL_BASE_URL: &str = "https://maganghub.kemnaker.go.id/lowongan/view/";

// Header label; the dataset carries no timestamp of its own
pub const LAST_UPDATED: &str = "2025/10/10 20.22";

// Net
pub const HTTP_TIMEOUT_SECS: u64 = 15;
pub const USER_AGENT: &str = concat!("magang_katalog/", env!("CARGO_PKG_VERSION"));

// Local log dir
pub const STORE_DIR: &str = ".store";
pub const LOG_FILE: &str = "debug.log";

// View
pub const PAGE_SIZE: usize = 21;
pub const STATS_POLL_SECS: u64 = 60;
pub const CLOCK_TICK_MS: u64 = 1_000;
pub const DESCRIPTION_MAX_CHARS: usize = 160;
pub const MAX_PROGRAM_BADGES: usize = 4;

// Environment overrides
pub const ENV_DATASET: &str = "CATALOG_DATASET";
pub const ENV_STATS_URL: &str = "CATALOG_STATS_URL";
pub const ENV_DETAIL_URL: &str = "CATALOG_DETAIL_URL";
pub const ENV_PAGE_SIZE: &str = "CATALOG_PAGE_SIZE";
pub const ENV_LOG_DIR: &str = "CATALOG_LOG_DIR";
