// tests/options.rs
use std::collections::HashMap;
use std::path::PathBuf;
use std::time::Duration;

use magang_katalog::config::AppOptions;
use magang_katalog::config::consts::{DETAIL_BASE_URL, PAGE_SIZE, STATS_URL};
use magang_katalog::source::DataSource;

fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let map: HashMap<String, String> =
        pairs.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect();
    move |k| map.get(k).cloned()
}

#[test]
fn defaults_without_environment() {
    let o = AppOptions::from_lookup(lookup(&[]));
    assert_eq!(o, AppOptions::default());
    assert_eq!(o.page_size, 21);
    assert_eq!(o.stats_interval, Duration::from_secs(60));
    assert_eq!(o.stats_url, STATS_URL);
    assert_eq!(o.detail_base_url, DETAIL_BASE_URL);
    assert_eq!(o.dataset, DataSource::File(PathBuf::from("data/vacancies-aktif.json")));
}

#[test]
fn environment_overrides_apply() {
    let o = AppOptions::from_lookup(lookup(&[
        ("CATALOG_DATASET", "https://example.org/vacancies.json"),
        ("CATALOG_STATS_URL", "http://localhost:9000/stats"),
        ("CATALOG_DETAIL_URL", "http://localhost:9000/view/"),
        ("CATALOG_PAGE_SIZE", "9"),
        ("CATALOG_LOG_DIR", "/tmp/katalog-logs"),
    ]));
    assert_eq!(o.dataset, DataSource::Url("https://example.org/vacancies.json".into()));
    assert_eq!(o.stats_url, "http://localhost:9000/stats");
    assert_eq!(o.detail_base_url, "http://localhost:9000/view/");
    assert_eq!(o.page_size, 9);
    assert_eq!(o.log_dir, PathBuf::from("/tmp/katalog-logs"));
}

#[test]
fn blank_or_invalid_values_are_ignored() {
    let o = AppOptions::from_lookup(lookup(&[
        ("CATALOG_DATASET", "   "),
        ("CATALOG_PAGE_SIZE", "lots"),
    ]));
    assert_eq!(o.dataset, AppOptions::default().dataset);
    assert_eq!(o.page_size, PAGE_SIZE);
    // held back for the log, which is not up yet when options are read
    assert_eq!(o.rejected.len(), 1);
    assert!(o.rejected[0].contains("\"lots\""));
}
