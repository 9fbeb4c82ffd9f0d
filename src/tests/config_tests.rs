use crate::config::{SiteConfig, DEFAULT_SITE_TITLE};
use crate::error::SiteError;
use log::LevelFilter;
use std::collections::HashMap;

fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let map: HashMap<String, String> = pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    move |key: &str| map.get(key).cloned()
}

#[test]
fn test_defaults() {
    let config = SiteConfig::from_lookup(|_| None).unwrap();
    assert_eq!(config, SiteConfig::default());
    assert_eq!(config.site_title, DEFAULT_SITE_TITLE);
    assert_eq!(config.seasons, vec![1, 2]);
    assert_eq!(config.page_size, 12);
    assert_eq!(config.home_latest, 6);
    assert_eq!(config.level_filter(), LevelFilter::Info);
    assert_eq!(config.season_url(2), "data/season2.json");
}

#[test]
fn test_overrides() {
    let config = SiteConfig::from_lookup(lookup_from(&[
        ("PODCAST_SITE_TITLE", "Test Cast"),
        ("PODCAST_DATA_DIR", "/static/data/"),
        ("PODCAST_SEASONS", "1, 2,3"),
        ("PODCAST_PAGE_SIZE", "9"),
        ("PODCAST_HOME_LATEST", "3"),
        ("PODCAST_LOG_LEVEL", "debug"),
    ]))
    .unwrap();

    assert_eq!(config.site_title, "Test Cast");
    assert_eq!(config.seasons, vec![1, 2, 3]);
    assert_eq!(config.page_size, 9);
    assert_eq!(config.home_latest, 3);
    assert_eq!(config.level_filter(), LevelFilter::Debug);
    assert_eq!(config.season_url(3), "/static/data/season3.json");
}

#[test]
fn test_invalid_values_are_rejected() {
    for pairs in [
        [("PODCAST_SEASONS", "1,two")],
        [("PODCAST_SEASONS", " , ")],
        [("PODCAST_PAGE_SIZE", "0")],
        [("PODCAST_PAGE_SIZE", "many")],
        [("PODCAST_LOG_LEVEL", "loud")],
    ] {
        match SiteConfig::from_lookup(lookup_from(&pairs)) {
            Err(SiteError::Config(_)) => {}
            other => panic!("expected config error for {:?}, got {:?}", pairs, other),
        }
    }
}

#[test]
fn test_empty_data_dir_serves_from_root() {
    let config = SiteConfig::from_lookup(lookup_from(&[("PODCAST_DATA_DIR", "")])).unwrap();
    assert_eq!(config.season_url(1), "season1.json");
}
