use crate::error::{SiteError, SiteResult};
use log::LevelFilter;
use serde::{Deserialize, Serialize};

pub const DEFAULT_SITE_TITLE: &str = "Мој Подкаст";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SiteConfig {
    pub site_title: String,
    /// Directory the season files are served from, relative to the site root.
    pub data_dir: String,
    pub seasons: Vec<u32>,
    pub page_size: usize,
    pub home_latest: usize,
    /// Pages shown on each side of the current page in the page strip.
    pub page_window: usize,
    pub log_level: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            site_title: DEFAULT_SITE_TITLE.to_string(),
            data_dir: "data".to_string(),
            seasons: vec![1, 2],
            page_size: 12,
            home_latest: 6,
            page_window: 2,
            log_level: "info".to_string(),
        }
    }
}

impl SiteConfig {
    /// Builds the config from values baked in at compile time.
    pub fn from_env() -> SiteResult<Self> {
        Self::from_lookup(|key| {
            let value = match key {
                "PODCAST_SITE_TITLE" => option_env!("PODCAST_SITE_TITLE"),
                "PODCAST_DATA_DIR" => option_env!("PODCAST_DATA_DIR"),
                "PODCAST_SEASONS" => option_env!("PODCAST_SEASONS"),
                "PODCAST_PAGE_SIZE" => option_env!("PODCAST_PAGE_SIZE"),
                "PODCAST_HOME_LATEST" => option_env!("PODCAST_HOME_LATEST"),
                "PODCAST_LOG_LEVEL" => option_env!("PODCAST_LOG_LEVEL"),
                _ => None,
            };
            value.map(str::to_string)
        })
    }

    pub fn from_lookup<F>(lookup: F) -> SiteResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = SiteConfig::default();

        if let Some(title) = lookup("PODCAST_SITE_TITLE") {
            config.site_title = title;
        }

        if let Some(dir) = lookup("PODCAST_DATA_DIR") {
            config.data_dir = dir.trim_end_matches('/').to_string();
        }

        if let Some(seasons) = lookup("PODCAST_SEASONS") {
            config.seasons = parse_seasons(&seasons)?;
        }

        if let Some(size) = lookup("PODCAST_PAGE_SIZE") {
            config.page_size = parse_positive("PODCAST_PAGE_SIZE", &size)?;
        }

        if let Some(latest) = lookup("PODCAST_HOME_LATEST") {
            config.home_latest = parse_positive("PODCAST_HOME_LATEST", &latest)?;
        }

        if let Some(level) = lookup("PODCAST_LOG_LEVEL") {
            config.log_level = level;
        }

        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> SiteResult<()> {
        if self.seasons.is_empty() {
            return Err(SiteError::Config("at least one season must be configured".to_string()));
        }
        if self.page_size == 0 {
            return Err(SiteError::Config("page size must be positive".to_string()));
        }
        if self.log_level.parse::<LevelFilter>().is_err() {
            return Err(SiteError::Config(format!("unknown log level '{}'", self.log_level)));
        }
        Ok(())
    }

    pub fn level_filter(&self) -> LevelFilter {
        self.log_level.parse().unwrap_or(LevelFilter::Info)
    }

    pub fn season_url(&self, season: u32) -> String {
        if self.data_dir.is_empty() {
            format!("season{}.json", season)
        } else {
            format!("{}/season{}.json", self.data_dir, season)
        }
    }
}

fn parse_seasons(raw: &str) -> SiteResult<Vec<u32>> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(|s| {
            s.parse::<u32>()
                .map_err(|_| SiteError::Config(format!("invalid season number '{}' in PODCAST_SEASONS", s)))
        })
        .collect()
}

fn parse_positive(name: &str, raw: &str) -> SiteResult<usize> {
    match raw.trim().parse::<usize>() {
        Ok(value) if value > 0 => Ok(value),
        _ => Err(SiteError::Config(format!("{} must be a positive integer, got '{}'", name, raw))),
    }
}
