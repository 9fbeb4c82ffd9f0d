use crate::config::SiteConfig;
use crate::error::{SiteError, SiteResult};
use futures::future::try_join_all;
use gloo_net::http::Request;
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use web_sys::RequestCache;

/// Episode ids arrive either as JSON numbers or strings.
#[derive(Deserialize, Serialize, Debug, PartialEq, Eq, Clone)]
#[serde(untagged)]
pub enum EpisodeId {
    Number(i64),
    Text(String),
}

impl fmt::Display for EpisodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EpisodeId::Number(n) => write!(f, "{}", n),
            EpisodeId::Text(s) => f.write_str(s),
        }
    }
}

impl EpisodeId {
    pub fn matches(&self, raw: &str) -> bool {
        match self {
            EpisodeId::Number(n) => raw.trim().parse::<i64>().map_or(false, |v| v == *n),
            EpisodeId::Text(s) => s == raw,
        }
    }
}

#[derive(Deserialize, Serialize, Debug, PartialEq, Clone)]
pub struct EpisodeRecord {
    pub id: EpisodeId,
    pub season: u32,
    pub episode: u32,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub date: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub title: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub description: String,
    #[serde(default, deserialize_with = "blank_as_none")]
    pub youtube: Option<String>,
    #[serde(default, deserialize_with = "blank_as_none")]
    pub spotify: Option<String>,
    #[serde(default, deserialize_with = "blank_as_none")]
    pub thumbnail: Option<String>,
}

impl EpisodeRecord {
    /// Compact code such as `s2e7`, searchable alongside the text fields.
    pub fn code(&self) -> String {
        format!("s{}e{}", self.season, self.episode)
    }
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

fn blank_as_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<String>::deserialize(deserializer)?;
    Ok(value.filter(|s| !s.trim().is_empty()))
}

pub fn parse_season(season: u32, text: &str) -> SiteResult<Vec<EpisodeRecord>> {
    serde_json::from_str::<Vec<EpisodeRecord>>(text)
        .map_err(|source| SiteError::Parse { season, source })
}

/// Concatenates seasons in the given order, then sorts newest first.
/// `sort_by` is stable, so records sharing a date keep their source order.
pub fn merge_seasons(seasons: Vec<Vec<EpisodeRecord>>) -> Vec<EpisodeRecord> {
    let mut all: Vec<EpisodeRecord> = seasons.into_iter().flatten().collect();
    all.sort_by(|a, b| b.date.cmp(&a.date));
    all
}

pub fn find_episode<'a>(episodes: &'a [EpisodeRecord], id: &str) -> Option<&'a EpisodeRecord> {
    episodes.iter().find(|ep| ep.id.matches(id))
}

pub async fn call_load_season(config: &SiteConfig, season: u32) -> SiteResult<Vec<EpisodeRecord>> {
    let url = config.season_url(season);
    log::debug!("Fetching {}", url);

    let response = Request::get(&url)
        .cache(RequestCache::NoStore)
        .send()
        .await?;

    if !response.ok() {
        return Err(SiteError::Status {
            season,
            status: response.status(),
        });
    }

    let text = response.text().await?;
    parse_season(season, &text)
}

pub async fn call_load_all_episodes(config: &SiteConfig) -> SiteResult<Vec<EpisodeRecord>> {
    let seasons = try_join_all(
        config
            .seasons
            .iter()
            .map(|&season| call_load_season(config, season)),
    )
    .await?;

    let episodes = merge_seasons(seasons);
    log::info!("Loaded {} episodes from {} seasons", episodes.len(), config.seasons.len());
    Ok(episodes)
}

pub async fn call_get_episode_by_id(config: &SiteConfig, id: &str) -> SiteResult<EpisodeRecord> {
    let episodes = call_load_all_episodes(config).await?;
    find_episode(&episodes, id)
        .cloned()
        .ok_or_else(|| SiteError::NotFound(format!("episode {}", id)))
}
