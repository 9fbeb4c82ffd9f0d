use crate::requests::episode_reqs::EpisodeRecord;
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SeasonFilter {
    #[default]
    All,
    Season(u32),
}

impl SeasonFilter {
    pub fn matches(&self, episode: &EpisodeRecord) -> bool {
        match self {
            SeasonFilter::All => true,
            SeasonFilter::Season(season) => episode.season == *season,
        }
    }
}

impl FromStr for SeasonFilter {
    type Err = String;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let raw = raw.trim();
        if raw.eq_ignore_ascii_case("all") {
            return Ok(SeasonFilter::All);
        }
        raw.parse::<u32>()
            .map(SeasonFilter::Season)
            .map_err(|_| format!("invalid season filter '{}'", raw))
    }
}

impl fmt::Display for SeasonFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SeasonFilter::All => f.write_str("all"),
            SeasonFilter::Season(season) => write!(f, "{}", season),
        }
    }
}

pub fn matches_query(episode: &EpisodeRecord, query: &str) -> bool {
    let needle = query.trim().to_lowercase();
    if needle.is_empty() {
        return true;
    }

    let haystack = format!(
        "{} {} {} {}",
        episode.title,
        episode.description,
        episode.date,
        episode.code()
    )
    .to_lowercase();

    haystack.contains(&needle)
}

/// Narrows the full collection to the records passing both the season and
/// text predicates. Always starts from `all`, never from a previous result.
pub fn filter_episodes(
    all: &[EpisodeRecord],
    season: SeasonFilter,
    query: &str,
) -> Vec<EpisodeRecord> {
    all.iter()
        .filter(|episode| season.matches(episode) && matches_query(episode, query))
        .cloned()
        .collect()
}

pub fn available_seasons(all: &[EpisodeRecord]) -> Vec<u32> {
    let mut seasons: Vec<u32> = all.iter().map(|ep| ep.season).collect();
    seasons.sort_unstable();
    seasons.dedup();
    seasons
}
