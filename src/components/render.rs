//! Markup builders for episode records.
//!
//! Everything here is a pure function returning an HTML string; every
//! record field is escaped on the way in. Components mount the output with
//! `Html::from_html_unchecked`.

use crate::components::gen_funcs::{
    episode_href, escape, format_date, spotify_id, youtube_id, youtube_thumbnail,
};
use crate::requests::episode_reqs::EpisodeRecord;

pub const PLACEHOLDER_THUMBNAIL: &str = "data:image/svg+xml,%3Csvg xmlns=%22http://www.w3.org/2000/svg%22 width=%22800%22 height=%22450%22%3E%3Crect width=%22800%22 height=%22450%22 fill=%22%232a2a2a%22/%3E%3Ctext x=%2250%25%22 y=%2250%25%22 font-size=%2224%22 fill=%22%236b6b6b%22 text-anchor=%22middle%22 dy=%22.3em%22%3ENo Thumbnail%3C/text%3E%3C/svg%3E";

pub const NO_RESULTS_MESSAGE: &str = "Нема пронајдени епизоди.";
pub const NO_EPISODES_MESSAGE: &str = "Сè уште нема објавени епизоди. Следете не за ажурирања!";
pub const NO_DESCRIPTION: &str = "Нема опис.";
pub const NO_DESCRIPTION_DETAIL: &str = "Нема опис за оваа епизода.";

pub fn thumbnail_url(episode: &EpisodeRecord) -> String {
    if let Some(thumbnail) = &episode.thumbnail {
        return thumbnail.clone();
    }

    let video_id = episode.youtube.as_deref().map(youtube_id).unwrap_or_default();
    if video_id.is_empty() {
        PLACEHOLDER_THUMBNAIL.to_string()
    } else {
        youtube_thumbnail(&video_id)
    }
}

fn thumbnail_img(episode: &EpisodeRecord, class: &str) -> String {
    format!(
        r#"<img src="{src}" alt="{alt}" class="{class}" loading="lazy" onerror="this.onerror=null;this.src='{placeholder}'">"#,
        src = escape(&thumbnail_url(episode)),
        alt = escape(&episode.title),
        class = class,
        placeholder = PLACEHOLDER_THUMBNAIL,
    )
}

fn description_or<'a>(episode: &'a EpisodeRecord, fallback: &'a str) -> &'a str {
    if episode.description.trim().is_empty() {
        fallback
    } else {
        &episode.description
    }
}

fn long_badge(episode: &EpisodeRecord) -> String {
    format!("Сезона {} • EP {}", episode.season, episode.episode)
}

pub fn episode_card(episode: &EpisodeRecord) -> String {
    format!(
        r#"<a href="{href}" class="episode-card">{img}<div class="episode-card-content"><div class="episode-card-header"><span class="season-badge">S{season}E{number}</span><span class="episode-date">{date}</span></div><h3 class="episode-card-title">{title}</h3><p class="episode-card-description">{description}</p></div></a>"#,
        href = escape(&episode_href(&episode.id.to_string())),
        img = thumbnail_img(episode, "episode-card-thumbnail"),
        season = episode.season,
        number = episode.episode,
        date = escape(&format_date(&episode.date)),
        title = escape(&episode.title),
        description = escape(description_or(episode, NO_DESCRIPTION)),
    )
}

/// Cards for every record, or the no-results message for an empty slice.
pub fn episode_grid(episodes: &[EpisodeRecord]) -> String {
    if episodes.is_empty() {
        return format!(r#"<p class="no-results">{}</p>"#, NO_RESULTS_MESSAGE);
    }
    episodes.iter().map(episode_card).collect()
}

pub fn latest_episode(episode: &EpisodeRecord) -> String {
    format!(
        r#"{img}<div class="latest-episode-content"><div class="episode-card-header"><span class="season-badge">{badge}</span><span class="episode-date">{date}</span></div><h3 class="latest-episode-title">{title}</h3><p class="latest-episode-description">{description}</p><a href="{href}" class="btn">Слушај сега →</a></div>"#,
        img = thumbnail_img(episode, "latest-episode-thumbnail"),
        badge = long_badge(episode),
        date = escape(&format_date(&episode.date)),
        title = escape(&episode.title),
        description = escape(description_or(episode, NO_DESCRIPTION)),
        href = escape(&episode_href(&episode.id.to_string())),
    )
}

pub fn empty_state() -> String {
    format!(r#"<div class="no-results"><p>{}</p></div>"#, NO_EPISODES_MESSAGE)
}

pub fn youtube_embed(video_id: &str) -> String {
    format!(
        r#"<div class="embed-container"><iframe src="https://www.youtube.com/embed/{}" allowfullscreen allow="accelerometer; autoplay; clipboard-write; encrypted-media; gyroscope; picture-in-picture"></iframe></div>"#,
        escape(video_id)
    )
}

pub fn spotify_embed(episode_id: &str) -> String {
    format!(
        r#"<div class="embed-container"><iframe src="https://open.spotify.com/embed/episode/{}" allowfullscreen allow="autoplay; clipboard-write; encrypted-media; fullscreen; picture-in-picture"></iframe></div>"#,
        escape(episode_id)
    )
}

pub fn embeds(episode: &EpisodeRecord) -> String {
    let mut html = String::new();

    let video_id = episode.youtube.as_deref().map(youtube_id).unwrap_or_default();
    if !video_id.is_empty() {
        html.push_str(&youtube_embed(&video_id));
    }

    let spotify = episode.spotify.as_deref().map(spotify_id).unwrap_or_default();
    if !spotify.is_empty() {
        html.push_str(&spotify_embed(&spotify));
    }

    html
}

pub fn episode_detail(episode: &EpisodeRecord) -> String {
    format!(
        r#"<div class="episode-detail-header"><div class="episode-detail-meta"><span class="season-badge">{badge}</span><span class="episode-date">{date}</span></div><h1 class="episode-detail-title">{title}</h1></div>{embeds}<div class="episode-detail-description"><h3>За епизодата</h3><p>{description}</p></div>"#,
        badge = long_badge(episode),
        date = escape(&format_date(&episode.date)),
        title = escape(&episode.title),
        embeds = embeds(episode),
        description = escape(description_or(episode, NO_DESCRIPTION_DETAIL)),
    )
}

pub fn page_title(episode: &EpisodeRecord, site_title: &str) -> String {
    format!("{} - {}", episode.title, site_title)
}

/// Featured latest episode and the grid of the newest `latest` episodes.
/// An empty collection yields the empty-state message and an empty grid.
pub fn home_sections(episodes: &[EpisodeRecord], latest: usize) -> (String, String) {
    match episodes.first() {
        None => (empty_state(), String::new()),
        Some(newest) => {
            let count = latest.min(episodes.len());
            (latest_episode(newest), episode_grid(&episodes[..count]))
        }
    }
}
