use chrono::NaiveDate;
use url::Url;

pub fn format_date(date_str: &str) -> String {
    NaiveDate::parse_from_str(date_str.trim(), "%Y-%m-%d")
        .map(|date| date.format("%d.%m.%Y").to_string())
        .unwrap_or_else(|_| date_str.to_string())
}

/// Escapes untrusted text for use in element content or a quoted attribute.
pub fn escape(text: &str) -> String {
    ammonia::clean_text(text)
}

// Accepts scheme-less links such as `youtu.be/abc` as well.
fn parse_loose(raw: &str) -> Option<Url> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }
    Url::parse(raw)
        .or_else(|_| Url::parse(&format!("https://{}", raw)))
        .ok()
}

fn path_segments(url: &Url) -> Vec<String> {
    url.path_segments()
        .map(|segments| {
            segments
                .filter(|s| !s.is_empty())
                .map(str::to_string)
                .collect()
        })
        .unwrap_or_default()
}

fn segment_after(segments: &[String], marker: &str) -> Option<String> {
    segments
        .iter()
        .position(|s| s == marker)
        .and_then(|pos| segments.get(pos + 1))
        .cloned()
}

/// Video id from a YouTube link: `v=` parameter, then a `youtu.be` short
/// link, then an `/embed/` path. Empty when nothing matches.
pub fn youtube_id(raw: &str) -> String {
    let Some(url) = parse_loose(raw) else {
        return String::new();
    };

    if let Some((_, id)) = url.query_pairs().find(|(key, value)| key == "v" && !value.is_empty()) {
        return id.into_owned();
    }

    let segments = path_segments(&url);
    let is_short_link = url
        .host_str()
        .map_or(false, |host| host.trim_start_matches("www.") == "youtu.be");
    if is_short_link {
        if let Some(first) = segments.first() {
            return first.clone();
        }
    }

    segment_after(&segments, "embed").unwrap_or_default()
}

pub fn spotify_id(raw: &str) -> String {
    parse_loose(raw)
        .and_then(|url| segment_after(&path_segments(&url), "episode"))
        .unwrap_or_default()
}

pub fn youtube_thumbnail(video_id: &str) -> String {
    format!("https://img.youtube.com/vi/{}/hqdefault.jpg", video_id)
}

pub fn episode_href(id: &str) -> String {
    format!("/episode?id={}", urlencoding::encode(id))
}

/// Reads the `id` parameter from a location query string, with or without
/// the leading `?`.
pub fn episode_id_from_query(query: &str) -> Option<String> {
    url::form_urlencoded::parse(query.trim_start_matches('?').as_bytes())
        .find(|(key, _)| key == "id")
        .map(|(_, value)| value.trim().to_string())
        .filter(|value| !value.is_empty())
}
