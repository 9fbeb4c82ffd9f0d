// src/tests/mod.rs
use crate::components::routes::Route;
use crate::requests::episode_reqs::{EpisodeId, EpisodeRecord};
use yew_router::Routable;

mod config_tests;
mod filter_tests;

pub(crate) fn episode(id: i64, season: u32, number: u32, date: &str, title: &str) -> EpisodeRecord {
    EpisodeRecord {
        id: EpisodeId::Number(id),
        season,
        episode: number,
        date: date.to_string(),
        title: title.to_string(),
        description: format!("Description of {}", title),
        youtube: None,
        spotify: None,
        thumbnail: None,
    }
}

/// Ten records, newest first: six from season 1 and four from season 2,
/// interleaved by date.
pub(crate) fn sample_collection() -> Vec<EpisodeRecord> {
    vec![
        episode(10, 2, 4, "2024-10-01", "Season finale"),
        episode(9, 2, 3, "2024-09-01", "Guests from abroad"),
        episode(6, 1, 6, "2024-08-01", "Summer special"),
        episode(8, 2, 2, "2024-07-01", "Back in the studio"),
        episode(5, 1, 5, "2024-06-01", "Listener questions"),
        episode(7, 2, 1, "2024-05-01", "New season"),
        episode(4, 1, 4, "2024-04-01", "Road trip"),
        episode(3, 1, 3, "2024-03-01", "Cooking at home"),
        episode(2, 1, 2, "2024-02-01", "Second thoughts"),
        episode(1, 1, 1, "2024-01-01", "Pilot Episode"),
    ]
}

pub(crate) fn numbered(count: usize) -> Vec<EpisodeRecord> {
    (1..=count)
        .map(|i| episode(i as i64, 1, i as u32, &format!("2024-01-{:02}", i.min(28)), &format!("Episode {}", i)))
        .collect()
}

#[test]
fn test_route_paths() {
    assert_eq!(Route::Home.to_path(), "/");
    assert_eq!(Route::Episodes.to_path(), "/episodes");
    assert_eq!(Route::Episode.to_path(), "/episode");
}

#[test]
fn test_route_recognition() {
    assert_eq!(Route::recognize("/"), Some(Route::Home));
    assert_eq!(Route::recognize("/episodes"), Some(Route::Episodes));
    assert_eq!(Route::recognize("/episode"), Some(Route::Episode));
    assert_eq!(Route::recognize("/no/such/page"), Some(Route::NotFound));
}

#[test]
fn test_episode_id_matching() {
    assert!(EpisodeId::Number(7).matches("7"));
    assert!(EpisodeId::Number(7).matches(" 7 "));
    assert!(!EpisodeId::Number(7).matches("seven"));
    assert!(EpisodeId::Text("ep-7".to_string()).matches("ep-7"));
    assert!(!EpisodeId::Text("ep-7".to_string()).matches("ep-8"));
    assert_eq!(EpisodeId::Number(12).to_string(), "12");
}
