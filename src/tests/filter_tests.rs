use super::{episode, sample_collection};
use crate::components::filters::{available_seasons, filter_episodes, matches_query, SeasonFilter};

#[test]
fn test_season_filter_parsing() {
    assert_eq!("all".parse::<SeasonFilter>(), Ok(SeasonFilter::All));
    assert_eq!("ALL".parse::<SeasonFilter>(), Ok(SeasonFilter::All));
    assert_eq!("2".parse::<SeasonFilter>(), Ok(SeasonFilter::Season(2)));
    assert_eq!(" 3 ".parse::<SeasonFilter>(), Ok(SeasonFilter::Season(3)));
    assert!("two".parse::<SeasonFilter>().is_err());
    assert!("-1".parse::<SeasonFilter>().is_err());
    assert_eq!(SeasonFilter::Season(4).to_string(), "4");
    assert_eq!(SeasonFilter::All.to_string(), "all");
}

#[test]
fn test_selecting_season_two_keeps_relative_order() {
    let all = sample_collection();
    let season_two = filter_episodes(&all, SeasonFilter::Season(2), "");

    let ids: Vec<String> = season_two.iter().map(|ep| ep.id.to_string()).collect();
    assert_eq!(ids, vec!["10", "9", "8", "7"]);
}

#[test]
fn test_all_with_empty_query_returns_everything() {
    let all = sample_collection();
    assert_eq!(filter_episodes(&all, SeasonFilter::All, ""), all);
    assert_eq!(filter_episodes(&all, SeasonFilter::All, "   "), all);
}

#[test]
fn test_query_is_case_insensitive_substring() {
    let all = sample_collection();
    let results = filter_episodes(&all, SeasonFilter::All, "pilot");

    assert_eq!(results.len(), 1);
    assert_eq!(results[0].title, "Pilot Episode");

    let shouted = filter_episodes(&all, SeasonFilter::All, "  PILOT  ");
    assert_eq!(shouted, results);
}

#[test]
fn test_query_searches_description_date_and_code() {
    let mut record = episode(1, 3, 7, "2023-12-24", "Holiday");
    record.description = "A conversation about winter markets".to_string();

    assert!(matches_query(&record, "winter"));
    assert!(matches_query(&record, "2023-12"));
    assert!(matches_query(&record, "s3e7"));
    assert!(matches_query(&record, "S3E7"));
    assert!(!matches_query(&record, "s3e8"));
    assert!(!matches_query(&record, "summer"));
}

#[test]
fn test_filter_is_intersection_of_both_predicates() {
    let all = sample_collection();
    let season = SeasonFilter::Season(1);
    let query = "s";

    let results = filter_episodes(&all, season, query);
    let expected: Vec<_> = all
        .iter()
        .filter(|ep| season.matches(ep) && matches_query(ep, query))
        .cloned()
        .collect();

    assert_eq!(results, expected);
    assert!(results.iter().all(|ep| ep.season == 1));
    assert!(results.iter().all(|ep| all.contains(ep)));
}

#[test]
fn test_season_without_matches_yields_nothing() {
    let all = sample_collection();
    assert!(filter_episodes(&all, SeasonFilter::Season(9), "").is_empty());
    assert!(filter_episodes(&all, SeasonFilter::Season(2), "pilot").is_empty());
}

#[test]
fn test_filtering_is_idempotent() {
    let all = sample_collection();
    for (season, query) in [
        (SeasonFilter::All, ""),
        (SeasonFilter::Season(1), "o"),
        (SeasonFilter::Season(2), "season"),
        (SeasonFilter::All, "2024-0"),
    ] {
        let once = filter_episodes(&all, season, query);
        let twice = filter_episodes(&once, season, query);
        assert_eq!(once, twice);
    }
}

#[test]
fn test_available_seasons_sorted_and_distinct() {
    let all = sample_collection();
    assert_eq!(available_seasons(&all), vec![1, 2]);
    assert!(available_seasons(&[]).is_empty());
}
