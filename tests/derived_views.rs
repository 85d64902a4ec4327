mod common;

use common::{search_url, story, story_one, story_two};
use hackerstories::derived::{extract_search_term, get_last_searches, sort_list, sum_comments, SortKey};
use hackerstories::ui::stories::StoriesState;

#[test]
fn sum_comments_over_stories() {
    let state = StoriesState {
        data: vec![story_one(), story_two()],
        ..StoriesState::default()
    };
    assert_eq!(sum_comments(&state), 5);
    assert_eq!(sum_comments(&StoriesState::default()), 0);
}

#[test]
fn history_of_empty_log_is_empty() {
    let urls: [&str; 0] = [];
    assert!(get_last_searches(&urls).is_empty());
}

#[test]
fn history_collapses_pagination_and_drops_current() {
    let urls = vec![
        search_url("react", 0),
        search_url("react", 1),
        search_url("redux", 0),
        search_url("redux", 1),
        search_url("redux", 2),
        search_url("vue", 0),
    ];
    assert_eq!(get_last_searches(&urls), vec!["react", "redux"]);
}

#[test]
fn history_accepts_suffix_urls() {
    let urls = ["?query=react", "?query=redux", "?query=vue"];
    assert_eq!(get_last_searches(&urls), vec!["react", "redux"]);
}

#[test]
fn history_round_trips_encoded_terms() {
    let urls = vec![search_url("c++ tips", 0), search_url("rust & go", 0)];
    assert_eq!(get_last_searches(&urls), vec!["c++ tips"]);
    assert_eq!(extract_search_term(&urls[1]), "rust & go");
}

#[test]
fn points_sort_is_descending_and_stable() {
    let list = vec![
        story("a", "A", "x", 0, 5),
        story("b", "B", "x", 0, 9),
        story("c", "C", "x", 0, 5),
        story("d", "D", "x", 0, 1),
    ];
    let sorted = sort_list(&list, SortKey::Points, false);
    let ids: Vec<&str> = sorted.iter().map(|s| s.object_id.as_str()).collect();
    assert_eq!(ids, vec!["b", "a", "c", "d"]);

    let mut reversed = sort_list(&list, SortKey::Points, true);
    reversed.reverse();
    assert_eq!(reversed, sorted);
}

#[test]
fn sort_does_not_touch_input() {
    let list = vec![story_two(), story_one()];
    let _ = sort_list(&list, SortKey::Title, false);
    assert_eq!(list, vec![story_two(), story_one()]);
}

#[test]
fn resorting_is_idempotent() {
    let list = vec![
        story("a", "Same", "x", 1, 1),
        story("b", "Same", "y", 1, 1),
        story("c", "Other", "z", 1, 1),
    ];
    let once = sort_list(&list, SortKey::Title, false);
    let twice = sort_list(&once, SortKey::Title, false);
    assert_eq!(once, twice);
}
