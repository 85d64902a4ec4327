//! Shared test fixtures.

#![allow(dead_code, unused_imports)]

pub mod mock_upstream;

use hackerstories::api::{SearchEndpoint, SearchPage, Story};
use hackerstories::persist::SemiPersistentValue;
use hackerstories::ui::app::{App, FetchRequest, UiCommand};
use tokio::sync::mpsc;

pub const BASE_URL: &str = "https://hn.algolia.com/api/v1/search";

pub fn story(id: &str, title: &str, author: &str, num_comments: u32, points: u32) -> Story {
    Story {
        object_id: id.to_string(),
        url: format!("https://example.com/{}", id),
        title: title.to_string(),
        author: author.to_string(),
        num_comments,
        points,
    }
}

pub fn story_one() -> Story {
    story("0", "React", "Jordan Walke", 3, 4)
}

pub fn story_two() -> Story {
    story("1", "Redux", "Dan Abramov, Andrew Clark", 2, 5)
}

pub fn page(hits: Vec<Story>, page: u32, nb_pages: u32) -> SearchPage {
    SearchPage {
        hits,
        page,
        nb_pages,
    }
}

pub fn search_url(term: &str, page: u32) -> String {
    SearchEndpoint::new(BASE_URL, 50).unwrap().url(term, page)
}

/// App wired to a command channel, with an in-memory search term.
pub fn test_app(initial_term: &str) -> (App, mpsc::UnboundedReceiver<UiCommand>) {
    let endpoint = SearchEndpoint::new(BASE_URL, 50).unwrap();
    let term = SemiPersistentValue::ephemeral("search", initial_term);
    let mut app = App::new(endpoint, term);
    let (tx, rx) = mpsc::unbounded_channel();
    app.set_command_sender(tx);
    (app, rx)
}

/// Next fetch command the app sent, if any.
pub fn next_fetch(rx: &mut mpsc::UnboundedReceiver<UiCommand>) -> Option<FetchRequest> {
    match rx.try_recv() {
        Ok(UiCommand::Fetch(request)) => Some(request),
        Err(_) => None,
    }
}
