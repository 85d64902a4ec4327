//! Reducer for the story list.

use std::collections::HashSet;

use crate::api::Story;
use crate::ui::mvi::Reducer;

use super::intent::StoriesIntent;
use super::state::StoriesState;

/// Story list state transitions.
///
/// Issuing requests and discarding stale responses is the caller's job; this
/// reducer applies each intent as if it were the latest.
pub struct StoriesReducer;

impl Reducer for StoriesReducer {
    type State = StoriesState;
    type Intent = StoriesIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            StoriesIntent::FetchInit => StoriesState {
                is_loading: true,
                is_error: false,
                ..state
            },

            StoriesIntent::FetchSuccess { list, page } => {
                let data = if page == 0 {
                    list
                } else {
                    append_unique(state.data, list)
                };
                StoriesState {
                    data,
                    page,
                    is_loading: false,
                    is_error: false,
                }
            }

            StoriesIntent::FetchFailure => StoriesState {
                is_loading: false,
                is_error: true,
                ..state
            },

            StoriesIntent::RemoveStory { story } => {
                let mut data = state.data;
                data.retain(|item| item.object_id != story.object_id);
                StoriesState { data, ..state }
            }

            StoriesIntent::NextPage => StoriesState {
                page: state.page.saturating_add(1),
                ..state
            },
        }
    }
}

/// Appends `more` to `data`, skipping hits already present.
///
/// Results can shift between page requests, so a story seen on page N may
/// come back on page N+1.
fn append_unique(mut data: Vec<Story>, more: Vec<Story>) -> Vec<Story> {
    let mut seen: HashSet<String> = data.iter().map(|s| s.object_id.clone()).collect();
    data.reserve(more.len());
    for story in more {
        if seen.insert(story.object_id.clone()) {
            data.push(story);
        }
    }
    data
}
