//! Intents for the story list.

use crate::api::Story;
use crate::ui::mvi::Intent;

#[derive(Debug, Clone, PartialEq)]
pub enum StoriesIntent {
    /// A request is about to be issued.
    FetchInit,

    /// A request settled with a page of results.
    ///
    /// Page 0 starts a new query and replaces the list; any other page is
    /// more of the same query and is appended.
    FetchSuccess { list: Vec<Story>, page: u32 },

    /// A request failed. Previously fetched stories stay visible.
    FetchFailure,

    /// User dismissed a story. Matched by `object_id`.
    RemoveStory { story: Story },

    /// Advance to the next page. Does not fetch anything by itself.
    NextPage,
}

impl Intent for StoriesIntent {}
