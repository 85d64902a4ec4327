//! State for the story list.

use crate::api::Story;
use crate::ui::mvi::UiState;

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct StoriesState {
    pub data: Vec<Story>,
    pub page: u32,
    pub is_loading: bool,
    pub is_error: bool,
}

impl UiState for StoriesState {}

impl StoriesState {
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}
