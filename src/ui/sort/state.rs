use crate::api::Story;
use crate::derived::{sort_list, SortKey};
use crate::ui::mvi::UiState;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SortState {
    pub key: SortKey,
    pub is_reverse: bool,
}

impl UiState for SortState {}

impl SortState {
    pub fn apply(&self, list: &[Story]) -> Vec<Story> {
        sort_list(list, self.key, self.is_reverse)
    }

    /// Whether the rendered column shows largest-first.
    ///
    /// Numeric columns start descending, so reversing them shows ascending.
    pub fn shows_descending(&self) -> bool {
        self.key.is_descending() != self.is_reverse
    }
}
