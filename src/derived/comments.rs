use crate::ui::stories::StoriesState;

/// Total comment count over the stories currently held.
pub fn sum_comments(state: &StoriesState) -> u64 {
    state
        .data
        .iter()
        .map(|story| u64::from(story.num_comments))
        .sum()
}
