use crate::ui::mvi::Reducer;

use super::intent::SortIntent;
use super::state::SortState;

pub struct SortReducer;

impl Reducer for SortReducer {
    type State = SortState;
    type Intent = SortIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            SortIntent::Select(key) => SortState {
                key,
                is_reverse: state.key == key && !state.is_reverse,
            },
            SortIntent::Reset => SortState::default(),
        }
    }
}
