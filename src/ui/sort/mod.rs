//! Sort feature module: which column orders the story list, and in which
//! direction.

mod intent;
mod reducer;
mod state;

pub use intent::SortIntent;
pub use reducer::SortReducer;
pub use state::SortState;
