//! Story list feature module.
//!
//! Tracks the fetched stories together with the fetch lifecycle and the
//! current page of the active query.
//!
//! - `state.rs` - `StoriesState` (data, page, loading/error flags)
//! - `intent.rs` - fetch lifecycle, removal and page advance
//! - `reducer.rs` - state transitions (pure, no side effects)

mod intent;
mod reducer;
mod state;

pub use intent::StoriesIntent;
pub use reducer::StoriesReducer;
pub use state::StoriesState;
