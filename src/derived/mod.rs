//! Values derived from view state on every render.
//!
//! Nothing here is cached: each helper is a pure function of its inputs, so
//! the rendered view is always a function of the current state and URL log.

mod comments;
mod history;
mod sort;

pub use comments::sum_comments;
pub use history::{extract_search_term, get_last_searches, LAST_SEARCHES_WINDOW};
pub use sort::{sort_list, SortKey};
