//! Small key-value state that survives restarts.
//!
//! - `store.rs` - TOML file of string keys to string values
//! - `value.rs` - one key read at startup and written on every later change

mod store;
mod value;

pub use store::{PersistError, StateStore};
pub use value::SemiPersistentValue;

/// Key under which the last search term is stored.
pub const SEARCH_KEY: &str = "search";
