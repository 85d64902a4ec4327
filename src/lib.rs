//! Terminal Hacker News search client.
//!
//! - [`ui::stories`] - story list reducer (fetch lifecycle, removal, paging)
//! - [`derived`] - comment sum, recent searches, sorted view
//! - [`api`] - search endpoint client
//! - [`ui::app`] - session host tying intents, fetches and persistence together

pub mod api;
pub mod cli;
pub mod config;
pub mod derived;
pub mod logging;
pub mod persist;
pub mod ui;
