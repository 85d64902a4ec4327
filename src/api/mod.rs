//! Client side of the upstream search API.

mod client;
mod endpoint;
mod error;
mod types;

pub use client::SearchClient;
pub use endpoint::SearchEndpoint;
pub use error::FetchError;
pub use types::{SearchPage, Story};
