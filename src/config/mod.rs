mod loader;
mod types;

pub use loader::{ConfigError, MAX_HITS_PER_PAGE};
pub use types::{ApiConfig, Config, SearchConfig, UiConfig};
