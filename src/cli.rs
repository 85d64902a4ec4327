use std::path::PathBuf;

use clap::Parser;

use crate::config::Config;

/// Search Hacker News stories from the terminal.
#[derive(Debug, Parser)]
#[command(name = "hackerstories", version, about)]
pub struct Cli {
    /// Search for this term on startup instead of the remembered one
    #[arg(short, long, value_name = "TERM")]
    pub query: Option<String>,

    /// Path to the config file (default: platform config dir)
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Number of stories fetched per page
    #[arg(long, value_name = "N")]
    pub hits_per_page: Option<u32>,

    /// Do not remember the search term between runs
    #[arg(long)]
    pub no_persist: bool,
}

impl Cli {
    pub fn config_path(&self) -> PathBuf {
        self.config.clone().unwrap_or_else(Config::config_path)
    }

    /// Apply command line overrides on top of the loaded config.
    pub fn apply(&self, config: &mut Config) {
        if let Some(hits_per_page) = self.hits_per_page {
            config.api.hits_per_page = hits_per_page;
        }
        if self.no_persist {
            config.search.persist = false;
        }
    }
}
