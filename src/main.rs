use std::sync::Arc;
use std::time::Duration;

use anyhow::Context;
use clap::Parser;

use hackerstories::api::{SearchClient, SearchEndpoint};
use hackerstories::cli::Cli;
use hackerstories::config::Config;
use hackerstories::logging::init_tracing;
use hackerstories::persist::{SemiPersistentValue, StateStore, SEARCH_KEY};
use hackerstories::ui::app::App;
use hackerstories::ui::runtime;

fn main() {
    let cli = Cli::parse();
    init_tracing();

    if let Err(err) = run(cli) {
        eprintln!("Error: {:#}", err);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let mut config = Config::load_from(&cli.config_path())?;
    cli.apply(&mut config);
    config.validate()?;

    let endpoint = SearchEndpoint::from_config(&config.api)?;
    let client = SearchClient::new(&config.api).context("creating search client")?;

    let store = if config.search.persist {
        match StateStore::open(StateStore::default_path()) {
            Ok(store) => Some(Arc::new(store)),
            Err(err) => {
                tracing::warn!(error = %err, "search term will not be remembered");
                None
            }
        }
    } else {
        None
    };

    let mut search_term = SemiPersistentValue::new(store, SEARCH_KEY, &config.search.default_term);
    if let Some(query) = cli.query.as_deref().filter(|q| !q.is_empty()) {
        search_term.set(query);
    }

    tracing::info!(term = search_term.get(), "starting");
    let app = App::new(endpoint, search_term);
    runtime::run(app, client, Duration::from_millis(config.ui.tick_rate_ms))
}
