use crate::api::SearchClient;
use crate::ui::app::{App, UiCommand};
use crate::ui::events::{AppEvent, EventHandler};
use crate::ui::input::handle_key;
use crate::ui::render::draw;
use crate::ui::terminal_guard::setup_terminal;
use std::sync::mpsc::{RecvTimeoutError, Sender};
use std::time::Duration;
use tokio::sync::mpsc::UnboundedReceiver;

/// Runs the TUI until the user quits.
///
/// Network requests run on a tokio runtime; all state lives on the calling
/// thread and only changes in response to events.
pub fn run(mut app: App, client: SearchClient, tick_rate: Duration) -> anyhow::Result<()> {
    let runtime = tokio::runtime::Builder::new_multi_thread()
        .worker_threads(2)
        .thread_name("hackerstories-fetch")
        .enable_all()
        .build()?;

    let events = EventHandler::new(tick_rate);
    let (command_tx, command_rx) = tokio::sync::mpsc::unbounded_channel();
    runtime.spawn(fetch_worker(client, command_rx, events.sender()));
    app.set_command_sender(command_tx);

    let (mut terminal, guard) = setup_terminal()?;
    app.start();

    loop {
        terminal.draw(|frame| draw(frame, &app))?;
        if app.should_quit() {
            break;
        }

        match events.next(tick_rate) {
            Ok(AppEvent::Key(key)) => handle_key(&mut app, key),
            Ok(AppEvent::Tick) | Ok(AppEvent::Resize(..)) => {}
            Ok(AppEvent::StoriesFetched { generation, result }) => {
                app.on_stories_fetched(generation, result);
            }
            Err(RecvTimeoutError::Timeout) => {}
            Err(RecvTimeoutError::Disconnected) => break,
        }
    }

    drop(guard);
    runtime.shutdown_timeout(Duration::from_millis(200));
    Ok(())
}

/// Executes fetch commands until the command channel closes.
///
/// Each request runs in its own task and reports back exactly once, tagged
/// with the generation it was issued under.
pub async fn fetch_worker(
    client: SearchClient,
    mut commands: UnboundedReceiver<UiCommand>,
    events: Sender<AppEvent>,
) {
    while let Some(command) = commands.recv().await {
        match command {
            UiCommand::Fetch(request) => {
                let client = client.clone();
                let events = events.clone();
                tokio::spawn(async move {
                    let result = client.fetch(&request.url).await;
                    let _ = events.send(AppEvent::StoriesFetched {
                        generation: request.generation,
                        result,
                    });
                });
            }
        }
    }
    tracing::debug!("fetch worker stopped");
}
