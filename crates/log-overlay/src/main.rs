use anyhow::Context;
use ratatui::{
    backend::CrosstermBackend,
    crossterm::{
        event::{self, Event, KeyEventKind},
        execute,
        terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
    },
    Terminal,
};
use std::io;
use std::sync::mpsc::{self, Receiver, Sender};
use std::sync::{Arc, RwLock};
use std::time::Duration;

mod actions;
mod background;
mod capabilities;
mod clipboard;
mod dispatcher;
mod host;
mod logger;
mod middleware;
mod reducer;
mod state;
mod view_models;
mod views;

use actions::{Action, GlobalAction};
use background::SharedState;
use dispatcher::Dispatcher;
use log_overlay_config::AppConfig;
use log_overlay_core::HostChannel;
use middleware::{
    clipboard::ClipboardMiddleware, host::HostMiddleware, keyboard::KeyboardMiddleware,
    logging::LoggingMiddleware, search::SearchMiddleware, Middleware,
};
use state::AppState;

/// How long the render loop waits for terminal input
const INPUT_POLL: Duration = Duration::from_millis(16);

fn main() -> anyhow::Result<()> {
    let log_file = logger::init()?;
    log::info!("Starting log-overlay (logging to {})", log_file.display());

    // Command-line arguments override the configured host command
    let app_config = AppConfig::load().with_host_command(std::env::args().skip(1).collect());

    let (action_tx, action_rx) = mpsc::channel::<Action>();
    let (result_tx, result_rx) = mpsc::channel::<Action>();

    let host = connect_host(&app_config, Dispatcher::new(action_tx.clone()))?;
    let middleware: Vec<Box<dyn Middleware>> = vec![
        Box::new(LoggingMiddleware::new()),
        Box::new(KeyboardMiddleware::new()),
        Box::new(SearchMiddleware::new(Duration::from_millis(
            app_config.search_debounce_ms,
        ))),
        Box::new(ClipboardMiddleware::new(clipboard::default_clipboard())),
        Box::new(HostMiddleware::new(host)),
    ];

    let tick_rate = Duration::from_millis(app_config.tick_rate_ms);
    let state = AppState::new(app_config);
    let shared: SharedState = Arc::new(RwLock::new(state.clone()));
    let worker = background::spawn_background_worker(
        action_rx,
        action_tx.clone(),
        result_tx,
        Arc::clone(&shared),
        middleware,
        tick_rate,
    );

    // Setup terminal
    enable_raw_mode().context("Failed to enable raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen).context("Failed to enter alternate screen")?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend).context("Failed to create terminal")?;

    let result = run_app(&mut terminal, state, &shared, &action_tx, &result_rx);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    // Stop the worker; it drops the middleware and with it the host process
    if action_tx.send(Action::Global(GlobalAction::Quit)).is_err() {
        log::debug!("Background worker already stopped");
    }
    if worker.join().is_err() {
        log::error!("Background worker panicked");
    }

    if let Err(err) = &result {
        log::error!("Exiting with error: {:#}", err);
    }
    log::info!("Exiting log-overlay");
    result
}

/// Spawn the configured host, or run detached without one
fn connect_host(
    config: &AppConfig,
    dispatcher: Dispatcher,
) -> anyhow::Result<Box<dyn HostChannel>> {
    if config.host_command.is_empty() {
        log::info!("No host command configured, running detached");
        return Ok(Box::new(host::DetachedHost));
    }
    let host = host::ProcessHost::spawn(&config.host_command, dispatcher)?;
    Ok(Box::new(host))
}

fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    mut state: AppState,
    shared: &SharedState,
    action_tx: &Sender<Action>,
    result_rx: &Receiver<Action>,
) -> anyhow::Result<()> {
    loop {
        terminal.draw(|frame| {
            let area = frame.area();
            views::render(&state, area, frame);
        })?;

        if event::poll(INPUT_POLL)? {
            if let Event::Key(key) = event::read()? {
                // Only process key press events (ignore key release)
                if key.kind == KeyEventKind::Press {
                    action_tx
                        .send(Action::Global(GlobalAction::KeyPressed(key)))
                        .context("Background worker stopped")?;
                }
            }
        }

        // Reduce everything the middleware chain let through
        let mut changed = false;
        for action in result_rx.try_iter() {
            state = reducer::reduce(state, &action);
            changed = true;
        }
        if changed {
            match shared.write() {
                Ok(mut shared) => *shared = state.clone(),
                Err(e) => log::error!("Failed to update shared state: {}", e),
            }
        }

        if !state.running {
            break;
        }
    }

    Ok(())
}
