//! Background worker thread that processes actions through middleware
//!
//! - Main thread handles rendering, user input and reducing
//! - Background thread runs the middleware chain (host i/o, clipboard, debounce)
//! - Communication happens via channels
//!
//! Actions dispatched by middleware via Dispatcher re-enter the middleware chain.

use crate::actions::{Action, GlobalAction};
use crate::dispatcher::Dispatcher;
use crate::middleware::Middleware;
use crate::state::AppState;
use std::sync::mpsc::{Receiver, RecvTimeoutError, Sender};
use std::sync::{Arc, RwLock};
use std::thread;
use std::time::{Duration, Instant};

/// Shared state that background can read (main thread writes via reducer)
pub type SharedState = Arc<RwLock<AppState>>;

/// Spawn the background worker thread
///
/// - `action_rx`: receives actions from main thread, host reader and Dispatcher (re-entry)
/// - `action_tx`: used to create Dispatcher for middleware to dispatch actions that re-enter
/// - `result_tx`: sends actions to main thread for the reducer (non-consumed actions)
/// - `state`: shared state for middleware to read
/// - `middleware`: the middleware chain
/// - `tick_rate`: interval of `Tick` actions fed through the chain
pub fn spawn_background_worker(
    action_rx: Receiver<Action>,
    action_tx: Sender<Action>,
    result_tx: Sender<Action>,
    state: SharedState,
    middleware: Vec<Box<dyn Middleware>>,
    tick_rate: Duration,
) -> thread::JoinHandle<()> {
    thread::spawn(move || {
        background_loop(action_rx, action_tx, result_tx, state, middleware, tick_rate);
    })
}

fn background_loop(
    action_rx: Receiver<Action>,
    action_tx: Sender<Action>,
    result_tx: Sender<Action>,
    state: SharedState,
    mut middleware: Vec<Box<dyn Middleware>>,
    tick_rate: Duration,
) {
    log::info!("Background worker started");

    let dispatcher = Dispatcher::new(action_tx);
    let mut last_tick = Instant::now();

    loop {
        let timeout = tick_rate.saturating_sub(last_tick.elapsed());
        let action = match action_rx.recv_timeout(timeout) {
            Ok(action) => Some(action),
            Err(RecvTimeoutError::Timeout) => None,
            Err(RecvTimeoutError::Disconnected) => {
                log::info!("Action channel disconnected, shutting down");
                break;
            }
        };

        if let Some(action) = action {
            if matches!(action, Action::Global(GlobalAction::Quit)) {
                log::info!("Background worker received shutdown signal");
                if result_tx.send(action).is_err() {
                    log::error!("Failed to send quit action to main thread");
                }
                break;
            }

            if !process(action, &state, &mut middleware, &dispatcher, &result_tx) {
                log::error!("Result channel disconnected, shutting down");
                break;
            }
        }

        // Ticks run through the chain too, the search debounce is polled on them
        if last_tick.elapsed() >= tick_rate {
            last_tick = Instant::now();
            let tick = Action::Global(GlobalAction::Tick);
            if !process(tick, &state, &mut middleware, &dispatcher, &result_tx) {
                log::error!("Result channel disconnected during tick");
                break;
            }
        }
    }

    log::info!("Background worker stopped");
}

/// Run one action through the chain and forward it unless consumed.
///
/// Returns false when the main thread is gone.
fn process(
    action: Action,
    state: &SharedState,
    middleware: &mut [Box<dyn Middleware>],
    dispatcher: &Dispatcher,
    result_tx: &Sender<Action>,
) -> bool {
    let current_state = match state.read() {
        Ok(s) => s.clone(),
        Err(e) => {
            log::error!("Failed to read shared state: {}", e);
            return true;
        }
    };

    let should_forward = middleware
        .iter_mut()
        .all(|mw| mw.handle(&action, &current_state, dispatcher));

    // Ticks are only for middleware, the reducer has nothing to do with them
    if should_forward && !action.is_tick() {
        return result_tx.send(action).is_ok();
    }
    true
}
