//! Global actions - not tied to the log list or the search box

use ratatui::crossterm::event::KeyEvent;

#[derive(Debug, Clone)]
pub enum GlobalAction {
    /// Raw key pressed (before translation)
    KeyPressed(KeyEvent),
    /// Quit the application
    Quit,
    /// Periodic tick, drives the search debounce
    Tick,
    /// The host process closed its output
    HostDisconnected,
}
