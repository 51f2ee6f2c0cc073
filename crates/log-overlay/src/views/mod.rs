use crate::state::AppState;
use ratatui::{layout::Rect, Frame};

pub mod console_view;
pub mod hidden_view;
pub mod menu_popup;

/// Render the entire application UI
///
/// The host decides whether the console is shown. While hidden, state keeps
/// evolving and only a placeholder screen is drawn.
pub fn render(state: &AppState, area: Rect, f: &mut Frame) {
    if !state.console.visible {
        hidden_view::render(state, area, f);
        return;
    }
    let list_area = console_view::render(state, area, f);
    menu_popup::render(state, list_area, f);
}
