use crate::state::AppState;
use ratatui::{
    layout::{Alignment, Constraint, Flex, Layout, Rect},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Shown while the host keeps the console hidden
pub fn render(state: &AppState, area: Rect, f: &mut Frame) {
    let theme = &state.theme;
    let [line_area] = Layout::vertical([Constraint::Length(1)])
        .flex(Flex::Center)
        .areas(area);

    let line = Line::from(vec![
        Span::styled("Console hidden by host · ", theme.muted()),
        Span::styled("q", theme.key_hint()),
        Span::styled(" quit", theme.key_description()),
    ]);
    f.render_widget(Paragraph::new(line).alignment(Alignment::Center), line_area);
}
