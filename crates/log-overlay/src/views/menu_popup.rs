use crate::state::AppState;
use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

const MENU_WIDTH: u16 = 22;
const MENU_HEIGHT: u16 = 4;

/// Context menu of the selected row, anchored to the right of the list
pub fn render(state: &AppState, list_area: Rect, f: &mut Frame) {
    if state.console.interaction.open_menu().is_none() {
        return;
    }
    let theme = &state.theme;

    // Row offset inside the list, ignoring scroll and expanded rows above
    let row = state.console.interaction.selected() as u16;
    let inner_top = list_area.y.saturating_add(1);
    let max_y = list_area.bottom().saturating_sub(MENU_HEIGHT);
    let y = inner_top.saturating_add(row).saturating_add(1).min(max_y);
    let x = list_area.right().saturating_sub(MENU_WIDTH + 2).max(list_area.x);
    let area =
        Rect::new(x, y, MENU_WIDTH.min(list_area.width), MENU_HEIGHT).intersection(list_area);

    let lines = vec![
        Line::from(vec![
            Span::styled(" c ", theme.menu_item(false)),
            Span::styled(" Copy row", theme.text()),
        ]),
        Line::from(vec![
            Span::styled(" d ", theme.menu_item(true)),
            Span::styled(" Delete", theme.text()),
        ]),
    ];
    let block = Block::default()
        .title(" Actions ")
        .borders(Borders::ALL)
        .border_style(theme.panel_border())
        .title_style(theme.panel_title());

    f.render_widget(Clear, area);
    f.render_widget(
        Paragraph::new(lines)
            .block(block)
            .style(theme.panel_background()),
        area,
    );
}
