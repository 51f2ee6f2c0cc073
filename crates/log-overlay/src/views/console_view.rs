use crate::state::AppState;
use crate::view_models::{ConsoleViewModel, FooterModel, LogRowModel};
use log_overlay_core::Source;
use log_overlay_theme::Theme;
use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
    Frame,
};

/// Render search box, log list and footer. Returns the list area.
pub fn render(state: &AppState, area: Rect, f: &mut Frame) -> Rect {
    let theme = &state.theme;
    let vm = ConsoleViewModel::new(state);

    let [search_area, list_area, footer_area] = Layout::vertical([
        Constraint::Length(3),
        Constraint::Min(3),
        Constraint::Length(1),
    ])
    .areas(area);

    render_search(state, &vm, theme, search_area, f);
    render_list(&vm, theme, list_area, f);
    render_footer(&vm.footer(), theme, footer_area, f);

    list_area
}

fn render_search(
    state: &AppState,
    vm: &ConsoleViewModel,
    theme: &Theme,
    area: Rect,
    f: &mut Frame,
) {
    let border = if state.search.focused {
        theme.panel_border()
    } else {
        theme.muted()
    };
    let block = Block::default()
        .title(" Search (/) ")
        .borders(Borders::ALL)
        .border_style(border)
        .title_style(theme.panel_title());
    let paragraph = Paragraph::new(Span::styled(vm.search_text(), theme.text())).block(block);
    f.render_widget(paragraph, area);
}

fn render_list(vm: &ConsoleViewModel, theme: &Theme, area: Rect, f: &mut Frame) {
    let block = Block::default()
        .title(vm.title())
        .borders(Borders::ALL)
        .border_style(theme.panel_border())
        .title_style(theme.panel_title());

    let rows = vm.rows();
    let items: Vec<ListItem> = rows.iter().map(|row| row_item(row, theme)).collect();
    let list = List::new(items)
        .block(block)
        .style(theme.panel_background())
        .highlight_style(theme.table_selected())
        .highlight_symbol("▶ ");

    let mut list_state = ListState::default().with_selected(vm.selected_index());
    f.render_stateful_widget(list, area, &mut list_state);
}

fn row_item<'a>(row: &'a LogRowModel, theme: &Theme) -> ListItem<'a> {
    let marker = if row.menu_open {
        Span::styled(row.marker(), theme.key_hint())
    } else {
        Span::raw(row.marker())
    };
    let mut lines = vec![Line::from(vec![
        marker,
        Span::styled(row.time.as_str(), theme.log_metadata()),
        Span::raw(" "),
        Span::styled(
            format!("{:<7}", row.level_label),
            theme.level_style(row.level_color.as_deref()),
        ),
        Span::raw(" "),
        Span::styled(
            format!("{:<6}", row.source.as_str()),
            theme.source_badge(row.source == Source::Client),
        ),
        Span::raw(" "),
        Span::styled(row.message.as_str(), theme.text()),
    ])];

    if let Some(details) = &row.details {
        for detail in details {
            lines.push(Line::from(vec![
                Span::raw("      "),
                Span::styled(format!("[{}] ", detail.key), theme.key_hint()),
                Span::styled(format!("{:<11}", detail.label), theme.muted()),
                Span::styled(detail.value.as_str(), theme.detail_block()),
            ]));
        }
    }
    ListItem::new(lines)
}

fn render_footer(footer: &FooterModel, theme: &Theme, area: Rect, f: &mut Frame) {
    let hint = |key: &'static str, label: &'static str, enabled: bool| -> [Span<'static>; 2] {
        let key_style = if enabled {
            theme.key_hint()
        } else {
            theme.key_hint_disabled()
        };
        let label_style = if enabled {
            theme.key_description()
        } else {
            theme.key_hint_disabled()
        };
        [
            Span::styled(format!(" {} ", key), key_style),
            Span::styled(format!("{}  ", label), label_style),
        ]
    };

    let mut spans = vec![Span::styled(format!(" {}  ", footer.text), theme.text())];
    if footer.show_paging {
        spans.extend(hint("←", "prev", footer.prev_enabled));
        spans.extend(hint("→", "next", footer.next_enabled));
    }
    if footer.show_resume_live {
        spans.extend(hint("L", "live", true));
    }
    spans.extend(hint("↵", "menu", true));
    spans.extend(hint("esc", "close", true));

    f.render_widget(
        Paragraph::new(Line::from(spans)).style(Style::default().bg(theme.bg_primary)),
        area,
    );
}
