use ratatui::{prelude::*, style::palette::tailwind};
use std::str::FromStr;

/// Console theme - centralized color and style management
#[derive(Debug, Clone)]
pub struct Theme {
    // Background colors
    pub bg_primary: Color,
    pub bg_panel: Color,
    pub bg_detail: Color,

    // Text colors
    pub text_primary: Color,
    pub text_secondary: Color,
    pub text_muted: Color,

    // Accent colors
    pub accent_primary: Color,
    pub accent_secondary: Color,

    // Source badges
    pub source_server: Color,
    pub source_client: Color,

    // Action colors (for key hints and menu entries)
    pub action_copy: Color,
    pub action_danger: Color,
    pub action_disabled: Color,

    // Selection colors
    pub selected_bg: Color,
    pub selected_fg: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self::dark()
    }
}

impl Theme {
    /// Dark theme (default)
    pub fn dark() -> Self {
        Self {
            bg_primary: tailwind::SLATE.c950,
            bg_panel: tailwind::SLATE.c900,
            bg_detail: tailwind::SLATE.c800,

            text_primary: tailwind::SLATE.c100,
            text_secondary: tailwind::SLATE.c200,
            text_muted: tailwind::SLATE.c400,

            accent_primary: tailwind::CYAN.c400,
            accent_secondary: tailwind::CYAN.c600,

            source_server: tailwind::INDIGO.c400,
            source_client: tailwind::EMERALD.c400,

            action_copy: tailwind::GREEN.c700,
            action_danger: tailwind::RED.c600,
            action_disabled: tailwind::SLATE.c600,

            selected_bg: tailwind::BLUE.c400,
            selected_fg: Color::White,
        }
    }

    /// Style for panel backgrounds
    pub fn panel_background(&self) -> Style {
        Style::default().bg(self.bg_panel)
    }

    /// Style for panel borders
    pub fn panel_border(&self) -> Style {
        Style::default()
            .fg(self.accent_primary)
            .add_modifier(Modifier::BOLD)
    }

    /// Style for panel titles
    pub fn panel_title(&self) -> Style {
        Style::default()
            .fg(self.accent_primary)
            .add_modifier(Modifier::BOLD)
    }

    /// Style for key hints (e.g., "/" in "/ search")
    pub fn key_hint(&self) -> Style {
        Style::default()
            .fg(self.accent_primary)
            .add_modifier(Modifier::BOLD)
    }

    /// Style for key descriptions
    pub fn key_description(&self) -> Style {
        Style::default().fg(self.text_secondary)
    }

    /// Key hint for an action that is currently unavailable
    pub fn key_hint_disabled(&self) -> Style {
        Style::default()
            .fg(self.action_disabled)
            .add_modifier(Modifier::DIM)
    }

    /// Style for the row under the cursor
    pub fn table_selected(&self) -> Style {
        Style::default()
            .fg(self.selected_fg)
            .bg(self.selected_bg)
            .add_modifier(Modifier::BOLD)
    }

    /// Style for the timestamp column
    pub fn log_metadata(&self) -> Style {
        Style::default().fg(self.text_muted)
    }

    /// Style for the source column
    pub fn source_badge(&self, is_client: bool) -> Style {
        let color = if is_client {
            self.source_client
        } else {
            self.source_server
        };
        Style::default().fg(color).add_modifier(Modifier::BOLD)
    }

    /// Style for the level column.
    ///
    /// Accepts any token ratatui can parse (`red`, `lightblue`, `#ff5555`,
    /// an indexed `42`). Missing or unparsable tokens fall back to plain text.
    pub fn level_style(&self, color: Option<&str>) -> Style {
        let fg = color
            .and_then(|token| Color::from_str(token.trim()).ok())
            .unwrap_or(self.text_primary);
        Style::default().fg(fg).add_modifier(Modifier::BOLD)
    }

    /// Style for the expanded client detail block
    pub fn detail_block(&self) -> Style {
        Style::default().fg(self.text_secondary).bg(self.bg_detail)
    }

    /// Style for context menu entries
    pub fn menu_item(&self, danger: bool) -> Style {
        let color = if danger {
            self.action_danger
        } else {
            self.action_copy
        };
        Style::default().fg(Color::White).bg(color)
    }

    /// Style for muted/helper text
    pub fn muted(&self) -> Style {
        Style::default().fg(self.text_muted)
    }

    /// Style for primary text
    pub fn text(&self) -> Style {
        Style::default().fg(self.text_primary)
    }
}
