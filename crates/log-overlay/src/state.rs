//! Application State

use crate::capabilities::{PanelCapabilities, PanelCapabilityProvider};
use log_overlay_config::AppConfig;
use log_overlay_core::{ConsoleState, LevelRegistry, ViewMode};
use log_overlay_theme::Theme;

/// Search box contents as displayed
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchBoxState {
    pub text: String,
    pub focused: bool,
}

/// Application state
#[derive(Debug, Clone)]
pub struct AppState {
    pub running: bool,
    /// View state mirrored from the host
    pub console: ConsoleState,
    pub search: SearchBoxState,
    /// False once the host process closed its output
    pub host_connected: bool,
    pub theme: Theme,
    /// Application configuration
    pub app_config: AppConfig,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(AppConfig::default())
    }
}

impl AppState {
    pub fn new(app_config: AppConfig) -> Self {
        let console = ConsoleState::new(app_config.max_logs, initial_levels(&app_config));
        Self {
            running: true,
            console,
            search: SearchBoxState::default(),
            host_connected: true,
            theme: Theme::default(),
            app_config,
        }
    }
}

/// Level table from the config file, until the host sends its own
fn initial_levels(config: &AppConfig) -> LevelRegistry {
    let mut levels = LevelRegistry::new();
    for (key, level) in &config.levels {
        levels.insert(key, level.label.clone(), level.color.clone());
    }
    levels
}

impl PanelCapabilityProvider for AppState {
    fn capabilities(&self) -> PanelCapabilities {
        if !self.console.visible {
            return PanelCapabilities::empty();
        }
        if self.search.focused {
            return PanelCapabilities::TEXT_INPUT;
        }

        let mut caps = PanelCapabilities::ITEM_NAVIGATION;
        if self.console.interaction.open_menu().is_some() {
            caps |= PanelCapabilities::CONTEXT_MENU;
        }
        if let Some(entry) = self.console.selected_entry() {
            if entry.is_expandable() {
                caps |= PanelCapabilities::EXPANDABLE;
            }
            if self.console.interaction.is_expanded(entry) {
                caps |= PanelCapabilities::DETAIL_OPEN;
            }
        }
        if matches!(self.console.mode, ViewMode::Paged { .. }) {
            caps |= PanelCapabilities::PAGINATION;
        }
        caps
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use log_overlay_config::LevelConfig;
    use log_overlay_core::{ClientInfo, HostPush, LogEntry, Source};

    #[test]
    fn test_initial_levels_from_config() {
        let mut config = AppConfig::default();
        config.levels.insert(
            "warn".into(),
            LevelConfig {
                label: Some("Warning".into()),
                color: Some("yellow".into()),
            },
        );
        let state = AppState::new(config);
        let level = state.console.levels.lookup("WARN");
        assert_eq!(level.label, "Warning");
        assert_eq!(level.color.as_deref(), Some("yellow"));
    }

    #[test]
    fn test_capabilities_follow_focus_and_selection() {
        let mut state = AppState::default();
        assert_eq!(state.capabilities(), PanelCapabilities::ITEM_NAVIGATION);

        state.search.focused = true;
        assert!(state.capabilities().accepts_text_input());
        state.search.focused = false;

        let entry = LogEntry::new("7", "joined")
            .with_source(Source::Client)
            .with_client_info(ClientInfo::default());
        state.console = log_overlay_core::reduce(
            state.console,
            &HostPush::AddLog { log: entry.clone() },
        );
        state.console.interaction.toggle_expanded(&entry);
        state.console.interaction.toggle_menu(entry.id.as_ref());

        let caps = state.capabilities();
        assert!(caps.has_context_menu());
        assert!(caps.supports_field_copy());
        assert!(!caps.supports_pagination());
    }

    #[test]
    fn test_hidden_console_has_no_capabilities() {
        let mut state = AppState::default();
        state.console.visible = false;
        assert_eq!(state.capabilities(), PanelCapabilities::empty());
    }
}
