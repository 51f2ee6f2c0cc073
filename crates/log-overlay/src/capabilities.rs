//! Capability flags for keyboard routing
//!
//! The keyboard middleware asks the console for its current capabilities and
//! routes keys accordingly, e.g. characters go to the search box only while
//! it has focus.

use bitflags::bitflags;

bitflags! {
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct PanelCapabilities: u32 {
        /// Characters are routed to a text input
        const TEXT_INPUT = 1 << 0;

        /// Up/down move a row cursor
        const ITEM_NAVIGATION = 1 << 1;

        /// A context menu is open and takes menu keys
        const CONTEXT_MENU = 1 << 2;

        /// The selected row can be expanded
        const EXPANDABLE = 1 << 3;

        /// The selected row shows its client detail block
        const DETAIL_OPEN = 1 << 4;

        /// History can be paged with prev/next
        const PAGINATION = 1 << 5;
    }
}

impl PanelCapabilities {
    pub fn accepts_text_input(self) -> bool {
        self.contains(Self::TEXT_INPUT)
    }

    pub fn supports_item_navigation(self) -> bool {
        self.contains(Self::ITEM_NAVIGATION)
    }

    pub fn has_context_menu(self) -> bool {
        self.contains(Self::CONTEXT_MENU)
    }

    /// Field copy keys only work on a visible detail block
    pub fn supports_field_copy(self) -> bool {
        self.contains(Self::EXPANDABLE | Self::DETAIL_OPEN)
    }

    pub fn supports_pagination(self) -> bool {
        self.contains(Self::PAGINATION)
    }
}

impl Default for PanelCapabilities {
    fn default() -> Self {
        Self::empty()
    }
}

/// State that can declare its keyboard capabilities
pub trait PanelCapabilityProvider {
    fn capabilities(&self) -> PanelCapabilities;
}
