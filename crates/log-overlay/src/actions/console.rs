//! Console actions
//!
//! Some of these only touch UI-local state and end up in the reducer.
//! The rest are intents that middleware turns into host requests or
//! clipboard writes and consumes.

use log_overlay_core::ClientField;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConsoleAction {
    // Row cursor
    SelectNext,
    SelectPrevious,
    SelectFirst,
    SelectLast,

    // Local interaction
    /// Open or close the context menu of the selected row
    ToggleMenu,
    /// Close any open context menu
    CloseMenus,
    /// Show or hide the client detail block of the selected row
    ToggleExpand,

    // Clipboard
    /// Copy the row whose menu is open
    MenuCopy,
    /// Copy one client detail value of the selected row
    CopyField(ClientField),

    // Host intents
    /// Delete the row whose menu is open
    MenuDelete,
    PagePrev,
    PageNext,
    ResumeLive,
    /// Ask the host to hide the console
    Close,
    /// Debounced search query is due
    SubmitSearch(String),
    /// Search box was emptied
    ClearSearch,
    /// A client detail value was copied
    NotifyCopied,
}
