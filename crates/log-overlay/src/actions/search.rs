//! Search box actions

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchAction {
    /// Give the search box keyboard focus
    Focus,
    /// Return keyboard focus to the log list, keeping the text
    Blur,
    /// Character typed into the search box
    Char(char),
    /// Remove last character
    Backspace,
    /// Clear entire line (Ctrl+U)
    ClearLine,
    /// Text after an edit, mirrored into state for rendering
    TextChanged(String),
}
