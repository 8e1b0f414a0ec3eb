//! Domain-level keyboard actions independent of key bindings.

/// Actions the demo host can perform, mapped from keys by `KeyBindings`.
///
/// These represent user intent, not specific keys. Text entry into a focused
/// search input bypasses this mapping.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyAction {
    // Focus
    /// Move focus to the next widget on the page. Default: Tab
    FocusNext,
    /// Move focus to the previous widget on the page. Default: Shift+Tab
    FocusPrev,

    // Search bar
    /// Activate the search icon (open/close the input). Default: Ctrl+o
    ToggleSearch,
    /// Highlight the next suggestion. Default: ↓
    SuggestionDown,
    /// Highlight the previous suggestion. Default: ↑
    SuggestionUp,
    /// Commit the highlighted suggestion. Default: Enter
    Commit,
    /// Clear the highlight (and close, when configured). Default: Esc
    Dismiss,
    /// Empty the query. Default: Ctrl+u
    ClearQuery,

    // Timeline
    /// Move the timeline cursor down. Default: j
    NextNode,
    /// Move the timeline cursor up. Default: k
    PrevNode,
    /// Expand or collapse the node under the cursor. Default: Space
    ToggleNode,

    // Application
    /// Exit the demo. Default: Ctrl+c / q
    Quit,
}

impl KeyAction {
    /// Parse the action name used in the `[keybindings]` config table.
    pub fn from_config_name(name: &str) -> Option<Self> {
        let action = match name {
            "focus_next" => KeyAction::FocusNext,
            "focus_prev" => KeyAction::FocusPrev,
            "toggle_search" => KeyAction::ToggleSearch,
            "suggestion_down" => KeyAction::SuggestionDown,
            "suggestion_up" => KeyAction::SuggestionUp,
            "commit" => KeyAction::Commit,
            "dismiss" => KeyAction::Dismiss,
            "clear_query" => KeyAction::ClearQuery,
            "next_node" => KeyAction::NextNode,
            "prev_node" => KeyAction::PrevNode,
            "toggle_node" => KeyAction::ToggleNode,
            "quit" => KeyAction::Quit,
            _ => return None,
        };
        Some(action)
    }
}
