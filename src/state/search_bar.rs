//! Search bar state machine (pure state transitions).
//!
//! A [`SearchBar`] owns the open/closed flag, the query text, the highlighted
//! suggestion and the transient typing flag. Handlers take `&mut self`,
//! never fail, and return the event the host should dispatch.
//!
//! Time enters only through explicit `Instant` arguments so the typing
//! debounce is deterministic under test.

use crate::model::{filter_suggestions, InstanceId, Suggestion};
use crate::state::debounce::Debounce;
use std::time::{Duration, Instant};
use tracing::trace;

/// Default cap on rendered matches.
pub const DEFAULT_MAX_SUGGESTIONS: usize = 5;

/// Quiet period after the last keystroke before `is_typing` clears.
pub const DEFAULT_TYPING_DEBOUNCE: Duration = Duration::from_millis(300);

// ===== SearchBarConfig =====

/// Behavioral configuration of a search bar. All options have defaults.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchBarConfig {
    /// Input is permanently visible; icon activation does nothing.
    pub always_open: bool,
    /// Show the suggestion dropdown.
    pub auto_complete: bool,
    /// Candidates for the dropdown, in display order.
    pub suggestions: Vec<Suggestion>,
    /// Longest dropdown; `0` means the default.
    pub max_suggestions: usize,
    /// Selecting a suggestion empties the query instead of filling it.
    pub clear_on_select: bool,
    /// Selecting a suggestion closes the input.
    pub close_on_select: bool,
    /// Escape closes the input as well as clearing the highlight.
    pub close_on_escape: bool,
    /// Hint shown while the query is empty.
    pub placeholder: String,
    /// Quiet period after the last edit before typing ends.
    pub debounce: Duration,
}

impl Default for SearchBarConfig {
    fn default() -> Self {
        Self {
            always_open: false,
            auto_complete: false,
            suggestions: Vec::new(),
            max_suggestions: DEFAULT_MAX_SUGGESTIONS,
            clear_on_select: false,
            close_on_select: false,
            close_on_escape: false,
            placeholder: String::new(),
            debounce: DEFAULT_TYPING_DEBOUNCE,
        }
    }
}

impl SearchBarConfig {
    /// Keep the input open.
    pub fn always_open(mut self) -> Self {
        self.always_open = true;
        self
    }

    /// Enable the dropdown over the given suggestions.
    pub fn auto_complete(mut self, suggestions: Vec<Suggestion>) -> Self {
        self.auto_complete = true;
        self.suggestions = suggestions;
        self
    }

    /// Cap the dropdown at `max` rows.
    pub fn max_suggestions(mut self, max: usize) -> Self {
        self.max_suggestions = max;
        self
    }

    /// Empty the query after a selection.
    pub fn clear_on_select(mut self) -> Self {
        self.clear_on_select = true;
        self
    }

    /// Close the input after a selection.
    pub fn close_on_select(mut self) -> Self {
        self.close_on_select = true;
        self
    }

    /// Let Escape close the input.
    pub fn close_on_escape(mut self) -> Self {
        self.close_on_escape = true;
        self
    }

    /// Set the empty-query hint.
    pub fn placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = placeholder.into();
        self
    }

    /// Set the typing debounce.
    pub fn debounce(mut self, debounce: Duration) -> Self {
        self.debounce = debounce;
        self
    }
}

// ===== Events =====

/// Event reported to the host application.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchBarEvent {
    /// The raw query text changed.
    Changed(String),
    /// A suggestion value was committed.
    Selected(String),
}

/// Navigation keys understood by the suggestion list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavKey {
    /// Highlight the previous suggestion.
    Up,
    /// Highlight the next suggestion.
    Down,
    /// Commit the highlighted suggestion.
    Enter,
    /// Clear the highlight.
    Escape,
}

/// Result of a navigation key press.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct KeyOutcome {
    /// The search bar acted on the key.
    pub handled: bool,
    /// The host input must not apply its own behavior (caret movement).
    pub prevent_default: bool,
    /// Event produced by the key, if any.
    pub event: Option<SearchBarEvent>,
}

impl KeyOutcome {
    fn ignored() -> Self {
        Self::default()
    }

    fn handled() -> Self {
        Self {
            handled: true,
            ..Self::default()
        }
    }
}

/// Cosmetic state derived for rendering.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VisualState {
    /// Pulse scale: shrinks while typing, grows while open.
    pub scale: f32,
    /// The icon turns while the input is open.
    pub icon_rotated: bool,
    /// The dropdown is attached below the input.
    pub dropdown_visible: bool,
    /// Input box drops its bottom rounding while the dropdown is attached.
    pub rounded_bottom: bool,
}

// ===== SearchBar =====

/// One search bar instance and its local state.
#[derive(Debug)]
pub struct SearchBar {
    id: InstanceId,
    config: SearchBarConfig,
    is_open: bool,
    query: String,
    /// Cursor position in chars.
    cursor: usize,
    selected_index: Option<usize>,
    is_typing: bool,
    input_focused: bool,
    typing: Debounce,
}

impl SearchBar {
    /// A bar with a fresh instance id, open when `always_open` is set.
    pub fn new(config: SearchBarConfig) -> Self {
        let is_open = config.always_open;
        let typing = Debounce::new(config.debounce);
        Self {
            id: InstanceId::next(),
            config,
            is_open,
            query: String::new(),
            cursor: 0,
            selected_index: None,
            is_typing: false,
            input_focused: is_open,
            typing,
        }
    }

    /// Identity of this instance.
    pub fn id(&self) -> InstanceId {
        self.id
    }

    /// Configuration the bar was built with.
    pub fn config(&self) -> &SearchBarConfig {
        &self.config
    }

    /// Whether the input is shown.
    pub fn is_open(&self) -> bool {
        self.is_open
    }

    /// Current query text.
    pub fn query(&self) -> &str {
        &self.query
    }

    /// Cursor position in chars.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Highlighted row of the filtered list.
    pub fn selected_index(&self) -> Option<usize> {
        self.selected_index
    }

    /// True until the typing debounce settles.
    pub fn is_typing(&self) -> bool {
        self.is_typing
    }

    /// Whether the input holds focus.
    pub fn input_focused(&self) -> bool {
        self.input_focused
    }

    /// Deadline of the pending "typing stopped" transition.
    pub fn typing_deadline(&self) -> Option<Instant> {
        self.typing.deadline()
    }

    /// Suggestions matching the current query, capped at `max_suggestions`.
    pub fn filtered_suggestions(&self) -> Vec<&Suggestion> {
        filter_suggestions(
            &self.config.suggestions,
            &self.query,
            self.config.max_suggestions,
        )
    }

    /// Whether the dropdown is shown.
    pub fn show_suggestions(&self) -> bool {
        self.config.auto_complete
            && self.is_open
            && !self.query.is_empty()
            && !self.filtered_suggestions().is_empty()
    }

    /// Cosmetic flags for the current state.
    pub fn visual_state(&self) -> VisualState {
        let dropdown_visible = self.show_suggestions();
        let scale = if self.is_typing {
            0.99
        } else if self.is_open {
            1.01
        } else {
            1.0
        };
        VisualState {
            scale,
            icon_rotated: self.is_open,
            dropdown_visible,
            rounded_bottom: !dropdown_visible,
        }
    }

    /// Icon activation. No-op when always open; opening keeps the query.
    pub fn toggle(&mut self) {
        if self.config.always_open {
            return;
        }
        self.is_open = !self.is_open;
        self.input_focused = self.is_open;
        trace!(id = %self.id, open = self.is_open, "search bar toggled");
    }

    /// Replace the query text, as the host input does on every change.
    pub fn input(&mut self, text: impl Into<String>, now: Instant) -> SearchBarEvent {
        self.query = text.into();
        self.cursor = self.query.chars().count();
        self.selected_index = None;
        self.is_typing = true;
        self.typing.restart(now);
        SearchBarEvent::Changed(self.query.clone())
    }

    /// Insert a character at the cursor.
    pub fn insert_char(&mut self, ch: char, now: Instant) -> SearchBarEvent {
        let at = self.byte_offset(self.cursor);
        let mut text = self.query.clone();
        text.insert(at, ch);
        let cursor = self.cursor + 1;
        let event = self.input(text, now);
        self.cursor = cursor;
        event
    }

    /// Delete the character before the cursor. `None` when nothing changed.
    pub fn backspace(&mut self, now: Instant) -> Option<SearchBarEvent> {
        if self.cursor == 0 {
            return None;
        }
        let at = self.byte_offset(self.cursor - 1);
        let mut text = self.query.clone();
        text.remove(at);
        let cursor = self.cursor - 1;
        let event = self.input(text, now);
        self.cursor = cursor;
        Some(event)
    }

    /// Move the cursor one char left, saturating at 0.
    pub fn cursor_left(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    /// Move the cursor one char right, saturating at the query length.
    pub fn cursor_right(&mut self) {
        self.cursor = (self.cursor + 1).min(self.query.chars().count());
    }

    /// Keyboard navigation over the filtered list.
    ///
    /// Ignored while the input is closed or no suggestion matches. Arrow
    /// keys wrap in both directions and request that the host suppress
    /// caret movement.
    pub fn handle_key(&mut self, key: NavKey) -> KeyOutcome {
        if !self.is_open {
            return KeyOutcome::ignored();
        }
        let len = self.filtered_suggestions().len();
        if len == 0 {
            return KeyOutcome::ignored();
        }

        match key {
            NavKey::Down => {
                self.selected_index = Some(match self.selected_index {
                    Some(i) => (i + 1) % len,
                    None => 0,
                });
                KeyOutcome {
                    handled: true,
                    prevent_default: true,
                    event: None,
                }
            }
            NavKey::Up => {
                self.selected_index = Some(match self.selected_index {
                    Some(i) => (i + len - 1) % len,
                    None => len - 1,
                });
                KeyOutcome {
                    handled: true,
                    prevent_default: true,
                    event: None,
                }
            }
            NavKey::Enter => match self.selected_index {
                Some(i) => KeyOutcome {
                    handled: true,
                    prevent_default: false,
                    event: self.select_index(i),
                },
                None => KeyOutcome::ignored(),
            },
            NavKey::Escape => {
                self.selected_index = None;
                if self.config.close_on_escape && !self.config.always_open {
                    self.is_open = false;
                    self.input_focused = false;
                }
                KeyOutcome::handled()
            }
        }
    }

    /// Commit the filtered suggestion at `index` (click or Enter).
    pub fn select_index(&mut self, index: usize) -> Option<SearchBarEvent> {
        let value = self.filtered_suggestions().get(index)?.value.clone();
        Some(self.select(value))
    }

    /// Commit a suggestion value.
    pub fn select(&mut self, value: impl Into<String>) -> SearchBarEvent {
        let value = value.into();
        self.query = if self.config.clear_on_select {
            String::new()
        } else {
            value.clone()
        };
        self.cursor = self.query.chars().count();
        self.selected_index = None;
        if self.config.close_on_select && !self.config.always_open {
            self.is_open = false;
            self.input_focused = false;
        }
        trace!(id = %self.id, value = %value, "suggestion selected");
        SearchBarEvent::Selected(value)
    }

    /// Explicit clear control: empty the query and focus the input.
    pub fn clear(&mut self) -> SearchBarEvent {
        self.query.clear();
        self.cursor = 0;
        self.selected_index = None;
        self.input_focused = true;
        SearchBarEvent::Changed(String::new())
    }

    /// Replace the suggestion source list.
    pub fn set_suggestions(&mut self, suggestions: Vec<Suggestion>) {
        self.config.suggestions = suggestions;
        self.selected_index = None;
    }

    /// Advance the typing debounce. Returns `true` when `is_typing` cleared.
    pub fn tick(&mut self, now: Instant) -> bool {
        if self.typing.poll(now) {
            self.is_typing = false;
            true
        } else {
            false
        }
    }

    /// Cancel pending timers before the instance is discarded.
    pub fn teardown(&mut self) {
        self.typing.cancel();
    }

    fn byte_offset(&self, char_index: usize) -> usize {
        self.query
            .char_indices()
            .nth(char_index)
            .map(|(i, _)| i)
            .unwrap_or(self.query.len())
    }
}

impl Drop for SearchBar {
    fn drop(&mut self) {
        self.teardown();
    }
}

// ===== Tests =====

#[cfg(test)]
#[path = "search_bar_tests.rs"]
mod tests;
