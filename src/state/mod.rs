//! Widget state machines (pure).
//!
//! All state transitions are pure functions testable without a terminal.

pub mod app_state;
pub mod debounce;
pub mod search_bar;
pub mod timeline;

// Re-export for convenience
pub use app_state::{AppState, DemoSettings, FocusTarget, LabeledBar};
pub use debounce::Debounce;
pub use search_bar::{
    KeyOutcome, NavKey, SearchBar, SearchBarConfig, SearchBarEvent, VisualState,
    DEFAULT_MAX_SUGGESTIONS, DEFAULT_TYPING_DEBOUNCE,
};
pub use timeline::{DefaultExpansion, TimelineRow, TimelineState};
