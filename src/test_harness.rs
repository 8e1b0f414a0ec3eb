//! Test harness for TUI testing
//!
//! Wraps `DemoApp<TestBackend>` with methods for simulating user
//! interactions against the demo page. Time is driven explicitly so typing
//! debounce transitions are deterministic.

use crate::config::keybindings::KeyBindings;
use crate::model::DemoData;
use crate::state::{AppState, DefaultExpansion, DemoSettings, DEFAULT_MAX_SUGGESTIONS, DEFAULT_TYPING_DEBOUNCE};
use crate::view::{ColorConfig, DemoApp, DemoOptions};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use ratatui::Terminal;
use ratatui::backend::TestBackend;
use ratatui::layout::Rect;
use std::time::{Duration, Instant};

/// Convert a ratatui buffer to a string representation for snapshot testing.
///
/// Trailing whitespace is trimmed and blank lines are dropped to keep
/// snapshots compact.
pub fn buffer_to_string(buffer: &ratatui::buffer::Buffer) -> String {
    let area = buffer.area();
    let mut lines = Vec::new();

    for y in area.top()..area.bottom() {
        let mut line = String::new();
        for x in area.left()..area.right() {
            line.push_str(buffer[(x, y)].symbol());
        }
        let trimmed = line.trim_end();
        if !trimmed.is_empty() {
            lines.push(trimmed.to_string());
        }
    }

    lines.join("\n")
}

/// Default demo options with colors off.
pub fn test_options() -> DemoOptions {
    DemoOptions {
        settings: DemoSettings {
            max_suggestions: DEFAULT_MAX_SUGGESTIONS,
            debounce: DEFAULT_TYPING_DEBOUNCE,
            timeline_default: DefaultExpansion::Expanded,
        },
        key_bindings: KeyBindings::default(),
        colors: ColorConfig::new(false),
    }
}

/// Drives a demo app rendered into an in-memory terminal.
pub struct DemoHarness {
    app: DemoApp<TestBackend>,
    now: Instant,
    running: bool,
}

impl DemoHarness {
    /// Demo page with the sample data in a 80x40 terminal.
    pub fn new() -> Self {
        Self::with(DemoData::default(), test_options(), 80, 40)
    }

    pub fn with(data: DemoData, options: DemoOptions, width: u16, height: u16) -> Self {
        let terminal = Terminal::new(TestBackend::new(width, height)).expect("test terminal");
        let mut harness = Self {
            app: DemoApp::new_for_test(terminal, data, options),
            now: Instant::now(),
            running: true,
        };
        harness.render();
        harness
    }

    pub fn state(&self) -> &AppState {
        self.app.app_state()
    }

    pub fn state_mut(&mut self) -> &mut AppState {
        self.app.app_state_mut()
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn press(&mut self, code: KeyCode) {
        self.press_with(code, KeyModifiers::NONE);
    }

    pub fn press_with(&mut self, code: KeyCode, modifiers: KeyModifiers) {
        if self.app.handle_key_test(KeyEvent::new(code, modifiers), self.now) {
            self.running = false;
        }
        self.render();
    }

    pub fn type_str(&mut self, text: &str) {
        for ch in text.chars() {
            self.press(KeyCode::Char(ch));
        }
    }

    /// Move the clock forward and fire due timers.
    pub fn advance(&mut self, by: Duration) {
        self.now += by;
        self.app.app_state_mut().tick(self.now);
        self.render();
    }

    pub fn click(&mut self, column: u16, row: u16) {
        self.app.handle_mouse_test(MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column,
            row,
            modifiers: KeyModifiers::NONE,
        });
        self.render();
    }

    pub fn bar_area(&self, index: usize) -> Rect {
        self.app.bar_area(index).expect("bar was rendered")
    }

    pub fn timeline_area(&self) -> Rect {
        self.app.timeline_area()
    }

    /// Redraw and return the screen contents.
    pub fn render(&mut self) -> String {
        self.app.render_test().expect("render");
        self.screen()
    }

    /// Terminal row whose text contains `needle`.
    pub fn row_of(&self, needle: &str) -> Option<u16> {
        let buffer = self.app.terminal().backend().buffer();
        let area = buffer.area();
        (area.top()..area.bottom()).find(|&y| {
            let line: String = (area.left()..area.right())
                .map(|x| buffer[(x, y)].symbol())
                .collect();
            line.contains(needle)
        })
    }

    pub fn screen(&self) -> String {
        buffer_to_string(self.app.terminal().backend().buffer())
    }
}
