//! Keyboard bindings configuration.

use crate::model::key_action::KeyAction;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::collections::HashMap;
use thiserror::Error;

/// A `[keybindings]` entry that could not be applied.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum KeyBindingError {
    /// The `[keybindings]` key names no known action.
    #[error("Unknown action in keybindings: {0}")]
    UnknownAction(String),

    /// The key string does not parse.
    #[error("Invalid key {key:?} for action {action}")]
    InvalidKey {
        /// Action the key was bound to.
        action: String,
        /// Key string as written.
        key: String,
    },
}

/// Maps keyboard events to domain actions.
///
/// Provides default bindings with option to override via configuration.
#[derive(Debug, Clone)]
pub struct KeyBindings {
    bindings: HashMap<KeyEvent, KeyAction>,
}

impl KeyBindings {
    /// Look up the action for a key event.
    pub fn get(&self, key: KeyEvent) -> Option<KeyAction> {
        // Shift is implied by uppercase chars; normalize so 'G' matches either way.
        let normalized = match key.code {
            KeyCode::Char(c) if c.is_ascii_uppercase() => {
                KeyEvent::new(key.code, key.modifiers | KeyModifiers::SHIFT)
            }
            _ => KeyEvent::new(key.code, key.modifiers),
        };
        self.bindings.get(&normalized).copied()
    }

    /// Bind `key` to `action`, replacing any previous binding of that key.
    pub fn bind(&mut self, key: KeyEvent, action: KeyAction) {
        self.bindings.insert(key, action);
    }

    /// Apply overrides from the config table (`action = "key"`).
    ///
    /// Entries are applied in order; the first invalid entry aborts.
    pub fn with_overrides<'a, I>(mut self, overrides: I) -> Result<Self, KeyBindingError>
    where
        I: IntoIterator<Item = (&'a str, &'a str)>,
    {
        for (action_name, key_spec) in overrides {
            let action = KeyAction::from_config_name(action_name)
                .ok_or_else(|| KeyBindingError::UnknownAction(action_name.to_string()))?;
            let key = parse_key(key_spec).ok_or_else(|| KeyBindingError::InvalidKey {
                action: action_name.to_string(),
                key: key_spec.to_string(),
            })?;
            self.bind(key, action);
        }
        Ok(self)
    }
}

/// Parse a key description such as `"ctrl+o"`, `"down"`, `"shift+tab"` or `"j"`.
pub fn parse_key(spec: &str) -> Option<KeyEvent> {
    let mut modifiers = KeyModifiers::NONE;
    let mut parts: Vec<&str> = spec.split('+').collect();
    let key = parts.pop()?;

    for part in parts {
        match part.to_ascii_lowercase().as_str() {
            "ctrl" | "control" => modifiers |= KeyModifiers::CONTROL,
            "alt" => modifiers |= KeyModifiers::ALT,
            "shift" => modifiers |= KeyModifiers::SHIFT,
            _ => return None,
        }
    }

    let code = match key.to_ascii_lowercase().as_str() {
        "up" => KeyCode::Up,
        "down" => KeyCode::Down,
        "left" => KeyCode::Left,
        "right" => KeyCode::Right,
        "enter" | "return" => KeyCode::Enter,
        "esc" | "escape" => KeyCode::Esc,
        "space" => KeyCode::Char(' '),
        "tab" if modifiers.contains(KeyModifiers::SHIFT) => KeyCode::BackTab,
        "tab" => KeyCode::Tab,
        "backtab" => KeyCode::BackTab,
        "backspace" => KeyCode::Backspace,
        "home" => KeyCode::Home,
        "end" => KeyCode::End,
        _ => {
            let mut chars = key.chars();
            let ch = chars.next()?;
            if chars.next().is_some() {
                return None;
            }
            if ch.is_ascii_uppercase() {
                modifiers |= KeyModifiers::SHIFT;
            }
            KeyCode::Char(ch)
        }
    };

    Some(KeyEvent::new(code, modifiers))
}

impl Default for KeyBindings {
    fn default() -> Self {
        let mut bindings = HashMap::new();

        // Focus switching
        bindings.insert(
            KeyEvent::new(KeyCode::Tab, KeyModifiers::NONE),
            KeyAction::FocusNext,
        );
        bindings.insert(
            KeyEvent::new(KeyCode::BackTab, KeyModifiers::SHIFT),
            KeyAction::FocusPrev,
        );
        bindings.insert(
            KeyEvent::new(KeyCode::BackTab, KeyModifiers::NONE),
            KeyAction::FocusPrev,
        );

        // Search bar
        bindings.insert(
            KeyEvent::new(KeyCode::Char('o'), KeyModifiers::CONTROL),
            KeyAction::ToggleSearch,
        );
        bindings.insert(
            KeyEvent::new(KeyCode::Down, KeyModifiers::NONE),
            KeyAction::SuggestionDown,
        );
        bindings.insert(
            KeyEvent::new(KeyCode::Up, KeyModifiers::NONE),
            KeyAction::SuggestionUp,
        );
        bindings.insert(
            KeyEvent::new(KeyCode::Enter, KeyModifiers::NONE),
            KeyAction::Commit,
        );
        bindings.insert(
            KeyEvent::new(KeyCode::Esc, KeyModifiers::NONE),
            KeyAction::Dismiss,
        );
        bindings.insert(
            KeyEvent::new(KeyCode::Char('u'), KeyModifiers::CONTROL),
            KeyAction::ClearQuery,
        );

        // Timeline
        bindings.insert(
            KeyEvent::new(KeyCode::Char('j'), KeyModifiers::NONE),
            KeyAction::NextNode,
        );
        bindings.insert(
            KeyEvent::new(KeyCode::Char('k'), KeyModifiers::NONE),
            KeyAction::PrevNode,
        );
        bindings.insert(
            KeyEvent::new(KeyCode::Char(' '), KeyModifiers::NONE),
            KeyAction::ToggleNode,
        );

        // Application
        bindings.insert(
            KeyEvent::new(KeyCode::Char('q'), KeyModifiers::NONE),
            KeyAction::Quit,
        );
        bindings.insert(
            KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL),
            KeyAction::Quit,
        );

        Self { bindings }
    }
}
