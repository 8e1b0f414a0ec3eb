//! Configuration module.

pub mod keybindings;
pub mod loader;

pub use keybindings::{KeyBindingError, KeyBindings};
pub use loader::{ConfigError, ConfigFile, ResolvedConfig};
