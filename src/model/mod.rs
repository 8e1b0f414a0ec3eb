//! Domain model types (pure).
//!
//! All types in this module are plain data supplied by the host.

pub mod demo_data;
pub mod error;
pub mod identifiers;
pub mod key_action;
pub mod suggestion;
pub mod timeline;

// Re-export for convenience
pub use demo_data::DemoData;
pub use error::{AppError, DataError, InstallError};
pub use identifiers::{InstanceId, ItemKey, NodeId, SuggestionId};
pub use key_action::KeyAction;
pub use suggestion::{filter_suggestions, Suggestion};
pub use timeline::{TimelineEntry, TimelineNode};
