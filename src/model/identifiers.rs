//! Identifier types for widget data and widget instances.
//!
//! Suggestion and timeline node ids come from host data and may be either
//! strings or integers, so they deserialize untagged from JSON/TOML.

use serde::Deserialize;
use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

// ===== ItemKey =====

/// A host-supplied identifier: either text or an integer.
///
/// Shared representation behind [`SuggestionId`] and [`NodeId`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Deserialize)]
#[serde(untagged)]
pub enum ItemKey {
    /// Integer id.
    Number(i64),
    /// Text id.
    Text(String),
}

impl fmt::Display for ItemKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ItemKey::Number(n) => write!(f, "{n}"),
            ItemKey::Text(s) => f.write_str(s),
        }
    }
}

impl From<i64> for ItemKey {
    fn from(n: i64) -> Self {
        ItemKey::Number(n)
    }
}

impl From<i32> for ItemKey {
    fn from(n: i32) -> Self {
        ItemKey::Number(i64::from(n))
    }
}

impl From<&str> for ItemKey {
    fn from(s: &str) -> Self {
        ItemKey::Text(s.to_string())
    }
}

impl From<String> for ItemKey {
    fn from(s: String) -> Self {
        ItemKey::Text(s)
    }
}

/// Identifier of a suggestion, unique within its list.
pub type SuggestionId = ItemKey;

/// Stable identifier of a top-level timeline node.
pub type NodeId = ItemKey;

// ===== InstanceId =====

static NEXT_INSTANCE: AtomicU64 = AtomicU64::new(1);

/// Process-unique identifier of a mounted widget instance.
///
/// Assigned once at construction and never derived from configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct InstanceId(u64);

impl InstanceId {
    /// Allocate the next instance id.
    pub fn next() -> Self {
        Self(NEXT_INSTANCE.fetch_add(1, Ordering::Relaxed))
    }

    /// Raw counter value.
    pub fn get(self) -> u64 {
        self.0
    }
}

impl fmt::Display for InstanceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "widget-{}", self.0)
    }
}
