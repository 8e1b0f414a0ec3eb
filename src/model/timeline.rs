//! Timeline data: top-level nodes owning an ordered list of child entries.
//!
//! Nesting is exactly two levels. Children carry no id of their own and are
//! addressed by index within their parent.

use super::identifiers::NodeId;
use serde::Deserialize;

/// A top-level timeline item.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct TimelineNode {
    /// Key of the node's expansion state.
    pub id: NodeId,
    /// Heading line.
    #[serde(default)]
    pub title: String,
    /// Date label, displayed verbatim.
    #[serde(default)]
    pub date: String,
    /// Body text.
    #[serde(default)]
    pub content: String,
    /// Entries shown while the node is expanded.
    #[serde(default)]
    pub children: Vec<TimelineEntry>,
}

impl TimelineNode {
    /// Node without children.
    pub fn new(
        id: impl Into<NodeId>,
        title: impl Into<String>,
        date: impl Into<String>,
        content: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            date: date.into(),
            content: content.into(),
            children: Vec::new(),
        }
    }

    /// Builder: append a child entry.
    pub fn with_child(mut self, child: TimelineEntry) -> Self {
        self.children.push(child);
        self
    }

    /// Nodes without children are leaves and never expand.
    pub fn has_children(&self) -> bool {
        !self.children.is_empty()
    }
}

/// A child entry rendered beneath an expanded node.
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
pub struct TimelineEntry {
    /// Heading line.
    #[serde(default)]
    pub title: String,
    /// Date label, displayed verbatim.
    #[serde(default)]
    pub date: String,
    /// Body text.
    #[serde(default)]
    pub content: String,
}

impl TimelineEntry {
    /// Create a child entry.
    pub fn new(
        title: impl Into<String>,
        date: impl Into<String>,
        content: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            date: date.into(),
            content: content.into(),
        }
    }
}
