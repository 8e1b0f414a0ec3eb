//! Timeline expansion state (container-owned).
//!
//! The timeline holds a set of expanded top-level node ids. Toggling flips
//! membership for one id and never touches another. Leaf nodes are never
//! members of the set.

use crate::model::{NodeId, TimelineEntry, TimelineNode};
use std::collections::HashSet;
use tracing::trace;

/// Policy for nodes the state has not seen before.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DefaultExpansion {
    /// Parent nodes start expanded.
    #[default]
    Expanded,
    /// Every node starts collapsed.
    Collapsed,
}

impl DefaultExpansion {
    /// Parse the `timeline_default` config value.
    pub fn parse(raw: &str) -> Option<Self> {
        match raw {
            "expanded" => Some(Self::Expanded),
            "collapsed" => Some(Self::Collapsed),
            _ => None,
        }
    }
}

/// A flattened row of the rendered timeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimelineRow<'a> {
    /// A top-level node.
    Node {
        /// Index of the node in the item list.
        index: usize,
        /// The node.
        node: &'a TimelineNode,
        /// Whether its children follow.
        expanded: bool,
    },
    /// A child entry of an expanded node.
    Child {
        /// Index of the parent node.
        parent: usize,
        /// Index of the child within its parent.
        index: usize,
        /// The entry.
        entry: &'a TimelineEntry,
        /// Last child of its parent; the connector ends here.
        last: bool,
    },
}

/// Expansion set plus keyboard cursor over the top-level nodes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimelineState {
    expanded: HashSet<NodeId>,
    known: HashSet<NodeId>,
    policy: DefaultExpansion,
    focused: Option<usize>,
}

impl TimelineState {
    /// State for `nodes` with `policy` applied, cursor on the first node.
    pub fn new(nodes: &[TimelineNode], policy: DefaultExpansion) -> Self {
        let mut state = Self {
            expanded: HashSet::new(),
            known: HashSet::new(),
            policy,
            focused: if nodes.is_empty() { None } else { Some(0) },
        };
        state.sync(nodes);
        state
    }

    /// Whether the node with `id` is expanded.
    pub fn is_expanded(&self, id: &NodeId) -> bool {
        self.expanded.contains(id)
    }

    /// Number of nodes currently expanded.
    pub fn expanded_count(&self) -> usize {
        self.expanded.len()
    }

    /// Flip expansion of the node with `id`.
    ///
    /// Returns `true` if the state changed. Leaves and unknown ids are no-ops.
    pub fn toggle(&mut self, nodes: &[TimelineNode], id: &NodeId) -> bool {
        let Some(node) = nodes.iter().find(|n| &n.id == id) else {
            return false;
        };
        if !node.has_children() {
            return false;
        }
        if !self.expanded.remove(id) {
            self.expanded.insert(id.clone());
        }
        trace!(node = %id, expanded = self.is_expanded(id), "timeline node toggled");
        true
    }

    /// Reconcile with a changed item list.
    ///
    /// Ids present in both lists keep their state, departed ids are
    /// forgotten, and new parent nodes follow the default policy.
    pub fn sync(&mut self, nodes: &[TimelineNode]) {
        let current: HashSet<&NodeId> = nodes.iter().map(|n| &n.id).collect();
        self.expanded.retain(|id| current.contains(id));
        self.known.retain(|id| current.contains(id));

        for node in nodes {
            if self.known.insert(node.id.clone())
                && node.has_children()
                && self.policy == DefaultExpansion::Expanded
            {
                self.expanded.insert(node.id.clone());
            }
            // A node that lost its children collapses.
            if !node.has_children() {
                self.expanded.remove(&node.id);
            }
        }

        self.focused = match (self.focused, nodes.len()) {
            (_, 0) => None,
            (Some(i), len) => Some(i.min(len - 1)),
            (None, _) => Some(0),
        };
    }

    /// Rows to render: each node followed by its children while expanded.
    pub fn visible_rows<'a>(&self, nodes: &'a [TimelineNode]) -> Vec<TimelineRow<'a>> {
        let mut rows = Vec::new();
        for (index, node) in nodes.iter().enumerate() {
            let expanded = self.is_expanded(&node.id);
            rows.push(TimelineRow::Node {
                index,
                node,
                expanded,
            });
            if expanded {
                let count = node.children.len();
                rows.extend(node.children.iter().enumerate().map(|(i, entry)| {
                    TimelineRow::Child {
                        parent: index,
                        index: i,
                        entry,
                        last: i + 1 == count,
                    }
                }));
            }
        }
        rows
    }

    // ===== Keyboard cursor =====

    /// Index of the node under the keyboard cursor.
    pub fn focused(&self) -> Option<usize> {
        self.focused
    }

    /// Move the cursor to the next node, stopping at the last.
    pub fn focus_next(&mut self, nodes: &[TimelineNode]) {
        if let Some(i) = self.focused {
            self.focused = Some((i + 1).min(nodes.len().saturating_sub(1)));
        }
    }

    /// Move the cursor to the previous node, stopping at the first.
    pub fn focus_prev(&mut self) {
        if let Some(i) = self.focused {
            self.focused = Some(i.saturating_sub(1));
        }
    }

    /// Point the cursor at the node with `id`.
    pub fn focus_id(&mut self, nodes: &[TimelineNode], id: &NodeId) {
        if let Some(i) = nodes.iter().position(|n| &n.id == id) {
            self.focused = Some(i);
        }
    }

    /// Toggle the node under the cursor.
    pub fn toggle_focused(&mut self, nodes: &[TimelineNode]) -> bool {
        let Some(node) = self.focused.and_then(|i| nodes.get(i)) else {
            return false;
        };
        let id = node.id.clone();
        self.toggle(nodes, &id)
    }
}

// ===== Tests =====

#[cfg(test)]
#[path = "timeline_tests.rs"]
mod tests;
