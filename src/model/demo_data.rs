//! Data shown by `adamui demo`.
//!
//! Loaded from a JSON file when `--data` is given:
//!
//! ```json
//! {
//!   "suggestions": [{ "id": 1, "value": "Apple" }],
//!   "timeline": [{ "id": 1, "title": "Kickoff", "children": [] }]
//! }
//! ```
//!
//! Either key may be omitted; the built-in sample is used for it.

use super::error::DataError;
use super::suggestion::Suggestion;
use super::timeline::{TimelineEntry, TimelineNode};
use serde::Deserialize;
use std::path::Path;

const FRUITS: [&str; 24] = [
    "Apple",
    "Banana",
    "Cherry",
    "Date",
    "Elderberry",
    "Fig",
    "Grape",
    "Honeydew",
    "Kiwi",
    "Lemon",
    "Mango",
    "Nectarine",
    "Orange",
    "Papaya",
    "Quince",
    "Raspberry",
    "Strawberry",
    "Tangerine",
    "Ugli",
    "Vanilla",
    "Watermelon",
    "Xylocarp",
    "Yellow",
    "Zucchini",
];

/// Data shown on the demo page.
///
/// Missing keys in a JSON file fall back to the built-in samples.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct DemoData {
    /// Entries for the autocomplete bar.
    #[serde(default = "sample_suggestions")]
    pub suggestions: Vec<Suggestion>,
    /// Nodes for the timeline.
    #[serde(default = "sample_timeline")]
    pub timeline: Vec<TimelineNode>,
}

impl Default for DemoData {
    fn default() -> Self {
        Self {
            suggestions: sample_suggestions(),
            timeline: sample_timeline(),
        }
    }
}

impl DemoData {
    /// Load demo data from a JSON file.
    pub fn load(path: &Path) -> Result<Self, DataError> {
        let contents = std::fs::read_to_string(path).map_err(|source| DataError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        serde_json::from_str(&contents).map_err(|source| DataError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }
}

fn sample_suggestions() -> Vec<Suggestion> {
    FRUITS
        .iter()
        .zip(1..)
        .map(|(value, id)| Suggestion::new(id, *value))
        .collect()
}

fn sample_timeline() -> Vec<TimelineNode> {
    vec![
        TimelineNode::new(1, "Project kickoff", "Jan 2024", "Scope and team agreed")
            .with_child(TimelineEntry::new(
                "Requirements",
                "Jan 8",
                "Stakeholder interviews",
            ))
            .with_child(TimelineEntry::new("Design review", "Jan 22", "Wireframes approved")),
        TimelineNode::new(2, "Beta release", "Mar 2024", "First external users"),
        TimelineNode::new(3, "General availability", "May 2024", "Public launch")
            .with_child(TimelineEntry::new("Docs", "May 2", "Guides published"))
            .with_child(TimelineEntry::new("Announcement", "May 6", "Blog and newsletter"))
            .with_child(TimelineEntry::new("Retro", "May 20", "")),
    ]
}
