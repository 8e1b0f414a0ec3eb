//! Demo page state: the widgets on the page, keyboard focus and the event log.

use crate::model::{DemoData, TimelineNode};
use crate::state::{DefaultExpansion, SearchBar, SearchBarConfig, SearchBarEvent, TimelineState};
use std::collections::VecDeque;
use std::time::{Duration, Instant};
use tracing::debug;

/// Number of host events kept for the status line.
pub const EVENT_LOG_CAPACITY: usize = 5;

/// Settings the demo page is built from (resolved configuration).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DemoSettings {
    /// Dropdown length for every bar.
    pub max_suggestions: usize,
    /// Typing debounce for every bar.
    pub debounce: Duration,
    /// Initial expansion of timeline nodes.
    pub timeline_default: DefaultExpansion,
}

/// A search bar with the caption shown above it.
#[derive(Debug)]
pub struct LabeledBar {
    /// Caption drawn above the bar.
    pub label: &'static str,
    /// The bar itself.
    pub bar: SearchBar,
}

/// Which widget has keyboard focus.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FocusTarget {
    /// The bar at this index.
    SearchBar(usize),
    /// The timeline below the bars.
    Timeline,
}

/// State of the whole demo page.
#[derive(Debug)]
pub struct AppState {
    /// Search bars, top to bottom.
    pub bars: Vec<LabeledBar>,
    /// Timeline items.
    pub nodes: Vec<TimelineNode>,
    /// Expansion and cursor state of the timeline.
    pub timeline: TimelineState,
    focus: usize,
    events: VecDeque<String>,
}

impl AppState {
    /// Page over the given widgets, focus on the first bar.
    pub fn new(bars: Vec<LabeledBar>, nodes: Vec<TimelineNode>, policy: DefaultExpansion) -> Self {
        let timeline = TimelineState::new(&nodes, policy);
        Self {
            bars,
            nodes,
            timeline,
            focus: 0,
            events: VecDeque::with_capacity(EVENT_LOG_CAPACITY),
        }
    }

    /// The standard, always-open and autocomplete bars plus the timeline.
    pub fn demo(data: DemoData, settings: DemoSettings) -> Self {
        let base = SearchBarConfig::default()
            .max_suggestions(settings.max_suggestions)
            .debounce(settings.debounce);
        let bars = vec![
            LabeledBar {
                label: "Standard",
                bar: SearchBar::new(base.clone()),
            },
            LabeledBar {
                label: "Always Open",
                bar: SearchBar::new(base.clone().always_open().placeholder("Search...")),
            },
            LabeledBar {
                label: "Autocomplete Dropdown",
                bar: SearchBar::new(
                    base.auto_complete(data.suggestions)
                        .close_on_escape()
                        .placeholder("Type a fruit"),
                ),
            },
        ];
        Self::new(bars, data.timeline, settings.timeline_default)
    }

    /// Widget that currently has keyboard focus.
    pub fn focus(&self) -> FocusTarget {
        if self.focus < self.bars.len() {
            FocusTarget::SearchBar(self.focus)
        } else {
            FocusTarget::Timeline
        }
    }

    /// Move focus to `target`; out-of-range bar indices select the timeline.
    pub fn set_focus(&mut self, target: FocusTarget) {
        self.focus = match target {
            FocusTarget::SearchBar(i) => i.min(self.bars.len()),
            FocusTarget::Timeline => self.bars.len(),
        };
    }

    /// Cycle focus forward through the bars, then the timeline.
    pub fn focus_next(&mut self) {
        self.focus = (self.focus + 1) % (self.bars.len() + 1);
    }

    /// Cycle focus backward.
    pub fn focus_prev(&mut self) {
        let ring = self.bars.len() + 1;
        self.focus = (self.focus + ring - 1) % ring;
    }

    /// The focused bar, if a bar has focus.
    pub fn focused_bar_mut(&mut self) -> Option<&mut SearchBar> {
        match self.focus() {
            FocusTarget::SearchBar(i) => self.bars.get_mut(i).map(|b| &mut b.bar),
            FocusTarget::Timeline => None,
        }
    }

    /// Record an event reported by the bar at `index`.
    pub fn record(&mut self, index: usize, event: SearchBarEvent) {
        let label = self.bars.get(index).map(|b| b.label).unwrap_or("?");
        let line = match &event {
            SearchBarEvent::Changed(value) => format!("{label}: changed {value:?}"),
            SearchBarEvent::Selected(value) => format!("{label}: selected {value:?}"),
        };
        debug!(event = ?event, bar = label, "search bar event");
        if self.events.len() == EVENT_LOG_CAPACITY {
            self.events.pop_front();
        }
        self.events.push_back(line);
    }

    /// Most recent event first.
    pub fn events(&self) -> impl Iterator<Item = &str> {
        self.events.iter().rev().map(String::as_str)
    }

    /// Replace the timeline items, keeping expansion for surviving ids.
    pub fn set_nodes(&mut self, nodes: Vec<TimelineNode>) {
        self.timeline.sync(&nodes);
        self.nodes = nodes;
    }

    /// Advance every bar's typing debounce. Returns `true` if any changed.
    pub fn tick(&mut self, now: Instant) -> bool {
        self.bars
            .iter_mut()
            .fold(false, |changed, b| b.bar.tick(now) || changed)
    }

    /// Earliest pending timer deadline across all bars.
    pub fn next_deadline(&self) -> Option<Instant> {
        self.bars.iter().filter_map(|b| b.bar.typing_deadline()).min()
    }
}
