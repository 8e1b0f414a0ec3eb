//! Timeline widget.
//!
//! Parent nodes draw a chevron (`▾` expanded, `▸` collapsed); leaf nodes draw
//! a plain dot so they never look expandable. Children of an expanded node
//! hang beneath it on a connector.

use crate::model::TimelineNode;
use crate::state::{TimelineRow, TimelineState};
use crate::view::helpers::visible_window;
use crate::view::styles::{Accent, ColorConfig, Palette, Size, Variant};
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

/// Marker of a node without children.
pub const LEAF_MARKER: &str = "●";
/// Marker of an expanded node.
pub const EXPANDED_MARKER: &str = "▾";
/// Marker of a collapsed node.
pub const COLLAPSED_MARKER: &str = "▸";

/// Timeline widget over a node list and its expansion state.
pub struct TimelineWidget<'a> {
    nodes: &'a [TimelineNode],
    state: &'a TimelineState,
    size: Size,
    variant: Variant,
    accent: Accent,
    colors: ColorConfig,
    focused: bool,
}

impl<'a> TimelineWidget<'a> {
    /// Widget over `nodes` rendered with `state`.
    pub fn new(nodes: &'a [TimelineNode], state: &'a TimelineState) -> Self {
        Self {
            nodes,
            state,
            size: Size::default(),
            variant: Variant::default(),
            accent: Accent::default(),
            colors: ColorConfig::default(),
            focused: false,
        }
    }

    /// Set the size.
    pub fn size(mut self, size: Size) -> Self {
        self.size = size;
        self
    }

    /// Set the variant.
    pub fn variant(mut self, variant: Variant) -> Self {
        self.variant = variant;
        self
    }

    /// Set the accent color.
    pub fn accent(mut self, accent: Accent) -> Self {
        self.accent = accent;
        self
    }

    /// Set color output.
    pub fn colors(mut self, colors: ColorConfig) -> Self {
        self.colors = colors;
        self
    }

    /// Highlight the node under the timeline cursor.
    pub fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }

    /// Index of the node whose title or content line is at `row` when
    /// rendered into `area`.
    pub fn node_at(&self, area: Rect, row: u16) -> Option<usize> {
        if row < area.y || row >= area.y + area.height {
            return None;
        }
        let palette = Palette::new(self.accent, self.colors);
        let layout = self.lines(&palette);
        let offset = visible_window(layout.lines.len(), layout.focus_line, area.height as usize);
        let line = offset + (row - area.y) as usize;
        layout.targets.get(line).copied().flatten()
    }

    /// Build the rendered lines, the node each line belongs to, and the line
    /// index of the focused node.
    fn lines(&self, palette: &Palette) -> TimelineLines<'a> {
        let size = self.size.profile();
        let show_content = self.variant.profile().show_content;
        let title_style = if size.bold_titles {
            Style::default().add_modifier(Modifier::BOLD)
        } else {
            Style::default()
        };

        let mut lines = Vec::new();
        let mut targets = Vec::new();
        let mut focus_line = None;

        for row in self.state.visible_rows(self.nodes) {
            match row {
                TimelineRow::Node {
                    index,
                    node,
                    expanded,
                } => {
                    if index > 0 {
                        for _ in 0..size.node_gap {
                            lines.push(Line::default());
                            targets.push(None);
                        }
                    }
                    let marker = match (node.has_children(), expanded) {
                        (false, _) => LEAF_MARKER,
                        (true, true) => EXPANDED_MARKER,
                        (true, false) => COLLAPSED_MARKER,
                    };
                    let style = if self.focused && self.state.focused() == Some(index) {
                        focus_line = Some(lines.len());
                        palette.highlight
                    } else {
                        title_style
                    };
                    let mut spans = vec![
                        Span::styled(marker, palette.accent),
                        Span::raw(" "),
                        Span::styled(node.title.as_str(), style),
                    ];
                    if !node.date.is_empty() {
                        spans.push(Span::raw("  "));
                        spans.push(Span::styled(node.date.as_str(), palette.muted));
                    }
                    lines.push(Line::from(spans));
                    targets.push(Some(index));

                    if show_content && !node.content.is_empty() {
                        lines.push(Line::from(vec![
                            Span::raw("  "),
                            Span::styled(node.content.as_str(), palette.muted),
                        ]));
                        targets.push(Some(index));
                    }
                }
                TimelineRow::Child { entry, last, .. } => {
                    let connector = if last { "╰─ " } else { "├─ " };
                    let mut spans = vec![
                        Span::raw("  "),
                        Span::styled(connector, palette.muted),
                        Span::raw(entry.title.as_str()),
                    ];
                    if !entry.date.is_empty() {
                        spans.push(Span::raw("  "));
                        spans.push(Span::styled(entry.date.as_str(), palette.muted));
                    }
                    lines.push(Line::from(spans));
                    targets.push(None);

                    if show_content && !entry.content.is_empty() {
                        let rail = if last { "     " } else { "  │  " };
                        lines.push(Line::from(vec![
                            Span::styled(rail, palette.muted),
                            Span::styled(entry.content.as_str(), palette.muted),
                        ]));
                        targets.push(None);
                    }
                }
            }
        }

        TimelineLines {
            lines,
            targets,
            focus_line,
        }
    }
}

struct TimelineLines<'a> {
    lines: Vec<Line<'a>>,
    /// Node index owning each line; `None` for gaps and children.
    targets: Vec<Option<usize>>,
    focus_line: Option<usize>,
}

impl Widget for TimelineWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.is_empty() {
            return;
        }
        let palette = Palette::new(self.accent, self.colors);
        let layout = self.lines(&palette);
        let offset = visible_window(layout.lines.len(), layout.focus_line, area.height as usize);
        Paragraph::new(layout.lines)
            .scroll((offset as u16, 0))
            .render(area, buf);
    }
}
