//! Search bar widget.
//!
//! Renders a [`SearchBar`] as an icon, an input box that appears while open,
//! and the suggestion dropdown attached beneath it while
//! `show_suggestions()` holds.

use crate::state::SearchBar;
use crate::view::helpers::{cursor_window, fit_to_width, visible_window};
use crate::view::styles::{Accent, ColorConfig, Palette, Size, Variant};
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

/// Search glyph drawn as the toggle control.
pub const SEARCH_ICON: &str = "⌕";

/// Columns taken by the icon with its padding.
const ICON_WIDTH: u16 = 3;

/// What a pointer position lands on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchBarHit {
    /// The search icon.
    Icon,
    /// The text input.
    Input,
    /// Index into the filtered suggestions.
    Suggestion(usize),
}

/// Search bar widget.
pub struct SearchBarWidget<'a> {
    bar: &'a SearchBar,
    size: Size,
    variant: Variant,
    accent: Accent,
    colors: ColorConfig,
    focused: bool,
}

impl<'a> SearchBarWidget<'a> {
    /// Widget over `bar` with default presentation.
    pub fn new(bar: &'a SearchBar) -> Self {
        Self {
            bar,
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

    /// Whether the host has keyboard focus on this widget (draws the cursor).
    pub fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }

    /// Rows needed to draw the widget with every matching suggestion.
    pub fn required_height(&self) -> u16 {
        let bordered = self.variant.profile().border.is_some();
        let dropdown = if self.bar.show_suggestions() {
            let rows = self.bar.filtered_suggestions().len() as u16;
            rows + u16::from(bordered)
        } else {
            0
        };
        self.input_height() + dropdown
    }

    /// Map a pointer position inside `area` to the part of the widget under it.
    ///
    /// Uses the same geometry as rendering into `area`.
    pub fn hit_test(&self, area: Rect, column: u16, row: u16) -> Option<SearchBarHit> {
        let width = self.width(area.width);
        if column < area.x || column >= area.x + width || row < area.y {
            return None;
        }
        let chrome = u16::from(self.variant.profile().border.is_some());
        let input_height = self.input_height().min(area.height);
        let rel_row = row - area.y;

        if rel_row < input_height {
            let inner_col = (column - area.x).checked_sub(chrome)?;
            return Some(if inner_col < ICON_WIDTH {
                SearchBarHit::Icon
            } else {
                SearchBarHit::Input
            });
        }

        if !self.bar.show_suggestions() {
            return None;
        }
        let len = self.bar.filtered_suggestions().len();
        let rows = self.dropdown_rows(area, input_height, len);
        let dropdown_row = rel_row - input_height;
        if dropdown_row >= rows {
            return None;
        }
        let start = visible_window(len, self.bar.selected_index(), rows as usize);
        Some(SearchBarHit::Suggestion(start + dropdown_row as usize))
    }

    fn dropdown_rows(&self, area: Rect, input_height: u16, len: usize) -> u16 {
        let chrome = u16::from(self.variant.profile().border.is_some());
        let below = area.height.saturating_sub(input_height);
        below.saturating_sub(chrome).min(len as u16)
    }

    fn input_height(&self) -> u16 {
        let bordered = self.variant.profile().border.is_some();
        let attached = self.bar.visual_state().dropdown_visible;
        1 + u16::from(bordered) + u16::from(bordered && !attached)
    }

    fn width(&self, available: u16) -> u16 {
        let frame = if self.variant.profile().border.is_some() {
            2
        } else {
            0
        };
        let inner = if self.bar.is_open() {
            ICON_WIDTH + self.size.profile().input_width
        } else {
            ICON_WIDTH
        };
        (inner + frame).min(available)
    }

    /// `text_width` is the number of columns left after the frame and icon.
    fn input_line(&self, palette: &Palette, text_width: usize) -> Line<'a> {
        let visual = self.bar.visual_state();
        let icon_style = if visual.icon_rotated {
            palette.muted
        } else {
            palette.accent.add_modifier(Modifier::BOLD)
        };
        let mut spans = vec![
            Span::raw(" "),
            Span::styled(SEARCH_ICON, icon_style),
            Span::raw(" "),
        ];

        if !self.bar.is_open() {
            return Line::from(spans);
        }

        let query = self.bar.query();
        let show_cursor = self.focused && self.bar.input_focused();
        if query.is_empty() && !self.bar.config().placeholder.is_empty() {
            if show_cursor {
                spans.push(Span::styled(" ", palette.cursor));
            }
            spans.push(Span::styled(
                self.bar.config().placeholder.clone(),
                palette.muted.add_modifier(Modifier::ITALIC),
            ));
            return Line::from(spans);
        }

        if !show_cursor {
            spans.push(Span::raw(query.to_string()));
            return Line::from(spans);
        }

        // Split query around the cursor so the cursor cell can be styled.
        // Text scrolls left once the cursor would run past the field.
        let cursor = self.bar.cursor();
        let start = cursor_window(query, cursor, text_width);
        let before: String = query.chars().skip(start).take(cursor - start).collect();
        let mut after = query.chars().skip(cursor);
        let cursor_char = after.next().map(String::from).unwrap_or_else(|| " ".into());
        let rest: String = after.collect();

        spans.push(Span::raw(before));
        spans.push(Span::styled(cursor_char, palette.cursor));
        spans.push(Span::raw(rest));
        Line::from(spans)
    }
}

impl Widget for SearchBarWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.is_empty() {
            return;
        }
        let palette = Palette::new(self.accent, self.colors);
        let visual = self.bar.visual_state();
        let border = self.variant.profile().border;

        // Pulse: emphasized border while open, plain while typing.
        let border_style = if visual.scale > 1.0 {
            palette.accent.add_modifier(Modifier::BOLD)
        } else if visual.scale < 1.0 {
            palette.accent
        } else {
            palette.muted
        };

        let width = self.width(area.width);
        let input_height = self.input_height().min(area.height);
        let input_area = Rect::new(area.x, area.y, width, input_height);

        let mut input_block = Block::default();
        if let Some(border_type) = border {
            let borders = if visual.rounded_bottom {
                Borders::ALL
            } else {
                Borders::TOP | Borders::LEFT | Borders::RIGHT
            };
            input_block = input_block
                .borders(borders)
                .border_type(border_type)
                .border_style(border_style);
        }
        let frame = if border.is_some() { 2 } else { 0 };
        let text_width = width.saturating_sub(frame + ICON_WIDTH);
        Paragraph::new(self.input_line(&palette, usize::from(text_width)))
            .block(input_block)
            .render(input_area, buf);

        if !visual.dropdown_visible {
            return;
        }

        let items = self.bar.filtered_suggestions();
        let chrome = u16::from(border.is_some());
        let rows = self.dropdown_rows(area, input_height, items.len());
        if rows == 0 {
            return;
        }

        let selected = self.bar.selected_index();
        let start = visible_window(items.len(), selected, rows as usize);
        let text_width = width.saturating_sub(2 * chrome) as usize;
        let lines: Vec<Line> = items
            .iter()
            .enumerate()
            .skip(start)
            .take(rows as usize)
            .map(|(i, suggestion)| {
                let text = fit_to_width(&format!(" {}", suggestion.value), text_width);
                let style = if Some(i) == selected {
                    palette.highlight
                } else {
                    Style::default()
                };
                Line::from(Span::styled(text, style))
            })
            .collect();

        let dropdown_area = Rect::new(area.x, area.y + input_height, width, rows + chrome);
        let mut dropdown_block = Block::default();
        if let Some(border_type) = border {
            dropdown_block = dropdown_block
                .borders(Borders::LEFT | Borders::RIGHT | Borders::BOTTOM)
                .border_type(border_type)
                .border_style(border_style);
        }
        Paragraph::new(lines)
            .block(dropdown_block)
            .render(dropdown_area, buf);
    }
}
