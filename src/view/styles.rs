//! Presentation profiles and color configuration.
//!
//! Size, variant and accent knobs are purely cosmetic. Each enum value maps
//! to a record of concrete style parameters through a lookup table; render
//! code reads the record and never branches on the enum itself.

use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::BorderType;

// ===== ColorConfig =====

/// Configuration for color output.
///
/// Determines whether colors should be enabled or disabled based on:
/// - `--no-color` CLI flag
/// - `NO_COLOR` environment variable
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColorConfig {
    enabled: bool,
}

impl ColorConfig {
    /// Create a ColorConfig from CLI args and environment.
    ///
    /// Priority (first match wins):
    /// 1. `--no-color` flag (disables colors)
    /// 2. `NO_COLOR` env var (any value disables colors)
    /// 3. Default: colors enabled
    pub fn from_env_and_args(no_color_flag: bool) -> Self {
        let enabled = !no_color_flag && std::env::var("NO_COLOR").is_err();
        Self { enabled }
    }

    /// Explicitly enabled or disabled colors.
    pub fn new(enabled: bool) -> Self {
        Self { enabled }
    }

    /// Check if colors are enabled.
    pub fn colors_enabled(self) -> bool {
        self.enabled
    }
}

impl Default for ColorConfig {
    fn default() -> Self {
        Self::from_env_and_args(false)
    }
}

// ===== Size =====

/// Widget size.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Size {
    /// Small.
    Sm,
    /// Medium.
    #[default]
    Md,
    /// Large.
    Lg,
}

/// Concrete parameters for a [`Size`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SizeProfile {
    /// Width of the open search input, excluding icon and borders.
    pub input_width: u16,
    /// Blank lines between top-level timeline nodes.
    pub node_gap: u16,
    /// Bold node titles in the timeline.
    pub bold_titles: bool,
}

const SIZE_PROFILES: [SizeProfile; 3] = [
    SizeProfile {
        input_width: 16,
        node_gap: 0,
        bold_titles: false,
    },
    SizeProfile {
        input_width: 20,
        node_gap: 0,
        bold_titles: true,
    },
    SizeProfile {
        input_width: 28,
        node_gap: 1,
        bold_titles: true,
    },
];

impl Size {
    /// Parameters for this size.
    pub fn profile(self) -> &'static SizeProfile {
        &SIZE_PROFILES[self as usize]
    }
}

// ===== Variant =====

/// Visual variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Variant {
    /// Rounded borders.
    #[default]
    Modern,
    /// Plain borders.
    Minimal,
    /// No borders, no content lines.
    Condensed,
}

/// Concrete parameters for a [`Variant`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VariantProfile {
    /// Border around the search input; `None` renders a single bare row.
    pub border: Option<BorderType>,
    /// Render node and entry content lines in the timeline.
    pub show_content: bool,
}

const VARIANT_PROFILES: [VariantProfile; 3] = [
    VariantProfile {
        border: Some(BorderType::Rounded),
        show_content: true,
    },
    VariantProfile {
        border: Some(BorderType::Plain),
        show_content: true,
    },
    VariantProfile {
        border: None,
        show_content: false,
    },
];

impl Variant {
    /// Parameters for this variant.
    pub fn profile(self) -> &'static VariantProfile {
        &VARIANT_PROFILES[self as usize]
    }
}

// ===== Accent / Palette =====

/// Accent color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Accent {
    /// Cyan.
    #[default]
    Teal,
    /// Blue.
    Blue,
    /// Magenta.
    Magenta,
    /// Yellow.
    Yellow,
}

const ACCENT_COLORS: [Color; 4] = [Color::Cyan, Color::Blue, Color::Magenta, Color::Yellow];

/// Resolved styles for one widget render.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    /// Icon, active border and marker style.
    pub accent: Style,
    /// Secondary text.
    pub muted: Style,
    /// Highlighted suggestion or focused node.
    pub highlight: Style,
    /// Cursor cell.
    pub cursor: Style,
}

impl Palette {
    /// Build the palette for an accent, or a monochrome one when colors
    /// are disabled. Highlight and cursor stay visible either way.
    pub fn new(accent: Accent, colors: ColorConfig) -> Self {
        if colors.colors_enabled() {
            Self {
                accent: Style::default().fg(ACCENT_COLORS[accent as usize]),
                muted: Style::default().fg(Color::DarkGray),
                highlight: Style::default().bg(Color::Gray).fg(Color::Black),
                cursor: Style::default()
                    .bg(Color::White)
                    .fg(Color::Black)
                    .add_modifier(Modifier::BOLD),
            }
        } else {
            Self {
                accent: Style::default(),
                muted: Style::default(),
                highlight: Style::default().add_modifier(Modifier::REVERSED),
                cursor: Style::default().add_modifier(Modifier::REVERSED),
            }
        }
    }
}

// ===== Tests =====
