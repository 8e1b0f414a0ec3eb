//! TUI rendering and the interactive demo page.

pub mod helpers;
pub mod search_bar;
pub mod styles;
pub mod timeline;

pub use search_bar::{SearchBarHit, SearchBarWidget};
pub use styles::{Accent, ColorConfig, Palette, Size, Variant};
pub use timeline::TimelineWidget;

use crate::config::keybindings::KeyBindings;
use crate::model::{AppError, DemoData, KeyAction};
use crate::state::{AppState, DemoSettings, FocusTarget, NavKey, SearchBarEvent};
use crossterm::{
    ExecutableCommand,
    event::{
        self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent,
        MouseEventKind,
    },
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{
    Terminal,
    backend::{Backend, CrosstermBackend},
    layout::{Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};
use std::io::{self, Stdout};
use std::time::{Duration, Instant};
use tracing::{debug, info};

/// Poll timeout while no debounce is pending.
const IDLE_POLL: Duration = Duration::from_millis(500);

const KEY_HINTS: &str = "Tab focus  Ctrl+O toggle  ↑↓ navigate  Enter select  Esc dismiss  q quit";

/// Presentation of each demo bar, by position.
const BAR_STYLES: [(Size, Variant, Accent); 3] = [
    (Size::Md, Variant::Modern, Accent::Teal),
    (Size::Sm, Variant::Minimal, Accent::Blue),
    (Size::Lg, Variant::Modern, Accent::Magenta),
];

/// Everything the demo needs besides its data.
#[derive(Debug, Clone)]
pub struct DemoOptions {
    /// Resolved demo settings.
    pub settings: DemoSettings,
    /// Key map for the page.
    pub key_bindings: KeyBindings,
    /// Whether to emit colors.
    pub colors: ColorConfig,
}

/// Page areas from the last draw, used for mouse hit-testing.
#[derive(Debug, Clone, Default)]
struct PageLayout {
    labels: Vec<Rect>,
    bars: Vec<Rect>,
    timeline_label: Rect,
    timeline: Rect,
    status: Rect,
}

/// Interactive demo application.
///
/// Generic over backend to support testing with TestBackend
pub struct DemoApp<B>
where
    B: Backend,
{
    terminal: Terminal<B>,
    app_state: AppState,
    key_bindings: KeyBindings,
    colors: ColorConfig,
    layout: PageLayout,
}

impl DemoApp<CrosstermBackend<Stdout>> {
    /// Set up the terminal in raw mode with alternate screen and mouse capture.
    pub fn new(data: DemoData, options: DemoOptions) -> Result<Self, AppError> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        stdout.execute(EnterAlternateScreen)?;
        stdout.execute(crossterm::event::EnableMouseCapture)?;
        let terminal = Terminal::new(CrosstermBackend::new(stdout))?;

        Ok(Self::with_terminal(terminal, data, options))
    }

    /// Run the event loop until the user quits.
    ///
    /// Polls with a timeout that ends at the nearest typing deadline, so the
    /// "typing stopped" transition is drawn without busy-waiting.
    pub fn run(&mut self) -> Result<(), AppError> {
        self.draw()?;

        loop {
            let timeout = self
                .app_state
                .next_deadline()
                .map(|deadline| deadline.saturating_duration_since(Instant::now()))
                .unwrap_or(IDLE_POLL);

            let mut dirty = false;
            if event::poll(timeout)? {
                match event::read()? {
                    Event::Key(key) if key.kind == KeyEventKind::Press => {
                        if self.handle_key(key, Instant::now()) {
                            return Ok(());
                        }
                        dirty = true;
                    }
                    Event::Mouse(mouse) => {
                        self.handle_mouse(mouse);
                        dirty = true;
                    }
                    Event::Resize(width, height) => {
                        debug!("Handling resize to {}x{}", width, height);
                        dirty = true;
                    }
                    _ => {}
                }
            }

            if self.app_state.tick(Instant::now()) {
                dirty = true;
            }
            if dirty {
                self.draw()?;
            }
        }
    }
}

impl<B> DemoApp<B>
where
    B: Backend,
{
    fn with_terminal(terminal: Terminal<B>, data: DemoData, options: DemoOptions) -> Self {
        Self {
            terminal,
            app_state: AppState::demo(data, options.settings),
            key_bindings: options.key_bindings,
            colors: options.colors,
            layout: PageLayout::default(),
        }
    }

    /// Handle a single keyboard event
    ///
    /// Returns true if app should quit
    fn handle_key(&mut self, key: KeyEvent, now: Instant) -> bool {
        // Ctrl+C always quits, even if rebound
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            return true;
        }

        if let FocusTarget::SearchBar(index) = self.app_state.focus() {
            if self.handle_text_key(index, key, now) {
                return false;
            }
        }

        let Some(action) = self.key_bindings.get(key) else {
            return false;
        };

        match (self.app_state.focus(), action) {
            (_, KeyAction::Quit) => return true,
            (_, KeyAction::FocusNext) => self.app_state.focus_next(),
            (_, KeyAction::FocusPrev) => self.app_state.focus_prev(),
            (FocusTarget::SearchBar(index), action) => self.handle_bar_action(index, action),
            (FocusTarget::Timeline, action) => self.handle_timeline_action(action),
        }

        false
    }

    /// Route editing keys to an open bar. Returns true if the key was consumed.
    fn handle_text_key(&mut self, index: usize, key: KeyEvent, now: Instant) -> bool {
        let Some(labeled) = self.app_state.bars.get_mut(index) else {
            return false;
        };
        let bar = &mut labeled.bar;
        if !bar.is_open() {
            return false;
        }

        let event = match key.code {
            KeyCode::Char(ch)
                if !key
                    .modifiers
                    .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) =>
            {
                Some(bar.insert_char(ch, now))
            }
            KeyCode::Backspace => bar.backspace(now),
            KeyCode::Left => {
                bar.cursor_left();
                None
            }
            KeyCode::Right => {
                bar.cursor_right();
                None
            }
            _ => return false,
        };

        if let Some(event) = event {
            self.app_state.record(index, event);
        }
        true
    }

    fn handle_bar_action(&mut self, index: usize, action: KeyAction) {
        let Some(labeled) = self.app_state.bars.get_mut(index) else {
            return;
        };
        let bar = &mut labeled.bar;

        let event: Option<SearchBarEvent> = match action {
            KeyAction::ToggleSearch => {
                bar.toggle();
                None
            }
            KeyAction::ClearQuery => Some(bar.clear()),
            KeyAction::SuggestionDown => bar.handle_key(NavKey::Down).event,
            KeyAction::SuggestionUp => bar.handle_key(NavKey::Up).event,
            KeyAction::Commit => bar.handle_key(NavKey::Enter).event,
            KeyAction::Dismiss => bar.handle_key(NavKey::Escape).event,
            _ => None,
        };

        if let Some(event) = event {
            self.app_state.record(index, event);
        }
    }

    fn handle_timeline_action(&mut self, action: KeyAction) {
        let state = &mut self.app_state;
        match action {
            KeyAction::NextNode | KeyAction::SuggestionDown => state.timeline.focus_next(&state.nodes),
            KeyAction::PrevNode | KeyAction::SuggestionUp => state.timeline.focus_prev(),
            KeyAction::ToggleNode | KeyAction::Commit => {
                if state.timeline.toggle_focused(&state.nodes) {
                    debug!(focused = ?state.timeline.focused(), "timeline node toggled");
                }
            }
            _ => {}
        }
    }

    /// Handle a single mouse event
    ///
    /// Left clicks activate the bar icon, pick a suggestion or toggle a
    /// timeline node, using the areas from the last draw.
    fn handle_mouse(&mut self, mouse: MouseEvent) {
        if mouse.kind != MouseEventKind::Down(MouseButton::Left) {
            return;
        }
        let (column, row) = (mouse.column, mouse.row);

        let bar_hit = self
            .layout
            .bars
            .iter()
            .enumerate()
            .find_map(|(index, &area)| {
                bar_widget(&self.app_state, self.colors, index)
                    .and_then(|widget| widget.hit_test(area, column, row))
                    .map(|hit| (index, hit))
            });

        if let Some((index, hit)) = bar_hit {
            self.app_state.set_focus(FocusTarget::SearchBar(index));
            let Some(labeled) = self.app_state.bars.get_mut(index) else {
                return;
            };
            let event = match hit {
                SearchBarHit::Icon => {
                    labeled.bar.toggle();
                    None
                }
                SearchBarHit::Input => None,
                SearchBarHit::Suggestion(i) => labeled.bar.select_index(i),
            };
            if let Some(event) = event {
                self.app_state.record(index, event);
            }
            return;
        }

        let area = self.layout.timeline;
        let hit = timeline_widget(&self.app_state, self.colors).node_at(area, row);
        if let Some(node_index) = hit {
            if column < area.x || column >= area.x + area.width {
                return;
            }
            let state = &mut self.app_state;
            state.set_focus(FocusTarget::Timeline);
            if let Some(node) = state.nodes.get(node_index) {
                let id = node.id.clone();
                state.timeline.focus_id(&state.nodes, &id);
                state.timeline.toggle(&state.nodes, &id);
            }
        }
    }

    /// Split the frame into label, bar, timeline and status rows.
    fn compute_layout(&self, frame_area: Rect) -> PageLayout {
        let mut constraints = vec![Constraint::Length(1)];
        for index in 0..self.app_state.bars.len() {
            let height = bar_widget(&self.app_state, self.colors, index)
                .map(|widget| widget.required_height())
                .unwrap_or(1);
            constraints.push(Constraint::Length(1));
            constraints.push(Constraint::Length(height));
        }
        constraints.push(Constraint::Length(1));
        constraints.push(Constraint::Min(1));
        constraints.push(Constraint::Length(1));

        let areas = Layout::vertical(constraints).split(frame_area);
        let bar_count = self.app_state.bars.len();
        let mut layout = PageLayout::default();
        for index in 0..bar_count {
            layout.labels.push(areas[1 + index * 2]);
            layout.bars.push(areas[2 + index * 2]);
        }
        let rest = 1 + bar_count * 2;
        layout.timeline_label = areas[rest];
        layout.timeline = areas[rest + 1];
        layout.status = areas[rest + 2];
        layout
    }

    /// Render the current frame
    fn draw(&mut self) -> Result<(), AppError> {
        let size = self.terminal.size()?;
        let frame_area = Rect::new(0, 0, size.width.max(1), size.height);
        self.layout = self.compute_layout(frame_area);

        let palette = Palette::new(Accent::Teal, self.colors);
        let focus = self.app_state.focus();
        let title = Line::from(vec![
            Span::styled("adamui", palette.accent.add_modifier(Modifier::BOLD)),
            Span::styled(" widget demo", palette.muted),
        ]);
        let label_line = |text: &str, focused: bool| {
            let marker = if focused { "> " } else { "  " };
            let style = if focused {
                palette.accent.add_modifier(Modifier::BOLD)
            } else {
                Style::default()
            };
            Line::from(Span::styled(format!("{marker}{text}"), style))
        };
        let status = match self.app_state.events().next() {
            Some(event) => Line::from(Span::raw(event.to_string())),
            None => Line::from(Span::styled(KEY_HINTS, palette.muted)),
        };

        let state = &self.app_state;
        let colors = self.colors;
        let layout = &self.layout;
        let labels: Vec<_> = state
            .bars
            .iter()
            .enumerate()
            .map(|(index, labeled)| {
                label_line(labeled.label, focus == FocusTarget::SearchBar(index))
            })
            .collect();
        let timeline_label = label_line("Timeline", focus == FocusTarget::Timeline);

        self.terminal.draw(|frame| {
            frame.render_widget(Paragraph::new(title), Rect { height: 1, ..frame_area });
            let areas = layout.labels.iter().zip(&layout.bars);
            for (index, (label, (&label_area, &bar_area))) in labels.into_iter().zip(areas).enumerate() {
                frame.render_widget(Paragraph::new(label), label_area);
                if let Some(widget) = bar_widget(state, colors, index) {
                    frame.render_widget(widget, bar_area);
                }
            }
            frame.render_widget(Paragraph::new(timeline_label), layout.timeline_label);
            frame.render_widget(timeline_widget(state, colors), layout.timeline);
            frame.render_widget(Paragraph::new(status), layout.status);
        })?;

        Ok(())
    }
}

/// Widget for the bar at `index`, styled by its position on the page.
fn bar_widget(state: &AppState, colors: ColorConfig, index: usize) -> Option<SearchBarWidget<'_>> {
    let labeled = state.bars.get(index)?;
    let (size, variant, accent) = BAR_STYLES.get(index).copied().unwrap_or_default();
    Some(
        SearchBarWidget::new(&labeled.bar)
            .size(size)
            .variant(variant)
            .accent(accent)
            .colors(colors)
            .focused(state.focus() == FocusTarget::SearchBar(index)),
    )
}

fn timeline_widget(state: &AppState, colors: ColorConfig) -> TimelineWidget<'_> {
    TimelineWidget::new(&state.nodes, &state.timeline)
        .size(Size::Md)
        .colors(colors)
        .focused(state.focus() == FocusTarget::Timeline)
}

/// Initialize and run the demo application
///
/// Handles terminal setup, runs the event loop, and ensures cleanup on exit.
/// Logging must be initialized by caller before calling this function.
pub fn run_demo(data: DemoData, options: DemoOptions) -> Result<(), AppError> {
    info!(
        suggestions = data.suggestions.len(),
        nodes = data.timeline.len(),
        "starting demo"
    );
    let mut app = DemoApp::new(data, options)?;

    let result = app.run();

    // Always restore terminal state
    restore_terminal()?;

    result
}

/// Restore terminal to normal state
///
/// Disables raw mode, mouse capture, and leaves alternate screen
fn restore_terminal() -> Result<(), AppError> {
    disable_raw_mode()?;
    io::stdout().execute(crossterm::event::DisableMouseCapture)?;
    io::stdout().execute(LeaveAlternateScreen)?;
    Ok(())
}

// ===== Test Helpers =====

#[cfg(test)]
impl<B> DemoApp<B>
where
    B: Backend,
{
    /// Build the app over an existing terminal (no raw mode).
    pub(crate) fn new_for_test(terminal: Terminal<B>, data: DemoData, options: DemoOptions) -> Self {
        Self::with_terminal(terminal, data, options)
    }

    pub(crate) fn app_state(&self) -> &AppState {
        &self.app_state
    }

    pub(crate) fn app_state_mut(&mut self) -> &mut AppState {
        &mut self.app_state
    }

    pub(crate) fn handle_key_test(&mut self, key: KeyEvent, now: Instant) -> bool {
        self.handle_key(key, now)
    }

    pub(crate) fn handle_mouse_test(&mut self, mouse: MouseEvent) {
        self.handle_mouse(mouse)
    }

    pub(crate) fn render_test(&mut self) -> Result<(), AppError> {
        self.draw()
    }

    pub(crate) fn terminal(&self) -> &Terminal<B> {
        &self.terminal
    }

    pub(crate) fn bar_area(&self, index: usize) -> Option<Rect> {
        self.layout.bars.get(index).copied()
    }

    pub(crate) fn timeline_area(&self) -> Rect {
        self.layout.timeline
    }
}

#[cfg(test)]
#[path = "demo_tests.rs"]
mod tests;
