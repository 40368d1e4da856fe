//! # TabBar Component
//!
//! The three tab buttons. Rendering caches each button's screen `Rect`
//! in [`TabBarState`] so mouse clicks can be resolved to a tab without
//! re-deriving the layout — the same cache-for-hit-testing approach the
//! body uses for accordion headers.

use ratatui::Frame;
use ratatui::layout::{Position, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use unicode_width::UnicodeWidthStr;

use crate::core::selection::TabId;
use crate::tui::component::Component;

/// Button rects from the last render. Persisted in the parent TuiState.
#[derive(Default)]
pub struct TabBarState {
    buttons: Vec<(Rect, TabId)>,
}

impl TabBarState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Which tab button, if any, sits under the given screen position.
    pub fn hit_test(&self, column: u16, row: u16) -> Option<TabId> {
        self.buttons
            .iter()
            .find(|(rect, _)| rect.contains(Position::new(column, row)))
            .map(|&(_, tab)| tab)
    }
}

/// Transient tab-row component, created fresh each frame.
pub struct TabBar<'a> {
    pub active: TabId,
    pub state: &'a mut TabBarState,
}

impl<'a> TabBar<'a> {
    pub fn new(active: TabId, state: &'a mut TabBarState) -> Self {
        Self { active, state }
    }
}

impl Component for TabBar<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        self.state.buttons.clear();

        let mut spans: Vec<Span<'static>> = Vec::new();
        let mut x = area.x;
        for tab in TabId::ALL {
            let text = format!(" {} ", tab.label());
            let button_width = text.width() as u16;
            let style = if tab == self.active {
                Style::default()
                    .bg(Color::White)
                    .fg(Color::Black)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::Gray)
            };

            if !spans.is_empty() {
                spans.push(Span::raw(" "));
                x += 1;
            }
            self.state
                .buttons
                .push((Rect::new(x, area.y, button_width, 1), tab));
            spans.push(Span::styled(text, style));
            x += button_width;
        }

        frame.render_widget(Line::from(spans), area);
    }
}
