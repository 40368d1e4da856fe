//! # TUI Adapter
//!
//! The ratatui-specific layer. Owns the terminal, renders frames, and
//! translates keyboard/mouse events into the two selection operations.
//!
//! This is the only module that knows about ratatui and crossterm. The
//! core never sees a key code or a pixel: events come in, `select_tab`
//! or `toggle_lesson` runs, `resolve_view` recomputes, the frame is
//! redrawn. Everything the loop mutates besides the selection is
//! presentation state (scroll offsets, cursor, hover, cached rects) in
//! [`TuiState`].
//!
//! ## Redraw strategy
//!
//! There is no animation here, so the loop only draws when something
//! happened: it polls with a generous timeout, drains all pending
//! events, applies them, and redraws once. Idle costs nothing.

mod component;
mod components;
mod event;
mod ui;

use log::{info, warn};
use std::io::stdout;
use std::time::Duration;

use crossterm::event::{DisableMouseCapture, EnableMouseCapture};
use crossterm::execute;
use ratatui::layout::Rect;

use crate::core::content::Course;
use crate::core::selection::{SelectionState, TabId};
use crate::core::view::resolve_view;
use crate::tui::components::TabBarState;
use crate::tui::event::{TuiEvent, poll_event_immediate, poll_event_timeout};
use crate::tui::ui::BodyState;

/// TUI-specific presentation state (not part of the core state machine).
pub struct TuiState {
    pub body: BodyState,
    pub tab_bar: TabBarState,
    /// The body's screen area from the last draw, for mouse mapping.
    pub body_area: Rect,
}

impl Default for TuiState {
    fn default() -> Self {
        Self::new()
    }
}

impl TuiState {
    pub fn new() -> Self {
        Self {
            body: BodyState::new(),
            tab_bar: TabBarState::new(),
            body_area: Rect::default(),
        }
    }
}

struct TerminalModeGuard;

impl TerminalModeGuard {
    fn new() -> std::io::Result<Self> {
        execute!(stdout(), EnableMouseCapture)?;
        info!("Terminal modes enabled (mouse capture)");
        Ok(Self)
    }
}

impl Drop for TerminalModeGuard {
    fn drop(&mut self) {
        let _ = execute!(stdout(), DisableMouseCapture);
    }
}

pub fn run(course: Course, initial_tab: TabId) -> std::io::Result<()> {
    let mut selection = SelectionState::new(&course);
    selection.select_tab(initial_tab);
    let mut tui = TuiState::new();

    let mut terminal = ratatui::init();
    let _terminal_mode_guard = TerminalModeGuard::new();

    let mut needs_redraw = true; // Force first frame

    loop {
        // Only draw when something changed
        if needs_redraw {
            let vm = resolve_view(&course, &selection);
            terminal.draw(|f| ui::draw_ui(f, &vm, &mut tui))?;
            needs_redraw = false;
        }

        let first_event = poll_event_timeout(Duration::from_millis(250));

        // Process first event + drain ALL pending events before next draw
        let mut should_quit = false;
        if first_event.is_some() {
            needs_redraw = true;
        }
        for event in first_event
            .into_iter()
            .chain(std::iter::from_fn(poll_event_immediate))
        {
            match event {
                TuiEvent::Quit => should_quit = true,
                // Resize just needs a redraw (already flagged above)
                TuiEvent::Resize => {}

                TuiEvent::NextTab => {
                    let next = selection.active_tab().next();
                    switch_tab(&mut selection, &mut tui, next);
                }
                TuiEvent::PrevTab => {
                    let prev = selection.active_tab().prev();
                    switch_tab(&mut selection, &mut tui, prev);
                }
                TuiEvent::SelectTab(index) => {
                    if let Some(&tab) = TabId::ALL.get(index) {
                        switch_tab(&mut selection, &mut tui, tab);
                    }
                }

                // Up/Down move the lesson cursor on the lesson tab and
                // plain-scroll everywhere else.
                TuiEvent::CursorUp => {
                    if selection.active_tab() == TabId::Lesson && !course.lessons.is_empty() {
                        let idx = tui
                            .body
                            .selected_lesson
                            .map(|i| i.saturating_sub(1))
                            .unwrap_or(0);
                        tui.body.selected_lesson = Some(idx);
                        tui.body.scroll_to_selected();
                    } else {
                        tui.body.scroll_state.scroll_up();
                    }
                }
                TuiEvent::CursorDown => {
                    if selection.active_tab() == TabId::Lesson && !course.lessons.is_empty() {
                        let last = course.lessons.len() - 1;
                        let idx = tui
                            .body
                            .selected_lesson
                            .map(|i| (i + 1).min(last))
                            .unwrap_or(0);
                        tui.body.selected_lesson = Some(idx);
                        tui.body.scroll_to_selected();
                    } else {
                        tui.body.scroll_state.scroll_down();
                    }
                }
                TuiEvent::ToggleSelected => {
                    if selection.active_tab() == TabId::Lesson
                        && let Some(idx) = tui.body.selected_lesson
                        && let Some(lesson) = course.lessons.get(idx)
                    {
                        let id = lesson.id.clone();
                        toggle_lesson(&course, &mut selection, &id);
                    }
                }

                TuiEvent::ScrollUp => tui.body.scroll_state.scroll_up(),
                TuiEvent::ScrollDown => tui.body.scroll_state.scroll_down(),
                TuiEvent::ScrollPageUp => tui.body.scroll_state.scroll_page_up(),
                TuiEvent::ScrollPageDown => tui.body.scroll_state.scroll_page_down(),
                TuiEvent::ScrollTop => tui.body.scroll_state.scroll_to_top(),

                // Hover — only lesson rows render it, but tracking is generic
                TuiEvent::MouseMove(column, row) => {
                    tui.body.hovered_segment =
                        ui::hit_test_body(&tui.body, tui.body_area, column, row);
                }
                TuiEvent::MouseClick(column, row) => {
                    if let Some(tab) = tui.tab_bar.hit_test(column, row) {
                        switch_tab(&mut selection, &mut tui, tab);
                    } else if let Some(segment) =
                        ui::hit_test_body(&tui.body, tui.body_area, column, row)
                        && let Some(Some(id)) = tui.body.lesson_ids.get(segment).cloned()
                    {
                        // Clicked an accordion header: move the cursor there too
                        tui.body.selected_lesson = tui
                            .body
                            .lesson_segments
                            .iter()
                            .position(|&s| s == segment);
                        toggle_lesson(&course, &mut selection, &id);
                    }
                }
            }
        }

        if should_quit {
            break;
        }
    }

    ratatui::restore();
    Ok(())
}

fn switch_tab(selection: &mut SelectionState, tui: &mut TuiState, tab: TabId) {
    if selection.active_tab() != tab {
        selection.select_tab(tab);
        // Scroll is presentation state: fresh section, back to the top.
        // The accordion keeps its memory — that lives in the selection.
        tui.body.reset_scroll();
    }
}

/// A rejected toggle leaves the selection untouched and the view alive;
/// it only means the caller held an id the course doesn't know.
fn toggle_lesson(course: &Course, selection: &mut SelectionState, id: &str) {
    if let Err(e) = selection.toggle_lesson(course, id) {
        warn!("Toggle rejected: {e}");
    }
}
