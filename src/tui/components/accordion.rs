//! # Accordion Row
//!
//! One lesson entry in the single-expand accordion. The row always
//! shows the lesson's title, meta pill, and subtitle; the body — the
//! lesson's `RenderableBlock` tree — is materialized only when the
//! resolver marked the row expanded. Collapsed rows genuinely don't
//! build their content lines.
//!
//! The expand/collapse affordance is the header itself: clicking it (or
//! Enter/Space on the cursored row) is delegated up to
//! `SelectionState::toggle_lesson`. The row owns no state of its own.

use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Padding, Paragraph};

use crate::core::view::LessonView;
use crate::tui::components::blocks::block_lines;
use crate::tui::components::cards::{CARD_H_OVERHEAD, CARD_PAD_H, CARD_V_OVERHEAD, pill};

pub struct LessonRow<'a> {
    pub view: &'a LessonView<'a>,
    /// Keyboard cursor is on this row.
    pub is_selected: bool,
    /// Mouse pointer is over this row.
    pub is_hovered: bool,
}

impl<'a> LessonRow<'a> {
    pub fn new(view: &'a LessonView<'a>, is_selected: bool, is_hovered: bool) -> Self {
        Self {
            view,
            is_selected,
            is_hovered,
        }
    }

    /// Build the row's widget and its exact height at the given outer
    /// width. Height is lines + borders; lines are pre-wrapped, so no
    /// render pass is needed to measure.
    pub fn widget(&self, width: u16) -> (Paragraph<'static>, u16) {
        let inner_width = width.saturating_sub(CARD_H_OVERHEAD).max(1);
        let lesson = self.view.lesson;

        let marker = if self.view.is_expanded { "▾ " } else { "▸ " };
        let title_options = textwrap::Options::new(inner_width as usize)
            .initial_indent(marker)
            .subsequent_indent("  ");
        let mut lines: Vec<Line<'static>> = textwrap::wrap(&lesson.title, title_options)
            .into_iter()
            .map(|row| {
                Line::from(Span::styled(
                    row.into_owned(),
                    Style::default().add_modifier(Modifier::BOLD),
                ))
            })
            .collect();

        lines.push(Line::from(vec![Span::raw("  "), pill(&lesson.meta)]));
        for row in textwrap::wrap(&lesson.subtitle, inner_width.saturating_sub(2).max(1) as usize)
        {
            lines.push(Line::from(vec![
                Span::raw("  "),
                Span::styled(row.into_owned(), Style::default().fg(Color::Gray)),
            ]));
        }

        if self.view.is_expanded {
            lines.push(Line::default());
            lines.extend(block_lines(&lesson.content, inner_width));
        }

        let border_style = if self.is_selected {
            Style::default().fg(Color::Cyan)
        } else if self.view.is_expanded {
            Style::default().fg(Color::White)
        } else {
            Style::default().fg(Color::DarkGray)
        };
        let style = if self.is_hovered {
            Style::default().bg(Color::DarkGray)
        } else {
            Style::default()
        };

        let height = lines.len() as u16 + CARD_V_OVERHEAD;
        let paragraph = Paragraph::new(lines)
            .style(style)
            .block(
                Block::bordered()
                    .border_style(border_style)
                    .padding(Padding::horizontal(CARD_PAD_H)),
            );
        (paragraph, height)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::selection::SelectionState;
    use crate::core::view::{SectionView, resolve_view};
    use crate::test_support::test_course;

    fn lesson_views(
        course: &crate::core::content::Course,
        selection: &SelectionState,
    ) -> Vec<(String, bool, u16)> {
        let vm = resolve_view(course, selection);
        let SectionView::Lesson(section) = vm.section else {
            panic!("expected lesson section");
        };
        section
            .lessons
            .iter()
            .map(|view| {
                let (_, height) = LessonRow::new(view, false, false).widget(60);
                (view.lesson.id.clone(), view.is_expanded, height)
            })
            .collect()
    }

    #[test]
    fn test_expanded_row_is_taller_than_collapsed() {
        let course = test_course();
        let selection = SelectionState::new(&course); // "a" expanded
        let rows = lesson_views(&course, &selection);

        let (_, a_expanded, a_height) = &rows[0];
        let (_, b_expanded, b_height) = &rows[1];
        assert!(a_expanded);
        assert!(!b_expanded);
        assert!(a_height > b_height, "{a_height} vs {b_height}");
    }

    #[test]
    fn test_collapsed_row_has_no_content_lines() {
        let course = test_course();
        let mut selection = SelectionState::new(&course);
        selection.toggle_lesson(&course, "a").unwrap(); // collapse everything

        let vm = resolve_view(&course, &selection);
        let SectionView::Lesson(section) = vm.section else {
            panic!("expected lesson section");
        };
        let (paragraph, _) = LessonRow::new(&section.lessons[0], false, false).widget(60);
        // Header marker present, body text absent
        let text = format!("{paragraph:?}");
        assert!(text.contains('▸'));
        assert!(!text.contains("Body of lesson A"));
    }

    #[test]
    fn test_expanded_marker_and_content() {
        let course = test_course();
        let selection = SelectionState::new(&course);

        let vm = resolve_view(&course, &selection);
        let SectionView::Lesson(section) = vm.section else {
            panic!("expected lesson section");
        };
        let (paragraph, _) = LessonRow::new(&section.lessons[0], false, false).widget(60);
        let text = format!("{paragraph:?}");
        assert!(text.contains('▾'));
        assert!(text.contains("Body of lesson A"));
    }
}
