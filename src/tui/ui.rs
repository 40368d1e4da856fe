//! # Frame Assembly
//!
//! Lays the frame out (header / tab bar / scrollable body / footer) and
//! assembles the body from the [`ViewModel`]. The body is a flat list of
//! [`BodySegment`]s — bordered cards, section titles, timeline, lesson
//! rows — each with a pre-computed exact height, which is what makes
//! scroll clamping and mouse hit testing plain arithmetic.
//!
//! Only the active tab's section is ever assembled: the resolver hands
//! over one `SectionView`, so an inactive tab's content cannot leak into
//! the frame.

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Position, Rect, Size};
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use tui_scrollview::{ScrollView, ScrollViewState, ScrollbarVisibility};

use crate::core::content::RenderableBlock;
use crate::core::view::{SectionView, ViewModel};
use crate::tui::TuiState;
use crate::tui::component::Component;
use crate::tui::components::blocks::block_lines;
use crate::tui::components::cards::{CARD_H_OVERHEAD, card, pill, section_title};
use crate::tui::components::timeline::timeline_lines;
use crate::tui::components::{Header, LessonRow, TabBar};

/// Vertical gap between adjacent body segments.
const SEGMENT_GAP: u16 = 1;

const FOOTER_HINTS: &str = " 1-3/Tab switch tabs · ↑/↓ select lesson · Enter expand · q quit";

/// One renderable unit of the body.
pub struct BodySegment {
    paragraph: Paragraph<'static>,
    pub height: u16,
    /// Set on accordion rows: clicking this segment toggles the lesson.
    pub lesson_id: Option<String>,
}

impl BodySegment {
    fn plain(paragraph: Paragraph<'static>, height: u16) -> Self {
        Self {
            paragraph,
            height,
            lesson_id: None,
        }
    }
}

/// Scroll offset, layout cache, and cursor/hover state for the body.
/// Persisted in TuiState across frames; rebuilt caches come from each
/// render pass.
pub struct BodyState {
    pub scroll_state: ScrollViewState,
    /// Per-segment heights from the last assembly (gap not included).
    pub heights: Vec<u16>,
    /// Per-segment lesson ids (None for non-accordion segments).
    pub lesson_ids: Vec<Option<String>>,
    /// Segment index of each lesson row, in lesson order.
    pub lesson_segments: Vec<usize>,
    /// Keyboard cursor: index into the lesson rows.
    pub selected_lesson: Option<usize>,
    /// Segment index under the mouse pointer.
    pub hovered_segment: Option<usize>,
    /// Last known viewport height, for clamping between frames.
    pub viewport_height: u16,
}

impl Default for BodyState {
    fn default() -> Self {
        Self::new()
    }
}

impl BodyState {
    pub fn new() -> Self {
        Self {
            scroll_state: ScrollViewState::default(),
            heights: Vec::new(),
            lesson_ids: Vec::new(),
            lesson_segments: Vec::new(),
            selected_lesson: None,
            hovered_segment: None,
            viewport_height: 0,
        }
    }

    /// Back to the top. Called on tab switches: scroll is presentation
    /// state, so unlike the accordion it does not keep memory across
    /// tabs.
    pub fn reset_scroll(&mut self) {
        self.scroll_state.scroll_to_top();
        self.hovered_segment = None;
    }

    /// Total content height including inter-segment gaps.
    pub fn total_height(&self) -> u16 {
        segment_tops(&self.heights)
            .last()
            .zip(self.heights.last())
            .map(|(top, h)| top + h)
            .unwrap_or(0)
    }

    /// Clamp the scroll offset so it never runs past the content.
    pub fn clamp_scroll(&mut self) {
        let max_y = self.total_height().saturating_sub(self.viewport_height);
        let current = self.scroll_state.offset();
        if current.y > max_y {
            self.scroll_state.set_offset(Position {
                x: current.x,
                y: max_y,
            });
        }
    }

    /// Scroll so the cursored lesson row is visible. Rows taller than
    /// the viewport align their top edge.
    pub fn scroll_to_selected(&mut self) {
        let Some(lesson_idx) = self.selected_lesson else {
            return;
        };
        let Some(&segment_idx) = self.lesson_segments.get(lesson_idx) else {
            return;
        };

        let tops = segment_tops(&self.heights);
        let top = tops[segment_idx];
        let bottom = top + self.heights[segment_idx];
        let offset_y = self.scroll_state.offset().y;

        if top < offset_y {
            self.scroll_state.set_offset(Position { x: 0, y: top });
        } else if bottom > offset_y + self.viewport_height {
            self.scroll_state.set_offset(Position {
                x: 0,
                y: bottom.saturating_sub(self.viewport_height),
            });
        }
    }
}

/// Content-space top of each segment, accounting for gaps.
fn segment_tops(heights: &[u16]) -> Vec<u16> {
    let mut tops = Vec::with_capacity(heights.len());
    let mut y = 0u16;
    for &h in heights {
        tops.push(y);
        y += h + SEGMENT_GAP;
    }
    tops
}

/// Hit test: which body segment (if any) sits under the given screen
/// position. Gap rows between segments hit nothing.
pub fn hit_test_body(state: &BodyState, body_area: Rect, column: u16, row: u16) -> Option<usize> {
    if !body_area.contains(Position::new(column, row)) {
        return None;
    }
    let content_y = (row - body_area.y) + state.scroll_state.offset().y;
    let tops = segment_tops(&state.heights);
    for (idx, (&top, &height)) in tops.iter().zip(&state.heights).enumerate() {
        if content_y >= top && content_y < top + height {
            return Some(idx);
        }
    }
    None
}

/// Assemble the body segments for the active section.
pub fn build_body(vm: &ViewModel, state: &BodyState, width: u16) -> Vec<BodySegment> {
    let dim = Style::default().fg(Color::DarkGray);
    let mut segments: Vec<BodySegment> = Vec::new();

    match &vm.section {
        SectionView::Lesson(section) => {
            let (widget, height) = section_title("COURSE OVERVIEW", "Course overview", "", width);
            segments.push(BodySegment::plain(widget, height));

            for highlight in section.highlights {
                let lines = wrap_dim(&highlight.description, width);
                let (widget, height) = card(Some(&highlight.title), lines, dim);
                segments.push(BodySegment::plain(widget, height));
            }

            if !section.path.is_empty() {
                let title = format!("Course path ({} steps)", section.path.len());
                let lines = timeline_lines(section.path, inner_width(width));
                let (widget, height) = card(Some(&title), lines, dim);
                segments.push(BodySegment::plain(widget, height));
            }

            let (widget, height) = section_title("LESSON PLANS", "Lessons", "", width);
            segments.push(BodySegment::plain(widget, height));

            for (lesson_idx, view) in section.lessons.iter().enumerate() {
                let segment_idx = segments.len();
                let is_selected = state.selected_lesson == Some(lesson_idx);
                let is_hovered = state.hovered_segment == Some(segment_idx);
                let (widget, height) = LessonRow::new(view, is_selected, is_hovered).widget(width);
                segments.push(BodySegment {
                    paragraph: widget,
                    height,
                    lesson_id: Some(view.lesson.id.clone()),
                });
            }
        }
        SectionView::SelfStudy(self_study) => {
            let (widget, height) =
                section_title("SELF-STUDY", &self_study.title, &self_study.subtitle, width);
            segments.push(BodySegment::plain(widget, height));

            for step in &self_study.steps {
                let mut lines = vec![Line::from(pill(&step.badge))];
                lines.extend(block_lines(
                    &RenderableBlock::List {
                        items: step.points.clone(),
                    },
                    inner_width(width),
                ));
                let (widget, height) = card(Some(&step.title), lines, dim);
                segments.push(BodySegment::plain(widget, height));
            }

            if !self_study.deliverables.is_empty() {
                let lines = block_lines(
                    &RenderableBlock::List {
                        items: self_study.deliverables.clone(),
                    },
                    inner_width(width),
                );
                let (widget, height) = card(Some("Deliverables"), lines, dim);
                segments.push(BodySegment::plain(widget, height));
            }
        }
        SectionView::Resources(resources) => {
            let (widget, height) =
                section_title("RESOURCES", &resources.title, &resources.subtitle, width);
            segments.push(BodySegment::plain(widget, height));

            let lines = wrap_dim(
                "Slides, worksheets, and reading links plug in here — a cloud link per \
                 asset, or one QR code for the whole bundle.",
                width,
            );
            let (widget, height) = card(Some("Attachments"), lines, dim);
            segments.push(BodySegment::plain(widget, height));
        }
    }

    segments
}

fn inner_width(width: u16) -> u16 {
    width.saturating_sub(CARD_H_OVERHEAD).max(1)
}

fn wrap_dim(text: &str, width: u16) -> Vec<Line<'static>> {
    textwrap::wrap(text, inner_width(width) as usize)
        .into_iter()
        .map(|row| Line::from(Span::styled(row.into_owned(), Style::default().fg(Color::Gray))))
        .collect()
}

/// Draw one frame. Updates the layout caches in `tui` as a side effect
/// so the event loop can resolve clicks against what is on screen.
pub fn draw_ui(frame: &mut Frame, vm: &ViewModel, tui: &mut TuiState) {
    use Constraint::{Length, Min};

    let mut header = Header::new(vm.title, vm.subtitle, vm.tags);
    let header_height = header.calculate_height(frame.area().width);

    let layout = Layout::vertical([
        Length(header_height),
        Length(1), // gap
        Length(1), // tab bar
        Length(1), // gap
        Min(0),    // body
        Length(1), // footer
    ]);
    let [header_area, _, tabs_area, _, body_area, footer_area] = layout.areas(frame.area());

    header.render(frame, header_area);
    TabBar::new(vm.active_tab, &mut tui.tab_bar).render(frame, tabs_area);
    draw_body(frame, vm, tui, body_area);
    frame.render_widget(
        Line::from(Span::styled(FOOTER_HINTS, Style::default().fg(Color::DarkGray))),
        footer_area,
    );

    tui.body_area = body_area;
}

fn draw_body(frame: &mut Frame, vm: &ViewModel, tui: &mut TuiState, area: Rect) {
    let content_width = area.width.saturating_sub(1).max(1); // scrollbar gutter

    let segments = build_body(vm, &tui.body, content_width);

    // Refresh the layout caches for hit testing and scrolling.
    tui.body.heights = segments.iter().map(|s| s.height).collect();
    tui.body.lesson_ids = segments.iter().map(|s| s.lesson_id.clone()).collect();
    tui.body.lesson_segments = segments
        .iter()
        .enumerate()
        .filter(|(_, s)| s.lesson_id.is_some())
        .map(|(i, _)| i)
        .collect();

    tui.body.viewport_height = area.height;
    tui.body.clamp_scroll();

    let total_height = tui.body.total_height();
    let mut scroll_view = ScrollView::new(Size::new(content_width, total_height.max(1)))
        .vertical_scrollbar_visibility(ScrollbarVisibility::Always)
        .horizontal_scrollbar_visibility(ScrollbarVisibility::Never);

    let tops = segment_tops(&tui.body.heights);
    for (segment, top) in segments.into_iter().zip(tops) {
        let rect = Rect::new(0, top, content_width, segment.height);
        scroll_view.render_widget(segment.paragraph, rect);
    }

    frame.render_stateful_widget(scroll_view, area, &mut tui.body.scroll_state);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::selection::{SelectionState, TabId};
    use crate::core::view::resolve_view;
    use crate::test_support::test_course;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    fn buffer_text(terminal: &Terminal<TestBackend>) -> String {
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect()
    }

    #[test]
    fn test_lesson_body_lists_lessons_in_stored_order() {
        let course = test_course();
        let selection = SelectionState::new(&course);
        let vm = resolve_view(&course, &selection);

        let segments = build_body(&vm, &BodyState::new(), 60);
        let ids: Vec<&str> = segments
            .iter()
            .filter_map(|s| s.lesson_id.as_deref())
            .collect();
        assert_eq!(ids, vec!["a", "b"]);
    }

    #[test]
    fn test_non_lesson_tabs_have_no_accordion_targets() {
        let course = test_course();
        let mut selection = SelectionState::new(&course);

        for tab in [TabId::SelfStudy, TabId::Resources] {
            selection.select_tab(tab);
            let vm = resolve_view(&course, &selection);
            let segments = build_body(&vm, &BodyState::new(), 60);
            assert!(segments.iter().all(|s| s.lesson_id.is_none()));
        }
    }

    #[test]
    fn test_hit_test_body_maps_rows_to_segments() {
        let mut state = BodyState::new();
        state.heights = vec![3, 5];
        let area = Rect::new(0, 10, 40, 20);

        // Segment 0 occupies content rows 0..3 → screen rows 10..13
        assert_eq!(hit_test_body(&state, area, 5, 10), Some(0));
        assert_eq!(hit_test_body(&state, area, 5, 12), Some(0));
        // Row 13 is the gap
        assert_eq!(hit_test_body(&state, area, 5, 13), None);
        // Segment 1 occupies content rows 4..9 → screen rows 14..19
        assert_eq!(hit_test_body(&state, area, 5, 14), Some(1));
        // Outside the body area
        assert_eq!(hit_test_body(&state, area, 5, 9), None);
    }

    #[test]
    fn test_hit_test_accounts_for_scroll_offset() {
        let mut state = BodyState::new();
        state.heights = vec![3, 5];
        state.scroll_state.set_offset(Position { x: 0, y: 4 });
        let area = Rect::new(0, 0, 40, 10);

        // Screen row 0 + offset 4 = content row 4 → segment 1
        assert_eq!(hit_test_body(&state, area, 0, 0), Some(1));
    }

    #[test]
    fn test_draw_ui_smoke() {
        let backend = TestBackend::new(80, 30);
        let mut terminal = Terminal::new(backend).unwrap();
        let course = test_course();
        let selection = SelectionState::new(&course);
        let mut tui = TuiState::new();

        terminal
            .draw(|f| draw_ui(f, &resolve_view(&course, &selection), &mut tui))
            .unwrap();

        let text = buffer_text(&terminal);
        assert!(text.contains("Test Course"));
        assert!(text.contains("LESSON PLANS"));
        assert!(text.contains("Lesson A"));
    }

    #[test]
    fn test_inactive_tab_content_is_absent_from_frame() {
        let backend = TestBackend::new(80, 30);
        let mut terminal = Terminal::new(backend).unwrap();
        let course = test_course();
        let mut selection = SelectionState::new(&course);
        selection.select_tab(TabId::SelfStudy);
        let mut tui = TuiState::new();

        terminal
            .draw(|f| draw_ui(f, &resolve_view(&course, &selection), &mut tui))
            .unwrap();

        let text = buffer_text(&terminal);
        assert!(text.contains("SELF-STUDY"));
        // The lesson section was never assembled, not merely scrolled away.
        assert!(!text.contains("LESSON PLANS"));
        assert!(!text.contains("Lesson A"));
    }
}
