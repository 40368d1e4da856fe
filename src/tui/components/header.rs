//! # Header Component
//!
//! The course masthead: kicker, title, subtitle, and the tag pills.
//! Stateless — all props, no internal state — and tab-independent: the
//! header renders the same whatever section is active.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use unicode_width::UnicodeWidthStr;

use crate::tui::component::Component;
use crate::tui::components::cards::pill;

const KICKER: &str = "COURSE PREVIEW";

pub struct Header<'a> {
    pub title: &'a str,
    pub subtitle: &'a str,
    pub tags: &'a [String],
}

impl<'a> Header<'a> {
    pub fn new(title: &'a str, subtitle: &'a str, tags: &'a [String]) -> Self {
        Self {
            title,
            subtitle,
            tags,
        }
    }

    /// The header's exact rendered height at the given width. The frame
    /// layout needs this before any widget exists.
    pub fn calculate_height(&self, width: u16) -> u16 {
        self.lines(width).len() as u16
    }

    fn lines(&self, width: u16) -> Vec<Line<'static>> {
        let width = width.max(1);
        let mut lines = vec![Line::from(Span::styled(
            KICKER,
            Style::default().fg(Color::DarkGray).add_modifier(Modifier::BOLD),
        ))];
        for row in textwrap::wrap(self.title, width as usize) {
            lines.push(Line::from(Span::styled(
                row.into_owned(),
                Style::default().add_modifier(Modifier::BOLD),
            )));
        }
        for row in textwrap::wrap(self.subtitle, width as usize) {
            lines.push(Line::from(Span::styled(
                row.into_owned(),
                Style::default().fg(Color::DarkGray),
            )));
        }
        if !self.tags.is_empty() {
            lines.extend(pill_rows(self.tags, width));
        }
        lines
    }
}

impl Component for Header<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        frame.render_widget(Paragraph::new(self.lines(area.width)), area);
    }
}

/// Lay pills out left to right, wrapping to a new row when the next pill
/// would not fit. Pill width is measured with `unicode-width` so wide
/// glyphs in tags don't break the math.
fn pill_rows(tags: &[String], width: u16) -> Vec<Line<'static>> {
    let mut rows: Vec<Line<'static>> = Vec::new();
    let mut spans: Vec<Span<'static>> = Vec::new();
    let mut used: u16 = 0;

    for tag in tags {
        let pill_width = tag.width() as u16 + 2;
        let needed = if spans.is_empty() {
            pill_width
        } else {
            pill_width + 1
        };
        if !spans.is_empty() && used + needed > width {
            rows.push(Line::from(std::mem::take(&mut spans)));
            used = 0;
        }
        if !spans.is_empty() {
            spans.push(Span::raw(" "));
            used += 1;
        }
        spans.push(pill(tag));
        used += pill_width;
    }
    if !spans.is_empty() {
        rows.push(Line::from(spans));
    }
    rows
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    fn tags(names: &[&str]) -> Vec<String> {
        names.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_pills_wrap_to_rows() {
        let tags = tags(&["media", "inquiry", "consumer"]);
        // Wide enough for everything on one row
        assert_eq!(pill_rows(&tags, 80).len(), 1);
        // Each pill on its own row
        let narrow = pill_rows(&tags, 12);
        assert_eq!(narrow.len(), 3);
    }

    #[test]
    fn test_height_matches_lines() {
        let tags = tags(&["one", "two"]);
        let header = Header::new("Title", "Subtitle", &tags);
        // kicker + title + subtitle + one pill row
        assert_eq!(header.calculate_height(80), 4);
    }

    #[test]
    fn test_render_shows_title_and_tags() {
        let backend = TestBackend::new(60, 5);
        let mut terminal = Terminal::new(backend).unwrap();
        let tags = tags(&["anti-greenwashing"]);
        let mut header = Header::new("Green for Real", "Grade 5 unit", &tags);

        terminal.draw(|f| header.render(f, f.area())).unwrap();

        let buffer = terminal.backend().buffer();
        let text = buffer
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect::<String>();
        assert!(text.contains("COURSE PREVIEW"));
        assert!(text.contains("Green for Real"));
        assert!(text.contains("anti-greenwashing"));
    }
}
