//! # Card Primitives
//!
//! The small presentational vocabulary the body is assembled from:
//! bordered cards, section titles, and pills. All of it is
//! data-in/widget-out; heights are known at build time because content
//! lines are pre-wrapped by the caller.

use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Padding, Paragraph};

/// Horizontal padding (per side) between a card border and its content.
pub const CARD_PAD_H: u16 = 1;
/// Total horizontal space a card consumes around its content lines.
pub const CARD_H_OVERHEAD: u16 = 2 + CARD_PAD_H * 2;
/// Total vertical space consumed by a card's borders.
pub const CARD_V_OVERHEAD: u16 = 2;

/// A bordered card of pre-wrapped lines. Returns the widget and its
/// exact rendered height.
pub fn card(
    title: Option<&str>,
    lines: Vec<Line<'static>>,
    border_style: Style,
) -> (Paragraph<'static>, u16) {
    let height = lines.len() as u16 + CARD_V_OVERHEAD;
    let mut block = Block::bordered()
        .border_style(border_style)
        .padding(Padding::horizontal(CARD_PAD_H));
    if let Some(title) = title {
        block = block
            .title(format!(" {title} "))
            .title_style(border_style.add_modifier(Modifier::BOLD));
    }
    (Paragraph::new(lines).block(block), height)
}

/// Kicker + title + optional wrapped description, unbordered, with a
/// trailing blank line for breathing room.
pub fn section_title(
    kicker: &str,
    title: &str,
    desc: &str,
    width: u16,
) -> (Paragraph<'static>, u16) {
    let mut lines = vec![
        Line::from(Span::styled(
            kicker.to_string(),
            Style::default().fg(Color::DarkGray).add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            title.to_string(),
            Style::default().add_modifier(Modifier::BOLD),
        )),
    ];
    if !desc.is_empty() {
        for row in textwrap::wrap(desc, width.max(1) as usize) {
            lines.push(Line::from(Span::styled(
                row.into_owned(),
                Style::default().fg(Color::DarkGray),
            )));
        }
    }
    lines.push(Line::default());

    let height = lines.len() as u16;
    (Paragraph::new(lines), height)
}

/// A pill: short text on a contrasting background, the terminal stand-in
/// for the original page's rounded chips.
pub fn pill(text: &str) -> Span<'static> {
    Span::styled(
        format!(" {text} "),
        Style::default().bg(Color::DarkGray).fg(Color::White),
    )
}
