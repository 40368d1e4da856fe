//! # Block Renderer
//!
//! Turns a [`RenderableBlock`] tree into pre-wrapped styled lines.
//!
//! Everything is wrapped with `textwrap` at build time, so a block's
//! rendered height is exactly `lines.len()` — the scroll and hit-test
//! math in the body never needs a trial render pass to know how tall
//! things are.

use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};

use crate::core::content::RenderableBlock;

/// Columns render sequentially in a terminal (there is rarely room for
/// side-by-side), separated like stack children.
pub fn block_lines(block: &RenderableBlock, width: u16) -> Vec<Line<'static>> {
    match block {
        RenderableBlock::Text { text } => wrap_styled(text, width, Style::default()),
        RenderableBlock::Labeled { label, text } => {
            let mut lines = vec![Line::from(Span::styled(
                label.clone(),
                Style::default().add_modifier(Modifier::BOLD),
            ))];
            lines.extend(wrap_styled(text, width, Style::default()));
            lines
        }
        RenderableBlock::List { items } => {
            let mut lines = Vec::new();
            for item in items {
                lines.extend(bullet_lines(item, width));
            }
            lines
        }
        RenderableBlock::Card { title, body } => {
            let mut lines = vec![Line::from(Span::styled(
                title.clone(),
                Style::default().add_modifier(Modifier::BOLD | Modifier::UNDERLINED),
            ))];
            for (i, child) in body.iter().enumerate() {
                if i > 0 {
                    lines.push(Line::default());
                }
                lines.extend(indent(block_lines(child, width.saturating_sub(2)), 2));
            }
            lines
        }
        RenderableBlock::Columns { columns } => joined(columns, width),
        RenderableBlock::Stack { children } => joined(children, width),
    }
}

/// Children in order with a blank line between them.
fn joined(children: &[RenderableBlock], width: u16) -> Vec<Line<'static>> {
    let mut lines = Vec::new();
    for (i, child) in children.iter().enumerate() {
        if i > 0 {
            lines.push(Line::default());
        }
        lines.extend(block_lines(child, width));
    }
    lines
}

fn wrap_styled(text: &str, width: u16, style: Style) -> Vec<Line<'static>> {
    textwrap::wrap(text, width.max(1) as usize)
        .into_iter()
        .map(|row| Line::from(Span::styled(row.into_owned(), style)))
        .collect()
}

/// A bulleted item with a hanging indent.
fn bullet_lines(item: &str, width: u16) -> Vec<Line<'static>> {
    let options = textwrap::Options::new(width.max(3) as usize)
        .initial_indent("• ")
        .subsequent_indent("  ");
    textwrap::wrap(item, options)
        .into_iter()
        .map(|row| Line::from(Span::raw(row.into_owned())))
        .collect()
}

fn indent(lines: Vec<Line<'static>>, pad: usize) -> Vec<Line<'static>> {
    lines
        .into_iter()
        .map(|mut line| {
            line.spans.insert(0, Span::raw(" ".repeat(pad)));
            line
        })
        .collect()
}
