//! # Timeline
//!
//! The course path as a vertical timeline: a dot per step, a connector
//! down to the next one, title + badge on the dot's line, description
//! alongside the connector.

use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};

use crate::core::content::PathStep;
use crate::tui::components::cards::pill;

/// Build the timeline's lines, pre-wrapped at `width`. Steps render in
/// stored order; order is the narrative.
pub fn timeline_lines(steps: &[PathStep], width: u16) -> Vec<Line<'static>> {
    let mut lines = Vec::new();
    let desc_width = width.saturating_sub(2).max(1);

    for (i, step) in steps.iter().enumerate() {
        let is_last = i == steps.len() - 1;

        lines.push(Line::from(vec![
            Span::styled("● ", Style::default().fg(Color::White)),
            Span::styled(
                step.title.clone(),
                Style::default().add_modifier(Modifier::BOLD),
            ),
            Span::raw(" "),
            pill(&step.badge),
        ]));

        let connector = if is_last { "  " } else { "│ " };
        for row in textwrap::wrap(&step.description, desc_width as usize) {
            lines.push(Line::from(vec![
                Span::styled(connector, Style::default().fg(Color::DarkGray)),
                Span::styled(row.into_owned(), Style::default().fg(Color::Gray)),
            ]));
        }
        if !is_last {
            lines.push(Line::from(Span::styled(
                "│",
                Style::default().fg(Color::DarkGray),
            )));
        }
    }
    lines
}

#[cfg(test)]
mod tests {
    use super::*;

    fn steps(n: usize) -> Vec<PathStep> {
        (0..n)
            .map(|i| PathStep {
                title: format!("Step {i}"),
                badge: "badge".to_string(),
                description: "what happens here".to_string(),
            })
            .collect()
    }

    #[test]
    fn test_every_step_gets_a_dot() {
        let lines = timeline_lines(&steps(3), 40);
        let dots = lines
            .iter()
            .filter(|l| l.to_string().starts_with('●'))
            .count();
        assert_eq!(dots, 3);
    }

    #[test]
    fn test_connector_runs_between_steps_not_after_last() {
        let lines = timeline_lines(&steps(2), 40);
        let text: Vec<String> = lines.iter().map(|l| l.to_string()).collect();
        // The first step's description sits on the connector...
        assert!(text.iter().any(|l| l.starts_with("│ ")));
        // ...but nothing after the last step's description does.
        let last_dot = text.iter().rposition(|l| l.starts_with('●')).unwrap();
        assert!(text[last_dot + 1..].iter().all(|l| !l.starts_with('│')));
    }

    #[test]
    fn test_empty_path_renders_nothing() {
        assert!(timeline_lines(&[], 40).is_empty());
    }
}
