use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Padding, Paragraph, Wrap},
};

use crate::app::{App, Notice};
use super::option_line;
use crate::models::{AppState, Mcq, ReviewEntry};

pub fn render(frame: &mut Frame, area: Rect, app: &App) {
    let focused = app.state == AppState::Reviewing;
    let border = if focused { Color::Cyan } else { Color::DarkGray };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(border)
        .title(" Generated MCQs ")
        .padding(Padding::horizontal(1));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let (lines, selected) = review_lines(app);
    let scroll = selected
        .map(|(start, end)| scroll_for(start, end, usize::from(inner.height)))
        .unwrap_or(0);

    let widget = Paragraph::new(lines)
        .wrap(Wrap { trim: true })
        .scroll((scroll as u16, 0));
    frame.render_widget(widget, inner);
}

/// Lines of the review pane plus the line range of the selected entry.
fn review_lines(app: &App) -> (Vec<Line<'_>>, Option<(usize, usize)>) {
    let mut lines = Vec::new();

    if app.state == AppState::Generating {
        lines.push(Line::from(Span::styled(
            "Generating... This might take a moment.",
            Style::default().fg(Color::Yellow).bold(),
        )));
        lines.push(Line::from(""));
    }

    match app.notice() {
        Some(Notice::Warning(msg)) => {
            lines.push(Line::from(Span::styled(
                msg.as_str(),
                Style::default().fg(Color::Yellow),
            )));
            lines.push(Line::from(""));
        }
        Some(Notice::Error(msg)) => {
            lines.push(Line::from(Span::styled(
                msg.as_str(),
                Style::default().fg(Color::Red),
            )));
            lines.push(Line::from(""));
        }
        None => {}
    }

    let Some(batch) = app.batch() else {
        if app.state != AppState::Generating {
            lines.push(Line::from(
                "Press ctrl-g to generate questions from your text.".fg(Color::Blue),
            ));
        }
        return (lines, None);
    };

    let mut selected = None;
    for (index, entry) in batch.entries().iter().enumerate() {
        let start = lines.len();
        let is_selected = focused_on(app, index);

        match entry {
            ReviewEntry::Question(mcq) => {
                push_question(&mut lines, index + 1, mcq, is_selected, app.is_revealed(index))
            }
            ReviewEntry::Issue { number, issue } => {
                let marker = if is_selected { "> " } else { "  " };
                lines.push(Line::from(vec![
                    Span::styled(marker, Style::default().fg(Color::Cyan)),
                    Span::styled(issue.message(*number), Style::default().fg(Color::Yellow)),
                ]));
            }
        }
        lines.push(Line::from(""));

        if index == app.selected_entry() {
            selected = Some((start, lines.len()));
        }
    }

    (lines, selected)
}

fn focused_on(app: &App, index: usize) -> bool {
    app.state == AppState::Reviewing && index == app.selected_entry()
}

fn push_question<'a>(
    lines: &mut Vec<Line<'a>>,
    number: usize,
    mcq: &'a Mcq,
    is_selected: bool,
    revealed: bool,
) {
    let title_style = if is_selected {
        Style::default().fg(Color::Cyan).bold()
    } else {
        Style::default().fg(Color::White).bold()
    };
    let marker = if is_selected { "> " } else { "  " };

    lines.push(Line::from(vec![
        Span::styled(marker, title_style),
        Span::styled(format!("Q{}: ", number), title_style),
        Span::styled(mcq.question.as_str(), title_style),
    ]));

    let correct = mcq.correct_index();
    for (index, option) in mcq.options.iter().enumerate() {
        let style = if revealed && correct == Some(index) {
            Style::default().fg(Color::Green).bold()
        } else {
            Style::default().fg(Color::Gray)
        };
        lines.push(option_line("    ", index, option, style));
    }

    if revealed {
        lines.push(Line::from(Span::styled(
            format!("    Correct Answer: {}", mcq.answer),
            Style::default().fg(Color::Green),
        )));
    } else if is_selected {
        lines.push(Line::from("    [a] show answer".fg(Color::DarkGray)));
    }
}

fn scroll_for(start: usize, end: usize, height: usize) -> usize {
    if end > height {
        (end - height).min(start)
    } else {
        0
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::models::Batch;

    fn text(lines: &[Line]) -> Vec<String> {
        lines.iter().map(|line| line.to_string()).collect()
    }

    #[test]
    fn test_placeholder_without_batch() {
        let app = App::default();
        let (lines, selected) = review_lines(&app);
        assert!(selected.is_none());
        assert!(text(&lines)[0].contains("ctrl-g"));
    }

    #[test]
    fn test_batch_lines() {
        let mut app = App::new("text", 2);
        app.begin_generation();
        app.finish_generation(Ok(Batch::from_records(vec![
            json!({"question": "Q1", "options": ["A", "B", "C"], "answer": "A"}),
            json!({"question": "What is B?", "options": ["A", "B", "C", "D"], "answer": "B"}),
        ])));
        app.select_next_entry();
        app.toggle_answer();

        let (lines, selected) = review_lines(&app);
        let lines = text(&lines);

        assert!(lines[0].contains("Q1 did not return 4 options. Skipping."));
        assert!(lines.iter().any(|l| l.contains("Q2: What is B?")));
        assert!(lines.iter().any(|l| l.contains("Correct Answer: B")));
        assert_eq!(selected, Some((2, 9)));
    }

    #[test]
    fn test_scroll_for() {
        assert_eq!(scroll_for(0, 5, 10), 0);
        assert_eq!(scroll_for(8, 14, 10), 4);
        assert_eq!(scroll_for(3, 20, 10), 3);
    }
}
