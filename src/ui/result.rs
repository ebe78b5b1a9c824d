use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Padding, Paragraph},
};

use super::option_line;
use crate::app::App;
use crate::models::Mcq;

pub fn render(frame: &mut Frame, area: Rect, app: &App) {
    let score = app.calculate_score();
    let total = app.total_questions();
    let percentage = percentage(score, total);

    let rows = Layout::vertical([
        Constraint::Length(4),
        Constraint::Fill(1),
        Constraint::Length(1),
    ])
    .margin(1)
    .split(area);

    let summary = Paragraph::new(vec![
        Line::from(Span::styled("PRACTICE RESULTS", Style::default().fg(Color::Cyan).bold())),
        Line::from(""),
        Line::from(Span::styled(
            format!("{} / {} correct  ({:.0}%)", score, total, percentage),
            Style::default().fg(grade_color(percentage)).bold(),
        )),
    ])
    .alignment(Alignment::Center)
    .block(Block::default().borders(Borders::BOTTOM).border_style(Color::DarkGray));
    frame.render_widget(summary, rows[0]);

    let lines = breakdown_lines(app.practice_questions(), app.answers());
    let scroll = app
        .result_scroll()
        .min(lines.len().saturating_sub(usize::from(rows[1].height)));
    let breakdown = Paragraph::new(lines)
        .block(Block::default().padding(Padding::new(1, 1, 1, 0)))
        .scroll((scroll as u16, 0));
    frame.render_widget(breakdown, rows[1]);

    let hint = Paragraph::new("j/k scroll  ·  r back to review  ·  q quit")
        .alignment(Alignment::Center)
        .fg(Color::DarkGray);
    frame.render_widget(hint, rows[2]);
}

fn percentage(score: usize, total: usize) -> f64 {
    if total > 0 {
        (score as f64 / total as f64) * 100.0
    } else {
        0.0
    }
}

fn grade_color(percentage: f64) -> Color {
    match percentage as u32 {
        90..=100 => Color::Green,
        70..=89 => Color::Cyan,
        50..=69 => Color::Yellow,
        _ => Color::Red,
    }
}

/// One header per question, followed by the picked option and, when it was
/// wrong, the option the answer key points at.
fn breakdown_lines<'a>(questions: &'a [Mcq], answers: &[Option<usize>]) -> Vec<Line<'a>> {
    let mut lines = Vec::new();

    for (index, mcq) in questions.iter().enumerate() {
        let picked = answers.get(index).copied().flatten();
        let correct = mcq.correct_index();
        let is_correct = picked.is_some() && picked == correct;
        let (symbol, color) = if is_correct {
            ("+", Color::Green)
        } else {
            ("-", Color::Red)
        };

        lines.push(Line::from(vec![
            Span::styled(format!("{} ", symbol), Style::default().fg(color).bold()),
            Span::styled(format!("Q{}: ", index + 1), Style::default().fg(Color::White).bold()),
            Span::styled(mcq.question.as_str(), Style::default().fg(Color::Gray)),
        ]));

        match picked {
            Some(choice) => lines.push(option_line(
                "    you: ",
                choice,
                &mcq.options[choice],
                Style::default().fg(color),
            )),
            None => lines.push(Line::from("    you: no answer".fg(Color::DarkGray))),
        }

        if !is_correct {
            let green = Style::default().fg(Color::Green);
            match correct {
                Some(answer) => {
                    lines.push(option_line("    key: ", answer, &mcq.options[answer], green))
                }
                None => lines.push(Line::from(Span::styled(
                    format!("    key: {} (not among the options)", mcq.answer),
                    green,
                ))),
            }
        }
        lines.push(Line::from(""));
    }

    lines
}
