use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Padding, Paragraph, Wrap},
};

use super::option_line;
use crate::app::App;
use crate::models::Mcq;

pub fn render(frame: &mut Frame, area: Rect, app: &App) {
    let Some(mcq) = app.current_question() else {
        return;
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Color::Cyan)
        .title(" Practice ")
        .title(progress_title(app).right_aligned())
        .padding(Padding::new(2, 2, 1, 0));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let rows = Layout::vertical([Constraint::Fill(1), Constraint::Length(1)]).split(inner);

    let lines = practice_lines(app.current_question_number(), mcq, app.selected_option());
    frame.render_widget(Paragraph::new(lines).wrap(Wrap { trim: false }), rows[0]);

    let hint = Paragraph::new("j/k choose  ·  enter submit  ·  esc back to review  ·  q quit")
        .alignment(Alignment::Center)
        .fg(Color::DarkGray);
    frame.render_widget(hint, rows[1]);
}

fn progress_title(app: &App) -> Line<'static> {
    let answered = app.current_question_number() - 1;
    Line::from(format!(
        " {}/{} · {} answered ",
        app.current_question_number(),
        app.total_questions(),
        answered
    ))
    .fg(Color::DarkGray)
}

/// The current question in the same `Qn:` layout as the review pane.
fn practice_lines(number: usize, mcq: &Mcq, selected: usize) -> Vec<Line<'_>> {
    let mut lines = vec![
        Line::from(vec![
            Span::styled(format!("Q{}: ", number), Style::default().fg(Color::Cyan).bold()),
            Span::styled(mcq.question.as_str(), Style::default().fg(Color::White).bold()),
        ]),
        Line::from(""),
    ];

    for (index, option) in mcq.options.iter().enumerate() {
        let (prefix, style) = if index == selected {
            (" > ", Style::default().fg(Color::Cyan).bold())
        } else {
            ("   ", Style::default().fg(Color::Gray))
        };
        lines.push(option_line(prefix, index, option, style));
    }

    lines
}
