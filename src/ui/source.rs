use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Padding, Paragraph, Wrap},
};

use crate::app::App;
use crate::models::{AppState, MAX_QUESTIONS, MIN_QUESTIONS};

pub fn render(frame: &mut Frame, area: Rect, app: &App) {
    let focused = app.state == AppState::Editing;
    let border = if focused { Color::Cyan } else { Color::DarkGray };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(border)
        .title(" Paste your text here ")
        .padding(Padding::horizontal(1));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let chunks = Layout::vertical([Constraint::Fill(1), Constraint::Length(1)]).split(inner);

    let mut text = app.source().to_string();
    if focused {
        text.push('_');
    }

    let widget = if app.source().is_empty() && !focused {
        Paragraph::new("No text yet.".fg(Color::DarkGray))
    } else {
        let scroll = bottom_scroll(&text, chunks[0].width, chunks[0].height);
        Paragraph::new(text)
            .wrap(Wrap { trim: false })
            .scroll((scroll, 0))
            .fg(Color::White)
    };
    frame.render_widget(widget, chunks[0]);

    let count = Line::from(vec![
        Span::styled("Number of questions: ", Style::default().fg(Color::Gray)),
        Span::styled(
            app.question_count().to_string(),
            Style::default().fg(Color::Yellow).bold(),
        ),
        Span::styled(
            format!("  ({}-{})", MIN_QUESTIONS, MAX_QUESTIONS),
            Style::default().fg(Color::DarkGray),
        ),
    ]);
    frame.render_widget(Paragraph::new(count), chunks[1]);
}

/// Vertical scroll that keeps the end of `text` in view.
fn bottom_scroll(text: &str, width: u16, height: u16) -> u16 {
    let width = usize::from(width.max(1));
    let lines: usize = text
        .split('\n')
        .map(|line| line.chars().count().div_ceil(width).max(1))
        .sum();
    lines.saturating_sub(usize::from(height)) as u16
}
