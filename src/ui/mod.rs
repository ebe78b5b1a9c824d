mod quiz;
mod result;
mod review;
mod source;

use ratatui::{
    prelude::*,
    widgets::{Block, Paragraph},
};

use crate::app::App;
use crate::models::{AppState, OPTION_LABELS};

pub fn render(frame: &mut Frame, app: &App) {
    let area = frame.area();
    frame.render_widget(Block::default().bg(Color::Reset), area);

    match app.state {
        AppState::Editing | AppState::Generating | AppState::Reviewing => {
            render_workspace(frame, area, app)
        }
        AppState::Practicing => quiz::render(frame, area, app),
        AppState::Results => result::render(frame, area, app),
    }
}

fn render_workspace(frame: &mut Frame, area: Rect, app: &App) {
    let rows = Layout::vertical([
        Constraint::Length(1),
        Constraint::Fill(1),
        Constraint::Length(1),
    ])
    .split(area);

    let title = Paragraph::new(Line::from(vec![
        Span::styled(" MCQ GENERATOR ", Style::default().fg(Color::Cyan).bold()),
        Span::styled(
            format!(" {} question(s)", app.question_count()),
            Style::default().fg(Color::DarkGray),
        ),
    ]));
    frame.render_widget(title, rows[0]);

    let panes = Layout::horizontal([Constraint::Fill(6), Constraint::Fill(5)]).split(rows[1]);
    source::render(frame, panes[0], app);
    review::render(frame, panes[1], app);

    render_controls(frame, rows[2], app.state);
}

fn render_controls(frame: &mut Frame, area: Rect, state: AppState) {
    let hint = match state {
        AppState::Editing => "type or paste  ·  ctrl-g generate  ·  tab review  ·  esc quit",
        AppState::Generating => "generating...",
        _ => {
            "j/k select  ·  a answer  ·  A all  ·  +/- count  ·  p practice  ·  g generate  ·  tab edit  ·  q quit"
        }
    };

    let widget = Paragraph::new(hint)
        .alignment(Alignment::Center)
        .fg(Color::DarkGray);
    frame.render_widget(widget, area);
}

/// A labelled option row, e.g. `    B. Paris`.
fn option_line<'a>(prefix: &'a str, index: usize, option: &'a str, style: Style) -> Line<'a> {
    Line::from(vec![
        Span::styled(prefix, style),
        Span::styled(format!("{}. ", OPTION_LABELS[index]), style),
        Span::styled(option, style),
    ])
}
