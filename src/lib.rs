//! # mcq-gen
//!
//! Generate multiple-choice questions from pasted text with Google Gemini and
//! review them in the terminal.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use mcq_gen::{App, Config, McqGenerator, Session};
//!
//! #[tokio::main]
//! async fn main() -> mcq_gen::Result<()> {
//!     let config = Config::from_env()?;
//!     let generator = McqGenerator::new(&config)?;
//!
//!     Session::new(App::default(), generator).run().await
//! }
//! ```

mod app;
pub mod config;
pub mod error;
pub mod generator;
mod models;
pub mod report;
pub mod terminal;
mod ui;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

pub use app::{App, DEFAULT_QUESTION_COUNT, Notice};
pub use config::Config;
pub use error::{ApiError, Error, Result};
pub use generator::{McqGenerator, normalize_response};
pub use models::{
    AppState, Batch, GenerationRequest, MAX_QUESTIONS, MIN_QUESTIONS, Mcq, NUM_OPTIONS,
    RecordIssue, ReviewEntry,
};

/// What the event loop should do after a key press.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    None,
    Generate,
    Quit,
}

/// An interactive terminal session around one [`App`].
pub struct Session {
    app: App,
    generator: McqGenerator,
}

impl Session {
    pub fn new(app: App, generator: McqGenerator) -> Self {
        Self { app, generator }
    }

    /// Take over the terminal until the user quits.
    pub async fn run(mut self) -> Result<()> {
        let mut term = terminal::init()?;
        let result = run_event_loop(&mut term, &mut self.app, &self.generator).await;
        terminal::restore()?;
        result
    }
}

async fn run_event_loop(
    terminal: &mut terminal::AppTerminal,
    app: &mut App,
    generator: &McqGenerator,
) -> Result<()> {
    loop {
        terminal.draw(|frame| ui::render(frame, app))?;

        let action = match event::read()? {
            Event::Key(key) if key.kind == KeyEventKind::Press => handle_key(app, key),
            Event::Paste(text) => {
                handle_paste(app, &text);
                Action::None
            }
            _ => Action::None,
        };

        match action {
            Action::Quit => break,
            Action::Generate => {
                let Some(request) = app.begin_generation() else {
                    continue;
                };
                terminal.draw(|frame| ui::render(frame, app))?;
                let outcome = generator.generate(&request).await;
                app.finish_generation(outcome);
            }
            Action::None => {}
        }
    }

    Ok(())
}

pub fn handle_paste(app: &mut App, text: &str) {
    if app.state == AppState::Editing {
        app.push_str(text);
    }
}

pub fn handle_key(app: &mut App, key: KeyEvent) -> Action {
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return match key.code {
            KeyCode::Char('c') => Action::Quit,
            KeyCode::Char('g')
                if matches!(app.state, AppState::Editing | AppState::Reviewing) =>
            {
                Action::Generate
            }
            _ => Action::None,
        };
    }

    match app.state {
        AppState::Editing => handle_editing_input(app, key.code),
        AppState::Generating => Action::None,
        AppState::Reviewing => handle_review_input(app, key.code),
        AppState::Practicing => handle_practice_input(app, key.code),
        AppState::Results => handle_result_input(app, key.code),
    }
}

fn handle_editing_input(app: &mut App, key: KeyCode) -> Action {
    match key {
        KeyCode::Char(c) => app.push_char(c),
        KeyCode::Enter => app.push_char('\n'),
        KeyCode::Backspace => app.pop_char(),
        KeyCode::Tab => app.toggle_focus(),
        KeyCode::Esc => return Action::Quit,
        _ => {}
    }
    Action::None
}

fn handle_review_input(app: &mut App, key: KeyCode) -> Action {
    match key {
        KeyCode::Down | KeyCode::Char('j') => app.select_next_entry(),
        KeyCode::Up | KeyCode::Char('k') => app.select_previous_entry(),
        KeyCode::Char('a') | KeyCode::Enter => app.toggle_answer(),
        KeyCode::Char('A') => app.reveal_all(),
        KeyCode::Char('+') | KeyCode::Char('=') => app.increase_count(),
        KeyCode::Char('-') => app.decrease_count(),
        KeyCode::Char('p') | KeyCode::Char('P') => {
            app.start_practice();
        }
        KeyCode::Char('g') | KeyCode::Char('G') => return Action::Generate,
        KeyCode::Tab => app.toggle_focus(),
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => return Action::Quit,
        _ => {}
    }
    Action::None
}

fn handle_practice_input(app: &mut App, key: KeyCode) -> Action {
    match key {
        KeyCode::Up | KeyCode::Char('k') => app.select_previous_option(),
        KeyCode::Down | KeyCode::Char('j') => app.select_next_option(),
        KeyCode::Enter | KeyCode::Char(' ') => app.submit_answer(),
        KeyCode::Esc => app.back_to_review(),
        KeyCode::Char('q') | KeyCode::Char('Q') => return Action::Quit,
        _ => {}
    }
    Action::None
}

fn handle_result_input(app: &mut App, key: KeyCode) -> Action {
    match key {
        KeyCode::Down | KeyCode::Char('j') => app.scroll_results_down(),
        KeyCode::Up | KeyCode::Char('k') => app.scroll_results_up(),
        KeyCode::Char('r') | KeyCode::Char('R') | KeyCode::Esc => app.back_to_review(),
        KeyCode::Char('q') | KeyCode::Char('Q') => return Action::Quit,
        _ => {}
    }
    Action::None
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn press(app: &mut App, code: KeyCode) -> Action {
        handle_key(app, KeyEvent::new(code, KeyModifiers::NONE))
    }

    fn ctrl(app: &mut App, c: char) -> Action {
        handle_key(app, KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL))
    }

    #[test]
    fn test_typing_and_paste() {
        let mut app = App::default();
        for c in "hi q".chars() {
            assert_eq!(press(&mut app, KeyCode::Char(c)), Action::None);
        }
        press(&mut app, KeyCode::Enter);
        handle_paste(&mut app, "pasted");
        press(&mut app, KeyCode::Backspace);
        assert_eq!(app.source(), "hi q\npaste");
    }

    #[test]
    fn test_paste_ignored_outside_editor() {
        let mut app = App::default();
        press(&mut app, KeyCode::Tab);
        assert_eq!(app.state, AppState::Reviewing);
        handle_paste(&mut app, "nope");
        assert_eq!(app.source(), "");
    }

    #[test]
    fn test_control_keys() {
        let mut app = App::default();
        assert_eq!(ctrl(&mut app, 'g'), Action::Generate);
        assert_eq!(ctrl(&mut app, 'c'), Action::Quit);
        assert_eq!(app.source(), "");

        app.state = AppState::Generating;
        assert_eq!(ctrl(&mut app, 'g'), Action::None);
        assert_eq!(press(&mut app, KeyCode::Char('q')), Action::None);
    }

    #[test]
    fn test_generate_only_from_workspace() {
        let mut app = App::new("text", 3);
        app.begin_generation();
        app.finish_generation(Ok(Batch::from_records(vec![json!({
            "question": "Q1", "options": ["A", "B", "C", "D"], "answer": "A"
        })])));
        assert_eq!(ctrl(&mut app, 'g'), Action::Generate);

        press(&mut app, KeyCode::Char('p'));
        assert_eq!(app.state, AppState::Practicing);
        assert_eq!(ctrl(&mut app, 'g'), Action::None);
        assert_eq!(press(&mut app, KeyCode::Esc), Action::None);
        assert_eq!(app.state, AppState::Reviewing);

        press(&mut app, KeyCode::Char('p'));
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.state, AppState::Results);
        assert_eq!(ctrl(&mut app, 'g'), Action::None);
        assert_eq!(ctrl(&mut app, 'c'), Action::Quit);
    }

    #[test]
    fn test_review_keys() {
        let mut app = App::new("text", 3);
        app.begin_generation();
        app.finish_generation(Ok(Batch::from_records(vec![
            json!({"question": "Q1", "options": ["A", "B", "C", "D"], "answer": "A"}),
            json!({"question": "Q2", "options": ["A", "B", "C", "D"], "answer": "D"}),
        ])));
        assert_eq!(app.state, AppState::Reviewing);

        press(&mut app, KeyCode::Char('j'));
        press(&mut app, KeyCode::Char('a'));
        assert!(app.is_revealed(1));

        press(&mut app, KeyCode::Char('+'));
        assert_eq!(app.question_count(), 4);
        assert_eq!(press(&mut app, KeyCode::Char('g')), Action::Generate);

        press(&mut app, KeyCode::Char('p'));
        assert_eq!(app.state, AppState::Practicing);
        press(&mut app, KeyCode::Enter);
        press(&mut app, KeyCode::Char('k'));
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.state, AppState::Results);
        assert_eq!(app.calculate_score(), 2);

        press(&mut app, KeyCode::Char('r'));
        assert_eq!(app.state, AppState::Reviewing);
        assert_eq!(press(&mut app, KeyCode::Char('q')), Action::Quit);
    }
}
