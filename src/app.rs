use crate::error::{Error, Result};
use crate::models::{
    AppState, Batch, GenerationRequest, MAX_QUESTIONS, MIN_QUESTIONS, Mcq, NUM_OPTIONS,
};

pub const DEFAULT_QUESTION_COUNT: u8 = 3;

/// Message shown above the review pane after the last attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notice {
    Warning(String),
    Error(String),
}

pub struct App {
    pub state: AppState,
    source: String,
    question_count: u8,
    notice: Option<Notice>,
    batch: Option<Batch>,
    selected_entry: usize,
    revealed: Vec<bool>,
    practice: Vec<Mcq>,
    current_question_index: usize,
    selected_option: usize,
    answers: Vec<Option<usize>>,
    result_scroll: usize,
}

impl App {
    pub fn new(source: impl Into<String>, question_count: u8) -> Self {
        Self {
            state: AppState::Editing,
            source: source.into(),
            question_count: question_count.clamp(MIN_QUESTIONS, MAX_QUESTIONS),
            notice: None,
            batch: None,
            selected_entry: 0,
            revealed: Vec::new(),
            practice: Vec::new(),
            current_question_index: 0,
            selected_option: 0,
            answers: Vec::new(),
            result_scroll: 0,
        }
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn question_count(&self) -> u8 {
        self.question_count
    }

    pub fn notice(&self) -> Option<&Notice> {
        self.notice.as_ref()
    }

    pub fn batch(&self) -> Option<&Batch> {
        self.batch.as_ref()
    }

    pub fn selected_entry(&self) -> usize {
        self.selected_entry
    }

    pub fn is_revealed(&self, entry: usize) -> bool {
        self.revealed.get(entry).copied().unwrap_or(false)
    }

    // Source editing

    pub fn push_char(&mut self, c: char) {
        self.source.push(c);
    }

    pub fn push_str(&mut self, text: &str) {
        self.source.push_str(&text.replace("\r\n", "\n").replace('\r', "\n"));
    }

    pub fn pop_char(&mut self) {
        self.source.pop();
    }

    pub fn increase_count(&mut self) {
        self.question_count = (self.question_count + 1).min(MAX_QUESTIONS);
    }

    pub fn decrease_count(&mut self) {
        self.question_count = self.question_count.saturating_sub(1).max(MIN_QUESTIONS);
    }

    pub fn toggle_focus(&mut self) {
        self.state = match self.state {
            AppState::Editing => AppState::Reviewing,
            AppState::Reviewing => AppState::Editing,
            other => other,
        };
    }

    // Generation

    /// Validate the current input and enter the generating state. Returns
    /// `None` (with a warning notice) when there is nothing to send.
    pub fn begin_generation(&mut self) -> Option<GenerationRequest> {
        match GenerationRequest::new(self.source.clone(), self.question_count) {
            Ok(request) => {
                self.notice = None;
                self.state = AppState::Generating;
                Some(request)
            }
            Err(err) => {
                tracing::warn!(error = %err, "generation request rejected");
                self.notice = Some(Notice::Warning(err.to_string()));
                None
            }
        }
    }

    /// Store the outcome of a generation. A failure discards the previous
    /// batch.
    pub fn finish_generation(&mut self, outcome: Result<Batch>) {
        self.selected_entry = 0;
        self.result_scroll = 0;

        match outcome {
            Ok(batch) => {
                self.revealed = vec![false; batch.entries().len()];
                self.notice = batch.warning().map(|msg| Notice::Warning(msg.to_string()));
                self.batch = Some(batch);
                self.state = AppState::Reviewing;
            }
            Err(err) => {
                tracing::error!(error = %err, "generation failed");
                self.batch = None;
                self.revealed.clear();
                self.notice = Some(match err {
                    Error::InvalidRequest(msg) => Notice::Warning(msg),
                    other => Notice::Error(other.to_string()),
                });
                self.state = AppState::Editing;
            }
        }
    }

    // Review

    fn entry_count(&self) -> usize {
        self.batch.as_ref().map_or(0, |batch| batch.entries().len())
    }

    pub fn select_next_entry(&mut self) {
        let max = self.entry_count().saturating_sub(1);
        self.selected_entry = (self.selected_entry + 1).min(max);
    }

    pub fn select_previous_entry(&mut self) {
        self.selected_entry = self.selected_entry.saturating_sub(1);
    }

    pub fn toggle_answer(&mut self) {
        if let Some(revealed) = self.revealed.get_mut(self.selected_entry) {
            *revealed = !*revealed;
        }
    }

    pub fn reveal_all(&mut self) {
        let all_shown = self.revealed.iter().all(|shown| *shown);
        self.revealed.iter_mut().for_each(|shown| *shown = !all_shown);
    }

    // Practice

    pub fn start_practice(&mut self) -> bool {
        let questions: Vec<Mcq> = match &self.batch {
            Some(batch) => batch.questions().cloned().collect(),
            None => Vec::new(),
        };

        if questions.is_empty() {
            return false;
        }

        self.answers = vec![None; questions.len()];
        self.practice = questions;
        self.current_question_index = 0;
        self.selected_option = 0;
        self.result_scroll = 0;
        self.state = AppState::Practicing;
        true
    }

    pub fn current_question(&self) -> Option<&Mcq> {
        self.practice.get(self.current_question_index)
    }

    pub fn current_question_number(&self) -> usize {
        self.current_question_index + 1
    }

    pub fn total_questions(&self) -> usize {
        self.practice.len()
    }

    pub fn selected_option(&self) -> usize {
        self.selected_option
    }

    pub fn practice_questions(&self) -> &[Mcq] {
        &self.practice
    }

    pub fn answers(&self) -> &[Option<usize>] {
        &self.answers
    }

    pub fn select_next_option(&mut self) {
        self.selected_option = (self.selected_option + 1) % NUM_OPTIONS;
    }

    pub fn select_previous_option(&mut self) {
        self.selected_option = (self.selected_option + NUM_OPTIONS - 1) % NUM_OPTIONS;
    }

    pub fn submit_answer(&mut self) {
        if let Some(answer) = self.answers.get_mut(self.current_question_index) {
            *answer = Some(self.selected_option);
        }
        self.current_question_index += 1;
        self.selected_option = 0;

        if self.current_question_index >= self.practice.len() {
            self.state = AppState::Results;
        }
    }

    pub fn calculate_score(&self) -> usize {
        self.answers
            .iter()
            .zip(self.practice.iter())
            .filter(|(answer, question)| answer.is_some() && **answer == question.correct_index())
            .count()
    }

    pub fn result_scroll(&self) -> usize {
        self.result_scroll
    }

    pub fn scroll_results_down(&mut self) {
        // Each question takes at most four rows in the breakdown.
        let max_scroll = (self.practice.len() * 4).saturating_sub(1);
        self.result_scroll = (self.result_scroll + 1).min(max_scroll);
    }

    pub fn scroll_results_up(&mut self) {
        self.result_scroll = self.result_scroll.saturating_sub(1);
    }

    /// Leave practice or results and go back to the batch.
    pub fn back_to_review(&mut self) {
        self.practice.clear();
        self.answers.clear();
        self.current_question_index = 0;
        self.selected_option = 0;
        self.state = AppState::Reviewing;
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new(String::new(), DEFAULT_QUESTION_COUNT)
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::models::ReviewEntry;

    fn sample_batch() -> Batch {
        Batch::from_records(vec![
            json!({"question": "Q1", "options": ["A", "B", "C", "D"], "answer": "B"}),
            json!({"question": "Q2", "options": ["A", "B", "C"], "answer": "A"}),
            json!({"question": "Q3", "options": ["W", "X", "Y", "Z"], "answer": "W"}),
        ])
    }

    fn reviewing_app() -> App {
        let mut app = App::new("Some source text", 3);
        assert!(app.begin_generation().is_some());
        app.finish_generation(Ok(sample_batch()));
        app
    }

    #[test]
    fn test_blank_source_warns_without_request() {
        let mut app = App::new("   ", 3);
        assert!(app.begin_generation().is_none());
        assert_eq!(app.state, AppState::Editing);
        assert_eq!(
            app.notice(),
            Some(&Notice::Warning(
                "Please paste some text into the box first.".to_string()
            ))
        );
    }

    #[test]
    fn test_successful_generation_stores_batch() {
        let app = reviewing_app();
        assert_eq!(app.state, AppState::Reviewing);
        assert!(app.notice().is_none());
        assert_eq!(app.batch().unwrap().entries().len(), 3);
        assert!(!app.is_revealed(0));
    }

    #[test]
    fn test_failed_generation_discards_previous_batch() {
        let mut app = reviewing_app();
        app.begin_generation();
        app.finish_generation(Err(Error::EmptyResponse));

        assert!(app.batch().is_none());
        assert_eq!(app.state, AppState::Editing);
        assert!(matches!(app.notice(), Some(Notice::Error(msg)) if msg.contains("empty response")));
    }

    #[test]
    fn test_new_generation_overwrites_batch() {
        let mut app = reviewing_app();
        app.toggle_answer();
        app.begin_generation();
        app.finish_generation(Ok(Batch::from_records(vec![json!({
            "question": "Only", "options": ["1", "2", "3", "4"], "answer": "4"
        })])));

        let batch = app.batch().unwrap();
        assert_eq!(batch.entries().len(), 1);
        assert!(matches!(&batch.entries()[0], ReviewEntry::Question(q) if q.question == "Only"));
        assert!(!app.is_revealed(0));
    }

    #[test]
    fn test_empty_batch_sets_warning() {
        let mut app = App::new("text", 3);
        app.begin_generation();
        app.finish_generation(Ok(Batch::from_records(vec![])));

        assert_eq!(app.state, AppState::Reviewing);
        assert!(app.batch().unwrap().is_empty());
        assert_eq!(
            app.notice(),
            Some(&Notice::Warning(
                "The API returned an empty list of questions. Please try again.".to_string()
            ))
        );
        assert!(!app.start_practice());

        app.begin_generation();
        app.finish_generation(Ok(sample_batch()));
        assert!(app.notice().is_none());
    }

    #[test]
    fn test_count_clamped() {
        let mut app = App::new("", 42);
        assert_eq!(app.question_count(), MAX_QUESTIONS);
        app.increase_count();
        assert_eq!(app.question_count(), MAX_QUESTIONS);
        for _ in 0..20 {
            app.decrease_count();
        }
        assert_eq!(app.question_count(), MIN_QUESTIONS);
    }

    #[test]
    fn test_editing() {
        let mut app = App::default();
        app.push_str("line one\r\nline two");
        app.push_char('!');
        assert_eq!(app.source(), "line one\nline two!");
        app.pop_char();
        assert_eq!(app.source(), "line one\nline two");
    }

    #[test]
    fn test_review_selection_and_reveal() {
        let mut app = reviewing_app();
        app.select_previous_entry();
        assert_eq!(app.selected_entry(), 0);
        for _ in 0..5 {
            app.select_next_entry();
        }
        assert_eq!(app.selected_entry(), 2);

        app.toggle_answer();
        assert!(app.is_revealed(2));
        app.reveal_all();
        assert!((0..3).all(|i| app.is_revealed(i)));
        app.reveal_all();
        assert!((0..3).all(|i| !app.is_revealed(i)));
    }

    #[test]
    fn test_practice_skips_invalid_records_and_scores() {
        let mut app = reviewing_app();
        assert!(app.start_practice());
        assert_eq!(app.total_questions(), 2);

        // Q1: correct answer is B (index 1)
        app.select_next_option();
        app.submit_answer();
        // Q3: correct answer is W (index 0), pick Z instead
        app.select_previous_option();
        assert_eq!(app.selected_option(), 3);
        app.submit_answer();

        assert_eq!(app.state, AppState::Results);
        assert_eq!(app.calculate_score(), 1);

        app.back_to_review();
        assert_eq!(app.state, AppState::Reviewing);
        assert!(app.batch().is_some());
    }

    #[test]
    fn test_practice_needs_questions() {
        let mut app = App::default();
        assert!(!app.start_practice());
        assert_eq!(app.state, AppState::Editing);
    }
}
