use crate::error::{Error, Result};

pub const MIN_QUESTIONS: u8 = 1;
pub const MAX_QUESTIONS: u8 = 10;

/// Source text plus the number of questions to ask for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationRequest {
    source_text: String,
    question_count: u8,
}

impl GenerationRequest {
    pub fn new(source_text: impl Into<String>, question_count: u8) -> Result<Self> {
        let source_text = source_text.into();

        if source_text.trim().is_empty() {
            return Err(Error::InvalidRequest(
                "Please paste some text into the box first.".to_string(),
            ));
        }

        if !(MIN_QUESTIONS..=MAX_QUESTIONS).contains(&question_count) {
            return Err(Error::InvalidRequest(format!(
                "Number of questions must be between {} and {}.",
                MIN_QUESTIONS, MAX_QUESTIONS
            )));
        }

        Ok(Self {
            source_text,
            question_count,
        })
    }

    pub fn source_text(&self) -> &str {
        &self.source_text
    }

    pub fn question_count(&self) -> u8 {
        self.question_count
    }
}
