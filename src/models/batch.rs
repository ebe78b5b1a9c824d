//! Per-record validation of a normalized response.
//!
//! Each candidate record becomes a [`ReviewEntry`]. A bad record is kept as
//! an issue in its original position and the rest of the batch still renders.

use serde_json::Value;

use super::mcq::{Mcq, NUM_OPTIONS};

/// Why a record could not be shown as a question.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RecordIssue {
    #[error("record is not a JSON object")]
    NotAnObject,

    #[error("Missing expected key '{0}'")]
    MissingKey(&'static str),

    #[error("did not return 4 options (got {0})")]
    WrongOptionCount(usize),
}

impl RecordIssue {
    /// Line shown in place of question `number` (1-based).
    pub fn message(&self, number: usize) -> String {
        match self {
            RecordIssue::WrongOptionCount(_) => {
                format!("Q{} did not return {} options. Skipping.", number, NUM_OPTIONS)
            }
            other => format!("Error displaying MCQ {}: {}", number, other),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReviewEntry {
    Question(Mcq),
    Issue { number: usize, issue: RecordIssue },
}

/// The validated result of one generation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Batch {
    entries: Vec<ReviewEntry>,
}

impl Batch {
    pub fn from_records(records: Vec<Value>) -> Self {
        let entries = records
            .iter()
            .enumerate()
            .map(|(index, record)| match validate_record(record) {
                Ok(mcq) => ReviewEntry::Question(mcq),
                Err(issue) => {
                    let number = index + 1;
                    tracing::warn!(number, %issue, "skipping generated record");
                    ReviewEntry::Issue { number, issue }
                }
            })
            .collect();

        Self { entries }
    }

    pub fn entries(&self) -> &[ReviewEntry] {
        &self.entries
    }

    pub fn questions(&self) -> impl Iterator<Item = &Mcq> {
        self.entries.iter().filter_map(|entry| match entry {
            ReviewEntry::Question(mcq) => Some(mcq),
            ReviewEntry::Issue { .. } => None,
        })
    }

    pub fn question_count(&self) -> usize {
        self.questions().count()
    }

    pub fn issue_count(&self) -> usize {
        self.entries.len() - self.question_count()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Warning for a batch with nothing to show as a question.
    pub fn warning(&self) -> Option<&'static str> {
        if self.is_empty() {
            Some("The API returned an empty list of questions. Please try again.")
        } else if self.question_count() == 0 {
            Some("None of the generated questions could be displayed. Please try again.")
        } else {
            None
        }
    }
}

/// Check one record, in display order: question, options, answer.
///
/// Present scalar values that are not strings are shown as their JSON text.
pub fn validate_record(record: &Value) -> Result<Mcq, RecordIssue> {
    let object = record.as_object().ok_or(RecordIssue::NotAnObject)?;

    let question = text_field(object, "question")?;

    let options: Vec<String> = match object.get("options") {
        Some(Value::Array(items)) => items.iter().map(display_text).collect(),
        _ => Vec::new(),
    };
    let options: [String; NUM_OPTIONS] = options
        .try_into()
        .map_err(|rest: Vec<String>| RecordIssue::WrongOptionCount(rest.len()))?;

    let answer = text_field(object, "answer")?;

    Ok(Mcq {
        question,
        options,
        answer,
    })
}

fn text_field(
    object: &serde_json::Map<String, Value>,
    key: &'static str,
) -> Result<String, RecordIssue> {
    object
        .get(key)
        .map(display_text)
        .ok_or(RecordIssue::MissingKey(key))
}

fn display_text(value: &Value) -> String {
    match value {
        Value::String(text) => text.clone(),
        other => other.to_string(),
    }
}
