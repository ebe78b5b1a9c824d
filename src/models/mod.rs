mod batch;
mod mcq;
mod request;

pub use batch::{Batch, RecordIssue, ReviewEntry};
pub use mcq::{Mcq, NUM_OPTIONS, OPTION_LABELS};
pub use request::{GenerationRequest, MAX_QUESTIONS, MIN_QUESTIONS};

/// Which screen the terminal UI is showing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppState {
    /// Source pane focused, text is editable.
    Editing,
    /// Waiting on the API.
    Generating,
    /// Review pane focused.
    Reviewing,
    /// Answering the batch one question at a time.
    Practicing,
    /// Score summary after practice.
    Results,
}
