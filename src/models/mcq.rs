use serde::{Deserialize, Serialize};

pub const NUM_OPTIONS: usize = 4;
pub const OPTION_LABELS: [char; NUM_OPTIONS] = ['A', 'B', 'C', 'D'];

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Mcq {
    pub question: String,
    pub options: [String; NUM_OPTIONS],
    pub answer: String,
}

impl Mcq {
    /// Position of the option matching `answer`, if the model kept its
    /// contract.
    pub fn correct_index(&self) -> Option<usize> {
        self.options.iter().position(|option| option == &self.answer)
    }
}
