//! Plain-text and JSON output for headless runs.

use std::fmt::Write;

use crate::models::{Batch, Mcq, OPTION_LABELS, ReviewEntry};

/// Review text for every valid question, in batch order.
pub fn format_review(batch: &Batch) -> String {
    let mut out = String::new();

    for (index, entry) in batch.entries().iter().enumerate() {
        let ReviewEntry::Question(mcq) = entry else {
            continue;
        };
        let _ = writeln!(out, "Q{}: {}", index + 1, mcq.question);
        for (label, option) in OPTION_LABELS.iter().zip(mcq.options.iter()) {
            let _ = writeln!(out, "  {}. {}", label, option);
        }
        let _ = writeln!(out, "  Correct Answer: {}", mcq.answer);
        out.push('\n');
    }

    out
}

/// One line per record that could not be shown.
pub fn issue_lines(batch: &Batch) -> Vec<String> {
    batch
        .entries()
        .iter()
        .filter_map(|entry| match entry {
            ReviewEntry::Issue { number, issue } => Some(issue.message(*number)),
            ReviewEntry::Question(_) => None,
        })
        .collect()
}

pub fn format_json(batch: &Batch) -> serde_json::Result<String> {
    let questions: Vec<&Mcq> = batch.questions().collect();
    serde_json::to_string_pretty(&questions)
}

#[cfg(test)]
mod tests {
    use serde_json::{Value, json};

    use super::*;

    fn batch() -> Batch {
        Batch::from_records(vec![
            json!({"question": "Q1", "options": ["A", "B", "C", "D"], "answer": "B"}),
            json!({"question": "Q2", "options": ["A", "B"], "answer": "A"}),
        ])
    }

    #[test]
    fn test_format_review() {
        let text = format_review(&batch());
        assert_eq!(
            text,
            "Q1: Q1\n  A. A\n  B. B\n  C. C\n  D. D\n  Correct Answer: B\n\n"
        );
    }

    #[test]
    fn test_issue_lines() {
        assert_eq!(
            issue_lines(&batch()),
            vec!["Q2 did not return 4 options. Skipping.".to_string()]
        );
    }

    #[test]
    fn test_format_json_only_valid_questions() {
        let parsed: Value = serde_json::from_str(&format_json(&batch()).unwrap()).unwrap();
        assert_eq!(
            parsed,
            json!([{"question": "Q1", "options": ["A", "B", "C", "D"], "answer": "B"}])
        );
    }
}
