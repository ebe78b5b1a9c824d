//! Builds the `generateContent` request for a [`GenerationRequest`].

use serde_json::{Value, json};

use crate::models::GenerationRequest;

use super::gemini::{Content, GenerateContentRequest, GenerationConfig};

/// Shape the model is asked to produce: an array of four-option questions.
pub fn response_schema() -> Value {
    json!({
        "type": "ARRAY",
        "items": {
            "type": "OBJECT",
            "properties": {
                "question": {"type": "STRING"},
                "options": {
                    "type": "ARRAY",
                    "items": {"type": "STRING"},
                    "minItems": 4,
                    "maxItems": 4
                },
                "answer": {"type": "STRING"}
            },
            "required": ["question", "options", "answer"]
        }
    })
}

pub fn system_prompt() -> String {
    let schema = serde_json::to_string_pretty(&response_schema()).unwrap_or_default();

    format!(
        "You are an expert quiz creator. Your role is to generate high-quality, \
         multiple-choice questions (MCQs) based *only* on the text provided by the user. \
         You must generate exactly four options for each question. \
         One of these options must be the correct answer, which is directly supported by the text. \
         The other three options must be plausible but incorrect distractors. \
         The 'answer' field in your response must exactly match the text of the correct option. \
         You MUST format your output as a single JSON array of objects, matching this schema:\n\
         {}\n\
         Do not include any other text or markdown formatting (like ```json) in your response. \
         Just provide the raw JSON array.",
        schema
    )
}

pub fn user_prompt(request: &GenerationRequest) -> String {
    format!(
        "Please generate {} multiple-choice questions from the following text:\n\n\
         ---BEGIN TEXT---\n{}\n---END TEXT---",
        request.question_count(),
        request.source_text()
    )
}

pub fn build_request(request: &GenerationRequest) -> GenerateContentRequest {
    GenerateContentRequest {
        system_instruction: Some(Content::text(None, system_prompt())),
        contents: vec![Content::text(Some("user"), user_prompt(request))],
        generation_config: Some(GenerationConfig {
            response_mime_type: "application/json".to_string(),
            response_schema: Some(response_schema()),
        }),
    }
}
