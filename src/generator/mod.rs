//! Question generation: prompt building, the Gemini call and response
//! normalization.

mod gemini;
mod normalize;
mod prompt;

use serde_json::Value;

use crate::config::Config;
use crate::error::Result;
use crate::models::{Batch, GenerationRequest};

pub use gemini::{
    Candidate, Content, GeminiClient, GenerateContentRequest, GenerateContentResponse,
    GenerationConfig, Part, PromptFeedback,
};
pub use normalize::normalize_response;
pub use prompt::{build_request, response_schema, system_prompt, user_prompt};

/// Turns a [`GenerationRequest`] into a validated [`Batch`].
#[derive(Clone)]
pub struct McqGenerator {
    client: GeminiClient,
}

impl McqGenerator {
    pub fn new(config: &Config) -> Result<Self> {
        Ok(Self {
            client: GeminiClient::new(config)?,
        })
    }

    pub fn model(&self) -> &str {
        self.client.model()
    }

    /// Ask the model for questions and return the normalized records
    /// without per-record validation.
    pub async fn generate_records(&self, request: &GenerationRequest) -> Result<Vec<Value>> {
        tracing::info!(
            count = request.question_count(),
            chars = request.source_text().chars().count(),
            "generating MCQs"
        );

        let raw = self.client.generate_text(&build_request(request)).await?;
        let records = normalize_response(&raw)?;

        tracing::info!(records = records.len(), "response normalized");
        Ok(records)
    }

    pub async fn generate(&self, request: &GenerationRequest) -> Result<Batch> {
        let records = self.generate_records(request).await?;
        Ok(Batch::from_records(records))
    }
}
