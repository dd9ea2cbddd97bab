//! `rig`-backed advisory provider (feature `llm`).
//!
//! Wraps a Gemini completion model behind [`AdvisoryProvider`]. Credentials
//! come from the environment (`GEMINI_API_KEY`); the model name resolves from
//! `MACROFLOW_ADVISORY_MODEL` with a sensible default.

use async_trait::async_trait;
use rig::client::{CompletionClient, ProviderClient};
use rig::completion::CompletionModel;
use rig::message::AssistantContent;
use rig::providers::gemini;
use tracing::instrument;

use super::{build_prompt, AdvisoryError, AdvisoryProvider, PREAMBLE};
use crate::input::InputVector;

const DEFAULT_MODEL: &str = "gemini-2.0-flash";

/// Advisory provider backed by a Gemini completion model via `rig`.
pub struct GeminiAdvisor {
    client: gemini::Client,
    model: String,
}

impl GeminiAdvisor {
    /// Build from the environment.
    ///
    /// Reads `GEMINI_API_KEY` (via the process environment, `.env` honored)
    /// and `MACROFLOW_ADVISORY_MODEL` for the model name.
    #[must_use]
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();
        let model =
            std::env::var("MACROFLOW_ADVISORY_MODEL").unwrap_or_else(|_| DEFAULT_MODEL.to_string());
        Self {
            client: gemini::Client::from_env(),
            model,
        }
    }

    /// Build with an explicit model name.
    #[must_use]
    pub fn with_model(model: impl Into<String>) -> Self {
        dotenvy::dotenv().ok();
        Self {
            client: gemini::Client::from_env(),
            model: model.into(),
        }
    }
}

#[async_trait]
impl AdvisoryProvider for GeminiAdvisor {
    #[instrument(skip(self, snapshot), fields(model = %self.model))]
    async fn advise(&self, snapshot: &InputVector) -> Result<String, AdvisoryError> {
        let model = self.client.completion_model(&self.model);
        let request = model
            .completion_request(rig::completion::Message::user(build_prompt(snapshot)))
            .preamble(PREAMBLE.to_owned())
            .temperature(0.7)
            .build();

        let response = model
            .completion(request)
            .await
            .map_err(|e| AdvisoryError::Provider {
                provider: "gemini",
                message: e.to_string(),
            })?;

        let text = response
            .choice
            .into_iter()
            .filter_map(|content| match content {
                AssistantContent::Text(t) => Some(t.text),
                _ => None,
            })
            .collect::<Vec<_>>()
            .join("\n");

        if text.trim().is_empty() {
            return Err(AdvisoryError::EmptyResponse { provider: "gemini" });
        }
        Ok(text)
    }
}
