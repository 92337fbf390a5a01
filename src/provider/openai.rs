use super::types::{GenerationRequest, OpenAiResponse, Recipe};
use super::{build_prompt, parse_recipe, RecipeGenerator};
use crate::error::GenerateError;
use async_trait::async_trait;
use reqwest::Client;
use serde_json::json;

pub const DEFAULT_BASE_URL: &str = "https://api.openai.com";

const PROVIDER: &str = "OpenAI";
const MODEL: &str = "gpt-3.5-turbo";
const SYSTEM_PROMPT: &str =
    "You are a professional chef who creates delicious recipes. Always respond with a valid JSON object.";

/// OpenAI chat-completions adapter. Bearer-token authentication.
pub struct OpenAiGenerator {
    client: Client,
    api_key: String,
    base_url: String,
}

impl OpenAiGenerator {
    pub fn new(api_key: String, base_url: &str) -> Self {
        Self {
            client: Client::new(),
            api_key,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }
}

#[async_trait]
impl RecipeGenerator for OpenAiGenerator {
    fn name(&self) -> &'static str {
        PROVIDER
    }

    async fn generate(&self, request: &GenerationRequest) -> Result<Recipe, GenerateError> {
        let url = format!("{}/v1/chat/completions", self.base_url);

        let body = json!({
            "model": MODEL,
            "messages": [
                { "role": "system", "content": SYSTEM_PROMPT },
                { "role": "user", "content": build_prompt(request) },
            ],
            "temperature": 0.7,
        });

        let resp = self
            .client
            .post(&url)
            .bearer_auth(&self.api_key)
            .json(&body)
            .send()
            .await
            .map_err(|source| GenerateError::Network { provider: PROVIDER, source })?;

        let status = resp.status();
        let payload = resp
            .text()
            .await
            .map_err(|source| GenerateError::Network { provider: PROVIDER, source })?;

        if !status.is_success() {
            return Err(GenerateError::Upstream {
                provider: PROVIDER,
                status,
                body: payload,
            });
        }

        let data: OpenAiResponse =
            serde_json::from_str(&payload).map_err(|e| GenerateError::parse(PROVIDER, e))?;
        let text = data
            .choices
            .first()
            .map(|c| c.message.content.as_str())
            .ok_or_else(|| GenerateError::parse(PROVIDER, "response contained no choices"))?;

        parse_recipe(PROVIDER, text)
    }
}
