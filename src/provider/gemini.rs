use super::types::{GeminiResponse, GenerationRequest, Recipe};
use super::{build_prompt, parse_recipe, RecipeGenerator};
use crate::error::GenerateError;
use async_trait::async_trait;
use reqwest::Client;
use serde_json::json;

pub const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com";

const PROVIDER: &str = "Gemini";
const MODEL: &str = "gemini-2.0-flash";

/// Google Gemini adapter. Authentication is the key as a query parameter.
pub struct GeminiGenerator {
    client: Client,
    api_key: String,
    base_url: String,
}

impl GeminiGenerator {
    pub fn new(api_key: String, base_url: &str) -> Self {
        Self {
            client: Client::new(),
            api_key,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }
}

#[async_trait]
impl RecipeGenerator for GeminiGenerator {
    fn name(&self) -> &'static str {
        PROVIDER
    }

    async fn generate(&self, request: &GenerationRequest) -> Result<Recipe, GenerateError> {
        let url = format!(
            "{}/v1beta/models/{}:generateContent?key={}",
            self.base_url, MODEL, self.api_key,
        );

        let body = json!({
            "contents": [{
                "parts": [{
                    "text": format!("You are a professional chef. {}", build_prompt(request)),
                }]
            }],
            "generationConfig": {
                "temperature": 0.7,
            }
        });

        let resp = self
            .client
            .post(&url)
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

        let data: GeminiResponse =
            serde_json::from_str(&payload).map_err(|e| GenerateError::parse(PROVIDER, e))?;
        let text = data
            .candidates
            .first()
            .and_then(|c| c.content.parts.first())
            .map(|p| p.text.as_str())
            .ok_or_else(|| GenerateError::parse(PROVIDER, "response contained no candidates"))?;

        parse_recipe(PROVIDER, text)
    }
}
