use super::types::{GenerationRequest, HuggingFaceResponse, Recipe};
use super::{build_prompt, parse_recipe, RecipeGenerator};
use crate::error::GenerateError;
use async_trait::async_trait;
use reqwest::Client;
use serde_json::json;

pub const DEFAULT_BASE_URL: &str = "https://api-inference.huggingface.co";

const PROVIDER: &str = "Hugging Face";
const MODEL: &str = "mistralai/Mistral-7B-Instruct-v0.2";

/// Hugging Face inference adapter. Sends an instruction-wrapped prompt with
/// bearer-token authentication.
pub struct HuggingFaceGenerator {
    client: Client,
    api_key: String,
    base_url: String,
}

impl HuggingFaceGenerator {
    pub fn new(api_key: String, base_url: &str) -> Self {
        Self {
            client: Client::new(),
            api_key,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }
}

#[async_trait]
impl RecipeGenerator for HuggingFaceGenerator {
    fn name(&self) -> &'static str {
        PROVIDER
    }

    async fn generate(&self, request: &GenerationRequest) -> Result<Recipe, GenerateError> {
        let url = format!("{}/models/{}", self.base_url, MODEL);

        let body = json!({
            "inputs": format!(
                "<s>[INST] You are a professional chef.\n{} [/INST]",
                build_prompt(request),
            ),
            "parameters": {
                "temperature": 0.7,
                "max_new_tokens": 1024,
            }
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

        let data: HuggingFaceResponse =
            serde_json::from_str(&payload).map_err(|e| GenerateError::parse(PROVIDER, e))?;
        let text = data
            .into_text()
            .ok_or_else(|| GenerateError::parse(PROVIDER, "response contained no generations"))?;

        parse_recipe(PROVIDER, &text)
    }
}
