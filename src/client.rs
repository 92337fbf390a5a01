use anyhow::{Context, Result};
use reqwest::Client;

use crate::provider::types::{GenerationRequest, Recipe};
use crate::server::{ErrorEnvelope, RecipeEnvelope};

/// HTTP client for the generation service, used by the terminal client.
#[derive(Clone)]
pub struct ApiClient {
    client: Client,
    base_url: String,
}

impl ApiClient {
    pub fn new(base_url: &str) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Single fire-and-forget request to the generation endpoint. On a
    /// non-success status the `{error}` envelope message is surfaced
    /// verbatim; a body that isn't an envelope is surfaced as-is.
    pub async fn generate(&self, request: &GenerationRequest) -> Result<Recipe> {
        let url = format!("{}/api/generate-recipe", self.base_url);

        let resp = self
            .client
            .post(&url)
            .json(request)
            .send()
            .await
            .context("recipe request failed")?;

        let status = resp.status();
        let body = resp.text().await.context("failed to read response body")?;

        if !status.is_success() {
            let message = serde_json::from_str::<ErrorEnvelope>(&body)
                .map(|e| e.error)
                .unwrap_or(body);
            anyhow::bail!("{message}");
        }

        let envelope: RecipeEnvelope =
            serde_json::from_str(&body).context("failed to parse recipe response")?;
        Ok(envelope.recipe)
    }
}
