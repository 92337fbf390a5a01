use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

/// Failures of the generation pipeline. Everything the adapters can hit is a
/// typed variant here; the endpoint maps them onto the `{error}` envelope.
#[derive(Debug, Error)]
pub enum GenerateError {
    #[error("Ingredients are required")]
    MissingIngredients,

    /// Provider call returned a non-success status. Carries the raw error body.
    #[error("failed to generate recipe using {provider} ({status}): {body}")]
    Upstream {
        provider: &'static str,
        status: reqwest::StatusCode,
        body: String,
    },

    /// Provider responded, but the payload could not be decoded into a recipe.
    #[error("failed to parse recipe data from {provider}: {message}")]
    Parse {
        provider: &'static str,
        message: String,
    },

    /// Transport failure before any response was received.
    #[error("{provider} request failed: {source}")]
    Network {
        provider: &'static str,
        source: reqwest::Error,
    },
}

impl GenerateError {
    pub fn parse(provider: &'static str, message: impl ToString) -> Self {
        Self::Parse {
            provider,
            message: message.to_string(),
        }
    }
}

impl IntoResponse for GenerateError {
    fn into_response(self) -> Response {
        let status = match self {
            GenerateError::MissingIngredients => StatusCode::BAD_REQUEST,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        };

        (status, Json(json!({ "error": self.to_string() }))).into_response()
    }
}
