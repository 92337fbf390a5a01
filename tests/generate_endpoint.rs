//! Integration tests for the generation endpoint. All of these run against
//! the router with canned or in-process generators — no outbound calls.

use std::sync::Arc;

use async_trait::async_trait;
use axum::body::{to_bytes, Body};
use axum::http::{header::CONTENT_TYPE, Request, StatusCode};
use axum::Router;
use tower::ServiceExt;

use recipe_gen::config::Config;
use recipe_gen::error::GenerateError;
use recipe_gen::provider::types::{GenerationRequest, Recipe};
use recipe_gen::provider::{self, parse_recipe, RecipeGenerator};
use recipe_gen::server::{router, AppState};

fn test_config(provider: &str, use_mock_data: bool) -> Config {
    Config {
        provider: provider.to_string(),
        use_mock_data,
        openai_api_key: None,
        gemini_api_key: None,
        huggingface_api_key: None,
        port: 0,
        api_url: String::new(),
    }
}

fn app_for(config: &Config) -> Router {
    router(AppState {
        generator: provider::from_config(config),
    })
}

async fn post_json(app: Router, body: &str) -> (StatusCode, serde_json::Value) {
    let response = app
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/api/generate-recipe")
                .header(CONTENT_TYPE, "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
        )
        .await
        .unwrap();

    let status = response.status();
    let bytes = to_bytes(response.into_body(), 64 * 1024).await.unwrap();
    let value = serde_json::from_slice(&bytes).unwrap();
    (status, value)
}

#[tokio::test]
async fn test_missing_ingredients_returns_400() {
    let app = app_for(&test_config("mock", false));
    let (status, body) = post_json(app, "{}").await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Ingredients are required");
}

#[tokio::test]
async fn test_blank_ingredients_returns_400() {
    let app = app_for(&test_config("mock", false));
    let (status, body) = post_json(app, r#"{"ingredients": "   "}"#).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Ingredients are required");
}

#[tokio::test]
async fn test_mock_provider_returns_canned_recipe() {
    let app = app_for(&test_config("mock", false));
    let (status, body) = post_json(app, r#"{"ingredients": "pasta, cream"}"#).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["recipe"]["title"], "Creamy Vegetable Pasta");
    assert_eq!(body["recipe"]["servings"], 4);
    assert!(body["recipe"]["ingredients"].as_array().unwrap().len() > 0);
}

#[tokio::test]
async fn test_force_mock_flag_overrides_provider() {
    let app = app_for(&test_config("openai", true));
    let (status, body) = post_json(app, r#"{"ingredients": "pasta"}"#).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["recipe"]["title"], "Creamy Vegetable Pasta");
}

#[tokio::test]
async fn test_missing_credential_degrades_to_fallback() {
    // gemini selected but no key configured: designed degraded mode, not
    // an error.
    let app = app_for(&test_config("gemini", false));
    let (status, body) = post_json(app, r#"{"ingredients": "pasta"}"#).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["recipe"]["title"], "Fallback Recipe (API Not Configured)");
}

#[tokio::test]
async fn test_unknown_provider_degrades_to_fallback() {
    let app = app_for(&test_config("some-new-llm", false));
    let (status, body) = post_json(app, r#"{"ingredients": "pasta"}"#).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["recipe"]["title"], "Fallback Recipe (API Not Configured)");
}

/// Generator that replays a fixed provider payload through the normal
/// response-parsing path, standing in for a live provider in tests.
struct ReplayGenerator {
    payload: &'static str,
}

#[async_trait]
impl RecipeGenerator for ReplayGenerator {
    fn name(&self) -> &'static str {
        "replay"
    }

    async fn generate(&self, _request: &GenerationRequest) -> Result<Recipe, GenerateError> {
        parse_recipe("Gemini", self.payload)
    }
}

#[tokio::test]
async fn test_malformed_provider_payload_returns_500() {
    let app = router(AppState {
        generator: Arc::new(ReplayGenerator {
            payload: "Sure! Here is a recipe for you: pasta with cream.",
        }),
    });
    let (status, body) = post_json(app, r#"{"ingredients": "pasta"}"#).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    let message = body["error"].as_str().unwrap();
    assert!(message.contains("failed to parse recipe data from Gemini"));
}

#[tokio::test]
async fn test_fenced_provider_payload_succeeds() {
    let app = router(AppState {
        generator: Arc::new(ReplayGenerator {
            payload: "```json\n{\"title\":\"Omelette\",\"ingredients\":[\"eggs\"],\"instructions\":[\"whisk\",\"fry\"],\"cookingTime\":\"10 minutes\",\"servings\":2}\n```",
        }),
    });
    let (status, body) = post_json(app, r#"{"ingredients": "eggs"}"#).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["recipe"]["title"], "Omelette");
    assert_eq!(body["recipe"]["cookingTime"], "10 minutes");
}
