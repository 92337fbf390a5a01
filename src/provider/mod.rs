pub mod gemini;
pub mod huggingface;
pub mod mock;
pub mod openai;
pub mod types;

use crate::config::Config;
use crate::error::GenerateError;
use async_trait::async_trait;
use std::sync::Arc;
use tracing::info;
use types::{GenerationRequest, Recipe, ANY_MEAL_TYPE};

/// One generation provider. Each live variant performs exactly one outbound
/// call per request: no retries, no timeouts, no streaming.
#[async_trait]
pub trait RecipeGenerator: Send + Sync {
    fn name(&self) -> &'static str;
    async fn generate(&self, request: &GenerationRequest) -> Result<Recipe, GenerateError>;
}

/// Select the generator for this process. Precedence: force-mock flag or an
/// explicit "mock" selection wins; a live provider is used only when its
/// credential is present; anything else degrades to the canned fallback
/// (a designed mode, not an error).
pub fn from_config(config: &Config) -> Arc<dyn RecipeGenerator> {
    if config.use_mock_data || config.provider == "mock" {
        info!("using mock data for recipe generation");
        return Arc::new(mock::CannedGenerator::mock());
    }

    match config.provider.as_str() {
        "gemini" => {
            if let Some(key) = &config.gemini_api_key {
                info!("using Google Gemini for recipe generation");
                return Arc::new(gemini::GeminiGenerator::new(
                    key.clone(),
                    gemini::DEFAULT_BASE_URL,
                ));
            }
        }
        "openai" => {
            if let Some(key) = &config.openai_api_key {
                info!("using OpenAI for recipe generation");
                return Arc::new(openai::OpenAiGenerator::new(
                    key.clone(),
                    openai::DEFAULT_BASE_URL,
                ));
            }
        }
        "huggingface" => {
            if let Some(key) = &config.huggingface_api_key {
                info!("using Hugging Face for recipe generation");
                return Arc::new(huggingface::HuggingFaceGenerator::new(
                    key.clone(),
                    huggingface::DEFAULT_BASE_URL,
                ));
            }
        }
        _ => {}
    }

    info!(provider = config.provider.as_str(), "no usable provider configuration, using fallback recipe");
    Arc::new(mock::CannedGenerator::fallback())
}

/// Build the natural-language instruction sent to every live provider.
/// Dietary preferences and meal type are appended only when meaningful.
pub fn build_prompt(request: &GenerationRequest) -> String {
    let mut prompt = format!(
        "Create a detailed recipe using these ingredients: {}.\n",
        request.ingredients
    );

    if let Some(prefs) = request.dietary_preferences.as_deref() {
        if !prefs.is_empty() {
            prompt.push_str(&format!("Dietary preferences: {prefs}.\n"));
        }
    }
    if request.meal_type != ANY_MEAL_TYPE {
        prompt.push_str(&format!("Meal type: {}.\n", request.meal_type));
    }

    prompt.push_str(
        "\nFormat the response as a JSON object with the following structure:\n\
         {\n\
           \"title\": \"Recipe Title\",\n\
           \"ingredients\": [\"ingredient 1\", \"ingredient 2\", ...],\n\
           \"instructions\": [\"step 1\", \"step 2\", ...],\n\
           \"cookingTime\": \"30 minutes\",\n\
           \"servings\": 4\n\
         }\n\
         \nOnly return the JSON object with no additional text.",
    );
    prompt
}

/// Best-effort extraction of the JSON payload from a model reply that may
/// wrap it in a fenced code block (```json ... ``` or ``` ... ```).
/// Falls back to the raw text when no fence is found.
pub fn extract_json(text: &str) -> &str {
    let trimmed = text.trim();
    if let Some(start) = trimmed.find("```") {
        let after = &trimmed[start + 3..];
        let after = after.strip_prefix("json").unwrap_or(after);
        if let Some(end) = after.find("```") {
            return after[..end].trim();
        }
    }
    trimmed
}

/// Decode a provider reply into a normalized recipe.
pub fn parse_recipe(provider: &'static str, text: &str) -> Result<Recipe, GenerateError> {
    serde_json::from_str(extract_json(text)).map_err(|e| GenerateError::parse(provider, e))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(ingredients: &str, prefs: Option<&str>, meal_type: &str) -> GenerationRequest {
        GenerationRequest {
            ingredients: ingredients.to_string(),
            dietary_preferences: prefs.map(str::to_string),
            meal_type: meal_type.to_string(),
        }
    }

    fn config(provider: &str, mock: bool) -> Config {
        Config {
            provider: provider.to_string(),
            use_mock_data: mock,
            openai_api_key: None,
            gemini_api_key: None,
            huggingface_api_key: None,
            port: 0,
            api_url: String::new(),
        }
    }

    #[test]
    fn test_prompt_includes_all_clauses() {
        let prompt = build_prompt(&request("chicken, rice", Some("vegetarian"), "dinner"));
        assert!(prompt.contains("Create a detailed recipe using these ingredients: chicken, rice."));
        assert!(prompt.contains("Dietary preferences: vegetarian."));
        assert!(prompt.contains("Meal type: dinner."));
        assert!(prompt.contains("Only return the JSON object"));
    }

    #[test]
    fn test_prompt_skips_empty_preferences_and_any_meal_type() {
        let prompt = build_prompt(&request("eggs", Some(""), "any"));
        assert!(!prompt.contains("Dietary preferences"));
        assert!(!prompt.contains("Meal type"));

        let prompt = build_prompt(&request("eggs", None, "any"));
        assert!(!prompt.contains("Dietary preferences"));
    }

    #[test]
    fn test_extract_json_strips_tagged_fence() {
        let wrapped = "```json\n{\"title\": \"Toast\"}\n```";
        assert_eq!(extract_json(wrapped), "{\"title\": \"Toast\"}");
    }

    #[test]
    fn test_extract_json_strips_bare_fence_with_prose() {
        let wrapped = "Here is your recipe:\n```\n{\"title\": \"Toast\"}\n```\nEnjoy!";
        assert_eq!(extract_json(wrapped), "{\"title\": \"Toast\"}");
    }

    #[test]
    fn test_extract_json_passes_through_unfenced_text() {
        assert_eq!(extract_json("  {\"title\": \"Toast\"}  "), "{\"title\": \"Toast\"}");
    }

    #[test]
    fn test_fenced_and_unfenced_decode_identically() {
        let raw = r#"{"title":"Omelette","ingredients":["eggs"],"instructions":["whisk","fry"],"cookingTime":"10 minutes","servings":2}"#;
        let fenced = format!("```json\n{raw}\n```");

        let a = parse_recipe("Gemini", raw).unwrap();
        let b = parse_recipe("Gemini", &fenced).unwrap();
        assert_eq!(a.title, b.title);
        assert_eq!(a.ingredients, b.ingredients);
        assert_eq!(a.instructions, b.instructions);
        assert_eq!(a.cooking_time, b.cooking_time);
        assert_eq!(a.servings, b.servings);
    }

    #[test]
    fn test_malformed_payload_is_a_parse_error() {
        let err = parse_recipe("OpenAI", "not json at all").unwrap_err();
        assert!(matches!(err, GenerateError::Parse { provider: "OpenAI", .. }));
    }

    #[test]
    fn test_factory_force_mock_wins_over_provider() {
        let mut cfg = config("openai", true);
        cfg.openai_api_key = Some("sk-test".to_string());
        assert_eq!(from_config(&cfg).name(), "mock");
    }

    #[test]
    fn test_factory_selects_live_provider_with_credential() {
        let mut cfg = config("gemini", false);
        cfg.gemini_api_key = Some("key".to_string());
        assert_eq!(from_config(&cfg).name(), "Gemini");
    }

    #[test]
    fn test_factory_missing_credential_degrades_to_fallback() {
        let cfg = config("huggingface", false);
        assert_eq!(from_config(&cfg).name(), "fallback");
    }

    #[test]
    fn test_factory_unknown_provider_degrades_to_fallback() {
        let cfg = config("llamafile", false);
        assert_eq!(from_config(&cfg).name(), "fallback");
    }
}
