use serde::{Deserialize, Serialize};

/// Normalized types shared by the endpoint, the store and the terminal
/// client (provider-agnostic). Wire names are camelCase.

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Recipe {
    pub title: String,
    pub ingredients: Vec<String>,
    pub instructions: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cooking_time: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub servings: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cuisine: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerationRequest {
    #[serde(default)]
    pub ingredients: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dietary_preferences: Option<String>,
    #[serde(default = "default_meal_type")]
    pub meal_type: String,
}

/// Sentinel meal type: no meal-type clause is added to the prompt.
pub const ANY_MEAL_TYPE: &str = "any";

fn default_meal_type() -> String {
    ANY_MEAL_TYPE.to_string()
}

/// Gemini generateContent response: candidates -> content -> parts -> text.
#[derive(Debug, Deserialize)]
pub struct GeminiResponse {
    #[serde(default)]
    pub candidates: Vec<GeminiCandidate>,
}

#[derive(Debug, Deserialize)]
pub struct GeminiCandidate {
    pub content: GeminiContent,
}

#[derive(Debug, Deserialize)]
pub struct GeminiContent {
    #[serde(default)]
    pub parts: Vec<GeminiPart>,
}

#[derive(Debug, Deserialize)]
pub struct GeminiPart {
    pub text: String,
}

/// OpenAI chat completions response.
#[derive(Debug, Deserialize)]
pub struct OpenAiResponse {
    #[serde(default)]
    pub choices: Vec<OpenAiChoice>,
}

#[derive(Debug, Deserialize)]
pub struct OpenAiChoice {
    pub message: OpenAiMessage,
}

#[derive(Debug, Deserialize)]
pub struct OpenAiMessage {
    pub content: String,
}

/// Hugging Face inference response. The shape varies by model: a bare
/// string, an array of generations, or a single generation object.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum HuggingFaceResponse {
    Text(String),
    Many(Vec<HuggingFaceGeneration>),
    One(HuggingFaceGeneration),
}

#[derive(Debug, Deserialize)]
pub struct HuggingFaceGeneration {
    pub generated_text: String,
}

impl HuggingFaceResponse {
    pub fn into_text(self) -> Option<String> {
        match self {
            HuggingFaceResponse::Text(text) => Some(text),
            HuggingFaceResponse::Many(mut generations) => {
                if generations.is_empty() {
                    None
                } else {
                    Some(generations.remove(0).generated_text)
                }
            }
            HuggingFaceResponse::One(generation) => Some(generation.generated_text),
        }
    }
}
