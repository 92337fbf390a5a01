use std::path::Path;
use tracing::info;

const ENV_FILE: &str = ".env";

/// Process configuration, read from the environment once at startup.
///
/// A missing credential for the selected provider is not an error: the
/// provider factory degrades to the canned fallback recipe instead.
#[derive(Debug, Clone)]
pub struct Config {
    /// Provider selection: "mock", "gemini", "openai" or "huggingface".
    pub provider: String,
    /// Forces the mock provider regardless of `provider`.
    pub use_mock_data: bool,
    pub openai_api_key: Option<String>,
    pub gemini_api_key: Option<String>,
    pub huggingface_api_key: Option<String>,
    /// Port the generation service binds to.
    pub port: u16,
    /// Base URL the terminal client talks to.
    pub api_url: String,
}

impl Config {
    pub fn from_env() -> Self {
        let port = std::env::var("RECIPE_GEN_PORT")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(3000);

        Self {
            provider: std::env::var("API_PROVIDER").unwrap_or_else(|_| "mock".to_string()),
            use_mock_data: std::env::var("USE_MOCK_DATA").is_ok_and(|v| v == "true"),
            openai_api_key: key_var("OPENAI_API_KEY"),
            gemini_api_key: key_var("GOOGLE_GEMINI_API_KEY"),
            huggingface_api_key: key_var("HUGGINGFACE_API_KEY"),
            port,
            api_url: std::env::var("RECIPE_API_URL")
                .unwrap_or_else(|_| format!("http://localhost:{port}")),
        }
    }

    /// Load .env file into process environment. Real env vars take precedence.
    pub fn load_env_file() {
        let path = Path::new(ENV_FILE);
        let content = match std::fs::read_to_string(path) {
            Ok(c) => c,
            Err(_) => return,
        };
        let mut applied = 0usize;
        for (key, value) in parse_env_content(&content) {
            if std::env::var(&key).is_err() {
                std::env::set_var(&key, value);
                applied += 1;
            }
        }
        if applied > 0 {
            info!(count = applied, "loaded variables from {ENV_FILE}");
        }
    }
}

/// Read an API key from the environment, treating empty values as absent.
fn key_var(key: &str) -> Option<String> {
    match std::env::var(key) {
        Ok(value) => {
            let value = sanitize_key(&value);
            if value.is_empty() {
                None
            } else {
                Some(value)
            }
        }
        Err(_) => None,
    }
}

/// Strip carriage returns, BOM, and other invisible chars from a key value.
fn sanitize_key(raw: &str) -> String {
    raw.replace(['\r', '\u{feff}', '\u{200b}'], "")
        .trim()
        .to_string()
}

/// Parse KEY=VALUE lines. Tolerates a BOM (common on Windows-created files),
/// comments, blank lines, and single/double quoted values.
fn parse_env_content(content: &str) -> Vec<(String, String)> {
    let content = content.strip_prefix('\u{feff}').unwrap_or(content);
    let mut vars = Vec::new();
    for line in content.lines() {
        let line = line.trim().trim_matches('\r');
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        if let Some((key, value)) = line.split_once('=') {
            let key = key.trim();
            let value = value.trim().trim_matches('"').trim_matches('\'');
            vars.push((key.to_string(), value.to_string()));
        }
    }
    vars
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_env_content() {
        let content = "\u{feff}# keys\nOPENAI_API_KEY=sk-test\r\nEMPTY=\nQUOTED=\"abc\"\n\nbadline\n";
        let vars = parse_env_content(content);
        assert_eq!(
            vars,
            vec![
                ("OPENAI_API_KEY".to_string(), "sk-test".to_string()),
                ("EMPTY".to_string(), String::new()),
                ("QUOTED".to_string(), "abc".to_string()),
            ]
        );
    }

    #[test]
    fn test_sanitize_key_strips_invisibles() {
        assert_eq!(sanitize_key("\u{feff}sk-123\r\n"), "sk-123");
        assert_eq!(sanitize_key("  sk-456  "), "sk-456");
    }
}
