//! CLI configuration.
//!
//! Values come from the process environment, layered over a `.env` file in
//! the working directory; the environment wins on conflict.

/// Default platform API endpoint.
pub const DEFAULT_API_URL: &str = "https://api.skiff.app";

/// Environment variable carrying the bearer token.
pub const TOKEN_VAR: &str = "SKIFF_API_TOKEN";

/// Environment variable overriding the API endpoint.
pub const URL_VAR: &str = "SKIFF_API_URL";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub api_url: String,
    pub api_token: String,
}

impl Config {
    /// Loads configuration from the environment and an optional `.env`
    /// file. A missing `.env` is not an error.
    pub fn load() -> Self {
        let _ = dotenvy::dotenv();
        Self::from_env(|key| std::env::var(key).ok())
    }

    fn from_env(get_env: impl Fn(&str) -> Option<String>) -> Self {
        let api_url = get_env(URL_VAR)
            .filter(|url| !url.is_empty())
            .unwrap_or_else(|| DEFAULT_API_URL.to_string());
        let api_token = get_env(TOKEN_VAR).unwrap_or_default();

        Self { api_url, api_token }
    }

    /// True when an API token is configured.
    pub fn has_token(&self) -> bool {
        !self.api_token.is_empty()
    }
}
