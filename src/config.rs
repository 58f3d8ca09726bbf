use anyhow::{Context, Result};
use serde::Deserialize;

/// Environment variable that supplies the voice API credential
pub const API_KEY_ENV: &str = "VAPI_API_KEY";

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub service: ServiceConfig,
    pub vapi: VapiConfig,
    pub assistant: AssistantDefaults,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServiceConfig {
    pub name: String,
    pub http: HttpConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct HttpConfig {
    pub bind: String,
    pub port: u16,
    /// Browser sessions untouched for this long are stopped and dropped
    pub session_idle_secs: u64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct VapiConfig {
    pub base_url: String,
    pub api_key: Option<String>,
    /// Unset means requests may wait indefinitely
    pub request_timeout_secs: Option<u64>,
}

/// Initial values of the assistant configuration form
#[derive(Debug, Clone, Deserialize)]
pub struct AssistantDefaults {
    pub first_message: String,
    pub context: String,
}

impl Default for AssistantDefaults {
    fn default() -> Self {
        Self {
            first_message: "Hello! How can I help you today?".to_string(),
            context: "You are a helpful AI assistant that responds to user queries in a friendly manner.".to_string(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            service: ServiceConfig {
                name: "vapi-console".to_string(),
                http: HttpConfig {
                    bind: "127.0.0.1".to_string(),
                    port: 8501,
                    session_idle_secs: 1800,
                },
            },
            vapi: VapiConfig {
                base_url: "https://api.vapi.ai".to_string(),
                api_key: None,
                request_timeout_secs: None,
            },
            assistant: AssistantDefaults::default(),
        }
    }
}

impl Config {
    /// Load configuration from an optional file, then apply `VAPI_API_KEY`.
    pub fn load(path: &str) -> Result<Self> {
        let mut config = Self::load_file(path)?;
        config.apply_api_key(std::env::var(API_KEY_ENV).ok());
        Ok(config)
    }

    /// Load configuration from an optional file over built-in defaults
    pub fn load_file(path: &str) -> Result<Self> {
        let defaults = Self::default();
        let assistant = &defaults.assistant;

        let settings = config::Config::builder()
            .set_default("service.name", defaults.service.name.clone())?
            .set_default("service.http.bind", defaults.service.http.bind.clone())?
            .set_default("service.http.port", defaults.service.http.port as i64)?
            .set_default(
                "service.http.session_idle_secs",
                defaults.service.http.session_idle_secs as i64,
            )?
            .set_default("vapi.base_url", defaults.vapi.base_url.clone())?
            .set_default("assistant.first_message", assistant.first_message.clone())?
            .set_default("assistant.context", assistant.context.clone())?
            .add_source(config::File::with_name(path).required(false))
            .build()
            .with_context(|| format!("Failed to read config {}", path))?;

        let mut config: Self = settings
            .try_deserialize()
            .context("Invalid configuration")?;
        config.vapi.api_key = normalize_key(config.vapi.api_key.take());
        Ok(config)
    }

    /// Override the configured credential; blank values are ignored
    pub fn apply_api_key(&mut self, key: Option<String>) {
        if let Some(key) = normalize_key(key) {
            self.vapi.api_key = Some(key);
        }
    }
}

fn normalize_key(key: Option<String>) -> Option<String> {
    key.map(|k| k.trim().to_string()).filter(|k| !k.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_api_key_does_not_override() {
        let mut config = Config::default();
        config.apply_api_key(Some("from-file".to_string()));
        config.apply_api_key(Some("   ".to_string()));
        assert_eq!(config.vapi.api_key.as_deref(), Some("from-file"));
    }
}
