use crate::error::BrokerError;
use crate::tool::{ToolDefinition, filter_products_tool};

/// Upstream endpoint that mints ephemeral session credentials.
pub const OPENAI_REALTIME_SESSIONS_URL: &str = "https://api.openai.com/v1/realtime/sessions";

/// The realtime model every session is created against.
pub const REQUIRED_MODEL: &str = "gpt-4o-realtime-preview-2024-12-17";

/// Voice requested for every session.
pub const SESSION_VOICE: &str = "alloy";

/// Process-wide configuration, read once at startup and immutable after.
#[derive(Debug, Clone)]
pub struct BrokerConfig {
    /// Long-lived OpenAI secret key. Never leaves this process.
    pub api_key: String,
    /// Upstream sessions endpoint. Constant in production; tests point it
    /// at a local mock server.
    pub sessions_url: String,
    pub model: String,
    pub voice: String,
    pub tool: ToolDefinition,
}

impl BrokerConfig {
    /// Load configuration from the environment (and `.env` if present).
    ///
    /// A missing or placeholder `OPENAI_API_KEY` is a startup-blocking
    /// condition.
    pub fn from_env() -> Result<Self, BrokerError> {
        dotenvy::dotenv().ok();
        let api_key = std::env::var("OPENAI_API_KEY").map_err(|_| BrokerError::Config)?;
        Self::with_api_key(api_key)
    }

    /// Build a configuration around a known key, with all fixed constants.
    pub fn with_api_key(api_key: impl Into<String>) -> Result<Self, BrokerError> {
        let api_key = api_key.into();
        if api_key.is_empty() || api_key.contains("PLACEHOLDER") {
            return Err(BrokerError::Config);
        }

        Ok(Self {
            api_key,
            sessions_url: OPENAI_REALTIME_SESSIONS_URL.to_string(),
            model: REQUIRED_MODEL.to_string(),
            voice: SESSION_VOICE.to_string(),
            tool: filter_products_tool(),
        })
    }
}
