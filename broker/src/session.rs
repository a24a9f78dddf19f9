use serde::Serialize;
use serde_json::Value;
use tracing::{info, warn};

use crate::config::BrokerConfig;
use crate::error::BrokerError;
use crate::tool::ToolDefinition;

/// Wire body for the upstream session-creation request.
#[derive(Debug, Serialize)]
struct SessionRequest<'a> {
    model: &'a str,
    tools: [&'a ToolDefinition; 1],
    voice: &'a str,
}

/// Normalized result handed back to the frontend: the raw upstream object
/// plus the extracted credential surfaced at the top level.
#[derive(Debug, Serialize)]
pub struct BrokeredSession {
    pub raw_openai_response: Value,
    pub ephemeral_key_value: String,
}

/// Trades the long-lived secret key for a short-lived session credential.
///
/// Stateless: every call is one independent upstream POST, no retries,
/// nothing cached between invocations.
pub struct SessionBroker {
    client: reqwest::Client,
    config: BrokerConfig,
}

impl SessionBroker {
    pub fn new(config: BrokerConfig) -> Self {
        Self {
            client: reqwest::Client::new(),
            config,
        }
    }

    /// Create a realtime session upstream and extract its ephemeral key.
    ///
    /// Takes no caller input; the model, voice, and tool definition all come
    /// from the immutable process configuration.
    pub async fn create_session(&self) -> Result<BrokeredSession, BrokerError> {
        // Re-checked per request so a misconfigured process fails loudly
        // without ever contacting upstream.
        if self.config.api_key.is_empty() || self.config.api_key.contains("PLACEHOLDER") {
            warn!("session requested but API key is not configured");
            return Err(BrokerError::Config);
        }

        let body = SessionRequest {
            model: &self.config.model,
            tools: [&self.config.tool],
            voice: &self.config.voice,
        };

        let response = self
            .client
            .post(&self.config.sessions_url)
            .bearer_auth(&self.config.api_key)
            .header("accept", "application/json")
            .json(&body)
            .send()
            .await
            .map_err(|e| BrokerError::Unexpected(e.to_string()))?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let raw = response.text().await.unwrap_or_default();
            let message = upstream_error_message(&raw);
            warn!(status, %message, "upstream rejected session request");
            return Err(BrokerError::Upstream { status, message });
        }

        let data: Value = response
            .json()
            .await
            .map_err(|e| BrokerError::Unexpected(e.to_string()))?;

        let key = data
            .pointer("/client_secret/value")
            .and_then(Value::as_str)
            .filter(|v| !v.is_empty())
            .map(str::to_string)
            .ok_or(BrokerError::Extraction)?;

        info!(
            session_id = data.get("id").and_then(serde_json::Value::as_str).unwrap_or("<no id>"),
            key_prefix = key.get(..10).unwrap_or(&key),
            "ephemeral key issued"
        );

        Ok(BrokeredSession {
            raw_openai_response: data,
            ephemeral_key_value: key,
        })
    }
}

/// Best-effort message from an upstream error body: the structured
/// `error.message` field when present, the raw text otherwise.
fn upstream_error_message(body: &str) -> String {
    serde_json::from_str::<Value>(body)
        .ok()
        .and_then(|v| {
            v.pointer("/error/message")
                .and_then(Value::as_str)
                .map(str::to_string)
        })
        .unwrap_or_else(|| body.to_string())
}
