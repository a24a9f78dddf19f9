use thiserror::Error;

/// Errors from the session broker.
///
/// Each variant maps to one HTTP response at the gateway boundary; the
/// Display string is the `detail` message sent to the caller.
#[derive(Debug, Error)]
pub enum BrokerError {
    /// The secret key is absent or a recognizable placeholder.
    #[error("OpenAI API Key not configured on the server.")]
    Config,

    /// Upstream answered with a non-2xx status.
    #[error("Error from OpenAI: {message}")]
    Upstream { status: u16, message: String },

    /// Upstream answered 2xx but the credential field was missing or empty.
    #[error("Ephemeral key not found in 'client_secret.value' in OpenAI's response.")]
    Extraction,

    /// Transport failure, malformed JSON, anything else.
    #[error("An unexpected backend error: {0}")]
    Unexpected(String),
}

impl BrokerError {
    /// HTTP status to surface to the caller. Upstream errors mirror the
    /// upstream status; everything else is an internal error.
    pub fn status(&self) -> u16 {
        match self {
            Self::Upstream { status, .. } => *status,
            Self::Config | Self::Extraction | Self::Unexpected(_) => 500,
        }
    }
}
