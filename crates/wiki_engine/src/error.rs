use thiserror::Error;

use crate::FailureKind;

/// Shown for every transport or content failure. The cause goes to the log.
pub const GENERIC_FAILURE_MESSAGE: &str = "Failed to process channel data via AI Pipeline.";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("API_KEY is missing in environment variables.")]
    MissingApiKey,
    #[error("API_KEY contains characters that cannot be sent in a request header.")]
    InvalidApiKey,
    #[error("invalid generator base url {url:?}: {message}")]
    InvalidBaseUrl { url: String, message: String },
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GenerationError {
    #[error("configuration error: {0}")]
    Configuration(#[from] ConfigError),
    #[error("transport error (status {status:?}): {message}")]
    Transport { status: Option<u16>, message: String },
    #[error("content error: {message}")]
    Content { message: String },
}

impl GenerationError {
    pub(crate) fn transport(status: Option<u16>, message: impl Into<String>) -> Self {
        Self::Transport {
            status,
            message: message.into(),
        }
    }

    pub(crate) fn content(message: impl Into<String>) -> Self {
        Self::Content {
            message: message.into(),
        }
    }

    pub fn kind(&self) -> FailureKind {
        match self {
            GenerationError::Configuration(_) => FailureKind::Configuration,
            GenerationError::Transport { .. } => FailureKind::Transport,
            GenerationError::Content { .. } => FailureKind::Content,
        }
    }

    /// Message fit for the entry screen banner.
    ///
    /// Configuration problems are reported as such; transport and content
    /// failures collapse into [`GENERIC_FAILURE_MESSAGE`].
    pub fn user_message(&self) -> String {
        match self {
            GenerationError::Configuration(err) => err.to_string(),
            GenerationError::Transport { .. } | GenerationError::Content { .. } => {
                GENERIC_FAILURE_MESSAGE.to_string()
            }
        }
    }
}
