//! Error types for Trello operations.

use thiserror::Error;

/// Errors that can occur while talking to Trello.
#[derive(Error, Debug)]
pub enum TrelloError {
    /// A user-supplied board or list could not be resolved.
    #[error("{0}")]
    NotFound(String),

    /// API returned a non-success status that was not translated.
    #[error("API Error: {status} - {message}")]
    Api { status: u16, message: String },

    /// HTTP request failed before a response was received.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Response body could not be decoded.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// API key or token is empty.
    #[error("Trello API key and token are required")]
    MissingCredentials,

    /// Invalid client configuration.
    #[error("Invalid configuration: {0}")]
    Config(String),
}

impl TrelloError {
    /// Board lookup failure, shared by the board and list endpoints.
    pub fn board_not_found(board_id: &str) -> Self {
        Self::NotFound(format!(
            "Board with ID '{board_id}' not found or not accessible."
        ))
    }

    /// No list on the board matched the requested name.
    pub fn list_not_found(list_name: &str) -> Self {
        Self::NotFound(format!(
            "List '{list_name}' not found on the specified board."
        ))
    }

    /// HTTP status attached to this error, if any.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Api { status, .. } => Some(*status),
            Self::Http(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }

    /// Whether this is the domain-level lookup failure.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound(_))
    }
}

/// Result type alias for Trello operations.
pub type TrelloResult<T> = Result<T, TrelloError>;
