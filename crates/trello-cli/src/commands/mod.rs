//! CLI command implementations.

pub mod add_card;

pub use add_card::{add_card, parse_labels, run_add_card, AddCardOutcome, AddCardRequest};

use crate::config::Credentials;
use crate::error::TrelloError;
use crate::ui::Reporter;

/// Final status of a command, mapped to the process exit code by the binary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandStatus {
    /// Every step completed.
    Success,
    /// A step failed and the rest were skipped.
    Failure,
}

impl CommandStatus {
    /// Process exit code for this status.
    pub fn exit_code(self) -> u8 {
        match self {
            Self::Success => 0,
            Self::Failure => 1,
        }
    }
}

/// Build credentials, reporting the missing-credentials hint on failure.
pub fn require_credentials<R: Reporter + ?Sized>(
    api_key: &str,
    token: &str,
    reporter: &mut R,
) -> Option<Credentials> {
    match Credentials::new(api_key, token) {
        Ok(credentials) => Some(credentials),
        Err(err) => {
            reporter.failure(&format!("Error: {err}"));
            if matches!(err, TrelloError::MissingCredentials) {
                reporter.hint(
                    "Set TRELLO_API_KEY and TRELLO_TOKEN environment variables or use --api-key and --token options",
                );
            }
            None
        }
    }
}

/// Failure line for an error that ended a command.
pub(crate) fn failure_message(err: &TrelloError) -> String {
    match err {
        // Already formatted as "API Error: <status> - <body>".
        TrelloError::Api { .. } => err.to_string(),
        _ => format!("Error: {err}"),
    }
}
