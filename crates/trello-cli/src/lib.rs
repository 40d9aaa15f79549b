//! Trello card creation from the command line.
//!
//! This crate provides:
//! - A typed client for the Trello REST API (boards, lists, cards, labels, comments)
//! - The `add-card` workflow that resolves a board list by name, creates a card,
//!   and attaches labels and an initial comment
//! - Console reporting for the `trello` binary
//!
//! ## Example
//!
//! ```ignore
//! use trello_cli::{ClientConfig, Credentials, TrelloClient};
//! use trello_cli::commands::{add_card, AddCardRequest};
//! use trello_cli::ui::ConsoleReporter;
//!
//! let config = ClientConfig::new(Credentials::new(api_key, token)?);
//! let client = TrelloClient::new(config)?;
//!
//! let request = AddCardRequest::new("board123", "To Do", "Fix login bug")
//!     .labels_csv("red,blue")
//!     .comment("Reported by support");
//! let outcome = add_card(&client, &request, &mut ConsoleReporter).await?;
//! println!("{}", outcome.card.share_url());
//! ```

#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]

pub mod client;
pub mod commands;
pub mod config;
pub mod error;
pub mod ui;

pub use client::{Board, BoardList, Card, CommentAction, Label, TrelloApi, TrelloClient};
pub use commands::CommandStatus;
pub use config::{ClientConfig, Credentials};
pub use error::{TrelloError, TrelloResult};
