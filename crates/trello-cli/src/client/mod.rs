//! Trello REST API client.
//!
//! [`TrelloApi`] describes the remote operations the card workflow needs;
//! [`TrelloClient`] implements them over HTTPS with `reqwest`.

mod models;
mod trello;

use async_trait::async_trait;

pub use models::{Board, BoardList, Card, CommentAction, CommentData, Label};
pub use trello::TrelloClient;

use crate::error::TrelloResult;

/// Remote operations against a Trello account.
///
/// Only the two lookups translate a 404 into [`crate::TrelloError::NotFound`];
/// the writes surface every failure as-is.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TrelloApi: Send + Sync {
    /// Fetch a board, confirming it exists and is accessible.
    async fn get_board(&self, board_id: &str) -> TrelloResult<Board>;

    /// Resolve a list name (case-insensitive, first match wins) to its ID.
    async fn get_list_id(&self, board_id: &str, list_name: &str) -> TrelloResult<String>;

    /// Create a card under a list.
    async fn add_card(&self, list_id: &str, title: &str, description: &str)
        -> TrelloResult<Card>;

    /// Attach a color label to a card.
    async fn add_label(&self, card_id: &str, color: &str) -> TrelloResult<Label>;

    /// Attach a text comment to a card.
    async fn add_comment(&self, card_id: &str, text: &str) -> TrelloResult<CommentAction>;
}
