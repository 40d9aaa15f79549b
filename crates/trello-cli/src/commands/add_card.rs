//! `add-card`: create a card on a board list, then attach labels and a comment.
//!
//! Steps run strictly in order and the first failure stops the sequence.
//! Nothing already created is rolled back.

use tracing::{debug, info};

use super::{failure_message, CommandStatus};
use crate::client::{Card, CommentAction, Label, TrelloApi};
use crate::error::TrelloResult;
use crate::ui::Reporter;

/// Inputs for the `add-card` command.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AddCardRequest {
    /// Board to add the card to.
    pub board_id: String,
    /// List (column) name, matched case-insensitively.
    pub list_name: String,
    /// Card title.
    pub title: String,
    /// Card description.
    pub description: String,
    /// Label colors, attached in order.
    pub labels: Vec<String>,
    /// Initial comment; skipped when empty.
    pub comment: String,
}

impl AddCardRequest {
    /// Request for the required board, list and title; everything else empty.
    pub fn new(
        board_id: impl Into<String>,
        list_name: impl Into<String>,
        title: impl Into<String>,
    ) -> Self {
        Self {
            board_id: board_id.into(),
            list_name: list_name.into(),
            title: title.into(),
            ..Self::default()
        }
    }

    /// Set the card description.
    #[must_use]
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Set labels from a comma-separated color list.
    #[must_use]
    pub fn labels_csv(mut self, csv: &str) -> Self {
        self.labels = parse_labels(csv);
        self
    }

    /// Set the initial comment; an empty one is not posted.
    #[must_use]
    pub fn comment(mut self, comment: impl Into<String>) -> Self {
        self.comment = comment.into();
        self
    }
}

/// What `add-card` created.
#[derive(Debug, Clone, PartialEq)]
pub struct AddCardOutcome {
    pub card: Card,
    pub labels: Vec<Label>,
    pub comment: Option<CommentAction>,
}

/// Split `"red,green, blue "` into `["red", "green", "blue"]`.
///
/// Tokens are trimmed and empty ones dropped; order is preserved.
pub fn parse_labels(csv: &str) -> Vec<String> {
    csv.split(',')
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .map(str::to_string)
        .collect()
}

/// Run the card workflow, reporting each completed step.
///
/// # Errors
/// Returns the first failure from the board check, list lookup, card
/// creation, label attachment or comment.
pub async fn add_card<A, R>(
    api: &A,
    request: &AddCardRequest,
    reporter: &mut R,
) -> TrelloResult<AddCardOutcome>
where
    A: TrelloApi + ?Sized,
    R: Reporter + ?Sized,
{
    api.get_board(&request.board_id).await?;
    debug!(board_id = %request.board_id, "Board is accessible");

    let list_id = api
        .get_list_id(&request.board_id, &request.list_name)
        .await?;
    debug!(list_id = %list_id, list_name = %request.list_name, "Resolved list");

    let card = api
        .add_card(&list_id, &request.title, &request.description)
        .await?;
    reporter.success(&format!(
        "Card created successfully: {}",
        card.share_url()
    ));

    let mut labels = Vec::with_capacity(request.labels.len());
    for color in &request.labels {
        labels.push(api.add_label(&card.id, color).await?);
    }
    if !labels.is_empty() {
        reporter.info(&format!("Added labels: {}", request.labels.join(", ")));
    }

    let comment = if request.comment.is_empty() {
        None
    } else {
        let action = api.add_comment(&card.id, &request.comment).await?;
        reporter.info("Added comment to card");
        Some(action)
    };

    info!(
        card_id = %card.id,
        labels = labels.len(),
        commented = comment.is_some(),
        "Card workflow finished"
    );

    Ok(AddCardOutcome {
        card,
        labels,
        comment,
    })
}

/// Run [`add_card`] and turn any failure into a reported [`CommandStatus::Failure`].
pub async fn run_add_card<A, R>(
    api: &A,
    request: &AddCardRequest,
    reporter: &mut R,
) -> CommandStatus
where
    A: TrelloApi + ?Sized,
    R: Reporter + ?Sized,
{
    match add_card(api, request, reporter).await {
        Ok(_) => CommandStatus::Success,
        Err(err) => {
            reporter.failure(&failure_message(&err));
            CommandStatus::Failure
        }
    }
}
