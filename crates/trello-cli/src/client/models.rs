//! Trello REST API response records.
//!
//! Only the fields this crate reads are modeled; anything else in the
//! payload is ignored.

use serde::{Deserialize, Serialize};

/// A Trello board.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Board {
    /// Board ID.
    pub id: String,
    /// Board name.
    #[serde(default)]
    pub name: String,
    /// Board URL.
    #[serde(default)]
    pub url: Option<String>,
    /// Whether the board is archived.
    #[serde(default)]
    pub closed: bool,
}

/// A list (column) on a board.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BoardList {
    /// List ID.
    pub id: String,
    /// List name.
    pub name: String,
    /// Whether the list is archived.
    #[serde(default)]
    pub closed: bool,
    /// Sort position.
    #[serde(default)]
    pub pos: Option<f64>,
}

/// A card created under a list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Card {
    /// Card ID.
    pub id: String,
    /// Card title.
    #[serde(default)]
    pub name: String,
    /// Card description.
    #[serde(default)]
    pub desc: String,
    /// Owning list ID.
    #[serde(default)]
    pub id_list: Option<String>,
    /// Shareable short URL.
    #[serde(default)]
    pub short_url: Option<String>,
    /// Full card URL.
    #[serde(default)]
    pub url: Option<String>,
}

impl Card {
    /// Shareable link, falling back to the full URL, then the ID.
    pub fn share_url(&self) -> &str {
        self.short_url
            .as_deref()
            .or(self.url.as_deref())
            .unwrap_or(&self.id)
    }
}

/// A colored label attached to a card.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Label {
    /// Label ID.
    pub id: String,
    /// Label name (often empty for color-only labels).
    #[serde(default)]
    pub name: String,
    /// Label color.
    #[serde(default)]
    pub color: Option<String>,
}

/// The action record Trello returns for a new comment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CommentAction {
    /// Action ID.
    pub id: String,
    /// Action type (`commentCard`).
    #[serde(rename = "type", default)]
    pub action_type: String,
    /// Action payload.
    #[serde(default)]
    pub data: CommentData,
}

/// Comment payload.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CommentData {
    /// Comment text.
    #[serde(default)]
    pub text: String,
}
