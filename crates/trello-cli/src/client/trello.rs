//! `reqwest` implementation of [`TrelloApi`].

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::de::DeserializeOwned;
use tracing::{debug, info, instrument, warn};
use url::Url;

use super::models::{Board, BoardList, Card, CommentAction, Label};
use super::TrelloApi;
use crate::config::{ClientConfig, Credentials};
use crate::error::{TrelloError, TrelloResult};

/// Trello REST API client.
#[derive(Debug, Clone)]
pub struct TrelloClient {
    /// HTTP client.
    client: Client,
    /// Key/token pair attached to every call.
    credentials: Credentials,
    /// API base URL.
    api_url: Url,
}

impl TrelloClient {
    /// Create a client from explicit configuration.
    ///
    /// # Errors
    /// Returns error if the base URL is invalid or the HTTP client cannot be built.
    pub fn new(config: ClientConfig) -> TrelloResult<Self> {
        let api_url = Url::parse(&config.api_url).map_err(|e| {
            TrelloError::Config(format!("invalid API URL '{}': {e}", config.api_url))
        })?;
        if api_url.cannot_be_a_base() {
            return Err(TrelloError::Config(format!(
                "API URL '{api_url}' cannot be a base"
            )));
        }

        let mut builder = Client::builder();
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder.build().map_err(|e| TrelloError::Http(e.without_url()))?;

        Ok(Self {
            client,
            credentials: config.credentials,
            api_url,
        })
    }

    /// Base URL with each segment appended and percent-encoded.
    fn endpoint(&self, segments: &[&str]) -> Url {
        let mut url = self.api_url.clone();
        // Checked in `new`: the base URL always has a path.
        if let Ok(mut path) = url.path_segments_mut() {
            path.pop_if_empty().extend(segments);
        }
        url
    }

    /// Authenticated GET returning decoded JSON.
    async fn get<T: DeserializeOwned>(&self, segments: &[&str]) -> TrelloResult<T> {
        let url = self.endpoint(segments);
        debug!(path = %url.path(), "GET request");

        // The request URL carries the credentials; drop it from transport errors.
        let response = self
            .client
            .get(url)
            .query(&self.credentials.auth_params())
            .send()
            .await
            .map_err(|e| TrelloError::Http(e.without_url()))?;

        Self::handle_response(response).await
    }

    /// Authenticated form POST. Credentials go in both the query string and
    /// the form body.
    async fn post_form<T: DeserializeOwned>(
        &self,
        segments: &[&str],
        fields: &[(&str, &str)],
    ) -> TrelloResult<T> {
        let url = self.endpoint(segments);
        debug!(path = %url.path(), "POST request");

        let auth = self.credentials.auth_params();
        let mut form: Vec<(&str, &str)> = fields.to_vec();
        form.extend_from_slice(&auth);

        let response = self
            .client
            .post(url)
            .query(&auth)
            .form(&form)
            .send()
            .await
            .map_err(|e| TrelloError::Http(e.without_url()))?;

        Self::handle_response(response).await
    }

    /// Parse a successful body or surface the status untouched.
    async fn handle_response<T: DeserializeOwned>(
        response: reqwest::Response,
    ) -> TrelloResult<T> {
        let status = response.status();
        let text = response
            .text()
            .await
            .map_err(|e| TrelloError::Http(e.without_url()))?;

        if status.is_success() {
            serde_json::from_str(&text).map_err(|e| {
                warn!(error = %e, body = %text, "Failed to parse response");
                TrelloError::Serialization(e)
            })
        } else {
            Err(TrelloError::Api {
                status: status.as_u16(),
                message: text,
            })
        }
    }

    /// Rewrite a 404 from a board-scoped read into the board lookup failure.
    fn translate_board_404(err: TrelloError, board_id: &str) -> TrelloError {
        match err {
            TrelloError::Api { status, .. } if status == StatusCode::NOT_FOUND.as_u16() => {
                TrelloError::board_not_found(board_id)
            }
            other => other,
        }
    }
}

/// First list whose name matches case-insensitively, in service order.
fn find_list_id(lists: &[BoardList], list_name: &str) -> Option<String> {
    let wanted = list_name.to_lowercase();
    lists
        .iter()
        .find(|list| list.name.to_lowercase() == wanted)
        .map(|list| list.id.clone())
}

#[async_trait]
impl TrelloApi for TrelloClient {
    #[instrument(skip(self))]
    async fn get_board(&self, board_id: &str) -> TrelloResult<Board> {
        self.get(&["boards", board_id])
            .await
            .map_err(|e| Self::translate_board_404(e, board_id))
    }

    #[instrument(skip(self))]
    async fn get_list_id(&self, board_id: &str, list_name: &str) -> TrelloResult<String> {
        let lists: Vec<BoardList> = self
            .get(&["boards", board_id, "lists"])
            .await
            .map_err(|e| Self::translate_board_404(e, board_id))?;

        debug!(count = lists.len(), "Fetched board lists");
        find_list_id(&lists, list_name).ok_or_else(|| TrelloError::list_not_found(list_name))
    }

    #[instrument(skip(self, description))]
    async fn add_card(
        &self,
        list_id: &str,
        title: &str,
        description: &str,
    ) -> TrelloResult<Card> {
        let card: Card = self
            .post_form(
                &["cards"],
                &[("idList", list_id), ("name", title), ("desc", description)],
            )
            .await?;

        info!(card_id = %card.id, "Card created");
        Ok(card)
    }

    #[instrument(skip(self))]
    async fn add_label(&self, card_id: &str, color: &str) -> TrelloResult<Label> {
        let color = color.to_lowercase();
        let label: Label = self
            .post_form(
                &["cards", card_id, "labels"],
                &[("color", color.as_str())],
            )
            .await?;

        info!(card_id = %card_id, label_id = %label.id, "Label attached");
        Ok(label)
    }

    #[instrument(skip(self, text))]
    async fn add_comment(&self, card_id: &str, text: &str) -> TrelloResult<CommentAction> {
        let action: CommentAction = self
            .post_form(
                &["cards", card_id, "actions", "comments"],
                &[("text", text)],
            )
            .await?;

        info!(card_id = %card_id, action_id = %action.id, "Comment added");
        Ok(action)
    }
}
