//! Shared helpers for end-to-end tests against a mock Trello server.

use trello_cli::ui::Reporter;
use trello_cli::{ClientConfig, Credentials, TrelloClient};
use wiremock::MockServer;

pub const API_KEY: &str = "test_api_key";
pub const TOKEN: &str = "test_token";

/// Client pointed at the mock server.
pub fn client_for(server: &MockServer) -> TrelloClient {
    let credentials = Credentials::new(API_KEY, TOKEN).expect("valid credentials");
    let config = ClientConfig::new(credentials)
        .with_api_url(&server.uri())
        .expect("mock server URI");
    TrelloClient::new(config).expect("client builds")
}

/// Reporter that keeps every line, tagged by kind.
#[derive(Debug, Default)]
pub struct RecordingReporter {
    pub lines: Vec<(&'static str, String)>,
}

impl RecordingReporter {
    pub fn of_kind(&self, kind: &str) -> Vec<&str> {
        self.lines
            .iter()
            .filter(|(k, _)| *k == kind)
            .map(|(_, line)| line.as_str())
            .collect()
    }
}

impl Reporter for RecordingReporter {
    fn success(&mut self, message: &str) {
        self.lines.push(("success", message.to_string()));
    }

    fn info(&mut self, message: &str) {
        self.lines.push(("info", message.to_string()));
    }

    fn hint(&mut self, message: &str) {
        self.lines.push(("hint", message.to_string()));
    }

    fn failure(&mut self, message: &str) {
        self.lines.push(("failure", message.to_string()));
    }
}
