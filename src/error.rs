use thiserror::Error;

/// Everything that can go wrong while loading the catalog or launching a game.
///
/// `Clone` because a single failed catalog load is observed by every caller
/// awaiting the shared future.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MenuError {
    #[error("no global window")]
    NoWindow,
    #[error("request failed: {0}")]
    Js(String),
    #[error("network error: {status} {status_text}")]
    Status { status: u16, status_text: String },
    #[error("malformed catalog: {0}")]
    Malformed(String),
    #[error("response body was not text")]
    NotText,
    #[error("failed to load game HTML (HTTP {status})")]
    GameUnavailable { status: u16 },
    #[error("could not replace document: {0}")]
    Document(String),
}

impl From<serde_json::Error> for MenuError {
    fn from(err: serde_json::Error) -> Self {
        MenuError::Malformed(err.to_string())
    }
}
