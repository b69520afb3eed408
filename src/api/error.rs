use thiserror::Error;

/// Failure of a call against the search proxy or the image host.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HttpError {
    /// The server answered with a non-success status code.
    #[error("HTTP {0}")]
    Status(u16),
    /// The request never produced a response (connect, TLS, timeout).
    #[error("Request failed: {0}")]
    Transport(String),
    /// The body was not the JSON shape we expect.
    #[error("Malformed response: {0}")]
    Decode(String),
}

impl From<reqwest::Error> for HttpError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            HttpError::Decode(err.to_string())
        } else {
            HttpError::Transport(err.to_string())
        }
    }
}

impl From<serde_json::Error> for HttpError {
    fn from(err: serde_json::Error) -> Self {
        HttpError::Decode(err.to_string())
    }
}
