use thiserror::Error;

/// Errors surfaced by the HTTP asset client.
#[derive(Debug, Error)]
pub enum ClientError {
    /// Network-level failure: server unreachable, timeout, broken
    /// connection.
    #[error("transport error: {0}")]
    Transport(String),

    /// The server answered with a non-success status and a message body.
    #[error("server responded {status}: {message}")]
    Api { status: u16, message: String },

    /// The response body could not be decoded into the expected shape.
    #[error("invalid response body: {0}")]
    Decode(String),
}

impl From<reqwest::Error> for ClientError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            ClientError::Decode(err.to_string())
        } else {
            ClientError::Transport(err.to_string())
        }
    }
}
