/// Errors surfaced by [`crate::ProductApi`] implementations.
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    /// The server answered with a non-success status.
    ///
    /// `message` is the server's `message` field when the body carried one.
    #[error("API error {status}: {}", message.as_deref().unwrap_or("<no message>"))]
    Api { status: u16, message: Option<String> },

    /// No usable response (connection refused, timeout, undecodable body).
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),
}

impl ClientError {
    /// Text to show the user: the server's message verbatim when there is
    /// one, otherwise `fallback`.
    pub fn user_message(&self, fallback: &str) -> String {
        match self {
            ClientError::Api {
                message: Some(message),
                ..
            } if !message.is_empty() => message.clone(),
            _ => fallback.to_string(),
        }
    }
}
