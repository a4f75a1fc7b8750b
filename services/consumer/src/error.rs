/// Failures visible to callers of the consumer client.
///
/// Provider-side error statuses are not errors here: they degrade into an
/// empty [`ConsumerResult`](crate::outcome::ConsumerResult).
#[derive(Debug, thiserror::Error)]
pub enum ConsumerError {
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("malformed provider response: {0}")]
    MalformedResponse(String),
    #[error("invalid provider url: {0}")]
    InvalidUrl(String),
}

impl ConsumerError {
    pub fn is_timeout(&self) -> bool {
        matches!(self, Self::Transport(e) if e.is_timeout())
    }
}
