use thiserror::Error;

#[derive(Debug, Error)]
pub enum BriefingError {
    #[error("Failed to send HTTP request: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Failed to access Gemini API: {0}")]
    Gemini(String),
}

/// Outcome of a single fetch-and-parse of one feed source.
#[derive(Debug, Error)]
pub enum FeedError {
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("unrecognized feed format: {0}")]
    Parse(String),
}

/// Outcome of a single chat send attempt, translated from the transport
/// response at the boundary so callers never match on error strings.
#[derive(Debug, Error)]
pub enum SendError {
    /// The endpoint rejected the rich-text markup itself. The one case that
    /// warrants a plain-mode retry with the same text.
    #[error("endpoint rejected message formatting")]
    FormatRejected,

    #[error("delivery failed: {0}")]
    Transport(String),
}
