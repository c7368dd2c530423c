use thiserror::Error;

/// Failures talking to the browser page.
#[derive(Debug, Error)]
pub enum InteropError {
    #[error("no global `window` exists")]
    NoWindow,
    #[error("event has no window element to measure")]
    NoElement,
    #[error("failed to add `{event}` listener: {message}")]
    Listener { event: &'static str, message: String },
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid window config: {0}")]
    Json(#[from] serde_json::Error),
}
