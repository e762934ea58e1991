use thiserror::Error;

#[derive(Debug, Error)]
pub enum SearchError {
    #[error("unknown node: {0}")]
    UnknownNode(String),
    #[error("{0} can't be both origin and destination")]
    SameOriginAndDestination(String),
    #[error("no path from {start} to {goal}")]
    NoPath { start: String, goal: String },
    #[error("invalid map: {0}")]
    InvalidMap(String),
    #[error("invalid options: {0}")]
    InvalidOptions(String),
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
