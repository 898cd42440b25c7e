use thiserror::Error;

#[derive(Debug, Error)]
pub enum FetchError {
    #[error("Package not found: {0}")]
    NotFound(String),

    #[error("Unexpected status: {code} {reason}")]
    UnexpectedStatus { code: u16, reason: String },

    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Malformed response: {0}")]
    MalformedResponse(String),
}

#[derive(Debug, Error)]
pub enum AnalysisError {
    #[error("Package name is not specified")]
    MissingPackageName,

    #[error("Failed to fetch package metadata: {0}")]
    FetchFailed(#[from] FetchError),
}
