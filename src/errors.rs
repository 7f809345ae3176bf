use thiserror::Error;

/// Failures talking to the rental service.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("unexpected status {status} from {endpoint}")]
    Status {
        endpoint: String,
        status: reqwest::StatusCode,
    },
}

/// Failures surfaced by the search orchestrator and filter controller.
///
/// None of these are fatal: `NoCriteria` and `InvalidFilter` mean the
/// caller must correct its input, `Transport` means the operation was
/// abandoned with prior state untouched.
#[derive(Debug, Error)]
pub enum SearchError {
    #[error("please enter a search term or apply filters")]
    NoCriteria,

    #[error("invalid value {value:?} for filter {field}")]
    InvalidFilter { field: &'static str, value: String },

    #[error("failed to search properties")]
    Transport(#[from] ApiError),
}
