use thiserror::Error;

/// Errors that can occur while setting up a test environment.
#[derive(Error, Debug)]
pub enum TestError {
    /// Failed to create the temp directory or write fixture files.
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// Failed to serialize fixture JSON.
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}
