use thiserror::Error;

/// Failure to post the shutdown notice to the crash webhook.
///
/// Never fatal. The notifier logs these and carries on with process exit.
#[derive(Error, Debug)]
pub enum NotificationError {
    /// `CRASH_WEBHOOK_URL` is not a valid URL.
    #[error("Invalid crash webhook URL '{value}': {source}")]
    InvalidUrl {
        /// The configured value
        value: String,
        #[source]
        source: url::ParseError,
    },

    /// The HTTP request failed or the webhook answered with an error status.
    #[error(transparent)]
    Request(#[from] reqwest::Error),

    /// The worker thread posting the notice panicked.
    #[error("Shutdown notification worker panicked")]
    WorkerPanicked,
}
