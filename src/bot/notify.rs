//! Best-effort shutdown notification.
//!
//! When a bot goes away, a one-line notice is posted to the Discord webhook in
//! `CRASH_WEBHOOK_URL` so someone notices the outage. The notice is tied to the
//! lifetime of a [`ShutdownNotifier`]: dropping it sends the notice at most once.
//!
//! The post runs on its own OS thread with the blocking `reqwest` client and a
//! bounded timeout, so dropping the notifier from inside the async runtime is
//! fine and exit is never held up for longer than [`NOTIFY_TIMEOUT`]. Failures
//! are logged through the bot's logger and never returned from `drop`.

use std::time::Duration;

use serde_json::json;
use tracing::Dispatch;
use url::Url;

use crate::error::notification::NotificationError;

/// Upper bound on the whole webhook request, connect included.
pub const NOTIFY_TIMEOUT: Duration = Duration::from_secs(5);

pub struct ShutdownNotifier {
    bot_name: String,
    webhook_url: Option<String>,
    dispatch: Dispatch,
    fired: bool,
}

impl ShutdownNotifier {
    /// Creates a notifier for `bot_name`.
    ///
    /// # Arguments
    /// - `bot_name` - Name included in the notice
    /// - `webhook_url` - Webhook to post to; `None` disables the notice
    /// - `dispatch` - Logger receiving failures when the notice is sent on drop
    pub fn new(bot_name: impl Into<String>, webhook_url: Option<String>, dispatch: Dispatch) -> Self {
        Self {
            bot_name: bot_name.into(),
            webhook_url,
            dispatch,
            fired: false,
        }
    }

    /// Text of the notice.
    pub fn message(&self) -> String {
        format!("{} is down.", self.bot_name)
    }

    /// Posts the notice now instead of on drop.
    ///
    /// # Returns
    /// - `Ok(true)` - Notice delivered
    /// - `Ok(false)` - No webhook configured, or the notice was already attempted;
    ///   no network call is made
    /// - `Err(NotificationError)` - Invalid URL, request failure, or error status
    pub fn notify(&mut self) -> Result<bool, NotificationError> {
        if self.fired {
            return Ok(false);
        }
        self.fired = true;

        let Some(raw_url) = self.webhook_url.as_deref() else {
            return Ok(false);
        };

        let url = Url::parse(raw_url).map_err(|source| NotificationError::InvalidUrl {
            value: raw_url.to_string(),
            source,
        })?;
        let body = json!({ "content": self.message() });

        std::thread::spawn(move || post_notice(url, body))
            .join()
            .map_err(|_| NotificationError::WorkerPanicked)??;

        Ok(true)
    }
}

impl Drop for ShutdownNotifier {
    fn drop(&mut self) {
        if let Err(e) = self.notify() {
            tracing::dispatcher::with_default(&self.dispatch, || {
                tracing::error!("Unable to post exit to webhook.");
                tracing::error!("{}", e);
            });
        }
    }
}

fn post_notice(url: Url, body: serde_json::Value) -> Result<(), NotificationError> {
    let client = reqwest::blocking::Client::builder()
        .timeout(NOTIFY_TIMEOUT)
        .build()?;

    client.post(url).json(&body).send()?.error_for_status()?;

    Ok(())
}
