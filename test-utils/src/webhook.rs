//! Stand-in for a Discord webhook.
//!
//! `MockWebhook` wraps a `wiremock::MockServer` that answers `POST /webhook`
//! with a fixed status and records every request it receives.

use std::net::TcpListener;

use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, Request, ResponseTemplate};

use crate::error::TestError;

const WEBHOOK_PATH: &str = "/webhook";

pub struct MockWebhook {
    server: MockServer,
}

impl MockWebhook {
    /// Starts a webhook answering `204 No Content`, as Discord does.
    pub async fn start() -> Self {
        Self::start_with_status(204).await
    }

    /// Starts a webhook answering every post with `status`.
    pub async fn start_with_status(status: u16) -> Self {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path(WEBHOOK_PATH))
            .respond_with(ResponseTemplate::new(status))
            .mount(&server)
            .await;

        Self { server }
    }

    pub fn url(&self) -> String {
        format!("{}{}", self.server.uri(), WEBHOOK_PATH)
    }

    /// Requests received so far, in arrival order.
    pub async fn received(&self) -> Vec<Request> {
        self.server.received_requests().await.unwrap_or_default()
    }
}

/// A loopback URL with nothing listening behind it.
pub fn unreachable_url() -> Result<String, TestError> {
    let listener = TcpListener::bind("127.0.0.1:0")?;
    let addr = listener.local_addr()?;
    drop(listener);

    Ok(format!("http://{}{}", addr, WEBHOOK_PATH))
}
