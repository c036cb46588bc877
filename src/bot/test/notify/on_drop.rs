use super::*;

/// Tests dropping the notifier without a webhook.
///
/// Expected: drop completes and nothing is logged
#[test]
fn drop_without_webhook_is_silent() {
    let test = TestBuilder::new().build().unwrap();
    let logger = LogConfig::for_bot(test.log_root(), "chatbot").open().unwrap();

    drop(ShutdownNotifier::new(
        "chatbot",
        None,
        logger.dispatch().clone(),
    ));

    let log = std::fs::read_to_string(logger.path()).unwrap();
    assert!(log.is_empty());
}

/// Tests dropping the notifier with an unreachable webhook.
///
/// Verifies the failure is logged to the bot's log file and does not escape
/// the drop.
///
/// Expected: drop completes, log contains the failure
#[test]
fn drop_logs_unreachable_webhook() {
    let test = TestBuilder::new().build().unwrap();
    let logger = LogConfig::for_bot(test.log_root(), "chatbot").open().unwrap();

    drop(ShutdownNotifier::new(
        "chatbot",
        Some(unreachable_url().unwrap()),
        logger.dispatch().clone(),
    ));

    let log = std::fs::read_to_string(logger.path()).unwrap();
    assert!(log.contains("ERROR"));
    assert!(log.contains("Unable to post exit to webhook."));
}

/// Tests dropping the notifier inside the async runtime.
///
/// Expected: notice delivered without panicking the runtime
#[tokio::test(flavor = "multi_thread")]
async fn drop_inside_runtime_posts_notice() {
    let webhook = MockWebhook::start().await;

    drop(ShutdownNotifier::new(
        "chatbot",
        Some(webhook.url()),
        tracing::Dispatch::none(),
    ));

    let requests = webhook.received().await;
    assert_eq!(requests.len(), 1);
    assert!(String::from_utf8_lossy(&requests[0].body).contains("chatbot is down."));
}

/// Tests that an explicit notify suppresses the notice on drop.
///
/// Expected: exactly one request and nothing logged by the drop
#[tokio::test(flavor = "multi_thread")]
async fn drop_after_notify_does_not_repost() {
    let test = TestBuilder::new().build().unwrap();
    let logger = LogConfig::for_bot(test.log_root(), "chatbot").open().unwrap();
    let webhook = MockWebhook::start().await;
    let mut notifier = ShutdownNotifier::new(
        "chatbot",
        Some(webhook.url()),
        logger.dispatch().clone(),
    );

    assert!(matches!(notifier.notify(), Ok(true)));
    drop(notifier);

    assert_eq!(webhook.received().await.len(), 1);

    let log = std::fs::read_to_string(logger.path()).unwrap();
    assert!(!log.contains("Unable to post exit to webhook."));
}
