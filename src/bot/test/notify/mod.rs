use test_utils::builder::TestBuilder;
use test_utils::webhook::{unreachable_url, MockWebhook};

use crate::bot::notify::ShutdownNotifier;
use crate::error::notification::NotificationError;
use crate::logging::LogConfig;

mod on_drop;
