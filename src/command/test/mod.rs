use std::sync::{Arc, Mutex};

use serenity::all::Http;
use serenity::async_trait;
use test_utils::serenity::{create_test_message, create_test_user};

use crate::command::{Command, CommandContext, CommandRegistry, Invocation, MessageDispatch};
use crate::error::command::CommandError;


/// Command recording the arguments of every invocation.
struct RecordingCommand {
    name: &'static str,
    calls: Arc<Mutex<Vec<String>>>,
}

impl RecordingCommand {
    fn new(name: &'static str) -> (Self, Arc<Mutex<Vec<String>>>) {
        let calls = Arc::new(Mutex::new(Vec::new()));
        (
            Self {
                name,
                calls: calls.clone(),
            },
            calls,
        )
    }
}

#[async_trait]
impl Command for RecordingCommand {
    fn name(&self) -> &str {
        self.name
    }

    async fn run(&self, ctx: CommandContext<'_>) -> Result<(), CommandError> {
        self.calls.lock().unwrap().push(ctx.args.to_string());
        Ok(())
    }
}

/// Command that always fails.
struct FailingCommand;

#[async_trait]
impl Command for FailingCommand {
    fn name(&self) -> &str {
        "fail"
    }

    async fn run(&self, _ctx: CommandContext<'_>) -> Result<(), CommandError> {
        Err(CommandError::Failed("intentional".to_string()))
    }
}

fn http() -> Arc<Http> {
    Arc::new(Http::new(""))
}
