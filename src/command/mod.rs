//! Prefix command dispatch.
//!
//! Extensions register [`Command`]s into a [`CommandRegistry`] while the bot is
//! bootstrapping. Once the client is running, every message from a non-bot
//! author is handed to the registry through [`MessageDispatch`]. A message is a
//! command invocation when it starts with the bot's prefix; the word directly
//! after the prefix names the command and the rest of the message is passed as
//! its arguments.

use std::collections::BTreeMap;
use std::sync::Arc;

use serenity::all::{Http, Message};
use serenity::async_trait;

use crate::error::command::CommandError;

/// Everything a command needs to respond to one invocation.
pub struct CommandContext<'a> {
    pub http: Arc<Http>,
    pub message: &'a Message,
    /// Text after the command name, trimmed.
    pub args: &'a str,
    /// Registry the command was dispatched from.
    pub commands: &'a CommandRegistry,
}

impl CommandContext<'_> {
    /// Sends a message to the channel the command was invoked in.
    pub async fn say(&self, content: impl Into<String>) -> Result<Message, CommandError> {
        Ok(self.message.channel_id.say(&self.http, content).await?)
    }
}

#[async_trait]
pub trait Command: Send + Sync {
    fn name(&self) -> &str;

    fn description(&self) -> &str {
        ""
    }

    async fn run(&self, ctx: CommandContext<'_>) -> Result<(), CommandError>;
}

/// Forwards chat messages into command handling.
#[async_trait]
pub trait MessageDispatch: Send + Sync {
    async fn dispatch(&self, http: Arc<Http>, message: &Message);
}

/// A parsed command invocation.
#[derive(Debug, PartialEq, Eq)]
pub struct Invocation<'a> {
    pub name: &'a str,
    pub args: &'a str,
}

/// Commands available to one bot, keyed by name.
pub struct CommandRegistry {
    prefix: String,
    commands: BTreeMap<String, Arc<dyn Command>>,
}

impl CommandRegistry {
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            commands: BTreeMap::new(),
        }
    }

    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    /// Adds a command.
    ///
    /// # Returns
    /// - `Ok(())` - Command registered
    /// - `Err(CommandError::Duplicate)` - A command with this name already exists
    pub fn register(&mut self, command: impl Command + 'static) -> Result<(), CommandError> {
        let name = command.name().to_string();
        if self.commands.contains_key(&name) {
            return Err(CommandError::Duplicate(name));
        }

        self.commands.insert(name, Arc::new(command));
        Ok(())
    }

    pub fn get(&self, name: &str) -> Option<&Arc<dyn Command>> {
        self.commands.get(name)
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Registered commands in name order.
    pub fn iter(&self) -> impl Iterator<Item = &Arc<dyn Command>> {
        self.commands.values()
    }

    /// Splits message content into a command name and arguments.
    ///
    /// Returns `None` when the content does not start with the prefix or no
    /// command name directly follows it.
    pub fn parse<'a>(&self, content: &'a str) -> Option<Invocation<'a>> {
        let rest = content.strip_prefix(self.prefix.as_str())?;

        let (name, args) = match rest.split_once(char::is_whitespace) {
            Some((name, args)) => (name, args.trim()),
            None => (rest, ""),
        };

        if name.is_empty() {
            return None;
        }

        Some(Invocation { name, args })
    }
}

#[async_trait]
impl MessageDispatch for CommandRegistry {
    async fn dispatch(&self, http: Arc<Http>, message: &Message) {
        let Some(invocation) = self.parse(&message.content) else {
            return;
        };

        let Some(command) = self.get(invocation.name) else {
            tracing::debug!("Ignoring unknown command {}", invocation.name);
            return;
        };

        let ctx = CommandContext {
            http,
            message,
            args: invocation.args,
            commands: self,
        };

        if let Err(e) = command.run(ctx).await {
            tracing::error!("Command {} failed: {}", invocation.name, e);
        }
    }
}

#[cfg(test)]
mod test;
