//! Extensions shipped with the `marsbots` binary.
//!
//! - `marsbots.ping` - `ping` replies `Pong!`
//! - `marsbots.help` - `help` lists the bot's loaded commands

use serenity::async_trait;

use crate::command::{Command, CommandContext, CommandRegistry};
use crate::error::command::CommandError;
use crate::extension::{BoxError, Extension, ExtensionRegistry};

pub const PING_EXTENSION: &str = "marsbots.ping";
pub const HELP_EXTENSION: &str = "marsbots.help";

/// Registry holding every built-in extension.
pub fn registry() -> ExtensionRegistry {
    ExtensionRegistry::new()
        .with(PING_EXTENSION, PingExtension)
        .with(HELP_EXTENSION, HelpExtension)
}

pub struct PingExtension;

impl Extension for PingExtension {
    fn load(&self, commands: &mut CommandRegistry) -> Result<(), BoxError> {
        commands.register(PingCommand)?;
        Ok(())
    }
}

struct PingCommand;

#[async_trait]
impl Command for PingCommand {
    fn name(&self) -> &str {
        "ping"
    }

    fn description(&self) -> &str {
        "Check that the bot is responding"
    }

    async fn run(&self, ctx: CommandContext<'_>) -> Result<(), CommandError> {
        ctx.say("Pong!").await?;
        Ok(())
    }
}

pub struct HelpExtension;

impl Extension for HelpExtension {
    fn load(&self, commands: &mut CommandRegistry) -> Result<(), BoxError> {
        commands.register(HelpCommand)?;
        Ok(())
    }
}

struct HelpCommand;

#[async_trait]
impl Command for HelpCommand {
    fn name(&self) -> &str {
        "help"
    }

    fn description(&self) -> &str {
        "List available commands"
    }

    async fn run(&self, ctx: CommandContext<'_>) -> Result<(), CommandError> {
        ctx.say(help_text(ctx.commands)).await?;
        Ok(())
    }
}

/// One line per command: `<prefix><name>` followed by its description.
pub fn help_text(commands: &CommandRegistry) -> String {
    commands
        .iter()
        .map(|command| match command.description() {
            "" => format!("`{}{}`", commands.prefix(), command.name()),
            description => format!("`{}{}` - {}", commands.prefix(), command.name(), description),
        })
        .collect::<Vec<_>>()
        .join("\n")
}
