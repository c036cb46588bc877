use thiserror::Error;

#[derive(Error, Debug)]
pub enum CommandError {
    /// A command with the same name is already registered.
    #[error("A command named `{0}` is already registered")]
    Duplicate(String),

    /// Discord API error while running a command.
    ///
    /// Boxed due to large size.
    #[error(transparent)]
    DiscordErr(#[from] Box<serenity::Error>),

    /// Command-specific failure with a message for the log.
    #[error("{0}")]
    Failed(String),
}

impl From<serenity::Error> for CommandError {
    fn from(err: serenity::Error) -> Self {
        CommandError::DiscordErr(Box::new(err))
    }
}
