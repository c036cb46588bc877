use std::sync::Arc;

use serenity::all::{Context, EventHandler, Message, Ready};
use serenity::async_trait;

use crate::command::MessageDispatch;

pub mod message;
pub mod ready;

/// Discord bot event handler
pub struct Handler {
    pub name: String,
    pub dispatch: Arc<dyn MessageDispatch>,
}

impl Handler {
    pub fn new(name: impl Into<String>, dispatch: Arc<dyn MessageDispatch>) -> Self {
        Self {
            name: name.into(),
            dispatch,
        }
    }
}

#[async_trait]
impl EventHandler for Handler {
    /// Called when the bot is ready and connected to Discord
    async fn ready(&self, ctx: Context, ready: Ready) {
        ready::handle_ready(&self.name, ctx, ready).await;
    }

    /// Called when a message is sent in a channel the bot can see
    async fn message(&self, ctx: Context, message: Message) {
        message::handle_message(self.dispatch.as_ref(), ctx.http.clone(), message).await;
    }
}
