use std::sync::Arc;

use serenity::all::{Http, Message};

use crate::command::MessageDispatch;

/// Handle a message sent in a channel the bot can see.
///
/// Messages from bot accounts, including this bot, are dropped so bots never
/// trigger each other. Everything else goes to command dispatch.
///
/// # Returns
/// - `true` - Message was forwarded to dispatch
/// - `false` - Message was authored by a bot and ignored
pub async fn handle_message<D>(dispatch: &D, http: Arc<Http>, message: Message) -> bool
where
    D: MessageDispatch + ?Sized,
{
    if message.author.bot {
        return false;
    }

    dispatch.dispatch(http, &message).await;
    true
}
