use std::sync::{Arc, Mutex};

use serenity::all::{Http, Message};
use serenity::async_trait;
use test_utils::serenity::{create_test_message, create_test_user};

use crate::bot::handler::message::handle_message;
use crate::command::MessageDispatch;


/// Dispatcher recording the content of every forwarded message.
#[derive(Default)]
struct RecordingDispatch {
    forwarded: Mutex<Vec<String>>,
}

#[async_trait]
impl MessageDispatch for RecordingDispatch {
    async fn dispatch(&self, _http: Arc<Http>, message: &Message) {
        self.forwarded.lock().unwrap().push(message.content.clone());
    }
}

fn http() -> Arc<Http> {
    Arc::new(Http::new(""))
}
