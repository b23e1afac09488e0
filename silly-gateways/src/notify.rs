use std::sync::Arc;

use silly_core::gateways::notify::{NotificationEvent, NotificationGateway};

use crate::{user_communication, MessageGateway};

#[derive(Clone)]
pub struct Notify {
    message_gw: Arc<dyn MessageGateway + Send + Sync + 'static>,
}

impl Notify {
    pub fn new<G>(gw: G) -> Self
    where
        G: MessageGateway + Send + Sync + 'static,
    {
        Self {
            message_gw: Arc::new(gw),
        }
    }
}

impl NotificationGateway for Notify {
    fn notify(&self, event: NotificationEvent) {
        use NotificationEvent as E;
        match event {
            E::CommentAdded { slug_path, comment } => {
                let text = user_communication::comment_added_message(slug_path, comment);
                log::debug!("Sending notification about comment {}", comment.id);
                self.message_gw.send_message(&text);
            }
        }
    }
}
