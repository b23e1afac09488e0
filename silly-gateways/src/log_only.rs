use super::MessageGateway;

/// A message gateway that only writes to the log,
/// e.g. if no messaging service has been configured.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogOnly;

impl MessageGateway for LogOnly {
    fn send_message(&self, text: &str) {
        log::info!("Notification: {text}");
    }
}
