pub mod log_only;
pub mod notify;
pub mod telegram;
pub mod user_communication;

/// Delivers a plain text message to the operator.
pub trait MessageGateway {
    fn send_message(&self, text: &str);
}
