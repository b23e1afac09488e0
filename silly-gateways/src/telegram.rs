use std::thread;

use anyhow::Result;
use serde::{Deserialize, Serialize};

use super::MessageGateway;

pub const DEFAULT_API_BASE_URL: &str = "https://api.telegram.org";

/// A message gateway based on the Telegram Bot API.
#[derive(Debug, Clone)]
pub struct Telegram {
    pub api_base_url: String,
    pub bot_token: String,
    pub chat_id: String,
}

impl Telegram {
    pub fn new(bot_token: String, chat_id: String) -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_owned(),
            bot_token,
            chat_id,
        }
    }

    fn send_message_url(&self) -> String {
        let Self {
            api_base_url,
            bot_token,
            ..
        } = self;
        format!("{api_base_url}/bot{bot_token}/sendMessage")
    }
}

#[derive(Debug, Serialize)]
struct SendMessage {
    chat_id: String,
    text: String,
    disable_notification: bool,
}

#[derive(Debug, Deserialize, thiserror::Error)]
#[error("{description} ({error_code})")]
struct JsonError {
    error_code: u16,
    description: String,
}

#[cfg(not(test))]
fn send_raw(url: &str, message: &SendMessage) -> Result<()> {
    let client = reqwest::blocking::Client::new();
    let response = client.post(url).json(message).send()?;
    if response.status().is_success() {
        log::debug!("Telegram response: {:#?}", response);
        Ok(())
    } else {
        let json_error: JsonError = response.json()?;
        Err(json_error.into())
    }
}

/// Don't actually send messages while running the tests.
#[cfg(test)]
fn send_raw(_: &str, message: &SendMessage) -> Result<()> {
    log::debug!("Would send message: {:?}", message);
    Ok(())
}

impl MessageGateway for Telegram {
    fn send_message(&self, text: &str) {
        let url = self.send_message_url();
        let message = SendMessage {
            chat_id: self.chat_id.clone(),
            text: text.to_owned(),
            disable_notification: true,
        };
        thread::spawn(move || {
            if let Err(err) = send_raw(&url, &message) {
                log::warn!("Could not send Telegram message: {err}");
            }
        });
    }
}
