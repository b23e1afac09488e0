use silly_gateways::{log_only::LogOnly, notify::Notify, telegram::Telegram};

use crate::config;

pub fn notification_gateway(cfg: Option<config::NotificationGateway>) -> Notify {
    match cfg {
        Some(config::NotificationGateway::Telegram {
            api_base_url,
            bot_token,
            chat_id,
        }) => {
            log::info!("Use Telegram notification gateway");
            let mut gw = Telegram::new(bot_token, chat_id);
            if let Some(url) = api_base_url {
                gw.api_base_url = url;
            }
            Notify::new(gw)
        }
        None => {
            log::warn!("No notification gateway configured: new comments are only logged");
            Notify::new(LogOnly)
        }
    }
}
