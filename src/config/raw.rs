use duration_str::deserialize_option_duration;
use serde::Deserialize;
use std::{collections::HashSet, path::PathBuf, time::Duration};

const DEFAULT_CONFIG_FILE: &str = include_str!("silly-comments.default.toml");

#[derive(Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Config {
    pub comments: Option<Comments>,
    pub webserver: Option<WebServer>,
    pub reload: Option<Reload>,
    pub notify: Option<Notify>,
    pub gateway: Option<Gateway>,
}

impl Default for Config {
    fn default() -> Self {
        let cfg: Self = toml::from_str(DEFAULT_CONFIG_FILE).expect("Default configuration");
        cfg
    }
}

#[derive(Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Comments {
    pub root_dir: PathBuf,
    pub known_slugs: HashSet<String>,
}

impl Default for Comments {
    fn default() -> Self {
        Config::default().comments.expect("Comments configuration")
    }
}

#[derive(Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct WebServer {
    pub url_prefix: String,
    pub cors: bool,
}

impl Default for WebServer {
    fn default() -> Self {
        Config::default()
            .webserver
            .expect("Webserver configuration")
    }
}

#[derive(Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Reload {
    #[serde(default, deserialize_with = "deserialize_option_duration")]
    pub interval: Option<Duration>,
}

impl Default for Reload {
    fn default() -> Self {
        Config::default().reload.expect("Reload configuration")
    }
}

#[derive(Default, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Notify {
    pub gateway: Option<NotificationGateway>,
}

#[derive(Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum NotificationGateway {
    Telegram,
}

#[derive(Clone, Default, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Gateway {
    pub telegram: Option<Telegram>,
}

#[derive(Clone, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Telegram {
    pub bot_token: String,
    pub chat_id: String,
    pub api_base_url: Option<String>,
}
