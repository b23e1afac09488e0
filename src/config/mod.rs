use anyhow::{anyhow, bail, Result};
use silly_core::entities::SlugPath;
use silly_webserver::CommentsCfg;
use std::{
    collections::HashSet,
    env, fs,
    io::ErrorKind,
    path::{Path, PathBuf},
    time::Duration,
};

mod raw;

const DEFAULT_CONFIG_FILE_NAME: &str = "silly-comments.toml";

const ENV_NAME_COMMENTS_DIR: &str = "COMMENTS_DIR";
const ENV_NAME_TELEGRAM_BOT_TOKEN: &str = "TELEGRAM_BOT_TOKEN";
const ENV_NAME_TELEGRAM_CHAT_ID: &str = "TELEGRAM_BOT_CHAT_ID";

pub struct Config {
    pub comments: Comments,
    pub webserver: WebServer,
    pub reload: Reload,
    pub notify: Notify,
}

/// Where the configuration comes from.
///
/// Command line arguments take precedence over
/// environment variables and the configuration file.
#[derive(Debug, Clone, Default)]
pub struct Source {
    pub file: Option<PathBuf>,
    pub comments_dir: Option<PathBuf>,
    pub enable_cors: bool,
}

impl Source {
    pub fn load(&self) -> Result<Config> {
        let mut cfg = Config::try_load_from_file_or_default(self.file.as_deref())?;
        if let Some(dir) = &self.comments_dir {
            cfg.comments.root_dir = dir.clone();
        }
        if self.enable_cors {
            cfg.webserver.enable_cors = true;
        }
        Ok(cfg)
    }
}

impl Config {
    pub fn try_load_from_file_or_default(file_path: Option<&Path>) -> Result<Self> {
        let raw_config = match file_path {
            Some(file_path) => {
                let cfg_string = fs::read_to_string(file_path).map_err(|err| {
                    anyhow!("Unable to read {}: {err}", file_path.display())
                })?;
                toml::from_str(&cfg_string)?
            }
            None => match fs::read_to_string(DEFAULT_CONFIG_FILE_NAME) {
                Ok(cfg_string) => toml::from_str(&cfg_string)?,
                Err(err) if err.kind() == ErrorKind::NotFound => {
                    log::debug!(
                        "{DEFAULT_CONFIG_FILE_NAME} not found => load default configuration."
                    );
                    raw::Config::default()
                }
                Err(err) => return Err(err.into()),
            },
        };
        let mut cfg = Self::try_from(raw_config)?;
        cfg.apply_env_overrides(|name| env::var(name).ok())?;
        Ok(cfg)
    }

    fn apply_env_overrides<F>(&mut self, var: F) -> Result<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(dir) = var(ENV_NAME_COMMENTS_DIR) {
            if dir.is_empty() {
                bail!("{ENV_NAME_COMMENTS_DIR} must not be empty");
            }
            self.comments.root_dir = dir.into();
        }
        match (var(ENV_NAME_TELEGRAM_BOT_TOKEN), var(ENV_NAME_TELEGRAM_CHAT_ID)) {
            (Some(bot_token), Some(chat_id)) => {
                let api_base_url = match self.notify.gateway.take() {
                    Some(NotificationGateway::Telegram { api_base_url, .. }) => api_base_url,
                    None => None,
                };
                self.notify.gateway = Some(NotificationGateway::Telegram {
                    api_base_url,
                    bot_token,
                    chat_id,
                });
            }
            (None, None) => {}
            _ => {
                log::warn!(
                    "Both {ENV_NAME_TELEGRAM_BOT_TOKEN} and {ENV_NAME_TELEGRAM_CHAT_ID} are needed to configure Telegram"
                );
            }
        }
        Ok(())
    }
}

#[derive(Debug, Clone)]
pub struct Comments {
    /// File system directory that contains all comment threads.
    pub root_dir: PathBuf,
    pub known_slugs: HashSet<String>,
}

impl From<Comments> for CommentsCfg {
    fn from(from: Comments) -> Self {
        let Comments {
            root_dir,
            known_slugs,
        } = from;
        Self {
            root_dir,
            known_slugs,
        }
    }
}

pub struct WebServer {
    pub url_prefix: String,
    pub enable_cors: bool,
}

pub struct Reload {
    pub interval: Option<Duration>,
}

pub struct Notify {
    pub gateway: Option<NotificationGateway>,
}

#[derive(Clone)]
pub enum NotificationGateway {
    Telegram {
        api_base_url: Option<String>,
        bot_token: String,
        chat_id: String,
    },
}

fn validate_slug(slug: &str) -> Result<()> {
    match slug.parse::<SlugPath>() {
        Ok(path) if path.prefix().is_empty() && path.slug() == slug => Ok(()),
        _ => Err(anyhow!("Invalid slug '{slug}'")),
    }
}

fn normalize_url_prefix(prefix: &str) -> Result<String> {
    let trimmed = prefix.trim_end_matches('/');
    if !trimmed.starts_with('/') {
        bail!("The URL prefix '{prefix}' must start with a '/' and must not be the root");
    }
    if trimmed.contains(|c: char| c.is_whitespace() || matches!(c, '?' | '#' | '<' | '>')) {
        bail!("Invalid URL prefix '{prefix}'");
    }
    Ok(trimmed.to_owned())
}

impl TryFrom<raw::Config> for Config {
    type Error = anyhow::Error;
    fn try_from(from: raw::Config) -> Result<Self> {
        let raw::Config {
            comments,
            webserver,
            reload,
            notify,
            gateway,
        } = from;

        let raw::Comments {
            root_dir,
            known_slugs,
        } = comments.unwrap_or_default();

        if root_dir.as_os_str().is_empty() {
            bail!("No comments directory defined");
        }
        if known_slugs.is_empty() {
            bail!("No known slugs defined");
        }
        for slug in &known_slugs {
            validate_slug(slug)?;
        }
        let comments = Comments {
            root_dir,
            known_slugs,
        };

        let raw::WebServer { url_prefix, cors } = webserver.unwrap_or_default();
        let webserver = WebServer {
            url_prefix: normalize_url_prefix(&url_prefix)?,
            enable_cors: cors,
        };

        let raw::Reload { interval } = reload.unwrap_or_default();
        if interval.is_some_and(|i| i.is_zero()) {
            bail!("The reload interval must not be zero");
        }
        let reload = Reload { interval };

        let notify_gateway = match notify.and_then(|n| n.gateway) {
            Some(gw_name) => {
                let gateway = gateway.unwrap_or_default();
                let gw = match gw_name {
                    raw::NotificationGateway::Telegram => {
                        let raw::Telegram {
                            bot_token,
                            chat_id,
                            api_base_url,
                        } = gateway.telegram.ok_or_else(|| {
                            anyhow!("Missing 'telegram' gateway configuration")
                        })?;
                        NotificationGateway::Telegram {
                            api_base_url,
                            bot_token,
                            chat_id,
                        }
                    }
                };
                Some(gw)
            }
            None => None,
        };
        let notify = Notify {
            gateway: notify_gateway,
        };

        Ok(Self {
            comments,
            webserver,
            reload,
            notify,
        })
    }
}
