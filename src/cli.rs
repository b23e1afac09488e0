use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use silly_webserver::{CommentsCfg, SharedCommentsCfg};

use crate::{config, gateways, reload};

/// Serve comment threads for static web pages.
#[derive(Debug, Parser)]
#[command(version, about)]
pub struct Args {
    /// Configuration file (TOML)
    #[arg(long, value_name = "PATH")]
    config_file: Option<PathBuf>,

    /// Root directory of all comment threads
    #[arg(long, value_name = "PATH")]
    comments_dir: Option<PathBuf>,

    /// Allow cross-origin requests
    #[arg(long)]
    enable_cors: bool,
}

impl From<Args> for config::Source {
    fn from(from: Args) -> Self {
        let Args {
            config_file,
            comments_dir,
            enable_cors,
        } = from;
        Self {
            file: config_file,
            comments_dir,
            enable_cors,
        }
    }
}

pub fn run() -> Result<()> {
    let source = config::Source::from(Args::parse());
    let cfg = source.load()?;

    let config::Config {
        comments,
        webserver,
        reload,
        notify,
    } = cfg;

    log::info!(
        "Serving comments from {} ({} known slugs)",
        comments.root_dir.display(),
        comments.known_slugs.len()
    );
    let comments_cfg = SharedCommentsCfg::new(CommentsCfg::from(comments));
    let web_cfg = silly_webserver::Cfg {
        url_prefix: webserver.url_prefix,
        enable_cors: webserver.enable_cors,
    };
    let notify_gw = gateways::notification_gateway(notify.gateway);

    let runtime = tokio::runtime::Runtime::new()?;
    runtime.block_on(async move {
        if let Some(period) = reload.interval {
            tokio::spawn(reload::run(source, comments_cfg.clone(), period));
        } else {
            log::info!("Configuration reload is disabled");
        }
        silly_webserver::run(web_cfg, comments_cfg, Box::new(notify_gw)).await;
    });
    Ok(())
}
