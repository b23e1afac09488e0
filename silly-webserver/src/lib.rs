#[macro_use]
extern crate log;

use silly_core::gateways::notify::NotificationGateway;

mod web;

pub use web::{Cfg, CommentsCfg, SharedCommentsCfg};

pub async fn run(
    cfg: Cfg,
    comments_cfg: SharedCommentsCfg,
    notify_gw: Box<dyn NotificationGateway + Send + Sync>,
) {
    web::run(cfg, comments_cfg, notify_gw).await;
}
