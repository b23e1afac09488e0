use rocket::{config::Config as RocketCfg, Rocket, Route};
use silly_core::gateways::notify::NotificationGateway;

mod comments_cfg;
mod error;
mod frontend;
mod guards;
mod store;


pub use comments_cfg::{CommentsCfg, SharedCommentsCfg};

#[derive(Debug, Clone)]
pub struct Cfg {
    /// Where the comment endpoint is mounted, e.g. `/silly`.
    pub url_prefix: String,
    pub enable_cors: bool,
}

pub(crate) struct InstanceOptions {
    mounts: Vec<(String, Vec<Route>)>,
    rocket_cfg: Option<RocketCfg>,
    cfg: Cfg,
}

pub(crate) struct Gateways {
    notify: Box<dyn NotificationGateway + Send + Sync>,
}

pub(crate) fn rocket_instance(
    options: InstanceOptions,
    comments_cfg: SharedCommentsCfg,
    gateways: Gateways,
) -> Rocket<rocket::Build> {
    let InstanceOptions {
        mounts,
        rocket_cfg,
        cfg,
    } = options;
    let Gateways { notify } = gateways;

    let r = match rocket_cfg {
        Some(cfg) => rocket::custom(cfg),
        None => rocket::build(),
    };

    let notify_gw = guards::Notify(notify);

    let mut instance = r.manage(comments_cfg).manage(notify_gw).manage(cfg);

    for (m, r) in mounts {
        instance = instance.mount(m.as_str(), r);
    }
    instance
}

fn mounts(cfg: &Cfg) -> Vec<(String, Vec<Route>)> {
    vec![
        ("/".to_owned(), frontend::routes()),
        (cfg.url_prefix.clone(), frontend::comment_routes()),
    ]
}

pub async fn run(
    cfg: Cfg,
    comments_cfg: SharedCommentsCfg,
    notify: Box<dyn NotificationGateway + Send + Sync>,
) {
    let enable_cors = cfg.enable_cors;
    let options = InstanceOptions {
        mounts: mounts(&cfg),
        rocket_cfg: None,
        cfg,
    };
    let gateways = Gateways { notify };

    let mut instance = rocket_instance(options, comments_cfg, gateways);
    if enable_cors {
        match rocket_cors::CorsOptions::default().to_cors() {
            Ok(cors) => {
                instance = instance.attach(cors);
            }
            Err(err) => {
                error!("Unable to enable CORS: {err}");
                return;
            }
        }
    }
    if let Err(err) = instance.launch().await {
        error!("Unable to run web server: {err}");
    }
}
