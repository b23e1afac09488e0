use std::{collections::HashSet, sync::Arc};

use rocket::{
    outcome::try_outcome,
    request::{FromRequest, Outcome},
    Request, State,
};
use silly_core::{entities::SlugPath, usecases};
use silly_db_fs::FsCommentStore;

use super::comments_cfg::{CommentsCfg, SharedCommentsCfg};

/// Access to the comments, bound to the configuration
/// snapshot that was current when the request arrived.
#[derive(Debug)]
pub struct Comments {
    cfg: Arc<CommentsCfg>,
    store: FsCommentStore,
}

impl Comments {
    pub fn new(cfg: Arc<CommentsCfg>) -> Self {
        let store = FsCommentStore::new(cfg.root_dir.clone());
        Self { cfg, store }
    }

    pub fn store(&self) -> &FsCommentStore {
        &self.store
    }

    pub fn known_slugs(&self) -> &HashSet<String> {
        &self.cfg.known_slugs
    }

    pub fn resolve(&self, raw: &str) -> Result<SlugPath, usecases::Error> {
        usecases::resolve_slug_path(raw, self.known_slugs())
    }
}

#[rocket::async_trait]
impl<'r> FromRequest<'r> for Comments {
    type Error = ();

    async fn from_request(request: &'r Request<'_>) -> Outcome<Self, Self::Error> {
        let shared = try_outcome!(request.guard::<&State<SharedCommentsCfg>>().await);
        Outcome::Success(Comments::new(shared.current()))
    }
}
