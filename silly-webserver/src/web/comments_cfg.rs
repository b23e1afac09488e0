use std::{collections::HashSet, path::PathBuf, sync::Arc};

use parking_lot::RwLock;

/// The part of the configuration that can be reloaded at runtime.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommentsCfg {
    pub root_dir: PathBuf,
    pub known_slugs: HashSet<String>,
}

#[derive(Debug)]
struct Snapshot {
    version: u64,
    cfg: Arc<CommentsCfg>,
}

/// A versioned snapshot of [`CommentsCfg`] that is shared
/// between request handlers and the reload task.
///
/// Every request works with the snapshot that was current
/// when it started, even if it is replaced meanwhile.
#[derive(Debug, Clone)]
pub struct SharedCommentsCfg(Arc<RwLock<Snapshot>>);

impl SharedCommentsCfg {
    pub fn new(cfg: CommentsCfg) -> Self {
        let snapshot = Snapshot {
            version: 0,
            cfg: Arc::new(cfg),
        };
        Self(Arc::new(RwLock::new(snapshot)))
    }

    pub fn current(&self) -> Arc<CommentsCfg> {
        Arc::clone(&self.0.read().cfg)
    }

    pub fn version(&self) -> u64 {
        self.0.read().version
    }

    /// Replaces the current snapshot if `cfg` differs from it.
    ///
    /// Returns the version of the current snapshot afterwards.
    pub fn replace(&self, cfg: CommentsCfg) -> u64 {
        let mut snapshot = self.0.write();
        if *snapshot.cfg == cfg {
            return snapshot.version;
        }
        snapshot.version += 1;
        info!(
            "Comments configuration changed (version {}): {} known slugs in {}",
            snapshot.version,
            cfg.known_slugs.len(),
            cfg.root_dir.display()
        );
        snapshot.cfg = Arc::new(cfg);
        snapshot.version
    }
}
