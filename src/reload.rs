use std::time::Duration;

use silly_webserver::{CommentsCfg, SharedCommentsCfg};
use tokio::time::MissedTickBehavior;

use crate::config;

/// Periodically re-reads the configuration and
/// replaces the comments snapshot if it changed.
///
/// A broken configuration keeps the previous snapshot.
pub async fn run(source: config::Source, shared: SharedCommentsCfg, period: Duration) {
    let mut interval = tokio::time::interval(period);
    interval.set_missed_tick_behavior(MissedTickBehavior::Delay);
    // The first tick completes immediately
    interval.tick().await;

    loop {
        interval.tick().await;
        let source = source.clone();
        let shared = shared.clone();
        // Reading the file blocks
        let reloaded = tokio::task::spawn_blocking(move || reload_once(&source, &shared)).await;
        if let Err(err) = reloaded {
            log::error!("Configuration reload failed: {err}");
        }
    }
}

fn reload_once(source: &config::Source, shared: &SharedCommentsCfg) -> u64 {
    match source.load() {
        Ok(cfg) => shared.replace(CommentsCfg::from(cfg.comments)),
        Err(err) => {
            log::warn!("Keeping the previous comments configuration: {err:#}");
            shared.version()
        }
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use super::*;

    const CONFIG: &str = r#"
[comments]
root-dir = "comments"
known-slugs = ["example"]
"#;

    fn source(file: &std::path::Path) -> config::Source {
        config::Source {
            file: Some(file.to_path_buf()),
            ..Default::default()
        }
    }

    #[test]
    fn replace_snapshot_on_change() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("silly-comments.toml");
        fs::write(&file, CONFIG).unwrap();
        let source = source(&file);
        let shared = SharedCommentsCfg::new(source.load().unwrap().comments.into());

        assert_eq!(reload_once(&source, &shared), 0);

        fs::write(&file, CONFIG.replace(r#"["example"]"#, r#"["example", "other"]"#)).unwrap();
        assert_eq!(reload_once(&source, &shared), 1);
        assert!(shared.current().known_slugs.contains("other"));
    }

    #[tokio::test]
    async fn reload_periodically() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("silly-comments.toml");
        fs::write(&file, CONFIG).unwrap();
        let source = source(&file);
        let shared = SharedCommentsCfg::new(source.load().unwrap().comments.into());

        let task = tokio::spawn(run(source, shared.clone(), Duration::from_millis(10)));
        fs::write(&file, CONFIG.replace(r#"["example"]"#, r#"["example", "other"]"#)).unwrap();
        for _ in 0..200 {
            if shared.version() > 0 {
                break;
            }
            tokio::time::sleep(Duration::from_millis(10)).await;
        }
        task.abort();
        assert_eq!(shared.version(), 1);
        assert!(shared.current().known_slugs.contains("other"));
    }

    #[test]
    fn keep_snapshot_on_broken_file() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("silly-comments.toml");
        fs::write(&file, CONFIG).unwrap();
        let source = source(&file);
        let shared = SharedCommentsCfg::new(source.load().unwrap().comments.into());

        fs::write(&file, "[comments\nroot-dir =").unwrap();
        assert_eq!(reload_once(&source, &shared), 0);

        fs::write(&file, CONFIG.replace(r#"["example"]"#, "[]")).unwrap();
        assert_eq!(reload_once(&source, &shared), 0);
        assert!(shared.current().known_slugs.contains("example"));
    }
}
