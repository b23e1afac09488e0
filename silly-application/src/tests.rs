use std::{fs, sync::Mutex};

use silly_entities::builders::Builder;
use tempfile::TempDir;

use crate::{
    error::{AppError, BError},
    fs::FsCommentStore,
    prelude::*,
    *,
};
use silly_core::repositories::Error as RepoError;

#[derive(Default)]
struct RecordingNotifyGw {
    comments: Mutex<Vec<(SlugPath, Id)>>,
}

impl NotificationGateway for RecordingNotifyGw {
    fn notify(&self, event: NotificationEvent) {
        match event {
            NotificationEvent::CommentAdded { slug_path, comment } => {
                self.comments
                    .lock()
                    .unwrap()
                    .push((slug_path.clone(), comment.id));
            }
        }
    }
}

fn example() -> SlugPath {
    "example".parse().unwrap()
}

fn seeded_store() -> (TempDir, FsCommentStore) {
    let _ = env_logger::builder().is_test(true).try_init();
    let dir = tempfile::tempdir().unwrap();
    fs::create_dir_all(dir.path().join("example")).unwrap();
    fs::write(
        dir.path()
            .join("example")
            .join("01ARYZ6S410000000000000000.txt"),
        "Elliot,\n\nHello friend.\n",
    )
    .unwrap();
    let store = FsCommentStore::new(dir.path());
    (dir, store)
}

#[test]
fn load_seeded_comments() {
    let (_dir, store) = seeded_store();
    let comments = load_comments(&store, &example()).unwrap();
    assert_eq!(comments.len(), 1);
}

#[test]
fn create_comment_and_notify() {
    let (_dir, store) = seeded_store();
    let notify = RecordingNotifyGw::default();

    let new_comment = usecases::parse_submission("Leon, leon@gmail.com", "Do you dream, Elliot?");
    let comment = create_comment(&store, &notify, &example(), new_comment).unwrap();

    let comments = load_comments(&store, &example()).unwrap();
    assert_eq!(comments.len(), 2);
    assert_eq!(comments[1].created_by, "Leon");
    assert_eq!(
        comments[1].created_by_contact.as_deref(),
        Some("leon@gmail.com")
    );
    assert_eq!(comments[1].id, comment.id);
    assert_eq!(*notify.comments.lock().unwrap(), vec![(example(), comment.id)]);
}

#[test]
fn reject_comment_without_author() {
    let (dir, store) = seeded_store();
    let notify = RecordingNotifyGw::default();

    let new_comment = usecases::parse_submission(", leon@gmail.com", "Do you dream, Elliot?");
    let err = create_comment(&store, &notify, &example(), new_comment).unwrap_err();
    assert!(matches!(
        err,
        AppError::Business(BError::Parameter(usecases::Error::AuthorMissing))
    ));

    assert_eq!(load_comments(&store, &example()).unwrap().len(), 1);
    assert_eq!(fs::read_dir(dir.path().join("example")).unwrap().count(), 1);
    assert!(notify.comments.lock().unwrap().is_empty());
}

#[test]
fn report_storage_errors() {
    let dir = tempfile::tempdir().unwrap();
    // A file blocks the thread directory
    fs::write(dir.path().join("example"), "").unwrap();
    let store = FsCommentStore::new(dir.path());
    let notify = RecordingNotifyGw::default();

    let err = create_comment(
        &store,
        &notify,
        &example(),
        NewComment::build().created_by("Leon").finish(),
    )
    .unwrap_err();
    assert!(matches!(err, AppError::Business(BError::Repo(RepoError::Io(_)))));
    assert!(notify.comments.lock().unwrap().is_empty());
}
