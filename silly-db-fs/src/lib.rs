//! # silly-db-fs
//!
//! Stores comments as plain text files, one file per comment:
//!
//! ```text
//! <root>/<prefix>/.../<slug>/<id>.txt
//! ```
//!
//! There is no index and no lock file. A new comment is written
//! with an exclusive create, which never replaces an existing file.

use std::{
    ffi::OsStr,
    fs::{self, OpenOptions},
    io::{self, ErrorKind, Write},
    path::{Path, PathBuf},
};

use silly_core::{
    entities::*,
    repositories::{CommentRepo, Error as RepoError},
    util::{sort::Chronological, validate::AutoCorrect},
};
use thiserror::Error;

pub mod record;

use record::EncodeError;

const FILE_EXTENSION: &str = "txt";

type Result<T> = std::result::Result<T, RepoError>;

#[derive(Debug, Clone)]
pub struct FsCommentStore {
    root: PathBuf,
}

impl FsCommentStore {
    pub fn new<P: Into<PathBuf>>(root: P) -> Self {
        Self { root: root.into() }
    }

    pub fn comment_file_path(&self, path: &SlugPath, id: &Id) -> PathBuf {
        path.to_path(&self.root).join(format!("{id}.{FILE_EXTENSION}"))
    }
}

#[derive(Debug, Error)]
enum ReadError {
    #[error("not an identifier (len {0})")]
    StemLength(usize),
    #[error(transparent)]
    Id(#[from] MalformedIdentifier),
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error(transparent)]
    Decode(#[from] record::DecodeError),
}

fn read_comment(file_path: &Path) -> std::result::Result<Comment, ReadError> {
    let stem = file_path
        .file_stem()
        .map(OsStr::to_string_lossy)
        .unwrap_or_default();
    let stem_len = stem.chars().count();
    if stem_len != ID_LEN {
        return Err(ReadError::StemLength(stem_len));
    }
    let id: Id = stem.parse()?;
    let text = fs::read_to_string(file_path)?;
    Ok(record::decode(&text, id)?)
}

fn is_comment_file(file_path: &Path) -> bool {
    file_path.extension() == Some(OsStr::new(FILE_EXTENSION)) && file_path.is_file()
}

impl From<EncodeError> for RepoError {
    fn from(err: EncodeError) -> Self {
        match err {
            EncodeError::AuthorMissing => Self::AuthorMissing,
            EncodeError::InvalidAuthor => Self::InvalidAuthor,
        }
    }
}

impl CommentRepo for FsCommentStore {
    fn list_comments(&self, path: &SlugPath) -> Result<Vec<Comment>> {
        let dir = path.to_path(&self.root);
        log::debug!("Reading comments from {}", dir.display());
        let entries = match fs::read_dir(&dir) {
            Ok(entries) => entries,
            Err(err) if err.kind() == ErrorKind::NotFound => {
                log::debug!("No comments for {path} yet");
                return Ok(vec![]);
            }
            Err(err) => {
                log::warn!("Unable to read directory {}: {err}", dir.display());
                return Err(err.into());
            }
        };
        let mut comments = vec![];
        for entry in entries {
            let file_path = match entry {
                Ok(entry) => entry.path(),
                Err(err) => {
                    log::warn!("Skipping unreadable entry in {}: {err}", dir.display());
                    continue;
                }
            };
            if !is_comment_file(&file_path) {
                continue;
            }
            match read_comment(&file_path) {
                Ok(comment) => comments.push(comment),
                Err(err) => {
                    log::warn!("Skipping file {} ({err})", file_path.display());
                }
            }
        }
        comments.sort_chronologically();
        Ok(comments)
    }

    fn save_comment_with_id(&self, path: &SlugPath, id: &Id, comment: &NewComment) -> Result<()> {
        // Stored comments read back exactly like the comment saved
        let record = record::encode(&comment.clone().auto_correct())?;
        let file_path = self.comment_file_path(path, id);
        if let Some(dir) = file_path.parent() {
            // Succeeds if the directory has been created concurrently.
            fs::create_dir_all(dir)?;
        }
        let mut file = match OpenOptions::new()
            .write(true)
            .create_new(true)
            .open(&file_path)
        {
            Ok(file) => file,
            Err(err) if err.kind() == ErrorKind::AlreadyExists => {
                log::error!("File {} already exists, skipping comment!", file_path.display());
                return Err(RepoError::AlreadyExists);
            }
            Err(err) => return Err(err.into()),
        };
        if let Err(err) = file
            .write_all(record.as_bytes())
            .and_then(|()| file.sync_all())
        {
            log::error!("Unable to write comment {}: {err}", file_path.display());
            drop(file);
            if let Err(err) = fs::remove_file(&file_path) {
                log::warn!("Unable to remove incomplete file {}: {err}", file_path.display());
            }
            return Err(err.into());
        }
        log::info!("Comment saved to {}", file_path.display());
        Ok(())
    }
}
