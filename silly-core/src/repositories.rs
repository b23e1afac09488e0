// Low-level storage access traits.

use crate::entities::*;
use std::io;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("The object already exists")]
    AlreadyExists,
    #[error("The author is missing")]
    AuthorMissing,
    #[error("The author name is invalid")]
    InvalidAuthor,
    #[error(transparent)]
    Io(#[from] io::Error),
}

type Result<T> = std::result::Result<T, Error>;

pub trait CommentRepo {
    /// All comments of a thread in chronological order.
    ///
    /// Returns an empty list if the thread does not exist yet.
    fn list_comments(&self, path: &SlugPath) -> Result<Vec<Comment>>;

    /// Stores a new comment with a freshly generated id.
    fn save_comment(&self, path: &SlugPath, comment: &NewComment) -> Result<Id> {
        let id = Id::new();
        self.save_comment_with_id(path, &id, comment)?;
        Ok(id)
    }

    /// Stores a new comment.
    ///
    /// Fails with [`Error::AlreadyExists`] if a comment
    /// with the same id exists, which is never replaced.
    fn save_comment_with_id(&self, path: &SlugPath, id: &Id, comment: &NewComment) -> Result<()>;
}
