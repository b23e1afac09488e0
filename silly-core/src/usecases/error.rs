use crate::{entities::SlugPathError, repositories, util::validate::CommentInvalidation};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Unknown slug: {0}")]
    UnknownSlug(String),
    #[error(transparent)]
    InvalidSlugPath(#[from] SlugPathError),
    #[error("Missing author")]
    AuthorMissing,
    #[error("Invalid author name")]
    InvalidAuthor,
    #[error("Empty comment")]
    EmptyComment,
    #[error(transparent)]
    Repo(repositories::Error),
}

impl From<CommentInvalidation> for Error {
    fn from(err: CommentInvalidation) -> Self {
        match err {
            CommentInvalidation::AuthorMissing => Self::AuthorMissing,
            CommentInvalidation::AuthorName => Self::InvalidAuthor,
            CommentInvalidation::Empty => Self::EmptyComment,
        }
    }
}

impl From<repositories::Error> for Error {
    fn from(err: repositories::Error) -> Self {
        match err {
            repositories::Error::AuthorMissing => Self::AuthorMissing,
            repositories::Error::InvalidAuthor => Self::InvalidAuthor,
            err => Self::Repo(err),
        }
    }
}
