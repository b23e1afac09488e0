mod create_comment;
mod error;
mod load_comments;
mod resolve_slug_path;


pub use self::{create_comment::*, error::Error, load_comments::*, resolve_slug_path::*};

mod prelude {
    pub use super::error::Error;
    pub type Result<T> = std::result::Result<T, Error>;
    pub use crate::{
        entities::*,
        repositories::{CommentRepo, Error as RepoError},
        util::sort::Chronological,
    };
}
