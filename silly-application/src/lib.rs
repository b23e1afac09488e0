#[macro_use]
extern crate log;

mod create_comment;
mod load_comments;

pub mod prelude {
    pub use super::{create_comment::*, load_comments::*};
}

pub mod error;

pub type Result<T> = std::result::Result<T, error::AppError>;

pub(crate) use silly_core::{entities::*, gateways::notify::*, repositories::*, usecases};

#[cfg(test)]
pub(crate) mod tests;

pub mod fs {
    pub use silly_db_fs::FsCommentStore;
}
