use super::prelude::*;

pub fn load_comments<R>(repo: &R, path: &SlugPath) -> Result<Vec<Comment>>
where
    R: CommentRepo,
{
    let comments = repo.list_comments(path)?;
    log::debug!("Loaded {} comments of {path}", comments.len());
    Ok(comments)
}
