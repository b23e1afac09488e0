use super::*;

pub fn load_comments<S>(store: &S, path: &SlugPath) -> Result<Vec<Comment>>
where
    S: CommentRepo,
{
    Ok(usecases::load_comments(store, path)?)
}
