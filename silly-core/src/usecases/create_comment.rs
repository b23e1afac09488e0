use super::prelude::*;
use crate::util::validate::{AutoCorrect, Validate};

/// Builds a new comment from the fields of the comment form.
///
/// The contact field is expected to look like `Name, e-mail`
/// and is split at the first comma. The body is split into
/// paragraphs at blank lines.
pub fn parse_submission(contact_field: &str, body: &str) -> NewComment {
    let (created_by, created_by_contact) = match contact_field.split_once(',') {
        Some((name, contact)) => (name, Some(contact)),
        None => (contact_field, None),
    };
    NewComment {
        created_by: created_by.trim().to_owned(),
        created_by_contact: created_by_contact
            .map(str::trim)
            .filter(|c| !c.is_empty())
            .map(ToOwned::to_owned),
        paragraphs: split_into_paragraphs(body),
    }
}

pub fn create_comment<R>(repo: &R, path: &SlugPath, new_comment: NewComment) -> Result<Comment>
where
    R: CommentRepo,
{
    let new_comment = new_comment.auto_correct();
    if let Err(err) = new_comment.validate() {
        log::warn!("Rejected comment for {path}: {err}");
        return Err(err.into());
    }
    log::info!("Creating new comment from {}", new_comment.created_by);
    let id = repo.save_comment(path, &new_comment)?;
    log::info!("Comment {id} saved for {path}");
    Ok(Comment::new(id, new_comment))
}
