use super::*;

pub fn create_comment<S, N>(
    store: &S,
    notify: &N,
    path: &SlugPath,
    new_comment: NewComment,
) -> Result<Comment>
where
    S: CommentRepo,
    N: NotificationGateway + ?Sized,
{
    let comment = match usecases::create_comment(store, path, new_comment) {
        Ok(comment) => comment,
        Err(err) => {
            warn!("Failed to create comment for {path}: {err}");
            return Err(err.into());
        }
    };

    // Notify the operator (best effort)
    notify.notify(NotificationEvent::CommentAdded {
        slug_path: path,
        comment: &comment,
    });

    Ok(comment)
}
