use crate::entities::*;

#[derive(Debug, Clone, Copy)]
pub enum NotificationEvent<'a> {
    CommentAdded {
        slug_path: &'a SlugPath,
        comment: &'a Comment,
    },
}

/// Delivers notifications to the operator.
///
/// Implementations must not block the caller for
/// the time it takes to deliver the message and
/// must never fail visibly.
pub trait NotificationGateway {
    fn notify(&self, event: NotificationEvent);
}
