pub trait Builder {
    type Build;
    fn build() -> Self::Build;
}

pub use self::new_comment_builder::*;

pub mod new_comment_builder {

    use super::*;
    use crate::comment::*;

    #[derive(Debug)]
    pub struct NewCommentBuild {
        comment: NewComment,
    }

    impl NewCommentBuild {
        pub fn created_by(mut self, name: &str) -> Self {
            self.comment.created_by = name.into();
            self
        }
        pub fn contact(mut self, contact: &str) -> Self {
            self.comment.created_by_contact = Some(contact.into());
            self
        }
        pub fn paragraphs(mut self, paragraphs: Vec<impl Into<String>>) -> Self {
            self.comment.paragraphs = paragraphs.into_iter().map(Into::into).collect();
            self
        }
        pub fn finish(self) -> NewComment {
            self.comment
        }
    }

    impl Builder for NewComment {
        type Build = NewCommentBuild;
        fn build() -> NewCommentBuild {
            NewCommentBuild {
                comment: NewComment {
                    created_by: "anonymous".into(),
                    created_by_contact: None,
                    paragraphs: vec!["Hello world!".into()],
                },
            }
        }
    }
}
