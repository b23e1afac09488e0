use crate::entities::*;
use thiserror::Error;

pub trait Validate {
    type Error;
    fn validate(&self) -> Result<(), Self::Error>;
}

pub trait AutoCorrect {
    fn auto_correct(self) -> Self;
}

/// The author is stored in front of the first comma of a single header line.
pub fn is_valid_author_name(s: &str) -> bool {
    !s.contains([',', '\n', '\r'])
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CommentInvalidation {
    #[error("Missing author")]
    AuthorMissing,
    #[error("Invalid author name")]
    AuthorName,
    #[error("Empty comment")]
    Empty,
}

impl Validate for NewComment {
    type Error = CommentInvalidation;
    fn validate(&self) -> Result<(), Self::Error> {
        if self.created_by.trim().is_empty() {
            return Err(Self::Error::AuthorMissing);
        }
        if !is_valid_author_name(&self.created_by) {
            return Err(Self::Error::AuthorName);
        }
        if self.paragraphs.iter().all(|p| p.trim().is_empty()) {
            return Err(Self::Error::Empty);
        }
        Ok(())
    }
}

impl AutoCorrect for NewComment {
    fn auto_correct(mut self) -> Self {
        self.created_by = self.created_by.trim().to_owned();
        self.created_by_contact = self
            .created_by_contact
            .map(|c| c.trim().to_owned())
            .filter(|c| !c.is_empty());
        // Normalize line breaks within paragraphs
        self.paragraphs = self
            .paragraphs
            .iter()
            .flat_map(|p| split_into_paragraphs(p))
            .collect();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use silly_entities::builders::Builder;

    #[test]
    fn author_name_test() {
        assert!(is_valid_author_name("Leon"));
        assert!(is_valid_author_name("Leon Kowalski"));
        assert!(!is_valid_author_name("Kowalski, Leon"));
        assert!(!is_valid_author_name("Leon\nKowalski"));
    }

    #[test]
    fn missing_author() {
        let c = NewComment::build().created_by("").finish();
        assert_eq!(c.validate(), Err(CommentInvalidation::AuthorMissing));
        let c = NewComment::build().created_by("  ").contact("leon@gmail.com").finish();
        assert_eq!(c.validate(), Err(CommentInvalidation::AuthorMissing));
    }

    #[test]
    fn empty_comment() {
        let c = NewComment::build().paragraphs(Vec::<String>::new()).finish();
        assert_eq!(c.validate(), Err(CommentInvalidation::Empty));
        let c = NewComment::build().paragraphs(vec!["", " "]).finish();
        assert_eq!(c.validate(), Err(CommentInvalidation::Empty));
    }

    #[test]
    fn valid_comment() {
        let c = NewComment::build()
            .created_by("Leon")
            .contact("leon@gmail.com")
            .paragraphs(vec!["Do you dream, Elliot?"])
            .finish();
        assert!(c.validate().is_ok());
    }

    #[test]
    fn autocorrect_new_comment() {
        let c = NewComment::build()
            .created_by(" Leon ")
            .contact("  ")
            .paragraphs(vec!["first\nline", "", "second\n\nthird "])
            .finish()
            .auto_correct();
        assert_eq!(c.created_by, "Leon");
        assert_eq!(c.created_by_contact, None);
        assert_eq!(c.paragraphs, vec!["first line", "second", "third"]);
    }
}
