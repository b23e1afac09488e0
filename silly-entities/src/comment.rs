use crate::{id::*, time::*};

/// A comment that has not been stored yet.
#[rustfmt::skip]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewComment {
    pub created_by         : String,
    pub created_by_contact : Option<String>,
    pub paragraphs         : Vec<String>,
}

/// A stored comment.
#[rustfmt::skip]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Comment {
    pub id                 : Id,
    // Derived from the id
    pub created_on         : TimestampMs,
    pub created_by         : String,
    pub created_by_contact : Option<String>,
    pub paragraphs         : Vec<String>,
}

impl Comment {
    pub fn new(id: Id, new_comment: NewComment) -> Self {
        let NewComment {
            created_by,
            created_by_contact,
            paragraphs,
        } = new_comment;
        Self {
            id,
            created_on: id.created_on(),
            created_by,
            created_by_contact,
            paragraphs,
        }
    }
}

impl From<Comment> for NewComment {
    fn from(from: Comment) -> Self {
        let Comment {
            created_by,
            created_by_contact,
            paragraphs,
            ..
        } = from;
        Self {
            created_by,
            created_by_contact,
            paragraphs,
        }
    }
}

/// Splits text into paragraphs.
///
/// Paragraphs are separated by one or more blank lines. The lines
/// of a single paragraph are trimmed and joined with a single space.
pub fn split_into_paragraphs(text: &str) -> Vec<String> {
    let mut paragraphs = vec![];
    let mut lines = vec![];
    for line in text.lines().map(str::trim) {
        if line.is_empty() {
            if !lines.is_empty() {
                paragraphs.push(lines.join(" "));
                lines.clear();
            }
        } else {
            lines.push(line);
        }
    }
    if !lines.is_empty() {
        paragraphs.push(lines.join(" "));
    }
    paragraphs
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn created_on_is_derived_from_id() {
        let id: Id = "01ARYZ6S410000000000000000".parse().unwrap();
        let new_comment = NewComment {
            created_by: "Elliot".into(),
            created_by_contact: None,
            paragraphs: vec!["Hello friend.".into()],
        };
        let comment = Comment::new(id, new_comment.clone());
        assert_eq!(comment.created_on.as_millis(), 1_469_918_176_385);
        assert_eq!(NewComment::from(comment), new_comment);
    }

    #[test]
    fn split_on_blank_lines() {
        let text = "first\n\nsecond\n\n\n\nthird\n";
        assert_eq!(split_into_paragraphs(text), vec!["first", "second", "third"]);
    }

    #[test]
    fn join_wrapped_lines() {
        let text = "a paragraph\nthat wraps\n  around\n\nnext";
        assert_eq!(
            split_into_paragraphs(text),
            vec!["a paragraph that wraps around", "next"]
        );
    }

    #[test]
    fn accept_crlf_and_whitespace_only_lines() {
        let text = "one\r\n \t \r\ntwo\r\nthree\r\n";
        assert_eq!(split_into_paragraphs(text), vec!["one", "two three"]);
    }

    #[test]
    fn no_paragraphs_in_blank_text() {
        assert!(split_into_paragraphs("").is_empty());
        assert!(split_into_paragraphs("\n\n  \n").is_empty());
    }
}
