//! Plain text representation of a single comment.
//!
//! ```text
//! <author>,<contact>
//!
//! <paragraph>
//!
//! <paragraph>
//! ```
//!
//! The id is not part of the record. It is the stem of the file name.

use silly_core::{entities::*, util::validate::is_valid_author_name};
use thiserror::Error;

const CONTACT_SEPARATOR: char = ',';

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum EncodeError {
    #[error("The author is missing")]
    AuthorMissing,
    #[error("The author name contains a separator or line break")]
    InvalidAuthor,
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DecodeError {
    #[error("The header line is missing")]
    MissingHeader,
    #[error("The author is missing")]
    AuthorMissing,
}

// Line breaks within a single value would be read back as
// a continuation or, worse, as a paragraph boundary.
fn single_line(text: &str) -> String {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Encodes a comment as record text.
///
/// The record only holds single-line values without surrounding
/// whitespace: values are trimmed, line breaks are collapsed, and
/// empty contacts and paragraphs are left out. Comments that have
/// been auto-corrected decode back unchanged.
pub fn encode(comment: &NewComment) -> Result<String, EncodeError> {
    let NewComment {
        created_by,
        created_by_contact,
        paragraphs,
    } = comment;
    let created_by = created_by.trim();
    if created_by.is_empty() {
        return Err(EncodeError::AuthorMissing);
    }
    if !is_valid_author_name(created_by) {
        return Err(EncodeError::InvalidAuthor);
    }
    let mut record = String::from(created_by);
    record.push(CONTACT_SEPARATOR);
    if let Some(contact) = created_by_contact {
        record.push_str(&single_line(contact));
    }
    record.push('\n');
    let paragraphs: Vec<_> = paragraphs
        .iter()
        .map(|p| single_line(p))
        .filter(|p| !p.is_empty())
        .collect();
    if !paragraphs.is_empty() {
        record.push('\n');
        record.push_str(&paragraphs.join("\n\n"));
        record.push('\n');
    }
    Ok(record)
}

pub fn decode(record: &str, id: Id) -> Result<Comment, DecodeError> {
    let mut chunks = split_into_paragraphs(record).into_iter();
    let header = chunks.next().ok_or(DecodeError::MissingHeader)?;
    let (created_by, created_by_contact) = match header.split_once(CONTACT_SEPARATOR) {
        Some((name, contact)) => (name.trim(), Some(contact.trim())),
        None => (header.trim(), None),
    };
    if created_by.is_empty() {
        return Err(DecodeError::AuthorMissing);
    }
    let new_comment = NewComment {
        created_by: created_by.to_owned(),
        created_by_contact: created_by_contact
            .filter(|c| !c.is_empty())
            .map(ToOwned::to_owned),
        paragraphs: chunks.collect(),
    };
    Ok(Comment::new(id, new_comment))
}
