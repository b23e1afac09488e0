use silly_core::entities::*;

pub fn comment_added_message(slug_path: &SlugPath, comment: &Comment) -> String {
    let Comment {
        id,
        created_by,
        created_by_contact,
        paragraphs,
        ..
    } = comment;
    let author = match created_by_contact {
        Some(contact) => format!("{created_by} ({contact})"),
        None => created_by.to_owned(),
    };
    format!(
        "New comment on {slug_path} from {author}:\n\n{body}\n\n[{id}]",
        body = paragraphs.join("\n\n"),
    )
}
