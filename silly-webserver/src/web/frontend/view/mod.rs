use maud::{html, Markup};
use silly_core::entities::*;
use time::OffsetDateTime;

mod page;

use page::*;

pub fn index(url_prefix: &str, slug: &str) -> Markup {
    let vals = hx_vals(slug);
    page(
        "Silly comments demo",
        html! {
            div class="wrapper" {
                div style="grid-row: 1" {
                    p { "Just wanted to make a comment system..." }
                }
                div style="grid-row: 2"
                    id="comments"
                    hx-get=(url_prefix)
                    hx-vals=(vals)
                    hx-swap="innerHTML"
                    hx-trigger="load" {}
                div style="grid-row: 3; padding-bottom: 100px;" {
                    form hx-post=(url_prefix) hx-vals=(vals) hx-target="#comments" {
                        input type="text"
                            id="comment_contact"
                            name="comment_contact"
                            placeholder="Name, e-mail"
                            required;
                        br;
                        textarea id="comment" name="comment" placeholder="Comment..." required {}
                        br;
                        input id="submit" class="custom-file-upload" type="submit" value="Submit";
                    }
                }
            }
        },
    )
}

fn hx_vals(slug: &str) -> String {
    // Slugs are plain path segments, but keep the JSON well-formed anyway
    let escaped = slug.replace('\\', "\\\\").replace('"', "\\\"");
    format!(r#"{{"for": "{escaped}"}}"#)
}

pub fn comments(comments: &[Comment], notice: Option<&str>) -> Markup {
    html! {
        @if let Some(notice) = notice {
            div class="comment_notice" { (notice) }
        }
        @for c in comments {
            (comment(c))
        }
    }
}

fn comment(c: &Comment) -> Markup {
    html! {
        div class="comment" {
            div style="display: flex" {
                div class="comment_date" {
                    @if let Ok(dt) = OffsetDateTime::try_from(c.created_on) {
                        span { (dt.date()) }
                        span { (format!("{:02}", dt.hour())) }
                        span { (format!("{:02}", dt.minute())) }
                        span class="comment-date-seconds" { (format!("{:02}", dt.second())) }
                    }
                }
                div class="comment_author" { (c.created_by) }
            }
            @for p in &c.paragraphs {
                p { (p) }
            }
        }
    }
}

pub fn failure() -> Markup {
    html! {
        div class="comment_failure" { "Comments are not available." }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn comment_at(millis: i64, author: &str, paragraphs: &[&str]) -> Comment {
        Comment {
            id: Id::new(),
            created_on: TimestampMs::from_millis(millis),
            created_by: author.into(),
            created_by_contact: None,
            paragraphs: paragraphs.iter().map(|p| (*p).to_owned()).collect(),
        }
    }

    #[test]
    fn render_comment_date_in_utc() {
        let c = comment_at(1_469_918_176_385, "John", &["Hello"]);
        let html = comments(&[c], None).into_string();
        assert!(html.contains("<span>2016-07-30</span>"));
        assert!(html.contains("<span>22</span><span>36</span>"));
        assert!(html.contains(r#"<span class="comment-date-seconds">16</span>"#));
        assert!(html.contains(r#"<div class="comment_author">John</div>"#));
        assert!(html.contains("<p>Hello</p>"));
    }

    #[test]
    fn escape_user_content() {
        let c = comment_at(0, "<b>Mallory</b>", &["<script>alert(1)</script>"]);
        let html = comments(&[c], None).into_string();
        assert!(!html.contains("<script>"));
        assert!(html.contains("&lt;b&gt;Mallory&lt;/b&gt;"));
    }

    #[test]
    fn render_empty_fragment() {
        assert_eq!(comments(&[], None).into_string(), "");
    }

    #[test]
    fn render_notice_before_comments() {
        let c = comment_at(0, "John", &["Hello"]);
        let html = comments(&[c], Some("Please enter your name.")).into_string();
        let notice = html.find("comment_notice").unwrap();
        let comment = html.find(r#"class="comment""#).unwrap();
        assert!(notice < comment);
    }

    #[test]
    fn index_points_to_prefix() {
        let html = index("/silly", "example").into_string();
        assert!(html.contains(r#"hx-get="/silly""#));
        assert!(html.contains(r#"hx-post="/silly""#));
        assert!(html.contains("&quot;for&quot;: &quot;example&quot;"));
    }
}
