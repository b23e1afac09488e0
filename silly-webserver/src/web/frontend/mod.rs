use maud::Markup;
use rocket::{
    self, form::Form, get, post, response::content::RawCss, routes, FromForm, Route, State,
};
use silly_application::{
    error::{AppError, BError},
    prelude as flows,
};
use silly_core::usecases;

use crate::web::{error::Error, guards::Notify, store::Comments, Cfg};

pub(crate) mod view;


const MAIN_CSS: &str = include_str!("main.css");

const FALLBACK_DEMO_SLUG: &str = "example";

type Result<T> = std::result::Result<T, Error>;

#[derive(FromForm)]
pub struct CommentsQuery<'r> {
    #[field(name = "for")]
    target: Option<&'r str>,
}

#[derive(FromForm)]
pub struct CommentSubmission<'r> {
    #[field(name = "for")]
    target: Option<&'r str>,
    comment_contact: Option<&'r str>,
    comment: Option<&'r str>,
}

#[get("/")]
pub fn get_index(comments: Comments, cfg: &State<Cfg>) -> Markup {
    // Demonstrate the widget with the alphabetically first known slug
    let demo_slug = comments
        .known_slugs()
        .iter()
        .min()
        .map(String::as_str)
        .unwrap_or(FALLBACK_DEMO_SLUG);
    view::index(&cfg.url_prefix, demo_slug)
}

#[get("/static/main.css")]
pub fn get_main_css() -> RawCss<&'static str> {
    RawCss(MAIN_CSS)
}

#[get("/?<query..>")]
pub fn get_comments(comments: Comments, query: CommentsQuery<'_>) -> Result<Markup> {
    // An empty reference is treated like a missing one
    let Some(target) = query.target.filter(|t| !t.is_empty()) else {
        return Ok(view::comments(&[], None));
    };
    let path = comments.resolve(target)?;
    let list = flows::load_comments(comments.store(), &path)?;
    Ok(view::comments(&list, None))
}

#[post("/?<query..>", data = "<submission>")]
pub fn post_comment(
    comments: Comments,
    notify: &State<Notify>,
    query: CommentsQuery<'_>,
    submission: Form<CommentSubmission<'_>>,
) -> Result<Markup> {
    let CommentSubmission {
        target,
        comment_contact,
        comment,
    } = submission.into_inner();
    let target = target.or(query.target).unwrap_or_default();
    let path = comments.resolve(target)?;
    let new_comment = usecases::parse_submission(
        comment_contact.unwrap_or_default(),
        comment.unwrap_or_default(),
    );
    let notify = &**notify.inner();
    let notice = match flows::create_comment(comments.store(), notify, &path, new_comment) {
        Ok(_) => None,
        Err(AppError::Business(BError::Parameter(err))) => Some(rejection_notice(&err)),
        Err(err) => return Err(err.into()),
    };
    let list = flows::load_comments(comments.store(), &path)?;
    Ok(view::comments(&list, notice))
}

fn rejection_notice(err: &usecases::Error) -> &'static str {
    match err {
        usecases::Error::AuthorMissing => "Please enter your name.",
        usecases::Error::InvalidAuthor => "Names must not contain commas or line breaks.",
        usecases::Error::EmptyComment => "Please enter a comment.",
        _ => "Your comment could not be saved.",
    }
}

pub fn routes() -> Vec<Route> {
    routes![get_index, get_main_css]
}

pub fn comment_routes() -> Vec<Route> {
    routes![get_comments, post_comment]
}
