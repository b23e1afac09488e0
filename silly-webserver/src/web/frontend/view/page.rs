use maud::{html, Markup, DOCTYPE};

const HTMX_JS_URL: &str = "https://unpkg.com/htmx.org@1.8.0";
const MAIN_CSS_URL: &str = "/static/main.css";

const FONTS: &[&str] = &[
    "https://fonts.googleapis.com/css2?family=Source+Serif+Pro&display=swap",
    "https://fonts.googleapis.com/css2?family=Inter:wght@400&display=swap",
    "https://fonts.googleapis.com/css2?family=Rubik:wght@400;900&display=swap",
];

pub fn page(title: &str, content: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1";
                title { (title) }
                link rel="stylesheet" href=(MAIN_CSS_URL);
                link rel="preconnect" href="https://fonts.googleapis.com";
                link rel="preconnect" href="https://fonts.gstatic.com" crossorigin;
                @for font in FONTS {
                    link rel="stylesheet" href=(font);
                }
                script src=(HTMX_JS_URL) {}
            }
            body { (content) }
        }
    }
}
