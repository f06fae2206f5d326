//! The shared page layout.

use maud::{DOCTYPE, Markup, html};

/// Wrap `content` in the HTML boilerplate shared by every page.
pub fn base(title: &str, content: &Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en"
        {
            head
            {
                meta charset="UTF-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                title { (title) " - Moneta" }
                link href="/static/main.css" rel="stylesheet";

                script src="/static/app.js" defer {}
            }

            body
            {
                (content)
            }
        }
    }
}

/// A full page for reporting an error to the user, e.g. a 404.
pub fn error_view(title: &str, header: &str, description: &str) -> Markup {
    let content = html!(
        main class="error-page"
        {
            h1 { (header) }

            p { (description) }

            a href="/" { "Back to the tracker" }
        }
    );

    base(title, &content)
}
