//! Standalone preview page wrapping a rendered fragment.

use maud::{DOCTYPE, Markup, PreEscaped, html};

/// Generates a complete HTML document around a rendered Markdown fragment.
///
/// Provides DOCTYPE, charset, viewport, and stylesheet wiring so the
/// fragment can be inspected in a browser exactly as the blog would show
/// it. The fragment is injected pre-escaped because the renderer is its own
/// sanitization boundary.
///
/// # Arguments
///
/// * `title`: Page title text
/// * `fragment`: Sanitized HTML fragment from the renderer
///
/// # Returns
///
/// Complete HTML document markup
pub fn generate(title: &str, fragment: &str) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                title { (title) " - Inkdown" }
                link rel="stylesheet" href="assets/preview.css";
            }
            body {
                div class="container" {
                    main class="markdown-body" {
                        (PreEscaped(fragment))
                    }
                    footer {
                        p {
                            "Generated by "
                            a href="https://github.com/inkdown/inkdown" target="_blank" { "Inkdown" }
                        }
                    }
                }
            }
        }
    }
}
