//! Markdown rendering for blog content.
//!
//! This module provides a hand-rolled, line-oriented Markdown-to-HTML
//! transform covering headings with anchor ids, fenced and indented code
//! blocks with numbered lines, tables, task lists, blockquotes, emphasis,
//! inline code, link/image syntax, bare-URL autolinking, and `:shortcode:`
//! emoji expansion. Escaping happens before any markup is generated, so the
//! output needs no further sanitization.

mod inline;
mod renderer;

pub(crate) use inline::escape_html;
pub use renderer::Renderer;
