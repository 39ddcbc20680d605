//! Inline span rendering for a single line of text.

use regex::{Captures, Regex};
use std::sync::LazyLock;

use crate::emoji::{EmojiCatalog, EmojiGlyph};

/// Markdown image syntax with an http(s) or root-relative URL.
static IMAGE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"!\[([^\]]*)\]\(((?:https?://[^\s)]+)|(?:/[^\s)]*))\)").unwrap()
});

/// Markdown link syntax with the same URL shape as images.
static LINK_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\[([^\]]+)\]\(((?:https?://[^\s)]+)|(?:/[^\s)]*))\)").unwrap()
});

/// Inline code span delimited by single backticks.
static CODE_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"`([^`\n]+)`").unwrap());

static BOLD_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\*\*(.+?)\*\*").unwrap());

static ITALIC_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\*([^*\n]+)\*").unwrap());

/// Bare URL preceded by start-of-string, whitespace, an opening paren, or an
/// escaped `>`. Stashed links are already placeholders by the time this runs,
/// so their URLs cannot be matched a second time.
static AUTOLINK_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(^|\s|\(|&gt;)(https?://[^\s<]+)").unwrap());

/// Emoji shortcode token between colons.
static SHORTCODE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r":([a-z0-9_+-]+):").unwrap());

/// Escapes HTML special characters.
///
/// Every piece of user text passes through here before any markup is
/// generated, making the renderer its own sanitization boundary.
pub(crate) fn escape_html(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

/// Renders inline markup within one already-split line of text.
///
/// The pipeline escapes first, then stashes images/links and code spans
/// behind placeholder tokens so the emphasis and autolink passes cannot
/// rematch their contents, expands emoji shortcodes, and finally restores
/// the stashed HTML by placeholder index.
///
/// # Arguments
///
/// * `text`: Raw line content (heading text, table cell, list item, ...)
/// * `emoji`: Catalog used for `:shortcode:` expansion
///
/// # Returns
///
/// Sanitized HTML for the line
pub(crate) fn render_inline(text: &str, emoji: &EmojiCatalog) -> String {
    let escaped = escape_html(text);

    let mut links: Vec<String> = Vec::new();
    let mut codes: Vec<String> = Vec::new();

    // Images are stashed before links so `![alt](url)` is never mistaken
    // for a link with a literal `!` in front.
    let stashed = IMAGE_RE.replace_all(&escaped, |caps: &Captures| {
        let token = format!("__INLINE_LINK_{}__", links.len());
        links.push(format!(
            "<img src=\"{}\" alt=\"{}\" loading=\"lazy\">",
            &caps[2], &caps[1]
        ));
        token
    });

    let stashed = LINK_RE.replace_all(&stashed, |caps: &Captures| {
        let token = format!("__INLINE_LINK_{}__", links.len());
        links.push(format!("<a href=\"{}\">{}</a>", &caps[2], &caps[1]));
        token
    });

    // Code span contents were escaped above; stashing them keeps the
    // emphasis passes from matching asterisks inside code.
    let stashed = CODE_RE.replace_all(&stashed, |caps: &Captures| {
        let token = format!("__INLINE_CODE_{}__", codes.len());
        codes.push(format!("<code>{}</code>", &caps[1]));
        token
    });

    let emphasized = BOLD_RE.replace_all(&stashed, "<strong>$1</strong>");
    let emphasized = ITALIC_RE.replace_all(&emphasized, "<em>$1</em>");

    let linked = AUTOLINK_RE.replace_all(&emphasized, |caps: &Captures| {
        format!(
            "{}<a href=\"{url}\" target=\"_blank\" rel=\"noreferrer\" data-auto-link=\"1\">{url}</a>",
            &caps[1],
            url = &caps[2]
        )
    });

    // Shortcodes expand while code/link contents are still placeholders,
    // so a `:rocket:` inside a code span stays literal.
    let mut result = expand_shortcodes(&linked, emoji);

    // Restore stashes in reverse order: code spans first, then links.
    for (i, html) in codes.iter().enumerate().rev() {
        result = result.replace(&format!("__INLINE_CODE_{i}__"), html);
    }
    for (i, html) in links.iter().enumerate().rev() {
        result = result.replace(&format!("__INLINE_LINK_{i}__"), html);
    }

    result
}

/// Expands `:shortcode:` tokens against the emoji catalog.
///
/// Unknown shortcodes are left as literal text, colons included.
fn expand_shortcodes(text: &str, emoji: &EmojiCatalog) -> String {
    SHORTCODE_RE
        .replace_all(text, |caps: &Captures| {
            let name = &caps[1];
            match emoji.resolve(name) {
                Some(EmojiGlyph::Unicode(glyph)) => glyph.to_string(),
                Some(EmojiGlyph::Image(url)) => format!(
                    "<img class=\"emoji\" src=\"{}\" alt=\":{}:\">",
                    escape_html(url),
                    name
                ),
                None => caps[0].to_string(),
            }
        })
        .into_owned()
}
