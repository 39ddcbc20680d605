//! Block-level Markdown rendering.

use regex::Regex;
use std::sync::LazyLock;

use super::inline::{escape_html, render_inline};
use crate::emoji::EmojiCatalog;
use crate::highlight::Highlighter;

/// Opening fence line with an optional language tag.
static FENCE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^```(\w[\w+-]*)?\s*$").unwrap());

/// ATX heading, one to six hash marks.
static HEADING_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^(#{1,6})\s+(.+)$").unwrap());

/// Table header/body separator row.
static TABLE_SEP_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^\|?[-:\s|]+\|?$").unwrap());

/// Task list item with checked state capture.
static TASK_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\s*[-*]\s+\[( |x|X)\]\s+(.*)$").unwrap());

/// Single blockquote line.
static QUOTE_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^>\s?(.*)$").unwrap());

/// Run of characters that cannot appear in a heading slug.
static SLUG_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[^\w]+").unwrap());

/// Renders blog-flavored Markdown to a sanitized HTML fragment.
///
/// The renderer is a pure transform: it holds only the emoji catalog and an
/// optional syntax highlighter, and every call allocates its own working
/// buffers, so independent renders can run concurrently without coordination.
/// All user text is escaped before any markup is generated; the output is
/// safe for direct injection without a downstream sanitization pass.
pub struct Renderer {
    emoji: EmojiCatalog,
    highlighter: Option<Highlighter>,
}

impl Renderer {
    /// Creates a renderer with the builtin emoji set and plain code blocks.
    pub fn new() -> Self {
        Self::with_options(EmojiCatalog::builtin(), false)
    }

    /// Creates a renderer using the given emoji catalog.
    ///
    /// # Arguments
    ///
    /// * `emoji`: Catalog resolving `:shortcode:` tokens, including any
    ///   custom image entries layered over the builtins
    pub fn with_emoji(emoji: EmojiCatalog) -> Self {
        Self::with_options(emoji, false)
    }

    /// Creates a renderer that syntax-highlights fenced code blocks.
    ///
    /// Loads syntect's default syntax definitions once at construction.
    /// Unknown languages fall back to plain escaped text.
    pub fn with_highlighting() -> Self {
        Self::with_options(EmojiCatalog::builtin(), true)
    }

    /// Creates a renderer with explicit emoji catalog and highlighting choice.
    pub fn with_options(emoji: EmojiCatalog, highlight: bool) -> Self {
        Self {
            emoji,
            highlighter: highlight.then(Highlighter::new),
        }
    }

    /// Renders a Markdown document to an HTML fragment.
    ///
    /// Total over the input domain: malformed input degrades to literal
    /// escaped text and unterminated blocks close implicitly at end of
    /// input. This function never panics and never returns an error.
    ///
    /// # Arguments
    ///
    /// * `markdown`: Raw document text; `\r\n` is normalized internally
    ///
    /// # Returns
    ///
    /// Sanitized HTML fragment
    pub fn render(&self, markdown: &str) -> String {
        if markdown.trim().is_empty() {
            return "<p class=\"empty-state\">No content</p>".to_string();
        }

        let normalized = markdown.replace("\r\n", "\n");
        let lines: Vec<&str> = normalized.split('\n').collect();
        let mut out: Vec<String> = Vec::new();
        let mut i = 0;

        while i < lines.len() {
            let line = lines[i];

            // Fenced code block
            if let Some(caps) = FENCE_RE.captures(line) {
                let lang = caps
                    .get(1)
                    .map(|m| m.as_str().to_lowercase())
                    .unwrap_or_else(|| "text".to_string());
                i += 1;
                let mut body = Vec::new();
                while i < lines.len() && !lines[i].starts_with("```") {
                    body.push(lines[i]);
                    i += 1;
                }
                // Skip the closing fence when present; EOF closes implicitly
                if i < lines.len() {
                    i += 1;
                }
                out.push(self.code_block(&body, &lang));
                continue;
            }

            // Indented code block
            if leading_spaces(line) >= 4 && !line.trim().is_empty() {
                let mut body = Vec::new();
                while i < lines.len()
                    && (lines[i].trim().is_empty() || leading_spaces(lines[i]) >= 4)
                {
                    body.push(lines[i]);
                    i += 1;
                }
                while body.last().is_some_and(|l| l.trim().is_empty()) {
                    body.pop();
                }
                let stripped: Vec<&str> = body
                    .iter()
                    .map(|l| l.strip_prefix("    ").unwrap_or(l))
                    .collect();
                out.push(self.code_block(&stripped, "text"));
                continue;
            }

            // Raw <details> passthrough, author-supplied collapsible HTML
            if line.trim().eq_ignore_ascii_case("<details>") {
                out.push(line.to_string());
                i += 1;
                while i < lines.len() {
                    out.push(lines[i].to_string());
                    if lines[i].trim().eq_ignore_ascii_case("</details>") {
                        i += 1;
                        break;
                    }
                    i += 1;
                }
                continue;
            }

            // ATX heading with self-anchor
            if let Some(caps) = HEADING_RE.captures(line) {
                let level = caps[1].len();
                let text = &caps[2];
                let slug = slugify(text);
                out.push(format!(
                    "<h{level} id=\"{slug}\"><a href=\"#{slug}\">{}</a></h{level}>",
                    self.inline(text)
                ));
                i += 1;
                continue;
            }

            // Table: header row plus separator look-ahead
            if line.starts_with('|')
                && i + 1 < lines.len()
                && TABLE_SEP_RE.is_match(lines[i + 1])
                && lines[i + 1].contains('-')
            {
                let headers = split_row(line);
                i += 2;
                let mut rows = Vec::new();
                while i < lines.len() && lines[i].starts_with('|') {
                    rows.push(split_row(lines[i]));
                    i += 1;
                }
                out.push(self.table(&headers, &rows));
                continue;
            }

            // Task list run
            if TASK_RE.is_match(line) {
                let mut items = String::new();
                while i < lines.len() {
                    let Some(caps) = TASK_RE.captures(lines[i]) else {
                        break;
                    };
                    let checked = if caps[1].eq_ignore_ascii_case("x") {
                        " checked"
                    } else {
                        ""
                    };
                    items.push_str(&format!(
                        "<li class=\"task-list-item\"><input type=\"checkbox\" disabled{checked}> {}</li>",
                        self.inline(&caps[2])
                    ));
                    i += 1;
                }
                out.push(format!("<ul class=\"contains-task-list\">{items}</ul>"));
                continue;
            }

            // Blockquote, one element per line
            if let Some(caps) = QUOTE_RE.captures(line) {
                out.push(format!("<blockquote>{}</blockquote>", self.inline(&caps[1])));
                i += 1;
                continue;
            }

            // Blank line
            if line.trim().is_empty() {
                i += 1;
                continue;
            }

            // Fallback paragraph
            out.push(format!("<p>{}</p>", self.inline(line)));
            i += 1;
        }

        out.join("\n")
    }

    fn inline(&self, text: &str) -> String {
        render_inline(text, &self.emoji)
    }

    /// Wraps code lines in numbered rows inside a `<pre><code>` shell.
    ///
    /// Each physical line becomes a `line-number`/`line-text` span pair so
    /// the stylesheet can render a gutter. The language tag becomes a
    /// `language-<lang>` class on the code element.
    fn code_block(&self, body: &[&str], lang: &str) -> String {
        let mut rows = String::new();
        for (idx, line) in body.iter().enumerate() {
            let text = match &self.highlighter {
                Some(h) => h.highlight_line(line, lang),
                None => escape_html(line),
            };
            rows.push_str(&format!(
                "<span class=\"code-line\"><span class=\"line-number\">{}</span><span class=\"line-text\">{text}</span></span>\n",
                idx + 1
            ));
        }
        format!("<pre><code class=\"language-{lang}\">{rows}</code></pre>")
    }

    /// Builds a table with zebra-striped body rows.
    fn table(&self, headers: &[String], rows: &[Vec<String>]) -> String {
        let mut html = String::from("<table><thead><tr>");
        for cell in headers {
            html.push_str(&format!("<th>{}</th>", self.inline(cell)));
        }
        html.push_str("</tr></thead><tbody>");
        for (idx, row) in rows.iter().enumerate() {
            let parity = if idx % 2 == 0 { "even" } else { "odd" };
            html.push_str(&format!("<tr class=\"{parity}\">"));
            for cell in row {
                html.push_str(&format!("<td>{}</td>", self.inline(cell)));
            }
            html.push_str("</tr>");
        }
        html.push_str("</tbody></table>");
        html
    }
}

impl Default for Renderer {
    fn default() -> Self {
        Self::new()
    }
}

/// Derives a deterministic anchor id from heading text.
///
/// Lowercases the text, collapses runs of non-word characters to `-`, and
/// trims leading/trailing dashes. Identical heading text always yields the
/// identical id; duplicates are not disambiguated.
fn slugify(text: &str) -> String {
    let lowered = text.to_lowercase();
    SLUG_RE
        .replace_all(&lowered, "-")
        .trim_matches('-')
        .to_string()
}

fn leading_spaces(line: &str) -> usize {
    line.len() - line.trim_start_matches(' ').len()
}

/// Splits a `|`-delimited table row into trimmed cells.
///
/// Empty leading/trailing cells produced by edge pipes are discarded.
fn split_row(line: &str) -> Vec<String> {
    let mut cells: Vec<String> = line.split('|').map(|c| c.trim().to_string()).collect();
    if cells.first().is_some_and(|c| c.is_empty()) {
        cells.remove(0);
    }
    if cells.last().is_some_and(|c| c.is_empty()) {
        cells.pop();
    }
    cells
}
