//! Syntax highlighting for fenced code blocks.

use syntect::html::{ClassStyle, ClassedHTMLGenerator};
use syntect::parsing::SyntaxSet;

use crate::markdown::escape_html;

/// Highlights code lines with syntect using CSS classes.
///
/// Produces HTML with `hljs-` prefixed class names instead of inline styles
/// so themes stay in the stylesheet. Lines are highlighted independently,
/// which keeps the renderer's numbered-row structure intact; constructs that
/// span lines (block comments, raw strings) degrade to per-line scoping.
pub struct Highlighter {
    syntax_set: SyntaxSet,
}

impl Highlighter {
    /// Creates a highlighter with syntect's default syntax definitions.
    pub fn new() -> Self {
        Self {
            syntax_set: SyntaxSet::load_defaults_newlines(),
        }
    }

    /// Highlights one line of code for the given language token.
    ///
    /// Unknown languages and highlighting failures fall back to plain
    /// escaped text, so this function is total like the renderer itself.
    ///
    /// # Arguments
    ///
    /// * `line`: Single physical line without trailing newline
    /// * `language`: Language identifier from the fence tag (rust, py, ...)
    ///
    /// # Returns
    ///
    /// HTML string with `<span class="hljs-*">` tags, or escaped plain text
    pub fn highlight_line(&self, line: &str, language: &str) -> String {
        let syntax = self
            .syntax_set
            .find_syntax_by_token(language)
            .or_else(|| self.syntax_set.find_syntax_by_extension(language));

        let Some(syntax) = syntax else {
            return escape_html(line);
        };

        let mut generator = ClassedHTMLGenerator::new_with_class_style(
            syntax,
            &self.syntax_set,
            ClassStyle::SpacedPrefixed { prefix: "hljs-" },
        );

        let with_newline = format!("{line}\n");
        if generator
            .parse_html_for_line_which_includes_newline(&with_newline)
            .is_err()
        {
            return escape_html(line);
        }

        generator.finalize().trim_end_matches('\n').to_string()
    }
}

impl Default for Highlighter {
    fn default() -> Self {
        Self::new()
    }
}
