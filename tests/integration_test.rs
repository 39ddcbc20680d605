//! Integration tests for Inkdown.
//!
//! Exercises the full rendering pipeline through the public API: block and
//! inline passes together, escaping across every block type, and the
//! emoji/highlighting extensions.

use inkdown::{EmojiCatalog, Renderer};

/// Tests the full end-to-end document scenario: heading, paragraph with
/// mixed inline markup, and a task list, in document order.
#[test]
fn test_end_to_end_document() {
    // Arrange
    let renderer = Renderer::new();
    let markdown = "# Title\n\nSome **bold** and `code` and :rocket: text.\n\n- [x] done item\n- [ ] pending item";

    // Act
    let html = renderer.render(markdown);

    // Assert: content of each block
    assert!(
        html.contains("<h1 id=\"title\"><a href=\"#title\">Title</a></h1>"),
        "Heading with anchor: {}",
        html
    );
    assert!(html.contains("<strong>bold</strong>"), "{}", html);
    assert!(html.contains("<code>code</code>"), "{}", html);
    assert!(html.contains('\u{1F680}'), "Rocket glyph resolved: {}", html);
    assert!(html.contains("<ul class=\"contains-task-list\">"), "{}", html);
    assert!(
        html.contains("<input type=\"checkbox\" disabled checked> done item"),
        "{}",
        html
    );
    assert!(
        html.contains("<input type=\"checkbox\" disabled> pending item"),
        "{}",
        html
    );

    // Assert: blocks appear in document order
    let h1 = html.find("<h1").expect("has heading");
    let p = html.find("<p>").expect("has paragraph");
    let ul = html.find("<ul").expect("has task list");
    assert!(h1 < p && p < ul, "Blocks out of order: {}", html);
}

/// Tests that script injection is neutralized in every block type.
#[test]
fn test_escaping_across_block_types() {
    // Arrange
    let renderer = Renderer::new();
    let markdown = concat!(
        "# Head <script>a</script>\n",
        "\n",
        "Para <script>b</script>\n",
        "\n",
        "| Cell <script>c</script> |\n",
        "|---|\n",
        "| <script>d</script> |\n",
        "\n",
        "- [ ] Item <script>e</script>\n",
        "\n",
        "> Quote <script>f</script>\n",
    );

    // Act
    let html = renderer.render(markdown);

    // Assert
    assert!(
        !html.contains("<script>"),
        "No executable tag may survive: {}",
        html
    );
    assert_eq!(
        html.matches("&lt;script&gt;").count(),
        6,
        "Every occurrence escaped: {}",
        html
    );
}

/// Tests adversarial input: unterminated structures must degrade, not fail.
#[test]
fn test_totality_on_malformed_input() {
    // Arrange
    let renderer = Renderer::new();
    let inputs = [
        "```rust\nnever closed",
        "<details>\nnever closed",
        "**unbalanced *emphasis",
        "[half](https://example.com",
        "| lonely pipe",
        ":colon: :at :end:",
        "``",
        "####### seven hashes",
    ];

    // Act & Assert: every call completes and yields non-empty output
    for input in inputs {
        let html = renderer.render(input);
        assert!(!html.is_empty(), "Output for {:?} should not be empty", input);
    }
}

/// Tests that a custom emoji catalog flows through the whole pipeline.
#[test]
fn test_custom_emoji_in_document() {
    // Arrange
    let catalog =
        EmojiCatalog::with_custom([("ship_it".to_string(), "/emoji/ship_it.png".to_string())]);
    let renderer = Renderer::with_emoji(catalog);

    // Act
    let html = renderer.render("Release day :ship_it: :rocket: :nope_not_real:");

    // Assert
    assert!(
        html.contains("<img class=\"emoji\" src=\"/emoji/ship_it.png\" alt=\":ship_it:\">"),
        "Custom image entry: {}",
        html
    );
    assert!(html.contains('\u{1F680}'), "Builtin still resolves: {}", html);
    assert!(
        html.contains(":nope_not_real:"),
        "Unknown shortcode stays literal: {}",
        html
    );
}

/// Tests a mixed document with highlighting enabled.
#[test]
fn test_highlighted_document() {
    // Arrange
    let renderer = Renderer::with_highlighting();
    let markdown = "## Code\n\n```rust\nfn add(a: i32, b: i32) -> i32 {\n    a + b\n}\n```";

    // Act
    let html = renderer.render(markdown);

    // Assert
    assert!(html.contains("<h2 id=\"code\">"), "{}", html);
    assert!(html.contains("class=\"language-rust\""), "{}", html);
    assert!(html.contains("hljs-"), "Classed highlight spans: {}", html);
    assert!(
        html.contains("<span class=\"line-number\">3</span>"),
        "Gutter numbering intact: {}",
        html
    );
}

/// Tests that rendering a large document completes without artificial limits.
#[test]
fn test_render_large_document() {
    // Arrange
    let renderer = Renderer::new();
    let section = "# Section\n\nSome **bold** body text with a [link](/posts/1).\n\n```rust\nfn example() {}\n```\n\n";
    let large_markdown = section.repeat(5_000);

    // Act
    let html = renderer.render(&large_markdown);

    // Assert
    assert!(html.contains("<h1"), "Should render headings");
    assert!(html.contains("language-rust"), "Should render code blocks");
    assert!(
        html.len() > large_markdown.len(),
        "HTML should be generated"
    );
}

/// Tests that the same input renders identically across repeated calls;
/// no state may leak between renders.
#[test]
fn test_render_is_stateless() {
    // Arrange
    let renderer = Renderer::new();
    let markdown = "# T\n\n`code` **bold** :rocket: [l](/p)";

    // Act
    let first = renderer.render(markdown);
    let second = renderer.render(markdown);

    // Assert
    assert_eq!(first, second, "Renders must be deterministic");
    assert!(
        !first.contains("__INLINE_"),
        "No placeholder may leak into output: {}",
        first
    );
}
