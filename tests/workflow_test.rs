//! Workflow tests for the preview generation pipeline.
//!
//! Drives the same library calls the binary makes: read Markdown from disk,
//! render, write CSS assets, and wrap the fragment in a preview page.

use anyhow::Result;
use inkdown::{Renderer, pages, write_css_assets};
use std::fs;

#[test]
fn test_preview_generation_workflow() -> Result<()> {
    // Arrange
    let temp_dir = tempfile::tempdir()?;
    let output = temp_dir.path();

    let input_path = output.join("post.md");
    fs::write(
        &input_path,
        "# First Post\n\nHello **world** :wave:\n\n- [x] publish\n",
    )?;

    // Act: the binary's pipeline, step by step
    let markdown = fs::read_to_string(&input_path)?;
    let fragment = Renderer::new().render(&markdown);

    let assets_dir = output.join("assets");
    fs::create_dir_all(&assets_dir)?;
    write_css_assets(&assets_dir)?;

    let page = pages::preview::generate("First Post", &fragment);
    let page_path = output.join("post.html");
    fs::write(&page_path, page.into_string())?;

    // Assert
    assert!(page_path.exists(), "Preview page should be created");
    assert!(
        assets_dir.join("preview.css").exists(),
        "Stylesheet should be written"
    );

    let content = fs::read_to_string(&page_path)?;
    assert!(
        content.contains("<title>First Post - Inkdown</title>"),
        "Page title present"
    );
    assert!(
        content.contains("<h1 id=\"first-post\">"),
        "Rendered heading present: {}",
        content
    );
    assert!(content.contains("<strong>world</strong>"), "{}", content);
    assert!(content.contains('\u{1F44B}'), "Wave glyph present");
    assert!(
        content.contains("contains-task-list"),
        "Task list present: {}",
        content
    );

    Ok(())
}

#[test]
fn test_workflow_with_hostile_input_file() -> Result<()> {
    // Arrange: a post that tries to break out of its container
    let temp_dir = tempfile::tempdir()?;
    let output = temp_dir.path();

    let input_path = output.join("hostile.md");
    fs::write(
        &input_path,
        "# <script>steal()</script>\n\n</main></body><script>more()</script>\n",
    )?;

    // Act
    let markdown = fs::read_to_string(&input_path)?;
    let fragment = Renderer::new().render(&markdown);
    let page = pages::preview::generate("hostile", &fragment).into_string();

    // Assert: one script element at most would be fatal; there must be none
    assert!(
        !page.contains("<script>"),
        "No script tag may reach the page: {}",
        page
    );
    assert!(
        !fragment.contains("</main>"),
        "Container close must be escaped: {}",
        fragment
    );

    Ok(())
}

#[test]
fn test_workflow_empty_file_yields_placeholder() -> Result<()> {
    // Arrange
    let temp_dir = tempfile::tempdir()?;
    let input_path = temp_dir.path().join("empty.md");
    fs::write(&input_path, "")?;

    // Act
    let markdown = fs::read_to_string(&input_path)?;
    let fragment = Renderer::new().render(&markdown);

    // Assert
    assert_eq!(fragment, "<p class=\"empty-state\">No content</p>");

    Ok(())
}
