use anyhow::{Context, Result};
use inkdown::{Config, Renderer};
use std::fs;
use std::path::Path;

/// Returns the output file name for a rendered input path.
///
/// The input stem keeps its identity so `posts/hello.md` lands at
/// `<output>/hello.html`.
///
/// # Arguments
///
/// * `input`: Markdown input path
///
/// # Returns
///
/// File name of the generated HTML page
///
/// # Errors
///
/// Returns error if the input path has no stem or contains invalid UTF8.
fn output_file_name(input: &Path) -> Result<String> {
    input
        .file_stem()
        .and_then(|s| s.to_str())
        .map(|stem| format!("{stem}.html"))
        .with_context(|| format!("Cannot derive output name from path: {}", input.display()))
}

fn main() -> Result<()> {
    let config = Config::parse();
    config.validate().context("Invalid configuration")?;

    let markdown = fs::read_to_string(&config.input)
        .with_context(|| format!("Failed to read input file: {}", config.input.display()))?;

    let renderer = if config.highlight {
        Renderer::with_highlighting()
    } else {
        Renderer::new()
    };
    let fragment = renderer.render(&markdown);

    fs::create_dir_all(&config.output).context("Failed to create output directory")?;

    let assets_dir = config.output.join("assets");
    fs::create_dir_all(&assets_dir).context("Failed to create assets directory")?;
    inkdown::write_css_assets(&assets_dir)?;

    let title = config.page_title().context("Failed to determine title")?;
    let page = inkdown::pages::preview::generate(&title, &fragment);

    let out_path = config.output.join(output_file_name(&config.input)?);
    fs::write(&out_path, page.into_string())
        .with_context(|| format!("Failed to write page to {}", out_path.display()))?;

    println!("Generated: {}", out_path.display());

    if config.open {
        open::that(&out_path)
            .with_context(|| format!("Failed to open {}", out_path.display()))?;
    }

    Ok(())
}
