//! CSS asset bundling

use anyhow::{Context, Result};
use std::{fs, path::Path};

const PREVIEW: &str = include_str!("../assets/preview.css");

/// Writes bundled CSS assets to the output assets directory
pub fn write_css_assets(assets_dir: &Path) -> Result<()> {
    fs::write(assets_dir.join("preview.css"), PREVIEW)
        .context("Failed to write CSS asset: preview.css")?;
    Ok(())
}
