//! Lightweight Markdown-to-HTML rendering for blog content.

mod assets;
mod config;
pub mod emoji;
mod highlight;
mod markdown;
pub mod pages;

pub use assets::write_css_assets;
pub use config::Config;
pub use emoji::{EmojiCatalog, EmojiGlyph};
pub use highlight::Highlighter;
pub use markdown::Renderer;
