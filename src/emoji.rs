//! Emoji shortcode lookup.

use phf::phf_map;
use std::collections::HashMap;

/// Builtin `:shortcode:` to Unicode glyph table.
///
/// Compile-time map; lookups never allocate. Names follow the common
/// GitHub/Slack shortcode vocabulary.
static BUILTIN: phf::Map<&'static str, &'static str> = phf_map! {
    "rocket" => "\u{1F680}",
    "smile" => "\u{1F604}",
    "grin" => "\u{1F601}",
    "joy" => "\u{1F602}",
    "wink" => "\u{1F609}",
    "sweat_smile" => "\u{1F605}",
    "sunglasses" => "\u{1F60E}",
    "thinking" => "\u{1F914}",
    "cry" => "\u{1F622}",
    "sob" => "\u{1F62D}",
    "heart" => "\u{2764}\u{FE0F}",
    "broken_heart" => "\u{1F494}",
    "thumbsup" => "\u{1F44D}",
    "+1" => "\u{1F44D}",
    "thumbsdown" => "\u{1F44E}",
    "-1" => "\u{1F44E}",
    "wave" => "\u{1F44B}",
    "clap" => "\u{1F44F}",
    "muscle" => "\u{1F4AA}",
    "pray" => "\u{1F64F}",
    "eyes" => "\u{1F440}",
    "fire" => "\u{1F525}",
    "tada" => "\u{1F389}",
    "star" => "\u{2B50}",
    "sparkles" => "\u{2728}",
    "zap" => "\u{26A1}",
    "bulb" => "\u{1F4A1}",
    "100" => "\u{1F4AF}",
    "warning" => "\u{26A0}\u{FE0F}",
    "white_check_mark" => "\u{2705}",
    "x" => "\u{274C}",
    "question" => "\u{2753}",
    "exclamation" => "\u{2757}",
    "bug" => "\u{1F41B}",
    "wrench" => "\u{1F527}",
    "gear" => "\u{2699}\u{FE0F}",
    "hammer" => "\u{1F528}",
    "lock" => "\u{1F512}",
    "key" => "\u{1F511}",
    "link" => "\u{1F517}",
    "memo" => "\u{1F4DD}",
    "pencil" => "\u{270F}\u{FE0F}",
    "book" => "\u{1F4D6}",
    "books" => "\u{1F4DA}",
    "mag" => "\u{1F50D}",
    "chart_with_upwards_trend" => "\u{1F4C8}",
    "calendar" => "\u{1F4C5}",
    "clock" => "\u{1F552}",
    "hourglass" => "\u{231B}",
    "computer" => "\u{1F4BB}",
    "keyboard" => "\u{2328}\u{FE0F}",
    "coffee" => "\u{2615}",
    "pizza" => "\u{1F355}",
    "beer" => "\u{1F37A}",
};

/// Resolved emoji: either a Unicode glyph or a custom image URL.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EmojiGlyph<'a> {
    Unicode(&'a str),
    Image(&'a str),
}

/// Shortcode catalog combining builtin glyphs with custom image entries.
///
/// Custom entries (typically community-uploaded images) shadow builtins of
/// the same name. The catalog is plain data; cloning it is cheap enough for
/// per-renderer ownership.
#[derive(Debug, Clone, Default)]
pub struct EmojiCatalog {
    custom: HashMap<String, String>,
}

impl EmojiCatalog {
    /// Creates a catalog with only the builtin glyph table.
    pub fn builtin() -> Self {
        Self::default()
    }

    /// Creates a catalog with custom image entries layered over builtins.
    ///
    /// # Arguments
    ///
    /// * `entries`: `(name, image URL)` pairs
    pub fn with_custom(entries: impl IntoIterator<Item = (String, String)>) -> Self {
        Self {
            custom: entries.into_iter().collect(),
        }
    }

    /// Adds or replaces a custom image entry.
    pub fn insert_custom(&mut self, name: impl Into<String>, url: impl Into<String>) {
        self.custom.insert(name.into(), url.into());
    }

    /// Resolves a shortcode name to its glyph or image URL.
    ///
    /// Returns None for unknown names; callers keep the literal text.
    pub fn resolve(&self, name: &str) -> Option<EmojiGlyph<'_>> {
        if let Some(url) = self.custom.get(name) {
            return Some(EmojiGlyph::Image(url));
        }
        BUILTIN.get(name).copied().map(EmojiGlyph::Unicode)
    }
}
