//! The embedded typeface.
//!
//! The reference tool used the host's Helvetica; depending on a system
//! font makes output vary per machine and breaks entirely in containers
//! without a font directory. Instead DejaVu Sans is embedded into the
//! binary (license alongside it in `assets/`), so rendering is identical
//! everywhere and the binary stays self-contained.

use rusttype::Font;
use std::sync::LazyLock;

static FONT_BYTES: &[u8] = include_bytes!("../assets/DejaVuSans.ttf");

static DEFAULT_FONT: LazyLock<Font<'static>> =
    LazyLock::new(|| Font::try_from_bytes(FONT_BYTES).expect("embedded DejaVuSans.ttf is valid"));

/// The typeface used for all label rendering.
pub fn default_font() -> &'static Font<'static> {
    &DEFAULT_FONT
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn embedded_font_loads() {
        let font = default_font();
        assert!(font.glyph_count() > 0);
    }
}
