//! Hex color parsing for the band background.
//!
//! The only accepted textual form is `RRGGBBAA` — exactly 8 hex digits
//! after stripping one optional leading `#`. Channels are normalized to
//! `[0.0, 1.0]`. Parsing is pure and total: bad input yields `None`,
//! never a panic.

use image::Rgba;

/// An RGBA color with channels normalized to `[0.0, 1.0]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color {
    pub red: f32,
    pub green: f32,
    pub blue: f32,
    pub alpha: f32,
}

impl Color {
    pub const WHITE: Color = Color {
        red: 1.0,
        green: 1.0,
        blue: 1.0,
        alpha: 1.0,
    };

    /// Convert to the 8-bit pixel the `image` crate draws with.
    pub fn rgba8(self) -> Rgba<u8> {
        let to_byte = |c: f32| (c * 255.0).round() as u8;
        Rgba([
            to_byte(self.red),
            to_byte(self.green),
            to_byte(self.blue),
            to_byte(self.alpha),
        ])
    }
}

/// Parse a `#RRGGBBAA` string. The leading `#` is optional.
///
/// Returns `None` when the remainder is not exactly 8 hex digits. The
/// digit check is explicit because `u32::from_str_radix` also accepts a
/// leading `+`, which is not a valid color.
pub fn parse_hex(input: &str) -> Option<Color> {
    let hex = input.strip_prefix('#').unwrap_or(input);
    if hex.len() != 8 || !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
        return None;
    }
    let value = u32::from_str_radix(hex, 16).ok()?;

    let channel = |shift: u32| ((value >> shift) & 0xFF) as f32 / 255.0;
    Some(Color {
        red: channel(24),
        green: channel(16),
        blue: channel(8),
        alpha: channel(0),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_opaque_red() {
        let c = parse_hex("FF0000FF").unwrap();
        assert_eq!(c.red, 1.0);
        assert_eq!(c.green, 0.0);
        assert_eq!(c.blue, 0.0);
        assert_eq!(c.alpha, 1.0);
    }

    #[test]
    fn leading_hash_is_optional() {
        assert_eq!(parse_hex("#11223344"), parse_hex("11223344"));
    }

    #[test]
    fn channels_are_digit_pair_over_255() {
        let c = parse_hex("000ABC77").unwrap();
        assert_eq!(c.red, 0.0);
        assert_eq!(c.green, 0x0A as f32 / 255.0);
        assert_eq!(c.blue, 0xBC as f32 / 255.0);
        assert_eq!(c.alpha, 0x77 as f32 / 255.0);
    }

    #[test]
    fn lowercase_digits_accepted() {
        let c = parse_hex("aabbccdd").unwrap();
        assert_eq!(c.rgba8(), Rgba([0xAA, 0xBB, 0xCC, 0xDD]));
    }

    #[test]
    fn rejects_wrong_length() {
        assert!(parse_hex("").is_none());
        assert!(parse_hex("FFF").is_none());
        assert!(parse_hex("FF0000").is_none()); // 6 digits: RGB without alpha
        assert!(parse_hex("FF0000FF00").is_none());
        assert!(parse_hex("#").is_none());
    }

    #[test]
    fn rejects_non_hex_characters() {
        assert!(parse_hex("zzzzzzzz").is_none());
        assert!(parse_hex("0000ABCG").is_none());
        assert!(parse_hex("+0000000").is_none()); // from_str_radix would take this
        assert!(parse_hex("-0000000").is_none());
    }

    #[test]
    fn only_one_hash_is_stripped() {
        assert!(parse_hex("##1122334").is_none());
    }

    #[test]
    fn rgba8_round_trips_every_pair() {
        let c = parse_hex("7F40C001").unwrap();
        assert_eq!(c.rgba8(), Rgba([0x7F, 0x40, 0xC0, 0x01]));
    }
}
