//! Greedy font-size fitting.
//!
//! Finds the largest font size, stepping down from 15% of the image
//! width, at which the rendered label fits inside the image. The search
//! never goes below a floor of 6.0; a label that still overflows at the
//! floor is returned as-is — a deliberately silent best-effort policy,
//! since a clipped label beats no label on a one-shot tool.

use rusttype::{Font, Scale, point};

/// Fraction of the image width used as the starting font size.
const INITIAL_SCALE: f32 = 0.15;
/// Smallest font size the fitting loop will try.
const MIN_FONT_SIZE: f32 = 6.0;
/// Size decrement per fitting iteration.
const STEP: f32 = 1.0;

/// The chosen font size and the label's rendered width at that size.
///
/// Computed once per invocation, immutable thereafter.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LabelLayout {
    pub font_size: f32,
    pub text_width: f32,
}

/// Measure the rendered pixel width of `text` at `font_size`.
///
/// Width is the right edge of the rightmost glyph's pixel bounding box
/// when laid out from x = 0. Pure function of the font and inputs.
pub fn text_width(font: &Font<'_>, font_size: f32, text: &str) -> f32 {
    let scale = Scale::uniform(font_size);
    let v_metrics = font.v_metrics(scale);
    font.layout(text, scale, point(0.0, v_metrics.ascent))
        .filter_map(|glyph| glyph.pixel_bounding_box())
        .map(|bb| bb.max.x as f32)
        .fold(0.0, f32::max)
}

/// Find the largest font size at which `label` fits within `target_width`.
///
/// Starts at `target_width * 0.15` and steps down by 1.0 until the label
/// fits or the floor of 6.0 is reached. The last step clamps onto the
/// floor exactly, so a never-fitting label reports size 6.0 rather than
/// some fractional remainder below it.
pub fn fit_label(font: &Font<'_>, label: &str, target_width: f32) -> LabelLayout {
    let mut font_size = target_width * INITIAL_SCALE;
    let mut width = text_width(font, font_size, label);
    while width >= target_width && font_size > MIN_FONT_SIZE {
        font_size = (font_size - STEP).max(MIN_FONT_SIZE);
        width = text_width(font, font_size, label);
    }
    LabelLayout {
        font_size,
        text_width: width,
    }
}
