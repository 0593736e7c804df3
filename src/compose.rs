//! Band-and-label composition.
//!
//! Builds the output canvas in three source-over layers: the source
//! image, a colored band across the bottom edge, and the label centered
//! in white on top of the band. The source buffer is never mutated; the
//! result is a fresh RGBA canvas of identical dimensions.

use crate::color::Color;
use crate::fit::LabelLayout;
use image::{DynamicImage, Rgba, RgbaImage};
use rusttype::{Font, Scale, point};

/// Band height as a multiple of the chosen font size.
const BAND_HEIGHT_FACTOR: f32 = 3.0;

/// Compose `label` over `source` on a band filled with `band_color`.
///
/// The band spans the full image width, is `3 × font_size` tall (clamped
/// to the image height) and sits on the bottom edge. The label is drawn
/// at the fitted size in white, horizontally centered, with its line box
/// one `font_size` above the bottom.
pub fn compose(
    source: &DynamicImage,
    label: &str,
    layout: &LabelLayout,
    band_color: Color,
    font: &Font<'_>,
) -> RgbaImage {
    let mut canvas = source.to_rgba8();
    let (width, height) = canvas.dimensions();

    fill_band(&mut canvas, layout.font_size, band_color);

    let x = width as f32 / 2.0 - layout.text_width / 2.0;
    let v_metrics = font.v_metrics(Scale::uniform(layout.font_size));
    // descent is negative: the baseline sits |descent| above the line box
    // bottom, which itself sits font_size above the image bottom.
    let baseline = height as f32 - layout.font_size + v_metrics.descent;
    draw_label(&mut canvas, font, layout.font_size, x, baseline, label);

    canvas
}

/// Source-over blend of `src` onto `dst`.
///
/// Done in float rather than via `image::Pixel::blend`, whose integer
/// rounding drops an opaque destination to alpha 254 under a translucent
/// source. Over an opaque pixel the result here stays exactly opaque.
fn blend_pixel(dst: &mut Rgba<u8>, src: Rgba<u8>) {
    let src_a = src.0[3] as f32 / 255.0;
    let dst_a = dst.0[3] as f32 / 255.0;
    let out_a = src_a + dst_a * (1.0 - src_a);
    if out_a == 0.0 {
        *dst = Rgba([0, 0, 0, 0]);
        return;
    }
    for i in 0..3 {
        let src_c = src.0[i] as f32 / 255.0;
        let dst_c = dst.0[i] as f32 / 255.0;
        let out_c = (src_c * src_a + dst_c * dst_a * (1.0 - src_a)) / out_a;
        dst.0[i] = (out_c * 255.0).round() as u8;
    }
    dst.0[3] = (out_a * 255.0).round() as u8;
}

/// Fill the bottom band with `color`, source-over.
fn fill_band(canvas: &mut RgbaImage, font_size: f32, color: Color) {
    let (width, height) = canvas.dimensions();
    let band_height = ((font_size * BAND_HEIGHT_FACTOR).round() as u32).min(height);
    let band = color.rgba8();
    for y in height - band_height..height {
        for x in 0..width {
            blend_pixel(canvas.get_pixel_mut(x, y), band);
        }
    }
}

/// Rasterize `text` onto the canvas, blending each glyph's coverage as
/// white with proportional alpha.
fn draw_label(canvas: &mut RgbaImage, font: &Font<'_>, font_size: f32, x: f32, baseline: f32, text: &str) {
    let (width, height) = canvas.dimensions();
    let scale = Scale::uniform(font_size);
    for glyph in font.layout(text, scale, point(x, baseline)) {
        let Some(bb) = glyph.pixel_bounding_box() else {
            continue;
        };
        glyph.draw(|gx, gy, coverage| {
            let px = gx as i32 + bb.min.x;
            let py = gy as i32 + bb.min.y;
            if px < 0 || py < 0 || px as u32 >= width || py as u32 >= height {
                return;
            }
            let alpha = (coverage * 255.0).round() as u8;
            if alpha == 0 {
                return;
            }
            let white = Rgba([255, 255, 255, alpha]);
            blend_pixel(canvas.get_pixel_mut(px as u32, py as u32), white);
        });
    }
}
