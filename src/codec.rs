//! Image decode, PNG encode, and atomic file write.
//!
//! The pixel work is delegated to the `image` crate; this module only
//! adds path context to failures and the write-then-rename dance that
//! makes the output overwrite atomic.
//!
//! | Operation | Crate / function |
//! |---|---|
//! | Decode (PNG, JPEG, TIFF, BMP, WebP) | `image::ImageReader` with format sniffing |
//! | Encode → PNG | `image::codecs::png::PngEncoder`, 8-bit RGBA |
//! | Write | temp file + `fs::rename` in the destination directory |

use crate::error::OverlayError;
use image::codecs::png::PngEncoder;
use image::{DynamicImage, ExtendedColorType, ImageEncoder, ImageReader, RgbaImage};
use std::fs;
use std::path::Path;

/// Decode the source image, sniffing the format from file content rather
/// than trusting the extension.
pub fn load(path: &Path) -> Result<DynamicImage, OverlayError> {
    let source_error = |reason: String| OverlayError::SourceImage {
        path: path.to_path_buf(),
        reason,
    };
    ImageReader::open(path)
        .map_err(|e| source_error(e.to_string()))?
        .with_guessed_format()
        .map_err(|e| source_error(e.to_string()))?
        .decode()
        .map_err(|e| source_error(e.to_string()))
}

/// Encode the canvas to an in-memory PNG (8 bits/sample, RGBA).
pub fn encode_png(canvas: &RgbaImage) -> Result<Vec<u8>, OverlayError> {
    let mut bytes = Vec::new();
    PngEncoder::new(&mut bytes)
        .write_image(
            canvas.as_raw(),
            canvas.width(),
            canvas.height(),
            ExtendedColorType::Rgba8,
        )
        .map_err(OverlayError::Encode)?;
    Ok(bytes)
}

/// Write `bytes` to `path`, replacing any existing file atomically.
///
/// Writes a sibling temporary file first and renames it over the
/// destination, so readers never observe a half-written PNG. The rename
/// stays within one directory, which keeps it atomic on POSIX.
pub fn write(bytes: &[u8], path: &Path) -> Result<(), OverlayError> {
    let write_error = |source: std::io::Error| OverlayError::Write {
        path: path.to_path_buf(),
        source,
    };
    let tmp = path.with_extension("png.tmp");
    if let Err(e) = fs::write(&tmp, bytes) {
        // a partial temp file may exist after e.g. a full disk
        let _ = fs::remove_file(&tmp);
        return Err(write_error(e));
    }
    fs::rename(&tmp, path).map_err(|e| {
        let _ = fs::remove_file(&tmp);
        write_error(e)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{GenericImageView, Rgba};
    use tempfile::TempDir;

    fn checker(width: u32, height: u32) -> RgbaImage {
        RgbaImage::from_fn(width, height, |x, y| {
            if (x + y) % 2 == 0 {
                Rgba([255, 0, 0, 255])
            } else {
                Rgba([0, 0, 255, 128])
            }
        })
    }

    #[test]
    fn png_round_trip_preserves_pixels() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("out.png");
        let canvas = checker(17, 11);

        let bytes = encode_png(&canvas).unwrap();
        write(&bytes, &path).unwrap();

        let decoded = load(&path).unwrap();
        assert_eq!(decoded.dimensions(), (17, 11));
        assert_eq!(decoded.to_rgba8(), canvas);
    }

    #[test]
    fn load_reports_missing_file() {
        let err = load(Path::new("/no/such/image.png")).unwrap_err();
        assert!(matches!(err, OverlayError::SourceImage { .. }));
    }

    #[test]
    fn load_rejects_non_image_content() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("not-an-image.png");
        fs::write(&path, b"plain text pretending to be a PNG").unwrap();
        assert!(matches!(
            load(&path),
            Err(OverlayError::SourceImage { .. })
        ));
    }

    #[test]
    fn load_sniffs_format_despite_wrong_extension() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("actually-png.jpg");
        let bytes = encode_png(&checker(4, 4)).unwrap();
        fs::write(&path, bytes).unwrap();
        assert_eq!(load(&path).unwrap().dimensions(), (4, 4));
    }

    #[test]
    fn write_replaces_existing_file() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("out.png");
        fs::write(&path, b"old content").unwrap();

        let bytes = encode_png(&checker(3, 3)).unwrap();
        write(&bytes, &path).unwrap();

        assert_eq!(load(&path).unwrap().dimensions(), (3, 3));
        // no temp file left behind
        assert!(!tmp.path().join("out.png.tmp").exists());
    }

    #[test]
    fn failed_temp_write_leaves_the_output_untouched() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("out.png");
        // a directory squatting on the temp path makes the write itself fail
        fs::create_dir(tmp.path().join("out.png.tmp")).unwrap();

        let err = write(b"png bytes", &path).unwrap_err();
        assert!(matches!(err, OverlayError::Write { .. }));
        assert!(!path.exists());
    }

    #[test]
    fn write_fails_for_missing_directory() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("nonexistent").join("out.png");
        let err = write(b"png bytes", &path).unwrap_err();
        assert!(matches!(err, OverlayError::Write { .. }));
    }
}
