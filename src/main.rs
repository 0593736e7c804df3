use clap::Parser;
use clap::error::ErrorKind;
use labelband::error::{ExitCode, OverlayError};
use labelband::{codec, color, compose, fit, font};
use std::path::PathBuf;

/// Fallback band color when no hex color argument is given (translucent blue).
const DEFAULT_BAND_COLOR: &str = "000ABC77";

#[derive(Parser)]
#[command(name = "labelband")]
#[command(about = "Overlay a text label on a colored band onto an image")]
#[command(long_about = "\
Overlay a text label on a colored band onto an image

Reads one raster image (PNG, JPEG, TIFF, BMP, WebP), draws a colored
band across the bottom with the label centered on it in white, and
writes the result as a PNG. The font size is chosen automatically:
starting at 15% of the image width and stepping down until the label
fits (never below 6pt).

Exit codes:
  0  success
  1  wrong number of arguments
  2  source image missing or not decodable
  3  output could not be encoded or written
  4  background color is not 8 hex digits (RRGGBBAA)")]
#[command(version)]
struct Cli {
    /// Source image to annotate
    source: PathBuf,

    /// Output PNG path (overwritten atomically if it exists)
    output: PathBuf,

    /// Label text to draw on the band
    label: String,

    /// Band color as RRGGBBAA hex digits, leading # optional
    #[arg(default_value = DEFAULT_BAND_COLOR)]
    color: String,

    /// Anything after the color is accepted and ignored
    #[arg(trailing_var_arg = true, allow_hyphen_values = true, hide = true)]
    _extra: Vec<String>,
}

fn main() {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => {
            // --help/--version are not argument mistakes
            let code = match err.kind() {
                ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => ExitCode::Ok,
                _ => ExitCode::WrongNumberOfArguments,
            };
            let _ = err.print();
            std::process::exit(code.value());
        }
    };

    if let Err(err) = run(&cli) {
        eprintln!("error: {err}");
        std::process::exit(err.exit_code().value());
    }
}

/// The pipeline, in strict order. Color validation happens before any
/// drawing, so an invalid color aborts without wasted composition work
/// and without touching the output path.
fn run(cli: &Cli) -> Result<(), OverlayError> {
    let source = codec::load(&cli.source)?;
    let typeface = font::default_font();

    let layout = fit::fit_label(typeface, &cli.label, source.width() as f32);
    let band_color = color::parse_hex(&cli.color)
        .ok_or_else(|| OverlayError::InvalidColor(cli.color.clone()))?;

    let canvas = compose::compose(&source, &cli.label, &layout, band_color, typeface);

    let png = codec::encode_png(&canvas)?;
    codec::write(&png, &cli.output)
}
