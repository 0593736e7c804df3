//! # labelband
//!
//! Overlay a text label on a colored band onto an existing image and
//! write the result as a PNG. One image in, one image out:
//!
//! ```text
//! labelband photo.jpg out.png "Dawn over the valley" 000ABC77
//! ```
//!
//! The whole program is a straight-line pipeline; each stage is a pure
//! function from values to values, so unit tests exercise everything
//! short of the process boundary without spawning the binary:
//!
//! ```text
//! decode source → fit font size → parse color → compose → encode PNG → write
//! ```
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`color`] | `#RRGGBBAA` hex string → normalized RGBA [`color::Color`] |
//! | [`font`] | the embedded DejaVu Sans typeface handle |
//! | [`fit`] | greedy font-size search: largest size at which the label fits the image width |
//! | [`compose`] | draws source, bottom band, and centered white label onto a fresh canvas |
//! | [`codec`] | image decoding, PNG encoding, atomic output write |
//! | [`error`] | failure taxonomy and its mapping to process exit codes |
//!
//! # Design Decisions
//!
//! ## Embedded Font
//!
//! Rendering depends on font metrics, so using whatever typeface the
//! host happens to have would make output differ per machine (and fail
//! outright in minimal containers). DejaVu Sans is compiled into the
//! binary via `include_bytes!` — the binary is fully self-contained and
//! two runs on different machines produce the same pixels.
//!
//! ## Library Errors, One Exit Point
//!
//! Every stage returns `Result<_, OverlayError>`. Only `main` converts
//! errors into exit codes (0 OK, 1 bad arguments, 2 undecodable source,
//! 3 could not encode/write, 4 invalid color), so scripted callers get a
//! stable contract and library code stays usable outside the CLI.
//!
//! ## Atomic Output
//!
//! The PNG is written to a sibling temporary file and renamed over the
//! destination. An interrupted run can never leave a truncated file at
//! the output path, and on the invalid-color path no file is touched at
//! all.

pub mod codec;
pub mod color;
pub mod compose;
pub mod error;
pub mod fit;
pub mod font;
