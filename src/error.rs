//! Error taxonomy and process exit codes.
//!
//! Every pipeline stage returns an [`OverlayError`]; `main` is the only
//! place where errors are translated into exit codes. Library code never
//! terminates the process.

use std::path::PathBuf;
use thiserror::Error;

/// Terminal outcome of one invocation.
///
/// Each failure class gets a distinct small integer so callers (scripts,
/// CI) can branch on the cause without parsing stderr.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
    Ok = 0,
    WrongNumberOfArguments = 1,
    SourceImageNotValid = 2,
    CouldNotWriteImage = 3,
    InvalidBackgroundColor = 4,
}

impl ExitCode {
    pub fn value(self) -> i32 {
        self as i32
    }
}

#[derive(Error, Debug)]
pub enum OverlayError {
    #[error("cannot decode source image {path}: {reason}")]
    SourceImage { path: PathBuf, reason: String },

    #[error("invalid background color {0:?}: expected 8 hex digits (RRGGBBAA, leading # optional)")]
    InvalidColor(String),

    #[error("PNG encoding failed: {0}")]
    Encode(#[source] image::ImageError),

    #[error("cannot write {path}: {source}")]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },
}

impl OverlayError {
    /// Exit code this failure maps to. Wrong-argument-count never reaches
    /// here — clap reports it before the pipeline starts.
    pub fn exit_code(&self) -> ExitCode {
        match self {
            OverlayError::SourceImage { .. } => ExitCode::SourceImageNotValid,
            OverlayError::InvalidColor(_) => ExitCode::InvalidBackgroundColor,
            OverlayError::Encode(_) | OverlayError::Write { .. } => ExitCode::CouldNotWriteImage,
        }
    }
}
