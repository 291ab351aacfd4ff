//! src/error.rs
//!
//! Error type shared by the plotting pipeline.
//!
//! Only the output stream can fail; everything upstream of the sink is total.

use std::io;
use thiserror::Error;

/// Result alias using [`PlotError`].
pub type Result<T> = std::result::Result<T, PlotError>;

#[derive(Error, Debug)]
pub enum PlotError {
    /// Writing a frame (or the debug dump) to the output stream failed.
    #[error("output stream error: {0}")]
    Io(#[from] io::Error),
}
