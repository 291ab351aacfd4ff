//! src/render.rs
//!
//! Top-level `render` module: grid composition, labels, colors and output sinks.

pub mod grid;
pub mod metric;
pub mod palette;
pub mod sink;
pub mod widget;

/// Re-exports
pub use grid::{Cell, Grid, compose};
pub use metric::metricify;
pub use palette::{Palette, Role};
pub use sink::{AnsiSink, FrameSink};
pub use widget::GridWidget;
