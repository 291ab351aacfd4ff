//! src/lib.rs
//!
//! Live-updating ANSI bar chart of an unbounded (x, y) stream in a fixed
//! terminal grid.
//!
//! ```no_run
//! use cli_timeplot::TimePlot;
//!
//! let mut plot = TimePlot::new(30, 100);
//! plot.set_y_label("some ints");
//! for i in 0..10_000 {
//!     plot.next_point((i as f64 / 62.8).sin() * 10.0);
//!     if i % 1_000 == 0 {
//!         plot.show()?;
//!     }
//! }
//! # Ok::<(), cli_timeplot::PlotError>(())
//! ```

pub mod error;
pub mod plot;
pub mod render;

/// Re-exports
pub use error::{PlotError, Result};
pub use plot::{Bounds, BoundsStrategy, FixedBounds, PaddedBounds, PlotConfig, TimePlot};
pub use render::{AnsiSink, FrameSink, Grid, GridWidget, Palette, Role};
