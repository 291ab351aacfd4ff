//! src/plot.rs
//!
//! `TimePlot`: the producer-facing API tying storage, binning, composition and
//! output together.
//!
//! Data flow per frame:
//! - `add_point` / `next_point` append to the `SampleStore` (extrema updated in O(1)).
//! - `show()` asks the bounds strategy for this frame's bounds, re-bins the
//!   whole store, composes a fresh grid and hands it to the sink, rewinding
//!   over the previous frame if there was one.
//!
//! Everything runs on the caller's thread. Callers sharing a plot between
//! threads must serialize `add_point`/`show` themselves.

pub mod binning;
pub mod bounds;
pub mod config;
pub mod store;
pub mod timeline;

use std::io::Stdout;
use std::time::{Duration, Instant};

use log::debug;

use crate::error::Result;
use crate::render::grid::{self, Grid};
use crate::render::palette::Palette;
use crate::render::sink::{AnsiSink, FrameSink};

/// Re-exports
pub use binning::{Binning, Bucket, NormalizedPoint, Normalizer};
pub use bounds::{Bounds, BoundsStrategy, FixedBounds, PaddedBounds};
pub use config::PlotConfig;
pub use store::{Extrema, Sample, SampleStore};
pub use timeline::Timeline;

pub struct TimePlot<S: FrameSink = AnsiSink<Stdout>> {
    config: PlotConfig,
    store: SampleStore,
    strategy: Box<dyn BoundsStrategy>,
    palette: Palette,
    timeline: Timeline,
    sink: S,
    /// Set after the first frame; later frames rewind over the previous one.
    printed: bool,
}

impl TimePlot {
    /// Plot of `rows × cols` characters writing to stdout.
    ///
    /// Dimensions outside [10, 100] rows or [20, 1000] cols fall back to 30 / 100.
    pub fn new(rows: usize, cols: usize) -> Self {
        Self::with_sink(PlotConfig::new(rows, cols), AnsiSink::stdout())
    }
}

impl Default for TimePlot {
    fn default() -> Self {
        Self::with_sink(PlotConfig::default(), AnsiSink::stdout())
    }
}

impl<S: FrameSink> TimePlot<S> {
    /// Plot writing to `sink`, with exact-extrema bounds and the default palette.
    pub fn with_sink(config: PlotConfig, sink: S) -> Self {
        Self {
            config,
            store: SampleStore::new(),
            strategy: Box::new(FixedBounds),
            palette: Palette::default(),
            timeline: Timeline::new(),
            sink,
            printed: false,
        }
    }

    /// Replace the axis bounds strategy (e.g. `PaddedBounds::default()`).
    pub fn with_bounds(mut self, strategy: impl BoundsStrategy + 'static) -> Self {
        self.strategy = Box::new(strategy);
        self
    }

    pub fn with_palette(mut self, palette: Palette) -> Self {
        self.palette = palette;
        self
    }

    pub fn config(&self) -> &PlotConfig {
        &self.config
    }

    pub fn palette(&self) -> &Palette {
        &self.palette
    }

    /// Center or truncate `text` to the plot width.
    pub fn set_x_label(&mut self, text: &str) {
        self.config.set_x_label(text);
    }

    /// Center or truncate `text` to the plot height.
    pub fn set_y_label(&mut self, text: &str) {
        self.config.set_y_label(text);
    }

    /// Append a sample. x need not be monotonic.
    pub fn add_point(&mut self, x: f64, y: f64) {
        self.store.record_sample(x, y);
    }

    /// Append `y` stamped with elapsed wall time since the first call, minus
    /// the time spent inside `show()` since then.
    pub fn next_point(&mut self, y: f64) {
        let x = self.timeline.stamp(Instant::now());
        self.add_point(x, y);
    }

    pub fn samples(&self) -> &[Sample] {
        self.store.samples()
    }

    pub fn extrema(&self) -> Extrema {
        self.store.extrema()
    }

    /// Bounds the next frame will use, as decided by the bounds strategy.
    pub fn bounds(&self) -> Bounds {
        self.strategy.bounds(&self.store.extrema())
    }

    /// Total time spent in `show()` since the first `next_point`.
    pub fn render_time(&self) -> Duration {
        self.timeline.render_total()
    }

    /// Bucket and normalize the whole store for the current dimensions.
    pub fn binning(&self) -> Binning {
        binning::bin_samples(
            self.store.samples(),
            self.bounds(),
            self.config.plot_width(),
            self.config.plot_height(),
        )
    }

    /// Compose the current frame without writing it anywhere.
    pub fn compose(&self) -> Grid {
        grid::compose(&self.config, &self.binning(), &self.palette)
    }

    /// Draw the current frame, overwriting the previous one in place.
    ///
    /// # Errors
    /// Returns `PlotError::Io` if the sink fails; the frame is not retried.
    pub fn show(&mut self) -> Result<()> {
        let started = Instant::now();

        let frame = self.compose();
        if self.printed {
            self.sink.rewind(self.config.rows())?;
        }
        self.sink.paint(&frame, &self.palette)?;
        self.sink.flush()?;
        self.printed = true;

        let elapsed = started.elapsed();
        self.timeline.record_render(elapsed);
        debug!(
            "frame of {} samples in {:?} (render total {:?})",
            self.store.len(),
            elapsed,
            self.timeline.render_total()
        );
        Ok(())
    }

    /// Dump raw samples as ` Y   X ` followed by one `y, x` line per sample,
    /// bypassing the grid.
    pub fn print_data(&mut self) -> Result<()> {
        self.sink.print_line(" Y   X ")?;
        for s in self.store.samples() {
            self.sink.print_line(&format!("{}, {}", s.y, s.x))?;
        }
        self.sink.flush()
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    pub fn into_sink(self) -> S {
        self.sink
    }
}
