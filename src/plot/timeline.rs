//! src/plot/timeline.rs
//!
//! Wall-clock timestamps for `next_point`, minus the time spent rendering.
//!
//! Subtracting render time keeps redraw cost from stretching the x axis: two
//! samples taken on either side of a slow `show()` stay as close together on
//! the chart as they would have been without it.

use std::time::{Duration, Instant};

#[derive(Clone, Copy, Debug, Default)]
pub struct Timeline {
    start: Option<Instant>,
    render_total: Duration,
}

impl Timeline {
    pub fn new() -> Self {
        Self::default()
    }

    /// Timestamp (seconds) for a sample taken at `now`.
    ///
    /// The first call fixes the start instant and returns 0.
    pub fn stamp(&mut self, now: Instant) -> f64 {
        let start = *self.start.get_or_insert(now);
        now.saturating_duration_since(start)
            .saturating_sub(self.render_total)
            .as_secs_f64()
    }

    /// Add one `show()` duration. Ignored until the first sample has been stamped.
    pub fn record_render(&mut self, elapsed: Duration) {
        if self.start.is_some() {
            self.render_total += elapsed;
        }
    }

    pub fn render_total(&self) -> Duration {
        self.render_total
    }

    pub fn is_started(&self) -> bool {
        self.start.is_some()
    }
}
