//! src/plot/binning.rs
//!
//! Bucketing of the full sample set into display columns, and y normalization
//! into row-height cells.
//!
//! Everything here is rebuilt from scratch for each frame; no bucket state
//! survives between `show()` calls, so a new extreme value rescales the whole
//! chart on the next frame.

use log::trace;

use super::bounds::Bounds;
use super::store::Sample;

/// Number of buckets for a frame: one per sample plus one, capped at the
/// columns available to bars.
pub fn target_width(plot_width: usize, sample_count: usize) -> usize {
    plot_width.min(sample_count.saturating_add(1)).max(1)
}

/// Forward and inverse mappings between data space and grid space for one frame.
///
/// A zero (or non-finite) x range maps every x to bucket 0; a zero y range maps
/// every y to mid-height.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Normalizer {
    pub bounds: Bounds,
    pub width: usize,
    pub height: usize,
}

impl Normalizer {
    pub fn new(bounds: Bounds, width: usize, height: usize) -> Self {
        Self {
            bounds,
            width: width.max(1),
            height,
        }
    }

    fn x_degenerate(&self) -> bool {
        let r = self.bounds.x_range();
        !(r > 0.0 && r.is_finite())
    }

    fn y_degenerate(&self) -> bool {
        let r = self.bounds.y_range();
        !(r > 0.0 && r.is_finite())
    }

    /// Fractional bucket position of `x`, in [0, width] for x within bounds.
    pub fn x2bin(&self, x: f64) -> f64 {
        if self.x_degenerate() {
            return 0.0;
        }
        (x - self.bounds.min_x) / self.bounds.x_range() * self.width as f64
    }

    /// Representative x of bucket `bin`; inverse of [`Normalizer::x2bin`].
    pub fn bin2x(&self, bin: f64) -> f64 {
        if self.x_degenerate() {
            return self.bounds.min_x;
        }
        bin / self.width as f64 * self.bounds.x_range() + self.bounds.min_x
    }

    /// Bucket index for `x`. A sample at exactly `max_x` rounds to `width`
    /// and is folded into the last bucket.
    pub fn bin_index(&self, x: f64) -> usize {
        let raw = self.x2bin(x).round();
        if raw > 0.0 {
            (raw as usize).min(self.width - 1)
        } else {
            0
        }
    }

    pub fn y2cell(&self, y: f64) -> f64 {
        if self.y_degenerate() {
            return self.height as f64 / 2.0;
        }
        (y - self.bounds.min_y) / self.bounds.y_range() * self.height as f64
    }

    pub fn cell2y(&self, cell: f64) -> f64 {
        if self.y_degenerate() || self.height == 0 {
            return self.bounds.min_y;
        }
        cell / self.height as f64 * self.bounds.y_range() + self.bounds.min_y
    }
}

/// One display column's collapsed value.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Bucket {
    pub index: usize,
    /// Mean x of the samples in this bucket.
    pub x: f64,
    /// Mean y of the samples in this bucket.
    pub y: f64,
    /// Samples averaged into this bucket; 0 for a synthesized floor bucket.
    pub count: usize,
}

impl Bucket {
    pub fn is_synthesized(&self) -> bool {
        self.count == 0
    }
}

/// A bucket after y normalization; `y_cell` is in [0, height].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct NormalizedPoint {
    pub x: f64,
    pub y_cell: f64,
}

/// Output of one binning pass.
#[derive(Clone, Debug)]
pub struct Binning {
    pub normalizer: Normalizer,
    /// Exactly `normalizer.width` buckets, ordered by index.
    pub buckets: Vec<Bucket>,
    /// One normalized point per bucket, same order.
    pub points: Vec<NormalizedPoint>,
}

impl Binning {
    pub fn width(&self) -> usize {
        self.normalizer.width
    }

    pub fn height(&self) -> usize {
        self.normalizer.height
    }
}

/// Bucket `samples` into `target_width(plot_width, samples.len())` columns and
/// normalize each bucket's mean y into `[0, height]`.
///
/// Buckets that receive no sample are synthesized at `(bin2x(i), min_y)` so the
/// output has no gaps; they sit on the floor rather than being interpolated.
pub fn bin_samples(samples: &[Sample], bounds: Bounds, plot_width: usize, height: usize) -> Binning {
    let width = target_width(plot_width, samples.len());
    let normalizer = Normalizer::new(bounds, width, height);

    // (sum_x, sum_y, count) per bucket
    let mut acc = vec![(0.0f64, 0.0f64, 0usize); width];
    for s in samples {
        let slot = &mut acc[normalizer.bin_index(s.x)];
        slot.0 += s.x;
        slot.1 += s.y;
        slot.2 += 1;
    }

    let buckets: Vec<Bucket> = acc
        .into_iter()
        .enumerate()
        .map(|(index, (sx, sy, count))| {
            if count == 0 {
                Bucket {
                    index,
                    x: normalizer.bin2x(index as f64),
                    y: bounds.min_y,
                    count,
                }
            } else {
                Bucket {
                    index,
                    x: sx / count as f64,
                    y: sy / count as f64,
                    count,
                }
            }
        })
        .collect();

    let points = buckets
        .iter()
        .map(|b| NormalizedPoint {
            x: b.x,
            y_cell: normalizer.y2cell(b.y).clamp(0.0, height as f64),
        })
        .collect();

    trace!(
        "binned {} samples into {} buckets ({} synthesized)",
        samples.len(),
        width,
        buckets.iter().filter(|b| b.is_synthesized()).count()
    );

    Binning {
        normalizer,
        buckets,
        points,
    }
}
