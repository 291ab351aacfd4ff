//! src/plot/bounds.rs
//!
//! Axis bounds strategies.
//!
//! A strategy turns the store's running extrema into the bounds the binner
//! and the axes use for one frame. `FixedBounds` uses the extrema as-is;
//! `PaddedBounds` pushes them outward so new extreme values are less likely
//! to rescale the chart on every frame.

use super::store::Extrema;

/// Axis bounds for one frame.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Bounds {
    pub min_x: f64,
    pub max_x: f64,
    pub min_y: f64,
    pub max_y: f64,
}

impl Bounds {
    pub fn x_range(&self) -> f64 {
        self.max_x - self.min_x
    }

    pub fn y_range(&self) -> f64 {
        self.max_y - self.min_y
    }
}

/// Maps running extrema to axis bounds.
pub trait BoundsStrategy {
    fn bounds(&self, extrema: &Extrema) -> Bounds;
}

/// Bounds equal to the observed extrema.
#[derive(Clone, Copy, Debug, Default)]
pub struct FixedBounds;

impl BoundsStrategy for FixedBounds {
    fn bounds(&self, extrema: &Extrema) -> Bounds {
        if !extrema.is_set() {
            return Bounds::default();
        }
        Bounds {
            min_x: extrema.min_x,
            max_x: extrema.max_x,
            min_y: extrema.min_y,
            max_y: extrema.max_y,
        }
    }
}

/// Extrema scaled away from the data by `margin` of their own magnitude.
#[derive(Clone, Copy, Debug)]
pub struct PaddedBounds {
    pub margin: f64,
}

impl PaddedBounds {
    pub const DEFAULT_MARGIN: f64 = 0.1;

    /// Create a `PaddedBounds`; the margin is clamped to [0.0, 1.0].
    pub fn new(margin: f64) -> Self {
        Self {
            margin: margin.clamp(0.0, 1.0),
        }
    }

    fn pad_max(&self, v: f64) -> f64 {
        if v < 0.0 {
            v * (1.0 - self.margin)
        } else {
            v * (1.0 + self.margin)
        }
    }

    fn pad_min(&self, v: f64) -> f64 {
        if v > 0.0 {
            v * (1.0 - self.margin)
        } else {
            v * (1.0 + self.margin)
        }
    }
}

impl Default for PaddedBounds {
    fn default() -> Self {
        Self::new(Self::DEFAULT_MARGIN)
    }
}

impl BoundsStrategy for PaddedBounds {
    fn bounds(&self, extrema: &Extrema) -> Bounds {
        if !extrema.is_set() {
            return Bounds::default();
        }
        Bounds {
            min_x: self.pad_min(extrema.min_x),
            max_x: self.pad_max(extrema.max_x),
            min_y: self.pad_min(extrema.min_y),
            max_y: self.pad_max(extrema.max_y),
        }
    }
}
