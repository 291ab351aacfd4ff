//! src/plot/store.rs
//!
//! Append-only sample storage with running extrema.
//!
//! Samples are never evicted; memory grows with the number of points added.

/// One `(x, y)` observation.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Sample {
    pub x: f64,
    pub y: f64,
}

impl Sample {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Running minimum/maximum of x and y over every recorded sample.
///
/// Starts inverted (`min = +inf`, `max = -inf`) so the first sample sets all four.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Extrema {
    pub min_x: f64,
    pub max_x: f64,
    pub min_y: f64,
    pub max_y: f64,
}

impl Extrema {
    fn new() -> Self {
        Self {
            min_x: f64::INFINITY,
            max_x: f64::NEG_INFINITY,
            min_y: f64::INFINITY,
            max_y: f64::NEG_INFINITY,
        }
    }

    fn include(&mut self, s: Sample) {
        if s.x < self.min_x {
            self.min_x = s.x;
        }
        if s.x > self.max_x {
            self.max_x = s.x;
        }
        if s.y < self.min_y {
            self.min_y = s.y;
        }
        if s.y > self.max_y {
            self.max_y = s.y;
        }
    }

    /// False until at least one finite sample has been included.
    pub fn is_set(&self) -> bool {
        self.min_x <= self.max_x && self.min_y <= self.max_y
    }
}

impl Default for Extrema {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Debug, Default)]
pub struct SampleStore {
    samples: Vec<Sample>,
    extrema: Extrema,
}

impl SampleStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a sample and fold it into the extrema. O(1).
    pub fn record_sample(&mut self, x: f64, y: f64) {
        let s = Sample::new(x, y);
        self.extrema.include(s);
        self.samples.push(s);
    }

    pub fn extrema(&self) -> Extrema {
        self.extrema
    }

    pub fn samples(&self) -> &[Sample] {
        &self.samples
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(500))]

        /// Every recorded sample lies within the running extrema.
        #[test]
        fn prop_extrema_bound_every_sample(
            points in prop::collection::vec((-1e9f64..1e9, -1e9f64..1e9), 1..300)
        ) {
            let mut store = SampleStore::new();
            for &(x, y) in &points {
                store.record_sample(x, y);
            }
            let e = store.extrema();
            for s in store.samples() {
                prop_assert!(e.min_x <= s.x && s.x <= e.max_x);
                prop_assert!(e.min_y <= s.y && s.y <= e.max_y);
            }
            prop_assert!(store.samples().iter().any(|s| s.x == e.min_x));
            prop_assert!(store.samples().iter().any(|s| s.y == e.max_y));
        }
    }
}
