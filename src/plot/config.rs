//! src/plot/config.rs
//!
//! Grid dimensions and axis labels for a plot.
//!
//! Values are fixed once the plot is constructed. Out-of-range dimensions are
//! replaced by the defaults rather than reported to the caller.

use std::ops::RangeInclusive;

use log::debug;

pub const DEFAULT_ROWS: usize = 30;
pub const DEFAULT_COLS: usize = 100;
pub const ROWS_RANGE: RangeInclusive<usize> = 10..=100;
pub const COLS_RANGE: RangeInclusive<usize> = 20..=1000;
pub const DEFAULT_X_LABEL: &str = "Time (seconds)";

/// Fields are private so every instance has passed through [`PlotConfig::new`]:
/// dimensions are always in range and labels always fitted.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PlotConfig {
    /// Total character rows, labels and axes included.
    rows: usize,

    /// Total character columns, labels and axes included.
    cols: usize,

    /// x-axis label, already fitted to `cols` characters.
    x_label: String,

    /// y-axis label, already fitted to `rows` characters.
    y_label: String,
}

impl PlotConfig {
    /// Create a `PlotConfig`, substituting the default for any dimension
    /// outside its accepted range.
    pub fn new(rows: usize, cols: usize) -> Self {
        let rows = if ROWS_RANGE.contains(&rows) {
            rows
        } else {
            debug!("rows={} out of {:?}, using {}", rows, ROWS_RANGE, DEFAULT_ROWS);
            DEFAULT_ROWS
        };
        let cols = if COLS_RANGE.contains(&cols) {
            cols
        } else {
            debug!("cols={} out of {:?}, using {}", cols, COLS_RANGE, DEFAULT_COLS);
            DEFAULT_COLS
        };
        Self {
            rows,
            cols,
            x_label: fit_label(DEFAULT_X_LABEL, cols),
            y_label: fit_label("", rows),
        }
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn x_label(&self) -> &str {
        &self.x_label
    }

    pub fn y_label(&self) -> &str {
        &self.y_label
    }

    pub fn set_x_label(&mut self, text: &str) {
        self.x_label = fit_label(text, self.cols);
    }

    pub fn set_y_label(&mut self, text: &str) {
        self.y_label = fit_label(text, self.rows);
    }

    /// Rows available to bars (everything above the label and tick rows).
    pub fn plot_height(&self) -> usize {
        self.rows.saturating_sub(2)
    }

    /// Columns available to bars (everything right of the label and tick columns).
    pub fn plot_width(&self) -> usize {
        self.cols.saturating_sub(2)
    }
}

impl Default for PlotConfig {
    fn default() -> Self {
        Self::new(DEFAULT_ROWS, DEFAULT_COLS)
    }
}

/// Center `text` in a field of `width` characters, or keep its first `width`
/// characters when it does not fit.
///
/// Odd padding puts the extra space on the right.
pub fn fit_label(text: &str, width: usize) -> String {
    let len = text.chars().count();
    if len >= width {
        return text.chars().take(width).collect();
    }
    let extra = width - len;
    let left = extra / 2;
    let right = extra - left;
    let mut out = String::with_capacity(width);
    out.extend(std::iter::repeat_n(' ', left));
    out.push_str(text);
    out.extend(std::iter::repeat_n(' ', right));
    out
}
