//! src/render/grid.rs
//!
//! Character grid and the compositor that lays labels, axes and bars onto it.
//!
//! Origin is bottom-left: row 0 is the bottom line of the frame.
//!
//! ```text
//!  col 0   col 1   col 2 ..
//!  y-label y-ticks bars            rows 2..rows-1
//!  y-label y-ticks x-ticks ..      row 1
//!  x-label x-label x-label ..      row 0
//! ```

use log::debug;

use super::metric::metricify;
use super::palette::{Palette, Role};
use crate::plot::binning::Binning;
use crate::plot::config::PlotConfig;

/// Rows between two y-axis tick labels.
pub const Y_TICK_EVERY: usize = 5;
/// Columns between two x-axis tick labels.
pub const X_TICK_EVERY: usize = 8;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Cell {
    pub glyph: char,
    /// `None` for uncolored blanks.
    pub role: Option<Role>,
}

impl Cell {
    pub const BLANK: Cell = Cell {
        glyph: ' ',
        role: None,
    };

    pub fn new(glyph: char, role: Role) -> Self {
        Self {
            glyph,
            role: Some(role),
        }
    }
}

/// `cols × rows` cells, stored row by row from the bottom.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Grid {
    cols: usize,
    rows: usize,
    cells: Vec<Cell>,
}

impl Grid {
    pub fn new(cols: usize, rows: usize) -> Self {
        Self {
            cols,
            rows,
            cells: vec![Cell::BLANK; cols * rows],
        }
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn get(&self, col: usize, row: usize) -> Option<&Cell> {
        if col < self.cols && row < self.rows {
            self.cells.get(row * self.cols + col)
        } else {
            None
        }
    }

    /// Write one cell; coordinates outside the grid are dropped.
    pub fn set(&mut self, col: usize, row: usize, cell: Cell) {
        if col < self.cols && row < self.rows {
            self.cells[row * self.cols + col] = cell;
        }
    }

    /// One row, left to right; `None` past the top of the grid.
    pub fn row(&self, row: usize) -> Option<&[Cell]> {
        if row >= self.rows {
            return None;
        }
        let start = row * self.cols;
        self.cells.get(start..start + self.cols)
    }

    /// Glyphs of one row without color, mostly for tests and logs.
    /// Empty for a row outside the grid.
    pub fn row_text(&self, row: usize) -> String {
        self.row(row)
            .unwrap_or_default()
            .iter()
            .map(|c| c.glyph)
            .collect()
    }

    /// Glyphs of one column read bottom to top.
    pub fn column_text(&self, col: usize) -> String {
        (0..self.rows)
            .filter_map(|row| self.get(col, row))
            .map(|c| c.glyph)
            .collect()
    }

    fn fill_right(&mut self, row: usize, col_start: usize, cells: &[Cell]) {
        for (offset, &cell) in cells.iter().enumerate() {
            self.set(col_start + offset, row, cell);
        }
    }

    fn fill_up(&mut self, col: usize, row_start: usize, cells: &[Cell]) {
        for (offset, &cell) in cells.iter().enumerate() {
            self.set(col, row_start + offset, cell);
        }
    }
}

fn colored(text: &str, role: Role) -> Vec<Cell> {
    text.chars().map(|c| Cell::new(c, role)).collect()
}

/// Tick run: every `every` cells a metric label (clipped to its slot) followed
/// by fill glyphs, the whole run clipped to `len`.
fn tick_run(len: usize, every: usize, fill: Cell, mut value_at: impl FnMut(usize) -> f64) -> Vec<Cell> {
    let mut out = Vec::with_capacity(len + every);
    for start in (0..len).step_by(every) {
        let label = metricify(value_at(start));
        let mut slot: Vec<Cell> = label
            .chars()
            .take(every)
            .map(|c| Cell::new(c, Role::Mark))
            .collect();
        slot.resize(every, fill);
        out.extend(slot);
    }
    out.truncate(len);
    out
}

/// y-axis column content, bottom to top; one label per `Y_TICK_EVERY` cells.
pub fn y_axis(binning: &Binning, palette: &Palette) -> Vec<Cell> {
    let fill = Cell::new(palette.vertical, Role::AxisLine);
    let n = &binning.normalizer;
    tick_run(binning.height(), Y_TICK_EVERY, fill, |cell| n.cell2y(cell as f64))
}

/// x-axis row content, left to right; one label per `X_TICK_EVERY` buckets.
pub fn x_axis(binning: &Binning, palette: &Palette) -> Vec<Cell> {
    let fill = Cell::new(palette.horizontal, Role::AxisLine);
    tick_run(binning.width(), X_TICK_EVERY, fill, |bucket| binning.points[bucket].x)
}

/// Build the full frame for one binning pass.
pub fn compose(config: &PlotConfig, binning: &Binning, palette: &Palette) -> Grid {
    let mut grid = Grid::new(config.cols(), config.rows());

    grid.fill_up(0, 0, &colored(config.y_label(), Role::Label));
    grid.fill_right(0, 0, &colored(config.x_label(), Role::Label));

    grid.fill_up(1, 1, &y_axis(binning, palette));
    grid.fill_right(1, 2, &x_axis(binning, palette));

    let bar = Cell::new(palette.bar, Role::Bar);
    let height = binning.height();
    let mut drawn = 0usize;
    for (i, p) in binning.points.iter().enumerate() {
        let h = (p.y_cell.floor() as usize).min(height);
        if h > 0 {
            grid.fill_up(i + 2, 2, &vec![bar; h]);
            drawn += 1;
        }
    }
    debug!(
        "composed {}x{} frame: {} buckets, {} bars",
        config.cols(),
        config.rows(),
        binning.width(),
        drawn
    );

    grid
}
