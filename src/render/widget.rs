//! src/render/widget.rs
//!
//! ratatui adapter so a composed frame can be drawn inside a TUI layout
//! instead of printed to stdout.

use ratatui::{buffer::Buffer, layout::Rect, style::Style, widgets::Widget};

use super::grid::Grid;
use super::palette::Palette;

/// Blits a [`Grid`] into a ratatui buffer.
///
/// The grid's bottom-left cell lands on the area's bottom-left; whatever does
/// not fit in the area is clipped from the top and the right.
pub struct GridWidget<'a> {
    pub grid: &'a Grid,
    pub palette: &'a Palette,
}

impl<'a> GridWidget<'a> {
    pub fn new(grid: &'a Grid, palette: &'a Palette) -> Self {
        Self { grid, palette }
    }
}

impl Widget for GridWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let rows = self.grid.rows().min(area.height as usize);
        let cols = self.grid.cols().min(area.width as usize);
        for row in 0..rows {
            let y = area.bottom() - 1 - row as u16;
            let cells = self.grid.row(row).unwrap_or_default();
            for (col, cell) in cells.iter().take(cols).enumerate() {
                let x = area.x + col as u16;
                if let Some(target) = buf.cell_mut((x, y)) {
                    target.set_char(cell.glyph);
                    if let Some(role) = cell.role {
                        target.set_style(Style::default().fg(self.palette.color(role)));
                    }
                }
            }
        }
    }
}
