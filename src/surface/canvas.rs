//! Character-cell canvas for terminal output.
//!
//! Stimulus coordinates `[0, width) x [0, height)` are mapped onto a grid of
//! `cols x rows` terminal cells. A cell is painted when its center lies inside
//! a drawn ellipse; cells within one cell of the ellipse edge take the stroke
//! color, inner cells the fill color. Shapes smaller than a cell still paint
//! the cell under their center so no point disappears.

use ratatui::style::Color;

use super::{Ellipse, Surface};
use crate::scheme::PointStyle;
use crate::theme::{fg_ansi, ANSI_RESET};

const FILL_CHAR: char = '█';
const DOT_CHAR: char = '●';

/// A painted terminal cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cell {
    pub ch: char,
    pub fg: Color,
}

/// Terminal cell grid that gaze points are rasterized into.
#[derive(Debug, Clone)]
pub struct CellCanvas {
    cols: usize,
    rows: usize,
    width: f64,
    height: f64,
    cells: Vec<Option<Cell>>,
}

impl CellCanvas {
    /// Create a canvas of `cols x rows` cells covering a `width x height`
    /// stimulus area.
    pub fn new(cols: usize, rows: usize, width: f64, height: f64) -> Self {
        Self {
            cols,
            rows,
            width: width.max(1.0),
            height: height.max(1.0),
            cells: vec![None; cols * rows],
        }
    }

    /// Change the cell grid size (terminal resize). Clears the canvas.
    pub fn resize(&mut self, cols: usize, rows: usize) {
        self.cols = cols;
        self.rows = rows;
        self.cells = vec![None; cols * rows];
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Painted cell at a grid position, if any.
    pub fn cell(&self, col: usize, row: usize) -> Option<Cell> {
        if col >= self.cols || row >= self.rows {
            return None;
        }
        self.cells[row * self.cols + col]
    }

    /// Number of painted cells.
    pub fn painted(&self) -> usize {
        self.cells.iter().filter(|c| c.is_some()).count()
    }

    fn cell_size(&self) -> (f64, f64) {
        (
            self.width / self.cols.max(1) as f64,
            self.height / self.rows.max(1) as f64,
        )
    }

    fn paint(&mut self, col: usize, row: usize, cell: Cell) {
        if col < self.cols && row < self.rows {
            self.cells[row * self.cols + col] = Some(cell);
        }
    }

    /// Write the canvas as ANSI text, starting at screen row `top` (0-indexed).
    pub fn render_ansi(&self, output: &mut String, top: u16) {
        for row in 0..self.rows {
            output.push_str(&format!("\x1b[{};1H", top as usize + row + 1));
            let mut current: Option<Color> = None;

            for col in 0..self.cols {
                match self.cells[row * self.cols + col] {
                    Some(cell) => {
                        if current != Some(cell.fg) {
                            output.push_str(&fg_ansi(cell.fg));
                            current = Some(cell.fg);
                        }
                        output.push(cell.ch);
                    }
                    None => output.push(' '),
                }
            }
            output.push_str(ANSI_RESET);
        }
    }
}

impl Surface for CellCanvas {
    fn clear(&mut self) {
        self.cells.iter_mut().for_each(|c| *c = None);
    }

    fn ellipse(&mut self, shape: Ellipse, style: PointStyle) {
        if self.cols == 0 || self.rows == 0 {
            return;
        }
        let (cw, ch) = self.cell_size();
        let rx = shape.rx.abs();
        let ry = shape.ry.abs();

        let col_range = |lo: f64, hi: f64| {
            let first = (lo / cw).floor().max(0.0) as usize;
            let last = ((hi / cw).floor().max(0.0) as usize).min(self.cols - 1);
            first..=last
        };
        let row_range = |lo: f64, hi: f64| {
            let first = (lo / ch).floor().max(0.0) as usize;
            let last = ((hi / ch).floor().max(0.0) as usize).min(self.rows - 1);
            first..=last
        };

        let mut painted_any = false;
        if rx > 0.0 && ry > 0.0 && shape.cx + rx >= 0.0 && shape.cy + ry >= 0.0 {
            let inner_rx = rx - cw;
            let inner_ry = ry - ch;
            let mut hits = Vec::new();

            for row in row_range(shape.cy - ry, shape.cy + ry) {
                for col in col_range(shape.cx - rx, shape.cx + rx) {
                    let x = (col as f64 + 0.5) * cw;
                    let y = (row as f64 + 0.5) * ch;
                    if norm_dist(x, y, shape.cx, shape.cy, rx, ry) > 1.0 {
                        continue;
                    }
                    let on_edge = inner_rx <= 0.0
                        || inner_ry <= 0.0
                        || norm_dist(x, y, shape.cx, shape.cy, inner_rx, inner_ry) > 1.0;
                    let fg = if on_edge { style.stroke } else { style.fill };
                    hits.push((col, row, Cell { ch: FILL_CHAR, fg }));
                }
            }

            painted_any = !hits.is_empty();
            for (col, row, cell) in hits {
                self.paint(col, row, cell);
            }
        }

        if !painted_any && shape.cx >= 0.0 && shape.cy >= 0.0 {
            let col = (shape.cx / cw) as usize;
            let row = (shape.cy / ch) as usize;
            self.paint(
                col,
                row,
                Cell {
                    ch: DOT_CHAR,
                    fg: style.stroke,
                },
            );
        }
    }
}

/// Squared normalized distance of `(x, y)` from an ellipse center.
fn norm_dist(x: f64, y: f64, cx: f64, cy: f64, rx: f64, ry: f64) -> f64 {
    let dx = (x - cx) / rx;
    let dy = (y - cy) / ry;
    dx * dx + dy * dy
}

#[cfg(test)]
mod tests {
    use super::*;

    const STYLE: PointStyle = PointStyle::new(Color::LightGreen, Color::Green);

    #[test]
    fn new_canvas_is_blank() {
        let canvas = CellCanvas::new(10, 5, 100.0, 50.0);
        assert_eq!(canvas.painted(), 0);
        assert_eq!(canvas.cols(), 10);
        assert_eq!(canvas.rows(), 5);
    }

    #[test]
    fn small_point_paints_cell_under_center() {
        // Each cell is 10x10 units; radius 1 cannot reach any cell center.
        let mut canvas = CellCanvas::new(10, 5, 100.0, 50.0);
        canvas.circle(23.0, 12.0, 1.0, STYLE);

        assert_eq!(canvas.painted(), 1);
        assert_eq!(
            canvas.cell(2, 1),
            Some(Cell {
                ch: DOT_CHAR,
                fg: Color::Green
            })
        );
    }

    #[test]
    fn large_circle_has_fill_and_stroke() {
        let mut canvas = CellCanvas::new(20, 20, 20.0, 20.0);
        canvas.circle(10.0, 10.0, 6.0, STYLE);

        let center = canvas.cell(10, 10).unwrap();
        assert_eq!(center.fg, Color::LightGreen);
        let edge = canvas.cell(4, 10).unwrap();
        assert_eq!(edge.fg, Color::Green);
        assert!(canvas.cell(0, 0).is_none());
    }

    #[test]
    fn clear_erases_everything() {
        let mut canvas = CellCanvas::new(10, 10, 10.0, 10.0);
        canvas.circle(5.0, 5.0, 3.0, STYLE);
        assert!(canvas.painted() > 0);
        canvas.clear();
        assert_eq!(canvas.painted(), 0);
    }

    #[test]
    fn points_outside_canvas_are_clipped() {
        let mut canvas = CellCanvas::new(10, 10, 10.0, 10.0);
        canvas.circle(-50.0, 5.0, 1.0, STYLE);
        canvas.circle(500.0, 500.0, 1.0, STYLE);
        assert_eq!(canvas.painted(), 0);
    }

    #[test]
    fn resize_changes_grid_and_clears() {
        let mut canvas = CellCanvas::new(10, 10, 10.0, 10.0);
        canvas.circle(5.0, 5.0, 3.0, STYLE);
        canvas.resize(4, 2);
        assert_eq!(canvas.cols(), 4);
        assert_eq!(canvas.rows(), 2);
        assert_eq!(canvas.painted(), 0);
    }

    #[test]
    fn render_ansi_positions_each_row() {
        let mut canvas = CellCanvas::new(3, 2, 3.0, 2.0);
        canvas.circle(0.2, 0.2, 0.1, STYLE);

        let mut out = String::new();
        canvas.render_ansi(&mut out, 0);

        assert!(out.starts_with("\x1b[1;1H"));
        assert!(out.contains("\x1b[2;1H"));
        assert!(out.contains(DOT_CHAR));
        assert!(out.contains("\x1b[32m"));
    }
}
