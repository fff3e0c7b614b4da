//! Fixed-size character grid that sprites are composited onto.

use crate::entities::{Position, Sprite};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FrameBuffer {
    height: usize,
    width: usize,
    cells: Vec<char>,
}

impl FrameBuffer {
    pub fn new(height: u16, width: u16) -> Self {
        let (height, width) = (height as usize, width as usize);
        FrameBuffer {
            height,
            width,
            cells: vec![' '; height * width],
        }
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn width(&self) -> usize {
        self.width
    }

    #[inline]
    fn idx(&self, row: i32, col: i32) -> Option<usize> {
        if row < 0 || col < 0 {
            return None;
        }
        let (row, col) = (row as usize, col as usize);
        if row >= self.height || col >= self.width {
            return None;
        }
        Some(row * self.width + col)
    }

    pub fn get(&self, row: i32, col: i32) -> Option<char> {
        self.idx(row, col).map(|i| self.cells[i])
    }

    /// Reset every cell to a space.
    pub fn clear(&mut self) {
        self.cells.fill(' ');
    }

    /// Copy `sprite` into the grid with its top-left corner at `origin`.
    ///
    /// Cells falling outside the grid are dropped. Short rows leave the
    /// cells past their end untouched.
    pub fn composite(&mut self, origin: Position, sprite: &Sprite) {
        for (dr, line) in sprite.rows().iter().enumerate() {
            let row = origin.row + dr as i32;
            for (dc, &ch) in line.iter().enumerate() {
                if let Some(i) = self.idx(row, origin.col + dc as i32) {
                    self.cells[i] = ch;
                }
            }
        }
    }

    pub fn row_text(&self, row: usize) -> String {
        self.cells[row * self.width..(row + 1) * self.width]
            .iter()
            .collect()
    }

    /// The whole grid, one line per row, every row newline-terminated.
    pub fn render(&self) -> String {
        let mut out = String::with_capacity(self.height * (self.width + 1));
        for row in 0..self.height {
            out.extend(&self.cells[row * self.width..(row + 1) * self.width]);
            out.push('\n');
        }
        out
    }
}
