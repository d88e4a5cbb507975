//! ASCII rectangles made of underscores and pipes.
use std::fmt;

/// A rectangle outline, `height` rows of `width` characters.
///
/// The first and last rows are underscores. Every other row has a pipe in
/// its first and last column and spaces in between.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rectangle {
    pub height: usize,
    pub width: usize,
}

impl Rectangle {
    /// The 5x10 rectangle from the homework.
    pub const HOMEWORK: Rectangle = Rectangle { height: 5, width: 10 };

    pub fn new(height: usize, width: usize) -> Self {
        Rectangle { height, width }
    }

    pub fn cell(&self, row: usize, col: usize) -> char {
        if row == 0 || row + 1 == self.height {
            '_'
        } else if col == 0 || col + 1 == self.width {
            '|'
        } else {
            ' '
        }
    }

    pub fn row(&self, row: usize) -> String {
        (0..self.width).map(|col| self.cell(row, col)).collect()
    }

    pub fn rows(&self) -> impl Iterator<Item = String> + '_ {
        (0..self.height).map(|row| self.row(row))
    }
}

impl Default for Rectangle {
    fn default() -> Self {
        Self::HOMEWORK
    }
}

/// Every row is followed by a newline.
impl fmt::Display for Rectangle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.rows() {
            writeln!(f, "{row}")?;
        }
        Ok(())
    }
}
