use std::fmt;

use crate::error::MoveError;

use super::Side;

pub const DEFAULT_ROWS: usize = 6;
pub const DEFAULT_COLUMNS: usize = 7;

/// Length of a winning line, and of every scoring window.
pub const WINDOW: usize = 4;

/// Line directions as (row step, column step): horizontal, vertical, and the
/// two diagonals.
pub const DIRECTIONS: [(isize, isize); 4] = [(0, 1), (1, 0), (1, 1), (1, -1)];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Cell {
    Empty,
    Red,
    Yellow,
}

impl Cell {
    /// The side owning this cell, if any.
    pub fn side(self) -> Option<Side> {
        match self {
            Cell::Empty => None,
            Cell::Red => Some(Side::Red),
            Cell::Yellow => Some(Side::Yellow),
        }
    }
}

/// A `rows x columns` grid. Row 0 is the bottom row; pieces fill each column
/// from row 0 upward with no gaps.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Board {
    rows: usize,
    cols: usize,
    cells: Vec<Cell>,
}

impl Board {
    /// Create a new empty board of the default 6x7 size
    pub fn new() -> Self {
        Self::with_size(DEFAULT_ROWS, DEFAULT_COLUMNS)
    }

    /// Create a new empty board with the given dimensions
    pub fn with_size(rows: usize, cols: usize) -> Self {
        Board {
            rows,
            cols,
            cells: vec![Cell::Empty; rows * cols],
        }
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn columns(&self) -> usize {
        self.cols
    }

    /// Get the cell at a specific position
    /// Row 0 is the bottom
    pub fn get(&self, row: usize, col: usize) -> Cell {
        self.cells[row * self.cols + col]
    }

    /// Lowest empty row in `col`, or `None` if the column is full or out of range
    pub fn lowest_empty_row(&self, col: usize) -> Option<usize> {
        if col >= self.cols {
            return None;
        }
        (0..self.rows).find(|&row| self.get(row, col) == Cell::Empty)
    }

    /// Check if a column is full
    pub fn is_column_full(&self, col: usize) -> bool {
        self.lowest_empty_row(col).is_none()
    }

    /// Drop a piece in a column, returns the row where it landed
    pub fn place(&mut self, col: usize, side: Side) -> Result<usize, MoveError> {
        if col >= self.cols {
            return Err(MoveError::InvalidColumn(col));
        }
        let row = self
            .lowest_empty_row(col)
            .ok_or(MoveError::ColumnFull(col))?;
        self.cells[row * self.cols + col] = side.to_cell();
        Ok(row)
    }

    /// Check if the board is completely full
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|&c| c != Cell::Empty)
    }

    /// Columns that can still take a piece, left to right
    pub fn legal_columns(&self) -> Vec<usize> {
        (0..self.cols)
            .filter(|&col| !self.is_column_full(col))
            .collect()
    }

    /// All column indices, center first and then alternating outward
    /// (`3, 2, 4, 1, 5, 0, 6` for seven columns).
    pub fn center_out_order(&self) -> Vec<usize> {
        let center = self.cols / 2;
        let mut order = Vec::with_capacity(self.cols);
        order.push(center);
        for offset in 1..=center.max(self.cols - center) {
            if let Some(left) = center.checked_sub(offset) {
                order.push(left);
            }
            if center + offset < self.cols {
                order.push(center + offset);
            }
        }
        order.truncate(self.cols);
        order
    }

    pub fn piece_count(&self) -> usize {
        self.cells.iter().filter(|&&c| c != Cell::Empty).count()
    }

    /// Every run of `WINDOW` contiguous cells along any direction.
    pub fn windows(&self) -> impl Iterator<Item = [Cell; WINDOW]> + '_ {
        DIRECTIONS.iter().flat_map(move |&(dr, dc)| {
            (0..self.rows).flat_map(move |row| {
                (0..self.cols).filter_map(move |col| self.window(row, col, dr, dc))
            })
        })
    }

    fn window(&self, row: usize, col: usize, dr: isize, dc: isize) -> Option<[Cell; WINDOW]> {
        let mut cells = [Cell::Empty; WINDOW];
        for (i, slot) in cells.iter_mut().enumerate() {
            let r = row.checked_add_signed(dr * i as isize)?;
            let c = col.checked_add_signed(dc * i as isize)?;
            if r >= self.rows || c >= self.cols {
                return None;
            }
            *slot = self.get(r, c);
        }
        Some(cells)
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in (0..self.rows).rev() {
            for col in 0..self.cols {
                let symbol = match self.get(row, col) {
                    Cell::Empty => '.',
                    Cell::Red => 'R',
                    Cell::Yellow => 'Y',
                };
                write!(f, "{symbol}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_board_is_empty() {
        let board = Board::new();
        for row in 0..DEFAULT_ROWS {
            for col in 0..DEFAULT_COLUMNS {
                assert_eq!(board.get(row, col), Cell::Empty);
            }
        }
        assert_eq!(board.piece_count(), 0);
    }

    #[test]
    fn test_place_stacks_from_bottom() {
        let mut board = Board::new();

        let row = board.place(3, Side::Red).unwrap();
        assert_eq!(row, 0);
        assert_eq!(board.get(0, 3), Cell::Red);

        let row = board.place(3, Side::Yellow).unwrap();
        assert_eq!(row, 1);
        assert_eq!(board.get(1, 3), Cell::Yellow);
        assert_eq!(board.lowest_empty_row(3), Some(2));
    }

    #[test]
    fn test_column_full() {
        let mut board = Board::new();
        for _ in 0..DEFAULT_ROWS {
            board.place(0, Side::Red).unwrap();
        }

        assert!(board.is_column_full(0));
        assert_eq!(board.lowest_empty_row(0), None);
        assert_eq!(board.place(0, Side::Yellow), Err(MoveError::ColumnFull(0)));
        assert_eq!(board.legal_columns(), vec![1, 2, 3, 4, 5, 6]);
    }

    #[test]
    fn test_invalid_column() {
        let mut board = Board::new();
        assert_eq!(board.place(7, Side::Red), Err(MoveError::InvalidColumn(7)));
        assert_eq!(board.lowest_empty_row(7), None);
    }

    #[test]
    fn test_full_board() {
        let mut board = Board::new();
        for col in 0..DEFAULT_COLUMNS {
            for _ in 0..DEFAULT_ROWS {
                board.place(col, Side::Red).unwrap();
            }
        }
        assert!(board.is_full());
        assert!(board.legal_columns().is_empty());
    }

    #[test]
    fn test_center_out_order() {
        assert_eq!(Board::new().center_out_order(), vec![3, 2, 4, 1, 5, 0, 6]);
        assert_eq!(
            Board::with_size(6, 6).center_out_order(),
            vec![3, 2, 4, 1, 5, 0]
        );
        assert_eq!(Board::with_size(4, 4).center_out_order(), vec![2, 1, 3, 0]);
    }

    #[test]
    fn test_window_count() {
        // 24 horizontal, 21 vertical, 12 per diagonal
        assert_eq!(Board::new().windows().count(), 69);
        assert_eq!(Board::with_size(4, 4).windows().count(), 10);
        assert_eq!(Board::with_size(3, 3).windows().count(), 0);
    }

    #[test]
    fn test_display_puts_bottom_row_last() {
        let mut board = Board::with_size(4, 4);
        board.place(0, Side::Red).unwrap();
        board.place(0, Side::Yellow).unwrap();
        assert_eq!(board.to_string(), "....\n....\nY...\nR...\n");
    }
}
