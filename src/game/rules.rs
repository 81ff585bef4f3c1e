//! Win and draw detection.

use super::board::{DIRECTIONS, WINDOW};
use super::{Board, Cell, Side};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameOutcome {
    InProgress,
    Winner(Side),
    Draw,
}

impl GameOutcome {
    pub fn is_terminal(self) -> bool {
        self != GameOutcome::InProgress
    }
}

/// Check if the piece at (row, col) is part of a line of at least four.
pub fn check_win(board: &Board, row: usize, col: usize) -> bool {
    let cell = board.get(row, col);
    if cell == Cell::Empty {
        return false;
    }

    DIRECTIONS.iter().any(|&(dr, dc)| {
        1 + run_length(board, row, col, dr, dc, cell) + run_length(board, row, col, -dr, -dc, cell)
            >= WINDOW
    })
}

/// Number of consecutive `cell` pieces starting next to (row, col) and
/// walking in direction (dr, dc).
fn run_length(board: &Board, row: usize, col: usize, dr: isize, dc: isize, cell: Cell) -> usize {
    let mut count = 0;
    let (mut r, mut c) = (row, col);
    loop {
        let (Some(nr), Some(nc)) = (r.checked_add_signed(dr), c.checked_add_signed(dc)) else {
            break;
        };
        if nr >= board.rows() || nc >= board.columns() || board.get(nr, nc) != cell {
            break;
        }
        count += 1;
        r = nr;
        c = nc;
    }
    count
}

/// Whether `side` owns a complete 4-window anywhere on the board.
pub fn has_won(board: &Board, side: Side) -> bool {
    let cell = side.to_cell();
    board
        .windows()
        .any(|window| window.iter().all(|&c| c == cell))
}

/// Derive the outcome from the board alone. Red's lines are checked before
/// Yellow's.
pub fn evaluate_terminal(board: &Board) -> GameOutcome {
    if has_won(board, Side::Red) {
        GameOutcome::Winner(Side::Red)
    } else if has_won(board, Side::Yellow) {
        GameOutcome::Winner(Side::Yellow)
    } else if board.is_full() {
        GameOutcome::Draw
    } else {
        GameOutcome::InProgress
    }
}

/// Whether dropping `side` into `col` wins on the spot.
pub fn wins_immediately(board: &Board, col: usize, side: Side) -> bool {
    let mut scratch = board.clone();
    match scratch.place(col, side) {
        Ok(row) => check_win(&scratch, row, col),
        Err(_) => false,
    }
}

/// Legal columns that win immediately for `side`, left to right.
pub fn winning_moves(board: &Board, side: Side) -> Vec<usize> {
    board
        .legal_columns()
        .into_iter()
        .filter(|&col| wins_immediately(board, col, side))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_horizontal_win() {
        let mut board = Board::new();
        for col in 0..4 {
            board.place(col, Side::Red).unwrap();
        }
        assert!(check_win(&board, 0, 2));
        assert!(has_won(&board, Side::Red));
        assert_eq!(evaluate_terminal(&board), GameOutcome::Winner(Side::Red));
    }

    #[test]
    fn test_vertical_win() {
        let mut board = Board::new();
        for _ in 0..4 {
            board.place(3, Side::Yellow).unwrap();
        }
        assert!(check_win(&board, 3, 3));
        assert_eq!(evaluate_terminal(&board), GameOutcome::Winner(Side::Yellow));
    }

    #[test]
    fn test_diagonal_up_win() {
        let mut board = Board::new();
        // Diagonal / from (0,0) to (3,3)
        board.place(0, Side::Red).unwrap();

        board.place(1, Side::Yellow).unwrap();
        board.place(1, Side::Red).unwrap();

        board.place(2, Side::Yellow).unwrap();
        board.place(2, Side::Yellow).unwrap();
        board.place(2, Side::Red).unwrap();

        board.place(3, Side::Yellow).unwrap();
        board.place(3, Side::Yellow).unwrap();
        board.place(3, Side::Yellow).unwrap();
        let row = board.place(3, Side::Red).unwrap();

        assert!(check_win(&board, row, 3));
        assert!(check_win(&board, 1, 1));
        assert_eq!(evaluate_terminal(&board), GameOutcome::Winner(Side::Red));
    }

    #[test]
    fn test_diagonal_down_win() {
        let mut board = Board::new();
        // Diagonal \ from (3,3) to (0,6)
        board.place(6, Side::Red).unwrap();

        board.place(5, Side::Yellow).unwrap();
        board.place(5, Side::Red).unwrap();

        board.place(4, Side::Yellow).unwrap();
        board.place(4, Side::Yellow).unwrap();
        board.place(4, Side::Red).unwrap();

        board.place(3, Side::Yellow).unwrap();
        board.place(3, Side::Yellow).unwrap();
        board.place(3, Side::Yellow).unwrap();
        let row = board.place(3, Side::Red).unwrap();

        assert!(check_win(&board, row, 3));
        assert_eq!(evaluate_terminal(&board), GameOutcome::Winner(Side::Red));
    }

    #[test]
    fn test_no_win_with_three() {
        let mut board = Board::new();
        for col in 0..3 {
            board.place(col, Side::Red).unwrap();
        }
        assert!(!check_win(&board, 0, 1));
        assert!(!has_won(&board, Side::Red));
        assert_eq!(evaluate_terminal(&board), GameOutcome::InProgress);
    }

    #[test]
    fn test_empty_cell_never_wins() {
        assert!(!check_win(&Board::new(), 0, 0));
    }

    #[test]
    fn test_vertical_three_then_four() {
        let mut board = Board::new();
        for _ in 0..3 {
            board.place(3, Side::Red).unwrap();
        }
        let outcome = evaluate_terminal(&board);
        assert_eq!(outcome, GameOutcome::InProgress);
        assert!(!outcome.is_terminal());

        board.place(3, Side::Red).unwrap();
        assert_eq!(evaluate_terminal(&board), GameOutcome::Winner(Side::Red));
    }

    /// Columns alternate color, and every two rows the colors flip, so no
    /// line of four exists anywhere.
    fn drawn_board() -> Board {
        let mut board = Board::new();
        for col in 0..7 {
            for row in 0..6 {
                let side = if (col % 2) ^ ((row / 2) % 2) == 0 {
                    Side::Red
                } else {
                    Side::Yellow
                };
                board.place(col, side).unwrap();
            }
        }
        board
    }

    #[test]
    fn test_full_board_without_line_is_draw() {
        let board = drawn_board();
        assert!(board.is_full());
        assert!(!has_won(&board, Side::Red));
        assert!(!has_won(&board, Side::Yellow));
        assert_eq!(evaluate_terminal(&board), GameOutcome::Draw);
    }

    #[test]
    fn test_full_board_with_line_is_win_not_draw() {
        let mut board = Board::new();
        for col in 0..7 {
            for _ in 0..6 {
                board.place(col, Side::Yellow).unwrap();
            }
        }
        assert!(board.is_full());
        assert_eq!(evaluate_terminal(&board), GameOutcome::Winner(Side::Yellow));
    }

    #[test]
    fn test_winning_moves() {
        let mut board = Board::new();
        for col in 1..4 {
            board.place(col, Side::Yellow).unwrap();
        }
        assert_eq!(winning_moves(&board, Side::Yellow), vec![0, 4]);
        assert!(winning_moves(&board, Side::Red).is_empty());
        assert!(wins_immediately(&board, 4, Side::Yellow));
        assert!(!wins_immediately(&board, 5, Side::Yellow));
    }
}
