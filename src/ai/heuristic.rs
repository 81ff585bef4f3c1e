use crate::game::{Board, Cell, Side, WINDOW};

/// Search and evaluation scores. Larger is better for the side being scored.
pub type Score = i64;

/// Trait for evaluating a board position from a side's perspective.
pub trait Heuristic: Send {
    fn evaluate(&self, board: &Board, side: Side) -> Score;
}

/// Default heuristic: a center-column bonus plus a score for every 4-cell
/// window on the board.
#[derive(Debug, Clone, Copy, Default)]
pub struct WindowHeuristic;

impl WindowHeuristic {
    pub const CENTER_PIECE: Score = 10;
    pub const FOUR: Score = 100_000;
    pub const OWN_THREE: Score = 100;
    pub const OWN_TWO: Score = 10;
    pub const OPP_THREE: Score = -120;
    pub const OPP_TWO: Score = -15;

    fn score_window(own: usize, opp: usize, empty: usize) -> Score {
        match (own, opp, empty) {
            (4, _, _) => Self::FOUR,
            (3, _, 1) => Self::OWN_THREE,
            (2, _, 2) => Self::OWN_TWO,
            (_, 3, 1) => Self::OPP_THREE,
            (_, 2, 2) => Self::OPP_TWO,
            _ => 0,
        }
    }
}

impl Heuristic for WindowHeuristic {
    fn evaluate(&self, board: &Board, side: Side) -> Score {
        let own_cell = side.to_cell();
        let center = board.columns() / 2;

        let center_pieces = (0..board.rows())
            .filter(|&row| board.get(row, center) == own_cell)
            .count() as Score;
        let mut score = center_pieces * Self::CENTER_PIECE;

        for window in board.windows() {
            let own = window.iter().filter(|&&c| c == own_cell).count();
            let empty = window.iter().filter(|&&c| c == Cell::Empty).count();
            score += Self::score_window(own, WINDOW - own - empty, empty);
        }

        score
    }
}
