//! Win detection logic for tic-tac-toe.

use super::super::{Board, Cell, Mark, Move};

/// Every line of three, scanned rows first, then columns, then diagonals.
const LINES: [[(usize, usize); 3]; 8] = [
    // Rows
    [(0, 0), (0, 1), (0, 2)],
    [(1, 0), (1, 1), (1, 2)],
    [(2, 0), (2, 1), (2, 2)],
    // Columns
    [(0, 0), (1, 0), (2, 0)],
    [(0, 1), (1, 1), (2, 1)],
    [(0, 2), (1, 2), (2, 2)],
    // Diagonals
    [(0, 0), (1, 1), (2, 2)],
    [(0, 2), (1, 1), (2, 0)],
];

/// Returns the mark holding a line of three, if any.
///
/// The first complete line in scan order wins. A position reached by legal
/// alternating play never holds lines for both marks.
pub fn winner(board: &Board) -> Option<Mark> {
    let at = |(row, col): (usize, usize)| board.get(Move::new(row, col));

    for [a, b, c] in LINES {
        let cell = at(a);
        if let Some(Cell::Occupied(mark)) = cell
            && cell == at(b)
            && cell == at(c)
        {
            return Some(mark);
        }
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_winner_empty_board() {
        let board = Board::new();
        assert_eq!(winner(&board), None);
    }

    #[test]
    fn test_winner_top_row() {
        let board: Board = "XXX/OO./...".parse().unwrap();
        assert_eq!(winner(&board), Some(Mark::Computer));
    }

    #[test]
    fn test_winner_column() {
        let board: Board = "XO./XO./.O.".parse().unwrap();
        assert_eq!(winner(&board), Some(Mark::Human));
    }

    #[test]
    fn test_winner_diagonal() {
        let board: Board = "O.X/.OX/X.O".parse().unwrap();
        assert_eq!(winner(&board), Some(Mark::Human));
    }

    #[test]
    fn test_winner_anti_diagonal() {
        let board: Board = "O.X/OX./X..".parse().unwrap();
        assert_eq!(winner(&board), Some(Mark::Computer));
    }

    #[test]
    fn test_no_winner_incomplete() {
        let board: Board = "XX./.O./...".parse().unwrap();
        assert_eq!(winner(&board), None);
    }

    #[test]
    fn test_scan_order_is_rows_first() {
        // Not reachable by legal play; pins the deterministic scan order.
        let board: Board = "OOO/XXX/...".parse().unwrap();
        assert_eq!(winner(&board), Some(Mark::Human));
    }
}
