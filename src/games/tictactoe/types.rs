//! Core domain types for tic-tac-toe.

use super::action::MoveError;
use derive_more::{Display, Error};
use derive_new::new;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use tracing::instrument;

/// Width and height of the board.
pub const BOARD_SIZE: usize = 3;

/// A player's symbol on the board.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumIter,
    clap::ValueEnum,
)]
#[serde(rename_all = "snake_case")]
pub enum Mark {
    /// The search-driven opponent (maximizing side, rendered `X`).
    #[strum(serialize = "Computer")]
    Computer,
    /// The person at the console (minimizing side, rendered `O`).
    #[strum(serialize = "Human")]
    Human,
}

impl Mark {
    /// Returns the opponent mark.
    pub fn opponent(self) -> Self {
        match self {
            Mark::Computer => Mark::Human,
            Mark::Human => Mark::Computer,
        }
    }

    /// Symbol used when rendering the board.
    pub fn symbol(self) -> char {
        match self {
            Mark::Computer => 'X',
            Mark::Human => 'O',
        }
    }

    /// True for the side the search maximizes.
    pub fn is_maximizing(self) -> bool {
        matches!(self, Mark::Computer)
    }

    /// The mark that moves when the search is maximizing (or not).
    pub fn to_move(maximizing: bool) -> Self {
        if maximizing { Mark::Computer } else { Mark::Human }
    }
}

/// A cell on the tic-tac-toe board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Cell {
    /// Empty cell.
    Empty,
    /// Cell occupied by a mark.
    Occupied(Mark),
}

/// A (row, col) coordinate, 0-indexed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, new)]
pub struct Move {
    /// Row index (0-2).
    pub row: usize,
    /// Column index (0-2).
    pub col: usize,
}

impl Move {
    /// Maps a console cell number (1-9) to a coordinate.
    ///
    /// Cells are numbered left to right, top to bottom.
    pub fn from_cell_number(n: usize) -> Option<Self> {
        if (1..=BOARD_SIZE * BOARD_SIZE).contains(&n) {
            Some(Self::new((n - 1) / BOARD_SIZE, (n - 1) % BOARD_SIZE))
        } else {
            None
        }
    }

    /// The console cell number (1-9) of this coordinate.
    pub fn cell_number(self) -> usize {
        self.row * BOARD_SIZE + self.col + 1
    }

    fn in_bounds(self) -> bool {
        self.row < BOARD_SIZE && self.col < BOARD_SIZE
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// 3x3 tic-tac-toe board, row-major.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Board {
    cells: [[Cell; BOARD_SIZE]; BOARD_SIZE],
}

impl Board {
    /// Creates a new empty board.
    pub fn new() -> Self {
        Self {
            cells: [[Cell::Empty; BOARD_SIZE]; BOARD_SIZE],
        }
    }

    /// Gets the cell at the given coordinate, `None` if out of bounds.
    pub fn get(&self, mv: Move) -> Option<Cell> {
        self.cells.get(mv.row).and_then(|row| row.get(mv.col)).copied()
    }

    /// Checks if a cell is empty (out-of-bounds cells are not).
    pub fn is_empty(&self, mv: Move) -> bool {
        matches!(self.get(mv), Some(Cell::Empty))
    }

    /// Every empty coordinate in row-major order.
    ///
    /// Move enumeration in the search follows this order, so ties between
    /// equally scored moves resolve to the first cell in a row-major scan.
    pub fn empty_cells(&self) -> Vec<Move> {
        let mut moves = Vec::with_capacity(BOARD_SIZE * BOARD_SIZE);
        for (row, cells) in self.cells.iter().enumerate() {
            for (col, cell) in cells.iter().enumerate() {
                if *cell == Cell::Empty {
                    moves.push(Move::new(row, col));
                }
            }
        }
        moves
    }

    /// Checks if every cell is occupied.
    pub fn is_full(&self) -> bool {
        self.cells.iter().flatten().all(|c| *c != Cell::Empty)
    }

    /// Number of cells carrying `mark`.
    pub fn cell_count(&self, mark: Mark) -> usize {
        self.cells
            .iter()
            .flatten()
            .filter(|c| **c == Cell::Occupied(mark))
            .count()
    }

    /// Places `mark` at `mv`.
    ///
    /// # Errors
    ///
    /// Returns `MoveError::OutOfBounds` for a coordinate off the board and
    /// `MoveError::InvalidMove` if the cell is already occupied.
    #[instrument(skip(self))]
    pub fn apply(&mut self, mv: Move, mark: Mark) -> Result<(), MoveError> {
        if !mv.in_bounds() {
            return Err(MoveError::OutOfBounds(mv));
        }
        if !self.is_empty(mv) {
            return Err(MoveError::InvalidMove(mv));
        }
        self.place(mv, mark);
        Ok(())
    }

    /// Resets the cell at `mv` to empty. Coordinates off the board are ignored.
    pub fn undo(&mut self, mv: Move) {
        if let Some(cell) = self.cells.get_mut(mv.row).and_then(|row| row.get_mut(mv.col)) {
            *cell = Cell::Empty;
        }
    }

    /// Unchecked placement for callers that enumerate via `empty_cells`.
    pub(crate) fn place(&mut self, mv: Move, mark: Mark) {
        debug_assert_eq!(self.cells[mv.row][mv.col], Cell::Empty, "{mv} occupied");
        self.cells[mv.row][mv.col] = Cell::Occupied(mark);
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        const SEPARATOR: &str = "-------------";
        writeln!(f, "{SEPARATOR}")?;
        for row in &self.cells {
            write!(f, "|")?;
            for cell in row {
                let symbol = match cell {
                    Cell::Empty => ' ',
                    Cell::Occupied(mark) => mark.symbol(),
                };
                write!(f, " {symbol} |")?;
            }
            writeln!(f)?;
            writeln!(f, "{SEPARATOR}")?;
        }
        Ok(())
    }
}

/// Error parsing the compact board notation.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
pub enum BoardParseError {
    /// The notation did not describe exactly nine cells.
    #[display("Expected 9 cells, found {count}")]
    CellCount {
        /// Number of cells found.
        count: usize,
    },
    /// A character other than `X`, `O` or `.` was found.
    #[display("Unknown cell character {found:?}")]
    UnknownCell {
        /// The offending character.
        found: char,
    },
}

impl FromStr for Board {
    type Err = BoardParseError;

    /// Parses `X`, `O` and `.` cells in row-major order.
    ///
    /// `/` and whitespace are ignored, so `"XX./O../O.."` and `"XX.O..O.."`
    /// describe the same board.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let cells = s
            .chars()
            .filter(|c| *c != '/' && !c.is_whitespace())
            .map(|c| match c.to_ascii_uppercase() {
                'X' => Ok(Cell::Occupied(Mark::Computer)),
                'O' => Ok(Cell::Occupied(Mark::Human)),
                '.' => Ok(Cell::Empty),
                found => Err(BoardParseError::UnknownCell { found }),
            })
            .collect::<Result<Vec<_>, _>>()?;

        if cells.len() != BOARD_SIZE * BOARD_SIZE {
            return Err(BoardParseError::CellCount { count: cells.len() });
        }

        let mut board = Board::new();
        for (i, cell) in cells.into_iter().enumerate() {
            board.cells[i / BOARD_SIZE][i % BOARD_SIZE] = cell;
        }
        Ok(board)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_cells_row_major() {
        let board = Board::new();
        let cells = board.empty_cells();
        assert_eq!(cells.len(), 9);
        assert_eq!(cells[0], Move::new(0, 0));
        assert_eq!(cells[3], Move::new(1, 0));
        assert_eq!(cells[8], Move::new(2, 2));
    }

    #[test]
    fn test_apply_rejects_occupied() {
        let mut board = Board::new();
        board.apply(Move::new(1, 1), Mark::Human).unwrap();
        let err = board.apply(Move::new(1, 1), Mark::Computer).unwrap_err();
        assert_eq!(err, MoveError::InvalidMove(Move::new(1, 1)));
        assert_eq!(board.get(Move::new(1, 1)), Some(Cell::Occupied(Mark::Human)));
    }

    #[test]
    fn test_apply_rejects_out_of_bounds() {
        let mut board = Board::new();
        let err = board.apply(Move::new(3, 0), Mark::Human).unwrap_err();
        assert_eq!(err, MoveError::OutOfBounds(Move::new(3, 0)));
    }

    #[test]
    fn test_undo_off_board_is_ignored() {
        let mut board: Board = "X../.O./...".parse().unwrap();
        let before = board.clone();
        board.undo(Move::new(3, 0));
        board.undo(Move::new(0, 3));
        assert_eq!(board, before);
    }

    #[test]
    fn test_cell_number_mapping() {
        assert_eq!(Move::from_cell_number(1), Some(Move::new(0, 0)));
        assert_eq!(Move::from_cell_number(5), Some(Move::new(1, 1)));
        assert_eq!(Move::from_cell_number(9), Some(Move::new(2, 2)));
        assert_eq!(Move::from_cell_number(0), None);
        assert_eq!(Move::from_cell_number(10), None);
        assert_eq!(Move::new(2, 0).cell_number(), 7);
    }

    #[test]
    fn test_parse_notation() {
        let board: Board = "XX./O../O..".parse().unwrap();
        assert_eq!(board.get(Move::new(0, 1)), Some(Cell::Occupied(Mark::Computer)));
        assert_eq!(board.get(Move::new(2, 0)), Some(Cell::Occupied(Mark::Human)));
        assert_eq!(board.cell_count(Mark::Computer), 2);
        assert_eq!(board.cell_count(Mark::Human), 2);
    }

    #[test]
    fn test_parse_errors() {
        assert_eq!(
            "XX.".parse::<Board>(),
            Err(BoardParseError::CellCount { count: 3 })
        );
        assert_eq!(
            "XX?/.../...".parse::<Board>(),
            Err(BoardParseError::UnknownCell { found: '?' })
        );
    }

    #[test]
    fn test_display_rendering() {
        let board: Board = "X.O/.../...".parse().unwrap();
        let rendered = board.to_string();
        let lines: Vec<_> = rendered.lines().collect();
        assert_eq!(lines.len(), 7);
        assert_eq!(lines[0], "-------------");
        assert_eq!(lines[1], "| X |   | O |");
        assert_eq!(lines[3], "|   |   |   |");
    }
}
