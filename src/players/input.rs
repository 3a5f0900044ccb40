//! Parsing of console move input.

use crate::games::tictactoe::{Board, Move};
use derive_more::Display;
use std::num::{IntErrorKind, ParseIntError};

/// Why a line of console input was rejected.
///
/// Every variant is recovered by prompting again.
#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum InputError {
    /// The input was not an integer.
    #[display("Invalid input! Please enter a number between 1 and 9.")]
    Parse(String),

    /// The input is an integer, as typed, that does not name a cell.
    ///
    /// Integers too large for any machine type land here too.
    #[display("Invalid move! {} is not between 1 and 9.", _0)]
    OutOfRange(String),

    /// The named cell already holds a mark.
    #[display("Invalid move! Cell {} is already taken.", _0)]
    Occupied(usize),
}

impl std::error::Error for InputError {}

/// Parses a 1-9 cell number into a move on an empty cell of `board`.
pub fn parse_move(line: &str, board: &Board) -> Result<Move, InputError> {
    let trimmed = line.trim();
    let n: i64 = trimmed.parse().map_err(|e: ParseIntError| match e.kind() {
        IntErrorKind::PosOverflow | IntErrorKind::NegOverflow => {
            InputError::OutOfRange(trimmed.to_string())
        }
        _ => InputError::Parse(trimmed.to_string()),
    })?;

    let mv = usize::try_from(n)
        .ok()
        .and_then(Move::from_cell_number)
        .ok_or_else(|| InputError::OutOfRange(trimmed.to_string()))?;

    if !board.is_empty(mv) {
        return Err(InputError::Occupied(mv.cell_number()));
    }

    Ok(mv)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::tictactoe::Mark;

    #[test]
    fn test_parse_valid_numbers() {
        let board = Board::new();
        assert_eq!(parse_move("1", &board), Ok(Move::new(0, 0)));
        assert_eq!(parse_move(" 6 \n", &board), Ok(Move::new(1, 2)));
        assert_eq!(parse_move("9", &board), Ok(Move::new(2, 2)));
    }

    #[test]
    fn test_parse_rejects_non_numeric() {
        let board = Board::new();
        assert_eq!(
            parse_move("abc", &board),
            Err(InputError::Parse("abc".to_string()))
        );
        assert!(matches!(parse_move("", &board), Err(InputError::Parse(_))));
        assert!(matches!(parse_move("2.5", &board), Err(InputError::Parse(_))));
    }

    #[test]
    fn test_parse_rejects_out_of_range() {
        let board = Board::new();
        assert_eq!(parse_move("0", &board), Err(InputError::OutOfRange("0".into())));
        assert_eq!(parse_move("10", &board), Err(InputError::OutOfRange("10".into())));
        assert_eq!(parse_move("-3", &board), Err(InputError::OutOfRange("-3".into())));
    }

    #[test]
    fn test_parse_huge_integer_is_out_of_range() {
        let board = Board::new();
        assert_eq!(
            parse_move("99999999999999999999", &board),
            Err(InputError::OutOfRange("99999999999999999999".into()))
        );
        assert_eq!(
            parse_move("-99999999999999999999", &board),
            Err(InputError::OutOfRange("-99999999999999999999".into()))
        );
        assert_eq!(
            InputError::OutOfRange("99999999999999999999".into()).to_string(),
            "Invalid move! 99999999999999999999 is not between 1 and 9."
        );
    }

    #[test]
    fn test_parse_rejects_occupied() {
        let mut board = Board::new();
        board.apply(Move::new(1, 1), Mark::Computer).unwrap();
        assert_eq!(parse_move("5", &board), Err(InputError::Occupied(5)));
    }

    #[test]
    fn test_error_messages_prompt_again() {
        assert_eq!(
            InputError::Parse("x".into()).to_string(),
            "Invalid input! Please enter a number between 1 and 9."
        );
        assert!(InputError::Occupied(3).to_string().starts_with("Invalid move!"));
    }
}
