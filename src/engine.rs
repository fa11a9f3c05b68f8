//! Move engine: gravity-drop placement
//!
//! A mark dropped into a column falls to the lowest empty row. The engine
//! does not know whose turn it is; callers derive the mover from the move
//! number with [`player_for_move`].

use crate::board::{Board, Player, Pos};
use crate::error::{BoardError, MoveError};
use crate::rules::WinDetector;

/// Player to move after `move_number` moves have been made. X moves on even
/// numbers, O on odd.
#[inline]
pub fn player_for_move(move_number: usize) -> Player {
    if move_number % 2 == 0 {
        Player::X
    } else {
        Player::O
    }
}

/// Drop `player`'s mark into `column`, producing the next snapshot.
///
/// Rejected when the column is off the board, when `board` already has a
/// winning line, or when the column has no empty row left.
pub fn apply_move(
    board: &Board,
    detector: &WinDetector,
    column: usize,
    player: Player,
) -> Result<Board, MoveError> {
    let size = board.size();
    if column >= size {
        return Err(BoardError::IndexError {
            row: size.saturating_sub(1),
            col: column,
            size,
        }
        .into());
    }

    if let Some(winner) = detector.winner(board) {
        return Err(MoveError::GameAlreadyWon { winner });
    }

    let row = board
        .lowest_empty_row(column)
        .ok_or(MoveError::ColumnFull { column })?;

    Ok(board.with_placement(Pos::new(row, column).index(size), player.cell())?)
}
