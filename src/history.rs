//! Move history with a time-travel cursor
//!
//! `GameState` is a plain value: every operation takes the current state and
//! returns the next one. Snapshots are shared between states through `Arc`,
//! so branching off an earlier cursor only copies pointers.

use std::sync::Arc;

use crate::board::{Board, Player};
use crate::engine::player_for_move;
use crate::error::HistoryError;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    /// Never empty; entry 0 is the empty starting board
    history: Vec<Arc<Board>>,
    /// Always `< history.len()`
    cursor: usize,
}

impl GameState {
    /// Fresh game: a single empty board, cursor at 0
    pub fn reset(size: usize) -> Self {
        Self {
            history: vec![Arc::new(Board::empty(size))],
            cursor: 0,
        }
    }

    /// Append `board` after the cursor.
    ///
    /// Anything after the cursor is dropped first, so undoing and then moving
    /// discards the old future.
    pub fn commit(&self, board: Board) -> Self {
        let mut history = self.history[..=self.cursor].to_vec();
        history.push(Arc::new(board));
        let cursor = history.len() - 1;
        Self { history, cursor }
    }

    /// Move the cursor to `index` without touching the history
    pub fn jump(&self, index: usize) -> Result<Self, HistoryError> {
        if index >= self.history.len() {
            return Err(HistoryError::IndexOutOfRange {
                index,
                len: self.history.len(),
            });
        }
        Ok(Self {
            history: self.history.clone(),
            cursor: index,
        })
    }

    /// Snapshot at the cursor
    #[inline]
    pub fn current(&self) -> &Arc<Board> {
        &self.history[self.cursor]
    }

    #[inline]
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Number of snapshots, including the starting board
    #[inline]
    pub fn len(&self) -> usize {
        self.history.len()
    }

    /// Always false; kept alongside `len`
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.history.is_empty()
    }

    pub fn history(&self) -> &[Arc<Board>] {
        &self.history
    }

    /// Moves made to reach the current snapshot
    #[inline]
    pub fn move_number(&self) -> usize {
        self.cursor
    }

    /// Square filled by the move that produced the current snapshot
    pub fn last_move(&self) -> Option<usize> {
        let previous = self.history.get(self.cursor.checked_sub(1)?)?;
        let current = self.current();
        (0..current.cells().len()).find(|&i| previous.cell(i) != current.cell(i))
    }

    /// Player to move from the current snapshot
    #[inline]
    pub fn next_player(&self) -> Player {
        player_for_move(self.cursor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Cell;
    use crate::engine::apply_move;
    use crate::rules::WinDetector;

    fn play(state: &GameState, detector: &WinDetector, column: usize) -> GameState {
        let board = apply_move(state.current(), detector, column, state.next_player()).unwrap();
        state.commit(board)
    }

    #[test]
    fn test_reset() {
        let state = GameState::reset(6);
        assert_eq!(state.len(), 1);
        assert_eq!(state.cursor(), 0);
        assert_eq!(**state.current(), Board::empty(6));
        assert_eq!(state.next_player(), Player::X);
    }

    #[test]
    fn test_commit_advances_cursor() {
        let detector = WinDetector::new(6, 4);
        let state = GameState::reset(6);
        let state = play(&state, &detector, 2);
        let state = play(&state, &detector, 2);

        assert_eq!(state.len(), 3);
        assert_eq!(state.cursor(), 2);
        assert_eq!(state.current().get(5, 2), Ok(Cell::X));
        assert_eq!(state.current().get(4, 2), Ok(Cell::O));
        assert_eq!(state.next_player(), Player::X);
    }

    #[test]
    fn test_jump_restores_previous_snapshot() {
        let detector = WinDetector::new(6, 4);
        let state = play(&GameState::reset(6), &detector, 1);
        let cursor_before = state.cursor();
        let board_before = state.current().clone();

        let state = play(&state, &detector, 4);
        let state = state.jump(cursor_before).unwrap();

        assert_eq!(state.current(), &board_before);
        assert_eq!(state.len(), 3);
        assert_eq!(state.next_player(), Player::O);
    }

    #[test]
    fn test_last_move() {
        let detector = WinDetector::new(5, 5);
        let state = GameState::reset(5);
        assert_eq!(state.last_move(), None);

        let state = play(&state, &detector, 3);
        assert_eq!(state.last_move(), Some(23));
        let state = play(&state, &detector, 3);
        assert_eq!(state.last_move(), Some(18));
        assert_eq!(state.jump(1).unwrap().last_move(), Some(23));
    }

    #[test]
    fn test_jump_out_of_range() {
        let state = GameState::reset(5);
        assert_eq!(
            state.jump(1),
            Err(HistoryError::IndexOutOfRange { index: 1, len: 1 })
        );
    }

    #[test]
    fn test_commit_after_jump_truncates() {
        let detector = WinDetector::new(6, 4);
        let mut state = GameState::reset(6);
        for col in [0, 1, 2, 3] {
            state = play(&state, &detector, col);
        }
        assert_eq!(state.len(), 5);

        let state = state.jump(1).unwrap();
        let state = play(&state, &detector, 5);

        assert_eq!(state.len(), 3);
        assert_eq!(state.cursor(), 2);
        // The branch keeps move 1 and replaces move 2
        assert_eq!(state.current().get(5, 0), Ok(Cell::X));
        assert_eq!(state.current().get(5, 5), Ok(Cell::O));
        assert_eq!(state.current().get(5, 1), Ok(Cell::Empty));
    }

    #[test]
    fn test_jump_past_win_is_allowed() {
        let detector = WinDetector::new(6, 4);
        let mut state = GameState::reset(6);
        // X stacks column 0, O stacks column 1
        for col in [0, 1, 0, 1, 0, 1, 0] {
            state = play(&state, &detector, col);
        }
        assert_eq!(detector.winner(state.current()), Some(Player::X));

        let earlier = state.jump(3).unwrap();
        assert_eq!(detector.winner(earlier.current()), None);
        let back = earlier.jump(7).unwrap();
        assert_eq!(detector.winner(back.current()), Some(Player::X));
    }

    #[test]
    fn test_snapshots_are_shared() {
        let detector = WinDetector::new(5, 5);
        let state = play(&GameState::reset(5), &detector, 0);
        let next = play(&state, &detector, 1);
        assert!(Arc::ptr_eq(&state.history()[1], &next.history()[1]));
    }
}
