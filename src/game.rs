//! Game driver
//!
//! Owns the one live [`GameState`] and is the only thing a front end talks
//! to. Every input either succeeds and replaces the state or is rejected
//! and leaves it untouched; [`Game::view`] then describes what to draw.

use std::fmt;
use std::sync::Arc;

use tracing::{debug, info, instrument};

use crate::board::{Board, Player};
use crate::config::GameConfig;
use crate::engine::apply_move;
use crate::error::{BoardError, HistoryError, MoveError};
use crate::history::GameState;
use crate::rules::WinDetector;

/// Status line shown above the board
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    Winner(Player),
    Next(Player),
    /// Board full, nobody won
    Draw,
}

impl fmt::Display for GameStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameStatus::Winner(player) => write!(f, "Winner: {player}"),
            GameStatus::Next(player) => write!(f, "Next player: {player}"),
            GameStatus::Draw => f.write_str("Draw"),
        }
    }
}

/// Everything a front end needs to render one frame
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameView {
    pub board: Arc<Board>,
    pub history_len: usize,
    pub cursor: usize,
    pub winner: Option<Player>,
    /// Cells of the first winning line, for highlighting
    pub winning_line: Option<Vec<usize>>,
    /// Square filled by the most recent move
    pub last_move: Option<usize>,
    pub next_player: Player,
    pub status: GameStatus,
}

/// Label for the history entry at `index`
pub fn move_label(index: usize) -> String {
    if index == 0 {
        "Go to game start".to_string()
    } else {
        format!("Go to move #{index}")
    }
}

pub struct Game {
    config: GameConfig,
    detector: WinDetector,
    state: GameState,
}

impl Game {
    pub fn new(config: GameConfig) -> Self {
        info!(
            board_size = config.board_size,
            win_length = config.win_length,
            "new game"
        );
        Self {
            config,
            detector: WinDetector::new(config.board_size, config.win_length),
            state: GameState::reset(config.board_size),
        }
    }

    #[inline]
    pub fn config(&self) -> GameConfig {
        self.config
    }

    #[inline]
    pub fn state(&self) -> &GameState {
        &self.state
    }

    #[inline]
    pub fn detector(&self) -> &WinDetector {
        &self.detector
    }

    /// Drop the next player's mark into `column`
    #[instrument(skip(self))]
    pub fn select_column(&mut self, column: usize) -> Result<(), MoveError> {
        let player = self.state.next_player();
        let board = apply_move(self.state.current(), &self.detector, column, player)
            .inspect_err(|e| debug!(error = %e, "move rejected"))?;
        self.state = self.state.commit(board);
        debug!(%player, cursor = self.state.cursor(), "move committed");
        Ok(())
    }

    /// Click on any square: the mark drops in that square's column
    pub fn select_cell(&mut self, index: usize) -> Result<(), MoveError> {
        let size = self.config.board_size;
        let column = index.checked_rem(size).ok_or(BoardError::IndexError {
            row: 0,
            col: index,
            size,
        })?;
        self.select_column(column)
    }

    /// Jump to a history entry
    #[instrument(skip(self))]
    pub fn select_history_index(&mut self, index: usize) -> Result<(), HistoryError> {
        self.state = self
            .state
            .jump(index)
            .inspect_err(|e| debug!(error = %e, "jump rejected"))?;
        Ok(())
    }

    /// Start over with an empty board
    pub fn reset(&mut self) {
        debug!("reset");
        self.state = GameState::reset(self.config.board_size);
    }

    pub fn winner(&self) -> Option<Player> {
        self.detector.winner(self.state.current())
    }

    pub fn status(&self) -> GameStatus {
        self.status_for(self.winner())
    }

    fn status_for(&self, winner: Option<Player>) -> GameStatus {
        match winner {
            Some(player) => GameStatus::Winner(player),
            None if self.state.current().is_full() => GameStatus::Draw,
            None => GameStatus::Next(self.state.next_player()),
        }
    }

    /// Snapshot of the game for rendering
    pub fn view(&self) -> GameView {
        let board = Arc::clone(self.state.current());
        let line = self.detector.winning_line(&board);
        let winner = line.and_then(|line| line.owner(&board));
        GameView {
            winner,
            winning_line: line.map(|line| line.cells.clone()),
            history_len: self.state.len(),
            cursor: self.state.cursor(),
            last_move: self.state.last_move(),
            next_player: self.state.next_player(),
            status: self.status_for(winner),
            board,
        }
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new(GameConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Cell;
    use crate::config::Variant;

    fn connect_four() -> Game {
        Game::new(Variant::ConnectFour.config())
    }

    #[test]
    fn test_initial_view() {
        let game = Game::default();
        let view = game.view();
        assert_eq!(view.board.cells().len(), 25);
        assert_eq!(view.history_len, 1);
        assert_eq!(view.cursor, 0);
        assert_eq!(view.winner, None);
        assert_eq!(view.status.to_string(), "Next player: X");
    }

    #[test]
    fn test_players_alternate() {
        let mut game = connect_four();
        game.select_column(0).unwrap();
        assert_eq!(game.view().status, GameStatus::Next(Player::O));
        game.select_column(0).unwrap();
        let view = game.view();
        assert_eq!(view.board.get(5, 0), Ok(Cell::X));
        assert_eq!(view.board.get(4, 0), Ok(Cell::O));
        assert_eq!(view.next_player, Player::X);
    }

    #[test]
    fn test_select_cell_uses_column() {
        let mut game = connect_four();
        // Top-left square of column 2
        game.select_cell(2).unwrap();
        assert_eq!(game.view().board.get(5, 2), Ok(Cell::X));
    }

    #[test]
    fn test_win_blocks_further_moves() {
        let mut game = connect_four();
        for col in [0, 1, 0, 1, 0, 1, 0] {
            game.select_column(col).unwrap();
        }
        let view = game.view();
        assert_eq!(view.winner, Some(Player::X));
        assert_eq!(view.status.to_string(), "Winner: X");
        assert_eq!(view.winning_line, Some(vec![12, 18, 24, 30]));

        for col in 0..6 {
            assert_eq!(
                game.select_column(col),
                Err(MoveError::GameAlreadyWon { winner: Player::X })
            );
        }
        assert_eq!(game.view().history_len, 8);
    }

    #[test]
    fn test_rejected_move_leaves_state() {
        let mut game = Game::new(GameConfig {
            board_size: 3,
            win_length: 3,
        });
        for _ in 0..3 {
            game.select_column(1).unwrap();
        }
        let before = game.state().clone();
        assert_eq!(
            game.select_column(1),
            Err(MoveError::ColumnFull { column: 1 })
        );
        assert!(game.select_column(3).is_err());
        assert_eq!(game.state(), &before);
    }

    #[test]
    fn test_time_travel_and_branch() {
        let mut game = connect_four();
        for col in [3, 3, 4, 4] {
            game.select_column(col).unwrap();
        }
        game.select_history_index(2).unwrap();
        let view = game.view();
        assert_eq!(view.cursor, 2);
        assert_eq!(view.history_len, 5);
        assert_eq!(view.next_player, Player::X);

        game.select_column(0).unwrap();
        let view = game.view();
        assert_eq!(view.history_len, 4);
        assert_eq!(view.board.get(5, 0), Ok(Cell::X));
        assert_eq!(view.board.get(5, 4), Ok(Cell::Empty));
    }

    #[test]
    fn test_select_cell_on_zero_size_board() {
        let mut game = Game::new(GameConfig {
            board_size: 0,
            win_length: 4,
        });
        assert_eq!(
            game.select_cell(0),
            Err(MoveError::Board(BoardError::IndexError {
                row: 0,
                col: 0,
                size: 0
            }))
        );
        assert_eq!(game.view().history_len, 1);
    }

    #[test]
    fn test_view_agrees_with_status() {
        let mut game = connect_four();
        for col in [2, 3, 2, 3, 2, 3, 2] {
            game.select_column(col).unwrap();
        }
        let view = game.view();
        assert_eq!(view.winner, game.winner());
        assert_eq!(view.status, game.status());
        assert_eq!(view.status, GameStatus::Winner(Player::X));
    }

    #[test]
    fn test_jump_out_of_range_rejected() {
        let mut game = connect_four();
        assert_eq!(
            game.select_history_index(1),
            Err(HistoryError::IndexOutOfRange { index: 1, len: 1 })
        );
        assert_eq!(game.view().cursor, 0);
    }

    #[test]
    fn test_reset() {
        let mut game = connect_four();
        game.select_column(2).unwrap();
        game.reset();
        let view = game.view();
        assert_eq!(view.history_len, 1);
        assert_eq!(view.board.stone_count(), 0);
        assert_eq!(view.board.size(), 6);
    }

    #[test]
    fn test_draw() {
        let mut game = Game::new(GameConfig {
            board_size: 3,
            win_length: 3,
        });
        // Fills the board without three in a row:
        // X O X
        // X O O
        // O X X
        for col in [1, 0, 0, 1, 2, 2, 0, 1, 2] {
            assert!(!game.view().board.is_full());
            game.select_column(col).unwrap();
        }
        assert_eq!(game.winner(), None);
        assert_eq!(game.status(), GameStatus::Draw);
        assert_eq!(game.status().to_string(), "Draw");
    }

    #[test]
    fn test_move_labels() {
        assert_eq!(move_label(0), "Go to game start");
        assert_eq!(move_label(3), "Go to move #3");
    }
}
