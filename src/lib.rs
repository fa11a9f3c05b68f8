//! Connect Five: a gravity-drop N-in-a-row game
//!
//! Two players take turns dropping marks into the columns of a square board.
//! A mark falls to the lowest empty row of its column, and the first player
//! to line up K marks horizontally, vertically or diagonally wins.
//! Board size and K are configurable (6x6 with four in a row, 5x5 with five,
//! and so on).
//!
//! # Architecture
//!
//! - [`board`]: Immutable board snapshots, cells and players
//! - [`rules`]: Win detection over every K-length line
//! - [`engine`]: Gravity-drop move application and turn order
//! - [`history`]: Snapshot history with a time-travel cursor
//! - [`game`]: Driver that front ends call into
//! - [`config`]: Board presets and TOML configuration
//! - [`ui`]: Desktop front end built on egui
//!
//! # Quick Start
//!
//! ```
//! use connect_five::{Game, GameConfig, Player};
//!
//! let mut game = Game::new(GameConfig { board_size: 6, win_length: 4 });
//!
//! // X and O stack columns 0 and 1; X completes four first
//! for col in [0, 1, 0, 1, 0, 1, 0] {
//!     game.select_column(col).unwrap();
//! }
//! assert_eq!(game.view().winner, Some(Player::X));
//!
//! // Step back in time and play a different move
//! game.select_history_index(6).unwrap();
//! game.select_column(2).unwrap();
//! assert_eq!(game.view().winner, None);
//! ```

pub mod board;
pub mod config;
pub mod engine;
pub mod error;
pub mod game;
pub mod history;
pub mod rules;
pub mod ui;

// Re-export commonly used types for convenience
pub use board::{Board, Cell, Player, Pos};
pub use config::{GameConfig, Variant};
pub use error::{BoardError, ConfigError, HistoryError, MoveError};
pub use game::{move_label, Game, GameStatus, GameView};
pub use history::GameState;
pub use rules::WinDetector;
