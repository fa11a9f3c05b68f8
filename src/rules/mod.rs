//! Game rules for the drop game
//!
//! A game is won by K identical marks in a row, horizontally, vertically or
//! diagonally. Gravity-drop placement lives in [`crate::engine`].

pub mod win;

// Re-exports for convenient access
pub use win::{Direction, Line, WinDetector};
