//! GUI module for the game
//!
//! This module provides a native Rust GUI using egui/eframe. It only talks to
//! the [`crate::Game`] driver and redraws from [`crate::GameView`] each frame.

mod app;
mod board_view;
mod theme;

pub use app::ConnectApp;
