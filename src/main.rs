//! Connect Five GUI
//!
//! A desktop window for two players sharing one mouse.

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use connect_five::ui::ConnectApp;
use connect_five::{GameConfig, Variant};
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Gravity-drop N-in-a-row game
#[derive(Parser, Debug)]
#[command(name = "connect_five")]
#[command(version, long_about = None)]
struct Cli {
    /// TOML file with `board_size` and `win_length`
    #[arg(long, default_value = "connect_five.toml")]
    config: PathBuf,

    /// Start from a built-in preset instead of the config file
    #[arg(long, value_enum)]
    variant: Option<Variant>,

    /// Override the board size
    #[arg(long)]
    size: Option<usize>,

    /// Override the number in a row needed to win
    #[arg(long)]
    win_length: Option<usize>,
}

impl Cli {
    fn game_config(&self) -> Result<GameConfig> {
        let mut config = match self.variant {
            Some(variant) => variant.config(),
            None => GameConfig::load_or_default(&self.config)?,
        };
        if let Some(size) = self.size {
            config.board_size = size;
        }
        if let Some(win_length) = self.win_length {
            config.win_length = win_length;
        }
        config.validate()?;
        Ok(config)
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();
    let config = cli.game_config()?;
    info!(?config, "starting");

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([900.0, 640.0])
            .with_min_inner_size([640.0, 480.0])
            .with_title("Connect Five"),
        ..Default::default()
    };

    eframe::run_native(
        "Connect Five",
        options,
        Box::new(move |cc| Ok(Box::new(ConnectApp::new(cc, config)))),
    )
    .map_err(|e| anyhow::anyhow!("{e}"))
}
