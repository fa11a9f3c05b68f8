//! Main application for the GUI

use eframe::egui;
use egui::{
    CentralPanel, Context, CornerRadius, Frame, RichText, ScrollArea, SidePanel, TopBottomPanel,
};

use crate::game::{move_label, Game, GameStatus, GameView};
use crate::{GameConfig, Player, Variant};
use super::board_view::BoardView;
use super::theme::*;

/// Something the user asked for this frame
enum Action {
    Column(usize),
    Cell(usize),
    Jump(usize),
    Reset,
    NewGame(GameConfig),
}

/// Main application
pub struct ConnectApp {
    game: Game,
    board_view: BoardView,
}

impl ConnectApp {
    pub fn new(_cc: &eframe::CreationContext<'_>, config: GameConfig) -> Self {
        Self {
            game: Game::new(config),
            board_view: BoardView::default(),
        }
    }

    /// Feed one input to the driver. Rejected inputs are no-ops; the driver
    /// already logs why.
    fn apply(&mut self, action: Action) {
        match action {
            Action::Column(col) => {
                let _ = self.game.select_column(col);
            }
            Action::Cell(index) => {
                let _ = self.game.select_cell(index);
            }
            Action::Jump(index) => {
                let _ = self.game.select_history_index(index);
            }
            Action::Reset => self.game.reset(),
            Action::NewGame(config) => self.game = Game::new(config),
        }
    }

    /// Render the top menu bar
    fn render_menu_bar(&self, ctx: &Context, actions: &mut Vec<Action>) {
        TopBottomPanel::top("menu_bar").show(ctx, |ui| {
            egui::menu::bar(ui, |ui| {
                ui.menu_button("Game", |ui| {
                    for variant in Variant::ALL {
                        if ui.button(format!("New Game: {}", variant.name())).clicked() {
                            actions.push(Action::NewGame(variant.config()));
                            ui.close_menu();
                        }
                    }
                    ui.separator();
                    if ui.button("Reset (R)").clicked() {
                        actions.push(Action::Reset);
                        ui.close_menu();
                    }
                });

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    let config = self.game.config();
                    ui.label(format!(
                        "{0}x{0} board, {1} in a row",
                        config.board_size, config.win_length
                    ));
                });
            });
        });
    }

    /// Render the side panel with status and move history
    fn render_side_panel(&self, ctx: &Context, view: &GameView, actions: &mut Vec<Action>) {
        SidePanel::right("info_panel")
            .min_width(220.0)
            .max_width(260.0)
            .frame(Frame::new().fill(PANEL_BG).inner_margin(8.0))
            .show(ctx, |ui| {
                ui.add_space(12.0);
                ui.label(RichText::new("CONNECT").size(22.0).strong().color(TEXT_PRIMARY));
                ui.add_space(12.0);

                self.render_status_card(ui, view);
                ui.add_space(10.0);

                Self::card_frame().show(ui, |ui| {
                    if ui.button("Reset").clicked() {
                        actions.push(Action::Reset);
                    }
                });
                ui.add_space(10.0);

                Self::render_history_card(ui, view, actions);
            });
    }

    /// Helper to create a card frame
    fn card_frame() -> Frame {
        Frame::new()
            .fill(CARD_BG)
            .corner_radius(CornerRadius::same(8))
            .inner_margin(12.0)
    }

    fn render_status_card(&self, ui: &mut egui::Ui, view: &GameView) {
        Self::card_frame().show(ui, |ui| {
            ui.set_min_width(ui.available_width());
            ui.label(RichText::new("STATUS").size(10.0).color(TEXT_MUTED));
            ui.add_space(6.0);

            let color = match view.status {
                GameStatus::Winner(_) => WIN_HIGHLIGHT,
                GameStatus::Next(Player::X) => X_DISC,
                GameStatus::Next(Player::O) => O_DISC,
                GameStatus::Draw => TEXT_SECONDARY,
            };
            ui.label(RichText::new(view.status.to_string()).size(18.0).strong().color(color));

            ui.add_space(4.0);
            ui.label(
                RichText::new(format!("Move #{} of {}", view.cursor, view.history_len - 1))
                    .size(11.0)
                    .color(TEXT_SECONDARY),
            );
        });
    }

    /// One button per history entry; the current one is highlighted
    fn render_history_card(ui: &mut egui::Ui, view: &GameView, actions: &mut Vec<Action>) {
        Self::card_frame().show(ui, |ui| {
            ui.set_min_width(ui.available_width());
            ui.label(RichText::new("MOVES").size(10.0).color(TEXT_MUTED));
            ui.add_space(6.0);

            ScrollArea::vertical().show(ui, |ui| {
                for index in 0..view.history_len {
                    let current = index == view.cursor;
                    let fill = if current { BUTTON_ACTIVE } else { BUTTON_BG };
                    let text = RichText::new(move_label(index)).size(12.0).color(TEXT_PRIMARY);
                    if ui.add(egui::Button::new(text).fill(fill)).clicked() {
                        actions.push(Action::Jump(index));
                    }
                }
            });
        });
    }

    /// Render the main board
    fn render_board(&mut self, ctx: &Context, view: &GameView, actions: &mut Vec<Action>) {
        CentralPanel::default().show(ctx, |ui| {
            ui.vertical_centered(|ui| {
                if let Some(index) = self.board_view.show(ui, view) {
                    actions.push(Action::Cell(index));
                }
            });
        });
    }

    /// Keyboard shortcuts: 1-9 drop into a column, arrows step through
    /// history, R resets
    fn handle_input(ctx: &Context, view: &GameView, actions: &mut Vec<Action>) {
        const COLUMN_KEYS: [egui::Key; 9] = [
            egui::Key::Num1,
            egui::Key::Num2,
            egui::Key::Num3,
            egui::Key::Num4,
            egui::Key::Num5,
            egui::Key::Num6,
            egui::Key::Num7,
            egui::Key::Num8,
            egui::Key::Num9,
        ];

        ctx.input(|i| {
            for (col, key) in COLUMN_KEYS.iter().enumerate() {
                if i.key_pressed(*key) {
                    actions.push(Action::Column(col));
                }
            }

            if i.key_pressed(egui::Key::ArrowLeft) && view.cursor > 0 {
                actions.push(Action::Jump(view.cursor - 1));
            }
            if i.key_pressed(egui::Key::ArrowRight) {
                actions.push(Action::Jump(view.cursor + 1));
            }

            if i.key_pressed(egui::Key::R) {
                actions.push(Action::Reset);
            }
        });
    }
}

impl eframe::App for ConnectApp {
    fn update(&mut self, ctx: &Context, _frame: &mut eframe::Frame) {
        let view = self.game.view();
        let mut actions = Vec::new();

        Self::handle_input(ctx, &view, &mut actions);

        self.render_menu_bar(ctx, &mut actions);
        self.render_side_panel(ctx, &view, &mut actions);
        self.render_board(ctx, &view, &mut actions);

        if !actions.is_empty() {
            for action in actions {
                self.apply(action);
            }
            ctx.request_repaint();
        }
    }
}
