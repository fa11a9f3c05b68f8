//! Board rendering for the GUI

use crate::game::GameView;
use crate::{Board, Cell, Pos};
use egui::{Color32, CornerRadius, Painter, Pos2, Rect, Sense, Stroke, Vec2};

use super::theme::*;

/// Board view handles rendering and input for the game board
pub struct BoardView {
    /// Cached cell size for coordinate calculations
    cell_size: f32,
    /// Board drawing area
    board_rect: Rect,
    size: usize,
}

impl Default for BoardView {
    fn default() -> Self {
        Self {
            cell_size: 60.0,
            board_rect: Rect::NOTHING,
            size: 0,
        }
    }
}

impl BoardView {
    /// Render the board and return the clicked square's index, if any
    pub fn show(&mut self, ui: &mut egui::Ui, view: &GameView) -> Option<usize> {
        let board = view.board.as_ref();
        self.size = board.size();

        let available_size = ui.available_size();
        let board_size = available_size.x.min(available_size.y) - 20.0;
        self.cell_size = (board_size - 2.0 * BOARD_MARGIN) / self.size as f32;

        let (response, painter) =
            ui.allocate_painter(Vec2::new(board_size, board_size), Sense::click());
        self.board_rect = response.rect;

        painter.rect_filled(self.board_rect, CornerRadius::same(6), BOARD_BG);
        self.draw_column_labels(&painter);

        let game_over = view.winner.is_some();
        let hovered = response.hover_pos().and_then(|p| self.screen_to_board(p));

        if let (Some(pos), false) = (hovered, game_over) {
            self.draw_column_hover(&painter, pos.col);
        }

        self.draw_discs(&painter, board);

        if let Some(index) = view.last_move {
            self.draw_last_move_marker(&painter, Pos::from_index(index, self.size));
        }

        if let Some(line) = &view.winning_line {
            self.draw_winning_line(&painter, line);
        }

        // Preview where the disc would land
        let mut clicked = None;
        if !game_over {
            if let Some(pos) = hovered {
                match board.lowest_empty_row(pos.col) {
                    Some(row) => {
                        let is_x = view.next_player.cell() == Cell::X;
                        self.draw_disc(&painter, Pos::new(row, pos.col), hover_valid(is_x), None);
                    }
                    None => self.draw_disc(&painter, pos, hover_invalid(), None),
                }

                if response.clicked() {
                    clicked = Some(pos.index(self.size));
                }
            }
        }

        clicked
    }

    /// Column letters along the top edge
    fn draw_column_labels(&self, painter: &Painter) {
        let font = egui::FontId::proportional(13.0);
        for col in 0..self.size {
            let letter = (b'A' + col as u8) as char;
            let center = self.board_to_screen(Pos::new(0, col));
            let pos = Pos2::new(center.x, self.board_rect.min.y + BOARD_MARGIN * 0.5);
            painter.text(pos, egui::Align2::CENTER_CENTER, letter, font.clone(), LABEL);
        }
    }

    fn draw_column_hover(&self, painter: &Painter, col: usize) {
        let top = self.board_to_screen(Pos::new(0, col)) - Vec2::splat(self.cell_size * 0.5);
        let height = self.cell_size * self.size as f32;
        let rect = Rect::from_min_size(top, Vec2::new(self.cell_size, height));
        painter.rect_filled(rect, CornerRadius::same(4), COLUMN_HOVER);
    }

    /// Draw every hole, filled or empty
    fn draw_discs(&self, painter: &Painter, board: &Board) {
        for (index, cell) in board.cells().iter().enumerate() {
            let pos = Pos::from_index(index, self.size);
            match cell {
                Cell::X => self.draw_disc(painter, pos, X_DISC, Some(X_DISC_HIGHLIGHT)),
                Cell::O => self.draw_disc(painter, pos, O_DISC, Some(O_DISC_HIGHLIGHT)),
                Cell::Empty => self.draw_disc(painter, pos, HOLE_EMPTY, None),
            }
        }
    }

    fn draw_disc(&self, painter: &Painter, pos: Pos, color: Color32, highlight: Option<Color32>) {
        let center = self.board_to_screen(pos);
        let radius = self.cell_size * DISC_RADIUS_RATIO;

        painter.circle_filled(center, radius, color);

        if let Some(highlight) = highlight {
            let offset = Vec2::new(-radius * 0.3, -radius * 0.3);
            painter.circle_filled(center + offset, radius * 0.2, highlight);
        }
    }

    fn draw_last_move_marker(&self, painter: &Painter, pos: Pos) {
        let center = self.board_to_screen(pos);
        painter.circle_filled(center, LAST_MOVE_MARKER_RADIUS, LAST_MOVE_MARKER);
    }

    /// Draw winning line highlight
    fn draw_winning_line(&self, painter: &Painter, line: &[usize]) {
        let stroke = Stroke::new(4.0, WIN_HIGHLIGHT);
        let centers: Vec<Pos2> = line
            .iter()
            .map(|&i| self.board_to_screen(Pos::from_index(i, self.size)))
            .collect();

        for pair in centers.windows(2) {
            painter.line_segment([pair[0], pair[1]], stroke);
        }

        let radius = self.cell_size * DISC_RADIUS_RATIO + 3.0;
        for center in centers {
            painter.circle_stroke(center, radius, stroke);
        }
    }

    /// Convert screen coordinates to board position
    pub fn screen_to_board(&self, screen_pos: Pos2) -> Option<Pos> {
        let relative = screen_pos - self.board_rect.min;
        let x = (relative.x - BOARD_MARGIN) / self.cell_size;
        let y = (relative.y - BOARD_MARGIN) / self.cell_size;

        if x < 0.0 || y < 0.0 {
            return None;
        }

        let (col, row) = (x.floor() as usize, y.floor() as usize);
        Pos::is_valid(row, col, self.size).then(|| Pos::new(row, col))
    }

    /// Center of a hole in screen coordinates
    pub fn board_to_screen(&self, pos: Pos) -> Pos2 {
        let x = self.board_rect.min.x + BOARD_MARGIN + (pos.col as f32 + 0.5) * self.cell_size;
        let y = self.board_rect.min.y + BOARD_MARGIN + (pos.row as f32 + 0.5) * self.cell_size;
        Pos2::new(x, y)
    }
}
