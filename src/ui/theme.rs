//! Theme constants for the GUI

use egui::Color32;

// Board colors
pub const BOARD_BG: Color32 = Color32::from_rgb(36, 72, 160);
pub const HOLE_EMPTY: Color32 = Color32::from_rgb(25, 27, 31);
pub const COLUMN_HOVER: Color32 = Color32::from_rgba_premultiplied(30, 30, 30, 30);
pub const LABEL: Color32 = Color32::from_rgb(200, 210, 235);

// Disc colors
pub const X_DISC: Color32 = Color32::from_rgb(220, 60, 60);
pub const X_DISC_HIGHLIGHT: Color32 = Color32::from_rgb(245, 120, 115);
pub const O_DISC: Color32 = Color32::from_rgb(240, 200, 50);
pub const O_DISC_HIGHLIGHT: Color32 = Color32::from_rgb(255, 230, 130);

// Markers
pub const LAST_MOVE_MARKER: Color32 = Color32::from_rgb(250, 250, 252);
pub const WIN_HIGHLIGHT: Color32 = Color32::from_rgb(50, 220, 50);

// Functions for colors that can't be const
pub fn hover_valid(is_x: bool) -> Color32 {
    if is_x {
        Color32::from_rgba_unmultiplied(220, 60, 60, 110)
    } else {
        Color32::from_rgba_unmultiplied(240, 200, 50, 110)
    }
}

pub fn hover_invalid() -> Color32 {
    Color32::from_rgba_unmultiplied(255, 50, 50, 60)
}

// Panel colors - dark modern theme
pub const PANEL_BG: Color32 = Color32::from_rgb(25, 27, 31);
pub const CARD_BG: Color32 = Color32::from_rgb(35, 38, 43);
pub const BUTTON_BG: Color32 = Color32::from_rgb(50, 53, 58);
pub const BUTTON_ACTIVE: Color32 = Color32::from_rgb(70, 90, 140);
pub const TEXT_PRIMARY: Color32 = Color32::from_rgb(240, 240, 245);
pub const TEXT_SECONDARY: Color32 = Color32::from_rgb(160, 165, 175);
pub const TEXT_MUTED: Color32 = Color32::from_rgb(120, 125, 135);

// Sizes
pub const BOARD_MARGIN: f32 = 28.0;
pub const DISC_RADIUS_RATIO: f32 = 0.4;
pub const LAST_MOVE_MARKER_RADIUS: f32 = 4.0;
