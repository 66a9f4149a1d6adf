//! Paints presenter draw commands with an egui painter

use egui::{Align2, Color32, FontId, Pos2, Rect, Stroke, Ui};
use glam::Vec2;

use crate::draw::{parse_hex_rgb, CanvasSize, DrawCommand, TextAlign};

const LABEL_FONT_SIZE: f32 = 12.0;
const CANVAS_BACKGROUND: Color32 = Color32::from_rgb(10, 10, 24);

/// Convert a `#RRGGBB` string, falling back to white
pub fn hex_to_color32(hex: &str) -> Color32 {
    match parse_hex_rgb(hex) {
        Some([r, g, b]) => Color32::from_rgb(r, g, b),
        None => {
            log::warn!("Unrecognised color {:?}, drawing in white", hex);
            Color32::WHITE
        }
    }
}

fn to_screen(origin: Pos2, point: Vec2) -> Pos2 {
    Pos2::new(origin.x + point.x, origin.y + point.y)
}

/// Draw every command relative to `origin`, the canvas' top-left corner on screen
pub fn paint_commands(painter: &egui::Painter, origin: Pos2, commands: &[DrawCommand]) {
    for command in commands {
        match command {
            DrawCommand::Line { from, to, color, width } => {
                painter.line_segment(
                    [to_screen(origin, *from), to_screen(origin, *to)],
                    Stroke::new(*width, hex_to_color32(color)),
                );
            }
            DrawCommand::FilledRect { origin: corner, size, color } => {
                let min = to_screen(origin, *corner);
                let rect = Rect::from_min_size(min, egui::vec2(size.x, size.y));
                painter.rect_filled(rect, 0.0, hex_to_color32(color));
            }
            DrawCommand::Text { position, content, color, align } => {
                // Positions are baselines, as on a 2D canvas
                let anchor = match align {
                    TextAlign::Left => Align2::LEFT_BOTTOM,
                    TextAlign::Center => Align2::CENTER_BOTTOM,
                };
                painter.text(
                    to_screen(origin, *position),
                    anchor,
                    content,
                    FontId::proportional(LABEL_FONT_SIZE),
                    hex_to_color32(color),
                );
            }
        }
    }
}

/// Reserve a canvas-sized area in the layout and paint the commands into it
pub fn canvas(ui: &mut Ui, size: CanvasSize, commands: &[DrawCommand]) -> egui::Response {
    let (response, painter) =
        ui.allocate_painter(egui::vec2(size.width, size.height), egui::Sense::hover());
    let rect = response.rect;

    painter.rect_filled(rect, 4.0, CANVAS_BACKGROUND);
    let painter = painter.with_clip_rect(rect);
    paint_commands(&painter, rect.min, commands);

    response
}
