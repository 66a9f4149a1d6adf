//! Renderer-agnostic drawing instructions
//!
//! Coordinates are canvas pixels with the origin in the top-left corner and y
//! growing downwards, matching a 2D canvas.

use glam::Vec2;

/// Size of the drawing surface in pixels
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CanvasSize {
    pub width: f32,
    pub height: f32,
}

impl CanvasSize {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }
}

/// Horizontal anchoring of a text label relative to its position
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextAlign {
    Left,
    Center,
}

/// A single drawing instruction
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    Line {
        from: Vec2,
        to: Vec2,
        color: String,
        width: f32,
    },
    FilledRect {
        origin: Vec2,
        size: Vec2,
        color: String,
    },
    /// Text drawn with its baseline at `position.y`
    Text {
        position: Vec2,
        content: String,
        color: String,
        align: TextAlign,
    },
}

impl DrawCommand {
    pub fn line(from: Vec2, to: Vec2, color: &str, width: f32) -> Self {
        DrawCommand::Line {
            from,
            to,
            color: color.to_string(),
            width,
        }
    }

    pub fn filled_rect(origin: Vec2, size: Vec2, color: &str) -> Self {
        DrawCommand::FilledRect {
            origin,
            size,
            color: color.to_string(),
        }
    }

    pub fn text(position: Vec2, content: impl Into<String>, color: &str, align: TextAlign) -> Self {
        DrawCommand::Text {
            position,
            content: content.into(),
            color: color.to_string(),
            align,
        }
    }

    pub fn color(&self) -> &str {
        match self {
            DrawCommand::Line { color, .. }
            | DrawCommand::FilledRect { color, .. }
            | DrawCommand::Text { color, .. } => color,
        }
    }
}

/// Parse a `#RRGGBB` color into its components
pub fn parse_hex_rgb(hex: &str) -> Option<[u8; 3]> {
    let digits = hex.strip_prefix('#')?;
    if digits.len() != 6 || !digits.is_ascii() {
        return None;
    }

    let channel = |i: usize| u8::from_str_radix(&digits[i..i + 2], 16).ok();
    Some([channel(0)?, channel(2)?, channel(4)?])
}
