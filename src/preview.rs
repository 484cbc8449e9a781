use egui::{Color32, Pos2};

use crate::element::sticker::draw_glyph;
use crate::surface::Surface;

/// Pointer-following indicator of what the active tool would do.
///
/// Never committed, never undone; at most one exists at a time.
#[derive(Debug, Clone, PartialEq)]
pub enum Preview {
    /// A dot the size of the current marker
    Tool {
        position: Pos2,
        thickness: f32,
        color: Color32,
    },
    /// The selected sticker as it would be placed
    Sticker {
        position: Pos2,
        glyph: String,
        rotation: f32,
        size: f32,
    },
}

impl Preview {
    pub fn position(&self) -> Pos2 {
        match self {
            Preview::Tool { position, .. } | Preview::Sticker { position, .. } => *position,
        }
    }

    pub fn draw(&self, surface: &mut dyn Surface) {
        match self {
            Preview::Tool {
                position,
                thickness,
                color,
            } => surface.fill_circle(*position, thickness / 2.0, *color),
            Preview::Sticker {
                position,
                glyph,
                rotation,
                size,
            } => draw_glyph(surface, *position, glyph, *rotation, *size),
        }
    }
}
