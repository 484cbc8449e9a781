use egui::{Color32, Pos2};

use crate::surface::Surface;

/// Stickers are drawn in solid black; emoji faces ignore the fill color anyway.
pub const STICKER_COLOR: Color32 = Color32::BLACK;

/// A glyph placed with a single click, immutable once placed.
#[derive(Debug, Clone, PartialEq)]
pub struct Sticker {
    position: Pos2,
    glyph: String,
    /// Degrees, in `[0, 360)`
    rotation: f32,
    size: f32,
}

impl Sticker {
    pub fn new(position: Pos2, glyph: &str, rotation: f32, size: f32) -> Self {
        Self {
            position,
            glyph: glyph.to_owned(),
            rotation: rotation.rem_euclid(360.0),
            size,
        }
    }

    pub fn position(&self) -> Pos2 {
        self.position
    }

    pub fn glyph(&self) -> &str {
        &self.glyph
    }

    pub fn rotation(&self) -> f32 {
        self.rotation
    }

    pub fn size(&self) -> f32 {
        self.size
    }

    pub fn display(&self, surface: &mut dyn Surface) {
        draw_glyph(surface, self.position, &self.glyph, self.rotation, self.size);
    }
}

/// Draw `glyph` centered on `position`, rotated by `rotation` degrees.
pub(crate) fn draw_glyph(
    surface: &mut dyn Surface,
    position: Pos2,
    glyph: &str,
    rotation: f32,
    size: f32,
) {
    surface.save();
    surface.translate(position.x, position.y);
    surface.rotate(rotation);
    surface.fill_glyph(glyph, Pos2::ZERO, size, STICKER_COLOR);
    surface.restore();
}
