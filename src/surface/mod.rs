//! The 2D drawing contract every item and preview draws against.
//!
//! Two implementations exist: [`PainterSurface`] draws the interactive canvas
//! through an egui painter, [`RasterSurface`] renders into an offscreen pixmap
//! for export. Both keep a canvas-style transform stack.

mod painter;
mod raster;

pub use painter::PainterSurface;
pub use raster::{GlyphFonts, RasterSurface};

use egui::{Color32, Pos2};

/// Color every surface is cleared to.
pub const BACKGROUND: Color32 = Color32::WHITE;

pub trait Surface {
    /// Clear the whole surface to [`BACKGROUND`], regardless of the transform.
    fn clear(&mut self);

    /// Push the current transform.
    fn save(&mut self);

    /// Pop the transform pushed by the matching [`Surface::save`].
    fn restore(&mut self);

    fn translate(&mut self, dx: f32, dy: f32);

    /// Rotate clockwise (in screen space) by `degrees`.
    fn rotate(&mut self, degrees: f32);

    fn scale(&mut self, sx: f32, sy: f32);

    /// Build a path through `points` (move-to the first, line-to the rest) and stroke it.
    fn stroke_path(&mut self, points: &[Pos2], width: f32, color: Color32);

    fn fill_circle(&mut self, center: Pos2, radius: f32, color: Color32);

    /// Draw `text` with its visual center at `center`.
    fn fill_glyph(&mut self, text: &str, center: Pos2, size: f32, color: Color32);
}
