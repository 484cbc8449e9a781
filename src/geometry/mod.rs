mod transform;

pub use transform::{Transform, TransformStack};

use egui::{Pos2, Rect, Vec2};

/// Translate a raw pointer position into surface-local logical coordinates.
///
/// The offset of the displayed canvas is removed first; if the canvas is shown at
/// a different size than its logical drawing size, each axis is then scaled by
/// `logical_size / displayed size`.
pub fn map_to_surface(raw: Pos2, displayed: Rect, logical_size: Vec2) -> Pos2 {
    let local = raw - displayed.min;
    let scale_x = axis_scale(logical_size.x, displayed.width());
    let scale_y = axis_scale(logical_size.y, displayed.height());
    Pos2::new(local.x * scale_x, local.y * scale_y)
}

fn axis_scale(logical: f32, displayed: f32) -> f32 {
    if displayed > 0.0 { logical / displayed } else { 1.0 }
}
