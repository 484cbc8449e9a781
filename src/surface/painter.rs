use egui::emath::Rot2;
use egui::epaint::TextShape;
use egui::{Color32, FontId, Painter, Pos2, Rect, Shape, Vec2};

use super::{BACKGROUND, Surface};
use crate::geometry::{Transform, TransformStack};

/// Draws logical canvas coordinates onto the on-screen canvas rect.
pub struct PainterSurface<'a> {
    painter: &'a Painter,
    rect: Rect,
    transforms: TransformStack,
}

impl<'a> PainterSurface<'a> {
    /// `rect` is where the canvas is displayed, `logical_size` the size the
    /// drawing coordinates are expressed in.
    pub fn new(painter: &'a Painter, rect: Rect, logical_size: Vec2) -> Self {
        let base = Transform::translation(rect.min.to_vec2()).then(&Transform::scaling(
            rect.width() / logical_size.x,
            rect.height() / logical_size.y,
        ));
        Self {
            painter,
            rect,
            transforms: TransformStack::new(base),
        }
    }
}

impl Surface for PainterSurface<'_> {
    fn clear(&mut self) {
        self.painter.rect_filled(self.rect, 0.0, BACKGROUND);
    }

    fn save(&mut self) {
        self.transforms.save();
    }

    fn restore(&mut self) {
        self.transforms.restore();
    }

    fn translate(&mut self, dx: f32, dy: f32) {
        self.transforms.translate(dx, dy);
    }

    fn rotate(&mut self, degrees: f32) {
        self.transforms.rotate(degrees);
    }

    fn scale(&mut self, sx: f32, sy: f32) {
        self.transforms.scale(sx, sy);
    }

    fn stroke_path(&mut self, points: &[Pos2], width: f32, color: Color32) {
        let t = self.transforms.current();
        let screen_points: Vec<Pos2> = points.iter().map(|p| t.apply(*p)).collect();
        self.painter.add(Shape::line(
            screen_points,
            egui::Stroke::new(width * t.scale_factor(), color),
        ));
    }

    fn fill_circle(&mut self, center: Pos2, radius: f32, color: Color32) {
        let t = self.transforms.current();
        self.painter
            .circle_filled(t.apply(center), radius * t.scale_factor(), color);
    }

    fn fill_glyph(&mut self, text: &str, center: Pos2, size: f32, color: Color32) {
        let t = self.transforms.current();
        let galley = self.painter.layout_no_wrap(
            text.to_owned(),
            FontId::proportional(size * t.scale_factor()),
            color,
        );
        let angle = t.angle();
        // TextShape rotates around its top-left corner, so offset that corner
        // by the rotated half-extent to keep the glyph centered.
        let top_left = t.apply(center) - Rot2::from_angle(angle) * (galley.size() / 2.0);
        self.painter
            .add(Shape::Text(TextShape::new(top_left, galley, color).with_angle(angle)));
    }
}
