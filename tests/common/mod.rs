#![allow(dead_code)]

use egui::{Color32, Pos2};
use sketchpad::Surface;

/// One call made against a [`RecordingSurface`].
#[derive(Debug, Clone, PartialEq)]
pub enum Op {
    Clear,
    Save,
    Restore,
    Translate(f32, f32),
    Rotate(f32),
    Scale(f32, f32),
    Stroke {
        points: Vec<Pos2>,
        width: f32,
        color: Color32,
    },
    Circle {
        center: Pos2,
        radius: f32,
        color: Color32,
    },
    Glyph {
        text: String,
        center: Pos2,
        size: f32,
    },
}

/// Surface that only remembers what was drawn.
#[derive(Debug, Default)]
pub struct RecordingSurface {
    pub ops: Vec<Op>,
}

impl RecordingSurface {
    pub fn strokes(&self) -> Vec<&Op> {
        self.ops
            .iter()
            .filter(|op| matches!(op, Op::Stroke { .. }))
            .collect()
    }

    pub fn glyphs(&self) -> Vec<&str> {
        self.ops
            .iter()
            .filter_map(|op| match op {
                Op::Glyph { text, .. } => Some(text.as_str()),
                _ => None,
            })
            .collect()
    }
}

impl Surface for RecordingSurface {
    fn clear(&mut self) {
        self.ops.push(Op::Clear);
    }

    fn save(&mut self) {
        self.ops.push(Op::Save);
    }

    fn restore(&mut self) {
        self.ops.push(Op::Restore);
    }

    fn translate(&mut self, dx: f32, dy: f32) {
        self.ops.push(Op::Translate(dx, dy));
    }

    fn rotate(&mut self, degrees: f32) {
        self.ops.push(Op::Rotate(degrees));
    }

    fn scale(&mut self, sx: f32, sy: f32) {
        self.ops.push(Op::Scale(sx, sy));
    }

    fn stroke_path(&mut self, points: &[Pos2], width: f32, color: Color32) {
        self.ops.push(Op::Stroke {
            points: points.to_vec(),
            width,
            color,
        });
    }

    fn fill_circle(&mut self, center: Pos2, radius: f32, color: Color32) {
        self.ops.push(Op::Circle {
            center,
            radius,
            color,
        });
    }

    fn fill_glyph(&mut self, text: &str, center: Pos2, size: f32, _color: Color32) {
        self.ops.push(Op::Glyph {
            text: text.to_owned(),
            center,
            size,
        });
    }
}
