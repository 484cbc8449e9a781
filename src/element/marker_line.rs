use egui::{Color32, Pos2};

use crate::surface::Surface;

/// A freehand stroke: the polyline a continuous drag traced.
///
/// Thickness and color are fixed at creation. Points are only ever appended,
/// and only while the stroke is still being drawn.
#[derive(Debug, Clone, PartialEq)]
pub struct MarkerLine {
    points: Vec<Pos2>,
    thickness: f32,
    color: Color32,
}

impl MarkerLine {
    /// Start a line at `start`.
    pub fn new(start: Pos2, thickness: f32, color: Color32) -> Self {
        Self::from_points(vec![start], thickness, color)
    }

    pub fn from_points(points: Vec<Pos2>, thickness: f32, color: Color32) -> Self {
        Self {
            points,
            thickness,
            color,
        }
    }

    pub fn points(&self) -> &[Pos2] {
        &self.points
    }

    pub fn thickness(&self) -> f32 {
        self.thickness
    }

    pub fn color(&self) -> Color32 {
        self.color
    }

    pub(crate) fn extend(&mut self, point: Pos2) {
        self.points.push(point);
    }

    pub fn display(&self, surface: &mut dyn Surface) {
        // A single recorded point has no visible extent
        if self.points.len() < 2 {
            return;
        }
        surface.stroke_path(&self.points, self.thickness, self.color);
    }
}
