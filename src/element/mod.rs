use crate::surface::Surface;

mod marker_line;
pub(crate) mod sticker;

pub use marker_line::MarkerLine;
pub use sticker::Sticker;

/// A committed drawable in the display list.
#[derive(Debug, Clone, PartialEq)]
pub enum Item {
    Stroke(MarkerLine),
    Sticker(Sticker),
}

impl Item {
    /// Draw the item using only its own state.
    pub fn display(&self, surface: &mut dyn Surface) {
        match self {
            Item::Stroke(line) => line.display(surface),
            Item::Sticker(sticker) => sticker.display(surface),
        }
    }

    pub fn kind(&self) -> &'static str {
        match self {
            Item::Stroke(_) => "stroke",
            Item::Sticker(_) => "sticker",
        }
    }

    pub fn as_stroke(&self) -> Option<&MarkerLine> {
        match self {
            Item::Stroke(line) => Some(line),
            Item::Sticker(_) => None,
        }
    }

    pub fn as_sticker(&self) -> Option<&Sticker> {
        match self {
            Item::Sticker(sticker) => Some(sticker),
            Item::Stroke(_) => None,
        }
    }
}

impl From<MarkerLine> for Item {
    fn from(line: MarkerLine) -> Self {
        Item::Stroke(line)
    }
}

impl From<Sticker> for Item {
    fn from(sticker: Sticker) -> Self {
        Item::Sticker(sticker)
    }
}

/// Factory functions for creating items
pub mod factory {
    use super::*;
    use egui::{Color32, Pos2};

    pub fn create_stroke(points: Vec<Pos2>, thickness: f32, color: Color32) -> Item {
        Item::Stroke(MarkerLine::from_points(points, thickness, color))
    }

    pub fn create_sticker(position: Pos2, glyph: &str, rotation: f32, size: f32) -> Item {
        Item::Sticker(Sticker::new(position, glyph, rotation, size))
    }
}
