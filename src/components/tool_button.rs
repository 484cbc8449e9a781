use eframe::egui;

/// Selectable square-ish button used for marker sizes and stickers.
pub struct ToolButton<'a> {
    pub label: &'a str,
    pub selected: bool,
    pub size: egui::Vec2,
    pub font_size: f32,
}

impl<'a> ToolButton<'a> {
    pub fn new(label: &'a str, selected: bool) -> Self {
        Self {
            label,
            selected,
            size: egui::vec2(32.0, 32.0),
            font_size: 24.0,
        }
    }

    /// Wider button for text labels
    pub fn text(label: &'a str, selected: bool) -> Self {
        Self {
            size: egui::vec2(56.0, 28.0),
            font_size: 14.0,
            ..Self::new(label, selected)
        }
    }

    pub fn show(&self, ui: &mut egui::Ui) -> egui::Response {
        let (rect, response) = ui.allocate_exact_size(self.size, egui::Sense::click());

        if ui.is_rect_visible(rect) {
            let bg_color = if self.selected {
                egui::Color32::from_rgb(100, 181, 246) // Light blue when selected
            } else if response.hovered() {
                egui::Color32::from_gray(40)
            } else {
                egui::Color32::from_gray(30)
            };

            ui.painter().rect_filled(rect, 4.0, bg_color);

            let text_color = if self.selected {
                egui::Color32::BLACK
            } else {
                egui::Color32::WHITE
            };
            ui.painter().text(
                rect.center(),
                egui::Align2::CENTER_CENTER,
                self.label,
                egui::FontId::proportional(self.font_size),
                text_color,
            );

            if self.selected {
                ui.painter().rect_stroke(
                    rect,
                    4.0,
                    egui::Stroke::new(2.0, egui::Color32::from_rgb(33, 150, 243)),
                );
            }
        }

        response
    }
}
