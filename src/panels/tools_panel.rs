use crate::SketchpadApp;
use crate::components::ToolButton;
use crate::tool::ToolMode;

/// Rotations are kept in `[0, 360)`, so the slider needs the open end too.
const ROTATION_RANGE: std::ops::RangeInclusive<f32> = 0.0..=360.0;

pub fn tools_panel(app: &mut SketchpadApp, ctx: &egui::Context) {
    egui::SidePanel::left("tools_panel")
        .resizable(false)
        .default_width(200.0)
        .show(ctx, |ui| {
            ui.heading("Sketchpad");
            ui.separator();

            ui.horizontal(|ui| {
                if ui.button("Clear").clicked() {
                    app.clear();
                }
                let can_undo = app.state().document().can_undo();
                let can_redo = app.state().document().can_redo();
                if ui.add_enabled(can_undo, egui::Button::new("Undo")).clicked() {
                    app.undo();
                }
                if ui.add_enabled(can_redo, egui::Button::new("Redo")).clicked() {
                    app.redo();
                }
            });

            ui.separator();
            ui.label("Marker");
            let (thin, thick) = (app.config().thin, app.config().thick);
            let drawing_with = match app.state().tools().mode() {
                ToolMode::Drawing => Some(app.state().tools().thickness()),
                ToolMode::Stickering { .. } => None,
            };
            ui.horizontal(|ui| {
                if ToolButton::text("Thin", drawing_with == Some(thin)).show(ui).clicked() {
                    app.select_thickness(thin);
                }
                if ToolButton::text("Thick", drawing_with == Some(thick)).show(ui).clicked() {
                    app.select_thickness(thick);
                }
            });

            let mut color = app.state().tools().color();
            ui.horizontal(|ui| {
                ui.label("Color:");
                if egui::color_picker::color_edit_button_srgba(
                    ui,
                    &mut color,
                    egui::color_picker::Alpha::Opaque,
                )
                .changed()
                {
                    app.set_color(color);
                }
            });

            ui.separator();
            ui.label("Stickers");
            // Collect first; selecting mutates the app
            let glyphs: Vec<String> = app
                .state()
                .stickers()
                .iter()
                .map(|def| def.glyph.clone())
                .collect();
            let selected = app.state().tools().selected_sticker().map(str::to_owned);
            ui.horizontal_wrapped(|ui| {
                for glyph in &glyphs {
                    let is_selected = selected.as_deref() == Some(glyph.as_str());
                    if ToolButton::new(glyph, is_selected).show(ui).clicked() {
                        app.select_sticker(glyph);
                    }
                }
            });
            if ui.button("Custom Sticker").clicked() {
                app.open_custom_sticker_prompt();
            }

            let mut rotation = app.state().tools().rotation();
            if ui
                .add(
                    egui::Slider::new(&mut rotation, ROTATION_RANGE)
                        .text("Rotation")
                        .suffix("°"),
                )
                .changed()
            {
                app.set_rotation(rotation);
            }

            ui.separator();
            if ui.button("Export").clicked() {
                app.export();
            }
            if let Some(status) = app.status() {
                ui.label(status);
            }

            ui.separator();
            let document = app.state().document();
            ui.label(format!("Items: {}", document.len()));
            ui.label(format!("Redo stack: {}", document.redo_stack().len()));
        });
}
