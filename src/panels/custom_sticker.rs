use crate::SketchpadApp;

/// Prompt for a custom sticker glyph, shown while one is pending.
pub fn custom_sticker_window(app: &mut SketchpadApp, ctx: &egui::Context) {
    let Some(mut text) = app.custom_sticker_prompt().map(str::to_owned) else {
        return;
    };

    let mut confirmed = false;
    let mut cancelled = false;
    egui::Window::new("Custom Sticker")
        .collapsible(false)
        .resizable(false)
        .anchor(egui::Align2::CENTER_CENTER, egui::Vec2::ZERO)
        .show(ctx, |ui| {
            ui.label("Sticker text:");
            let edit = ui.text_edit_singleline(&mut text);
            if edit.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter)) {
                confirmed = true;
            }
            ui.horizontal(|ui| {
                if ui.button("OK").clicked() {
                    confirmed = true;
                }
                if ui.button("Cancel").clicked() {
                    cancelled = true;
                }
            });
        });

    if confirmed {
        app.confirm_custom_sticker(&text);
    } else if cancelled {
        app.cancel_custom_sticker();
    } else {
        app.edit_custom_sticker(text);
    }
}
