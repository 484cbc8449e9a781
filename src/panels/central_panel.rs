use crate::SketchpadApp;
use crate::renderer;
use crate::surface::PainterSurface;

/// The drawing canvas, scaled to fill the panel while staying square.
pub fn central_panel(app: &mut SketchpadApp, ctx: &egui::Context) {
    egui::CentralPanel::default().show(ctx, |ui| {
        let logical = egui::Vec2::splat(app.config().canvas_size);
        let side = ui.available_size().min_elem().max(1.0);
        let (response, painter) =
            ui.allocate_painter(egui::Vec2::splat(side), egui::Sense::click_and_drag());
        let canvas_rect = response.rect;

        app.handle_canvas_input(&response);

        let mut surface = PainterSurface::new(&painter, canvas_rect, logical);
        renderer::repaint(&mut surface, app.state().document(), app.state().preview());
    });
}
