use crate::document::Document;
use crate::preview::Preview;
use crate::surface::Surface;

/// Full clear-and-redraw: every committed item in order, then the preview on top.
pub fn repaint(surface: &mut dyn Surface, document: &Document, preview: Option<&Preview>) {
    surface.clear();
    for item in document.items() {
        item.display(surface);
    }
    if let Some(preview) = preview {
        preview.draw(surface);
    }
}
