//! One-shot raster export of the committed scene.

use std::io::Cursor;

use crate::config::PadConfig;
use crate::document::Document;
use crate::error::{ExportError, ExportResult};
use crate::surface::{GlyphFonts, RasterSurface, Surface};

/// Replay every committed item onto an offscreen `export_size` square surface,
/// scaled so logical canvas coordinates land proportionally. Previews are not
/// part of the export.
pub fn render(
    document: &Document,
    config: &PadConfig,
    fonts: &GlyphFonts,
) -> ExportResult<image::RgbaImage> {
    let mut surface = RasterSurface::new(config.export_size, config.export_size, fonts)?;
    surface.clear();
    let scale = config.export_scale();
    surface.scale(scale, scale);
    for item in document.items() {
        item.display(&mut surface);
    }
    log::debug!(
        "Rendered {} items at {}x{} (scale {})",
        document.len(),
        surface.width(),
        surface.height(),
        scale
    );
    Ok(surface.to_image())
}

pub fn encode_png(image: &image::RgbaImage) -> ExportResult<Vec<u8>> {
    let mut bytes = Vec::new();
    image.write_to(&mut Cursor::new(&mut bytes), image::ImageFormat::Png)?;
    Ok(bytes)
}

/// Render, encode and hand the PNG to the user.
///
/// Returns where it went: a file path on native, the download name on the web.
pub fn export(document: &Document, config: &PadConfig, fonts: &GlyphFonts) -> ExportResult<String> {
    let image = render(document, config, fonts)?;
    let bytes = encode_png(&image)?;
    deliver(&bytes, config)
}

#[cfg(not(target_arch = "wasm32"))]
fn deliver(bytes: &[u8], config: &PadConfig) -> ExportResult<String> {
    let path = config.export_path();
    std::fs::write(&path, bytes).map_err(|source| ExportError::Write {
        path: path.clone(),
        source,
    })?;
    log::info!("Exported {} bytes to {}", bytes.len(), path.display());
    Ok(path.display().to_string())
}

#[cfg(target_arch = "wasm32")]
fn deliver(bytes: &[u8], config: &PadConfig) -> ExportResult<String> {
    use wasm_bindgen::JsCast;

    let fail = |what: &str| ExportError::Download(what.to_owned());
    let window = web_sys::window().ok_or_else(|| fail("no window"))?;
    let document = window.document().ok_or_else(|| fail("no document"))?;

    let uint8_array = js_sys::Uint8Array::from(bytes);
    let blob_parts = js_sys::Array::new();
    blob_parts.push(&uint8_array);

    let options = web_sys::BlobPropertyBag::new();
    options.set_type("image/png");

    let blob = web_sys::Blob::new_with_u8_array_sequence_and_options(&blob_parts, &options)
        .map_err(|_| fail("could not create blob"))?;
    let url = web_sys::Url::create_object_url_with_blob(&blob)
        .map_err(|_| fail("could not create object URL"))?;

    let anchor = document
        .create_element("a")
        .map_err(|_| fail("could not create link"))?
        .dyn_into::<web_sys::HtmlAnchorElement>()
        .map_err(|_| fail("link is not an anchor"))?;
    anchor.set_href(&url);
    anchor.set_download(&config.export_filename);
    anchor.click();

    let _ = web_sys::Url::revoke_object_url(&url);
    log::info!("Offered {} ({} bytes) for download", config.export_filename, bytes.len());
    Ok(config.export_filename.clone())
}
