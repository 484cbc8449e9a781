use ab_glyph::{Font, FontVec, OutlineCurve};
use egui::{Color32, FontDefinitions, FontFamily, FontTweak, Pos2};
use tiny_skia::{FillRule, LineCap, LineJoin, Paint, Path, PathBuilder, Pixmap};

use super::{BACKGROUND, Surface};
use crate::error::{ExportError, ExportResult};
use crate::geometry::{Transform, TransformStack};

/// Outline fonts used to rasterize glyphs offscreen.
///
/// Taken from egui's bundled font set, in the proportional family's fallback
/// order, so exported stickers use the same faces as the on-screen canvas.
pub struct GlyphFonts {
    fonts: Vec<(FontVec, FontTweak)>,
}

impl std::fmt::Debug for GlyphFonts {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GlyphFonts")
            .field("fonts", &self.fonts.len())
            .finish()
    }
}

impl GlyphFonts {
    pub fn from_egui_defaults() -> ExportResult<Self> {
        let definitions = FontDefinitions::default();
        let order = definitions
            .families
            .get(&FontFamily::Proportional)
            .cloned()
            .unwrap_or_default();

        let mut fonts = Vec::new();
        for name in &order {
            let Some(data) = definitions.font_data.get(name) else {
                continue;
            };
            match FontVec::try_from_vec_and_index(data.font.to_vec(), data.index) {
                Ok(font) => fonts.push((font, data.tweak)),
                Err(err) => log::warn!("Skipping font {}: {}", name, err),
            }
        }

        if fonts.is_empty() {
            return Err(ExportError::Font(
                "egui's default font set has no proportional faces".to_owned(),
            ));
        }
        log::debug!("Loaded {} glyph fonts for export", fonts.len());
        Ok(Self { fonts })
    }

    fn font_for(&self, c: char) -> Option<&(FontVec, FontTweak)> {
        self.fonts.iter().find(|(font, _)| font.glyph_id(c).0 != 0)
    }

    /// Outline `text` at font size `size`, centered on the origin.
    ///
    /// Glyphs are laid out in one row the way egui lays out a galley: the row
    /// takes the first font's height, fallback faces are centered in it, and
    /// each face's tweak is applied. The row's box is what gets centered, so
    /// the result lines up with text painted by egui at the same position.
    ///
    /// Characters no font covers are skipped; `None` if nothing is left to draw.
    pub fn outline(&self, text: &str, size: f32) -> Option<Path> {
        let (primary, _) = self.fonts.first()?;
        let row_height = row_height(primary) * size / primary.height_unscaled();

        let mut builder = PathBuilder::new();
        let mut pen_x = 0.0;

        for c in text.chars() {
            let Some((font, tweak)) = self.font_for(c) else {
                log::debug!("No font covers {:?}", c);
                continue;
            };
            let id = font.glyph_id(c);
            let px = size / font.height_unscaled();
            let ascent = font.ascent_unscaled() * px;
            let descent = font.descent_unscaled() * px;
            let baseline = ascent
                + size * tweak.scale * tweak.baseline_offset_factor
                + 0.5 * (row_height - row_height_of(font, px));
            let y_offset = size * tweak.scale * tweak.y_offset_factor + tweak.y_offset
                - (1.0 - tweak.scale) * 0.5 * (ascent + descent);
            let glyph_px = px * tweak.scale;

            if let Some(outline) = font.outline(id) {
                // Font units are y-up
                let map = |p: ab_glyph::Point| {
                    (pen_x + p.x * glyph_px, baseline + y_offset - p.y * glyph_px)
                };
                let mut last: Option<ab_glyph::Point> = None;

                for curve in &outline.curves {
                    let (start, end) = match curve {
                        OutlineCurve::Line(a, b) => (*a, *b),
                        OutlineCurve::Quad(a, _, c) => (*a, *c),
                        OutlineCurve::Cubic(a, _, _, d) => (*a, *d),
                    };
                    if last != Some(start) {
                        if last.is_some() {
                            builder.close();
                        }
                        let (x, y) = map(start);
                        builder.move_to(x, y);
                    }
                    match curve {
                        OutlineCurve::Line(_, b) => {
                            let (x, y) = map(*b);
                            builder.line_to(x, y);
                        }
                        OutlineCurve::Quad(_, b, c) => {
                            let (x1, y1) = map(*b);
                            let (x, y) = map(*c);
                            builder.quad_to(x1, y1, x, y);
                        }
                        OutlineCurve::Cubic(_, b, c, d) => {
                            let (x1, y1) = map(*b);
                            let (x2, y2) = map(*c);
                            let (x, y) = map(*d);
                            builder.cubic_to(x1, y1, x2, y2, x, y);
                        }
                    }
                    last = Some(end);
                }
                if last.is_some() {
                    builder.close();
                }
            }

            pen_x += font.h_advance_unscaled(id) * glyph_px;
        }

        builder
            .finish()?
            .transform(tiny_skia::Transform::from_translate(
                -pen_x / 2.0,
                -row_height / 2.0,
            ))
    }
}

/// Row height in font units.
fn row_height(font: &FontVec) -> f32 {
    font.ascent_unscaled() - font.descent_unscaled() + font.line_gap_unscaled()
}

fn row_height_of(font: &FontVec, px: f32) -> f32 {
    row_height(font) * px
}

/// Offscreen surface backed by a tiny-skia pixmap.
pub struct RasterSurface<'f> {
    pixmap: Pixmap,
    transforms: TransformStack,
    fonts: &'f GlyphFonts,
}

impl<'f> RasterSurface<'f> {
    pub fn new(width: u32, height: u32, fonts: &'f GlyphFonts) -> ExportResult<Self> {
        let pixmap = Pixmap::new(width, height).ok_or(ExportError::Surface { width, height })?;
        Ok(Self {
            pixmap,
            transforms: TransformStack::default(),
            fonts,
        })
    }

    pub fn width(&self) -> u32 {
        self.pixmap.width()
    }

    pub fn height(&self) -> u32 {
        self.pixmap.height()
    }

    /// Copy the pixels out as straight (non-premultiplied) RGBA.
    pub fn to_image(&self) -> image::RgbaImage {
        let width = self.pixmap.width();
        let pixels = self.pixmap.pixels();
        image::RgbaImage::from_fn(width, self.pixmap.height(), |x, y| {
            let c = pixels[(y * width + x) as usize].demultiply();
            image::Rgba([c.red(), c.green(), c.blue(), c.alpha()])
        })
    }

    fn skia_transform(&self) -> tiny_skia::Transform {
        let Transform { a, b, c, d, e, f } = self.transforms.current();
        tiny_skia::Transform::from_row(a, b, c, d, e, f)
    }
}

fn solid_paint(color: Color32) -> Paint<'static> {
    let [r, g, b, a] = color.to_srgba_unmultiplied();
    let mut paint = Paint::default();
    paint.set_color_rgba8(r, g, b, a);
    paint.anti_alias = true;
    paint
}

impl Surface for RasterSurface<'_> {
    fn clear(&mut self) {
        let [r, g, b, a] = BACKGROUND.to_srgba_unmultiplied();
        self.pixmap.fill(tiny_skia::Color::from_rgba8(r, g, b, a));
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
        let Some((first, rest)) = points.split_first() else {
            return;
        };
        let mut builder = PathBuilder::new();
        builder.move_to(first.x, first.y);
        for p in rest {
            builder.line_to(p.x, p.y);
        }
        let Some(path) = builder.finish() else {
            return;
        };
        let stroke = tiny_skia::Stroke {
            width,
            line_cap: LineCap::Round,
            line_join: LineJoin::Round,
            ..Default::default()
        };
        let transform = self.skia_transform();
        self.pixmap
            .stroke_path(&path, &solid_paint(color), &stroke, transform, None);
    }

    fn fill_circle(&mut self, center: Pos2, radius: f32, color: Color32) {
        let Some(path) = PathBuilder::from_circle(center.x, center.y, radius) else {
            return;
        };
        let transform = self.skia_transform();
        self.pixmap
            .fill_path(&path, &solid_paint(color), FillRule::Winding, transform, None);
    }

    fn fill_glyph(&mut self, text: &str, center: Pos2, size: f32, color: Color32) {
        let Some(path) = self.fonts.outline(text, size) else {
            return;
        };
        let transform = self
            .skia_transform()
            .pre_translate(center.x, center.y);
        self.pixmap
            .fill_path(&path, &solid_paint(color), FillRule::Winding, transform, None);
    }
}
