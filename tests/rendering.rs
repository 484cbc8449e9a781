mod common;

use common::{Op, RecordingSurface};
use egui::{Color32, Pos2};
use sketchpad::element::factory;
use sketchpad::renderer::repaint;
use sketchpad::{Document, Preview};

#[test]
fn test_single_point_line_draws_nothing() {
    let mut surface = RecordingSurface::default();
    factory::create_stroke(vec![Pos2::new(3.0, 3.0)], 2.0, Color32::RED).display(&mut surface);
    assert!(surface.ops.is_empty());
}

#[test]
fn test_line_draws_every_point_in_order() {
    let points = vec![Pos2::new(0.0, 0.0), Pos2::new(4.0, 2.0), Pos2::new(1.0, 9.0)];
    let mut surface = RecordingSurface::default();
    factory::create_stroke(points.clone(), 3.0, Color32::RED).display(&mut surface);
    assert_eq!(
        surface.ops,
        vec![Op::Stroke {
            points,
            width: 3.0,
            color: Color32::RED,
        }]
    );
}

#[test]
fn test_sticker_draws_in_its_own_frame() {
    let mut surface = RecordingSurface::default();
    factory::create_sticker(Pos2::new(40.0, 50.0), "🐸", 90.0, 32.0).display(&mut surface);
    assert_eq!(
        surface.ops,
        vec![
            Op::Save,
            Op::Translate(40.0, 50.0),
            Op::Rotate(90.0),
            Op::Glyph {
                text: "🐸".to_owned(),
                center: Pos2::ZERO,
                size: 32.0,
            },
            Op::Restore,
        ]
    );
}

#[test]
fn test_repaint_clears_then_draws_items_then_preview() {
    let mut doc = Document::new();
    doc.commit(factory::create_stroke(
        vec![Pos2::new(0.0, 0.0), Pos2::new(1.0, 1.0)],
        1.0,
        Color32::BLACK,
    ));
    doc.commit(factory::create_sticker(Pos2::new(5.0, 5.0), "🌮", 0.0, 32.0));
    let preview = Preview::Tool {
        position: Pos2::new(7.0, 7.0),
        thickness: 5.0,
        color: Color32::BLUE,
    };

    let mut surface = RecordingSurface::default();
    repaint(&mut surface, &doc, Some(&preview));

    assert_eq!(surface.ops.first(), Some(&Op::Clear));
    assert!(matches!(surface.ops[1], Op::Stroke { .. }));
    assert_eq!(surface.glyphs(), vec!["🌮"]);
    assert_eq!(
        surface.ops.last(),
        Some(&Op::Circle {
            center: Pos2::new(7.0, 7.0),
            radius: 2.5,
            color: Color32::BLUE,
        })
    );
}

#[test]
fn test_repaint_of_empty_scene_only_clears() {
    let mut surface = RecordingSurface::default();
    repaint(&mut surface, &Document::new(), None);
    assert_eq!(surface.ops, vec![Op::Clear]);
}

#[test]
fn test_sticker_preview_matches_placed_sticker() {
    let preview = Preview::Sticker {
        position: Pos2::new(40.0, 50.0),
        glyph: "🐸".to_owned(),
        rotation: 90.0,
        size: 32.0,
    };
    let mut from_preview = RecordingSurface::default();
    preview.draw(&mut from_preview);

    let mut from_sticker = RecordingSurface::default();
    factory::create_sticker(Pos2::new(40.0, 50.0), "🐸", 90.0, 32.0).display(&mut from_sticker);

    assert_eq!(from_preview.ops, from_sticker.ops);
}
