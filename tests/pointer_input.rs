use egui::{Color32, Pos2};
use sketchpad::{InputEvent, Item, PadConfig, PadState, PointerState, Preview, Signal};

fn state() -> PadState {
    PadState::with_rng(&PadConfig::default(), fastrand::Rng::with_seed(42))
}

fn down(state: &mut PadState, x: f32, y: f32) -> Option<Signal> {
    state.handle_input(InputEvent::PointerDown {
        position: Pos2::new(x, y),
    })
}

fn drag(state: &mut PadState, x: f32, y: f32) -> Option<Signal> {
    state.handle_input(InputEvent::PointerMove {
        position: Pos2::new(x, y),
    })
}

fn up(state: &mut PadState, x: f32, y: f32) -> Option<Signal> {
    state.handle_input(InputEvent::PointerUp {
        position: Pos2::new(x, y),
    })
}

#[test]
fn test_stroke_is_visible_while_drawing() {
    let mut state = state();
    assert_eq!(down(&mut state, 1.0, 1.0), Some(Signal::DrawingChanged));
    assert_eq!(state.pointer(), PointerState::DrawingStroke { index: 0 });
    assert_eq!(state.document().len(), 1);

    assert_eq!(drag(&mut state, 2.0, 3.0), Some(Signal::DrawingChanged));
    assert_eq!(drag(&mut state, 4.0, 5.0), Some(Signal::DrawingChanged));
    let line = state.document().items()[0].as_stroke().unwrap();
    assert_eq!(
        line.points(),
        &[Pos2::new(1.0, 1.0), Pos2::new(2.0, 3.0), Pos2::new(4.0, 5.0)]
    );
    assert!(state.preview().is_none());

    assert_eq!(up(&mut state, 4.0, 5.0), Some(Signal::DrawingChanged));
    assert_eq!(state.pointer(), PointerState::Idle);

    // The finished line no longer grows
    assert_eq!(drag(&mut state, 9.0, 9.0), Some(Signal::ToolMoved));
    assert_eq!(
        state.document().items()[0].as_stroke().unwrap().points().len(),
        3
    );
}

#[test]
fn test_leaving_the_surface_finishes_the_stroke() {
    let mut state = state();
    down(&mut state, 1.0, 1.0);
    drag(&mut state, 2.0, 2.0);
    assert_eq!(
        state.handle_input(InputEvent::PointerLeave),
        Some(Signal::DrawingChanged)
    );
    assert!(!state.is_drawing());
}

#[test]
fn test_leave_drops_preview() {
    let mut state = state();
    drag(&mut state, 1.0, 1.0);
    assert!(state.preview().is_some());
    assert_eq!(
        state.handle_input(InputEvent::PointerLeave),
        Some(Signal::ToolMoved)
    );
    assert!(state.preview().is_none());
    assert_eq!(state.handle_input(InputEvent::PointerLeave), None);
}

#[test]
fn test_pointer_up_when_idle_is_a_noop() {
    let mut state = state();
    assert_eq!(up(&mut state, 1.0, 1.0), None);
    assert!(state.document().is_empty());
}

#[test]
fn test_thickness_is_captured_at_creation() {
    let config = PadConfig::default();
    let mut state = state();

    state.select_thickness(config.thin);
    down(&mut state, 0.0, 0.0);
    drag(&mut state, 5.0, 5.0);
    up(&mut state, 5.0, 5.0);

    state.select_thickness(config.thick);
    down(&mut state, 10.0, 0.0);
    drag(&mut state, 15.0, 5.0);
    up(&mut state, 15.0, 5.0);

    let items = state.document().items();
    assert_eq!(items[0].as_stroke().unwrap().thickness(), 1.0);
    assert_eq!(items[1].as_stroke().unwrap().thickness(), 5.0);
}

#[test]
fn test_color_is_captured_at_creation() {
    let mut state = state();
    state.set_color(Color32::RED);
    down(&mut state, 0.0, 0.0);
    up(&mut state, 0.0, 0.0);
    state.set_color(Color32::BLUE);

    assert_eq!(
        state.document().items()[0].as_stroke().unwrap().color(),
        Color32::RED
    );
}

#[test]
fn test_sticker_and_thickness_tools_are_exclusive() {
    let mut state = state();

    state.select_sticker("🌮");
    assert_eq!(down(&mut state, 20.0, 30.0), Some(Signal::DrawingChanged));
    assert!(!state.is_drawing());
    let Item::Sticker(sticker) = &state.document().items()[0] else {
        panic!("expected a sticker");
    };
    assert_eq!(sticker.glyph(), "🌮");
    assert_eq!(sticker.position(), Pos2::new(20.0, 30.0));
    assert_eq!(sticker.rotation(), state.tools().rotation());
    up(&mut state, 20.0, 30.0);

    state.select_thickness(5.0);
    down(&mut state, 1.0, 1.0);
    assert!(matches!(state.document().items()[1], Item::Stroke(_)));
    up(&mut state, 1.0, 1.0);

    state.select_sticker("🐸");
    down(&mut state, 2.0, 2.0);
    assert!(matches!(state.document().items()[2], Item::Sticker(_)));
}

#[test]
fn test_preview_follows_the_tool() {
    let mut state = state();
    drag(&mut state, 3.0, 4.0);
    assert_eq!(
        state.preview(),
        Some(&Preview::Tool {
            position: Pos2::new(3.0, 4.0),
            thickness: 1.0,
            color: Color32::BLACK,
        })
    );

    state.select_sticker("🎃");
    drag(&mut state, 6.0, 7.0);
    match state.preview() {
        Some(Preview::Sticker {
            position, glyph, ..
        }) => {
            assert_eq!(*position, Pos2::new(6.0, 7.0));
            assert_eq!(glyph, "🎃");
        }
        other => panic!("unexpected preview {other:?}"),
    }

    // Previews never reach the display list
    assert!(state.document().is_empty());
    assert!(state.document().redo_stack().is_empty());
}

#[test]
fn test_custom_sticker_is_registered_and_selected() {
    let mut state = state();
    let before = state.stickers().len();

    assert!(!state.add_custom_sticker("   "));
    assert_eq!(state.stickers().len(), before);
    assert_eq!(state.tools().selected_sticker(), None);

    assert!(state.add_custom_sticker("🧽"));
    assert_eq!(state.stickers().len(), before + 1);
    assert_eq!(state.tools().selected_sticker(), Some("🧽"));
}

#[test]
fn test_empty_undo_redo_do_not_repaint() {
    let mut state = state();
    assert_eq!(state.undo(), None);
    assert_eq!(state.redo(), None);
    assert_eq!(state.clear(), Signal::DrawingChanged);
}
