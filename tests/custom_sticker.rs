use std::cell::RefCell;
use std::rc::Rc;

use egui::{Event, Modifiers, PointerButton, Pos2, RawInput, Rect, Vec2};
use sketchpad::event::EventHandler;
use sketchpad::{PadConfig, Signal, SketchpadApp, ToolMode};

struct Recorder(Rc<RefCell<Vec<Signal>>>);

impl EventHandler for Recorder {
    fn handle_event(&mut self, signal: Signal) {
        self.0.borrow_mut().push(signal);
    }
}

fn app() -> (SketchpadApp, Rc<RefCell<Vec<Signal>>>) {
    let signals = Rc::new(RefCell::new(Vec::new()));
    let app = SketchpadApp::headless(PadConfig::default());
    app.subscribe(Box::new(Recorder(signals.clone())));
    (app, signals)
}

fn run_frame(ctx: &egui::Context, app: &mut SketchpadApp, events: Vec<Event>) {
    let input = RawInput {
        screen_rect: Some(Rect::from_min_size(Pos2::ZERO, Vec2::new(800.0, 600.0))),
        events,
        ..Default::default()
    };
    let _ = ctx.run(input, |ctx| app.ui(ctx));
}

fn settle(ctx: &egui::Context, app: &mut SketchpadApp) {
    for _ in 0..3 {
        run_frame(ctx, app, Vec::new());
    }
}

fn button(pos: Pos2, pressed: bool) -> Event {
    Event::PointerButton {
        pos,
        button: PointerButton::Primary,
        pressed,
        modifiers: Modifiers::NONE,
    }
}

fn click(ctx: &egui::Context, app: &mut SketchpadApp, pos: Pos2) {
    run_frame(ctx, app, vec![Event::PointerMoved(pos)]);
    run_frame(ctx, app, vec![button(pos, true)]);
    run_frame(ctx, app, vec![button(pos, false)]);
}

fn custom_count(app: &SketchpadApp) -> usize {
    app.state().stickers().iter().filter(|def| def.custom).count()
}

#[test]
fn test_cancel_leaves_everything_unchanged() {
    let (mut app, signals) = app();
    let tools_before = app.state().tools().clone();
    let stickers_before = app.state().stickers().len();

    app.open_custom_sticker_prompt();
    assert_eq!(app.custom_sticker_prompt(), Some("🧽"));
    app.edit_custom_sticker("🦀".to_owned());
    app.cancel_custom_sticker();

    assert_eq!(app.custom_sticker_prompt(), None);
    assert_eq!(app.state().stickers().len(), stickers_before);
    assert_eq!(app.state().tools(), &tools_before);
    assert_eq!(app.state().tools().mode(), &ToolMode::Drawing);
    assert!(app.state().document().is_empty());
    assert!(signals.borrow().is_empty());
}

#[test]
fn test_confirming_the_suggestion_registers_and_selects_it() {
    let (mut app, signals) = app();
    app.open_custom_sticker_prompt();
    let suggestion = app.custom_sticker_prompt().map(str::to_owned);
    app.confirm_custom_sticker(suggestion.as_deref().unwrap_or_default());

    assert_eq!(app.custom_sticker_prompt(), None);
    assert_eq!(custom_count(&app), 1);
    let last = app.state().stickers().iter().last().unwrap();
    assert_eq!(last.glyph, "🧽");
    assert_eq!(app.state().tools().selected_sticker(), Some("🧽"));
    assert!(app.state().document().is_empty());
    assert_eq!(*signals.borrow(), vec![Signal::ToolMoved]);
}

#[test]
fn test_confirming_blank_text_acts_like_cancel() {
    let (mut app, signals) = app();
    app.select_sticker("🐸");
    let tools_before = app.state().tools().clone();

    app.open_custom_sticker_prompt();
    app.confirm_custom_sticker("   ");

    assert_eq!(app.custom_sticker_prompt(), None);
    assert_eq!(custom_count(&app), 0);
    assert_eq!(app.state().tools(), &tools_before);
    assert!(signals.borrow().is_empty());
}

#[test]
fn test_edits_are_ignored_without_an_open_prompt() {
    let (mut app, _) = app();
    app.edit_custom_sticker("🦀".to_owned());
    assert_eq!(app.custom_sticker_prompt(), None);
}

#[test]
fn test_clicks_on_the_prompt_window_do_not_reach_the_canvas() {
    let ctx = egui::Context::default();
    let (mut app, _) = app();
    app.select_sticker("🐸");
    settle(&ctx, &mut app);

    app.open_custom_sticker_prompt();
    settle(&ctx, &mut app);
    let window = ctx
        .memory(|mem| mem.area_rect(egui::Id::new("Custom Sticker")))
        .expect("prompt window was laid out");
    click(&ctx, &mut app, window.center());

    assert!(app.state().document().is_empty());
    assert!(app.state().preview().is_none());

    // The same spot is canvas once the prompt is gone
    app.cancel_custom_sticker();
    settle(&ctx, &mut app);
    click(&ctx, &mut app, window.center());

    let items = app.state().document().items();
    assert_eq!(items.len(), 1);
    let sticker = items[0].as_sticker().expect("a sticker was placed");
    assert_eq!(sticker.glyph(), "🐸");
    let preview = app.state().preview().expect("sticker preview follows the pointer");
    assert_eq!(preview.position(), sticker.position());
}
