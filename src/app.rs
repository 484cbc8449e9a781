use egui::{Key, KeyboardShortcut, Modifiers};

use crate::config::PadConfig;
use crate::error::ExportResult;
use crate::event::{EventBus, EventHandler, RepaintRequester, Signal};
use crate::export;
use crate::input::InputHandler;
use crate::panels;
use crate::state::PadState;
use crate::surface::GlyphFonts;

const UNDO: KeyboardShortcut = KeyboardShortcut::new(Modifiers::COMMAND, Key::Z);
const REDO: KeyboardShortcut = KeyboardShortcut::new(Modifiers::COMMAND.plus(Modifiers::SHIFT), Key::Z);
const REDO_ALT: KeyboardShortcut = KeyboardShortcut::new(Modifiers::COMMAND, Key::Y);

/// The eframe application: owns the pad state and routes UI events into it.
///
/// Nothing is persisted between runs.
pub struct SketchpadApp {
    config: PadConfig,
    state: PadState,
    input: InputHandler,
    bus: EventBus,
    /// Loaded on first export
    fonts: Option<GlyphFonts>,
    /// Text of the open custom-sticker prompt
    custom_prompt: Option<String>,
    status: Option<String>,
}

impl SketchpadApp {
    /// Called once before the first frame.
    pub fn new(cc: &eframe::CreationContext<'_>, config: PadConfig) -> Self {
        let app = Self::headless(config);
        app.subscribe(Box::new(RepaintRequester::new(cc.egui_ctx.clone())));
        app
    }

    /// An app with no window attached; signals go to no one until subscribed.
    pub fn headless(config: PadConfig) -> Self {
        let logical = egui::Vec2::splat(config.canvas_size);
        Self {
            state: PadState::new(&config),
            input: InputHandler::new(egui::Rect::from_min_size(egui::Pos2::ZERO, logical), logical),
            bus: EventBus::new(),
            fonts: None,
            custom_prompt: None,
            status: None,
            config,
        }
    }

    pub fn config(&self) -> &PadConfig {
        &self.config
    }

    pub fn state(&self) -> &PadState {
        &self.state
    }

    /// Register a listener for the pad's repaint signals.
    pub fn subscribe(&self, handler: Box<dyn EventHandler>) {
        self.bus.subscribe(handler);
    }

    pub fn status(&self) -> Option<&str> {
        self.status.as_deref()
    }

    fn dispatch(&self, signal: Option<Signal>) {
        if let Some(signal) = signal {
            self.bus.emit(signal);
        }
    }

    pub fn undo(&mut self) {
        let signal = self.state.undo();
        self.dispatch(signal);
    }

    pub fn redo(&mut self) {
        let signal = self.state.redo();
        self.dispatch(signal);
    }

    pub fn clear(&mut self) {
        let signal = self.state.clear();
        self.dispatch(Some(signal));
    }

    pub fn select_thickness(&mut self, thickness: f32) {
        let signal = self.state.select_thickness(thickness);
        self.dispatch(signal);
    }

    pub fn select_sticker(&mut self, glyph: &str) {
        let signal = self.state.select_sticker(glyph);
        self.dispatch(signal);
    }

    pub fn set_color(&mut self, color: egui::Color32) {
        let signal = self.state.set_color(color);
        self.dispatch(signal);
    }

    pub fn set_rotation(&mut self, degrees: f32) {
        let signal = self.state.set_rotation(degrees);
        self.dispatch(signal);
    }

    pub fn custom_sticker_prompt(&self) -> Option<&str> {
        self.custom_prompt.as_deref()
    }

    pub fn open_custom_sticker_prompt(&mut self) {
        self.custom_prompt = Some(self.config.custom_sticker_suggestion.clone());
    }

    pub fn edit_custom_sticker(&mut self, text: String) {
        if self.custom_prompt.is_some() {
            self.custom_prompt = Some(text);
        }
    }

    /// Close the prompt, registering `text` as a sticker unless it is blank.
    pub fn confirm_custom_sticker(&mut self, text: &str) {
        self.custom_prompt = None;
        if self.state.add_custom_sticker(text) {
            self.dispatch(Some(Signal::ToolMoved));
        }
    }

    pub fn cancel_custom_sticker(&mut self) {
        self.custom_prompt = None;
    }

    /// Export the committed drawing; the outcome is shown as the status line.
    pub fn export(&mut self) {
        self.status = Some(match self.try_export() {
            Ok(destination) => format!("Exported {}", destination),
            Err(err) => {
                log::error!("Export failed: {}", err);
                format!("Export failed: {}", err)
            }
        });
    }

    fn try_export(&mut self) -> ExportResult<String> {
        let fonts = match self.fonts.take() {
            Some(fonts) => fonts,
            None => GlyphFonts::from_egui_defaults()?,
        };
        let result = export::export(self.state.document(), &self.config, &fonts);
        self.fonts = Some(fonts);
        result
    }

    /// Feed this frame's pointer input over the canvas widget into the pad.
    pub fn handle_canvas_input(&mut self, response: &egui::Response) {
        for event in self.input.process_input(response) {
            let signal = self.state.handle_input(event);
            self.dispatch(signal);
        }
    }

    /// Lay out and handle one frame of the whole UI.
    pub fn ui(&mut self, ctx: &egui::Context) {
        self.handle_shortcuts(ctx);
        panels::tools_panel(self, ctx);
        panels::central_panel(self, ctx);
        panels::custom_sticker_window(self, ctx);
    }

    fn handle_shortcuts(&mut self, ctx: &egui::Context) {
        // The prompt's text field has its own undo
        if self.custom_prompt.is_some() {
            return;
        }
        // Redo first: the plain undo shortcut also matches with shift held
        let (redo, undo) = ctx.input_mut(|i| {
            let redo = i.consume_shortcut(&REDO) || i.consume_shortcut(&REDO_ALT);
            (redo, i.consume_shortcut(&UNDO))
        });
        if redo {
            self.redo();
        }
        if undo {
            self.undo();
        }
    }
}

impl eframe::App for SketchpadApp {
    /// Called each time the UI needs repainting, which may be many times per second.
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.ui(ctx);
    }
}
