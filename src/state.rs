use egui::{Color32, Pos2};

use crate::config::PadConfig;
use crate::document::Document;
use crate::element::{Item, MarkerLine, Sticker};
use crate::event::Signal;
use crate::input::InputEvent;
use crate::preview::Preview;
use crate::tool::{StickerRegistry, ToolMode, ToolState};

/// What the pointer is doing on the canvas.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum PointerState {
    #[default]
    Idle,
    /// Dragging out the stroke at `index` in the display list
    DrawingStroke { index: usize },
}

/// All mutable state of the pad. Input and button handlers go through here,
/// and each returns the repaint it needs, if any.
#[derive(Debug)]
pub struct PadState {
    document: Document,
    tools: ToolState,
    stickers: StickerRegistry,
    pointer: PointerState,
    preview: Option<Preview>,
    sticker_size: f32,
    randomize_rotation: bool,
    clear_redo_on_commit: bool,
    rng: fastrand::Rng,
}

impl PadState {
    pub fn new(config: &PadConfig) -> Self {
        Self::with_rng(config, fastrand::Rng::new())
    }

    /// Like [`PadState::new`] with a caller-provided random source for sticker rotations.
    pub fn with_rng(config: &PadConfig, rng: fastrand::Rng) -> Self {
        Self {
            document: Document::new(),
            tools: ToolState::new(config.thin, config.initial_color()),
            stickers: StickerRegistry::new(config.stickers.iter().cloned()),
            pointer: PointerState::Idle,
            preview: None,
            sticker_size: config.sticker_size,
            randomize_rotation: config.randomize_sticker_rotation,
            clear_redo_on_commit: config.clear_redo_on_commit,
            rng,
        }
    }

    pub fn document(&self) -> &Document {
        &self.document
    }

    pub fn tools(&self) -> &ToolState {
        &self.tools
    }

    pub fn stickers(&self) -> &StickerRegistry {
        &self.stickers
    }

    pub fn pointer(&self) -> PointerState {
        self.pointer
    }

    pub fn preview(&self) -> Option<&Preview> {
        self.preview.as_ref()
    }

    pub fn is_drawing(&self) -> bool {
        matches!(self.pointer, PointerState::DrawingStroke { .. })
    }

    pub fn handle_input(&mut self, event: InputEvent) -> Option<Signal> {
        match event {
            InputEvent::PointerDown { position } => Some(self.pointer_down(position)),
            InputEvent::PointerMove { position } => Some(self.pointer_move(position)),
            InputEvent::PointerUp { .. } => self.finish_stroke(),
            InputEvent::PointerLeave => {
                let finished = self.finish_stroke();
                let had_preview = self.preview.take().is_some();
                finished.or(had_preview.then_some(Signal::ToolMoved))
            }
        }
    }

    fn pointer_down(&mut self, position: Pos2) -> Signal {
        self.finish_stroke();
        let item = match self.tools.mode() {
            ToolMode::Stickering { glyph } => Item::Sticker(Sticker::new(
                position,
                glyph,
                self.tools.rotation(),
                self.sticker_size,
            )),
            ToolMode::Drawing => Item::Stroke(MarkerLine::new(
                position,
                self.tools.thickness(),
                self.tools.color(),
            )),
        };
        let is_stroke = matches!(item, Item::Stroke(_));

        if self.clear_redo_on_commit {
            self.document.clear_redo();
        }
        let index = self.document.commit(item);

        if is_stroke {
            self.pointer = PointerState::DrawingStroke { index };
            self.preview = None;
            log::debug!("Stroke started at {:?}", position);
        }
        Signal::DrawingChanged
    }

    fn pointer_move(&mut self, position: Pos2) -> Signal {
        if let PointerState::DrawingStroke { index } = self.pointer {
            if self.document.append_point(index, position) {
                return Signal::DrawingChanged;
            }
            log::warn!("Active stroke {} is gone; ending it", index);
            self.pointer = PointerState::Idle;
        }

        self.preview = Some(self.make_preview(position));
        Signal::ToolMoved
    }

    fn make_preview(&self, position: Pos2) -> Preview {
        match self.tools.mode() {
            ToolMode::Drawing => Preview::Tool {
                position,
                thickness: self.tools.thickness(),
                color: self.tools.color(),
            },
            ToolMode::Stickering { glyph } => Preview::Sticker {
                position,
                glyph: glyph.clone(),
                rotation: self.tools.rotation(),
                size: self.sticker_size,
            },
        }
    }

    /// End the active stroke, if any. Its points are final from here on.
    fn finish_stroke(&mut self) -> Option<Signal> {
        match std::mem::take(&mut self.pointer) {
            PointerState::DrawingStroke { index } => {
                log::debug!("Stroke {} finished", index);
                Some(Signal::DrawingChanged)
            }
            PointerState::Idle => None,
        }
    }

    pub fn undo(&mut self) -> Option<Signal> {
        self.finish_stroke();
        self.document.undo().then_some(Signal::DrawingChanged)
    }

    pub fn redo(&mut self) -> Option<Signal> {
        self.finish_stroke();
        self.document.redo().then_some(Signal::DrawingChanged)
    }

    pub fn clear(&mut self) -> Signal {
        self.finish_stroke();
        self.document.clear();
        log::info!("Canvas cleared");
        Signal::DrawingChanged
    }

    pub fn select_thickness(&mut self, thickness: f32) -> Option<Signal> {
        self.tools.select_thickness(thickness);
        log::debug!("Marker thickness {}", thickness);
        self.invalidate_preview()
    }

    pub fn select_sticker(&mut self, glyph: &str) -> Option<Signal> {
        let rotation = self
            .randomize_rotation
            .then(|| self.rng.f32() * 360.0);
        self.tools.select_sticker(glyph, rotation);
        log::debug!("Sticker {} at {}°", glyph, self.tools.rotation());
        self.invalidate_preview()
    }

    pub fn set_color(&mut self, color: Color32) -> Option<Signal> {
        self.tools.set_color(color);
        self.invalidate_preview()
    }

    pub fn set_rotation(&mut self, degrees: f32) -> Option<Signal> {
        self.tools.set_rotation(degrees);
        self.invalidate_preview()
    }

    /// Register `input` as a custom sticker and select it.
    ///
    /// Blank input leaves everything unchanged and returns false.
    pub fn add_custom_sticker(&mut self, input: &str) -> bool {
        let Some(glyph) = self.stickers.register_custom(input).map(str::to_owned) else {
            return false;
        };
        log::info!("Custom sticker {} registered", glyph);
        self.select_sticker(&glyph);
        true
    }

    /// Drop the preview so the next pointer move recreates it for the current tool.
    fn invalidate_preview(&mut self) -> Option<Signal> {
        self.preview.take().map(|_| Signal::ToolMoved)
    }
}
