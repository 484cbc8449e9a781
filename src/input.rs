use egui::{Context, Pos2, Rect, Response, Vec2};

use crate::geometry::map_to_surface;

/// Pointer events in logical canvas coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    /// Primary button pressed over the canvas
    PointerDown { position: Pos2 },
    /// Pointer moved over the canvas
    PointerMove { position: Pos2 },
    /// Primary button released over the canvas
    PointerUp { position: Pos2 },
    /// Pointer left the canvas (or the window)
    PointerLeave,
}

/// The pointer as seen in one frame, in screen coordinates.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct PointerSample {
    pub hover: Option<Pos2>,
    pub pressed: bool,
    pub released: bool,
}

impl PointerSample {
    pub fn from_ctx(ctx: &Context) -> Self {
        ctx.input(|input| Self {
            hover: input.pointer.hover_pos(),
            pressed: input.pointer.primary_pressed(),
            released: input.pointer.primary_released(),
        })
    }

    /// Like [`Self::from_ctx`], but the pointer only counts as hovering while
    /// it is over `response` and no other layer (window, popup) covers it.
    pub fn from_response(response: &Response) -> Self {
        let sample = Self::from_ctx(&response.ctx);
        if response.contains_pointer() {
            sample
        } else {
            Self::default()
        }
    }
}

/// Turns raw egui pointer input into canvas [`InputEvent`]s.
#[derive(Debug, Clone)]
pub struct InputHandler {
    canvas_rect: Rect,
    logical_size: Vec2,
    last_pointer_pos: Option<Pos2>,
    pointer_inside: bool,
}

impl InputHandler {
    pub fn new(canvas_rect: Rect, logical_size: Vec2) -> Self {
        Self {
            canvas_rect,
            logical_size,
            last_pointer_pos: None,
            pointer_inside: false,
        }
    }

    /// Update where the canvas is displayed (e.g. if the window is resized)
    pub fn set_canvas_rect(&mut self, rect: Rect) {
        self.canvas_rect = rect;
    }

    /// Events for the canvas widget that produced `response`.
    pub fn process_input(&mut self, response: &Response) -> Vec<InputEvent> {
        self.set_canvas_rect(response.rect);
        self.process_sample(PointerSample::from_response(response))
    }

    pub fn process_sample(&mut self, sample: PointerSample) -> Vec<InputEvent> {
        let mut events = Vec::new();
        let inside = sample
            .hover
            .is_some_and(|pos| self.canvas_rect.contains(pos));

        match sample.hover {
            Some(pos) if inside => {
                let position = map_to_surface(pos, self.canvas_rect, self.logical_size);
                if self.last_pointer_pos != Some(pos) || !self.pointer_inside {
                    events.push(InputEvent::PointerMove { position });
                }
                if sample.pressed {
                    events.push(InputEvent::PointerDown { position });
                }
                if sample.released {
                    events.push(InputEvent::PointerUp { position });
                }
            }
            _ => {
                if self.pointer_inside {
                    events.push(InputEvent::PointerLeave);
                }
            }
        }

        self.pointer_inside = inside;
        self.last_pointer_pos = sample.hover;
        events
    }
}
