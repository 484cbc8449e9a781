use std::cell::RefCell;

use super::{EventHandler, Signal};

/// Dispatches signals to registered handlers.
///
/// Dispatch is synchronous: every handler has run by the time `emit` returns.
pub struct EventBus {
    handlers: RefCell<Vec<Box<dyn EventHandler>>>,
}

impl std::fmt::Debug for EventBus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EventBus")
            .field("handlers", &format!("<{} handlers>", self.handlers.borrow().len()))
            .finish()
    }
}

impl Default for EventBus {
    fn default() -> Self {
        Self::new()
    }
}

impl EventBus {
    pub fn new() -> Self {
        Self {
            handlers: RefCell::new(Vec::new()),
        }
    }

    /// Subscribe a handler to receive signals
    pub fn subscribe(&self, handler: Box<dyn EventHandler>) {
        self.handlers.borrow_mut().push(handler);
    }

    /// Emit a signal to all handlers, in subscription order
    pub fn emit(&self, signal: Signal) {
        log::trace!("Signal {:?}", signal);
        for handler in &mut *self.handlers.borrow_mut() {
            handler.handle_event(signal);
        }
    }
}

/// Asks egui for a new frame, which repaints the whole canvas.
pub struct RepaintRequester {
    ctx: egui::Context,
}

impl RepaintRequester {
    pub fn new(ctx: egui::Context) -> Self {
        Self { ctx }
    }
}

impl EventHandler for RepaintRequester {
    fn handle_event(&mut self, _signal: Signal) {
        self.ctx.request_repaint();
    }
}
