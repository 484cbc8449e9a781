mod bus;

pub use bus::{EventBus, RepaintRequester};

/// Repaint requests raised by state changes.
///
/// Both are handled with the same full clear-and-redraw; the distinction only
/// says what caused it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Signal {
    /// The committed scene changed
    DrawingChanged,
    /// Only the preview moved or changed
    ToolMoved,
}

pub trait EventHandler {
    fn handle_event(&mut self, signal: Signal);
}
