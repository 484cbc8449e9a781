mod central_panel;
mod custom_sticker;
mod tools_panel;

pub use central_panel::central_panel;
pub use custom_sticker::custom_sticker_window;
pub use tools_panel::tools_panel;
