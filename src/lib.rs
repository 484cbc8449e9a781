#![warn(clippy::all, rust_2018_idioms)]

pub mod app;
pub mod components;
pub mod config;
pub mod document;
pub mod element;
pub mod error;
pub mod event;
pub mod export;
pub mod geometry;
pub mod input;
pub mod panels;
pub mod preview;
pub mod renderer;
pub mod state;
pub mod surface;
pub mod tool;

pub use app::SketchpadApp;
pub use config::PadConfig;
pub use document::Document;
pub use element::{Item, MarkerLine, Sticker};
pub use error::{ConfigError, ExportError};
pub use event::Signal;
pub use input::{InputEvent, InputHandler};
pub use preview::Preview;
pub use state::{PadState, PointerState};
pub use surface::Surface;
pub use tool::{StickerRegistry, ToolMode, ToolState};
