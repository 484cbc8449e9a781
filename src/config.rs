use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::error::ConfigError;

/// Environment variable naming a JSON config file.
pub const CONFIG_ENV_VAR: &str = "SKETCHPAD_CONFIG";

/// Pad settings. Every field is optional in the config file.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)] // missing fields keep their default values
pub struct PadConfig {
    /// Logical width and height of the drawing surface
    pub canvas_size: f32,
    /// Width and height of the exported image, in pixels
    pub export_size: u32,
    pub export_filename: String,
    /// Directory the export is written to on native targets
    pub export_dir: PathBuf,
    pub thin: f32,
    pub thick: f32,
    /// Font size stickers are placed with
    pub sticker_size: f32,
    /// Built-in sticker glyphs, in button order
    pub stickers: Vec<String>,
    /// Text the custom-sticker prompt starts with
    pub custom_sticker_suggestion: String,
    pub randomize_sticker_rotation: bool,
    /// Drop the redo stack whenever a new stroke or sticker is committed
    pub clear_redo_on_commit: bool,
    pub initial_color: [u8; 3],
}

impl Default for PadConfig {
    fn default() -> Self {
        Self {
            canvas_size: 256.0,
            export_size: 1024,
            export_filename: "sketchpad.png".to_owned(),
            export_dir: PathBuf::from("."),
            thin: 1.0,
            thick: 5.0,
            sticker_size: 32.0,
            stickers: vec!["🐸".to_owned(), "🌮".to_owned(), "🎃".to_owned()],
            custom_sticker_suggestion: "🧽".to_owned(),
            randomize_sticker_rotation: true,
            clear_redo_on_commit: false,
            initial_color: [0, 0, 0],
        }
    }
}

impl PadConfig {
    /// Load from the file named by [`CONFIG_ENV_VAR`], or defaults if it is unset.
    pub fn load() -> Result<Self, ConfigError> {
        match std::env::var_os(CONFIG_ENV_VAR) {
            Some(path) => Self::from_file(Path::new(&path)),
            None => Ok(Self::default()),
        }
    }

    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_json(&text)?;
        log::info!("Loaded config from {}", path.display());
        Ok(config)
    }

    pub fn from_json(text: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let positive = [
            ("canvas_size", self.canvas_size),
            ("thin", self.thin),
            ("thick", self.thick),
            ("sticker_size", self.sticker_size),
        ];
        for (name, value) in positive {
            if !(value.is_finite() && value > 0.0) {
                return Err(ConfigError::Invalid(format!(
                    "{} must be a positive number, got {}",
                    name, value
                )));
            }
        }
        if (self.export_size as f32) < self.canvas_size {
            return Err(ConfigError::Invalid(format!(
                "export_size ({}) must be at least canvas_size ({})",
                self.export_size, self.canvas_size
            )));
        }
        if self.export_filename.trim().is_empty() {
            return Err(ConfigError::Invalid("export_filename is empty".to_owned()));
        }
        Ok(())
    }

    /// Factor that maps logical canvas coordinates onto export pixels.
    pub fn export_scale(&self) -> f32 {
        self.export_size as f32 / self.canvas_size
    }

    pub fn initial_color(&self) -> egui::Color32 {
        let [r, g, b] = self.initial_color;
        egui::Color32::from_rgb(r, g, b)
    }

    pub fn export_path(&self) -> PathBuf {
        self.export_dir.join(&self.export_filename)
    }
}
