use egui::Color32;

/// What a pointer-down does. The two modes are mutually exclusive.
#[derive(Debug, Clone, PartialEq)]
pub enum ToolMode {
    /// Start a stroke with the current thickness and color
    Drawing,
    /// Place the given glyph with the current rotation
    Stickering { glyph: String },
}

/// Tool settings chosen through the UI controls.
#[derive(Debug, Clone, PartialEq)]
pub struct ToolState {
    thickness: f32,
    color: Color32,
    /// Degrees, in `[0, 360)`
    rotation: f32,
    mode: ToolMode,
}

impl ToolState {
    pub fn new(thickness: f32, color: Color32) -> Self {
        Self {
            thickness,
            color,
            rotation: 0.0,
            mode: ToolMode::Drawing,
        }
    }

    pub fn thickness(&self) -> f32 {
        self.thickness
    }

    pub fn color(&self) -> Color32 {
        self.color
    }

    pub fn rotation(&self) -> f32 {
        self.rotation
    }

    pub fn mode(&self) -> &ToolMode {
        &self.mode
    }

    pub fn selected_sticker(&self) -> Option<&str> {
        match &self.mode {
            ToolMode::Stickering { glyph } => Some(glyph),
            ToolMode::Drawing => None,
        }
    }

    /// Switch to drawing with `thickness`, deselecting any sticker.
    pub fn select_thickness(&mut self, thickness: f32) {
        self.thickness = thickness;
        self.mode = ToolMode::Drawing;
    }

    /// Switch to placing `glyph`. `rotation` replaces the current one if given.
    pub fn select_sticker(&mut self, glyph: &str, rotation: Option<f32>) {
        if let Some(rotation) = rotation {
            self.set_rotation(rotation);
        }
        self.mode = ToolMode::Stickering {
            glyph: glyph.to_owned(),
        };
    }

    pub fn set_color(&mut self, color: Color32) {
        self.color = color;
    }

    pub fn set_rotation(&mut self, degrees: f32) {
        self.rotation = degrees.rem_euclid(360.0);
    }
}

/// One sticker option shown in the UI.
#[derive(Debug, Clone, PartialEq)]
pub struct StickerDef {
    pub glyph: String,
    /// Added by the user this session
    pub custom: bool,
}

/// Ordered list of sticker options; built-ins first, custom ones appended.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StickerRegistry {
    stickers: Vec<StickerDef>,
}

impl StickerRegistry {
    pub fn new<I, S>(built_in: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            stickers: built_in
                .into_iter()
                .map(|glyph| StickerDef {
                    glyph: glyph.into(),
                    custom: false,
                })
                .collect(),
        }
    }

    /// Register user input as a sticker. Blank input registers nothing.
    ///
    /// Returns the registered glyph.
    pub fn register_custom(&mut self, input: &str) -> Option<&str> {
        let glyph = input.trim();
        if glyph.is_empty() {
            return None;
        }
        self.stickers.push(StickerDef {
            glyph: glyph.to_owned(),
            custom: true,
        });
        self.stickers.last().map(|def| def.glyph.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = &StickerDef> {
        self.stickers.iter()
    }

    pub fn len(&self) -> usize {
        self.stickers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stickers.is_empty()
    }
}
