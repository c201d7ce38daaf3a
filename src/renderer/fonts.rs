use rusttype::{point, Font, Scale};

use crate::error::MonitorError;

pub(crate) struct FontConfig {
    pub font: Font<'static>,
    pub scale: Scale,
}

impl FontConfig {
    /// Horizontal advance of `text` in pixels.
    pub fn text_width(&self, text: &str) -> f32 {
        self.font
            .layout(text, self.scale, point(0.0, 0.0))
            .last()
            .map(|g| g.position().x + g.unpositioned().h_metrics().advance_width)
            .unwrap_or(0.0)
    }
}

pub fn title_font_config() -> Result<FontConfig, MonitorError> {
    get_font_config(24.0)
}

pub fn regular_font_config() -> Result<FontConfig, MonitorError> {
    get_font_config(18.0)
}

pub fn small_font_config() -> Result<FontConfig, MonitorError> {
    get_font_config(14.0)
}

fn get_font_config(scale: f32) -> Result<FontConfig, MonitorError> {
    let font = Font::try_from_bytes(include_bytes!("fonts/DejaVuSansMono.ttf") as &[u8])
        .ok_or(MonitorError::Font)?;
    let scale = Scale::uniform(scale);
    Ok(FontConfig { font, scale })
}
