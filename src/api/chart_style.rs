use serde::{Deserialize, Serialize};

use crate::error::ChartResult;
use crate::render::Color;

/// Colors and stroke/font sizes shared by every chart.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChartStyle {
    pub text_color: Color,
    /// Placeholder ("no data") text.
    pub muted_text_color: Color,
    pub grid_line_color: Color,
    /// XP line, markers and the audit ratio label.
    pub accent_color: Color,
    /// Up bar, passed projects, high success rate.
    pub pass_color: Color,
    /// Down bar, failed projects, low success rate.
    pub fail_color: Color,
    /// Medium success rate.
    pub warning_color: Color,
    pub axis_line_width: f64,
    pub grid_line_width: f64,
    pub font_size_px: f64,
    pub title_font_size_px: f64,
}

impl Default for ChartStyle {
    fn default() -> Self {
        Self {
            text_color: Color::rgb(1.0, 1.0, 1.0),
            muted_text_color: Color::rgb8(0x88, 0x88, 0x88),
            grid_line_color: Color::rgb8(0x55, 0x55, 0x55),
            accent_color: Color::rgb8(0xb7, 0x7a, 0xc7),
            pass_color: Color::rgb8(0x4c, 0xaf, 0x50),
            fail_color: Color::rgb8(0xf4, 0x43, 0x36),
            warning_color: Color::rgb8(0xff, 0xc1, 0x07),
            axis_line_width: 2.0,
            grid_line_width: 1.0,
            font_size_px: 12.0,
            title_font_size_px: 14.0,
        }
    }
}

impl ChartStyle {
    pub fn validate(&self) -> ChartResult<()> {
        for color in [
            self.text_color,
            self.muted_text_color,
            self.grid_line_color,
            self.accent_color,
            self.pass_color,
            self.fail_color,
            self.warning_color,
        ] {
            color.validate()?;
        }
        for (name, value) in [
            ("axis_line_width", self.axis_line_width),
            ("grid_line_width", self.grid_line_width),
            ("font_size_px", self.font_size_px),
            ("title_font_size_px", self.title_font_size_px),
        ] {
            if !value.is_finite() || value <= 0.0 {
                return Err(crate::error::ChartError::InvalidConfig(format!(
                    "style `{name}` must be finite and > 0"
                )));
            }
        }
        Ok(())
    }
}
