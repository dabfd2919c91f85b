use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::core::{Margins, Viewport};
use crate::error::{ChartError, ChartResult};

use super::{ChartStyle, LabelLocale};

/// XP growth line chart settings.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GrowthChartConfig {
    /// Used for each dimension the surface reports as zero.
    pub fallback_size: Viewport,
    pub margins: Margins,
    /// Dashed grid lines above the solid zero baseline.
    pub grid_line_count: usize,
    /// The value axis tops out at the total rounded up to this step.
    pub xp_step: f64,
    pub point_radius: f64,
    pub line_width: f64,
}

impl Default for GrowthChartConfig {
    fn default() -> Self {
        Self {
            fallback_size: Viewport::new(600, 300),
            margins: Margins::new(40.0, 40.0, 40.0, 70.0),
            grid_line_count: 5,
            xp_step: 1000.0,
            point_radius: 5.0,
            line_width: 3.0,
        }
    }
}

/// Audit up/down bar chart settings.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AuditChartConfig {
    pub fallback_size: Viewport,
    pub margins: Margins,
    pub bar_height: f64,
    /// Vertical distance between the tops of the two bars.
    pub bar_spacing: f64,
}

impl Default for AuditChartConfig {
    fn default() -> Self {
        Self {
            fallback_size: Viewport::new(300, 200),
            margins: Margins::new(40.0, 100.0, 40.0, 70.0),
            bar_height: 40.0,
            bar_spacing: 60.0,
        }
    }
}

/// Vertical project timeline settings.
///
/// Height is derived from the project count, so only a fallback width exists.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TimelineChartConfig {
    pub fallback_width: u32,
    pub margins: Margins,
    pub project_spacing: f64,
    pub dot_radius: f64,
    pub label_offset: f64,
}

impl Default for TimelineChartConfig {
    fn default() -> Self {
        Self {
            fallback_width: 600,
            margins: Margins::new(50.0, 20.0, 30.0, 20.0),
            project_spacing: 40.0,
            dot_radius: 6.0,
            label_offset: 15.0,
        }
    }
}

/// Public dashboard configuration.
///
/// Serializable so hosts can load partial overrides from JSON; every omitted
/// field keeps its default.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DashboardConfig {
    pub growth: GrowthChartConfig,
    pub audit: AuditChartConfig,
    pub timeline: TimelineChartConfig,
    /// Size assumed by the "no data" placeholder for unsized surfaces.
    pub placeholder_fallback: Viewport,
    pub locale: LabelLocale,
    /// Fixed offset applied to date labels.
    pub utc_offset_minutes: i32,
    pub style: ChartStyle,
    pub resize_quiet_period_ms: u64,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            growth: GrowthChartConfig::default(),
            audit: AuditChartConfig::default(),
            timeline: TimelineChartConfig::default(),
            placeholder_fallback: Viewport::new(300, 200),
            locale: LabelLocale::default(),
            utc_offset_minutes: 0,
            style: ChartStyle::default(),
            resize_quiet_period_ms: 250,
        }
    }
}

impl DashboardConfig {
    #[must_use]
    pub fn with_locale(mut self, locale: LabelLocale) -> Self {
        self.locale = locale;
        self
    }

    #[must_use]
    pub fn with_utc_offset_minutes(mut self, utc_offset_minutes: i32) -> Self {
        self.utc_offset_minutes = utc_offset_minutes;
        self
    }

    #[must_use]
    pub fn with_style(mut self, style: ChartStyle) -> Self {
        self.style = style;
        self
    }

    #[must_use]
    pub fn resize_quiet_period(&self) -> Duration {
        Duration::from_millis(self.resize_quiet_period_ms)
    }

    /// Parses a (possibly partial) JSON config and validates it.
    pub fn from_json_str(input: &str) -> ChartResult<Self> {
        let config: Self = serde_json::from_str(input)
            .map_err(|e| ChartError::InvalidConfig(format!("failed to parse config json: {e}")))?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_json_pretty(&self) -> ChartResult<String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| ChartError::InvalidConfig(format!("failed to serialize config: {e}")))
    }

    pub fn validate(&self) -> ChartResult<()> {
        for (chart, margins) in [
            ("growth", self.growth.margins),
            ("audit", self.audit.margins),
            ("timeline", self.timeline.margins),
        ] {
            if !margins.is_valid() {
                return Err(ChartError::InvalidConfig(format!(
                    "{chart} margins must be finite and >= 0"
                )));
            }
        }
        if self.growth.grid_line_count == 0 {
            return Err(ChartError::InvalidConfig(
                "growth grid line count must be > 0".to_owned(),
            ));
        }
        for (name, value) in [
            ("growth.xp_step", self.growth.xp_step),
            ("growth.point_radius", self.growth.point_radius),
            ("growth.line_width", self.growth.line_width),
            ("audit.bar_height", self.audit.bar_height),
            ("audit.bar_spacing", self.audit.bar_spacing),
            ("timeline.project_spacing", self.timeline.project_spacing),
            ("timeline.dot_radius", self.timeline.dot_radius),
        ] {
            if !value.is_finite() || value <= 0.0 {
                return Err(ChartError::InvalidConfig(format!(
                    "`{name}` must be finite and > 0"
                )));
            }
        }
        if !self.timeline.label_offset.is_finite() || self.timeline.label_offset < 0.0 {
            return Err(ChartError::InvalidConfig(
                "`timeline.label_offset` must be finite and >= 0".to_owned(),
            ));
        }
        for (name, size) in [
            ("growth.fallback_size", self.growth.fallback_size),
            ("audit.fallback_size", self.audit.fallback_size),
            ("placeholder_fallback", self.placeholder_fallback),
        ] {
            if !size.is_valid() {
                return Err(ChartError::InvalidConfig(format!(
                    "`{name}` must have non-zero width and height"
                )));
            }
        }
        if self.timeline.fallback_width == 0 {
            return Err(ChartError::InvalidConfig(
                "`timeline.fallback_width` must be > 0".to_owned(),
            ));
        }
        self.style.validate()
    }
}
