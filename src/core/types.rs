use serde::{Deserialize, Serialize};

use crate::core::scale::{map_time_to_x, map_value_to_y};

/// Pixel size of a drawing surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Viewport {
    pub width: u32,
    pub height: u32,
}

impl Viewport {
    #[must_use]
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    #[must_use]
    pub fn is_valid(self) -> bool {
        self.width > 0 && self.height > 0
    }

    /// Replaces each zero dimension with the matching fallback dimension.
    ///
    /// Surfaces that have not been laid out yet report a zero size.
    #[must_use]
    pub fn or_fallback(self, fallback: Viewport) -> Self {
        Self {
            width: if self.width == 0 {
                fallback.width
            } else {
                self.width
            },
            height: if self.height == 0 {
                fallback.height
            } else {
                self.height
            },
        }
    }
}

/// Space reserved around the plotting area, in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Margins {
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
    pub left: f64,
}

impl Margins {
    #[must_use]
    pub const fn new(top: f64, right: f64, bottom: f64, left: f64) -> Self {
        Self {
            top,
            right,
            bottom,
            left,
        }
    }

    #[must_use]
    pub fn is_valid(self) -> bool {
        [self.top, self.right, self.bottom, self.left]
            .into_iter()
            .all(|value| value.is_finite() && value >= 0.0)
    }
}

/// Ephemeral layout owned by a single render call.
///
/// Plot extents are clamped at zero so a canvas smaller than its margins
/// collapses the plot instead of inverting it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChartLayout {
    pub canvas_width: f64,
    pub canvas_height: f64,
    pub margins: Margins,
}

impl ChartLayout {
    #[must_use]
    pub fn new(viewport: Viewport, margins: Margins) -> Self {
        Self {
            canvas_width: f64::from(viewport.width),
            canvas_height: f64::from(viewport.height),
            margins,
        }
    }

    #[must_use]
    pub fn plot_width(&self) -> f64 {
        (self.canvas_width - self.margins.left - self.margins.right).max(0.0)
    }

    #[must_use]
    pub fn plot_height(&self) -> f64 {
        (self.canvas_height - self.margins.top - self.margins.bottom).max(0.0)
    }

    #[must_use]
    pub fn plot_left(&self) -> f64 {
        self.margins.left
    }

    #[must_use]
    pub fn plot_right(&self) -> f64 {
        self.margins.left + self.plot_width()
    }

    #[must_use]
    pub fn plot_top(&self) -> f64 {
        self.margins.top
    }

    #[must_use]
    pub fn plot_bottom(&self) -> f64 {
        self.margins.top + self.plot_height()
    }

    #[must_use]
    pub fn center_x(&self) -> f64 {
        self.canvas_width / 2.0
    }

    /// Maps a unix-millisecond timestamp into an absolute canvas x.
    #[must_use]
    pub fn x_for_time(&self, time_millis: i64, min_millis: i64, max_millis: i64) -> f64 {
        self.plot_left() + map_time_to_x(time_millis, min_millis, max_millis, self.plot_width())
    }

    /// Maps a value in `0..=max_value` into an absolute canvas y.
    #[must_use]
    pub fn y_for_value(&self, value: f64, max_value: f64) -> f64 {
        self.plot_top() + map_value_to_y(value, max_value, self.plot_height())
    }
}
