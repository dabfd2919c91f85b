use tracing::debug;

use crate::core::{ChartLayout, Viewport, XpEvent, compute_nice_ceiling, cumulative_xp_series};
use crate::error::ChartResult;
use crate::render::{CirclePrimitive, DrawingSurface, PathPrimitive, Scene, TextHAlign, TextVAlign};

use super::scene_builder::{SceneBuilder, ValueGridContext, build_no_data_scene};
use super::{DashboardConfig, format_date, format_grouped_integer};

pub const NO_XP_DATA_MESSAGE: &str = "No XP data available";

/// Builds the cumulative XP line chart for a surface currently sized
/// `surface_size`.
///
/// Events may arrive in any order; they are read through a stable,
/// timestamp-ordered view and never reordered in place.
#[must_use]
pub fn build_xp_growth_scene(
    events: &[XpEvent],
    surface_size: Viewport,
    config: &DashboardConfig,
) -> Scene {
    let series = cumulative_xp_series(events);
    let (Some(first), Some(last)) = (series.first(), series.last()) else {
        return build_no_data_scene(
            surface_size.or_fallback(config.placeholder_fallback),
            NO_XP_DATA_MESSAGE,
            &config.style,
        );
    };

    let growth = &config.growth;
    let viewport = surface_size.or_fallback(growth.fallback_size);
    let layout = ChartLayout::new(viewport, growth.margins);
    let total_xp = last.cumulative;
    let max_xp = compute_nice_ceiling(total_xp as f64, growth.xp_step);
    let min_millis = first.created_at.timestamp_millis();
    let max_millis = last.created_at.timestamp_millis();

    let mut builder = SceneBuilder::new(viewport, config.style);
    builder.axes(&layout).value_grid(
        &layout,
        ValueGridContext {
            max_value: max_xp,
            line_count: growth.grid_line_count,
            unit_suffix: "XP",
            locale: config.locale,
        },
    );

    let date_y = layout.canvas_height - 10.0;
    builder
        .text(
            format_date(first.created_at, config.locale, config.utc_offset_minutes),
            layout.plot_left(),
            date_y,
            TextHAlign::Left,
            TextVAlign::Baseline,
        )
        .text(
            format_date(last.created_at, config.locale, config.utc_offset_minutes),
            layout.canvas_width - layout.margins.right,
            date_y,
            TextHAlign::Right,
            TextVAlign::Baseline,
        );

    let points: Vec<(f64, f64)> = series
        .iter()
        .map(|point| {
            (
                layout.x_for_time(
                    point.created_at.timestamp_millis(),
                    min_millis,
                    max_millis,
                ),
                layout.y_for_value(point.cumulative as f64, max_xp),
            )
        })
        .collect();

    let style = *builder.style();
    builder.push(PathPrimitive::new(
        points.clone(),
        growth.line_width,
        style.accent_color,
    ));
    for (x, y) in points {
        builder.push(
            CirclePrimitive::new(x, y, growth.point_radius, style.accent_color)
                .with_stroke(style.text_color, style.grid_line_width),
        );
    }

    builder.title(
        format!(
            "XP Growth Over Time: {} XP",
            format_grouped_integer(total_xp, config.locale)
        ),
        layout.center_x(),
        20.0,
    );
    builder.finish()
}

/// Clears `surface` and draws the XP growth chart (or its placeholder).
pub fn render_xp_growth<S>(
    surface: &mut S,
    events: &[XpEvent],
    config: &DashboardConfig,
) -> ChartResult<()>
where
    S: DrawingSurface + ?Sized,
{
    let scene = build_xp_growth_scene(events, surface.displayed_size(), config);
    debug!(
        surface = surface.key(),
        event_count = events.len(),
        width = scene.viewport.width,
        height = scene.viewport.height,
        "render xp growth chart"
    );
    surface.present(&scene)
}
