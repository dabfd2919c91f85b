use tracing::debug;

use crate::core::{AuditTotals, ChartLayout, Viewport};
use crate::error::ChartResult;
use crate::render::{DrawingSurface, RectPrimitive, Scene, TextHAlign, TextPrimitive, TextVAlign};

use super::scene_builder::{SceneBuilder, build_no_data_scene};
use super::{DashboardConfig, format_audit_ratio, format_grouped_number};

pub const NO_AUDIT_DATA_MESSAGE: &str = "No audit data available";

/// Bar widths for `totals`, scaled so the larger total spans `max_bar_width`.
#[must_use]
pub fn audit_bar_widths(totals: AuditTotals, max_bar_width: f64) -> (f64, f64) {
    let max_audit = totals.total_up.max(totals.total_down);
    if max_audit <= 0.0 {
        return (0.0, 0.0);
    }
    let width = |total: f64| ((total / max_audit) * max_bar_width).max(0.0);
    (width(totals.total_up), width(totals.total_down))
}

/// Builds the up/down audit bar chart for a surface currently sized
/// `surface_size`.
#[must_use]
pub fn build_audit_ratio_scene(
    totals: AuditTotals,
    surface_size: Viewport,
    config: &DashboardConfig,
) -> Scene {
    if totals.is_empty() {
        return build_no_data_scene(
            surface_size.or_fallback(config.placeholder_fallback),
            NO_AUDIT_DATA_MESSAGE,
            &config.style,
        );
    }

    let audit = &config.audit;
    let viewport = surface_size.or_fallback(audit.fallback_size);
    let layout = ChartLayout::new(viewport, audit.margins);
    let (up_width, down_width) = audit_bar_widths(totals, layout.plot_width());

    let mut builder = SceneBuilder::new(viewport, config.style);
    let style = *builder.style();
    let up_top = layout.plot_top();
    let down_top = up_top + audit.bar_spacing;

    builder
        .push(RectPrimitive::new(
            layout.plot_left(),
            up_top,
            up_width,
            audit.bar_height,
            style.pass_color,
        ))
        .push(RectPrimitive::new(
            layout.plot_left(),
            down_top,
            down_width,
            audit.bar_height,
            style.fail_color,
        ));

    let up_mid = up_top + audit.bar_height / 2.0;
    let down_mid = down_top + audit.bar_height / 2.0;
    let category_x = layout.plot_left() - 5.0;
    builder
        .text("Up", category_x, up_mid, TextHAlign::Right, TextVAlign::Middle)
        .text("Down", category_x, down_mid, TextHAlign::Right, TextVAlign::Middle)
        .text(
            format_grouped_number(totals.total_up, config.locale),
            layout.plot_left() + up_width + 5.0,
            up_mid,
            TextHAlign::Left,
            TextVAlign::Middle,
        )
        .text(
            format_grouped_number(totals.total_down, config.locale),
            layout.plot_left() + down_width + 5.0,
            down_mid,
            TextHAlign::Left,
            TextVAlign::Middle,
        );

    builder.push(
        TextPrimitive::new(
            format!("Audit Ratio: {}", format_audit_ratio(totals)),
            layout.center_x(),
            layout.canvas_height - 10.0,
            style.font_size_px,
            style.accent_color,
            TextHAlign::Center,
        )
        .bold(),
    );
    builder.finish()
}

/// Clears `surface` and draws the audit bar chart (or its placeholder).
pub fn render_audit_ratio<S>(
    surface: &mut S,
    totals: AuditTotals,
    config: &DashboardConfig,
) -> ChartResult<()>
where
    S: DrawingSurface + ?Sized,
{
    let scene = build_audit_ratio_scene(totals, surface.displayed_size(), config);
    debug!(
        surface = surface.key(),
        total_up = totals.total_up,
        total_down = totals.total_down,
        "render audit ratio chart"
    );
    surface.present(&scene)
}
