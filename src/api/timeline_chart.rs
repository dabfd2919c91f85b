use tracing::debug;

use crate::core::{CompletedProject, Viewport, projects_by_time};
use crate::error::ChartResult;
use crate::render::{
    CirclePrimitive, DrawingSurface, LinePrimitive, Scene, TextHAlign, TextVAlign,
};

use super::scene_builder::{SceneBuilder, build_no_data_scene};
use super::{DashboardConfig, TimelineChartConfig, format_date, project_name};

pub const NO_PROJECT_DATA_MESSAGE: &str = "No project data available";

/// Canvas height needed for `project_count` projects; `None` when there is
/// nothing to lay out.
#[must_use]
pub fn timeline_height(project_count: usize, timeline: &TimelineChartConfig) -> Option<u32> {
    let gaps = project_count.checked_sub(1)?;
    let height = timeline.margins.top
        + gaps as f64 * timeline.project_spacing
        + timeline.margins.bottom;
    Some((height.ceil() as u32).max(1))
}

/// Builds the vertical project timeline.
///
/// Unlike the other charts the timeline owns its height: the returned scene
/// is sized to fit every project. The placeholder keeps the surface size.
#[must_use]
pub fn build_project_timeline_scene(
    projects: &[CompletedProject],
    surface_size: Viewport,
    config: &DashboardConfig,
) -> Scene {
    let timeline = &config.timeline;
    let Some(height) = timeline_height(projects.len(), timeline) else {
        return build_no_data_scene(
            surface_size.or_fallback(config.placeholder_fallback),
            NO_PROJECT_DATA_MESSAGE,
            &config.style,
        );
    };

    let width = if surface_size.width == 0 {
        timeline.fallback_width
    } else {
        surface_size.width
    };
    let viewport = Viewport::new(width, height);
    let line_x = f64::from(width) / 2.0;
    let first_y = timeline.margins.top;
    let last_y = first_y + (projects.len() - 1) as f64 * timeline.project_spacing;

    let mut builder = SceneBuilder::new(viewport, config.style);
    let style = *builder.style();
    builder.title("Project Timeline", line_x, 20.0).push(LinePrimitive::new(
        line_x,
        first_y,
        line_x,
        last_y,
        style.axis_line_width,
        style.text_color,
    ));

    for (index, project) in projects_by_time(projects).into_iter().enumerate() {
        let y = first_y + index as f64 * timeline.project_spacing;
        let dot_color = if project.passed() {
            style.pass_color
        } else {
            style.fail_color
        };
        builder.push(CirclePrimitive::new(line_x, y, timeline.dot_radius, dot_color));

        let label = format!(
            "{} [{}]",
            project_name(&project.path),
            format_date(project.created_at, config.locale, config.utc_offset_minutes)
        );
        let (x, h_align) = if index % 2 == 0 {
            (line_x + timeline.label_offset, TextHAlign::Left)
        } else {
            (line_x - timeline.label_offset, TextHAlign::Right)
        };
        builder.text(label, x, y, h_align, TextVAlign::Middle);
    }
    builder.finish()
}

/// Clears `surface` and draws the timeline, resizing the surface to fit the
/// projects. With no projects the placeholder is drawn at the current size.
pub fn render_project_timeline<S>(
    surface: &mut S,
    projects: &[CompletedProject],
    config: &DashboardConfig,
) -> ChartResult<()>
where
    S: DrawingSurface + ?Sized,
{
    let scene = build_project_timeline_scene(projects, surface.displayed_size(), config);
    debug!(
        surface = surface.key(),
        project_count = projects.len(),
        height = scene.viewport.height,
        "render project timeline"
    );
    if projects.is_empty() {
        surface.present(&scene)
    } else {
        surface.present_resized(&scene)
    }
}
