mod audit_chart;
mod chart_style;
mod dashboard;
mod dashboard_config;
mod growth_chart;
mod label_format;
mod scene_builder;
mod summary;
mod timeline_chart;

pub use audit_chart::{
    NO_AUDIT_DATA_MESSAGE, audit_bar_widths, build_audit_ratio_scene, render_audit_ratio,
};
pub use chart_style::ChartStyle;
pub use dashboard::{
    AUDIT_RATIO_SURFACE_KEY, DashboardSurfaces, PROJECT_TIMELINE_SURFACE_KEY, ProfileDashboard,
    XP_GROWTH_SURFACE_KEY,
};
pub use dashboard_config::{
    AuditChartConfig, DashboardConfig, GrowthChartConfig, TimelineChartConfig,
};
pub use growth_chart::{NO_XP_DATA_MESSAGE, build_xp_growth_scene, render_xp_growth};
pub use label_format::{
    LabelLocale, format_audit_ratio, format_date, format_grouped_integer, format_grouped_number,
    project_name, skill_display_label,
};
pub use scene_builder::{GridLevel, build_no_data_scene, grid_levels};
pub use summary::{
    NO_SKILLS_MESSAGE, ProfileSummary, SkillRow, SkillsTable, SuccessTier, build_skills_table,
};
pub use timeline_chart::{
    NO_PROJECT_DATA_MESSAGE, build_project_timeline_scene, render_project_timeline,
    timeline_height,
};
