use std::time::Instant;

use tracing::{debug, trace, warn};

use crate::core::{ProfileData, Viewport};
use crate::error::ChartResult;
use crate::interaction::{RenderTrigger, ResizeDebouncer};
use crate::render::{DrawingSurface, SceneSurface};

use super::{
    DashboardConfig, ProfileSummary, SkillsTable, build_skills_table, render_audit_ratio,
    render_project_timeline, render_xp_growth,
};

pub const XP_GROWTH_SURFACE_KEY: &str = "xp-growth-surface";
pub const AUDIT_RATIO_SURFACE_KEY: &str = "audit-ratio-surface";
pub const PROJECT_TIMELINE_SURFACE_KEY: &str = "project-timeline-surface";

/// The three surfaces a dashboard draws into, one per chart.
#[derive(Debug, Clone, PartialEq)]
pub struct DashboardSurfaces<S> {
    pub xp_growth: S,
    pub audit_ratio: S,
    pub project_timeline: S,
}

impl<S: DrawingSurface> DashboardSurfaces<S> {
    #[must_use]
    pub fn new(xp_growth: S, audit_ratio: S, project_timeline: S) -> Self {
        Self {
            xp_growth,
            audit_ratio,
            project_timeline,
        }
    }
}

impl DashboardSurfaces<SceneSurface> {
    /// In-memory surfaces, all starting at `size`.
    #[must_use]
    pub fn headless(size: Viewport) -> Self {
        Self::new(
            SceneSurface::new(XP_GROWTH_SURFACE_KEY, size),
            SceneSurface::new(AUDIT_RATIO_SURFACE_KEY, size),
            SceneSurface::new(PROJECT_TIMELINE_SURFACE_KEY, size),
        )
    }
}

/// Renders one user's profile onto a set of surfaces.
///
/// Keeps the last fetched profile so a settled resize can redraw without
/// another fetch. Surfaces are owned by the host and passed in per call;
/// the host also keeps their displayed sizes current as its layout changes.
#[derive(Debug, Clone)]
pub struct ProfileDashboard {
    config: DashboardConfig,
    profile: Option<ProfileData>,
    resize: ResizeDebouncer,
}

impl ProfileDashboard {
    pub fn new(config: DashboardConfig) -> ChartResult<Self> {
        config.validate()?;
        Ok(Self {
            resize: ResizeDebouncer::new(config.resize_quiet_period()),
            config,
            profile: None,
        })
    }

    #[must_use]
    pub fn config(&self) -> &DashboardConfig {
        &self.config
    }

    #[must_use]
    pub fn profile(&self) -> Option<&ProfileData> {
        self.profile.as_ref()
    }

    /// Stores a freshly fetched profile and renders every chart.
    pub fn load_profile<S: DrawingSurface>(
        &mut self,
        profile: ProfileData,
        surfaces: &mut DashboardSurfaces<S>,
    ) -> ChartResult<()> {
        debug!(
            login = %profile.user.login,
            xp_events = profile.xp_events.len(),
            completed = profile.completed.len(),
            "profile loaded"
        );
        self.profile = Some(profile);
        self.render_charts(surfaces, RenderTrigger::ProfileFetched)
            .map(|_| ())
    }

    /// Redraws all three charts from the cached profile.
    ///
    /// Returns `false` without touching the surfaces when no profile is
    /// loaded.
    pub fn render_charts<S: DrawingSurface>(
        &self,
        surfaces: &mut DashboardSurfaces<S>,
        trigger: RenderTrigger,
    ) -> ChartResult<bool> {
        let Some(profile) = &self.profile else {
            trace!(?trigger, "render skipped: no profile loaded");
            return Ok(false);
        };
        debug!(?trigger, "render dashboard charts");
        let results = [
            render_xp_growth(&mut surfaces.xp_growth, &profile.xp_events, &self.config),
            render_audit_ratio(&mut surfaces.audit_ratio, profile.audit_totals(), &self.config),
            render_project_timeline(
                &mut surfaces.project_timeline,
                &profile.completed,
                &self.config,
            ),
        ];
        // Every chart is drawn before the first failure is reported.
        for (chart, result) in ["xp growth", "audit ratio", "project timeline"]
            .into_iter()
            .zip(&results)
        {
            if let Err(err) = result {
                warn!(chart, error = %err, "chart render failed");
            }
        }
        results.into_iter().collect::<ChartResult<()>>()?;
        Ok(true)
    }

    /// Records a viewport resize; rendering waits for `poll_resize`.
    pub fn notify_resize(&mut self, now: Instant, viewport: Viewport) {
        trace!(width = viewport.width, height = viewport.height, "resize noted");
        self.resize.notify_resize(now, viewport);
    }

    /// Re-renders once resizing has been quiet for the configured period.
    ///
    /// Returns the settled viewport when a render happened.
    pub fn poll_resize<S: DrawingSurface>(
        &mut self,
        now: Instant,
        surfaces: &mut DashboardSurfaces<S>,
    ) -> ChartResult<Option<Viewport>> {
        let Some(viewport) = self.resize.poll(now) else {
            return Ok(None);
        };
        let rendered = self.render_charts(surfaces, RenderTrigger::ViewportSettled(viewport))?;
        Ok(rendered.then_some(viewport))
    }

    #[must_use]
    pub fn resize_deadline(&self) -> Option<Instant> {
        self.resize.deadline()
    }

    #[must_use]
    pub fn summary(&self) -> Option<ProfileSummary> {
        self.profile.as_ref().map(ProfileSummary::from_profile)
    }

    #[must_use]
    pub fn skills_table(&self) -> Option<SkillsTable> {
        self.profile
            .as_ref()
            .map(|profile| build_skills_table(&profile.skills, self.config.locale))
    }

    /// Drops the cached profile and any pending resize (e.g. on sign-out).
    pub fn clear_profile(&mut self) {
        self.profile = None;
        self.resize.cancel();
    }
}
