//! profile-charts: chart core for a learning-progress profile dashboard.
//!
//! Charts are built as backend-agnostic scenes (`render::Scene`) from profile
//! data (`core`) and presented onto named drawing surfaces (SVG, in-memory, or
//! Cairo with feature `cairo-backend`).

pub mod api;
#[cfg(feature = "client")]
pub mod client;
pub mod core;
pub mod error;
pub mod interaction;
pub mod render;
pub mod telemetry;

pub use api::{DashboardConfig, DashboardSurfaces, ProfileDashboard};
pub use error::{ChartError, ChartResult};
