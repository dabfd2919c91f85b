pub mod graphql;
pub mod primitives;
pub mod progress;
pub mod scale;
pub mod session;
pub mod types;

pub use graphql::{GraphqlError, PROFILE_QUERY, profile_query_body};
pub use primitives::sorted_by_key;
pub use progress::{
    AuditTotals, AuditTransaction, CompletedProject, CumulativeXpPoint, ProfileData, SkillEntry,
    UserAttrs, UserProfile, XpEvent, cumulative_xp_series, pass_rate_percent, projects_by_time,
};
pub use scale::{compute_nice_ceiling, map_linear, map_time_to_x, map_value_to_y};
pub use session::{Credentials, SessionToken};
pub use types::{ChartLayout, Margins, Viewport};
