//! Profile query and the response envelope it decodes into.

use serde::Deserialize;
use tracing::{debug, warn};

use crate::core::progress::{
    AuditTransaction, CompletedProject, ProfileData, SkillEntry, UserProfile, XpEvent,
};
use crate::error::{ChartError, ChartResult};

/// Single query fetching every dataset the dashboard renders.
pub const PROFILE_QUERY: &str = r#"{
  user {
    id
    login
    attrs
    campus
    auditRatio
    totalUp
    totalDown
  }

  completed: result(
    where: {
      _and: [
        { path: { _ilike: "/gritlab/school-curriculum/%" } },
        { path: { _nilike: "/gritlab/school-curriculum/%/%" } },
        { path: { _nilike: "/gritlab/school-curriculum/piscine" } },
        { path: { _nilike: "/gritlab/school-curriculum/checkpoint" } }
      ],
      isLast: {_eq: true}
    }
    order_by: [{createdAt: asc}]
  ) {
    objectId
    path
    grade
    createdAt
  }

  xp_view: transaction(
    where: {
      _and: [
        { path: { _nilike: "/gritlab/school-curriculum/piscine-js/%" } },
        { path: { _nilike: "/gritlab/piscine-go/%" } }
      ],
      type: {_eq: "xp"}
    }
    order_by: [{createdAt: asc}]
  ) {
    objectId
    path
    amount
    createdAt
  }

  audits: transaction(
    where: {
      type: {_in: ["up", "down"]}
    }
    order_by: [{createdAt: desc}]
  ) {
    type
    objectId
    path
    amount
    createdAt
  }

  skills: transaction(
    order_by: [{ type: desc }, { amount: desc }]
    distinct_on: [type]
    where: { type: { _ilike: "skill_%" } }
  ) {
    type
    amount
  }
}"#;

/// Error entry reported by the GraphQL engine.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct GraphqlError {
    pub message: String,
}

#[derive(Debug, Deserialize)]
struct ResponseEnvelope {
    #[serde(default)]
    data: Option<ProfileQueryData>,
    #[serde(default)]
    errors: Option<Vec<GraphqlError>>,
}

#[derive(Debug, Deserialize)]
struct ProfileQueryData {
    user: Vec<UserProfile>,
    #[serde(default)]
    completed: Vec<CompletedProject>,
    #[serde(default)]
    xp_view: Vec<XpEvent>,
    #[serde(default)]
    audits: Vec<AuditTransaction>,
    #[serde(default)]
    skills: Vec<SkillEntry>,
}

/// JSON body posted to the GraphQL endpoint.
#[must_use]
pub fn profile_query_body() -> serde_json::Value {
    serde_json::json!({ "query": PROFILE_QUERY })
}

impl ProfileData {
    /// Decodes a `{ data, errors }` response of [`PROFILE_QUERY`].
    ///
    /// Timestamps are normalized here, once, so renderers only ever read
    /// comparable `DateTime<Utc>` values.
    pub fn from_response_json(input: &str) -> ChartResult<Self> {
        let envelope: ResponseEnvelope = serde_json::from_str(input)
            .map_err(|e| ChartError::Decode(format!("invalid profile response json: {e}")))?;

        if let Some(errors) = envelope.errors.filter(|errors| !errors.is_empty()) {
            let messages: Vec<&str> = errors.iter().map(|err| err.message.as_str()).collect();
            warn!(error_count = errors.len(), "profile query returned errors");
            return Err(ChartError::Decode(format!(
                "profile query failed: {}",
                messages.join("; ")
            )));
        }

        let data = envelope
            .data
            .ok_or_else(|| ChartError::Decode("profile response has no `data`".to_owned()))?;
        let user = data
            .user
            .into_iter()
            .next()
            .ok_or_else(|| ChartError::Decode("profile response has no user".to_owned()))?;

        debug!(
            login = %user.login,
            completed = data.completed.len(),
            xp_events = data.xp_view.len(),
            audits = data.audits.len(),
            skills = data.skills.len(),
            "decoded profile response"
        );

        Ok(Self {
            user,
            completed: data.completed,
            xp_events: data.xp_view,
            audits: data.audits,
            skills: data.skills,
        })
    }
}
