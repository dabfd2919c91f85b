use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer, Serialize};

use crate::core::primitives::sorted_by_key;

/// One XP transaction attributed to the user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct XpEvent {
    #[serde(default)]
    pub object_id: Option<i64>,
    #[serde(default)]
    pub path: String,
    pub amount: u64,
    pub created_at: DateTime<Utc>,
}

impl XpEvent {
    #[must_use]
    pub fn new(path: impl Into<String>, amount: u64, created_at: DateTime<Utc>) -> Self {
        Self {
            object_id: None,
            path: path.into(),
            amount,
            created_at,
        }
    }
}

/// Point of the running XP total.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CumulativeXpPoint {
    pub created_at: DateTime<Utc>,
    pub amount: u64,
    pub cumulative: u64,
}

/// Prefix sum over `events` ordered by timestamp (stable).
///
/// The series is non-decreasing and its last value is the sum of all amounts.
#[must_use]
pub fn cumulative_xp_series(events: &[XpEvent]) -> Vec<CumulativeXpPoint> {
    let mut running = 0u64;
    sorted_by_key(events, |event| event.created_at)
        .into_iter()
        .map(|event| {
            running = running.saturating_add(event.amount);
            CumulativeXpPoint {
                created_at: event.created_at,
                amount: event.amount,
                cumulative: running,
            }
        })
        .collect()
}

/// Audit points given (`total_up`) and received (`total_down`).
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct AuditTotals {
    pub total_up: f64,
    pub total_down: f64,
}

impl AuditTotals {
    #[must_use]
    pub fn new(total_up: f64, total_down: f64) -> Self {
        Self {
            total_up,
            total_down,
        }
    }

    #[must_use]
    pub fn is_empty(self) -> bool {
        self.total_up == 0.0 && self.total_down == 0.0
    }

    /// `total_up / total_down`, undefined when nothing was received.
    #[must_use]
    pub fn ratio(self) -> Option<f64> {
        if self.total_down > 0.0 {
            Some(self.total_up / self.total_down)
        } else {
            None
        }
    }
}

/// Last result of a top-level curriculum project.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompletedProject {
    #[serde(default)]
    pub object_id: Option<i64>,
    #[serde(default)]
    pub path: String,
    /// `null` grades (not yet graded) read as zero.
    #[serde(default, deserialize_with = "grade_or_zero")]
    pub grade: Decimal,
    pub created_at: DateTime<Utc>,
}

impl CompletedProject {
    #[must_use]
    pub fn new(path: impl Into<String>, grade: Decimal, created_at: DateTime<Utc>) -> Self {
        Self {
            object_id: None,
            path: path.into(),
            grade,
            created_at,
        }
    }

    #[must_use]
    pub fn passed(&self) -> bool {
        self.grade >= Decimal::ONE
    }
}

fn grade_or_zero<'de, D>(deserializer: D) -> Result<Decimal, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Decimal>::deserialize(deserializer)?.unwrap_or_default())
}

/// Projects ordered by completion time (stable), without touching the input.
#[must_use]
pub fn projects_by_time(projects: &[CompletedProject]) -> Vec<&CompletedProject> {
    sorted_by_key(projects, |project| project.created_at)
}

/// Percentage of passed projects rounded to the nearest integer; 0 when empty.
#[must_use]
pub fn pass_rate_percent(projects: &[CompletedProject]) -> u32 {
    if projects.is_empty() {
        return 0;
    }
    let passed = projects.iter().filter(|project| project.passed()).count();
    ((passed as f64 / projects.len() as f64) * 100.0).round() as u32
}

/// Highest amount recorded for one skill type.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SkillEntry {
    #[serde(rename = "type")]
    pub skill_key: String,
    pub amount: f64,
}

impl SkillEntry {
    #[must_use]
    pub fn new(skill_key: impl Into<String>, amount: f64) -> Self {
        Self {
            skill_key: skill_key.into(),
            amount,
        }
    }
}

/// Audit transaction (`up` = given, `down` = received).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuditTransaction {
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default)]
    pub object_id: Option<i64>,
    #[serde(default)]
    pub path: String,
    pub amount: f64,
    pub created_at: DateTime<Utc>,
}

/// Optional personal attributes stored on the user record.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct UserAttrs {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
    pub gender: Option<String>,
    pub nationality: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    pub id: i64,
    pub login: String,
    #[serde(default)]
    pub campus: Option<String>,
    #[serde(default)]
    pub attrs: Option<UserAttrs>,
    #[serde(default)]
    pub audit_ratio: Option<f64>,
    #[serde(default)]
    pub total_up: Option<f64>,
    #[serde(default)]
    pub total_down: Option<f64>,
}

impl UserProfile {
    /// Missing totals count as zero.
    #[must_use]
    pub fn audit_totals(&self) -> AuditTotals {
        AuditTotals::new(
            self.total_up.unwrap_or(0.0),
            self.total_down.unwrap_or(0.0),
        )
    }
}

/// Everything the dashboard renders, as returned by one profile query.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProfileData {
    pub user: UserProfile,
    pub completed: Vec<CompletedProject>,
    pub xp_events: Vec<XpEvent>,
    pub audits: Vec<AuditTransaction>,
    pub skills: Vec<SkillEntry>,
}

impl ProfileData {
    #[must_use]
    pub fn audit_totals(&self) -> AuditTotals {
        self.user.audit_totals()
    }

    #[must_use]
    pub fn total_xp(&self) -> u64 {
        self.xp_events
            .iter()
            .fold(0u64, |total, event| total.saturating_add(event.amount))
    }
}
