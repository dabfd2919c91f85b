use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::core::{ProfileData, SkillEntry, pass_rate_percent};
use crate::render::Color;

use super::{ChartStyle, LabelLocale, format_audit_ratio, format_grouped_number, skill_display_label};

pub const NO_SKILLS_MESSAGE: &str = "No skills data available";

/// Color band for the project pass rate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SuccessTier {
    /// 80% and above.
    High,
    /// 60% up to 80%.
    Medium,
    Low,
}

impl SuccessTier {
    #[must_use]
    pub fn from_percent(percent: u32) -> Self {
        match percent {
            80.. => Self::High,
            60..=79 => Self::Medium,
            _ => Self::Low,
        }
    }

    #[must_use]
    pub fn color(self, style: &ChartStyle) -> Color {
        match self {
            Self::High => style.pass_color,
            Self::Medium => style.warning_color,
            Self::Low => style.fail_color,
        }
    }
}

/// Text shown next to the charts, keyed by stable field ids in display order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProfileSummary {
    pub fields: IndexMap<String, String>,
    pub completed_projects: usize,
    pub pass_rate_percent: u32,
    pub success_tier: SuccessTier,
    pub audit_ratio: String,
}

impl ProfileSummary {
    #[must_use]
    pub fn from_profile(profile: &ProfileData) -> Self {
        let user = &profile.user;
        let mut fields = IndexMap::new();
        fields.insert("id".to_owned(), user.id.to_string());
        fields.insert("login".to_owned(), user.login.clone());
        if let Some(campus) = &user.campus {
            fields.insert("campus".to_owned(), campus.clone());
        }

        if let Some(attrs) = &user.attrs {
            let present = |value: &Option<String>| value.clone().filter(|text| !text.is_empty());
            if let (Some(first), Some(last)) = (present(&attrs.first_name), present(&attrs.last_name))
            {
                fields.insert("name".to_owned(), format!("{first} {last}"));
            }
            for (key, value) in [
                ("email", &attrs.email),
                ("gender", &attrs.gender),
                ("nationality", &attrs.nationality),
            ] {
                if let Some(value) = present(value) {
                    fields.insert(key.to_owned(), value);
                }
            }
        }

        let pass_rate = pass_rate_percent(&profile.completed);
        Self {
            fields,
            completed_projects: profile.completed.len(),
            pass_rate_percent: pass_rate,
            success_tier: SuccessTier::from_percent(pass_rate),
            audit_ratio: format_audit_ratio(profile.audit_totals()),
        }
    }

    #[must_use]
    pub fn field(&self, key: &str) -> Option<&str> {
        self.fields.get(key).map(String::as_str)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkillRow {
    pub label: String,
    pub amount: String,
}

/// Skill rows in query order; empty means "no skills".
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SkillsTable {
    pub rows: Vec<SkillRow>,
}

impl SkillsTable {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Plain-text table, or the empty-state message.
    #[must_use]
    pub fn to_text(&self) -> String {
        if self.rows.is_empty() {
            return NO_SKILLS_MESSAGE.to_owned();
        }
        let label_width = self
            .rows
            .iter()
            .map(|row| row.label.chars().count())
            .chain(std::iter::once("Skill".len()))
            .max()
            .unwrap_or(0);
        let mut out = format!("{:<label_width$}  Amount\n", "Skill");
        for row in &self.rows {
            out.push_str(&format!("{:<label_width$}  {}\n", row.label, row.amount));
        }
        out
    }
}

#[must_use]
pub fn build_skills_table(skills: &[SkillEntry], locale: LabelLocale) -> SkillsTable {
    SkillsTable {
        rows: skills
            .iter()
            .map(|skill| SkillRow {
                label: skill_display_label(&skill.skill_key),
                amount: format_grouped_number(skill.amount, locale),
            })
            .collect(),
    }
}
