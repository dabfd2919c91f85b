use chrono::{DateTime, FixedOffset, Offset, Utc};
use serde::{Deserialize, Serialize};

use crate::core::AuditTotals;

/// Locale used for number grouping and date labels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum LabelLocale {
    /// `1,234.5` and `3/14/2024`.
    #[default]
    EnUs,
    /// `12.345,5` and `14/3/2024`; four-digit integers stay ungrouped.
    EsEs,
}

impl LabelLocale {
    fn group_separator(self) -> char {
        match self {
            Self::EnUs => ',',
            Self::EsEs => '.',
        }
    }

    fn decimal_separator(self) -> char {
        match self {
            Self::EnUs => '.',
            Self::EsEs => ',',
        }
    }

    fn min_grouping_digits(self) -> usize {
        match self {
            Self::EnUs => 4,
            Self::EsEs => 5,
        }
    }

    fn date_pattern(self) -> &'static str {
        match self {
            Self::EnUs => "%-m/%-d/%Y",
            Self::EsEs => "%-d/%-m/%Y",
        }
    }
}

const MAX_FRACTION_DIGITS: usize = 3;

/// Formats `value` with locale digit grouping and at most three decimals.
#[must_use]
pub fn format_grouped_number(value: f64, locale: LabelLocale) -> String {
    if value.is_nan() {
        return "NaN".to_owned();
    }
    if value.is_infinite() {
        return if value > 0.0 { "∞" } else { "-∞" }.to_owned();
    }

    let fixed = format!("{:.*}", MAX_FRACTION_DIGITS, value.abs());
    let (integer_digits, fraction_digits) = fixed.split_once('.').unwrap_or((fixed.as_str(), ""));
    let fraction_digits = fraction_digits.trim_end_matches('0');

    let mut out = String::with_capacity(fixed.len() + integer_digits.len() / 3 + 1);
    let is_zero = integer_digits.bytes().all(|b| b == b'0') && fraction_digits.is_empty();
    if value < 0.0 && !is_zero {
        out.push('-');
    }
    push_grouped_digits(&mut out, integer_digits, locale);
    if !fraction_digits.is_empty() {
        out.push(locale.decimal_separator());
        out.push_str(fraction_digits);
    }
    out
}

fn push_grouped_digits(out: &mut String, digits: &str, locale: LabelLocale) {
    if digits.len() < locale.min_grouping_digits() {
        out.push_str(digits);
        return;
    }
    let lead = digits.len() % 3;
    for (index, ch) in digits.chars().enumerate() {
        if index > 0 && index % 3 == lead % 3 {
            out.push(locale.group_separator());
        }
        out.push(ch);
    }
}

/// Formats an integer count with locale digit grouping.
#[must_use]
pub fn format_grouped_integer(value: u64, locale: LabelLocale) -> String {
    let mut out = String::new();
    push_grouped_digits(&mut out, &value.to_string(), locale);
    out
}

/// Formats the calendar date of `time` as seen at `utc_offset_minutes`.
#[must_use]
pub fn format_date(time: DateTime<Utc>, locale: LabelLocale, utc_offset_minutes: i32) -> String {
    let offset = utc_offset_minutes
        .checked_mul(60)
        .and_then(FixedOffset::east_opt)
        .unwrap_or_else(|| Utc.fix());
    time.with_timezone(&offset)
        .format(locale.date_pattern())
        .to_string()
}

/// `total_up / total_down` with two decimals, or `N/A` when nothing was received.
#[must_use]
pub fn format_audit_ratio(totals: AuditTotals) -> String {
    match totals.ratio() {
        Some(ratio) => format!("{ratio:.2}"),
        None => "N/A".to_owned(),
    }
}

/// Turns a skill key such as `skill_algorithm_design` into `Algorithm Design`.
#[must_use]
pub fn skill_display_label(skill_key: &str) -> String {
    skill_key
        .replacen("skill_", "", 1)
        .split('_')
        .map(capitalize_first)
        .collect::<Vec<_>>()
        .join(" ")
}

fn capitalize_first(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Last segment of a curriculum path (`/school/module/go-reloaded` -> `go-reloaded`).
#[must_use]
pub fn project_name(path: &str) -> &str {
    path.rsplit_once('/').map_or(path, |(_, name)| name)
}
