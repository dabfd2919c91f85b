use chrono::{TimeZone, Utc};
use profile_charts::ChartError;
use profile_charts::api::{LabelLocale, NO_SKILLS_MESSAGE, ProfileSummary, SuccessTier, build_skills_table};
use profile_charts::core::{PROFILE_QUERY, ProfileData, SkillEntry, profile_query_body};
use rust_decimal::Decimal;

const RESPONSE: &str = r#"{
  "data": {
    "user": [{
      "id": 4242,
      "login": "jdoe",
      "campus": "gritlab",
      "attrs": {
        "firstName": "Jane",
        "lastName": "Doe",
        "email": "jane@example.com",
        "nationality": "Finnish"
      },
      "auditRatio": 3.0,
      "totalUp": 150,
      "totalDown": 50
    }],
    "completed": [
      { "objectId": 1, "path": "/gritlab/school-curriculum/go-reloaded", "grade": 1, "createdAt": "2024-01-10T09:30:00.000Z" },
      { "objectId": 2, "path": "/gritlab/school-curriculum/ascii-art", "grade": 0.5, "createdAt": "2024-02-10T09:30:00+00:00" },
      { "objectId": 3, "path": "/gritlab/school-curriculum/forum", "grade": null, "createdAt": "2024-03-10T09:30:00.123456+00:00" }
    ],
    "xp_view": [
      { "objectId": 1, "path": "/gritlab/school-curriculum/go-reloaded", "amount": 9000, "createdAt": "2024-01-10T09:30:00Z" },
      { "objectId": 2, "path": "/gritlab/school-curriculum/ascii-art", "amount": 12250, "createdAt": "2024-02-10T09:30:00Z" }
    ],
    "audits": [
      { "type": "up", "objectId": 7, "path": "/gritlab/school-curriculum/forum", "amount": 150, "createdAt": "2024-03-11T12:00:00Z" }
    ],
    "skills": [
      { "type": "skill_go", "amount": 55 },
      { "type": "skill_algorithm_design", "amount": 1250.5 }
    ]
  }
}"#;

#[test]
fn decodes_full_profile_response() {
    let profile = ProfileData::from_response_json(RESPONSE).expect("decode");

    assert_eq!(profile.user.id, 4242);
    assert_eq!(profile.user.login, "jdoe");
    assert_eq!(profile.total_xp(), 21_250);
    assert_eq!(profile.audit_totals().ratio(), Some(3.0));
    assert_eq!(profile.completed.len(), 3);
    assert_eq!(profile.completed[1].grade, Decimal::new(5, 1));
    assert_eq!(profile.completed[2].grade, Decimal::ZERO);
    assert_eq!(
        profile.completed[0].created_at,
        Utc.with_ymd_and_hms(2024, 1, 10, 9, 30, 0)
            .single()
            .expect("valid date")
    );
    assert_eq!(profile.audits[0].kind, "up");
    assert_eq!(profile.skills[1].skill_key, "skill_algorithm_design");
}

#[test]
fn graphql_errors_are_reported() {
    let response = r#"{ "errors": [{ "message": "JWTExpired" }, { "message": "denied" }] }"#;
    let err = ProfileData::from_response_json(response).expect_err("must fail");
    assert!(matches!(err, ChartError::Decode(ref message) if message.contains("JWTExpired; denied")));
}

#[test]
fn empty_errors_array_is_ignored() {
    let response = RESPONSE.replacen("\"data\"", "\"errors\": [], \"data\"", 1);
    assert!(ProfileData::from_response_json(&response).is_ok());
}

#[test]
fn missing_data_or_user_is_a_decode_error() {
    assert!(matches!(
        ProfileData::from_response_json("{}"),
        Err(ChartError::Decode(_))
    ));
    assert!(matches!(
        ProfileData::from_response_json(r#"{ "data": { "user": [] } }"#),
        Err(ChartError::Decode(_))
    ));
    assert!(matches!(
        ProfileData::from_response_json("not json"),
        Err(ChartError::Decode(_))
    ));
}

#[test]
fn sparse_user_defaults_to_empty_datasets() {
    let response = r#"{ "data": { "user": [{ "id": 1, "login": "min", "totalUp": null }] } }"#;
    let profile = ProfileData::from_response_json(response).expect("decode");
    assert!(profile.xp_events.is_empty());
    assert!(profile.completed.is_empty());
    assert!(profile.audit_totals().is_empty());
}

#[test]
fn summary_lists_present_fields_in_display_order() {
    let profile = ProfileData::from_response_json(RESPONSE).expect("decode");
    let summary = ProfileSummary::from_profile(&profile);

    let keys: Vec<_> = summary.fields.keys().map(String::as_str).collect();
    assert_eq!(keys, ["id", "login", "campus", "name", "email", "nationality"]);
    assert_eq!(summary.field("name"), Some("Jane Doe"));
    assert_eq!(summary.field("gender"), None);
    assert_eq!(summary.completed_projects, 3);
    assert_eq!(summary.pass_rate_percent, 33);
    assert_eq!(summary.success_tier, SuccessTier::Low);
    assert_eq!(summary.audit_ratio, "3.00");
}

#[test]
fn summary_skips_half_names_and_empty_attributes() {
    let response = r#"{
      "data": { "user": [{
        "id": 1,
        "login": "x",
        "campus": "g",
        "attrs": { "firstName": "Jane", "email": "", "gender": "", "nationality": "Finnish" }
      }] }
    }"#;
    let profile = ProfileData::from_response_json(response).expect("decode");
    let summary = ProfileSummary::from_profile(&profile);

    let keys: Vec<_> = summary.fields.keys().map(String::as_str).collect();
    assert_eq!(keys, ["id", "login", "campus", "nationality"]);
    assert_eq!(summary.field("name"), None);
    assert_eq!(summary.field("email"), None);
}

#[test]
fn skills_table_keeps_query_order() {
    let profile = ProfileData::from_response_json(RESPONSE).expect("decode");
    let table = build_skills_table(&profile.skills, LabelLocale::EnUs);

    let rows: Vec<_> = table
        .rows
        .iter()
        .map(|row| (row.label.as_str(), row.amount.as_str()))
        .collect();
    assert_eq!(rows, [("Go", "55"), ("Algorithm Design", "1,250.5")]);
    assert!(table.to_text().starts_with("Skill"));
}

#[test]
fn empty_skills_table_shows_message() {
    let table = build_skills_table(&[] as &[SkillEntry], LabelLocale::EnUs);
    assert!(table.is_empty());
    assert_eq!(table.to_text(), NO_SKILLS_MESSAGE);
}

#[test]
fn query_body_wraps_profile_query() {
    let body = profile_query_body();
    assert_eq!(body["query"].as_str(), Some(PROFILE_QUERY));
    assert!(PROFILE_QUERY.contains("xp_view: transaction("));
    assert!(PROFILE_QUERY.contains("distinct_on: [type]"));
}
