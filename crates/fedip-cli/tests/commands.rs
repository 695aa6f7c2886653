//! Command tests against the bundled sample data directory.

use std::path::PathBuf;

use fedip_cli::commands::{
    RecommendRequest, family_detail, family_overview, load_tables, parse_titles, recommend,
};
use fedip_core::{AggregationPolicy, WizardEngine, WizardOptions};
use fedip_model::{Level, Step};
use fedip_taxonomy::RoleOrder;

fn sample_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../../data")
}

fn engine(options: WizardOptions) -> WizardEngine {
    let (tables, _) = load_tables(Some(&sample_dir())).expect("load sample data");
    WizardEngine::new(tables, options)
}

fn request(category: &str, family: &str, sub_bucket: Option<&str>, role: &str) -> RecommendRequest {
    RecommendRequest {
        category: category.to_string(),
        family: family.to_string(),
        sub_bucket: sub_bucket.map(str::to_string),
        role: role.to_string(),
    }
}

#[test]
fn recommends_union_of_bodies() {
    let engine = engine(WizardOptions::default());
    let state = recommend(
        &engine,
        &request(
            "I am a clinician working in informatics",
            "Clinical Informatics",
            Some("Medicine"),
            "Chief Clinical Information Officer",
        ),
    )
    .expect("recommend");

    let result = state.result.expect("result");
    insta::assert_json_snapshot!(result, @r#"
    {
      "professional_body": [
        "BCS, The Chartered Institute for IT",
        "Faculty of Clinical Informatics"
      ],
      "fedip_level": "Leading Practitioner"
    }
    "#);
}

#[test]
fn base_only_policy_ignores_overrides() {
    let engine = engine(WizardOptions::default().with_policy(AggregationPolicy::BaseCategoryOnly));
    let state = recommend(
        &engine,
        &request(
            "I work in digital, data or technology",
            "Clinical Informatics",
            Some("Medicine"),
            "Chief Clinical Information Officer",
        ),
    )
    .expect("recommend");

    let result = state.result.expect("result");
    assert_eq!(
        result.bodies_display(),
        "BCS, The Chartered Institute for IT"
    );
}

#[test]
fn single_bucket_family_needs_no_sub_bucket() {
    let engine = engine(WizardOptions::default());
    let state = recommend(
        &engine,
        &request(
            "I work in digital, data or technology",
            "Software Development",
            None,
            "Software Developer",
        ),
    )
    .expect("recommend");

    assert_eq!(state.answers.get(Step::SubBucket), Some("Software Developer"));
    let result = state.result.expect("result");
    assert_eq!(result.fedip_level, "Practitioner");
    assert_eq!(result.professional_body.len(), 1);
}

#[test]
fn multi_bucket_family_requires_sub_bucket() {
    let engine = engine(WizardOptions::default());
    let err = recommend(
        &engine,
        &request(
            "I work in digital, data or technology",
            "Data",
            None,
            "Data Analyst",
        ),
    )
    .unwrap_err();

    let message = format!("{err:#}");
    assert!(message.contains("needs --sub-bucket"), "{message}");
    assert!(message.contains("Data Analyst"), "{message}");
}

#[test]
fn unknown_role_lists_the_options() {
    let engine = engine(WizardOptions::default());
    let err = recommend(
        &engine,
        &request(
            "I work in digital, data or technology",
            "Software Development",
            None,
            "Astronaut",
        ),
    )
    .unwrap_err();

    let message = format!("{err:#}");
    assert!(message.contains("Junior Software Developer"), "{message}");
    assert!(message.contains("'Astronaut' is not an option"), "{message}");
}

#[test]
fn family_detail_groups_flat_titles() {
    let engine = engine(WizardOptions::default());
    let buckets = family_detail(&engine, "Data", RoleOrder::Canonical).expect("family");

    let names: Vec<&str> = buckets.iter().map(|(name, _)| name.as_str()).collect();
    assert_eq!(
        names,
        vec!["Chief Data Officer", "Data", "Data Analyst", "Data Engineer"]
    );
    assert_eq!(buckets[1].1, vec!["Head of Data", "Director of Data"]);
    assert_eq!(
        buckets[2].1,
        vec![
            "Trainee Data Analyst",
            "Data Analyst",
            "Senior Data Analyst",
            "Lead Data Analyst",
        ]
    );

    assert!(family_detail(&engine, "Astronomy", RoleOrder::Canonical).is_err());
}

#[test]
fn family_overview_reports_shapes() {
    let engine = engine(WizardOptions::default());
    let overview = family_overview(&engine);

    assert_eq!(overview.len(), 4);
    let clinical = overview
        .iter()
        .find(|family| family.name == "Clinical Informatics")
        .expect("clinical informatics");
    assert!(clinical.nested);
    assert_eq!(clinical.sub_buckets, 2);
    assert_eq!(clinical.roles, 5);
    assert_eq!(
        clinical.body.as_deref(),
        Some("Faculty of Clinical Informatics")
    );
}

#[test]
fn parse_titles_keeps_input_order() {
    let parsed = parse_titles(&[
        "Assistant Director of Platforms".to_string(),
        "Chief Technology Officer".to_string(),
    ]);
    assert_eq!(parsed[0].1.level, Level::AssistantDirectorOf);
    assert_eq!(parsed[0].1.base, "Platforms");
    assert_eq!(parsed[1].1.level, Level::Chief);
    assert_eq!(parsed[1].1.base, "Chief Technology Officer");
}

#[test]
fn missing_data_dir_is_reported() {
    let err = load_tables(Some(&sample_dir().join("does-not-exist"))).unwrap_err();
    assert!(format!("{err:#}").contains("load reference tables"));
}
