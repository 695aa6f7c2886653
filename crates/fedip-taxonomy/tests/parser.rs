//! Role-title parser behaviour.

use fedip_model::Level;
use fedip_taxonomy::{RoleParser, parse_role};
use proptest::prelude::*;

const BASES: &[&str] = &[
    "Data Analyst",
    "Nurse",
    "Clinical Informatician",
    "Technology Officer",
    "Platforms",
    "Engineer (Operations)",
];

const PREFIXES: &[(&str, Level)] = &[
    ("Trainee", Level::Trainee),
    ("Apprentice", Level::Apprentice),
    ("Associate", Level::Associate),
    ("Junior", Level::Junior),
    ("Senior", Level::Senior),
    ("Lead", Level::Lead),
    ("Principal", Level::Principal),
    ("Head of", Level::HeadOf),
    ("Assistant Director of", Level::AssistantDirectorOf),
    ("Director of", Level::DirectorOf),
    ("Qualified", Level::Qualified),
    ("CXIO", Level::Cxio),
];

#[test]
fn documented_examples() {
    let parser = RoleParser::new();

    let senior = parser.parse("Senior Data Analyst");
    assert_eq!(senior.level, Level::Senior);
    assert_eq!(senior.base, "Data Analyst");

    let director = parser.parse("Director of Engineering");
    assert_eq!(director.level, Level::DirectorOf);
    assert_eq!(director.base, "Engineering");

    let chief = parser.parse("Chief Technology Officer");
    assert_eq!(chief.level, Level::Chief);
    assert_eq!(chief.base, "Chief Technology Officer");

    let assistant = parser.parse("Assistant Director of Platforms");
    assert_eq!(assistant.level, Level::AssistantDirectorOf);
    assert_eq!(assistant.base, "Platforms");
}

#[test]
fn level_serializes_as_token() {
    let parsed = parse_role("Head of Clinical Safety");
    assert_eq!(parsed.level.as_str(), "Head of");
    assert_eq!(parse_role("Clinical Safety Officer").level.as_str(), "");
}

#[test]
fn parse_all_keeps_input_order() {
    let parsed = RoleParser::new().parse_all(&["Lead Nurse", "Nurse"]);
    assert_eq!(parsed[0].level, Level::Lead);
    assert_eq!(parsed[1].level, Level::Base);
    assert_eq!(parsed[0].base, parsed[1].base);
}

proptest! {
    #[test]
    fn parse_is_total_and_deterministic(raw in any::<String>()) {
        let first = parse_role(&raw);
        let second = parse_role(&raw);
        prop_assert_eq!(first, second);
    }

    #[test]
    fn prefixed_titles_split_into_level_and_base(
        prefix in prop::sample::select(PREFIXES),
        base in prop::sample::select(BASES),
        management in any::<bool>(),
    ) {
        let suffix = if management { " - Management" } else { "" };
        let title = format!("{} {base}{suffix}", prefix.0);
        let parsed = parse_role(&title);
        prop_assert_eq!(parsed.level, prefix.1);
        prop_assert_eq!(parsed.base, base);
    }

    #[test]
    fn chief_rule_is_idempotent(base in prop::sample::select(BASES)) {
        let parsed = parse_role(&format!("Chief {base}"));
        prop_assert_eq!(parsed.level, Level::Chief);
        let reparsed = parse_role(&parsed.base);
        prop_assert_eq!(reparsed.level, Level::Chief);
        prop_assert_eq!(reparsed.base, parsed.base);
    }
}
