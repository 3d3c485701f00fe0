//! Integration tests running every transformation on the shipped fixtures
//! in `data/`.

use roster::fixtures::Fixtures;
use roster::{ClassCount, ClassPrice, Level};
use serde_json::{Value, json};
use std::path::PathBuf;

fn load() -> Fixtures {
    let dir = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("data");
    Fixtures::load(&dir).expect("shipped fixtures should load")
}

#[test]
fn test_sum_of_simple_array() {
    let fixtures = load();
    let before = fixtures.simple_array.clone();

    let total = roster::sum_numbers(&fixtures.simple_array);

    assert!((total - 28.0).abs() < f64::EPSILON, "got {total}");
    assert_eq!(fixtures.simple_array, before, "sum must not mutate its input");
}

#[test]
fn test_new_member_object() {
    let fixtures = load();
    let member = roster::new_member_array_to_object(&fixtures.new_member);

    assert_eq!(roster::number_of_keys(&Value::Object(member.clone())), 6);
    assert_eq!(member.get("email"), Some(&json!("jordan.reyes@example.com")));
    assert_eq!(roster::member_object_to_array(&member), fixtures.new_member);
}

#[test]
fn test_group_fixture_classes() {
    let fixtures = load();
    let groups = roster::group_class_by_instructor(&fixtures.yoga_classes);

    let instructors: Vec<&str> = groups.instructors().collect();
    assert_eq!(instructors, ["Pat", "Jo", "Sam", "Alex"]);

    let total: usize = groups.iter().map(|(_, classes)| classes.len()).sum();
    assert_eq!(total, fixtures.yoga_classes.len());
}

#[test]
fn test_count_fixture_classes() {
    let fixtures = load();
    let classes = &fixtures.yoga_classes;

    assert_eq!(roster::count_classes_by_instructor(classes, "Pat"), ClassCount::Found(3));
    assert_eq!(roster::count_classes_by_instructor(classes, "Jo"), ClassCount::Found(2));
    assert_eq!(
        roster::count_classes_by_instructor(classes, "NoSuchInstructor"),
        ClassCount::NotFound
    );
}

#[test]
fn test_omit_age_fixture_members() {
    let fixtures = load();
    let profiles = roster::omit_age_from_members(&fixtures.members);

    let value = serde_json::to_value(&profiles).expect("profiles serialise");
    for profile in value.as_array().expect("array of profiles") {
        assert!(profile.get("age").is_none());
        assert!(profile.get("email").is_some());
        assert!(profile.get("currentMember").is_some());
    }
}

#[test]
fn test_active_fixture_members() {
    let fixtures = load();
    let active = roster::remove_inactive_members(&fixtures.members);

    let names: Vec<&Value> = active.iter().map(|m| &m.details["firstName"]).collect();
    assert_eq!(
        names,
        [&json!("Avery"), &json!("Casey"), &json!("Emery"), &json!("Finley")]
    );
}

#[test]
fn test_unique_fixture_classes() {
    let fixtures = load();
    let unique = roster::get_unique_classes(&fixtures.yoga_classes);

    let expected = [
        ("AM Flow", 1500),
        ("Yin Restore", 1800),
        ("Power Vinyasa", 2200),
        ("Hatha Basics", 1200),
    ]
    .map(|(title, price_in_cents)| ClassPrice {
        title: title.to_owned(),
        price_in_cents,
    });
    assert_eq!(unique, expected);
}

#[test]
fn test_order_fixture_classes() {
    let fixtures = load();
    let ordered = roster::order_classes_by_title_and_level(&fixtures.yoga_classes);

    let rows: Vec<(&str, &str, &Level)> = ordered
        .iter()
        .map(|c| (c.title.as_str(), c.instructor.as_str(), &c.level))
        .collect();
    assert_eq!(
        rows,
        [
            ("AM Flow", "Jo", &Level::from(5)),
            ("AM Flow", "Pat", &Level::from(2)),
            ("Hatha Basics", "Pat", &Level::from(1)),
            ("Power Vinyasa", "Sam", &Level::from(4)),
            ("Power Vinyasa", "Pat", &Level::from(3)),
            ("Yin Restore", "Alex", &Level::from(2)),
            ("Yin Restore", "Jo", &Level::from(1)),
        ]
    );
}
