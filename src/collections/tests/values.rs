use super::*;

#[test]
fn test_number_of_keys_object() {
    let obj = json!({ "name": "Avery", "age": 34, "currentMember": true });
    assert_eq!(number_of_keys(&obj), 3);
}

#[test]
fn test_number_of_keys_empty_object() {
    assert_eq!(number_of_keys(&json!({})), 0);
}

#[test]
fn test_number_of_keys_non_objects() {
    assert_eq!(number_of_keys(&json!(["a", "b"])), 2);
    assert_eq!(number_of_keys(&json!("yoga")), 4);
    assert_eq!(number_of_keys(&json!(42)), 0);
    assert_eq!(number_of_keys(&Value::Null), 0);
}

#[test]
fn test_number_of_keys_string_counts_utf16_units() {
    assert_eq!(number_of_keys(&json!("😀")), 2);
    assert_eq!(number_of_keys(&json!("café")), 4);
}

#[test]
fn test_number_of_record_keys_counts_extras() {
    let count = number_of_record_keys(&member(30, true, "Avery")).unwrap();
    // age, currentMember, name, email
    assert_eq!(count, 4);
}

#[test]
fn test_sum_numbers_skips_falsy() {
    let values = vec![
        json!(1),
        json!(0),
        Value::Null,
        json!(2),
        json!(false),
        json!(""),
        json!(3.5),
    ];
    assert!((sum_numbers(&values) - 6.5).abs() < f64::EPSILON);
    assert_eq!(values.len(), 7, "input must not shrink");
}

#[test]
fn test_sum_numbers_skips_non_numeric() {
    let values = vec![json!("10"), json!(true), json!({ "n": 1 }), json!(-4)];
    assert!((sum_numbers(&values) + 4.0).abs() < f64::EPSILON);
}

#[test]
fn test_sum_numbers_empty() {
    assert!(sum_numbers(&[]).abs() < f64::EPSILON);
}

#[test]
fn test_new_member_array_to_object() {
    let pairs = vec![
        KeyValuePair::new("name", "Jordan"),
        KeyValuePair::new("age", 29),
        KeyValuePair::new("currentMember", true),
    ];
    let member = new_member_array_to_object(&pairs);

    assert_eq!(
        Value::Object(member.clone()),
        json!({ "name": "Jordan", "age": 29, "currentMember": true })
    );
    let keys: Vec<&str> = member.keys().map(String::as_str).collect();
    assert_eq!(keys, ["name", "age", "currentMember"]);
}

#[test]
fn test_new_member_duplicate_key_overwrites_in_place() {
    let pairs = vec![
        KeyValuePair::new("name", "Jordan"),
        KeyValuePair::new("age", 29),
        KeyValuePair::new("name", "Jordan Lee"),
    ];
    let member = new_member_array_to_object(&pairs);

    assert_eq!(member.len(), 2);
    assert_eq!(member["name"], json!("Jordan Lee"));
    assert_eq!(member.keys().next().unwrap(), "name");
}

#[test]
fn test_member_object_round_trip() {
    let pairs = vec![
        KeyValuePair::new("email", "jordan@example.com"),
        KeyValuePair::new("age", 29),
    ];
    let member = new_member_array_to_object(&pairs);
    assert_eq!(member_object_to_array(&member), pairs);
}

#[test]
fn test_key_value_pair_json_shape() {
    let pair: KeyValuePair = serde_json::from_value(json!(["plan", "monthly"])).unwrap();
    assert_eq!(pair.key(), "plan");
    assert_eq!(pair.value(), &json!("monthly"));
    assert_eq!(serde_json::to_value(&pair).unwrap(), json!(["plan", "monthly"]));
}
