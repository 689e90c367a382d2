//! Record validation.

use serde_json::{json, Value};
use shapecheck::{brand, outcome, FailurePath, Schema, Validator};

brand!(Id);

fn run<V: Validator>(validator: &V, input: &Value) -> Value {
    outcome(&validator.parse(input))
}

#[test]
fn test_record_with_branded_keys() {
    let schema = Schema::record(Schema::opaque::<Id, _>(Schema::string()), Schema::number());

    assert_eq!(
        run(&schema, &json!({ "a": 1 })),
        json!({ "success": true, "value": { "a": 1 } })
    );
    assert_eq!(
        run(&schema, &json!({ "a": "a" })),
        json!({
            "success": false,
            "path": { "invalid_element_value": { "key": "a", "path": { "not_number": "a" } } }
        })
    );
    assert_eq!(
        run(&schema, &json!(null)),
        json!({ "success": false, "path": { "not_object": null } })
    );
}

#[test]
fn test_record_key_failure() {
    let schema = Schema::record(Schema::literal("only"), Schema::boolean());
    assert_eq!(
        run(&schema, &json!({ "only": true, "other": true })),
        json!({
            "success": false,
            "path": { "invalid_element_key": { "path": { "invalid_value": "other" } } }
        })
    );
}

#[test]
fn test_record_keys_are_strings() {
    let schema = Schema::record(Schema::number(), Schema::boolean());
    assert_eq!(
        schema.parse(&json!({ "1": true })).into_result().unwrap_err(),
        FailurePath::key(FailurePath::NotNumber(Some(json!("1"))))
    );
}

#[test]
fn test_record_entries_view() {
    let schema = Schema::readonly(Schema::record(Schema::string(), Schema::number()));
    let input = json!({ "x": 1, "y": 2.5 });
    let record = schema.parse(&input).into_result().unwrap().into_inner();

    let entries: Vec<(&str, f64)> = record.entries().map(|(k, v)| (k, v.as_f64())).collect();
    assert_eq!(entries, vec![("x", 1.0), ("y", 2.5)]);
    assert!(record.get("z").is_none());
}
