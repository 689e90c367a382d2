//! Arrays and tuples, including rest elements.

use serde_json::{json, Value};
use shapecheck::{outcome, FailurePath, Schema, Validator};

fn run<V: Validator>(validator: &V, input: &Value) -> Value {
    outcome(&validator.parse(input))
}

// ====== array Tests ======

#[test]
fn test_array_of_union() {
    let schema = Schema::array(Schema::union((Schema::string(), Schema::null())));

    assert_eq!(
        run(&schema, &json!(["a", "b"])),
        json!({ "success": true, "value": ["a", "b"] })
    );
    assert_eq!(
        run(&schema, &json!(["a", null])),
        json!({ "success": true, "value": ["a", null] })
    );
    assert_eq!(
        run(&schema, &json!(["a", 1])),
        json!({
            "success": false,
            "path": {
                "invalid_element_value": {
                    "key": 1,
                    "path": { "not_union": [{ "not_string": 1 }, { "not_null": 1 }] }
                }
            }
        })
    );
    assert_eq!(
        run(&schema, &json!({ "a": 1 })),
        json!({ "success": false, "path": { "not_array": { "a": 1 } } })
    );
}

#[test]
fn test_array_accessors_follow_input() {
    let schema = Schema::array(Schema::boolean());
    let input = json!([true, false, true]);
    let flags = schema.parse(&input).into_result().unwrap();

    assert!(flags.is(&input));
    assert_eq!(flags.len(), 3);
    assert!(!flags.is_empty());
    assert_eq!(
        flags.iter().map(|flag| flag.as_bool()).collect::<Vec<_>>(),
        vec![true, false, true]
    );
    assert!(flags.get(1).is_some_and(|flag| flag.is(&input[1])));
}

// ====== tuple Tests ======

#[test]
fn test_tuple() {
    let schema = Schema::tuple((Schema::null(), Schema::string(), Schema::literal("literal")));

    assert_eq!(
        run(&schema, &json!([null, "a", "literal"])),
        json!({ "success": true, "value": [null, "a", "literal"] })
    );
    assert_eq!(
        run(&schema, &json!([null, 1, "literal"])),
        json!({
            "success": false,
            "path": { "invalid_element_value": { "key": 1, "path": { "not_string": 1 } } }
        })
    );
    assert_eq!(
        run(&schema, &json!([null, "a", "LITERAL"])),
        json!({
            "success": false,
            "path": { "invalid_element_value": { "key": 2, "path": { "invalid_value": "LITERAL" } } }
        })
    );
    assert_eq!(
        run(&schema, &json!({ "a": 1 })),
        json!({ "success": false, "path": { "not_array": { "a": 1 } } })
    );
}

#[test]
fn test_tuple_length_checked_before_elements() {
    let schema = Schema::tuple((Schema::string(), Schema::string()));

    assert_eq!(
        schema.parse(&json!([1])).into_result().unwrap_err(),
        FailurePath::LengthNotEqual(json!([1]))
    );
    assert_eq!(
        run(&schema, &json!(["a", "b", "c"])),
        json!({ "success": false, "path": { "length_not_equal": ["a", "b", "c"] } })
    );
}

#[test]
fn test_tuple_with_rest() {
    let schema = Schema::tuple((Schema::null(), Schema::string(), Schema::literal("literal")))
        .rest(Schema::boolean());

    for input in [
        json!([null, "a", "literal"]),
        json!([null, "a", "literal", true]),
        json!([null, "a", "literal", true, false]),
    ] {
        assert_eq!(
            run(&schema, &input),
            json!({ "success": true, "value": input })
        );
    }

    assert_eq!(
        run(&schema, &json!([null, 1, "literal"])),
        json!({
            "success": false,
            "path": { "invalid_element_value": { "key": 1, "path": { "not_string": 1 } } }
        })
    );
    assert_eq!(
        run(&schema, &json!([null, "a", "LITERAL"])),
        json!({
            "success": false,
            "path": { "invalid_element_value": { "key": 2, "path": { "invalid_value": "LITERAL" } } }
        })
    );
    assert_eq!(
        run(&schema, &json!({ "a": 1 })),
        json!({ "success": false, "path": { "not_array": { "a": 1 } } })
    );
}

#[test]
fn test_tuple_with_rest_rejects_bad_tail_and_short_input() {
    let schema = Schema::tuple((Schema::number(),)).rest(Schema::boolean());

    assert_eq!(
        run(&schema, &json!([1, true, "no"])),
        json!({
            "success": false,
            "path": { "invalid_element_value": { "key": 2, "path": { "not_boolean": "no" } } }
        })
    );
    assert_eq!(
        run(&schema, &json!([])),
        json!({ "success": false, "path": { "length_too_short": [] } })
    );
}

#[test]
fn test_empty_prefix_with_rest_behaves_like_array() {
    let tuple = Schema::tuple(()).rest(Schema::string());
    let array = Schema::array(Schema::string());

    for input in [json!([]), json!(["a", "b"]), json!(["a", 2]), json!("a")] {
        assert_eq!(run(&tuple, &input), run(&array, &input));
    }
}

#[test]
fn test_tuple_never_evaluates_past_first_failure() {
    let schema = Schema::tuple((
        Schema::string(),
        Schema::number(),
        Schema::type_guard::<(), _>(|_: &Value| -> bool { panic!("third element was checked") }),
    ));
    assert_eq!(
        run(&schema, &json!(["a", "b", "c"])),
        json!({
            "success": false,
            "path": { "invalid_element_value": { "key": 1, "path": { "not_number": "b" } } }
        })
    );
}
