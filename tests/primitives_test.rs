//! Scalar validators, literals and type guards.

use serde_json::{json, Value};
use shapecheck::{outcome, FailurePath, Schema, Validator};

fn run<V: Validator>(validator: &V, input: &Value) -> Value {
    outcome(&validator.parse(input))
}

#[test]
fn test_scalars_accept_their_kind() {
    assert_eq!(
        run(&Schema::string(), &json!("a")),
        json!({ "success": true, "value": "a" })
    );
    assert_eq!(
        run(&Schema::number(), &json!(-0.5)),
        json!({ "success": true, "value": -0.5 })
    );
    assert_eq!(
        run(&Schema::boolean(), &json!(false)),
        json!({ "success": true, "value": false })
    );
    assert_eq!(
        run(&Schema::null(), &json!(null)),
        json!({ "success": true, "value": null })
    );
}

#[test]
fn test_scalars_report_their_own_code() {
    let input = json!([1]);
    assert_eq!(
        run(&Schema::string(), &input),
        json!({ "success": false, "path": { "not_string": [1] } })
    );
    assert_eq!(
        run(&Schema::number(), &input),
        json!({ "success": false, "path": { "not_number": [1] } })
    );
    assert_eq!(
        run(&Schema::boolean(), &input),
        json!({ "success": false, "path": { "not_boolean": [1] } })
    );
    assert_eq!(
        run(&Schema::null(), &input),
        json!({ "success": false, "path": { "not_null": [1] } })
    );
    assert_eq!(
        run(&Schema::undefined(), &input),
        json!({ "success": false, "path": { "not_undefined": [1] } })
    );
}

#[test]
fn test_undefined_input() {
    assert!(Schema::undefined().parse_input(None).is_success());
    assert_eq!(
        Schema::null().parse_input(None).into_result().unwrap_err(),
        FailurePath::NotNull(None)
    );
    assert_eq!(
        outcome(&Schema::boolean().parse_input(None)),
        json!({ "success": false, "path": { "not_boolean": null } })
    );
}

#[test]
fn test_null_is_not_undefined() {
    assert_eq!(
        Schema::undefined().parse(&json!(null)).into_result().unwrap_err(),
        FailurePath::NotUndefined(json!(null))
    );
}

#[test]
fn test_literal() {
    let schema = Schema::literal("literal");
    assert!(schema.parse(&json!("literal")).is_success());
    assert_eq!(
        run(&schema, &json!("LITERAL")),
        json!({ "success": false, "path": { "invalid_value": "LITERAL" } })
    );
    assert_eq!(
        run(&Schema::literal(3), &json!(3.0)),
        json!({ "success": true, "value": 3.0 })
    );
}

#[test]
fn test_literal_does_not_compare_structurally_across_kinds() {
    assert!(Schema::literal(0).parse(&json!(false)).is_failure());
    assert!(Schema::literal("1").parse(&json!(1)).is_failure());
    assert!(Schema::literal(Value::Null).parse_input(None).is_failure());
}

#[test]
fn test_non_finite_literal_never_matches_null() {
    for schema in [
        Schema::literal(f64::NAN),
        Schema::literal(f64::INFINITY),
        Schema::literal(f64::NEG_INFINITY),
    ] {
        assert_eq!(
            run(&schema, &json!(null)),
            json!({ "success": false, "path": { "invalid_value": null } })
        );
        assert!(schema.parse(&json!(1e308)).is_failure());
        assert!(schema.parse_input(None).is_failure());
    }
}

#[test]
fn test_undefined_literal() {
    let schema = Schema::literal_undefined();
    assert!(schema.parse_input(None).is_success());
    assert_eq!(
        schema.parse(&json!(null)).into_result().unwrap_err(),
        FailurePath::InvalidValue(Some(json!(null)))
    );
    assert_eq!(
        run(&schema, &json!(0)),
        json!({ "success": false, "path": { "invalid_value": 0 } })
    );

    let field = Schema::object().optional("gone", Schema::literal_undefined());
    assert!(field.parse(&json!({})).is_success());
    assert_eq!(
        field.parse(&json!({ "gone": null })).into_result().unwrap_err(),
        FailurePath::element("gone", FailurePath::InvalidValue(Some(json!(null))))
    );
}

#[test]
fn test_type_guard() {
    let schema = Schema::type_guard::<f64, _>(|x: &Value| x.is_number());
    assert_eq!(run(&schema, &json!(1)), json!({ "success": true, "value": 1 }));
    assert_eq!(
        run(&schema, &json!("1")),
        json!({ "success": false, "path": { "invalid_value": "1" } })
    );
}

#[test]
fn test_type_guard_narrows_to_declared_type() {
    let even = Schema::type_guard::<f64, _>(|x: &Value| x.as_i64().is_some_and(|n| n % 2 == 0));
    let input = json!(4);
    let valid = even.parse(&input).into_result().unwrap();
    assert_eq!(valid.as_f64(), 4.0);
    assert!(even.parse(&json!(3)).is_failure());
}

#[test]
fn test_input_type_guard_decides_on_undefined() {
    let seen = std::sync::Mutex::new(Vec::new());
    let schema = Schema::type_guard_input::<(), _>(|input: Option<&Value>| {
        seen.lock().unwrap().push(input.cloned());
        input.map_or(true, Value::is_string)
    });

    assert!(schema.parse_input(None).is_success());
    assert!(schema.parse(&json!("a")).is_success());
    assert_eq!(
        schema.parse(&json!(1)).into_result().unwrap_err(),
        FailurePath::InvalidValue(Some(json!(1)))
    );
    assert_eq!(*seen.lock().unwrap(), vec![None, Some(json!("a")), Some(json!(1))]);

    let strict = Schema::type_guard_input::<(), _>(|input: Option<&Value>| input.is_some());
    assert_eq!(
        strict.parse_input(None).into_result().unwrap_err(),
        FailurePath::InvalidValue(None)
    );
}
