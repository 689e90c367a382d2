//! Property tests over arbitrary JSON inputs.

use proptest::prelude::*;
use serde_json::Value;
use shapecheck::{brand, Check, FailurePath, Schema, Validator};

brand!(Tag);

fn json_value() -> impl Strategy<Value = Value> {
    let leaf = prop_oneof![
        Just(Value::Null),
        any::<bool>().prop_map(Value::Bool),
        any::<i64>().prop_map(|n| serde_json::json!(n)),
        (-1.0e6f64..1.0e6).prop_map(|f| serde_json::json!(f)),
        "[a-z]{0,6}".prop_map(Value::String),
    ];
    leaf.prop_recursive(3, 48, 6, |inner| {
        prop_oneof![
            prop::collection::vec(inner.clone(), 0..6).prop_map(Value::Array),
            prop::collection::btree_map("[a-c]{1,2}", inner, 0..6)
                .prop_map(|m| Value::Object(m.into_iter().collect())),
        ]
    })
}

/// A composite exercising every combinator at least once.
fn kitchen_sink() -> impl Validator {
    Schema::union((
        Schema::array(Schema::union((Schema::string(), Schema::null()))),
        Schema::tuple((Schema::number(),)).rest(Schema::boolean()),
        Schema::record(Schema::literal("a"), Schema::number()),
        Schema::intersection((
            Schema::object().required("b", Schema::boolean()),
            Schema::object().optional("c", Schema::array(Schema::number())),
        )),
        Schema::readonly(Schema::opaque::<Tag, _>(Schema::string())),
    ))
}

proptest! {
    /// Every input gets exactly one answer, and failures carry a diagnostic.
    #[test]
    fn parse_is_total(value in json_value()) {
        let schema = kitchen_sink();
        let accepted = schema.parse(&value).is_success();
        prop_assert_eq!(accepted, schema.check(Some(&value)).is_ok());
        if let Err(path) = schema.check(Some(&value)) {
            prop_assert!(matches!(path, FailurePath::NotUnion(ref branches) if branches.len() == 5));
        }
    }

    /// A successful parse hands back the very value it was given.
    #[test]
    fn success_preserves_identity(value in json_value()) {
        let schema = Schema::union((
            Schema::array(Schema::intersection(())),
            Schema::record(Schema::string(), Schema::intersection(())),
            Schema::string(),
            Schema::number(),
            Schema::boolean(),
            Schema::null(),
        ));
        let valid = schema.parse(&value).into_result();
        prop_assert!(valid.as_ref().is_ok_and(|v| v.is(&value)));
    }

    /// Readonly and opaque never change what is accepted or why.
    #[test]
    fn modifiers_are_transparent(value in json_value()) {
        let inner = Schema::array(Schema::number());
        let readonly = Schema::readonly(inner.clone());
        let branded = Schema::opaque::<Tag, _>(inner.clone());
        prop_assert_eq!(readonly.check(Some(&value)), inner.check(Some(&value)));
        prop_assert_eq!(branded.check(Some(&value)), inner.check(Some(&value)));
    }

    /// Readonly object fields validate exactly like mutable ones.
    #[test]
    fn readonly_fields_are_transparent(value in json_value()) {
        let plain = Schema::object().required("a", Schema::number()).optional("b", Schema::string());
        let frozen = plain.clone().readonly();
        prop_assert_eq!(frozen.check(Some(&value)), plain.check(Some(&value)));
    }

    /// Arrays never inspect elements past the first rejection.
    #[test]
    fn array_is_fail_fast(prefix in prop::collection::vec(any::<i64>(), 0..5), tail in 0usize..4) {
        let mut items: Vec<Value> = prefix.iter().map(|n| serde_json::json!(n)).collect();
        let bad_index = items.len();
        items.push(Value::Null);
        items.extend((0..tail).map(|_| Value::Bool(true)));

        let schema = Schema::array(Schema::union((
            Schema::number(),
            Schema::type_guard::<(), _>(|v: &Value| -> bool {
                assert!(!v.is_boolean(), "element after the first failure was inspected");
                false
            }),
        )));
        let failure = schema.parse(&Value::Array(items)).into_result().unwrap_err();
        prop_assert_eq!(failure.location().to_string(), format!("[{}]", bad_index));
    }
}
