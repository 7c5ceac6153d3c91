//! Round-trip laws for the union value types: whatever JSON shape goes in is
//! the shape that comes back out, and re-parsing the output changes nothing.

use chart_options::{BoolOrNumber, BoolOrString, NumericOrString, OneOrMany};
use proptest::prelude::*;
use serde_json::{Value, json};

fn scalar() -> impl Strategy<Value = Value> {
    prop_oneof![
        any::<i64>().prop_map(|n| json!(n)),
        any::<f64>()
            .prop_filter("wire numbers are finite", |f| f.is_finite())
            .prop_map(|f| json!(f)),
        "[a-zA-Z0-9 %.+-]{0,16}".prop_map(|s| json!(s)),
    ]
}

fn scalar_or_list() -> impl Strategy<Value = Value> {
    prop_oneof![
        scalar(),
        proptest::collection::vec(scalar(), 0..6).prop_map(Value::Array),
    ]
}

proptest! {
    #[test]
    fn numeric_or_string_preserves_exact_shape(input in scalar()) {
        let parsed = NumericOrString::from_value(&input).unwrap().unwrap();
        prop_assert_eq!(parsed.to_value(), input);
    }

    #[test]
    fn numeric_or_string_reparse_is_idempotent(input in scalar()) {
        let first = NumericOrString::from_value(&input).unwrap().unwrap();
        let second = NumericOrString::from_value(&first.to_value()).unwrap().unwrap();
        prop_assert_eq!(first, second);
    }

    #[test]
    fn one_or_many_preserves_exact_shape(input in scalar_or_list()) {
        let parsed = OneOrMany::<NumericOrString>::from_value(&input)
            .unwrap()
            .unwrap();
        prop_assert_eq!(parsed.is_singular(), !input.is_array());
        prop_assert_eq!(parsed.to_value(), input);
    }

    #[test]
    fn one_or_many_reparse_is_idempotent(input in scalar_or_list()) {
        let first = OneOrMany::<NumericOrString>::from_value(&input)
            .unwrap()
            .unwrap();
        let second = OneOrMany::<NumericOrString>::from_value(&first.to_value())
            .unwrap()
            .unwrap();
        prop_assert_eq!(first, second);
    }

    #[test]
    fn one_or_many_keeps_order_and_count(items in proptest::collection::vec(scalar(), 0..6)) {
        let input = Value::Array(items.clone());
        let parsed = OneOrMany::<NumericOrString>::from_value(&input)
            .unwrap()
            .unwrap();
        prop_assert_eq!(parsed.len(), items.len());
        for (i, item) in items.iter().enumerate() {
            prop_assert_eq!(&parsed.get(i).unwrap().to_value(), item);
        }
    }

    #[test]
    fn serde_path_agrees_with_explicit_parse(input in scalar_or_list()) {
        let explicit = OneOrMany::<NumericOrString>::from_value(&input)
            .unwrap()
            .unwrap();
        let derived: OneOrMany<NumericOrString> =
            serde_json::from_value(input).unwrap();
        prop_assert_eq!(explicit, derived);
    }
}

#[test]
fn bool_unions_preserve_exact_shape() {
    for input in [json!(true), json!(false), json!("scale"), json!("move")] {
        let parsed = BoolOrString::from_value(&input).unwrap().unwrap();
        assert_eq!(parsed.to_value(), input);
    }
    for input in [json!(true), json!(false), json!(0.4), json!(20)] {
        let parsed = BoolOrNumber::from_value(&input).unwrap().unwrap();
        assert_eq!(parsed.to_value(), input);
    }
}

#[test]
fn null_parses_to_absent_everywhere() {
    assert_eq!(NumericOrString::from_value(&Value::Null).unwrap(), None);
    assert_eq!(
        OneOrMany::<NumericOrString>::from_value(&Value::Null).unwrap(),
        None
    );
    assert_eq!(BoolOrString::from_value(&Value::Null).unwrap(), None);
    assert_eq!(BoolOrNumber::from_value(&Value::Null).unwrap(), None);
}

#[test]
fn objects_fail_everywhere() {
    let object = json!({ "width": 20 });
    assert!(NumericOrString::from_value(&object).is_err());
    assert!(OneOrMany::<NumericOrString>::from_value(&object).is_err());
    assert!(BoolOrString::from_value(&object).is_err());
    assert!(BoolOrNumber::from_value(&object).is_err());
}
