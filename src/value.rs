use serde::{Deserialize, Serialize};
use serde_json::{Number, Value};

use crate::error::ValueError;

/// Element types that may appear inside a [`OneOrMany`] list.
///
/// The schema only ever puts JSON scalars in its single-or-array positions,
/// so conversion to and from `serde_json::Value` cannot fail once the shape
/// has been checked.
pub trait Scalar: Sized {
    /// Wire-shape name used in error messages.
    fn describe() -> &'static str;
    fn scalar_from_value(value: &Value) -> Option<Self>;
    fn scalar_to_value(&self) -> Value;
}

impl Scalar for Number {
    fn describe() -> &'static str {
        "number"
    }

    fn scalar_from_value(value: &Value) -> Option<Self> {
        match value {
            Value::Number(n) => Some(n.clone()),
            _ => None,
        }
    }

    fn scalar_to_value(&self) -> Value {
        Value::Number(self.clone())
    }
}

impl Scalar for String {
    fn describe() -> &'static str {
        "string"
    }

    fn scalar_from_value(value: &Value) -> Option<Self> {
        value.as_str().map(str::to_owned)
    }

    fn scalar_to_value(&self) -> Value {
        Value::String(self.clone())
    }
}

impl Scalar for NumericOrString {
    fn describe() -> &'static str {
        "string or number"
    }

    fn scalar_from_value(value: &Value) -> Option<Self> {
        match value {
            Value::Number(n) => Some(NumericOrString::Number(n.clone())),
            Value::String(s) => Some(NumericOrString::String(s.clone())),
            _ => None,
        }
    }

    fn scalar_to_value(&self) -> Value {
        self.to_value()
    }
}

/// A value that travels as either a JSON string or a JSON number.
///
/// The schema treats `"20%"` and `20` as semantically different values, so no
/// coercion between the two arms ever happens implicitly: whichever shape was
/// on the wire is the shape that comes back out. Numbers are kept as
/// `serde_json::Number` so an integer `20` does not turn into `20.0` on
/// rewrite.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum NumericOrString {
    Number(Number),
    String(String),
}

impl NumericOrString {
    /// Checks the shape of `value` and stores the matching arm.
    /// `null` is accepted and maps to `None` so callers can tell "absent"
    /// apart from `0` or `""`.
    pub fn from_value(value: &Value) -> Result<Option<Self>, ValueError> {
        match value {
            Value::Null => Ok(None),
            Value::Number(n) => Ok(Some(NumericOrString::Number(n.clone()))),
            Value::String(s) => Ok(Some(NumericOrString::String(s.clone()))),
            other => Err(ValueError::format("string or number", other)),
        }
    }

    /// Emits exactly the stored arm.
    pub fn to_value(&self) -> Value {
        match self {
            NumericOrString::Number(n) => Value::Number(n.clone()),
            NumericOrString::String(s) => Value::String(s.clone()),
        }
    }

    pub fn is_number(&self) -> bool {
        matches!(self, NumericOrString::Number(_))
    }

    pub fn is_string(&self) -> bool {
        matches!(self, NumericOrString::String(_))
    }

    /// Returns the value as text. Numbers are formatted with the locale-free
    /// `serde_json::Number` formatting (`20` → `"20"`, `20.5` → `"20.5"`).
    pub fn as_string(&self) -> String {
        match self {
            NumericOrString::Number(n) => n.to_string(),
            NumericOrString::String(s) => s.clone(),
        }
    }

    /// Returns the stored string arm, without formatting numbers.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            NumericOrString::String(s) => Some(s.as_str()),
            NumericOrString::Number(_) => None,
        }
    }

    /// Numeric view. A stored number converts directly; a stored string is
    /// accepted only when the whole string parses as a float (`"20"` does,
    /// `"20%"` does not).
    pub fn as_f64(&self) -> Result<f64, ValueError> {
        match self {
            NumericOrString::Number(n) => n
                .as_f64()
                .ok_or_else(|| ValueError::mismatch("number", "f64")),
            NumericOrString::String(s) => s
                .parse::<f64>()
                .map_err(|_| ValueError::mismatch("string", "number")),
        }
    }
}

impl From<f64> for NumericOrString {
    fn from(v: f64) -> Self {
        Number::from_f64(v)
            .map(NumericOrString::Number)
            .unwrap_or_else(|| NumericOrString::String(v.to_string()))
    }
}

impl From<i64> for NumericOrString {
    fn from(v: i64) -> Self {
        NumericOrString::Number(Number::from(v))
    }
}

impl From<&str> for NumericOrString {
    fn from(v: &str) -> Self {
        NumericOrString::String(v.to_owned())
    }
}

impl From<String> for NumericOrString {
    fn from(v: String) -> Self {
        NumericOrString::String(v)
    }
}

/// A value that travels as either a bare scalar or an array of scalars.
///
/// The discriminant remembers which shape was on the wire, so a singular
/// `cellSize: 20` re-serializes as `20` and `cellSize: [20, 40]` stays an
/// array, element order untouched.
///
/// ```JSON
/// { "cellSize": 20 }
/// { "cellSize": ["auto", 40] }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum OneOrMany<T> {
    One(T),
    Many(Vec<T>),
}

impl<T: Scalar> OneOrMany<T> {
    /// Checks the shape of `value` and stores the matching arm. Arrays must
    /// contain scalars of the element type only; `null` maps to `None`.
    pub fn from_value(value: &Value) -> Result<Option<Self>, ValueError> {
        match value {
            Value::Null => Ok(None),
            Value::Array(items) => {
                let mut out = Vec::with_capacity(items.len());
                for item in items {
                    let elem = T::scalar_from_value(item)
                        .ok_or_else(|| ValueError::format(T::describe(), item))?;
                    out.push(elem);
                }
                Ok(Some(OneOrMany::Many(out)))
            }
            Value::Object(_) => Err(ValueError::format("scalar or array of scalars", value)),
            scalar => T::scalar_from_value(scalar)
                .map(|elem| Some(OneOrMany::One(elem)))
                .ok_or_else(|| ValueError::format(T::describe(), scalar)),
        }
    }

    /// Emits a bare scalar for the singular arm, an array otherwise.
    pub fn to_value(&self) -> Value {
        match self {
            OneOrMany::One(item) => item.scalar_to_value(),
            OneOrMany::Many(items) => {
                Value::Array(items.iter().map(Scalar::scalar_to_value).collect())
            }
        }
    }
}

impl<T> OneOrMany<T> {
    pub fn is_singular(&self) -> bool {
        matches!(self, OneOrMany::One(_))
    }

    pub fn len(&self) -> usize {
        match self {
            OneOrMany::One(_) => 1,
            OneOrMany::Many(items) => items.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn get(&self, index: usize) -> Option<&T> {
        match self {
            OneOrMany::One(item) => (index == 0).then_some(item),
            OneOrMany::Many(items) => items.get(index),
        }
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        match self {
            OneOrMany::One(item) => std::slice::from_ref(item).iter(),
            OneOrMany::Many(items) => items.iter(),
        }
    }
}

impl<T> From<T> for OneOrMany<T> {
    fn from(item: T) -> Self {
        OneOrMany::One(item)
    }
}

impl<T> From<Vec<T>> for OneOrMany<T> {
    fn from(items: Vec<T>) -> Self {
        OneOrMany::Many(items)
    }
}

/// A value that travels as either a JSON bool or a JSON string, e.g. `roam`
/// (`true` / `false` / `"scale"` / `"move"`) or `selectedMode` (`true` /
/// `false` / `"single"` / `"multiple"`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum BoolOrString {
    Bool(bool),
    String(String),
}

impl BoolOrString {
    pub fn from_value(value: &Value) -> Result<Option<Self>, ValueError> {
        match value {
            Value::Null => Ok(None),
            Value::Bool(b) => Ok(Some(BoolOrString::Bool(*b))),
            Value::String(s) => Ok(Some(BoolOrString::String(s.clone()))),
            other => Err(ValueError::format("bool or string", other)),
        }
    }

    pub fn to_value(&self) -> Value {
        match self {
            BoolOrString::Bool(b) => Value::Bool(*b),
            BoolOrString::String(s) => Value::String(s.clone()),
        }
    }

    /// Boolean view. A stored string does not coerce; what `"scale"` means
    /// is up to the consuming engine.
    pub fn as_bool(&self) -> Result<bool, ValueError> {
        match self {
            BoolOrString::Bool(b) => Ok(*b),
            BoolOrString::String(_) => Err(ValueError::mismatch("string", "bool")),
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            BoolOrString::String(s) => Some(s.as_str()),
            BoolOrString::Bool(_) => None,
        }
    }
}

impl From<bool> for BoolOrString {
    fn from(v: bool) -> Self {
        BoolOrString::Bool(v)
    }
}

impl From<&str> for BoolOrString {
    fn from(v: &str) -> Self {
        BoolOrString::String(v.to_owned())
    }
}

/// A value that travels as either a JSON bool or a JSON number, e.g.
/// `smooth` (`true` / `0.4`) or `autoCurveness` (`true` / `20`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum BoolOrNumber {
    Bool(bool),
    Number(Number),
}

impl BoolOrNumber {
    pub fn from_value(value: &Value) -> Result<Option<Self>, ValueError> {
        match value {
            Value::Null => Ok(None),
            Value::Bool(b) => Ok(Some(BoolOrNumber::Bool(*b))),
            Value::Number(n) => Ok(Some(BoolOrNumber::Number(n.clone()))),
            other => Err(ValueError::format("bool or number", other)),
        }
    }

    pub fn to_value(&self) -> Value {
        match self {
            BoolOrNumber::Bool(b) => Value::Bool(*b),
            BoolOrNumber::Number(n) => Value::Number(n.clone()),
        }
    }

    pub fn as_bool(&self) -> Result<bool, ValueError> {
        match self {
            BoolOrNumber::Bool(b) => Ok(*b),
            BoolOrNumber::Number(_) => Err(ValueError::mismatch("number", "bool")),
        }
    }

    pub fn as_f64(&self) -> Result<f64, ValueError> {
        match self {
            BoolOrNumber::Number(n) => n
                .as_f64()
                .ok_or_else(|| ValueError::mismatch("number", "f64")),
            BoolOrNumber::Bool(_) => Err(ValueError::mismatch("bool", "number")),
        }
    }
}

impl From<bool> for BoolOrNumber {
    fn from(v: bool) -> Self {
        BoolOrNumber::Bool(v)
    }
}

impl From<i64> for BoolOrNumber {
    fn from(v: i64) -> Self {
        BoolOrNumber::Number(Number::from(v))
    }
}

#[cfg(test)]
mod tests {
    use super::{BoolOrString, NumericOrString, OneOrMany};
    use crate::error::ValueError;
    use serde_json::{Value, json};

    #[test]
    fn percent_string_stays_a_string() {
        let v = NumericOrString::from_value(&json!("20%")).unwrap().unwrap();
        assert!(v.is_string());
        assert_eq!(v.as_string(), "20%");
        assert!(matches!(
            v.as_f64(),
            Err(ValueError::TypeMismatch { .. })
        ));
        assert_eq!(v.to_value(), json!("20%"));
    }

    #[test]
    fn number_stays_a_number() {
        let v = NumericOrString::from_value(&json!(20)).unwrap().unwrap();
        assert!(v.is_number());
        assert_eq!(v.as_string(), "20");
        assert_eq!(v.as_f64().unwrap(), 20.0);
        // Exact wire shape: the integer does not come back as 20.0.
        assert_eq!(v.to_value().to_string(), "20");
    }

    #[test]
    fn numeric_string_converts_on_request() {
        let v = NumericOrString::from_value(&json!("20")).unwrap().unwrap();
        assert!(v.is_string());
        assert_eq!(v.as_f64().unwrap(), 20.0);
        assert_eq!(v.to_value(), json!("20"));
    }

    #[test]
    fn null_is_absent_not_zero() {
        assert_eq!(NumericOrString::from_value(&Value::Null).unwrap(), None);
        assert_ne!(
            NumericOrString::from_value(&json!(0)).unwrap(),
            None
        );
        assert_ne!(
            NumericOrString::from_value(&json!("")).unwrap(),
            None
        );
    }

    #[test]
    fn object_is_rejected_eagerly() {
        assert!(matches!(
            NumericOrString::from_value(&json!({})),
            Err(ValueError::Format { .. })
        ));
        assert!(matches!(
            OneOrMany::<NumericOrString>::from_value(&json!({})),
            Err(ValueError::Format { .. })
        ));
        assert!(matches!(
            NumericOrString::from_value(&json!([20])),
            Err(ValueError::Format { .. })
        ));
    }

    #[test]
    fn singular_cell_size_round_trips_bare() {
        let v = OneOrMany::<NumericOrString>::from_value(&json!(20))
            .unwrap()
            .unwrap();
        assert!(v.is_singular());
        assert_eq!(v.len(), 1);
        assert_eq!(v.get(0).unwrap().as_f64().unwrap(), 20.0);
        assert_eq!(v.to_value(), json!(20));
    }

    #[test]
    fn plural_cell_size_round_trips_as_array() {
        let v = OneOrMany::<NumericOrString>::from_value(&json!([20, 40]))
            .unwrap()
            .unwrap();
        assert!(!v.is_singular());
        assert_eq!(v.len(), 2);
        assert_eq!(v.get(1).unwrap().as_f64().unwrap(), 40.0);
        assert_eq!(v.to_value(), json!([20, 40]));
    }

    #[test]
    fn single_element_array_stays_an_array() {
        let v = OneOrMany::<NumericOrString>::from_value(&json!([20]))
            .unwrap()
            .unwrap();
        assert!(!v.is_singular());
        assert_eq!(v.to_value(), json!([20]));
    }

    #[test]
    fn empty_array_is_present_and_empty() {
        let v = OneOrMany::<NumericOrString>::from_value(&json!([]))
            .unwrap()
            .unwrap();
        assert!(v.is_empty());
        assert_eq!(v.to_value(), json!([]));
    }

    #[test]
    fn nested_shapes_inside_arrays_are_rejected() {
        for bad in [json!([[20]]), json!([{ "v": 1 }]), json!([20, true])] {
            assert!(matches!(
                OneOrMany::<NumericOrString>::from_value(&bad),
                Err(ValueError::Format { .. })
            ));
        }
    }

    #[test]
    fn roam_keeps_bool_and_string_arms_apart() {
        let v = BoolOrString::from_value(&json!(true)).unwrap().unwrap();
        assert_eq!(v.as_bool().unwrap(), true);
        assert_eq!(v.to_value(), json!(true));

        let v = BoolOrString::from_value(&json!("scale")).unwrap().unwrap();
        assert_eq!(v.as_str(), Some("scale"));
        assert!(matches!(
            v.as_bool(),
            Err(ValueError::TypeMismatch { .. })
        ));
        assert_eq!(v.to_value(), json!("scale"));
    }

    #[test]
    fn reparse_is_idempotent() {
        for input in [json!("20%"), json!(20), json!([20, "40%"]), json!(true)] {
            if let Some(first) = NumericOrString::from_value(&input).ok().flatten() {
                let second = NumericOrString::from_value(&first.to_value())
                    .unwrap()
                    .unwrap();
                assert_eq!(first, second);
            }
            if let Some(first) = OneOrMany::<NumericOrString>::from_value(&input)
                .ok()
                .flatten()
            {
                let second = OneOrMany::<NumericOrString>::from_value(&first.to_value())
                    .unwrap()
                    .unwrap();
                assert_eq!(first, second);
            }
        }
    }

    #[test]
    fn untagged_serde_matches_explicit_parse() {
        let from_serde: NumericOrString = serde_json::from_value(json!("20%")).unwrap();
        let explicit = NumericOrString::from_value(&json!("20%")).unwrap().unwrap();
        assert_eq!(from_serde, explicit);

        let from_serde: OneOrMany<NumericOrString> =
            serde_json::from_value(json!([20, "40%"])).unwrap();
        let explicit = OneOrMany::from_value(&json!([20, "40%"])).unwrap().unwrap();
        assert_eq!(from_serde, explicit);
    }
}
