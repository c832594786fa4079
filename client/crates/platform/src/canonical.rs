//! Canonical JSON
//!
//! Deterministic serialization used for client/server integrity checks.
//!
//! ## Rules
//! - Every object has its keys sorted lexicographically, at every depth
//!   (including objects nested inside arrays)
//! - Array element order is preserved exactly
//! - Output is compact: no whitespace between tokens
//! - Numbers render the way JavaScript prints them: integral floats lose
//!   their fraction (`135.0` becomes `135`), plain decimal notation is used
//!   for magnitudes in `[1e-7, 1e21)` and `1e+21` style exponents outside it
//! - Strings use the standard JSON escapes
//!
//! Digests are computed only from [`CanonicalJson`], so a caller cannot hash
//! a payload that skipped canonicalization.

use std::collections::BTreeMap;
use std::fmt;

use serde::Serialize;
use serde_json::{Number, Value};

use crate::crypto::sha256_hex;

/// Largest integer a double represents exactly (2^53 - 1)
const MAX_SAFE_INTEGER: f64 = 9_007_199_254_740_991.0;

/// A JSON value in canonical form
///
/// Objects are held in a `BTreeMap`, so key order is fixed by construction.
#[derive(Debug, Clone, PartialEq)]
pub enum CanonicalValue {
    Null,
    Bool(bool),
    Number(Number),
    String(String),
    Array(Vec<CanonicalValue>),
    Object(BTreeMap<String, CanonicalValue>),
}

impl CanonicalValue {
    /// Canonicalize any JSON value
    ///
    /// Structural recursion over the value; never fails.
    pub fn from_value(value: &Value) -> Self {
        match value {
            Value::Null => CanonicalValue::Null,
            Value::Bool(b) => CanonicalValue::Bool(*b),
            Value::Number(n) => CanonicalValue::Number(normalize_number(n)),
            Value::String(s) => CanonicalValue::String(s.clone()),
            Value::Array(items) => {
                CanonicalValue::Array(items.iter().map(CanonicalValue::from_value).collect())
            }
            Value::Object(map) => CanonicalValue::Object(
                map.iter()
                    .map(|(k, v)| (k.clone(), CanonicalValue::from_value(v)))
                    .collect(),
            ),
        }
    }

    /// Canonicalize any serializable payload
    pub fn from_serialize<T: Serialize + ?Sized>(payload: &T) -> serde_json::Result<Self> {
        serde_json::to_value(payload).map(|v| Self::from_value(&v))
    }

    /// Render the compact canonical serialization
    pub fn to_json(&self) -> CanonicalJson {
        CanonicalJson(self.to_string())
    }
}

impl From<&Value> for CanonicalValue {
    fn from(value: &Value) -> Self {
        CanonicalValue::from_value(value)
    }
}

impl From<CanonicalValue> for Value {
    fn from(value: CanonicalValue) -> Self {
        match value {
            CanonicalValue::Null => Value::Null,
            CanonicalValue::Bool(b) => Value::Bool(b),
            CanonicalValue::Number(n) => Value::Number(n),
            CanonicalValue::String(s) => Value::String(s),
            CanonicalValue::Array(items) => {
                Value::Array(items.into_iter().map(Value::from).collect())
            }
            CanonicalValue::Object(map) => {
                Value::Object(map.into_iter().map(|(k, v)| (k, Value::from(v))).collect())
            }
        }
    }
}

impl fmt::Display for CanonicalValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CanonicalValue::Null => f.write_str("null"),
            CanonicalValue::Bool(b) => write!(f, "{b}"),
            CanonicalValue::Number(n) => write_number(f, n),
            CanonicalValue::String(s) => write_string(f, s),
            CanonicalValue::Array(items) => {
                f.write_str("[")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        f.write_str(",")?;
                    }
                    write!(f, "{item}")?;
                }
                f.write_str("]")
            }
            CanonicalValue::Object(map) => {
                f.write_str("{")?;
                for (i, (key, value)) in map.iter().enumerate() {
                    if i > 0 {
                        f.write_str(",")?;
                    }
                    write_string(f, key)?;
                    write!(f, ":{value}")?;
                }
                f.write_str("}")
            }
        }
    }
}

fn write_string(f: &mut fmt::Formatter<'_>, s: &str) -> fmt::Result {
    let quoted = serde_json::to_string(s).map_err(|_| fmt::Error)?;
    f.write_str(&quoted)
}

fn write_number(f: &mut fmt::Formatter<'_>, n: &Number) -> fmt::Result {
    if let Some(i) = n.as_i64() {
        return write!(f, "{i}");
    }
    if let Some(u) = n.as_u64() {
        return write!(f, "{u}");
    }
    match n.as_f64() {
        Some(x) => f.write_str(&js_number(x)),
        None => write!(f, "{n}"),
    }
}

/// Format a finite double the way JavaScript's `Number#toString` does
fn js_number(x: f64) -> String {
    if x == 0.0 {
        return "0".to_string();
    }

    // `{:e}` yields the shortest round-trip digits, e.g. `1.325e2`.
    let sci = format!("{:e}", x.abs());
    let (mantissa, exp) = sci.split_once('e').unwrap_or((sci.as_str(), "0"));
    let digits: String = mantissa.chars().filter(char::is_ascii_digit).collect();
    let k = digits.len() as i32;
    let n = exp.parse::<i32>().unwrap_or(0) + 1;

    let body = if k <= n && n <= 21 {
        format!("{digits}{}", "0".repeat((n - k) as usize))
    } else if 0 < n && n <= 21 {
        let (int, frac) = digits.split_at(n as usize);
        format!("{int}.{frac}")
    } else if -6 < n && n <= 0 {
        format!("0.{}{digits}", "0".repeat((-n) as usize))
    } else {
        let e = n - 1;
        let sign = if e < 0 { '-' } else { '+' };
        let (lead, rest) = digits.split_at(1);
        if rest.is_empty() {
            format!("{lead}e{sign}{}", e.abs())
        } else {
            format!("{lead}.{rest}e{sign}{}", e.abs())
        }
    };

    if x.is_sign_negative() {
        format!("-{body}")
    } else {
        body
    }
}

/// Compact canonical serialization of a [`CanonicalValue`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CanonicalJson(String);

impl CanonicalJson {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn as_bytes(&self) -> &[u8] {
        self.0.as_bytes()
    }

    pub fn into_string(self) -> String {
        self.0
    }

    /// SHA-256 over the UTF-8 bytes, lowercase hex
    pub fn sha256_hex(&self) -> String {
        sha256_hex(self.as_bytes())
    }
}

impl fmt::Display for CanonicalJson {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Canonicalize, serialize and digest a JSON value in one step
pub fn canonical_digest(value: &Value) -> String {
    CanonicalValue::from_value(value).to_json().sha256_hex()
}

fn normalize_number(n: &Number) -> Number {
    if n.is_f64() {
        if let Some(f) = n.as_f64() {
            if f.fract() == 0.0 && f.abs() <= MAX_SAFE_INTEGER {
                return Number::from(f as i64);
            }
        }
    }
    n.clone()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn canonical(value: &Value) -> String {
        CanonicalValue::from_value(value).to_json().into_string()
    }

    #[test]
    fn test_primitives() {
        assert_eq!(canonical(&json!(null)), "null");
        assert_eq!(canonical(&json!(true)), "true");
        assert_eq!(canonical(&json!(123)), "123");
        assert_eq!(canonical(&json!(-7)), "-7");
        assert_eq!(canonical(&json!("squat")), "\"squat\"");
    }

    #[test]
    fn test_strings_are_escaped() {
        assert_eq!(canonical(&json!("a\"b\\c\n")), r#""a\"b\\c\n""#);
        assert_eq!(canonical(&json!("Überkopf")), "\"Überkopf\"");
    }

    #[test]
    fn test_integral_floats_have_no_fraction() {
        assert_eq!(canonical(&json!(135.0)), "135");
        assert_eq!(canonical(&json!(-0.0)), "0");
        assert_eq!(canonical(&json!(132.5)), "132.5");
        assert_eq!(canonical(&json!(0.1)), "0.1");
    }

    #[test]
    fn test_number_boundaries_follow_javascript() {
        assert_eq!(canonical(&json!(0.000001)), "0.000001");
        assert_eq!(canonical(&json!(0.0000001)), "1e-7");
        assert_eq!(canonical(&json!(1.5e-7)), "1.5e-7");
        assert_eq!(canonical(&json!(1e16)), "10000000000000000");
        assert_eq!(canonical(&json!(1e21)), "1e+21");
        assert_eq!(canonical(&json!(1.25e22)), "1.25e+22");
        assert_eq!(canonical(&json!(-47.25)), "-47.25");
        assert_eq!(canonical(&json!(123456.789)), "123456.789");
        assert_eq!(canonical(&json!(u64::MAX)), "18446744073709551615");
    }

    #[test]
    fn test_empty_containers() {
        assert_eq!(canonical(&json!({})), "{}");
        assert_eq!(canonical(&json!([])), "[]");
        assert_eq!(canonical(&json!({"a": {}, "b": []})), r#"{"a":{},"b":[]}"#);
    }

    #[test]
    fn test_object_sorted_keys() {
        let val = json!({ "reps": 5, "lbs": 135 });
        assert_eq!(canonical(&val), r#"{"lbs":135,"reps":5}"#);
    }

    #[test]
    fn test_nested_objects_inside_arrays() {
        let val = json!({ "z": [ { "y": "yes", "b": 1 }, null ], "a": { "x": 10 } });
        assert_eq!(
            canonical(&val),
            r#"{"a":{"x":10},"z":[{"b":1,"y":"yes"},null]}"#
        );
    }

    #[test]
    fn test_array_order_preserved() {
        let val = json!([3, "a", false, { "k": 1 }, 1]);
        assert_eq!(canonical(&val), r#"[3,"a",false,{"k":1},1]"#);

        match CanonicalValue::from_value(&val) {
            CanonicalValue::Array(items) => assert_eq!(items.len(), 5),
            other => panic!("expected array, got {other:?}"),
        }
    }

    #[test]
    fn test_idempotent() {
        let val = json!({
            "exercises": [{ "sets": [{ "reps": 5, "lbs": 135.0 }], "name": "Squat" }],
            "date": "2024-01-01"
        });
        let once = CanonicalValue::from_value(&val);
        let twice = CanonicalValue::from_value(&Value::from(once.clone()));
        assert_eq!(once, twice);
        assert_eq!(once.to_json(), twice.to_json());
    }

    #[test]
    fn test_key_permutations_are_equivalent() {
        let orders = [
            r#"{"a":1,"b":{"x":[1,2],"y":null},"c":"s"}"#,
            r#"{"c":"s","b":{"y":null,"x":[1,2]},"a":1}"#,
            r#"{"b":{"x":[1,2],"y":null},"c":"s","a":1}"#,
        ];
        let digests: Vec<String> = orders
            .iter()
            .map(|s| canonical_digest(&serde_json::from_str(s).unwrap()))
            .collect();
        assert!(digests.windows(2).all(|w| w[0] == w[1]));
    }

    #[test]
    fn test_digest_known_value() {
        let submission = json!({
            "date": "2024-01-01",
            "exercises": [{ "name": "Squat", "sets": [{ "reps": 5, "lbs": 135 }] }]
        });
        assert_eq!(
            canonical(&submission),
            r#"{"date":"2024-01-01","exercises":[{"name":"Squat","sets":[{"lbs":135,"reps":5}]}]}"#
        );
        assert_eq!(
            canonical_digest(&submission),
            "74b116084b5c11ff4d25657b6fc5c72adb6a5d75675566ee550fa80fb1b2130f"
        );
    }

    #[test]
    fn test_inner_key_order_does_not_change_digest() {
        let a = json!({
            "date": "2024-01-01",
            "exercises": [{ "name": "Squat", "sets": [{ "reps": 5, "lbs": 135 }] }]
        });
        let b = json!({
            "date": "2024-01-01",
            "exercises": [{ "name": "Squat", "sets": [{ "lbs": 135, "reps": 5 }] }]
        });
        assert_eq!(canonical_digest(&a), canonical_digest(&b));
    }

    #[test]
    fn test_exercise_order_changes_digest() {
        let squat = json!({ "name": "Squat", "sets": [{ "lbs": 135, "reps": 5 }] });
        let bench = json!({ "name": "Bench Press", "sets": [{ "lbs": 95, "reps": 8 }] });
        let original = json!({ "date": "2024-01-01", "exercises": [squat.clone(), bench.clone()] });
        let swapped = json!({ "date": "2024-01-01", "exercises": [bench, squat] });
        assert_ne!(canonical_digest(&original), canonical_digest(&swapped));
    }

    #[test]
    fn test_digest_deterministic() {
        let json = CanonicalValue::from_value(&json!({ "lbs": null, "reps": null })).to_json();
        assert_eq!(json.sha256_hex(), json.sha256_hex());
        assert_eq!(json.sha256_hex().len(), 64);
    }

    #[test]
    fn test_from_serialize() {
        #[derive(serde::Serialize)]
        struct Set {
            reps: Option<u32>,
            lbs: Option<f64>,
        }
        let value = CanonicalValue::from_serialize(&Set { reps: Some(8), lbs: Some(95.0) }).unwrap();
        assert_eq!(value.to_json().as_str(), r#"{"lbs":95,"reps":8}"#);
    }
}
