//! Deep equality of JSON values and listing of their differences.
//!
//! Numbers compare by exact numeric value, so `10` and `10.0` are equal but
//! `9007199254740993` and `9007199254740992.0` are not. Booleans count as `1`
//! and `0`. Arrays compare element by element in order; objects compare by
//! key set and value.

use serde_json::{Number, Value};
use std::collections::BTreeSet;

/// Rendering used for a key present on one side only
pub const MISSING: &str = "<missing>";

/// A single difference between two values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldDiff {
    /// JSON pointer to the differing value (`""` is the document root)
    pub path: String,
    pub current: String,
    pub expected: String,
}

impl std::fmt::Display for FieldDiff {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let path = if self.path.is_empty() { "/" } else { self.path.as_str() };
        write!(f, "{}: current={}, expected={}", path, self.current, self.expected)
    }
}

/// Deep structural equality.
pub fn values_equal(a: &Value, b: &Value) -> bool {
    match (a, b) {
        (Value::Null, Value::Null) => true,
        (Value::String(x), Value::String(y)) => x == y,
        (Value::Array(x), Value::Array(y)) => {
            x.len() == y.len() && x.iter().zip(y).all(|(u, v)| values_equal(u, v))
        }
        (Value::Object(x), Value::Object(y)) => {
            x.len() == y.len()
                && x.iter()
                    .all(|(key, u)| y.get(key).is_some_and(|v| values_equal(u, v)))
        }
        _ => match (numeric(a), numeric(b)) {
            (Some(x), Some(y)) => x == y,
            _ => false,
        },
    }
}

/// Exact value of a number or boolean
#[derive(Debug, PartialEq)]
enum Numeric {
    /// Canonical decimal digits of a whole value, any magnitude
    Integral(String),
    Fractional(f64),
}

/// Booleans count as 0 and 1; integral floats compare exactly with integers.
fn numeric(value: &Value) -> Option<Numeric> {
    match value {
        Value::Bool(b) => Some(Numeric::Integral(if *b { "1" } else { "0" }.to_string())),
        Value::Number(n) => Some(number_value(n)),
        _ => None,
    }
}

fn number_value(n: &Number) -> Numeric {
    // Raw literal text, kept intact by `arbitrary_precision`
    let text = n.to_string();
    if !text.contains(|c: char| matches!(c, '.' | 'e' | 'E')) {
        return Numeric::Integral(canonical_integer(&text));
    }
    match text.parse::<f64>() {
        Ok(x) if x.is_finite() && x.fract() == 0.0 => {
            Numeric::Integral(canonical_integer(&format!("{:.0}", x)))
        }
        Ok(x) => Numeric::Fractional(x),
        Err(_) => Numeric::Fractional(f64::NAN),
    }
}

fn canonical_integer(text: &str) -> String {
    let (negative, digits) = match text.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, text),
    };
    let digits = digits.trim_start_matches('0');
    match (digits.is_empty(), negative) {
        (true, _) => "0".to_string(),
        (false, true) => format!("-{}", digits),
        (false, false) => digits.to_string(),
    }
}

/// List every difference between `current` and `expected`.
///
/// The result is empty exactly when [`values_equal`] holds.
pub fn diff_values(current: &Value, expected: &Value) -> Vec<FieldDiff> {
    let mut diffs = Vec::new();
    collect_diffs("", current, expected, &mut diffs);
    diffs
}

fn collect_diffs(path: &str, current: &Value, expected: &Value, diffs: &mut Vec<FieldDiff>) {
    match (current, expected) {
        (Value::Object(cur), Value::Object(exp)) => {
            let keys: BTreeSet<&String> = cur.keys().chain(exp.keys()).collect();
            for key in keys {
                let child = format!("{}/{}", path, escape_token(key));
                match (cur.get(key), exp.get(key)) {
                    (Some(c), Some(e)) => collect_diffs(&child, c, e, diffs),
                    (Some(c), None) => diffs.push(FieldDiff {
                        path: child,
                        current: c.to_string(),
                        expected: MISSING.to_string(),
                    }),
                    (None, Some(e)) => diffs.push(FieldDiff {
                        path: child,
                        current: MISSING.to_string(),
                        expected: e.to_string(),
                    }),
                    (None, None) => {}
                }
            }
        }
        (Value::Array(cur), Value::Array(exp)) => {
            if cur.len() != exp.len() {
                diffs.push(FieldDiff {
                    path: path.to_string(),
                    current: format!("{} entries", cur.len()),
                    expected: format!("{} entries", exp.len()),
                });
            }
            for (index, (c, e)) in cur.iter().zip(exp).enumerate() {
                collect_diffs(&format!("{}/{}", path, index), c, e, diffs);
            }
        }
        _ => {
            if !values_equal(current, expected) {
                diffs.push(FieldDiff {
                    path: path.to_string(),
                    current: current.to_string(),
                    expected: expected.to_string(),
                });
            }
        }
    }
}

/// RFC 6901 escaping of a single pointer token
fn escape_token(key: &str) -> String {
    key.replace('~', "~0").replace('/', "~1")
}
