//! JSON value equality used by scalar uniqueness and identity rules.
//!
//! Numbers compare by numeric value, so `1` and `1.0` are equal (scan
//! reports serialize them identically). Object key order is significant
//! only under [`ScalarEquality::OrderSensitive`].

use serde_json::{Number, Value};

use crate::config::ScalarEquality;

pub fn json_equal(a: &Value, b: &Value, mode: ScalarEquality) -> bool {
    match (a, b) {
        (Value::Number(x), Value::Number(y)) => numbers_equal(x, y),
        (Value::Array(xs), Value::Array(ys)) => {
            xs.len() == ys.len() && xs.iter().zip(ys).all(|(x, y)| json_equal(x, y, mode))
        }
        (Value::Object(xs), Value::Object(ys)) => {
            if xs.len() != ys.len() {
                return false;
            }
            match mode {
                ScalarEquality::OrderSensitive => xs
                    .iter()
                    .zip(ys)
                    .all(|((kx, vx), (ky, vy))| kx == ky && json_equal(vx, vy, mode)),
                ScalarEquality::Structural => xs
                    .iter()
                    .all(|(k, vx)| ys.get(k).is_some_and(|vy| json_equal(vx, vy, mode))),
            }
        }
        _ => a == b,
    }
}

fn numbers_equal(x: &Number, y: &Number) -> bool {
    // Exact for integers; floats fall back to f64 like the report producer
    if let (Some(a), Some(b)) = (x.as_i64(), y.as_i64()) {
        return a == b;
    }
    if let (Some(a), Some(b)) = (x.as_u64(), y.as_u64()) {
        return a == b;
    }
    match (x.as_f64(), y.as_f64()) {
        (Some(a), Some(b)) => a == b,
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_integer_and_float_forms_are_equal() {
        let int: Value = serde_json::from_str("1").unwrap();
        let float: Value = serde_json::from_str("1.0").unwrap();
        assert_ne!(int, float);
        assert!(json_equal(&int, &float, ScalarEquality::OrderSensitive));
        assert!(json_equal(&int, &float, ScalarEquality::Structural));
    }

    #[test]
    fn test_numbers_nested_in_containers() {
        let a: Value = serde_json::from_str(r#"{"high": 2, "list": [1, 3]}"#).unwrap();
        let b: Value = serde_json::from_str(r#"{"high": 2.0, "list": [1.0, 3]}"#).unwrap();
        assert!(json_equal(&a, &b, ScalarEquality::OrderSensitive));
    }

    #[test]
    fn test_key_order_depends_on_mode() {
        let a: Value = serde_json::from_str(r#"{"a": 1, "b": 2}"#).unwrap();
        let b: Value = serde_json::from_str(r#"{"b": 2, "a": 1}"#).unwrap();
        assert!(!json_equal(&a, &b, ScalarEquality::OrderSensitive));
        assert!(json_equal(&a, &b, ScalarEquality::Structural));
    }

    #[test]
    fn test_different_values_stay_different() {
        assert!(!json_equal(&json!(1), &json!(1.5), ScalarEquality::Structural));
        assert!(!json_equal(&json!("1"), &json!(1), ScalarEquality::Structural));
        assert!(!json_equal(&json!([1]), &json!([1, 1]), ScalarEquality::Structural));
    }
}
