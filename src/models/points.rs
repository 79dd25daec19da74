// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Lenient deserialization for point values.
//!
//! Frontends send points from form inputs, so a point value may arrive as a
//! JSON integer, an integral float (`100.0`) or a numeric string (`"100"`).

use serde::de::{self, Deserializer};
use serde::Deserialize;

#[derive(Deserialize)]
#[serde(untagged)]
enum RawPoints {
    Int(i64),
    Float(f64),
    Text(String),
}

/// Deserialize a point value, coercing integral floats and numeric strings.
pub fn deserialize<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    match RawPoints::deserialize(deserializer)? {
        RawPoints::Int(n) => Ok(n),
        RawPoints::Float(f) => {
            // i64::MAX is not representable as f64; 2^63 is the exclusive bound
            if f.fract() == 0.0 && f >= i64::MIN as f64 && f < 9_223_372_036_854_775_808.0 {
                Ok(f as i64)
            } else {
                Err(de::Error::custom(format!(
                    "points must be a whole number, got {}",
                    f
                )))
            }
        }
        RawPoints::Text(s) => s.trim().parse::<i64>().map_err(|_| {
            de::Error::custom(format!("points must be an integer, got {:?}", s))
        }),
    }
}

#[cfg(test)]
mod tests {
    use serde::Deserialize;
    use serde_json::json;

    #[derive(Deserialize)]
    struct Wrapper {
        #[serde(deserialize_with = "super::deserialize")]
        points: i64,
    }

    fn parse(value: serde_json::Value) -> Result<i64, serde_json::Error> {
        serde_json::from_value::<Wrapper>(json!({ "points": value })).map(|w| w.points)
    }

    #[test]
    fn test_accepts_integers() {
        assert_eq!(parse(json!(100)).unwrap(), 100);
        assert_eq!(parse(json!(-5)).unwrap(), -5);
        assert_eq!(parse(json!(i64::MAX)).unwrap(), i64::MAX);
    }

    #[test]
    fn test_coerces_integral_float_and_string() {
        assert_eq!(parse(json!(425.0)).unwrap(), 425);
        assert_eq!(parse(json!("1150")).unwrap(), 1150);
        assert_eq!(parse(json!(" 20 ")).unwrap(), 20);
    }

    #[test]
    fn test_rejects_non_integers() {
        assert!(parse(json!(1.5)).is_err());
        assert!(parse(json!("ten")).is_err());
        assert!(parse(json!(true)).is_err());
        assert!(parse(json!(null)).is_err());
        assert!(parse(json!([1])).is_err());
        assert!(parse(json!(9_223_372_036_854_775_808u64)).is_err());
        assert!(parse(json!(1e19)).is_err());
    }
}
