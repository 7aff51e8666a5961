//! Custom serde helpers for backend wire formats.

/// Deserializes a `Decimal` from either a JSON string or a JSON number.
///
/// Django's `DecimalField` serializes as a string (`"12.50"`) unless
/// `COERCE_DECIMAL_TO_STRING` is off, in which case it sends a number.
pub mod decimal_lenient {
    use rust_decimal::Decimal;
    use serde::{Deserialize, Deserializer};
    use std::str::FromStr;

    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Str(String),
        Num(serde_json::Number),
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Decimal, D::Error>
    where
        D: Deserializer<'de>,
    {
        let text = match Raw::deserialize(deserializer)? {
            Raw::Str(s) => s,
            Raw::Num(n) => n.to_string(),
        };
        let text = text.trim();
        Decimal::from_str(text)
            .or_else(|_| Decimal::from_scientific(text))
            .map_err(|_| serde::de::Error::custom(format!("Invalid decimal: {}", text)))
    }
}

/// Serializes a `Decimal` as a JSON float (the order payload's `product_cost`).
pub mod decimal_as_float {
    use rust_decimal::prelude::ToPrimitive;
    use rust_decimal::Decimal;
    use serde::Serializer;

    pub fn serialize<S>(value: &Decimal, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let float = value.to_f64().ok_or_else(|| {
            serde::ser::Error::custom(format!("Decimal not representable as f64: {}", value))
        })?;
        serializer.serialize_f64(float)
    }
}

#[cfg(test)]
mod tests {
    use rust_decimal::Decimal;
    use serde::{Deserialize, Serialize};

    #[derive(Deserialize)]
    struct Priced {
        #[serde(with = "super::decimal_lenient")]
        cost: Decimal,
    }

    #[derive(Serialize)]
    struct Payload {
        #[serde(serialize_with = "super::decimal_as_float::serialize")]
        cost: Decimal,
    }

    #[test]
    fn test_lenient_accepts_string_and_number() {
        let from_str: Priced = serde_json::from_str(r#"{"cost": "12.50"}"#).unwrap();
        assert_eq!(from_str.cost, Decimal::new(1250, 2));

        let from_num: Priced = serde_json::from_str(r#"{"cost": 12.5}"#).unwrap();
        assert_eq!(from_num.cost, Decimal::new(125, 1));

        let from_int: Priced = serde_json::from_str(r#"{"cost": 3}"#).unwrap();
        assert_eq!(from_int.cost, Decimal::new(3, 0));
    }

    #[test]
    fn test_lenient_rejects_garbage() {
        assert!(serde_json::from_str::<Priced>(r#"{"cost": "twelve"}"#).is_err());
        assert!(serde_json::from_str::<Priced>(r#"{"cost": null}"#).is_err());
    }

    #[test]
    fn test_float_serialization() {
        let json = serde_json::to_string(&Payload {
            cost: Decimal::new(1250, 2),
        })
        .unwrap();
        assert_eq!(json, r#"{"cost":12.5}"#);
    }
}
