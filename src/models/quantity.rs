use serde::de::{self, Deserializer, Visitor};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A measurement that is either numeric or free text (`10465`, `"unknown"`).
/// Stored as JSONB so integers, floats and strings read back unchanged.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Quantity {
    Number(serde_json::Number),
    Text(String),
}

impl Quantity {
    pub fn to_json(&self) -> serde_json::Value {
        match self {
            Quantity::Number(n) => serde_json::Value::Number(n.clone()),
            Quantity::Text(s) => serde_json::Value::String(s.clone()),
        }
    }
}

impl From<i64> for Quantity {
    fn from(n: i64) -> Self {
        Quantity::Number(n.into())
    }
}

impl From<&str> for Quantity {
    fn from(s: &str) -> Self {
        Quantity::Text(s.to_string())
    }
}

struct QuantityVisitor;

impl<'de> Visitor<'de> for QuantityVisitor {
    type Value = Quantity;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("a number or a string")
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> Result<Quantity, E> {
        Ok(Quantity::Number(v.into()))
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> Result<Quantity, E> {
        Ok(Quantity::Number(v.into()))
    }

    fn visit_f64<E: de::Error>(self, v: f64) -> Result<Quantity, E> {
        serde_json::Number::from_f64(v)
            .map(Quantity::Number)
            .ok_or_else(|| E::custom("quantity must be a finite number"))
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<Quantity, E> {
        Ok(Quantity::Text(v.to_string()))
    }

    fn visit_string<E: de::Error>(self, v: String) -> Result<Quantity, E> {
        Ok(Quantity::Text(v))
    }
}

impl<'de> Deserialize<'de> for Quantity {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_any(QuantityVisitor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn integers_stay_integers() {
        let q: Quantity = serde_json::from_value(json!(10465)).unwrap();
        assert_eq!(q, Quantity::from(10465));
        assert_eq!(serde_json::to_value(&q).unwrap(), json!(10465));
    }

    #[test]
    fn floats_and_text_are_accepted() {
        let q: Quantity = serde_json::from_value(json!(1.72)).unwrap();
        assert_eq!(q.to_json(), json!(1.72));
        let q: Quantity = serde_json::from_value(json!("unknown")).unwrap();
        assert_eq!(q, Quantity::from("unknown"));
        assert_eq!(q.to_json(), json!("unknown"));
    }

    #[test]
    fn other_json_types_are_rejected() {
        for bad in [json!(true), json!(null), json!([1]), json!({"kg": 1})] {
            let err = serde_json::from_value::<Quantity>(bad).unwrap_err();
            assert!(err.to_string().contains("a number or a string"), "{err}");
        }
    }
}
