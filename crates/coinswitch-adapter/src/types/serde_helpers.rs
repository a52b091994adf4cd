/*
[INPUT]:  JSON numbers (occasionally strings) for amounts and rates
[OUTPUT]: Decimal values decoded/encoded without going through f64 text loss
[POS]:    Data layer - shared serde adapters for decimal fields
[UPDATE]: When the API changes how amounts are encoded
*/

use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::{Number, Value};
use std::str::FromStr;

fn decimal_from_value<E: serde::de::Error>(value: &Value) -> Result<Option<Decimal>, E> {
    let raw = match value {
        Value::Null => return Ok(None),
        Value::Number(number) => number.to_string(),
        Value::String(text) if text.trim().is_empty() => return Ok(None),
        Value::String(text) => text.trim().to_string(),
        other => return Err(E::custom(format!("invalid decimal value: {other}"))),
    };

    Decimal::from_str(&raw)
        .or_else(|_| Decimal::from_scientific(&raw))
        .map(Some)
        .map_err(E::custom)
}

pub fn deserialize_decimal<'de, D>(deserializer: D) -> Result<Decimal, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    decimal_from_value::<D::Error>(&value)?
        .ok_or_else(|| serde::de::Error::custom("missing decimal value"))
}

pub fn deserialize_decimal_option<'de, D>(deserializer: D) -> Result<Option<Decimal>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    decimal_from_value::<D::Error>(&value)
}

pub fn serialize_decimal<S>(value: &Decimal, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    let number: Number =
        serde_json::from_str(&value.normalize().to_string()).map_err(serde::ser::Error::custom)?;
    number.serialize(serializer)
}

pub fn serialize_decimal_option<S>(
    value: &Option<Decimal>,
    serializer: S,
) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    match value {
        Some(value) => serialize_decimal(value, serializer),
        None => serializer.serialize_none(),
    }
}
