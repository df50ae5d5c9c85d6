//! Decimal amounts arriving as JSON. Numbers are read back from their
//! shortest text form, so `8.1` stays `8.1` instead of the nearest binary
//! fraction. Serialisation is left to bigdecimal (a decimal string).

use std::fmt;
use std::str::FromStr;

use bigdecimal::BigDecimal;
use serde::de::{self, Deserializer, Visitor};
use serde::Deserialize;

struct AmountVisitor;

impl<'de> Visitor<'de> for AmountVisitor {
    type Value = BigDecimal;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a decimal number or a decimal string")
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<Self::Value, E> {
        BigDecimal::from_str(v.trim()).map_err(E::custom)
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> Result<Self::Value, E> {
        Ok(BigDecimal::from(v))
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> Result<Self::Value, E> {
        Ok(BigDecimal::from(v))
    }

    fn visit_f64<E: de::Error>(self, v: f64) -> Result<Self::Value, E> {
        if !v.is_finite() {
            return Err(E::custom("amount must be finite"));
        }
        // f64's Display is the shortest text that reads back as `v`.
        BigDecimal::from_str(&v.to_string()).map_err(E::custom)
    }
}

pub fn deserialize<'de, D>(d: D) -> Result<BigDecimal, D::Error>
where
    D: Deserializer<'de>,
{
    d.deserialize_any(AmountVisitor)
}

#[derive(Deserialize)]
struct Amount(#[serde(deserialize_with = "deserialize")] BigDecimal);

/// Like [`deserialize`], with `null` read as `None`.
pub fn deserialize_option<'de, D>(d: D) -> Result<Option<BigDecimal>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Amount>::deserialize(d)?.map(|a| a.0))
}
