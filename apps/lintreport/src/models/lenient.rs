//! Forgiving field deserializers for linter-produced JSON.

use super::{Diagnostic, RuleRef};
use serde::{Deserialize, Deserializer};
use serde_json::Value as Json;

/// Strings pass through; any other JSON value becomes `""`.
pub fn string_or_empty<'de, D>(de: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Json::deserialize(de)? {
        Json::String(s) => s,
        _ => String::new(),
    })
}

/// Scalars are kept as their text form; `null` and containers are absent.
pub fn opt_string<'de, D>(de: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Json::deserialize(de)? {
        Json::String(s) => Some(s),
        Json::Number(n) => Some(n.to_string()),
        Json::Bool(b) => Some(b.to_string()),
        _ => None,
    })
}

/// Non-negative integers, whole floats and numeric strings are kept;
/// everything else (negatives, `null`, text, containers) becomes 0.
pub fn u64_or_zero<'de, D>(de: D) -> Result<u64, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Json::deserialize(de)? {
        Json::Number(n) => n
            .as_u64()
            .or_else(|| {
                n.as_f64()
                    .filter(|f| f.is_finite() && *f >= 0.0 && f.fract() == 0.0)
                    .map(|f| f as u64)
            })
            .unwrap_or(0),
        Json::String(s) => s.trim().parse().unwrap_or(0),
        _ => 0,
    })
}

/// Truthiness as a linter written in JavaScript would see it.
pub fn truthy<'de, D>(de: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Json::deserialize(de)? {
        Json::Null => false,
        Json::Bool(b) => b,
        Json::Number(n) => n.as_f64().is_some_and(|f| f != 0.0 && !f.is_nan()),
        Json::String(s) => !s.is_empty(),
        Json::Array(_) | Json::Object(_) => true,
    })
}

/// A non-array becomes an empty list; entries that are not diagnostic
/// objects are dropped so their siblings still render.
pub fn diagnostics<'de, D>(de: D) -> Result<Vec<Diagnostic>, D::Error>
where
    D: Deserializer<'de>,
{
    let items = match Json::deserialize(de)? {
        Json::Array(items) => items,
        _ => return Ok(Vec::new()),
    };
    Ok(items
        .into_iter()
        .enumerate()
        .filter_map(|(i, item)| match serde_json::from_value::<Diagnostic>(item) {
            Ok(d) => Some(d),
            Err(e) => {
                tracing::warn!(index = i, error = %e, "dropping malformed diagnostic");
                None
            }
        })
        .collect())
}

/// Objects become a `RuleRef`; anything else counts as no rule.
pub fn opt_rule<'de, D>(de: D) -> Result<Option<RuleRef>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Json::deserialize(de)? {
        v @ Json::Object(_) => serde_json::from_value(v).ok(),
        _ => None,
    })
}
