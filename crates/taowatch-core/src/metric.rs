//! Tolerant wrapper for loosely-typed upstream values.
//!
//! The upstream statistics API delivers the same field as a JSON number in
//! one record and a numeric string in the next, and omits or nulls fields
//! freely. `Metric` carries the raw value and defers coercion to the point
//! of use, so the gateway can relay payloads verbatim while the view model
//! applies one consistent coercion rule everywhere.

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::str::FromStr;

/// One raw upstream field value.
///
/// May hold a number, a numeric string, a non-numeric string, or null.
/// Absent fields deserialize to the null variant via `Default`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Metric(Value);

impl Default for Metric {
    fn default() -> Self {
        Self(Value::Null)
    }
}

impl Metric {
    pub fn new(value: Value) -> Self {
        Self(value)
    }

    #[inline]
    pub fn inner(&self) -> &Value {
        &self.0
    }

    #[inline]
    pub fn is_null(&self) -> bool {
        self.0.is_null()
    }

    /// Numeric coercion.
    ///
    /// JSON numbers convert exactly where possible (`i64`/`u64`) and via
    /// `f64` otherwise; strings parse as plain or scientific decimals after
    /// trimming. Null, empty strings, and non-numeric strings yield `None`.
    pub fn as_decimal(&self) -> Option<Decimal> {
        match &self.0 {
            Value::Number(n) => {
                if let Some(i) = n.as_i64() {
                    Some(Decimal::from(i))
                } else if let Some(u) = n.as_u64() {
                    Some(Decimal::from(u))
                } else {
                    n.as_f64().and_then(Decimal::from_f64_retain)
                }
            }
            Value::String(s) => {
                let trimmed = s.trim();
                if trimmed.is_empty() {
                    return None;
                }
                Decimal::from_str(trimmed)
                    .ok()
                    .or_else(|| Decimal::from_scientific(trimmed).ok())
            }
            _ => None,
        }
    }

    /// Whether this value passes the numeric coercion test.
    #[inline]
    pub fn is_numeric(&self) -> bool {
        self.as_decimal().is_some()
    }

    /// Integer projection, truncating any fractional part.
    pub fn as_i64(&self) -> Option<i64> {
        self.as_decimal().and_then(|d| d.trunc().to_i64())
    }

    /// Lexicographic-comparison form: strings verbatim, null as empty,
    /// anything else through its JSON rendering.
    pub fn text(&self) -> String {
        match &self.0 {
            Value::Null => String::new(),
            Value::String(s) => s.clone(),
            other => other.to_string(),
        }
    }
}

impl From<Value> for Metric {
    fn from(value: Value) -> Self {
        Self(value)
    }
}
