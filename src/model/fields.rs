//! Typed field extraction from loosely-typed JSON payloads.
//!
//! Creation payloads accept `serde_json::Value` objects (configuration files,
//! shipment plans). [`Fields`] checks each field against its semantic type and
//! reports a [`SupplyError::TypeMismatch`] naming the field on the first
//! violation.

use crate::error::{SupplyError, SupplyResult};
use chrono::TimeDelta;
use serde_json::{Map, Value};

/// Read-only view over the fields of one JSON object.
pub struct Fields<'a> {
    map: &'a Map<String, Value>,
}

impl<'a> Fields<'a> {
    /// Wraps `value`, which must itself be a JSON object.
    pub fn new(value: &'a Value, what: &str) -> SupplyResult<Self> {
        match value {
            Value::Object(map) => Ok(Self { map }),
            other => Err(SupplyError::type_mismatch(what, "an object", kind_of(other))),
        }
    }

    fn get(&self, field: &str, expected: &'static str) -> SupplyResult<&'a Value> {
        self.map
            .get(field)
            .ok_or_else(|| SupplyError::type_mismatch(field, expected, "missing"))
    }

    pub fn text(&self, field: &str) -> SupplyResult<String> {
        match self.get(field, "text")? {
            Value::String(s) => Ok(s.clone()),
            other => Err(SupplyError::type_mismatch(field, "text", kind_of(other))),
        }
    }

    pub fn flag(&self, field: &str) -> SupplyResult<bool> {
        match self.get(field, "a boolean")? {
            Value::Bool(b) => Ok(*b),
            other => Err(SupplyError::type_mismatch(field, "a boolean", kind_of(other))),
        }
    }

    /// Integers and floats are both accepted; booleans are not numbers here.
    pub fn number(&self, field: &str) -> SupplyResult<f64> {
        match self.get(field, "a number")? {
            Value::Number(n) => n
                .as_f64()
                .ok_or_else(|| SupplyError::type_mismatch(field, "a number", n.to_string())),
            other => Err(SupplyError::type_mismatch(field, "a number", kind_of(other))),
        }
    }

    /// A duration is an object of `days`, `hours`, `minutes` and `seconds`,
    /// each optional and numeric. A bare number is rejected because it
    /// carries no unit.
    pub fn duration(&self, field: &str) -> SupplyResult<TimeDelta> {
        const EXPECTED: &str = "a duration";
        let parts = match self.get(field, EXPECTED)? {
            Value::Object(parts) => parts,
            other => return Err(SupplyError::type_mismatch(field, EXPECTED, kind_of(other))),
        };

        let mut seconds = 0.0;
        for (unit, value) in parts {
            let scale = match unit.as_str() {
                "days" => 86_400.0,
                "hours" => 3_600.0,
                "minutes" => 60.0,
                "seconds" => 1.0,
                _ => {
                    return Err(SupplyError::type_mismatch(
                        format!("{field}.{unit}"),
                        "one of days, hours, minutes, seconds",
                        "unknown unit",
                    ))
                }
            };
            let amount = match value {
                Value::Number(n) => n.as_f64().unwrap_or(f64::NAN),
                other => {
                    return Err(SupplyError::type_mismatch(
                        format!("{field}.{unit}"),
                        "a number",
                        kind_of(other),
                    ))
                }
            };
            seconds += amount * scale;
        }

        if !seconds.is_finite() {
            return Err(SupplyError::type_mismatch(field, EXPECTED, "a non-finite length"));
        }
        let whole = seconds.trunc();
        let nanos = ((seconds - whole) * 1e9).round() as i64;
        TimeDelta::try_seconds(whole as i64)
            .and_then(|d| d.checked_add(&TimeDelta::nanoseconds(nanos)))
            .ok_or_else(|| SupplyError::type_mismatch(field, EXPECTED, "an out-of-range length"))
    }
}

/// Short name of a JSON value's type, used in mismatch reports.
pub fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "text",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

/// Renders a shelf life the way a reader expects it: `5 days, 6:00:00`.
pub fn format_duration(d: TimeDelta) -> String {
    let days = d.num_days();
    let rest = d - TimeDelta::days(days);
    let secs = rest.num_seconds();
    let clock = format!("{}:{:02}:{:02}", secs / 3600, (secs % 3600) / 60, secs % 60);
    match days {
        0 => clock,
        1 | -1 => format!("{days} day, {clock}"),
        _ => format!("{days} days, {clock}"),
    }
}
