//! # JSON Row Input
//!
//! Converts a JSON object into a [`Row`] for the `encode` and `explain`
//! commands. Keys keep their document order.
//!
//! | JSON | Value |
//! |------|-------|
//! | `null` | Null |
//! | `true` / `false` | Boolean |
//! | integer | Int32 or Int64 by magnitude; text above `i64::MAX` |
//! | fraction / exponent | Double |
//! | string | String |
//! | array / object | String holding the compact JSON text |

use eyre::{bail, Result, WrapErr};
use serde_json::Value as Json;

use crate::records::Row;
use crate::types::Value;

/// Parses `text` as a JSON object and builds the row it describes.
pub fn parse_row(text: &str) -> Result<Row<'static>> {
    let json: Json = serde_json::from_str(text.trim()).wrap_err("input is not valid JSON")?;
    json_to_row(&json)
}

pub fn json_to_row(json: &Json) -> Result<Row<'static>> {
    let Json::Object(map) = json else {
        bail!("expected a JSON object of column names to values");
    };

    let mut row = Row::with_capacity(map.len());
    for (name, value) in map {
        row.push(name.clone(), json_to_value(value));
    }
    Ok(row)
}

fn json_to_value(json: &Json) -> Value<'static> {
    match json {
        Json::Null => Value::Null,
        Json::Bool(b) => Value::Boolean(*b),
        Json::Number(n) => {
            if let Some(i) = n.as_i64() {
                Value::integer(i)
            } else if let Some(u) = n.as_u64() {
                Value::from(u)
            } else {
                n.as_f64()
                    .map(Value::Double)
                    .unwrap_or_else(|| Value::from_display(n))
            }
        }
        Json::String(s) => Value::String(s.clone().into()),
        Json::Array(_) | Json::Object(_) => Value::from_display(json),
    }
}
