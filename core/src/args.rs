use alloc::string::{String, ToString};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::*;

/// Display arguments the host sends with every render event.
///
/// The host owns these values; the widget receives them by value on each
/// render and never keeps them past the next one.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Value")]
pub struct RenderArgs {
    pub row: Option<i64>,
    pub column: Option<i64>,
    pub flagged: bool,
}

impl RenderArgs {
    pub const fn new(row: i64, column: i64, flagged: bool) -> Self {
        Self {
            row: Some(row),
            column: Some(column),
            flagged,
        }
    }

    /// Parses a raw JSON `args` object. Individual fields are normalized,
    /// only input that isn't a JSON object is rejected.
    pub fn from_json(json: &str) -> Result<Self> {
        let value: Value =
            serde_json::from_str(json).map_err(|err| WidgetError::MalformedArgs(err.to_string()))?;
        Self::try_from(value)
    }

    pub fn position(&self) -> Option<(i64, i64)> {
        Some((self.row?, self.column?))
    }
}

impl TryFrom<Value> for RenderArgs {
    type Error = WidgetError;

    fn try_from(value: Value) -> Result<Self> {
        let Value::Object(fields) = value else {
            return Err(WidgetError::MalformedArgs(
                "args must be a JSON object".to_string(),
            ));
        };
        Ok(Self::from_fields(&fields))
    }
}

impl RenderArgs {
    /// Unknown fields are ignored. Long and short position keys may both be
    /// present, the first one holding an integer wins.
    fn from_fields(fields: &Map<String, Value>) -> Self {
        let position = |keys: [&str; 2]| {
            keys.iter()
                .find_map(|&key| fields.get(key).and_then(Value::as_i64))
        };
        Self {
            row: position(["row", "r"]),
            column: position(["column", "c"]),
            flagged: fields.get("flagged").is_some_and(is_truthy),
        }
    }
}

/// JavaScript truthiness, which is what the host's `flagged` ends up meaning.
fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(flag) => *flag,
        Value::Number(num) => num.as_f64().is_some_and(|num| num != 0.0),
        Value::String(text) => !text.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}
