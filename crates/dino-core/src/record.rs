use crate::error::RecordError;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawRecord {
    pub name: String,
    pub category: String,
    pub period: String,
    pub diet: String,
    pub age: i64,
}

impl RawRecord {
    pub fn new(
        name: impl Into<String>,
        category: impl Into<String>,
        period: impl Into<String>,
        diet: impl Into<String>,
        age: i64,
    ) -> Self {
        Self {
            name: name.into(),
            category: category.into(),
            period: period.into(),
            diet: diet.into(),
            age,
        }
    }

    /// Decodes one string-keyed record. `index` is its position in the
    /// enclosing collection and is only used for error reporting.
    ///
    /// Missing fields and wrongly-typed values fail fast; nothing is
    /// defaulted. Unknown extra keys are ignored.
    pub fn from_value(value: &Value, index: usize) -> Result<Self, RecordError> {
        let fields = value.as_object().ok_or(RecordError::NotAnObject {
            index,
            found: json_kind(value),
        })?;

        Ok(Self {
            name: text_field(fields, index, "name")?,
            category: text_field(fields, index, "category")?,
            period: text_field(fields, index, "period")?,
            diet: text_field(fields, index, "diet")?,
            age: integer_field(fields, index, "age")?,
        })
    }
}

/// Decodes a loose record collection. `null` is an absent collection and
/// yields `None`; any other non-array value is rejected.
pub fn decode_records(value: &Value) -> Result<Option<Vec<RawRecord>>, RecordError> {
    match value {
        Value::Null => Ok(None),
        Value::Array(items) => items
            .iter()
            .enumerate()
            .map(|(index, item)| RawRecord::from_value(item, index))
            .collect::<Result<Vec<_>, _>>()
            .map(Some),
        other => Err(RecordError::NotACollection {
            found: json_kind(other),
        }),
    }
}

/// The two-record herd used when no input is supplied.
pub fn sample_records() -> Vec<RawRecord> {
    vec![
        RawRecord::new("DinoA", "herbivore", "Cretaceous", "plants", 100),
        RawRecord::new("DinoB", "carnivore", "Jurassic", "meat", 80),
    ]
}

fn field<'a>(
    fields: &'a Map<String, Value>,
    index: usize,
    field: &'static str,
) -> Result<&'a Value, RecordError> {
    fields
        .get(field)
        .ok_or(RecordError::MissingField { index, field })
}

fn text_field(
    fields: &Map<String, Value>,
    index: usize,
    name: &'static str,
) -> Result<String, RecordError> {
    let value = field(fields, index, name)?;
    value
        .as_str()
        .map(str::to_owned)
        .ok_or(RecordError::WrongType {
            index,
            field: name,
            expected: "a string",
            found: json_kind(value),
        })
}

fn integer_field(
    fields: &Map<String, Value>,
    index: usize,
    name: &'static str,
) -> Result<i64, RecordError> {
    let value = field(fields, index, name)?;
    value.as_i64().ok_or(RecordError::WrongType {
        index,
        field: name,
        expected: "an integer",
        found: json_kind(value),
    })
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(n) if n.is_i64() => "an integer",
        Value::Number(n) if n.is_u64() => "an out-of-range integer",
        Value::Number(_) => "a float",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
