use super::error::FieldError;
use log::warn;
use rusqlite::{types::ValueRef, Row};
use std::fmt::Write;

/// A typed scalar read from a database row, a plist or a JSON document
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum FieldValue {
    Null,
    Integer(i64),
    Real(f64),
    Text(String),
    Boolean(bool),
    Data(Vec<u8>),
}

impl FieldValue {
    pub(crate) fn is_null(&self) -> bool {
        self == &FieldValue::Null
    }

    /// Integer view of the value. Reals are accepted only without a fractional part
    pub(crate) fn as_integer(&self) -> Option<i64> {
        match self {
            FieldValue::Integer(value) => Some(*value),
            FieldValue::Real(value) if value.fract() == 0.0 => Some(*value as i64),
            FieldValue::Text(value) => value.trim().parse().ok(),
            FieldValue::Boolean(value) => Some(i64::from(*value)),
            _ => None,
        }
    }

    pub(crate) fn as_real(&self) -> Option<f64> {
        match self {
            FieldValue::Integer(value) => Some(*value as f64),
            FieldValue::Real(value) => Some(*value),
            FieldValue::Text(value) => value.trim().parse().ok(),
            _ => None,
        }
    }

    pub(crate) fn as_text(&self) -> Option<String> {
        match self {
            FieldValue::Null => None,
            _ => Some(self.to_display()),
        }
    }

    /// Render the value as report text. Null is empty and binary data is lowercase hex
    pub(crate) fn to_display(&self) -> String {
        match self {
            FieldValue::Null => String::new(),
            FieldValue::Integer(value) => value.to_string(),
            FieldValue::Real(value) => value.to_string(),
            FieldValue::Text(value) => value.clone(),
            FieldValue::Boolean(value) => value.to_string(),
            FieldValue::Data(value) => {
                let mut hex = String::with_capacity(value.len() * 2);
                for byte in value {
                    let _ = write!(hex, "{byte:02x}");
                }
                hex
            }
        }
    }
}

/// Name based access to a raw record. Plist and JSON readers also accept dotted paths (`clientData.role`)
pub(crate) trait FieldReader {
    /// Missing fields are returned as `FieldValue::Null`
    fn field(&self, name: &str) -> FieldValue;

    fn integer(&self, name: &str) -> Option<i64> {
        self.field(name).as_integer()
    }

    fn text(&self, name: &str) -> Option<String> {
        self.field(name).as_text()
    }

    fn display(&self, name: &str) -> String {
        self.field(name).to_display()
    }

    /// Check if the record has the field at all. Readers that can store an explicit null override this
    fn contains(&self, name: &str) -> bool {
        !self.field(name).is_null()
    }

    /// Return the field or `FieldError::MissingField` if it is absent. A present null is returned as `FieldValue::Null`
    fn required(&self, name: &str) -> Result<FieldValue, FieldError> {
        if !self.contains(name) {
            return Err(FieldError::MissingField);
        }
        Ok(self.field(name))
    }
}

impl FieldReader for Row<'_> {
    fn field(&self, name: &str) -> FieldValue {
        let value = match self.get_ref(name) {
            Ok(result) => result,
            Err(err) => {
                warn!("[decoder] Could not read column {name}: {err:?}");
                return FieldValue::Null;
            }
        };

        match value {
            ValueRef::Null => FieldValue::Null,
            ValueRef::Integer(data) => FieldValue::Integer(data),
            ValueRef::Real(data) => FieldValue::Real(data),
            ValueRef::Text(data) => FieldValue::Text(String::from_utf8_lossy(data).to_string()),
            ValueRef::Blob(data) => FieldValue::Data(data.to_vec()),
        }
    }
}

impl FieldReader for serde_json::Value {
    fn field(&self, name: &str) -> FieldValue {
        let value = match self.get(name) {
            Some(result) => Some(result),
            None => json_path(self, name),
        };
        match value {
            Some(result) => json_field(result),
            None => FieldValue::Null,
        }
    }

    fn contains(&self, name: &str) -> bool {
        self.get(name).is_some() || json_path(self, name).is_some()
    }
}

impl FieldReader for plist::Dictionary {
    fn field(&self, name: &str) -> FieldValue {
        if let Some(value) = self.get(name) {
            return plist_field(value);
        }

        let mut segments = name.split('.');
        let first = match segments.next().and_then(|key| self.get(key)) {
            Some(result) => result,
            None => return FieldValue::Null,
        };
        let rest: Vec<&str> = segments.collect();
        match plist_path(first, &rest) {
            Some(result) => plist_field(result),
            None => FieldValue::Null,
        }
    }
}

impl FieldReader for plist::Value {
    fn field(&self, name: &str) -> FieldValue {
        match self.as_dictionary() {
            Some(dict) => dict.field(name),
            None => FieldValue::Null,
        }
    }
}

/// Walk a dotted path through JSON objects and arrays
fn json_path<'a>(value: &'a serde_json::Value, path: &str) -> Option<&'a serde_json::Value> {
    let mut current = value;
    for segment in path.split('.') {
        current = match current {
            serde_json::Value::Object(map) => map.get(segment)?,
            serde_json::Value::Array(values) => values.get(segment.parse::<usize>().ok()?)?,
            _ => return None,
        };
    }
    Some(current)
}

fn json_field(value: &serde_json::Value) -> FieldValue {
    match value {
        serde_json::Value::Null => FieldValue::Null,
        serde_json::Value::Bool(data) => FieldValue::Boolean(*data),
        serde_json::Value::Number(data) => {
            if let Some(result) = data.as_i64() {
                FieldValue::Integer(result)
            } else {
                FieldValue::Real(data.as_f64().unwrap_or_default())
            }
        }
        serde_json::Value::String(data) => FieldValue::Text(data.clone()),
        serde_json::Value::Array(_) | serde_json::Value::Object(_) => {
            FieldValue::Text(value.to_string())
        }
    }
}

fn plist_path<'a>(value: &'a plist::Value, path: &[&str]) -> Option<&'a plist::Value> {
    let mut current = value;
    for segment in path {
        current = match current {
            plist::Value::Dictionary(dict) => dict.get(segment)?,
            plist::Value::Array(values) => values.get(segment.parse::<usize>().ok()?)?,
            _ => return None,
        };
    }
    Some(current)
}

fn plist_field(value: &plist::Value) -> FieldValue {
    match value {
        plist::Value::Boolean(data) => FieldValue::Boolean(*data),
        plist::Value::Integer(data) => match data.as_signed() {
            Some(result) => FieldValue::Integer(result),
            None => FieldValue::Real(data.as_unsigned().unwrap_or_default() as f64),
        },
        plist::Value::Real(data) => FieldValue::Real(*data),
        plist::Value::String(data) => FieldValue::Text(data.clone()),
        plist::Value::Data(data) => FieldValue::Data(data.clone()),
        plist::Value::Date(data) => FieldValue::Text(data.to_xml_format()),
        plist::Value::Uid(data) => FieldValue::Integer(data.get() as i64),
        _ => FieldValue::Null,
    }
}
