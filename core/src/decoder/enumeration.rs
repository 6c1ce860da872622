use super::field::FieldValue;
use log::debug;

/// Label prefix for codes missing from a table. The raw code follows the prefix
pub(crate) const UNKNOWN_VALUE: &str = "Unknown-New-Value!: ";

/// Static mapping from a stored code to its report label
#[derive(Debug)]
pub(crate) struct EnumTable {
    pub(crate) name: &'static str,
    pub(crate) entries: &'static [(i64, &'static str)],
}

impl EnumTable {
    /// Label for a code. Codes outside the table are labeled with their raw value
    pub(crate) fn label(&self, code: i64) -> String {
        for (value, label) in self.entries {
            if *value == code {
                return label.to_string();
            }
        }
        debug!("[decoder] {} has no label for code {code}", self.name);
        format!("{UNKNOWN_VALUE}{code}")
    }

    /// Decode a raw field. Null stays empty, non numeric values keep their raw text in the unknown label
    pub(crate) fn decode(&self, value: &FieldValue) -> String {
        if value.is_null() {
            return String::new();
        }
        match value.as_integer() {
            Some(code) => self.label(code),
            None => format!("{UNKNOWN_VALUE}{}", value.to_display()),
        }
    }
}
