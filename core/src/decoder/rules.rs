use super::{enumeration::EnumTable, field::FieldReader, field::FieldValue, version::IosVersion};
use crate::utils::time::cocoatime_to_display;
use chrono::FixedOffset;

/// How a raw field becomes report text
#[derive(Debug)]
pub(crate) enum Rule {
    /// Seconds since 2001-01-01 rendered as `YYYY-MM-DD HH:MM:SS`
    Timestamp,
    Enumerated(&'static EnumTable),
    PassThrough,
}

/// One report column. `field` is the name the reader is asked for
#[derive(Debug)]
pub(crate) struct Column {
    pub(crate) header: &'static str,
    pub(crate) field: &'static str,
    pub(crate) rule: Rule,
}

/// A fixed decoding layout, active from `min_version` until a newer layout takes over
#[derive(Debug)]
pub(crate) struct Layout {
    pub(crate) name: &'static str,
    pub(crate) min_version: IosVersion,
    pub(crate) query: &'static str,
    pub(crate) columns: &'static [Column],
}

impl Layout {
    pub(crate) fn headers(&self) -> Vec<&'static str> {
        self.columns.iter().map(|column| column.header).collect()
    }
}

/// Decode one raw record into a row. Row length always equals `columns.len()`
pub(crate) fn decode_record<R: FieldReader + ?Sized>(
    reader: &R,
    columns: &[Column],
    timezone: &FixedOffset,
) -> Vec<String> {
    let mut row = Vec::with_capacity(columns.len());
    for column in columns {
        let value = reader.field(column.field);
        row.push(decode_value(&value, &column.rule, timezone));
    }
    row
}

/// Apply a single rule to a raw value
pub(crate) fn decode_value(value: &FieldValue, rule: &Rule, timezone: &FixedOffset) -> String {
    match rule {
        Rule::Timestamp => match value {
            FieldValue::Null => String::new(),
            _ => match value.as_real() {
                Some(cocoatime) => cocoatime_to_display(&cocoatime, timezone),
                None => value.to_display(),
            },
        },
        Rule::Enumerated(table) => table.decode(value),
        Rule::PassThrough => value.to_display(),
    }
}

#[cfg(test)]
mod tests {
    use super::{decode_record, decode_value, Column, Layout, Rule};
    use crate::decoder::{enumeration::EnumTable, field::FieldValue, version::IosVersion};
    use chrono::FixedOffset;
    use serde_json::json;

    const TRASHED: EnumTable = EnumTable {
        name: "trashed",
        entries: &[
            (0, "0-Asset Not In Trash-Recently Deleted-0"),
            (1, "1-Asset In Trash-Recently Deleted-1"),
        ],
    };

    static COLUMNS: [Column; 3] = [
        Column {
            header: "Created",
            field: "created",
            rule: Rule::Timestamp,
        },
        Column {
            header: "Trashed",
            field: "trashed",
            rule: Rule::Enumerated(&TRASHED),
        },
        Column {
            header: "Title",
            field: "share.title",
            rule: Rule::PassThrough,
        },
    ];

    fn utc() -> FixedOffset {
        FixedOffset::east_opt(0).unwrap()
    }

    #[test]
    fn test_decode_record() {
        let record = json!({"created": 0, "trashed": 1, "share": {"title": "Family"}});
        let row = decode_record(&record, &COLUMNS, &utc());
        assert_eq!(
            row,
            vec![
                "2001-01-01 00:00:00",
                "1-Asset In Trash-Recently Deleted-1",
                "Family"
            ]
        );
    }

    #[test]
    fn test_decode_record_missing_fields() {
        let record = json!({"trashed": 7});
        let row = decode_record(&record, &COLUMNS, &utc());
        assert_eq!(row.len(), COLUMNS.len());
        assert_eq!(row[0], "");
        assert_eq!(row[1], "Unknown-New-Value!: 7");
        assert_eq!(row[2], "");
    }

    #[test]
    fn test_decode_value_timestamp() {
        let tz = utc();
        assert_eq!(decode_value(&FieldValue::Null, &Rule::Timestamp, &tz), "");
        assert_eq!(
            decode_value(&FieldValue::Real(730987200.9), &Rule::Timestamp, &tz),
            "2024-03-01 12:00:00"
        );
    }

    #[test]
    fn test_decode_value_timestamp_out_of_range() {
        let tz = utc();
        for value in [
            FieldValue::Real(1e19),
            FieldValue::Real(f64::MAX),
            FieldValue::Real(f64::INFINITY),
            FieldValue::Integer(i64::MAX),
        ] {
            assert_eq!(decode_value(&value, &Rule::Timestamp, &tz), "");
        }
    }

    #[test]
    fn test_layout_headers() {
        let layout = Layout {
            name: "test",
            min_version: IosVersion::new(16, 0, 0),
            query: "",
            columns: &COLUMNS,
        };
        assert_eq!(layout.headers(), vec!["Created", "Trashed", "Title"]);
    }
}
