// src/common/record.rs

use core::fmt::{self, Write};

/// Error produced when splitting a line-protocol record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum RecordError {
    /// The line has no space separating the tag set from the field set.
    #[error("Record has no field set")]
    MissingFieldSet,

    /// The field set has no `=` separating field name and value.
    #[error("Record field has no value")]
    MissingValue,

    /// The field value is not a number.
    #[error("Record value is not a number")]
    InvalidValue,
}

/// One split line-protocol record: `measurement,tags field=value`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RecordParts<'a> {
    pub measurement: &'a str,
    pub tags: &'a str,
    pub field: &'a str,
    pub value: f32,
}

/// Appends one line-protocol record to `out`.
///
/// The record reads `measurement,tags field=value\n` (the comma is omitted
/// when `tags` renders empty). Only ever appends, so several producers can
/// share a single buffer.
pub fn write_record(
    out: &mut dyn Write,
    measurement: &str,
    tags: fmt::Arguments<'_>,
    value: f32,
) -> fmt::Result {
    // Render the tag set first so an empty one doesn't leave a dangling comma.
    let mut tag_buf = arrayvec::ArrayString::<96>::new();
    write!(tag_buf, "{}", tags)?;
    if tag_buf.is_empty() {
        writeln!(out, "{} value={:.2}", measurement, value)
    } else {
        writeln!(out, "{},{} value={:.2}", measurement, tag_buf, value)
    }
}

/// Splits one line-protocol record back into its parts.
///
/// This is deliberately a trivial splitter: it understands exactly the shape
/// [`write_record`] emits (single field, no escaping).
pub fn parse_record(line: &str) -> Result<RecordParts<'_>, RecordError> {
    let line = line.trim_end_matches(['\r', '\n']);
    let (head, field_set) = line.split_once(' ').ok_or(RecordError::MissingFieldSet)?;
    let (measurement, tags) = match head.split_once(',') {
        Some((measurement, tags)) => (measurement, tags),
        None => (head, ""),
    };
    let (field, value_str) = field_set.split_once('=').ok_or(RecordError::MissingValue)?;
    let value: f32 = value_str.parse().map_err(|_| RecordError::InvalidValue)?;
    Ok(RecordParts {
        measurement,
        tags,
        field,
        value,
    })
}

// --- Unit Tests ---
#[cfg(test)]
mod tests {
    use super::*;
    use heapless::String as HeaplessString;

    #[test]
    fn test_write_record_with_tags() {
        let mut buf = HeaplessString::<128>::new();
        write_record(
            &mut buf,
            "temperature",
            format_args!("sensor=Dallas,device=witty1"),
            21.3,
        )
        .unwrap();
        assert_eq!(
            buf.as_str(),
            "temperature,sensor=Dallas,device=witty1 value=21.30\n"
        );
    }

    #[test]
    fn test_write_record_without_tags() {
        let mut buf = HeaplessString::<64>::new();
        write_record(&mut buf, "moisture", format_args!(""), 42.5).unwrap();
        assert_eq!(buf.as_str(), "moisture value=42.50\n");
    }

    #[test]
    fn test_write_record_appends() {
        let mut buf = HeaplessString::<128>::new();
        write_record(&mut buf, "temperature", format_args!("sensor=A"), 1.0).unwrap();
        write_record(&mut buf, "humidity", format_args!("sensor=A"), 2.0).unwrap();
        assert_eq!(
            buf.as_str(),
            "temperature,sensor=A value=1.00\nhumidity,sensor=A value=2.00\n"
        );
    }

    #[test]
    fn test_parse_record_roundtrip() {
        let mut buf = HeaplessString::<128>::new();
        write_record(
            &mut buf,
            "ambient_light",
            format_args!("sensor=LDR,device=witty1"),
            956.0,
        )
        .unwrap();
        let parts = parse_record(buf.as_str()).unwrap();
        assert_eq!(parts.measurement, "ambient_light");
        assert_eq!(parts.tags, "sensor=LDR,device=witty1");
        assert_eq!(parts.field, "value");
        assert_eq!(parts.value, 956.0);
    }

    #[test]
    fn test_parse_record_no_tags() {
        let parts = parse_record("pressure value=1013.25").unwrap();
        assert_eq!(parts.measurement, "pressure");
        assert_eq!(parts.tags, "");
        assert_eq!(parts.value, 1013.25);
    }

    #[test]
    fn test_parse_record_errors() {
        assert_eq!(parse_record("no_field_set"), Err(RecordError::MissingFieldSet));
        assert_eq!(parse_record("m,t value"), Err(RecordError::MissingValue));
        assert_eq!(parse_record("m,t value=abc"), Err(RecordError::InvalidValue));
    }
}
