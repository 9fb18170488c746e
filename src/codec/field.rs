//! Field codec
//!
//! Reads one prefixed field line into a typed value and writes it back.

use std::io::{BufRead, Write};

use crate::error::Result;
use crate::input::LineReader;
use crate::record::{Field, Sex};

/// A parsed field value
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldValue {
    Name(String),
    Sex(Sex),
    Age(u32),
    Job(String),
}

impl FieldValue {
    pub fn field(&self) -> Field {
        match self {
            FieldValue::Name(_) => Field::Name,
            FieldValue::Sex(_) => Field::Sex,
            FieldValue::Age(_) => Field::Age,
            FieldValue::Job(_) => Field::Job,
        }
    }
}

/// Outcome of reading one field
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldRead {
    /// A complete, acceptable line
    Value(FieldValue),

    /// A complete line the field rejects
    Invalid,

    /// The input did not start with the expected prefix
    PrefixMismatch,

    /// The stream ended before the line was complete
    EndOfInput,
}

/// Read one field governed by `prefix`
///
/// Exactly `prefix.len()` bytes are consumed and compared before the rest of
/// the line is handed to the line reader, bounded by `max_length`. End of
/// stream on the first prefix byte is `EndOfInput`; anywhere later in the
/// prefix it is a `PrefixMismatch`.
pub fn read_field<R: BufRead>(
    source: &mut LineReader<R>,
    prefix: &str,
    field: Field,
    max_length: usize,
) -> Result<FieldRead> {
    for (i, &expected) in prefix.as_bytes().iter().enumerate() {
        match source.read_byte()? {
            Some(byte) if byte == expected => {
                tracing::trace!(field = %field, byte, "prefix byte matched");
            }
            Some(byte) => {
                tracing::trace!(field = %field, byte, expected, "prefix byte mismatch");
                return Ok(FieldRead::PrefixMismatch);
            }
            None if i == 0 => return Ok(FieldRead::EndOfInput),
            None => return Ok(FieldRead::PrefixMismatch),
        }
    }

    let line = match source.read_line(max_length)? {
        Some(line) => line,
        None => return Ok(FieldRead::EndOfInput),
    };

    Ok(match parse_value(field, line) {
        Some(value) => FieldRead::Value(value),
        None => FieldRead::Invalid,
    })
}

/// Write `prefix`, the value's text form, then a line terminator
pub fn write_field<W: Write>(sink: &mut W, prefix: &str, value: &FieldValue) -> Result<()> {
    match value {
        FieldValue::Name(text) | FieldValue::Job(text) => writeln!(sink, "{prefix}{text}")?,
        FieldValue::Sex(sex) => writeln!(sink, "{prefix}{sex}")?,
        FieldValue::Age(age) => writeln!(sink, "{prefix}{age}")?,
    }
    Ok(())
}

fn parse_value(field: Field, line: Vec<u8>) -> Option<FieldValue> {
    match field {
        Field::Name => parse_text(line).map(FieldValue::Name),
        Field::Job => parse_text(line).map(FieldValue::Job),
        Field::Sex => match line.as_slice() {
            [byte] => Sex::from_byte(*byte).map(FieldValue::Sex),
            _ => None,
        },
        Field::Age => parse_age(&line).map(FieldValue::Age),
    }
}

/// An incomplete multi-byte character at the end, as left by the length
/// cut, is dropped.
fn parse_text(line: Vec<u8>) -> Option<String> {
    let text = match String::from_utf8(line) {
        Ok(text) => text,
        Err(e) if e.utf8_error().error_len().is_none() => {
            let valid = e.utf8_error().valid_up_to();
            let mut bytes = e.into_bytes();
            bytes.truncate(valid);
            String::from_utf8(bytes).ok()?
        }
        Err(_) => return None,
    };

    (!text.is_empty()).then_some(text)
}

/// Leading whitespace and a `+` sign are allowed; anything after the
/// digits (including trailing whitespace) is not. A `-` is only allowed
/// before a run of zeros.
fn parse_age(line: &[u8]) -> Option<u32> {
    let start = line.iter().position(|b| !b.is_ascii_whitespace())?;
    let (negative, digits) = match &line[start..] {
        [b'+', rest @ ..] => (false, rest),
        [b'-', rest @ ..] => (true, rest),
        rest => (false, rest),
    };

    if digits.is_empty() || !digits.iter().all(u8::is_ascii_digit) {
        return None;
    }
    if negative {
        return digits.iter().all(|&b| b == b'0').then_some(0);
    }

    std::str::from_utf8(digits).ok()?.parse().ok()
}
