//! Record codec
//!
//! Reads and writes the four fields of a record in fixed order.

use std::io::{BufRead, Write};

use crate::error::{Result, RosterError};
use crate::input::LineReader;
use crate::record::{Field, Record, Sex};
use super::{read_field, write_field, FieldRead, FieldValue, ReadMode};

/// Read a complete record
///
/// In `Interactive` mode each field's label is written to `prompts` before
/// every attempt and a rejected field is asked for again until it is valid.
/// In `Batch` mode nothing is written to `prompts` and the first rejected
/// field or label mismatch is returned as an error. End of input is
/// returned as `RosterError::EndOfInput` in both modes.
pub fn read_record<R: BufRead, W: Write>(
    source: &mut LineReader<R>,
    mode: ReadMode,
    prompts: &mut W,
) -> Result<Record> {
    let mut pending = PendingRecord::default();

    for field in Field::ALL {
        pending.set(read_valid_field(source, mode, field, prompts)?);
    }

    pending.finish()
}

/// Write the four labelled fields followed by a blank separator line
pub fn write_record<W: Write>(sink: &mut W, record: &Record) -> Result<()> {
    write_field(sink, Field::Name.label(), &FieldValue::Name(record.name().to_string()))?;
    write_field(sink, Field::Sex.label(), &FieldValue::Sex(record.sex()))?;
    write_field(sink, Field::Age.label(), &FieldValue::Age(record.age()))?;
    write_field(sink, Field::Job.label(), &FieldValue::Job(record.job().to_string()))?;
    writeln!(sink)?;
    Ok(())
}

fn read_valid_field<R: BufRead, W: Write>(
    source: &mut LineReader<R>,
    mode: ReadMode,
    field: Field,
    prompts: &mut W,
) -> Result<FieldValue> {
    let prefix = mode.prefix(field);
    let mut attempts = 0u32;

    loop {
        if mode == ReadMode::Interactive {
            if attempts > 0 {
                writeln!(prompts, "Invalid {field}, please enter again.")?;
            }
            write!(prompts, "{}", field.label())?;
            prompts.flush()?;
        }

        match read_field(source, prefix, field, field.max_length())? {
            FieldRead::Value(value) => return Ok(value),
            FieldRead::EndOfInput => return Err(RosterError::EndOfInput),
            FieldRead::Invalid | FieldRead::PrefixMismatch if mode == ReadMode::Interactive => {
                attempts += 1;
                tracing::debug!(field = %field, attempts, "invalid field, re-prompting");
            }
            FieldRead::Invalid => return Err(RosterError::InvalidField { field }),
            FieldRead::PrefixMismatch => return Err(RosterError::PrefixMismatch { field }),
        }
    }
}

/// Fields collected so far; never visible outside `read_record`
#[derive(Default)]
struct PendingRecord {
    name: Option<String>,
    sex: Option<Sex>,
    age: Option<u32>,
    job: Option<String>,
}

impl PendingRecord {
    fn set(&mut self, value: FieldValue) {
        match value {
            FieldValue::Name(name) => self.name = Some(name),
            FieldValue::Sex(sex) => self.sex = Some(sex),
            FieldValue::Age(age) => self.age = Some(age),
            FieldValue::Job(job) => self.job = Some(job),
        }
    }

    fn finish(self) -> Result<Record> {
        match (self.name, self.sex, self.age, self.job) {
            (Some(name), Some(sex), Some(age), Some(job)) => Record::new(name, sex, age, job),
            (None, ..) => Err(RosterError::InvalidField { field: Field::Name }),
            (_, None, ..) => Err(RosterError::InvalidField { field: Field::Sex }),
            (_, _, None, _) => Err(RosterError::InvalidField { field: Field::Age }),
            (.., None) => Err(RosterError::InvalidField { field: Field::Job }),
        }
    }
}
