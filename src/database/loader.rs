//! Database loader
//!
//! Reads records from a database file into a roster.

use std::io::{self, BufRead};

use crate::codec::{read_record, ReadMode};
use crate::error::{Result, RosterError};
use crate::input::LineReader;
use crate::roster::Roster;

/// Load every record from `source` into `roster`
///
/// Each record must be followed by exactly one blank line. End of stream
/// right after that blank line ends the load; a completely empty stream is
/// an empty database. Any other deviation is an error, and the caller must
/// discard `roster` in that case.
///
/// Returns the number of records loaded.
pub fn load<R: BufRead>(source: &mut LineReader<R>, roster: &mut Roster) -> Result<usize> {
    let mut loaded = 0usize;

    loop {
        let record = match read_record(source, ReadMode::Batch, &mut io::sink()) {
            Ok(record) => record,
            Err(RosterError::EndOfInput) if loaded == 0 && source.offset() == 0 => {
                tracing::debug!("database file is empty");
                return Ok(0);
            }
            Err(RosterError::EndOfInput) => {
                tracing::debug!(record = loaded + 1, offset = source.offset(), "truncated record");
                return Err(RosterError::TruncatedDatabase);
            }
            Err(e) => {
                tracing::debug!(record = loaded + 1, offset = source.offset(), error = %e, "malformed record");
                return Err(e);
            }
        };

        roster.insert_sorted(record)?;
        loaded += 1;

        if !more_records(source, loaded)? {
            break;
        }
    }

    tracing::debug!(records = loaded, "database loaded");
    Ok(loaded)
}

/// Consume the separator after record number `record`
///
/// Returns whether another record follows.
fn more_records<R: BufRead>(source: &mut LineReader<R>, record: usize) -> Result<bool> {
    let first = source.read_byte()?;
    tracing::trace!(byte = ?first, "separator byte");

    if first != Some(b'\n') {
        return Err(RosterError::MalformedSeparator { record });
    }

    match source.read_byte()? {
        None => Ok(false),
        Some(byte) => {
            tracing::trace!(byte, "more records follow");
            source.unread_byte(byte);
            Ok(true)
        }
    }
}
