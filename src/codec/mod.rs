//! Codec Module
//!
//! Text format used both for interactive entry and for the database file.
//!
//! ## File Format (one record per 5 lines)
//! ```text
//! Name: <non-empty text>
//! Sex: <M|F>
//! Age: <non-negative integer>
//! Job: <non-empty text>
//! <blank line>
//! ```
//!
//! Interactive entry reads the same four fields without a label on the
//! input side; the label is only printed as a prompt.

mod field;
mod record;

pub use field::{read_field, write_field, FieldRead, FieldValue};
pub use record::{read_record, write_record};

use crate::record::Field;

/// How a record is being read
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReadMode {
    /// Terminal entry: invalid fields are re-prompted
    Interactive,

    /// File entry: the first bad field aborts the load
    Batch,
}

impl ReadMode {
    /// Prefix expected in front of a field's value on the input
    pub fn prefix(self, field: Field) -> &'static str {
        match self {
            ReadMode::Interactive => "",
            ReadMode::Batch => field.label(),
        }
    }
}
