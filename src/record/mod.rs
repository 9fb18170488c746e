//! Record Module
//!
//! The data unit stored in the database.
//!
//! ## Fields (fixed order)
//! | Field | Type     | Rule                                   |
//! |-------|----------|----------------------------------------|
//! | name  | text     | 1..=100 bytes, no newline, sort key    |
//! | sex   | `M`/`F`  | exactly one byte                       |
//! | age   | integer  | >= 0, nothing after the digits         |
//! | job   | text     | 1..=100 bytes, no newline              |

mod employee;

use std::fmt;

pub use employee::Record;

/// Maximum stored length (in bytes) of a name
pub const MAX_NAME_LENGTH: usize = 100;

/// Maximum stored length (in bytes) of a job
pub const MAX_JOB_LENGTH: usize = 100;

/// Bytes kept from a sex line; two is enough to tell "M" from "MX"
pub const MAX_SEX_LINE: usize = 2;

/// Bytes kept from an age line
pub const MAX_AGE_LINE: usize = 300;

/// One of the four fields of a record
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Name,
    Sex,
    Age,
    Job,
}

impl Field {
    /// All fields in the order they are read and written
    pub const ALL: [Field; 4] = [Field::Name, Field::Sex, Field::Age, Field::Job];

    /// Label used as the file prefix and as the interactive prompt
    pub fn label(self) -> &'static str {
        match self {
            Field::Name => "Name: ",
            Field::Sex => "Sex: ",
            Field::Age => "Age: ",
            Field::Job => "Job: ",
        }
    }

    /// Lower-case field name for diagnostics
    pub fn noun(self) -> &'static str {
        match self {
            Field::Name => "name",
            Field::Sex => "sex",
            Field::Age => "age",
            Field::Job => "job",
        }
    }

    /// Number of bytes of the field's line that are kept
    pub fn max_length(self) -> usize {
        match self {
            Field::Name => MAX_NAME_LENGTH,
            Field::Sex => MAX_SEX_LINE,
            Field::Age => MAX_AGE_LINE,
            Field::Job => MAX_JOB_LENGTH,
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.noun())
    }
}

/// Sex identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Sex {
    Male,
    Female,
}

impl Sex {
    /// Parse the single-byte file form
    pub fn from_byte(byte: u8) -> Option<Self> {
        match byte {
            b'M' => Some(Sex::Male),
            b'F' => Some(Sex::Female),
            _ => None,
        }
    }

    pub fn as_char(self) -> char {
        match self {
            Sex::Male => 'M',
            Sex::Female => 'F',
        }
    }
}

impl fmt::Display for Sex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}
