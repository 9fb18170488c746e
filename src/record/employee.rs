//! Employee record
//!
//! Fields are validated once at construction and never mutated afterwards.

use crate::error::{Result, RosterError};
use super::{Field, Sex, MAX_JOB_LENGTH, MAX_NAME_LENGTH};

/// A single employee's details
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    name: String,
    sex: Sex,
    age: u32,
    job: String,
}

impl Record {
    /// Build a record, checking the text fields against the data model
    pub fn new(name: impl Into<String>, sex: Sex, age: u32, job: impl Into<String>) -> Result<Self> {
        let name = name.into();
        let job = job.into();

        validate_text(Field::Name, &name, MAX_NAME_LENGTH)?;
        validate_text(Field::Job, &job, MAX_JOB_LENGTH)?;

        Ok(Self { name, sex, age, job })
    }

    /// Sort and lookup key
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn sex(&self) -> Sex {
        self.sex
    }

    pub fn age(&self) -> u32 {
        self.age
    }

    pub fn job(&self) -> &str {
        &self.job
    }
}

fn validate_text(field: Field, value: &str, max_length: usize) -> Result<()> {
    let reason = if value.is_empty() {
        "must not be empty"
    } else if value.len() > max_length {
        "too long"
    } else if value.contains('\n') {
        "must not contain a newline"
    } else {
        return Ok(());
    };

    Err(RosterError::InvalidRecord { field, reason })
}
