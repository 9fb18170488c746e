//! Database Module
//!
//! The database value that owns the roster for the lifetime of a session.
//!
//! ## Responsibilities
//! - Load a database file at startup (all or nothing)
//! - Add, find and delete records by name
//! - Print or export the records in the file format

mod loader;

pub use loader::load;

use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::Path;

use crate::codec::write_record;
use crate::config::Config;
use crate::error::{Result, RosterError};
use crate::input::LineReader;
use crate::record::Record;
use crate::roster::{Handle, Iter, Roster};

/// An employee database
pub struct Database {
    /// Database configuration
    config: Config,

    /// Records in name order
    roster: Roster,
}

impl Database {
    /// Create an empty database
    pub fn new(config: Config) -> Self {
        Self {
            config,
            roster: Roster::new(),
        }
    }

    /// Open a database, loading `config.database_path` if one is set
    ///
    /// The file is read to the end and closed before this returns.
    pub fn open(config: Config) -> Result<Self> {
        let Some(path) = config.database_path.clone() else {
            return Ok(Self::new(config));
        };

        let file = File::open(&path).map_err(|source| RosterError::FileOpen {
            path: path.clone(),
            source,
        })?;

        tracing::debug!(path = %path.display(), "loading database");
        Self::from_reader(config, BufReader::new(file))
    }

    /// Build a database from the file format read from `reader`
    ///
    /// On error no database is produced.
    pub fn from_reader<R: BufRead>(config: Config, reader: R) -> Result<Self> {
        let mut source = LineReader::new(reader);
        let mut roster = Roster::new();
        load(&mut source, &mut roster)?;

        Ok(Self { config, roster })
    }

    /// Add a record in name order
    pub fn insert(&mut self, record: Record) -> Result<Handle> {
        self.roster.insert_sorted(record)
    }

    /// First record with exactly this name
    pub fn find_first(&self, name: &str) -> Option<&Record> {
        self.roster
            .find_first(name)
            .and_then(|handle| self.roster.get(handle))
    }

    /// Delete every record with this name; returns how many were removed
    pub fn delete_all(&mut self, name: &str) -> usize {
        let mut removed = 0usize;
        while let Some(handle) = self.roster.find_first(name) {
            if self.roster.unlink(handle).is_none() {
                break;
            }
            removed += 1;
        }

        tracing::debug!(name, removed, "deleted records");
        removed
    }

    /// Write all records, in order, in the file format
    pub fn print<W: Write>(&self, out: &mut W) -> Result<()> {
        for record in &self.roster {
            write_record(out, record)?;
        }
        out.flush()?;
        Ok(())
    }

    /// Export the database to `path` so that `open` can load it back
    pub fn save(&self, path: &Path) -> Result<()> {
        let file = File::create(path)?;
        let mut writer = BufWriter::new(file);
        self.print(&mut writer)?;

        tracing::debug!(path = %path.display(), records = self.len(), "database saved");
        Ok(())
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    /// Records in name order
    pub fn records(&self) -> Iter<'_> {
        self.roster.iter()
    }

    pub fn len(&self) -> usize {
        self.roster.len()
    }

    pub fn is_empty(&self) -> bool {
        self.roster.is_empty()
    }

    /// The underlying collection
    pub fn roster(&self) -> &Roster {
        &self.roster
    }

    /// Get the configuration
    pub fn config(&self) -> &Config {
        &self.config
    }
}
