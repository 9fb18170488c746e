//! # RosterDB
//!
//! An in-memory employee record store with:
//! - Records kept in name order in a doubly-linked collection
//! - A line-oriented text format shared by terminal entry and database files
//! - Strict, all-or-nothing loading of database files
//! - A small menu shell over injected input/output streams
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                Shell (menu: add/delete/print/exit)           │
//! └───────────────┬─────────────────────────────┬───────────────┘
//!                 │                             │
//! ┌───────────────▼──────────────┐  ┌───────────▼───────────────┐
//! │       Database Loader        │  │         Database          │
//! │ (batch read + separators)    │  │  (owns the roster)        │
//! └───────────────┬──────────────┘  └───────────┬───────────────┘
//!                 │                             │
//!          ┌──────▼──────┐               ┌──────▼──────┐
//!          │ Record Codec│──────────────▶│   Roster    │
//!          │ Field Codec │   Record      │ (arena list)│
//!          └──────┬──────┘               └─────────────┘
//!                 │
//!          ┌──────▼──────┐
//!          │ LineReader  │
//!          └─────────────┘
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod config;

pub mod record;
pub mod input;
pub mod codec;
pub mod roster;
pub mod database;
pub mod shell;

// =============================================================================
// Public API Re-exports
// =============================================================================

pub use error::{Result, RosterError};
pub use config::Config;
pub use database::Database;
pub use record::{Field, Record, Sex};
pub use roster::{Handle, Roster};

// =============================================================================
// Version Info
// =============================================================================

/// Current version of RosterDB
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
