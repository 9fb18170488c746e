//! Input Module
//!
//! Byte and line reading primitives shared by the codecs, the loader and
//! the interactive shell.
//!
//! ## Responsibilities
//! - Bounded line reads: excess bytes are consumed but not stored
//! - Distinguish a complete line from end-of-stream
//! - One byte of pushback for the record separator check

mod reader;

pub use reader::LineReader;
