//! Roster Module
//!
//! Name-ordered, doubly-linked collection of records.
//!
//! ## Responsibilities
//! - Keep records in non-decreasing name order (byte comparison)
//! - O(1) unlink given a handle
//! - Forward traversal from head to tail
//!
//! ## Data Structure Choice
//! Nodes live in an arena (`Vec` of slots) and link to each other by slot
//! index. A `Handle` carries the slot's generation, so a handle to a record
//! that has since been unlinked no longer resolves:
//!
//! ```text
//!   head                                   tail
//!    │                                       │
//!    ▼                                       ▼
//! ┌───────┐ next ┌───────┐ next ┌───────┐
//! │ Alice │─────▶│  Bob  │─────▶│  Bob  │
//! │ slot 2│◀─────│ slot 0│◀─────│ slot 1│
//! └───────┘ prev └───────┘ prev └───────┘
//! ```

mod list;

pub use list::{Iter, Roster};

/// Stable reference to a record inside one `Roster`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Handle {
    index: usize,
    generation: u64,
}
