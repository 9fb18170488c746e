//! Roster implementation
//!
//! Arena-indexed doubly-linked list.

use crate::error::{Result, RosterError};
use crate::record::Record;
use super::Handle;

/// A linked node: the record plus its neighbours' slot indices
#[derive(Debug)]
struct Node {
    record: Record,
    prev: Option<usize>,
    next: Option<usize>,
}

/// One arena slot; the generation is bumped every time it is vacated
#[derive(Debug)]
struct Slot {
    generation: u64,
    node: Option<Node>,
}

/// Name-ordered collection of records
#[derive(Debug, Default)]
pub struct Roster {
    /// Backing store for all nodes, live and vacant
    slots: Vec<Slot>,

    /// Vacant slot indices available for reuse
    free: Vec<usize>,

    head: Option<usize>,
    tail: Option<usize>,
    len: usize,
}

impl Roster {
    /// Create an empty roster
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Insert keeping name order
    ///
    /// The record goes in front of the first element whose name is greater
    /// than or equal to its own, so among equal names the most recently
    /// inserted comes first. With no such element it becomes the tail.
    pub fn insert_sorted(&mut self, record: Record) -> Result<Handle> {
        let mut cursor = self.head;
        let mut position = 0usize;
        while let Some(index) = cursor {
            let node = self.node(index);
            if node.record.name() >= record.name() {
                break;
            }
            cursor = node.next;
            position += 1;
        }

        tracing::trace!(name = record.name(), position, len = self.len, "placing record");

        let (prev, next) = match cursor {
            Some(index) => (self.node(index).prev, Some(index)),
            None => (self.tail, None),
        };

        let index = self.allocate(Node { record, prev, next })?;

        match prev {
            Some(p) => self.node_mut(p).next = Some(index),
            None => self.head = Some(index),
        }
        match next {
            Some(n) => self.node_mut(n).prev = Some(index),
            None => self.tail = Some(index),
        }
        self.len += 1;

        Ok(self.handle(index))
    }

    /// First record, in list order, whose name equals `name` exactly
    pub fn find_first(&self, name: &str) -> Option<Handle> {
        let mut cursor = self.head;
        while let Some(index) = cursor {
            let node = self.node(index);
            tracing::trace!(index, candidate = node.record.name(), "searching");
            if node.record.name() == name {
                return Some(self.handle(index));
            }
            cursor = node.next;
        }
        tracing::trace!(name, "no match");
        None
    }

    /// Remove a record and hand it back
    ///
    /// Returns `None` if the handle does not refer to a live record of this
    /// roster, leaving the list untouched.
    pub fn unlink(&mut self, handle: Handle) -> Option<Record> {
        self.resolve(handle)?;

        let slot = &mut self.slots[handle.index];
        let node = slot.node.take()?;
        slot.generation += 1;

        tracing::trace!(
            index = handle.index,
            name = node.record.name(),
            prev = ?node.prev,
            next = ?node.next,
            "unlinking record"
        );

        match node.prev {
            Some(p) => self.node_mut(p).next = node.next,
            None => self.head = node.next,
        }
        match node.next {
            Some(n) => self.node_mut(n).prev = node.prev,
            None => self.tail = node.prev,
        }

        self.free.push(handle.index);
        self.len -= 1;

        Some(node.record)
    }

    /// Look up a record by handle
    pub fn get(&self, handle: Handle) -> Option<&Record> {
        self.resolve(handle).map(|node| &node.record)
    }

    /// Handle of the head element
    pub fn first(&self) -> Option<Handle> {
        self.head.map(|index| self.handle(index))
    }

    /// Handle of the tail element
    pub fn last(&self) -> Option<Handle> {
        self.tail.map(|index| self.handle(index))
    }

    /// Handle of the element after `handle`
    pub fn next(&self, handle: Handle) -> Option<Handle> {
        self.resolve(handle)?.next.map(|index| self.handle(index))
    }

    /// Handle of the element before `handle`
    pub fn prev(&self, handle: Handle) -> Option<Handle> {
        self.resolve(handle)?.prev.map(|index| self.handle(index))
    }

    /// Iterate records from head to tail
    pub fn iter(&self) -> Iter<'_> {
        Iter {
            roster: self,
            cursor: self.head,
            remaining: self.len,
        }
    }

    /// Check ordering, link symmetry and element uniqueness
    pub fn is_consistent(&self) -> bool {
        let mut seen = vec![false; self.slots.len()];
        let mut count = 0usize;
        let mut prev: Option<usize> = None;
        let mut cursor = self.head;

        while let Some(index) = cursor {
            let Some(node) = self.slots.get(index).and_then(|slot| slot.node.as_ref()) else {
                return false;
            };
            if seen[index] || node.prev != prev {
                return false;
            }
            if let Some(p) = prev {
                if self.node(p).record.name() > node.record.name() {
                    return false;
                }
            }
            seen[index] = true;
            count += 1;
            prev = cursor;
            cursor = node.next;
        }

        let live = self.slots.iter().filter(|slot| slot.node.is_some()).count();
        prev == self.tail && count == self.len && live == self.len
    }

    // =========================================================================
    // Internal helpers
    // =========================================================================

    /// Place a node in a vacant slot or a new one
    fn allocate(&mut self, node: Node) -> Result<usize> {
        if let Some(index) = self.free.pop() {
            self.slots[index].node = Some(node);
            return Ok(index);
        }

        self.slots.try_reserve(1).map_err(|_| RosterError::Allocation)?;
        self.slots.push(Slot {
            generation: 0,
            node: Some(node),
        });
        Ok(self.slots.len() - 1)
    }

    fn resolve(&self, handle: Handle) -> Option<&Node> {
        self.slots
            .get(handle.index)
            .filter(|slot| slot.generation == handle.generation)
            .and_then(|slot| slot.node.as_ref())
    }

    fn handle(&self, index: usize) -> Handle {
        Handle {
            index,
            generation: self.slots[index].generation,
        }
    }

    // Linked indices always point at occupied slots.
    fn node(&self, index: usize) -> &Node {
        match self.slots[index].node.as_ref() {
            Some(node) => node,
            None => unreachable!("linked slot {index} is vacant"),
        }
    }

    fn node_mut(&mut self, index: usize) -> &mut Node {
        match self.slots[index].node.as_mut() {
            Some(node) => node,
            None => unreachable!("linked slot {index} is vacant"),
        }
    }
}

impl<'a> IntoIterator for &'a Roster {
    type Item = &'a Record;
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Iterator over a roster's records in list order
pub struct Iter<'a> {
    roster: &'a Roster,
    cursor: Option<usize>,
    remaining: usize,
}

impl<'a> Iterator for Iter<'a> {
    type Item = &'a Record;

    fn next(&mut self) -> Option<Self::Item> {
        let index = self.cursor?;
        let roster = self.roster;
        let node = roster.node(index);
        self.cursor = node.next;
        self.remaining = self.remaining.saturating_sub(1);
        Some(&node.record)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl ExactSizeIterator for Iter<'_> {}
