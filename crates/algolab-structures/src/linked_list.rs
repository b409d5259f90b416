//! Singly linked list with synthetic node addresses.
//!
//! Every node gets an [`Address`] when it is created. Addresses are never
//! reused within a list, so a renderer can key node boxes on them and keep
//! them stable while values move around.

use std::fmt;

use crate::error::{Result, StructureError};

/// First synthetic address handed out by a list.
const BASE_ADDRESS: u32 = 0x00_a0_00;

/// Spacing between consecutive addresses (looks like a small heap allocation).
const ADDRESS_STRIDE: u32 = 0x18;

/// Synthetic memory address of a list node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Address(pub u32);

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0x{:06x}", self.0 & 0x00ff_ffff)
    }
}

/// A value together with the address of the node holding it.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ListEntry<T> {
    pub value: T,
    pub address: Address,
}

#[derive(Debug, Clone)]
struct Node<T> {
    value: T,
    address: Address,
    next: Option<Box<Node<T>>>,
}

/// A singly linked list.
#[derive(Debug, Clone)]
pub struct LinkedList<T> {
    head: Option<Box<Node<T>>>,
    len: usize,
    allocated: u32,
}

impl<T> Default for LinkedList<T> {
    fn default() -> Self {
        Self {
            head: None,
            len: 0,
            allocated: 0,
        }
    }
}

impl<T> LinkedList<T> {
    /// Create an empty list.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Add a value at the end.
    pub fn append(&mut self, value: T) {
        let index = self.len;
        self.link_at(index, value);
    }

    /// Add a value at the beginning.
    pub fn prepend(&mut self, value: T) {
        self.link_at(0, value);
    }

    /// Insert a value so that it ends up at position `index`.
    ///
    /// Valid positions are `0..=len`; `len` appends.
    pub fn insert_at(&mut self, index: usize, value: T) -> Result<()> {
        if index > self.len {
            return Err(StructureError::IndexOutOfRange {
                index,
                len: self.len,
            });
        }
        self.link_at(index, value);
        Ok(())
    }

    /// Remove and return the first value.
    pub fn remove_head(&mut self) -> Option<T> {
        let mut node = self.head.take()?;
        self.head = node.next.take();
        self.len -= 1;
        Some(node.value)
    }

    /// Remove and return the last value.
    pub fn remove_tail(&mut self) -> Option<T> {
        let last = self.len.checked_sub(1)?;
        let slot = self.slot_at(last);
        let node = slot.take()?;
        self.len -= 1;
        Some(node.value)
    }

    /// Remove every node.
    pub fn clear(&mut self) {
        while self.remove_head().is_some() {}
    }

    /// Iterate over the values from head to tail.
    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.nodes().map(|node| &node.value)
    }

    fn nodes(&self) -> impl Iterator<Item = &Node<T>> {
        std::iter::successors(self.head.as_deref(), |node| node.next.as_deref())
    }

    /// The link that currently points at position `index` (or the tail link
    /// when `index == len`).
    fn slot_at(&mut self, index: usize) -> &mut Option<Box<Node<T>>> {
        let mut cursor = &mut self.head;
        let mut remaining = index;
        while remaining > 0 {
            match cursor {
                Some(node) => cursor = &mut node.next,
                None => break,
            }
            remaining -= 1;
        }
        cursor
    }

    fn link_at(&mut self, index: usize, value: T) {
        let address = self.next_address();
        let slot = self.slot_at(index);
        let next = slot.take();
        *slot = Some(Box::new(Node {
            value,
            address,
            next,
        }));
        self.len += 1;
    }

    fn next_address(&mut self) -> Address {
        let offset = self.allocated.wrapping_mul(ADDRESS_STRIDE);
        let address = Address(BASE_ADDRESS.wrapping_add(offset));
        self.allocated += 1;
        address
    }
}

impl<T: PartialEq> LinkedList<T> {
    /// Remove the first node holding `value`.
    pub fn remove(&mut self, value: &T) -> Option<T> {
        let mut cursor = &mut self.head;
        while cursor.as_ref().is_some_and(|node| node.value != *value) {
            cursor = &mut cursor.as_mut()?.next;
        }
        let mut node = cursor.take()?;
        *cursor = node.next.take();
        self.len -= 1;
        Some(node.value)
    }

    pub fn contains(&self, value: &T) -> bool {
        self.iter().any(|v| v == value)
    }

    /// Position of the first node holding `value`.
    pub fn position(&self, value: &T) -> Option<usize> {
        self.iter().position(|v| v == value)
    }
}

impl<T: Clone> LinkedList<T> {
    /// Values with their node addresses, head first.
    pub fn entries(&self) -> Vec<ListEntry<T>> {
        self.nodes()
            .map(|node| ListEntry {
                value: node.value.clone(),
                address: node.address,
            })
            .collect()
    }

    pub fn to_vec(&self) -> Vec<T> {
        self.iter().cloned().collect()
    }
}

impl<T> Drop for LinkedList<T> {
    // Unlink iteratively; the default recursive drop can overflow on long lists.
    fn drop(&mut self) {
        let mut next = self.head.take();
        while let Some(mut node) = next {
            next = node.next.take();
        }
    }
}

impl<T> FromIterator<T> for LinkedList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut list = LinkedList::new();
        for value in iter {
            list.append(value);
        }
        list
    }
}
