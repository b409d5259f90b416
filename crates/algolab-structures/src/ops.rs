//! Operation commands and the messages they produce.
//!
//! Empty-structure conditions are ordinary outcomes here, never errors: the
//! learner sees "Stack is empty" in the same place as "Pushed 5 onto the
//! stack".

use std::fmt::Display;

use crate::error::{Result, StructureError};
use crate::linked_list::LinkedList;
use crate::queue::Queue;
use crate::stack::Stack;

/// Result of applying one operation.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Outcome {
    /// Message describing what happened.
    pub message: String,
    /// Whether the structure was modified.
    pub changed: bool,
}

impl Outcome {
    fn changed(message: String) -> Self {
        Self {
            message,
            changed: true,
        }
    }

    fn unchanged(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            changed: false,
        }
    }
}

/// Stack commands.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(tag = "op", content = "value", rename_all = "snake_case"))]
pub enum StackOp<T> {
    Push(T),
    Pop,
    Peek,
    Clear,
}

impl<T: Display> StackOp<T> {
    /// Apply to `stack` and describe the result.
    pub fn apply(self, stack: &mut Stack<T>) -> Outcome {
        match self {
            StackOp::Push(value) => {
                let message = format!("Pushed {} onto the stack", value);
                stack.push(value);
                Outcome::changed(message)
            }
            StackOp::Pop => match stack.pop() {
                Some(value) => Outcome::changed(format!("Popped {} from the stack", value)),
                None => Outcome::unchanged("Stack is empty"),
            },
            StackOp::Peek => match stack.peek() {
                Some(value) => Outcome::unchanged(format!("Top of the stack: {}", value)),
                None => Outcome::unchanged("Stack is empty"),
            },
            StackOp::Clear => {
                stack.clear();
                Outcome::changed("Stack cleared".to_string())
            }
        }
    }
}

/// Queue commands.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(tag = "op", content = "value", rename_all = "snake_case"))]
pub enum QueueOp<T> {
    Enqueue(T),
    Dequeue,
    Peek,
    Clear,
}

impl<T: Display> QueueOp<T> {
    /// Apply to `queue` and describe the result.
    pub fn apply(self, queue: &mut Queue<T>) -> Outcome {
        match self {
            QueueOp::Enqueue(value) => {
                let message = format!("Enqueued {} to the queue", value);
                queue.enqueue(value);
                Outcome::changed(message)
            }
            QueueOp::Dequeue => match queue.dequeue() {
                Some(value) => Outcome::changed(format!("Dequeued {} from the queue", value)),
                None => Outcome::unchanged("Queue is empty"),
            },
            QueueOp::Peek => match queue.peek() {
                Some(value) => Outcome::unchanged(format!("Front of the queue: {}", value)),
                None => Outcome::unchanged("Queue is empty"),
            },
            QueueOp::Clear => {
                queue.clear();
                Outcome::changed("Queue cleared".to_string())
            }
        }
    }
}

/// Linked list commands.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(tag = "op", content = "value", rename_all = "snake_case"))]
pub enum ListOp<T> {
    Append(T),
    Prepend(T),
    InsertAt { value: T, index: usize },
    Remove(T),
    RemoveHead,
    RemoveTail,
    Search(T),
    Clear,
}

impl<T> ListOp<T> {
    /// Check positional arguments against `list` without applying.
    pub fn validate(&self, list: &LinkedList<T>) -> Result<()> {
        match self {
            ListOp::InsertAt { index, .. } if *index > list.len() => {
                Err(StructureError::IndexOutOfRange {
                    index: *index,
                    len: list.len(),
                })
            }
            _ => Ok(()),
        }
    }
}

impl<T: Display + PartialEq> ListOp<T> {
    /// Apply to `list` and describe the result.
    pub fn apply(self, list: &mut LinkedList<T>) -> Outcome {
        match self {
            ListOp::Append(value) => {
                let message = format!("Appended {} to the end of the list", value);
                list.append(value);
                Outcome::changed(message)
            }
            ListOp::Prepend(value) => {
                let message = format!("Prepended {} to the beginning of the list", value);
                list.prepend(value);
                Outcome::changed(message)
            }
            ListOp::InsertAt { value, index } => {
                let message = format!("Inserted {} at position {}", value, index);
                match list.insert_at(index, value) {
                    Ok(()) => Outcome::changed(message),
                    Err(e) => Outcome::unchanged(e.to_string()),
                }
            }
            ListOp::Remove(value) => match list.remove(&value) {
                Some(removed) => Outcome::changed(format!("Removed {} from the list", removed)),
                None => Outcome::unchanged(format!("Value {} not found in the list", value)),
            },
            ListOp::RemoveHead => match list.remove_head() {
                Some(v) => Outcome::changed(format!("Removed {} from the head of the list", v)),
                None => Outcome::unchanged("The list is empty"),
            },
            ListOp::RemoveTail => match list.remove_tail() {
                Some(v) => Outcome::changed(format!("Removed {} from the tail of the list", v)),
                None => Outcome::unchanged("The list is empty"),
            },
            ListOp::Search(value) => {
                if list.contains(&value) {
                    Outcome::unchanged(format!("Found {} in the list!", value))
                } else {
                    Outcome::unchanged(format!("{} not found in the list", value))
                }
            }
            ListOp::Clear => {
                list.clear();
                Outcome::changed("List cleared".to_string())
            }
        }
    }
}
