//! AlgoLab Structures
//!
//! The linear data structures shown in the lab: a LIFO stack, a FIFO queue
//! and a singly linked list.
//!
//! # Operations
//!
//! Each structure can be driven directly through its methods, or through an
//! operation enum ([`StackOp`], [`QueueOp`], [`ListOp`]) whose `apply` returns
//! an [`Outcome`] carrying the message shown to the learner:
//!
//! ```
//! use algolab_structures::{Stack, StackOp};
//!
//! let mut stack = Stack::new();
//! let outcome = StackOp::Push(5).apply(&mut stack);
//! assert_eq!(outcome.message, "Pushed 5 onto the stack");
//! assert_eq!(StackOp::Peek.apply(&mut stack).message, "Top of the stack: 5");
//! ```

mod error;
mod linked_list;
mod ops;
mod queue;
mod stack;

pub use error::{Result, StructureError};
pub use linked_list::{Address, LinkedList, ListEntry};
pub use ops::{ListOp, Outcome, QueueOp, StackOp};
pub use queue::Queue;
pub use stack::Stack;
