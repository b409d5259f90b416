//! Interactive stack, queue and linked list shown next to the algorithms.

use algolab_structures::{LinkedList, ListOp, Outcome, Queue, QueueOp, Stack, StackOp};
use serde::{Deserialize, Serialize};

use crate::error::Result;

/// Which structure a view describes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StructureKind {
    Stack,
    Queue,
    List,
}

/// Contents of a structure after an operation, plus the message to show.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StructureView {
    pub structure: StructureKind,
    /// Stack bottom-to-top, queue front-to-back, list head-to-tail.
    pub items: Vec<i64>,
    /// Node addresses, list only.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub addresses: Vec<String>,
    pub message: String,
    pub changed: bool,
}

/// One instance of each structure.
#[derive(Debug, Default)]
pub struct Workbench {
    stack: Stack<i64>,
    queue: Queue<i64>,
    list: LinkedList<i64>,
}

impl Workbench {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn apply_stack(&mut self, op: StackOp<i64>) -> StructureView {
        let outcome = op.apply(&mut self.stack);
        self.view_with(StructureKind::Stack, outcome)
    }

    pub fn apply_queue(&mut self, op: QueueOp<i64>) -> StructureView {
        let outcome = op.apply(&mut self.queue);
        self.view_with(StructureKind::Queue, outcome)
    }

    /// Out-of-range insert positions are rejected before anything changes.
    pub fn apply_list(&mut self, op: ListOp<i64>) -> Result<StructureView> {
        op.validate(&self.list)?;
        let outcome = op.apply(&mut self.list);
        Ok(self.view_with(StructureKind::List, outcome))
    }

    /// Current contents without a message.
    pub fn view(&self, structure: StructureKind) -> StructureView {
        self.view_with(
            structure,
            Outcome {
                message: String::new(),
                changed: false,
            },
        )
    }

    fn view_with(&self, structure: StructureKind, outcome: Outcome) -> StructureView {
        let (items, addresses) = match structure {
            StructureKind::Stack => (self.stack.to_vec(), Vec::new()),
            StructureKind::Queue => (self.queue.to_vec(), Vec::new()),
            StructureKind::List => self
                .list
                .entries()
                .into_iter()
                .map(|entry| (entry.value, entry.address.to_string()))
                .unzip(),
        };
        StructureView {
            structure,
            items,
            addresses,
            message: outcome.message,
            changed: outcome.changed,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    #[test]
    fn stack_view_is_bottom_to_top() {
        let mut bench = Workbench::new();
        bench.apply_stack(StackOp::Push(1));
        let view = bench.apply_stack(StackOp::Push(2));

        assert_eq!(view.items, vec![1, 2]);
        assert_eq!(view.message, "Pushed 2 onto the stack");
        assert!(view.addresses.is_empty());
    }

    #[test]
    fn queue_peek_does_not_change() {
        let mut bench = Workbench::new();
        bench.apply_queue(QueueOp::Enqueue(4));
        let view = bench.apply_queue(QueueOp::Peek);

        assert_eq!(view.message, "Front of the queue: 4");
        assert!(!view.changed);
        assert_eq!(bench.view(StructureKind::Queue).items, vec![4]);
    }

    #[test]
    fn list_view_carries_addresses() {
        let mut bench = Workbench::new();
        bench.apply_list(ListOp::Append(10)).unwrap();
        let view = bench.apply_list(ListOp::Prepend(5)).unwrap();

        assert_eq!(view.items, vec![5, 10]);
        assert_eq!(view.addresses.len(), 2);
        assert_eq!(view.addresses[1], "0x00a000");
    }

    #[test]
    fn list_rejects_bad_index() {
        let mut bench = Workbench::new();
        let err = bench
            .apply_list(ListOp::InsertAt { value: 1, index: 4 })
            .unwrap_err();

        assert!(matches!(err, Error::Structure(_)));
        assert_eq!(err.to_string(), "Invalid index: 4. Valid range: 0-0");
        assert!(bench.view(StructureKind::List).items.is_empty());
    }
}
