//! Task id generation.
//!
//! # Responsibility
//! - Produce fresh ids for newly added tasks.
//!
//! # Invariants
//! - Generators never hand out the same id twice in one session.
//! - Callers still check list membership; generators are not list-aware.

use crate::model::task::{Task, TaskId};
use uuid::Uuid;

/// Source of fresh task ids.
pub trait TaskIdGenerator {
    fn next_id(&mut self) -> TaskId;
}

impl<G: TaskIdGenerator + ?Sized> TaskIdGenerator for Box<G> {
    fn next_id(&mut self) -> TaskId {
        (**self).next_id()
    }
}

/// Monotonic decimal counter.
///
/// Used for deterministic ids in tests and for compact ids in terminal use.
/// Once `u64::MAX` has been handed out the counter is spent and further ids
/// are random UUIDs.
#[derive(Debug, Clone)]
pub struct SequentialIdGenerator {
    next: Option<u64>,
}

impl Default for SequentialIdGenerator {
    fn default() -> Self {
        Self::starting_at(1)
    }
}

impl SequentialIdGenerator {
    /// Starts counting at `first` (at least `1`).
    pub fn starting_at(first: u64) -> Self {
        Self {
            next: Some(first.max(1)),
        }
    }

    /// Starts above the greatest numeric id already present in `tasks`.
    ///
    /// Non-numeric ids are ignored; an empty list starts at `1`.
    pub fn seeded_after(tasks: &[Task]) -> Self {
        let max_seen = tasks
            .iter()
            .filter_map(|task| task.id.as_str().parse::<u64>().ok())
            .max()
            .unwrap_or(0);
        Self {
            next: max_seen.checked_add(1),
        }
    }
}

impl TaskIdGenerator for SequentialIdGenerator {
    fn next_id(&mut self) -> TaskId {
        match self.next {
            Some(id) => {
                self.next = id.checked_add(1);
                TaskId::new(id.to_string())
            }
            None => UuidIdGenerator.next_id(),
        }
    }
}

/// Random v4 UUID ids.
#[derive(Debug, Clone, Copy, Default)]
pub struct UuidIdGenerator;

impl TaskIdGenerator for UuidIdGenerator {
    fn next_id(&mut self) -> TaskId {
        TaskId::new(Uuid::new_v4().to_string())
    }
}
