//! Todo domain model.
//!
//! # Responsibility
//! - Define the task record, id generation and the persisted list format.
//! - Hold the owned state value and its pure transitions.
//!
//! # Invariants
//! - Every task is identified by a `TaskId` unique within its list.
//! - Removal is a hard delete; there are no tombstones.

pub mod codec;
pub mod id;
pub mod state;
pub mod task;
