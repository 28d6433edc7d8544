//! Core domain logic for the todo list.
//! This crate owns the list invariants; front-ends only render and forward intents.

pub mod db;
pub mod logging;
pub mod model;
pub mod service;
pub mod store;
pub mod view;

pub use logging::{default_log_level, init_logging, logging_status, LoggingError};
pub use model::codec::{decode_tasks, encode_tasks, CodecError, CodecResult};
pub use model::id::{SequentialIdGenerator, TaskIdGenerator, UuidIdGenerator};
pub use model::state::TodoState;
pub use model::task::{Task, TaskId, TaskValidationError};
pub use service::todo_service::{PersistError, TodoService};
pub use store::{
    KeyValueStore, MemoryStore, SqliteStore, StoreError, StoreResult, TODOS_STORAGE_KEY,
};
pub use view::input::{InputController, Intent, Key};
pub use view::{render_text, TodoRow, TodoView, EMPTY_LIST_MESSAGE};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::core_version;

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
