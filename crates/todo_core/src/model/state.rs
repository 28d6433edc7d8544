//! Owned todo state and its pure transitions.
//!
//! # Responsibility
//! - Hold the ordered task list and the pending draft.
//! - Expose add/remove/draft transitions that consume a state and return the
//!   next one, without touching storage.
//!
//! # Invariants
//! - Ids are unique within `tasks`.
//! - Every task added through `add_task` has trimmed, non-empty text.
//! - Insertion order is preserved; removal keeps relative order.

use crate::model::codec::{decode_tasks, CodecResult};
use crate::model::id::TaskIdGenerator;
use crate::model::task::{Task, TaskId};
use log::error;

const MAX_ID_ATTEMPTS: usize = 64;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TodoState {
    tasks: Vec<Task>,
    draft: String,
}

impl TodoState {
    /// Creates a ready state holding `tasks` and an empty draft.
    pub fn from_tasks(tasks: Vec<Task>) -> Self {
        Self {
            tasks,
            draft: String::new(),
        }
    }

    /// Builds the initial state from a stored value.
    ///
    /// `None` yields an empty list. A present value must decode completely.
    pub fn from_stored(raw: Option<&str>) -> CodecResult<Self> {
        match raw {
            Some(raw) => Ok(Self::from_tasks(decode_tasks(raw)?)),
            None => Ok(Self::default()),
        }
    }

    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn draft(&self) -> &str {
        &self.draft
    }

    /// Whether the add action is currently enabled.
    pub fn can_add(&self) -> bool {
        !self.draft.trim().is_empty()
    }

    pub fn contains(&self, id: &TaskId) -> bool {
        self.tasks.iter().any(|task| &task.id == id)
    }

    /// Replaces the draft verbatim.
    pub fn with_draft(mut self, text: impl Into<String>) -> Self {
        self.draft = text.into();
        self
    }

    /// Appends a task built from the trimmed draft and clears the draft.
    ///
    /// Returns the unchanged state and `None` when the draft is blank, or
    /// when `ids` keeps producing ids already present in the list.
    pub fn add_task(mut self, ids: &mut dyn TaskIdGenerator) -> (Self, Option<TaskId>) {
        if !self.can_add() {
            return (self, None);
        }

        let Some(id) = self.fresh_id(ids) else {
            error!(
                "event=task_add module=state status=error error_code=id_exhausted attempts={}",
                MAX_ID_ATTEMPTS
            );
            return (self, None);
        };

        let task = match Task::new(id.clone(), &self.draft) {
            Ok(task) => task,
            Err(_) => return (self, None),
        };
        self.tasks.push(task);
        self.draft.clear();
        (self, Some(id))
    }

    /// Removes every task with `id`. Returns whether anything was removed.
    pub fn remove_task(mut self, id: &TaskId) -> (Self, bool) {
        let before = self.tasks.len();
        self.tasks.retain(|task| &task.id != id);
        let removed = self.tasks.len() != before;
        (self, removed)
    }

    fn fresh_id(&self, ids: &mut dyn TaskIdGenerator) -> Option<TaskId> {
        (0..MAX_ID_ATTEMPTS)
            .map(|_| ids.next_id())
            .find(|candidate| !self.contains(candidate))
    }
}
