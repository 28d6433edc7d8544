//! Task list manager.
//!
//! # Responsibility
//! - Own the single `TodoState` instance for a session.
//! - Load it once from the store and write it back after every change.
//! - Translate presentation intents into state transitions.
//!
//! # Invariants
//! - A `TodoService` only exists in the ready state; `initialize` is the
//!   sole constructor.
//! - Every successful add/remove is followed by exactly one persist.
//! - Store failures never roll back in-memory state and are never retried.

use crate::model::codec::{encode_tasks, CodecError};
use crate::model::id::TaskIdGenerator;
use crate::model::state::TodoState;
use crate::model::task::{Task, TaskId};
use crate::store::{KeyValueStore, StoreError, TODOS_STORAGE_KEY};
use crate::view::input::Intent;
use crate::view::TodoView;
use log::{debug, info, warn};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Failure while writing the list back to the store.
#[derive(Debug)]
pub enum PersistError {
    Encode(CodecError),
    Store(StoreError),
}

impl Display for PersistError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Encode(err) => write!(f, "{err}"),
            Self::Store(err) => write!(f, "{err}"),
        }
    }
}

impl Error for PersistError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Encode(err) => Some(err),
            Self::Store(err) => Some(err),
        }
    }
}

impl From<CodecError> for PersistError {
    fn from(value: CodecError) -> Self {
        Self::Encode(value)
    }
}

impl From<StoreError> for PersistError {
    fn from(value: StoreError) -> Self {
        Self::Store(value)
    }
}

/// Session-scoped todo list bound to one store.
pub struct TodoService<S: KeyValueStore, G: TaskIdGenerator> {
    store: S,
    ids: G,
    state: TodoState,
    last_persist_error: Option<PersistError>,
}

impl<S: KeyValueStore, G: TaskIdGenerator> TodoService<S, G> {
    /// Loads the list from `store` and normalizes the stored form.
    ///
    /// Missing, unreadable or malformed data yields an empty list; the
    /// failure is logged and otherwise absorbed.
    pub fn initialize(store: S, ids: G) -> Self {
        Self::initialize_with(store, |_| ids)
    }

    /// Like `initialize`, but builds the id generator from the loaded tasks.
    ///
    /// Used to seed counters past ids persisted by an earlier session.
    pub fn initialize_with(store: S, make_ids: impl FnOnce(&[Task]) -> G) -> Self {
        let state = load_state(&store);
        let ids = make_ids(state.tasks());
        info!(
            "event=todo_init module=service status=ok task_count={}",
            state.tasks().len()
        );

        let mut service = Self {
            store,
            ids,
            state,
            last_persist_error: None,
        };
        service.persist_best_effort();
        service
    }

    /// Replaces the draft verbatim.
    pub fn set_draft(&mut self, text: impl Into<String>) {
        self.replace_state(|state, _| state.with_draft(text));
    }

    /// Adds the trimmed draft as a new task and persists.
    ///
    /// Returns `None`, with nothing changed or written, when the trimmed
    /// draft is empty.
    pub fn add_task(&mut self) -> Option<TaskId> {
        let mut added = None;
        self.replace_state(|state, ids| {
            let (next, id) = state.add_task(ids);
            added = id;
            next
        });

        let id = added?;
        info!(
            "event=task_add module=service status=ok task_id={} task_count={}",
            id,
            self.state.tasks().len()
        );
        self.persist_best_effort();
        Some(id)
    }

    /// Removes the task with `id` and persists.
    ///
    /// Unknown ids are ignored and nothing is written.
    pub fn remove_task(&mut self, id: &TaskId) -> bool {
        let mut removed = false;
        self.replace_state(|state, _| {
            let (next, hit) = state.remove_task(id);
            removed = hit;
            next
        });

        if !removed {
            debug!("event=task_remove module=service status=skipped task_id={id}");
            return false;
        }
        info!(
            "event=task_remove module=service status=ok task_id={} task_count={}",
            id,
            self.state.tasks().len()
        );
        self.persist_best_effort();
        true
    }

    /// Writes the whole list under the fixed key, overwriting prior content.
    pub fn persist(&mut self) -> Result<(), PersistError> {
        let encoded = encode_tasks(self.state.tasks())?;
        self.store.set(TODOS_STORAGE_KEY, &encoded)?;
        Ok(())
    }

    /// Dispatches a presentation intent. Returns whether the list changed.
    pub fn apply(&mut self, intent: Intent) -> bool {
        match intent {
            Intent::DraftChanged(text) => {
                self.set_draft(text);
                false
            }
            Intent::AddRequested => self.add_task().is_some(),
            Intent::RemoveRequested(id) => self.remove_task(&id),
        }
    }

    pub fn tasks(&self) -> &[Task] {
        self.state.tasks()
    }

    pub fn draft(&self) -> &str {
        self.state.draft()
    }

    pub fn can_add(&self) -> bool {
        self.state.can_add()
    }

    pub fn len(&self) -> usize {
        self.state.tasks().len()
    }

    pub fn is_empty(&self) -> bool {
        self.state.tasks().is_empty()
    }

    pub fn state(&self) -> &TodoState {
        &self.state
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Builds the presentation model for the current state.
    pub fn view(&self) -> TodoView {
        TodoView::from_state(&self.state)
    }

    /// Error from the most recent automatic persist, if it failed.
    pub fn last_persist_error(&self) -> Option<&PersistError> {
        self.last_persist_error.as_ref()
    }

    /// Takes the pending automatic-persist error so it is reported once.
    pub fn take_persist_error(&mut self) -> Option<PersistError> {
        self.last_persist_error.take()
    }

    fn replace_state(&mut self, transition: impl FnOnce(TodoState, &mut G) -> TodoState) {
        let current = std::mem::take(&mut self.state);
        self.state = transition(current, &mut self.ids);
    }

    fn persist_best_effort(&mut self) {
        match self.persist() {
            Ok(()) => {
                self.last_persist_error = None;
            }
            Err(err) => {
                warn!(
                    "event=todo_persist module=service status=error task_count={} error={}",
                    self.state.tasks().len(),
                    err
                );
                self.last_persist_error = Some(err);
            }
        }
    }
}

fn load_state(store: &impl KeyValueStore) -> TodoState {
    let raw = match store.get(TODOS_STORAGE_KEY) {
        Ok(raw) => raw,
        Err(err) => {
            warn!(
                "event=todo_load module=service status=fallback error_code=store_read_failed error={err}"
            );
            return TodoState::default();
        }
    };

    TodoState::from_stored(raw.as_deref()).unwrap_or_else(|err| {
        warn!(
            "event=todo_load module=service status=fallback error_code=malformed_data error={err}"
        );
        TodoState::default()
    })
}
