//! Presentation model for todo front-ends.
//!
//! # Responsibility
//! - Project `TodoState` into what a front-end draws: rows, draft, add
//!   button state and the empty-list placeholder.
//! - Provide a plain-text rendering for terminal front-ends.
//!
//! # Invariants
//! - `empty_placeholder` is set exactly when there are no rows.
//! - `add_enabled` mirrors `TodoState::can_add`.

pub mod input;

use crate::model::state::TodoState;
use crate::model::task::TaskId;
use std::fmt::Write as _;

pub const APP_TITLE: &str = "TODO App";
pub const INPUT_PLACEHOLDER: &str = "Add a new todo...";
pub const EMPTY_LIST_MESSAGE: &str = "No todos yet. Add one above!";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TodoRow {
    pub id: TaskId,
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TodoView {
    pub title: &'static str,
    pub input_placeholder: &'static str,
    pub draft: String,
    pub add_enabled: bool,
    pub rows: Vec<TodoRow>,
    pub empty_placeholder: Option<&'static str>,
}

impl TodoView {
    pub fn from_state(state: &TodoState) -> Self {
        let rows: Vec<TodoRow> = state
            .tasks()
            .iter()
            .map(|task| TodoRow {
                id: task.id.clone(),
                text: task.text.clone(),
            })
            .collect();
        let empty_placeholder = rows.is_empty().then_some(EMPTY_LIST_MESSAGE);

        Self {
            title: APP_TITLE,
            input_placeholder: INPUT_PLACEHOLDER,
            draft: state.draft().to_string(),
            add_enabled: state.can_add(),
            rows,
            empty_placeholder,
        }
    }
}

/// Renders the list as terminal text: a title line, then one numbered row
/// per task with its id, or the placeholder.
pub fn render_text(view: &TodoView) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}", view.title);
    if let Some(placeholder) = view.empty_placeholder {
        let _ = writeln!(out, "  {placeholder}");
        return out;
    }
    for (index, row) in view.rows.iter().enumerate() {
        let _ = writeln!(out, "  {:>2}. {}  [{}]", index + 1, row.text, row.id);
    }
    out
}
