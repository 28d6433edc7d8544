//! Input handling for the draft field.
//!
//! Maps raw front-end events to the intents the manager understands. The
//! Enter shortcut is suppressed while an IME composition is in progress, so
//! confirming a candidate does not submit the draft.

use crate::model::task::TaskId;

/// User intent forwarded to `TodoService::apply`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Intent {
    DraftChanged(String),
    AddRequested,
    RemoveRequested(TaskId),
}

/// Key presses the draft field reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Enter,
    Other,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct InputController {
    composing: bool,
}

impl InputController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn composition_start(&mut self) {
        self.composing = true;
    }

    pub fn composition_end(&mut self) {
        self.composing = false;
    }

    pub fn is_composing(&self) -> bool {
        self.composing
    }

    pub fn on_change(&self, text: impl Into<String>) -> Intent {
        Intent::DraftChanged(text.into())
    }

    /// Enter requests an add only with a non-blank draft and no active
    /// composition. Every other key is ignored.
    pub fn on_key(&self, key: Key, draft: &str) -> Option<Intent> {
        match key {
            Key::Enter if !self.composing && !draft.trim().is_empty() => {
                Some(Intent::AddRequested)
            }
            _ => None,
        }
    }

    /// The add control is disabled for a blank draft.
    pub fn on_add_clicked(&self, draft: &str) -> Option<Intent> {
        (!draft.trim().is_empty()).then_some(Intent::AddRequested)
    }

    pub fn on_complete_clicked(&self, id: TaskId) -> Intent {
        Intent::RemoveRequested(id)
    }
}
