//! Persisted list format.
//!
//! The stored value is a JSON array of `{"id", "text"}` objects in list
//! order, e.g. `[{"id":"1","text":"Buy milk"}]`.

use crate::model::task::Task;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type CodecResult<T> = Result<T, CodecError>;

/// Serialization failure for the persisted list.
#[derive(Debug)]
pub enum CodecError {
    Encode(serde_json::Error),
    Decode(serde_json::Error),
}

impl Display for CodecError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Encode(err) => write!(f, "failed to encode task list: {err}"),
            Self::Decode(err) => write!(f, "failed to decode task list: {err}"),
        }
    }
}

impl Error for CodecError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Encode(err) | Self::Decode(err) => Some(err),
        }
    }
}

/// Serializes the whole list as a compact JSON array.
pub fn encode_tasks(tasks: &[Task]) -> CodecResult<String> {
    serde_json::to_string(tasks).map_err(CodecError::Encode)
}

/// Parses a stored list.
///
/// All-or-nothing: one malformed entry fails the whole decode. Anything
/// that is not an array (including `null`) is an error.
pub fn decode_tasks(raw: &str) -> CodecResult<Vec<Task>> {
    serde_json::from_str(raw).map_err(CodecError::Decode)
}

#[cfg(test)]
mod tests {
    use super::{decode_tasks, encode_tasks};
    use crate::model::task::{Task, TaskId};

    #[test]
    fn encodes_in_list_order_with_wire_field_names() {
        let tasks = vec![
            Task::new(TaskId::from("1"), "Buy milk").unwrap(),
            Task::new(TaskId::from("2"), "Walk dog").unwrap(),
        ];
        assert_eq!(
            encode_tasks(&tasks).unwrap(),
            r#"[{"id":"1","text":"Buy milk"},{"id":"2","text":"Walk dog"}]"#
        );
    }

    #[test]
    fn decode_rejects_non_arrays_and_partial_entries() {
        assert!(decode_tasks("null").is_err());
        assert!(decode_tasks(r#"{"id":"1","text":"x"}"#).is_err());
        assert!(decode_tasks(r#"[{"id":"1","text":"ok"},{"id":2,"text":"bad"}]"#).is_err());
        assert!(decode_tasks("not json").is_err());
    }

    #[test]
    fn decode_ignores_unknown_fields() {
        let tasks = decode_tasks(r#"[{"id":"9","text":"Saved","done":false}]"#).unwrap();
        assert_eq!(tasks.len(), 1);
        assert_eq!(tasks[0].id.as_str(), "9");
    }
}
