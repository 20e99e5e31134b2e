use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use utoipa::ToSchema;

use crate::error::{TodoError, TodoResult};

/// A persisted todo item
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Todo {
    /// Store-assigned, positive and never reused
    #[schema(example = 1)]
    pub id: i32,
    /// Trimmed, never empty
    #[schema(example = "buy milk")]
    pub title: String,
    pub done: bool,
    /// Assigned by the store at insert time
    pub created_at: DateTime<Utc>,
}

/// Body of `POST /api/todos`
///
/// Kept untyped so that a wrong JSON type surfaces as a validation message
/// instead of a deserialization failure.
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
pub struct CreateTodoRequest {
    #[serde(default, deserialize_with = "present")]
    #[schema(value_type = Option<String>, example = "buy milk")]
    pub title: Option<Value>,
}

/// Body of `PATCH /api/todos/{id}`
///
/// A key that is present, even with `null`, counts as supplied.
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
pub struct UpdateTodoRequest {
    #[serde(default, deserialize_with = "present")]
    #[schema(value_type = Option<String>, example = "buy oat milk")]
    pub title: Option<Value>,

    #[serde(default, deserialize_with = "present")]
    #[schema(value_type = Option<bool>, example = true)]
    pub done: Option<Value>,
}

fn present<'de, D>(deserializer: D) -> Result<Option<Value>, D::Error>
where
    D: Deserializer<'de>,
{
    Value::deserialize(deserializer).map(Some)
}

/// Validated input for an insert
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewTodo {
    pub title: String,
}

/// Validated partial update; at least one field is set
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UpdateTodo {
    pub title: Option<String>,
    pub done: Option<bool>,
}

impl UpdateTodo {
    pub fn is_empty(&self) -> bool {
        self.title.is_none() && self.done.is_none()
    }
}

impl TryFrom<CreateTodoRequest> for NewTodo {
    type Error = TodoError;

    fn try_from(request: CreateTodoRequest) -> TodoResult<Self> {
        let title = match request.title {
            Some(Value::String(title)) => title.trim().to_string(),
            _ => String::new(),
        };

        if title.is_empty() {
            return Err(TodoError::validation("title required"));
        }

        Ok(NewTodo { title })
    }
}

impl TryFrom<UpdateTodoRequest> for UpdateTodo {
    type Error = TodoError;

    fn try_from(request: UpdateTodoRequest) -> TodoResult<Self> {
        if request.title.is_none() && request.done.is_none() {
            return Err(TodoError::validation("nothing to update"));
        }

        let title = match request.title {
            None => None,
            Some(raw) => {
                let title = match raw {
                    Value::String(title) => title.trim().to_string(),
                    _ => String::new(),
                };
                if title.is_empty() {
                    return Err(TodoError::validation("title cannot be empty"));
                }
                Some(title)
            }
        };

        let done = match request.done {
            None => None,
            Some(Value::Bool(done)) => Some(done),
            Some(_) => return Err(TodoError::validation("done must be boolean")),
        };

        Ok(UpdateTodo { title, done })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn create(body: Value) -> TodoResult<NewTodo> {
        NewTodo::try_from(serde_json::from_value::<CreateTodoRequest>(body).unwrap())
    }

    fn update(body: Value) -> TodoResult<UpdateTodo> {
        UpdateTodo::try_from(serde_json::from_value::<UpdateTodoRequest>(body).unwrap())
    }

    fn message(result: TodoResult<impl std::fmt::Debug>) -> String {
        match result.unwrap_err() {
            TodoError::Validation(msg) => msg,
            other => panic!("expected validation error, got {other:?}"),
        }
    }

    #[test]
    fn test_present_null_is_distinct_from_absent() {
        let absent: UpdateTodoRequest = serde_json::from_value(json!({})).unwrap();
        let null: UpdateTodoRequest = serde_json::from_value(json!({ "title": null })).unwrap();

        assert!(absent.title.is_none());
        assert_eq!(null.title, Some(Value::Null));
    }

    #[test]
    fn test_create_trims_title() {
        let todo = create(json!({ "title": "  buy milk \n" })).unwrap();
        assert_eq!(todo.title, "buy milk");
    }

    #[test]
    fn test_create_rejects_missing_blank_and_non_string_titles() {
        for body in [
            json!({}),
            json!({ "title": "   " }),
            json!({ "title": null }),
            json!({ "title": 42 }),
            json!({ "title": ["a"] }),
        ] {
            assert_eq!(message(create(body)), "title required");
        }
    }

    #[test]
    fn test_update_requires_a_field() {
        assert_eq!(message(update(json!({}))), "nothing to update");
        assert_eq!(message(update(json!({ "other": 1 }))), "nothing to update");
    }

    #[test]
    fn test_update_rejects_empty_title() {
        assert_eq!(message(update(json!({ "title": " " }))), "title cannot be empty");
        assert_eq!(message(update(json!({ "title": 5 }))), "title cannot be empty");
        assert_eq!(message(update(json!({ "title": null }))), "title cannot be empty");
    }

    #[test]
    fn test_update_rejects_non_boolean_done() {
        assert_eq!(message(update(json!({ "done": "yes" }))), "done must be boolean");
        assert_eq!(message(update(json!({ "done": 1 }))), "done must be boolean");
        assert_eq!(message(update(json!({ "done": null }))), "done must be boolean");
    }

    #[test]
    fn test_update_checks_title_before_done() {
        let err = update(json!({ "title": "", "done": "nope" }));
        assert_eq!(message(err), "title cannot be empty");
    }

    #[test]
    fn test_update_accepts_partial_fields() {
        assert_eq!(
            update(json!({ "done": true })).unwrap(),
            UpdateTodo { title: None, done: Some(true) }
        );
        assert_eq!(
            update(json!({ "title": " x ", "done": false })).unwrap(),
            UpdateTodo { title: Some("x".to_string()), done: Some(false) }
        );
    }

    #[test]
    fn test_todo_serializes_expected_keys() {
        let todo = Todo {
            id: 1,
            title: "buy milk".to_string(),
            done: false,
            created_at: DateTime::parse_from_rfc3339("2026-01-01T10:00:00Z")
                .unwrap()
                .with_timezone(&Utc),
        };

        let value = serde_json::to_value(&todo).unwrap();
        assert_eq!(
            value,
            json!({
                "id": 1,
                "title": "buy milk",
                "done": false,
                "created_at": "2026-01-01T10:00:00Z"
            })
        );
    }
}
