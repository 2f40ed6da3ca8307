use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::AppError;
use crate::models::{NewTaskRequest, Priority, UpdateTaskRequest};

/// Task form contents as submitted by the quick-add bar or the task editor.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskDraft {
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub category_id: Option<i64>,
    #[serde(default)]
    pub priority: Priority,
    #[serde(default)]
    pub due_date: Option<DateTime<Utc>>,
}

impl TaskDraft {
    /// Quick-add form: title, category and priority only.
    pub fn quick(title: impl Into<String>, category_id: Option<i64>, priority: Priority) -> Self {
        Self {
            title: title.into(),
            category_id,
            priority,
            ..Self::default()
        }
    }

    /// Trims text fields and checks the required ones.
    pub fn validate(self) -> Result<NewTaskRequest, AppError> {
        let title = self.title.trim();
        if title.is_empty() {
            return Err(AppError::Validation("Title is required".to_string()));
        }
        let Some(category_id) = self.category_id else {
            return Err(AppError::Validation("Category is required".to_string()));
        };

        Ok(NewTaskRequest {
            title: title.to_string(),
            description: Some(self.description.trim().to_string()),
            category_id,
            priority: Some(self.priority),
            due_date: self.due_date,
        })
    }
}

impl From<NewTaskRequest> for UpdateTaskRequest {
    /// Editor saves overwrite every form field, including a cleared due date.
    fn from(req: NewTaskRequest) -> Self {
        Self {
            title: Some(req.title),
            description: req.description,
            category_id: Some(req.category_id),
            priority: req.priority,
            due_date: Some(req.due_date),
            completed: None,
        }
    }
}
