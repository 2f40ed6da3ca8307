use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::deserialize_nullable;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    Low,
    #[default]
    Medium,
    High,
}

impl Priority {
    /// Sort weight: high=3, medium=2, low=1.
    pub fn rank(self) -> u8 {
        match self {
            Priority::Low => 1,
            Priority::Medium => 2,
            Priority::High => 3,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Priority::Low => "low",
            Priority::Medium => "medium",
            Priority::High => "high",
        }
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    #[serde(rename = "Id")]
    pub id: i64,
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub category_id: i64,
    #[serde(default)]
    pub priority: Priority,
    #[serde(default)]
    pub due_date: Option<DateTime<Utc>>,
    #[serde(default)]
    pub completed: bool,
    pub created_at: DateTime<Utc>,
    #[serde(default)]
    pub completed_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewTaskRequest {
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    pub category_id: i64,
    #[serde(default)]
    pub priority: Option<Priority>,
    #[serde(default)]
    pub due_date: Option<DateTime<Utc>>,
}

impl NewTaskRequest {
    pub fn new(title: impl Into<String>, category_id: i64) -> Self {
        Self {
            title: title.into(),
            description: None,
            category_id,
            priority: None,
            due_date: None,
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateTaskRequest {
    pub title: Option<String>,
    pub description: Option<String>,
    pub category_id: Option<i64>,
    pub priority: Option<Priority>,
    #[serde(default, deserialize_with = "deserialize_nullable")]
    pub due_date: Option<Option<DateTime<Utc>>>,
    pub completed: Option<bool>,
}

impl UpdateTaskRequest {
    pub fn completed(completed: bool) -> Self {
        Self {
            completed: Some(completed),
            ..Self::default()
        }
    }
}

impl Task {
    pub fn from_request(id: i64, req: NewTaskRequest, now: DateTime<Utc>) -> Self {
        Self {
            id,
            title: req.title,
            description: req.description.unwrap_or_default(),
            category_id: req.category_id,
            priority: req.priority.unwrap_or_default(),
            due_date: req.due_date,
            completed: false,
            created_at: now,
            completed_at: None,
        }
    }

    /// Merges the present fields of `req`. `completed_at` follows the
    /// completion flag only when it actually flips.
    pub fn apply(&mut self, req: UpdateTaskRequest, now: DateTime<Utc>) {
        if let Some(title) = req.title {
            self.title = title;
        }
        if let Some(description) = req.description {
            self.description = description;
        }
        if let Some(category_id) = req.category_id {
            self.category_id = category_id;
        }
        if let Some(priority) = req.priority {
            self.priority = priority;
        }
        if let Some(due_date) = req.due_date {
            self.due_date = due_date;
        }
        if let Some(completed) = req.completed {
            match (self.completed, completed) {
                (false, true) => self.completed_at = Some(now),
                (true, false) => self.completed_at = None,
                _ => {}
            }
            self.completed = completed;
        }
    }

    /// Case-insensitive substring match on title or description.
    /// `needle` must already be lowercase.
    pub fn matches(&self, needle: &str) -> bool {
        self.title.to_lowercase().contains(needle) || self.description.to_lowercase().contains(needle)
    }
}
