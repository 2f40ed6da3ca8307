use std::collections::HashMap;
use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::{info, warn};

use crate::due::{DueLabel, due_label, is_due_soon};
use crate::error::AppError;
use crate::models::{Category, Task, UpdateTaskRequest};
use crate::query::{self, TaskCounts, TaskQuery};
use crate::services::validation::TaskDraft;
use crate::store::{CategoryRepository, TaskRepository};

/// Sidebar row: a category with its live open-task count.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategorySummary {
    #[serde(flatten)]
    pub category: Category,
    pub pending: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Sidebar {
    pub categories: Vec<CategorySummary>,
    pub total_pending: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskCard {
    #[serde(flatten)]
    pub task: Task,
    pub category_name: Option<String>,
    pub due_label: Option<DueLabel>,
    /// Open task that is overdue or due within a day.
    pub due_soon: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TaskView {
    pub tasks: Vec<TaskCard>,
    pub counts: TaskCounts,
}

/// Operations the dashboard performs against the two stores.
#[derive(Clone)]
pub struct TaskBoard {
    categories: Arc<dyn CategoryRepository>,
    tasks: Arc<dyn TaskRepository>,
    enforce_category: bool,
}

impl TaskBoard {
    pub fn new(categories: Arc<dyn CategoryRepository>, tasks: Arc<dyn TaskRepository>) -> Self {
        Self {
            categories,
            tasks,
            enforce_category: false,
        }
    }

    /// Reject drafts whose category id does not exist.
    pub fn enforce_category(mut self, enforce: bool) -> Self {
        self.enforce_category = enforce;
        self
    }

    pub async fn add_task(&self, draft: TaskDraft) -> Result<Task, AppError> {
        let req = draft.validate()?;
        self.check_category(req.category_id).await?;

        let task = self.tasks.create(req).await?;
        info!("Task added: {} ({})", task.id, task.title);
        Ok(task)
    }

    pub async fn edit_task(&self, id: i64, draft: TaskDraft) -> Result<Task, AppError> {
        let req = draft.validate()?;
        self.check_category(req.category_id).await?;

        self.tasks
            .update(id, UpdateTaskRequest::from(req))
            .await?
            .ok_or(AppError::NotFound)
    }

    pub async fn toggle_complete(&self, id: i64, completed: bool) -> Result<Task, AppError> {
        let task = self
            .tasks
            .update(id, UpdateTaskRequest::completed(completed))
            .await?
            .ok_or(AppError::NotFound)?;

        if completed {
            info!("Task completed: {}", id);
        } else {
            info!("Task marked as pending: {}", id);
        }
        Ok(task)
    }

    pub async fn delete_task(&self, id: i64) -> Result<(), AppError> {
        if self.tasks.delete(id).await? {
            info!("Task deleted: {}", id);
            Ok(())
        } else {
            Err(AppError::NotFound)
        }
    }

    /// Filtered, ordered cards for one category (or all), plus tab counts
    /// over the whole loaded set.
    pub async fn task_view(
        &self,
        category: Option<i64>,
        query: &TaskQuery,
        now: DateTime<Utc>,
    ) -> Result<TaskView, AppError> {
        let load_tasks = async {
            match category {
                Some(category_id) => self.tasks.get_by_category(category_id).await,
                None => self.tasks.get_all().await,
            }
        };
        let (tasks, categories) = tokio::try_join!(load_tasks, self.categories.get_all())?;

        let counts = TaskCounts::from_tasks(&tasks);
        let names: HashMap<i64, String> = categories.into_iter().map(|c| (c.id, c.name)).collect();

        let cards = query::apply(tasks, query)
            .into_iter()
            .map(|task| {
                let due_label = task.due_date.map(|due| due_label(due, now));
                let due_soon = !task.completed && task.due_date.is_some_and(|due| is_due_soon(due, now));
                TaskCard {
                    category_name: names.get(&task.category_id).cloned(),
                    due_label,
                    due_soon,
                    task,
                }
            })
            .collect();

        Ok(TaskView { tasks: cards, counts })
    }

    /// Categories with open-task counts computed from the task collection.
    pub async fn sidebar(&self) -> Result<Sidebar, AppError> {
        let (categories, tasks) = tokio::try_join!(self.categories.get_all(), self.tasks.get_all())?;
        let pending = query::pending_by_category(&tasks);

        let categories: Vec<CategorySummary> = categories
            .into_iter()
            .map(|category| CategorySummary {
                pending: pending.get(&category.id).copied().unwrap_or(0),
                category,
            })
            .collect();
        let total_pending = categories.iter().map(|c| c.pending).sum();

        Ok(Sidebar {
            categories,
            total_pending,
        })
    }

    /// Writes live open-task counts into each category's stored `task_count`.
    /// Returns how many categories changed.
    pub async fn sync_task_counts(&self) -> Result<usize, AppError> {
        let sidebar = self.sidebar().await?;
        let mut refreshed = 0;

        for summary in sidebar.categories {
            if summary.category.task_count == summary.pending {
                continue;
            }
            match self.categories.update_task_count(summary.category.id, summary.pending).await? {
                Some(_) => refreshed += 1,
                None => warn!("Category {} vanished during count sync", summary.category.id),
            }
        }

        info!("Synced task counts for {} categories", refreshed);
        Ok(refreshed)
    }

    async fn check_category(&self, category_id: i64) -> Result<(), AppError> {
        if !self.enforce_category {
            return Ok(());
        }
        match self.categories.get_by_id(category_id).await? {
            Some(_) => Ok(()),
            None => Err(AppError::UnknownCategory(category_id)),
        }
    }
}
