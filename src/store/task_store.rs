use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;
use tracing::debug;

use crate::error::AppError;
use crate::models::{NewTaskRequest, Task, UpdateTaskRequest};
use crate::store::{Latency, TaskRepository, next_id};

const GET_ALL_MS: u64 = 300;
const GET_BY_ID_MS: u64 = 200;
const CREATE_MS: u64 = 250;
const UPDATE_MS: u64 = 200;
const DELETE_MS: u64 = 200;
const FILTER_MS: u64 = 250;
const SEARCH_MS: u64 = 200;

/// Process-memory task collection. Category ids are stored as given;
/// nothing checks that the category exists.
pub struct InMemoryTaskStore {
    tasks: RwLock<Vec<Task>>,
    latency: Latency,
}

impl InMemoryTaskStore {
    pub fn new(latency: Latency) -> Self {
        Self::with_records(Vec::new(), latency)
    }

    pub fn with_records(tasks: Vec<Task>, latency: Latency) -> Self {
        Self {
            tasks: RwLock::new(tasks),
            latency,
        }
    }

    async fn select(&self, predicate: impl Fn(&Task) -> bool) -> Vec<Task> {
        self.tasks
            .read()
            .await
            .iter()
            .filter(|t| predicate(t))
            .cloned()
            .collect()
    }
}

#[async_trait]
impl TaskRepository for InMemoryTaskStore {
    async fn get_all(&self) -> Result<Vec<Task>, AppError> {
        self.latency.wait(GET_ALL_MS).await;
        Ok(self.tasks.read().await.clone())
    }

    async fn get_by_id(&self, id: i64) -> Result<Option<Task>, AppError> {
        self.latency.wait(GET_BY_ID_MS).await;
        let tasks = self.tasks.read().await;
        Ok(tasks.iter().find(|t| t.id == id).cloned())
    }

    async fn create(&self, req: NewTaskRequest) -> Result<Task, AppError> {
        self.latency.wait(CREATE_MS).await;
        let mut tasks = self.tasks.write().await;

        let task = Task::from_request(next_id(&tasks, |t| t.id), req, Utc::now());
        tasks.push(task.clone());

        debug!("created task {} in category {} ({})", task.id, task.category_id, task.priority);
        Ok(task)
    }

    async fn update(&self, id: i64, req: UpdateTaskRequest) -> Result<Option<Task>, AppError> {
        self.latency.wait(UPDATE_MS).await;
        let mut tasks = self.tasks.write().await;

        let Some(current) = tasks.iter_mut().find(|t| t.id == id) else {
            debug!("update skipped, task {} not found", id);
            return Ok(None);
        };
        current.apply(req, Utc::now());

        debug!("updated task {} (completed: {})", id, current.completed);
        Ok(Some(current.clone()))
    }

    async fn delete(&self, id: i64) -> Result<bool, AppError> {
        self.latency.wait(DELETE_MS).await;
        let mut tasks = self.tasks.write().await;

        let Some(index) = tasks.iter().position(|t| t.id == id) else {
            return Ok(false);
        };
        tasks.remove(index);

        debug!("deleted task {}", id);
        Ok(true)
    }

    async fn get_by_category(&self, category_id: i64) -> Result<Vec<Task>, AppError> {
        self.latency.wait(FILTER_MS).await;
        Ok(self.select(|t| t.category_id == category_id).await)
    }

    async fn get_completed(&self) -> Result<Vec<Task>, AppError> {
        self.latency.wait(FILTER_MS).await;
        Ok(self.select(|t| t.completed).await)
    }

    async fn get_pending(&self) -> Result<Vec<Task>, AppError> {
        self.latency.wait(FILTER_MS).await;
        Ok(self.select(|t| !t.completed).await)
    }

    async fn search_tasks(&self, query: &str) -> Result<Vec<Task>, AppError> {
        self.latency.wait(SEARCH_MS).await;
        let needle = query.to_lowercase();
        Ok(self.select(|t| t.matches(&needle)).await)
    }
}
