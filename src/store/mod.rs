pub mod category_store;
pub mod latency;
pub mod task_store;

pub use category_store::InMemoryCategoryStore;
pub use latency::Latency;
pub use task_store::InMemoryTaskStore;

use async_trait::async_trait;

use crate::error::AppError;
use crate::models::{Category, NewCategoryRequest, NewTaskRequest, Task, UpdateCategoryRequest, UpdateTaskRequest};

/// Category call surface consumed by the presentation layer.
///
/// A missing id is reported as `None`/`false`, never as an error. `Err` is
/// reserved for backends that can actually fail.
#[async_trait]
pub trait CategoryRepository: Send + Sync {
    async fn get_all(&self) -> Result<Vec<Category>, AppError>;
    async fn get_by_id(&self, id: i64) -> Result<Option<Category>, AppError>;
    async fn create(&self, req: NewCategoryRequest) -> Result<Category, AppError>;
    async fn update(&self, id: i64, req: UpdateCategoryRequest) -> Result<Option<Category>, AppError>;
    async fn delete(&self, id: i64) -> Result<bool, AppError>;
    async fn update_task_count(&self, id: i64, count: usize) -> Result<Option<Category>, AppError>;
}

/// Task call surface consumed by the presentation layer.
#[async_trait]
pub trait TaskRepository: Send + Sync {
    async fn get_all(&self) -> Result<Vec<Task>, AppError>;
    async fn get_by_id(&self, id: i64) -> Result<Option<Task>, AppError>;
    async fn create(&self, req: NewTaskRequest) -> Result<Task, AppError>;
    async fn update(&self, id: i64, req: UpdateTaskRequest) -> Result<Option<Task>, AppError>;
    async fn delete(&self, id: i64) -> Result<bool, AppError>;
    async fn get_by_category(&self, category_id: i64) -> Result<Vec<Task>, AppError>;
    async fn get_completed(&self) -> Result<Vec<Task>, AppError>;
    async fn get_pending(&self) -> Result<Vec<Task>, AppError>;
    async fn search_tasks(&self, query: &str) -> Result<Vec<Task>, AppError>;
}

/// `max(existing ids) + 1`, starting at 1 for an empty collection.
fn next_id<T>(records: &[T], id: impl Fn(&T) -> i64) -> i64 {
    records.iter().map(id).max().unwrap_or(0) + 1
}
