use async_trait::async_trait;
use tokio::sync::RwLock;
use tracing::debug;

use crate::error::AppError;
use crate::models::{Category, NewCategoryRequest, UpdateCategoryRequest};
use crate::store::{CategoryRepository, Latency, next_id};

const GET_ALL_MS: u64 = 250;
const GET_BY_ID_MS: u64 = 200;
const CREATE_MS: u64 = 300;
const UPDATE_MS: u64 = 200;
const DELETE_MS: u64 = 250;
const UPDATE_TASK_COUNT_MS: u64 = 150;

/// Process-memory category collection. Every accessor hands out clones.
pub struct InMemoryCategoryStore {
    categories: RwLock<Vec<Category>>,
    latency: Latency,
}

impl InMemoryCategoryStore {
    pub fn new(latency: Latency) -> Self {
        Self::with_records(Vec::new(), latency)
    }

    pub fn with_records(categories: Vec<Category>, latency: Latency) -> Self {
        Self {
            categories: RwLock::new(categories),
            latency,
        }
    }
}

#[async_trait]
impl CategoryRepository for InMemoryCategoryStore {
    async fn get_all(&self) -> Result<Vec<Category>, AppError> {
        self.latency.wait(GET_ALL_MS).await;
        Ok(self.categories.read().await.clone())
    }

    async fn get_by_id(&self, id: i64) -> Result<Option<Category>, AppError> {
        self.latency.wait(GET_BY_ID_MS).await;
        let categories = self.categories.read().await;
        Ok(categories.iter().find(|c| c.id == id).cloned())
    }

    async fn create(&self, req: NewCategoryRequest) -> Result<Category, AppError> {
        self.latency.wait(CREATE_MS).await;
        let mut categories = self.categories.write().await;

        let category = Category {
            id: next_id(&categories, |c| c.id),
            name: req.name,
            color: req.color,
            icon: req.icon,
            task_count: 0,
        };
        categories.push(category.clone());

        debug!("created category {} ({})", category.id, category.name);
        Ok(category)
    }

    async fn update(&self, id: i64, req: UpdateCategoryRequest) -> Result<Option<Category>, AppError> {
        self.latency.wait(UPDATE_MS).await;
        let mut categories = self.categories.write().await;

        let Some(current) = categories.iter_mut().find(|c| c.id == id) else {
            debug!("update skipped, category {} not found", id);
            return Ok(None);
        };
        current.apply(req);

        debug!("updated category {}", id);
        Ok(Some(current.clone()))
    }

    async fn delete(&self, id: i64) -> Result<bool, AppError> {
        self.latency.wait(DELETE_MS).await;
        let mut categories = self.categories.write().await;

        let Some(index) = categories.iter().position(|c| c.id == id) else {
            return Ok(false);
        };
        categories.remove(index);

        debug!("deleted category {}", id);
        Ok(true)
    }

    async fn update_task_count(&self, id: i64, count: usize) -> Result<Option<Category>, AppError> {
        self.latency.wait(UPDATE_TASK_COUNT_MS).await;
        let mut categories = self.categories.write().await;

        Ok(categories.iter_mut().find(|c| c.id == id).map(|category| {
            category.task_count = count;
            category.clone()
        }))
    }
}
