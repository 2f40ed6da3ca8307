use std::sync::Arc;

use tracing::info;

use crate::config::Config;
use crate::error::AppError;
use crate::seed::SeedData;
use crate::services::TaskBoard;
use crate::store::{CategoryRepository, InMemoryCategoryStore, InMemoryTaskStore, TaskRepository};

/// Stores created once at process start and shared by handle.
#[derive(Clone)]
pub struct AppState {
    pub categories: Arc<dyn CategoryRepository>,
    pub tasks: Arc<dyn TaskRepository>,
    pub board: TaskBoard,
}

impl AppState {
    pub fn from_seed(seed: SeedData, config: &Config) -> Self {
        info!(
            "Seeding stores: {} categories, {} tasks (latency: {:?})",
            seed.categories.len(),
            seed.tasks.len(),
            config.latency
        );

        let categories: Arc<dyn CategoryRepository> =
            Arc::new(InMemoryCategoryStore::with_records(seed.categories, config.latency));
        let tasks: Arc<dyn TaskRepository> = Arc::new(InMemoryTaskStore::with_records(seed.tasks, config.latency));
        let board = TaskBoard::new(categories.clone(), tasks.clone()).enforce_category(config.enforce_category);

        Self {
            categories,
            tasks,
            board,
        }
    }

    /// Seeds from `config.seed_dir` when set, otherwise from the embedded data.
    pub async fn load(config: &Config) -> Result<Self, AppError> {
        let seed = match &config.seed_dir {
            Some(dir) => SeedData::from_dir(dir).await?,
            None => SeedData::embedded()?,
        };
        Ok(Self::from_seed(seed, config))
    }
}
