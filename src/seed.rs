use std::path::Path;

use tracing::info;

use crate::error::AppError;
use crate::models::{Category, Task};

const CATEGORIES_FILE: &str = "categories.json";
const TASKS_FILE: &str = "tasks.json";

static EMBEDDED_CATEGORIES: &str = include_str!("../data/categories.json");
static EMBEDDED_TASKS: &str = include_str!("../data/tasks.json");

/// Static record collections loaded once at process start.
#[derive(Debug, Clone, Default)]
pub struct SeedData {
    pub categories: Vec<Category>,
    pub tasks: Vec<Task>,
}

impl SeedData {
    pub fn embedded() -> Result<Self, AppError> {
        Self::parse(EMBEDDED_CATEGORIES, EMBEDDED_TASKS)
    }

    /// Reads `categories.json` and `tasks.json` from `dir`.
    pub async fn from_dir(dir: &Path) -> Result<Self, AppError> {
        let categories = tokio::fs::read_to_string(dir.join(CATEGORIES_FILE)).await?;
        let tasks = tokio::fs::read_to_string(dir.join(TASKS_FILE)).await?;
        let seed = Self::parse(&categories, &tasks)?;
        info!(
            "Loaded seed data from {}: {} categories, {} tasks",
            dir.display(),
            seed.categories.len(),
            seed.tasks.len()
        );
        Ok(seed)
    }

    pub fn parse(categories: &str, tasks: &str) -> Result<Self, AppError> {
        Ok(Self {
            categories: serde_json::from_str(categories)?,
            tasks: serde_json::from_str(tasks)?,
        })
    }
}
