use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    #[serde(rename = "Id")]
    pub id: i64,
    pub name: String,
    pub color: String,
    pub icon: String,
    #[serde(default)]
    pub task_count: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewCategoryRequest {
    pub name: String,
    pub color: String,
    pub icon: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateCategoryRequest {
    pub name: Option<String>,
    pub color: Option<String>,
    pub icon: Option<String>,
    pub task_count: Option<usize>,
}

impl Category {
    /// Merges the present fields of `req`; the id is never touched.
    pub fn apply(&mut self, req: UpdateCategoryRequest) {
        if let Some(name) = req.name {
            self.name = name;
        }
        if let Some(color) = req.color {
            self.color = color;
        }
        if let Some(icon) = req.icon {
            self.icon = icon;
        }
        if let Some(task_count) = req.task_count {
            self.task_count = task_count;
        }
    }
}
