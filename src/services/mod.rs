pub mod board;
pub mod validation;

pub use board::{CategorySummary, Sidebar, TaskBoard, TaskCard, TaskView};
pub use validation::TaskDraft;
