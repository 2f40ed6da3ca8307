pub mod category;
pub mod task;

pub use category::{Category, NewCategoryRequest, UpdateCategoryRequest};
pub use task::{NewTaskRequest, Priority, Task, UpdateTaskRequest};

use serde::{Deserialize, Deserializer};

/// Keeps "field absent" apart from "field set to null" in partial updates:
/// absent stays `None`, null becomes `Some(None)`.
pub(crate) fn deserialize_nullable<'de, T, D>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    T: Deserialize<'de>,
    D: Deserializer<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}
