//! Derived task views: search, status filter, ordering and badge counts.
//!
//! Everything here is a pure function over a snapshot returned by the stores.

use std::cmp::Ordering;
use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::AppError;
use crate::models::{Priority, Task};

/// Filter tabs shown above the task list.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StatusFilter {
    #[default]
    All,
    Pending,
    Completed,
    #[serde(rename = "high")]
    HighPriority,
}

impl StatusFilter {
    pub fn accepts(self, task: &Task) -> bool {
        match self {
            StatusFilter::All => true,
            StatusFilter::Pending => !task.completed,
            StatusFilter::Completed => task.completed,
            StatusFilter::HighPriority => task.priority == Priority::High,
        }
    }
}

impl FromStr for StatusFilter {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "" | "all" => Ok(StatusFilter::All),
            "pending" => Ok(StatusFilter::Pending),
            "completed" => Ok(StatusFilter::Completed),
            "high" | "high-priority" => Ok(StatusFilter::HighPriority),
            other => Err(AppError::Config(format!("unknown status filter `{other}`"))),
        }
    }
}

impl fmt::Display for StatusFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            StatusFilter::All => "all",
            StatusFilter::Pending => "pending",
            StatusFilter::Completed => "completed",
            StatusFilter::HighPriority => "high",
        })
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskQuery {
    pub search: String,
    pub status: StatusFilter,
}

impl TaskQuery {
    pub fn new(search: impl Into<String>, status: StatusFilter) -> Self {
        Self {
            search: search.into(),
            status,
        }
    }
}

/// Badge counts over the loaded (unsearched, unfiltered) task set.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskCounts {
    pub all: usize,
    pub pending: usize,
    pub completed: usize,
    pub high: usize,
}

impl TaskCounts {
    pub fn from_tasks(tasks: &[Task]) -> Self {
        tasks.iter().fold(Self::default(), |mut counts, task| {
            counts.all += 1;
            if task.completed {
                counts.completed += 1;
            } else {
                counts.pending += 1;
            }
            if task.priority == Priority::High {
                counts.high += 1;
            }
            counts
        })
    }
}

/// Open tasks per category id, as shown in the sidebar badges.
pub fn pending_by_category(tasks: &[Task]) -> HashMap<i64, usize> {
    let mut counts = HashMap::new();
    for task in tasks.iter().filter(|t| !t.completed) {
        *counts.entry(task.category_id).or_insert(0) += 1;
    }
    counts
}

/// Keeps tasks whose title or description contains `query`, ignoring case.
/// A blank query keeps everything.
pub fn search(tasks: Vec<Task>, query: &str) -> Vec<Task> {
    if query.trim().is_empty() {
        return tasks;
    }
    let needle = query.to_lowercase();
    tasks.into_iter().filter(|t| t.matches(&needle)).collect()
}

pub fn filter_status(tasks: Vec<Task>, status: StatusFilter) -> Vec<Task> {
    if status == StatusFilter::All {
        return tasks;
    }
    tasks.into_iter().filter(|t| status.accepts(t)).collect()
}

/// Display order: open before done, then priority (high first), then due
/// date (earliest first, dated before undated), then newest created.
pub fn compare_tasks(a: &Task, b: &Task) -> Ordering {
    a.completed
        .cmp(&b.completed)
        .then_with(|| b.priority.rank().cmp(&a.priority.rank()))
        .then_with(|| match (a.due_date, b.due_date) {
            (Some(a_due), Some(b_due)) => a_due.cmp(&b_due),
            (Some(_), None) => Ordering::Less,
            (None, Some(_)) => Ordering::Greater,
            (None, None) => Ordering::Equal,
        })
        .then_with(|| b.created_at.cmp(&a.created_at))
}

pub fn sort_tasks(tasks: &mut [Task]) {
    tasks.sort_by(compare_tasks);
}

/// Search, then status filter, then sort.
pub fn apply(tasks: Vec<Task>, query: &TaskQuery) -> Vec<Task> {
    let mut view = filter_status(search(tasks, &query.search), query.status);
    sort_tasks(&mut view);
    view
}

#[cfg(test)]
mod tests {
    use chrono::{TimeZone, Utc};

    use super::*;

    fn task(id: i64, priority: Priority, completed: bool) -> Task {
        Task {
            id,
            title: format!("task {id}"),
            description: String::new(),
            category_id: 1,
            priority,
            due_date: None,
            completed,
            created_at: Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, id as u32).unwrap(),
            completed_at: None,
        }
    }

    #[test]
    fn status_filter_parses_tab_keys() {
        assert_eq!("high".parse::<StatusFilter>().unwrap(), StatusFilter::HighPriority);
        assert_eq!(" Pending ".parse::<StatusFilter>().unwrap(), StatusFilter::Pending);
        assert_eq!("".parse::<StatusFilter>().unwrap(), StatusFilter::All);
        assert!("archived".parse::<StatusFilter>().is_err());
    }

    #[test]
    fn counts_ignore_search_and_filter() {
        let tasks = vec![
            task(1, Priority::High, false),
            task(2, Priority::High, true),
            task(3, Priority::Low, false),
        ];
        let counts = TaskCounts::from_tasks(&tasks);
        assert_eq!(
            counts,
            TaskCounts {
                all: 3,
                pending: 2,
                completed: 1,
                high: 2
            }
        );
    }

    #[test]
    fn dated_tasks_precede_undated_within_a_priority() {
        let mut dated = task(1, Priority::Medium, false);
        dated.due_date = Some(Utc.with_ymd_and_hms(2024, 3, 1, 0, 0, 0).unwrap());
        let undated = task(2, Priority::Medium, false);

        assert_eq!(compare_tasks(&dated, &undated), Ordering::Less);
        assert_eq!(compare_tasks(&undated, &dated), Ordering::Greater);
    }
}
