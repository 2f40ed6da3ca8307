use chrono::{DateTime, Duration, TimeZone, Utc};

use taskboard::models::{Priority, Task};
use taskboard::query::{self, StatusFilter, TaskCounts, TaskQuery};

fn base() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 7, 1, 9, 0, 0).unwrap()
}

fn task(id: i64, priority: Priority, completed: bool, created_offset_hours: i64) -> Task {
    Task {
        id,
        title: format!("Task {id}"),
        description: String::new(),
        category_id: 1,
        priority,
        due_date: None,
        completed,
        created_at: base() + Duration::hours(created_offset_hours),
        completed_at: None,
    }
}

fn due(mut task: Task, days: i64) -> Task {
    task.due_date = Some(base() + Duration::days(days));
    task
}

fn ids(tasks: &[Task]) -> Vec<i64> {
    tasks.iter().map(|t| t.id).collect()
}

#[test]
fn test_high_priority_sorts_first_regardless_of_input_order() {
    let low = task(1, Priority::Low, false, 0);
    let high = task(2, Priority::High, false, 1);

    let forward = query::apply(vec![low.clone(), high.clone()], &TaskQuery::default());
    let backward = query::apply(vec![high, low], &TaskQuery::default());

    assert_eq!(ids(&forward), vec![2, 1]);
    assert_eq!(ids(&backward), vec![2, 1]);
}

#[test]
fn test_pending_filter_and_all_ordering() {
    let done = task(1, Priority::Medium, true, 5);
    let open = task(2, Priority::Medium, false, 0);
    let tasks = vec![done, open];

    let pending = query::apply(tasks.clone(), &TaskQuery::new("", StatusFilter::Pending));
    assert_eq!(ids(&pending), vec![2]);

    let all = query::apply(tasks.clone(), &TaskQuery::new("", StatusFilter::All));
    assert_eq!(ids(&all), vec![2, 1]);

    let completed = query::apply(tasks, &TaskQuery::new("", StatusFilter::Completed));
    assert_eq!(ids(&completed), vec![1]);
}

#[test]
fn test_high_priority_filter() {
    let tasks = vec![
        task(1, Priority::High, true, 0),
        task(2, Priority::Medium, false, 0),
        task(3, Priority::High, false, 0),
    ];

    let view = query::apply(tasks, &TaskQuery::new("", StatusFilter::HighPriority));
    assert_eq!(ids(&view), vec![3, 1]);
}

#[test]
fn test_completed_tasks_sort_after_open_ones_even_with_higher_priority() {
    let tasks = vec![task(1, Priority::High, true, 0), task(2, Priority::Low, false, 0)];

    let view = query::apply(tasks, &TaskQuery::default());
    assert_eq!(ids(&view), vec![2, 1]);
}

#[test]
fn test_earlier_due_date_sorts_first_within_priority() {
    let tasks = vec![
        due(task(1, Priority::Medium, false, 10), 5),
        due(task(2, Priority::Medium, false, 0), 2),
        due(task(3, Priority::Medium, false, 5), 9),
    ];

    let view = query::apply(tasks, &TaskQuery::default());
    assert_eq!(ids(&view), vec![2, 1, 3]);
}

#[test]
fn test_newest_created_first_without_due_dates() {
    let tasks = vec![
        task(1, Priority::Low, false, 0),
        task(2, Priority::Low, false, 2),
        task(3, Priority::Low, false, 1),
    ];

    let view = query::apply(tasks, &TaskQuery::default());
    assert_eq!(ids(&view), vec![2, 3, 1]);
}

#[test]
fn test_mixed_due_dates_order_is_consistent() {
    let tasks = vec![
        due(task(1, Priority::Medium, false, 0), 1),
        task(2, Priority::Medium, false, 1),
        due(task(3, Priority::Medium, false, 2), 2),
        task(4, Priority::Medium, false, 3),
    ];

    let mut reversed = tasks.clone();
    reversed.reverse();

    let view = query::apply(tasks, &TaskQuery::default());
    assert_eq!(ids(&view), vec![1, 3, 4, 2]);
    assert_eq!(ids(&query::apply(reversed, &TaskQuery::default())), vec![1, 3, 4, 2]);
}

#[test]
fn test_blank_search_is_pass_through() {
    let tasks = vec![task(1, Priority::Low, false, 0), task(2, Priority::High, true, 1)];

    assert_eq!(query::search(tasks.clone(), ""), tasks);
    assert_eq!(query::search(tasks.clone(), "   "), tasks);
}

#[test]
fn test_search_matches_title_or_description_ignoring_case() {
    let mut report = task(1, Priority::Medium, false, 0);
    report.title = "Quarterly Report".to_string();
    let mut notes = task(2, Priority::Medium, false, 1);
    notes.description = "attach the REPORT figures".to_string();
    let other = task(3, Priority::Medium, false, 2);

    let view = query::apply(vec![report, notes, other], &TaskQuery::new("report", StatusFilter::All));
    assert_eq!(ids(&view), vec![2, 1]);
}

#[test]
fn test_search_then_status_filter() {
    let mut open = task(1, Priority::Medium, false, 0);
    open.title = "Pay rent".to_string();
    let mut paid = task(2, Priority::Medium, true, 1);
    paid.title = "Pay invoice".to_string();

    let view = query::apply(vec![open, paid], &TaskQuery::new("PAY", StatusFilter::Completed));
    assert_eq!(ids(&view), vec![2]);
}

#[test]
fn test_counts_over_loaded_set() {
    let tasks = vec![
        task(1, Priority::High, false, 0),
        task(2, Priority::Medium, true, 0),
        task(3, Priority::Low, false, 0),
        task(4, Priority::High, true, 0),
    ];

    assert_eq!(
        TaskCounts::from_tasks(&tasks),
        TaskCounts {
            all: 4,
            pending: 2,
            completed: 2,
            high: 2
        }
    );
    assert_eq!(TaskCounts::from_tasks(&[]), TaskCounts::default());
}

#[test]
fn test_pending_by_category_skips_completed() {
    let mut other = task(3, Priority::Low, false, 0);
    other.category_id = 2;
    let tasks = vec![task(1, Priority::High, false, 0), task(2, Priority::Low, true, 0), other];

    let counts = query::pending_by_category(&tasks);
    assert_eq!(counts.get(&1), Some(&1));
    assert_eq!(counts.get(&2), Some(&1));
    assert_eq!(counts.get(&3), None);
}
