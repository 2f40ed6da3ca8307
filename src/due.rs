use std::fmt;

use chrono::{DateTime, Days, NaiveDate, Utc};
use serde::Serialize;

/// Short due-date badge text for a task card.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase", tag = "kind", content = "date")]
pub enum DueLabel {
    Today,
    Tomorrow,
    /// Any other day, rendered as `"Mar 7"`.
    On(String),
}

impl fmt::Display for DueLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DueLabel::Today => f.write_str("Today"),
            DueLabel::Tomorrow => f.write_str("Tomorrow"),
            DueLabel::On(date) => f.write_str(date),
        }
    }
}

fn tomorrow(now: DateTime<Utc>) -> Option<NaiveDate> {
    now.date_naive().checked_add_days(Days::new(1))
}

pub fn due_label(due: DateTime<Utc>, now: DateTime<Utc>) -> DueLabel {
    let day = due.date_naive();
    if day == now.date_naive() {
        DueLabel::Today
    } else if Some(day) == tomorrow(now) {
        DueLabel::Tomorrow
    } else {
        DueLabel::On(due.format("%b %-d").to_string())
    }
}

/// Overdue, due today, or due tomorrow.
pub fn is_due_soon(due: DateTime<Utc>, now: DateTime<Utc>) -> bool {
    let day = due.date_naive();
    due < now || day == now.date_naive() || Some(day) == tomorrow(now)
}
