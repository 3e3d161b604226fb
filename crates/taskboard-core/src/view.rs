//! Derived View
//!
//! Read-only projection of the task mirror that the page renders. Rebuilt
//! from scratch on every state change.

use std::cmp::Ordering;

use chrono::NaiveDate;
use serde::Serialize;

use crate::filter::Filter;
use crate::model::{Priority, Task, TaskId};

/// Shown in place of the list when no task passes the filter
pub const EMPTY_MESSAGE: &str = "No tasks found.";

/// Buttons on a task card
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TaskAction {
    Complete,
    Edit,
    Delete,
}

impl TaskAction {
    /// Suffix of the button's `btn-*` class
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Complete => "complete",
            Self::Edit => "edit",
            Self::Delete => "delete",
        }
    }
}

/// One rendered task card
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize)]
pub struct TaskCard {
    pub id: TaskId,
    pub title: String,
    pub subject: Option<String>,
    pub description: Option<String>,
    pub priority: Priority,
    pub overdue: bool,
    pub due_label: String,
    pub completed: bool,
}

impl TaskCard {
    pub fn new(task: &Task, today: NaiveDate) -> Self {
        Self {
            id: task.id,
            title: task.title.clone(),
            subject: task.subject().map(str::to_string),
            description: task.description().map(str::to_string),
            priority: task.priority,
            overdue: task.is_overdue(today),
            due_label: task.due_date.label(),
            completed: task.completed,
        }
    }

    /// Caption of the complete/undo button
    pub const fn toggle_label(&self) -> &'static str {
        if self.completed { "Undo" } else { "Complete" }
    }

    /// Card buttons in display order, with their captions
    pub const fn actions(&self) -> [(TaskAction, &'static str); 3] {
        [
            (TaskAction::Complete, self.toggle_label()),
            (TaskAction::Edit, "Edit"),
            (TaskAction::Delete, "Delete"),
        ]
    }

    /// Class list of the card container
    pub fn class(&self) -> String {
        let completed = if self.completed { " completed" } else { "" };
        format!("task-item{completed} {}-priority", self.priority.as_str())
    }
}

/// Everything the dashboard shows
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct BoardView {
    pub greeting: Option<String>,
    pub filter: Filter,
    pub cards: Vec<TaskCard>,
}

impl BoardView {
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}

/// Filter then sort ascending by due date. Invalid dates go last; ties
/// keep mirror order.
pub fn visible_tasks(tasks: &[Task], filter: Filter) -> Vec<&Task> {
    let mut visible = filter.apply(tasks);
    visible.sort_by(|a, b| compare_due(a, b));
    visible
}

fn compare_due(a: &Task, b: &Task) -> Ordering {
    match (a.due_date.date(), b.due_date.date()) {
        (Some(a), Some(b)) => a.cmp(&b),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

pub fn cards(tasks: &[Task], filter: Filter, today: NaiveDate) -> Vec<TaskCard> {
    visible_tasks(tasks, filter)
        .into_iter()
        .map(|task| TaskCard::new(task, today))
        .collect()
}
