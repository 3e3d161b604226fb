//! Wire Model
//!
//! Types exchanged with the task backend. Field names follow the backend's
//! camelCase JSON.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::ModelError;

/// Server-assigned task identifier
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TaskId(pub i64);

impl std::fmt::Display for TaskId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::str::FromStr for TaskId {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim()
            .parse()
            .map(Self)
            .map_err(|_| ModelError::InvalidTaskId(s.to_string()))
    }
}

/// Task priority
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    Low,
    #[default]
    Medium,
    High,
}

impl Priority {
    pub const ALL: [Self; 3] = [Self::Low, Self::Medium, Self::High];

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
        }
    }

    /// Capitalized label shown on the priority badge
    pub const fn label(self) -> &'static str {
        match self {
            Self::Low => "Low",
            Self::Medium => "Medium",
            Self::High => "High",
        }
    }
}

impl std::fmt::Display for Priority {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Priority {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "low" => Ok(Self::Low),
            "medium" => Ok(Self::Medium),
            "high" => Ok(Self::High),
            other => Err(ModelError::UnknownPriority(other.to_string())),
        }
    }
}

/// Due date exactly as the backend sent it.
///
/// The raw text is kept so a task with a malformed date still round-trips
/// through an update unchanged. A missing or `null` date stays `null`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DueDate(Option<String>);

impl DueDate {
    pub fn new(raw: impl Into<String>) -> Self {
        Self(Some(raw.into()))
    }

    /// Raw text, empty when the backend sent none
    pub fn as_str(&self) -> &str {
        self.0.as_deref().unwrap_or_default()
    }

    /// Calendar date, if the value is `YYYY-MM-DD` or starts with one
    /// (RFC 3339 timestamps).
    pub fn date(&self) -> Option<NaiveDate> {
        let raw = self.0.as_deref()?.trim();
        let (head, rest) = match (raw.get(..10), raw.get(10..)) {
            (Some(head), Some(rest)) => (head, rest),
            _ => (raw, ""),
        };
        if !rest.is_empty() && !rest.starts_with(['T', ' ']) {
            return None;
        }
        NaiveDate::parse_from_str(head, "%Y-%m-%d").ok()
    }

    /// Display label, e.g. `Jan 1, 2024`
    pub fn label(&self) -> String {
        self.date()
            .map_or_else(|| "Invalid Date".into(), |d| d.format("%b %-d, %Y").to_string())
    }
}

impl From<NaiveDate> for DueDate {
    fn from(date: NaiveDate) -> Self {
        Self::new(date.format("%Y-%m-%d").to_string())
    }
}

impl From<&str> for DueDate {
    fn from(raw: &str) -> Self {
        Self::new(raw)
    }
}

/// A task as stored by the backend
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    pub id: TaskId,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub subject: Option<String>,
    pub priority: Priority,
    #[serde(default)]
    pub due_date: DueDate,
    #[serde(default)]
    pub completed: bool,
}

impl Task {
    /// Description, treating an empty string as absent
    pub fn description(&self) -> Option<&str> {
        non_empty(self.description.as_deref())
    }

    /// Subject, treating an empty string as absent
    pub fn subject(&self) -> Option<&str> {
        non_empty(self.subject.as_deref())
    }

    /// Incomplete and due strictly before `today`
    pub fn is_overdue(&self, today: NaiveDate) -> bool {
        !self.completed && self.due_date.date().is_some_and(|due| due < today)
    }

    /// Editable fields, used to pre-fill the edit form
    pub fn draft(&self) -> TaskDraft {
        TaskDraft {
            title: self.title.clone(),
            description: self.description.clone().unwrap_or_default(),
            subject: self.subject.clone().unwrap_or_default(),
            priority: self.priority,
            due_date: self.due_date.clone(),
        }
    }

    /// Update body that flips the completion flag and keeps everything else
    pub fn toggled(&self) -> TaskUpdate {
        TaskUpdate::from_draft(self.draft(), !self.completed)
    }
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty())
}

/// Body of `POST /api/tasks`, also the contents of the add and edit forms
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskDraft {
    pub title: String,
    pub description: String,
    pub subject: String,
    pub priority: Priority,
    pub due_date: DueDate,
}

/// Body of `PUT /api/tasks/{id}`
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskUpdate {
    pub title: String,
    pub description: String,
    pub subject: String,
    pub priority: Priority,
    pub due_date: DueDate,
    pub completed: bool,
}

impl TaskUpdate {
    pub fn from_draft(draft: TaskDraft, completed: bool) -> Self {
        Self {
            title: draft.title,
            description: draft.description,
            subject: draft.subject,
            priority: draft.priority,
            due_date: draft.due_date,
            completed,
        }
    }
}

/// The signed-in user
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub first_name: String,
    #[serde(default)]
    pub last_name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub username: Option<String>,
}

impl User {
    pub fn greeting(&self) -> String {
        format!("Welcome, {}!", self.first_name)
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

/// Registration form. Password confirmation is checked by the backend.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterRequest {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub username: String,
    pub password: String,
    pub confirm_password: String,
}

/// Failure body returned by the backend
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiErrorBody {
    #[serde(default)]
    pub error: Option<String>,
}
