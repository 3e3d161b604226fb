//! Board State
//!
//! The dashboard's application state and the reducer that writes it.
//! Controllers never touch the state directly: they return
//! [`BoardEvent`]s, and the owner applies them in order.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::filter::Filter;
use crate::model::{Task, TaskId, User};
use crate::view::{self, BoardView};

/// User-visible error banner
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notice {
    pub message: String,
}

impl Notice {
    pub fn new(message: impl Into<String>) -> Self {
        Self { message: message.into() }
    }
}

impl std::fmt::Display for Notice {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.message)
    }
}

/// State transitions of the dashboard
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum BoardEvent {
    UserLoaded(User),
    /// Replaces the mirror with the server's list
    TasksLoaded(Vec<Task>),
    FilterChanged(Filter),
    EditOpened(TaskId),
    EditClosed,
    /// The add form was accepted and should be cleared
    DraftSubmitted,
    Failed(Notice),
    NoticeDismissed,
}

/// Dashboard state
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct BoardState {
    tasks: Vec<Task>,
    filter: Filter,
    user: Option<User>,
    editing: Option<TaskId>,
    notice: Option<Notice>,
    draft_epoch: u64,
}

impl BoardState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn apply(&mut self, event: BoardEvent) {
        match event {
            BoardEvent::UserLoaded(user) => self.user = Some(user),
            BoardEvent::TasksLoaded(tasks) => {
                tracing::debug!(count = tasks.len(), "task mirror replaced");
                self.tasks = tasks;
                self.notice = None;
                if self.editing.is_some_and(|id| self.task(id).is_none()) {
                    self.editing = None;
                }
            }
            BoardEvent::FilterChanged(filter) => self.filter = filter,
            BoardEvent::EditOpened(id) => {
                if self.task(id).is_some() {
                    self.editing = Some(id);
                }
            }
            BoardEvent::EditClosed => self.editing = None,
            BoardEvent::DraftSubmitted => self.draft_epoch += 1,
            BoardEvent::Failed(notice) => self.notice = Some(notice),
            BoardEvent::NoticeDismissed => self.notice = None,
        }
    }

    pub fn apply_all(&mut self, events: impl IntoIterator<Item = BoardEvent>) {
        for event in events {
            self.apply(event);
        }
    }

    /// Mirror of the last successful task fetch
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn task(&self, id: TaskId) -> Option<&Task> {
        self.tasks.iter().find(|t| t.id == id)
    }

    pub const fn filter(&self) -> Filter {
        self.filter
    }

    pub const fn user(&self) -> Option<&User> {
        self.user.as_ref()
    }

    /// Task open in the edit modal
    pub fn editing(&self) -> Option<&Task> {
        self.editing.and_then(|id| self.task(id))
    }

    pub const fn notice(&self) -> Option<&Notice> {
        self.notice.as_ref()
    }

    /// Bumped each time the add form should reset
    pub const fn draft_epoch(&self) -> u64 {
        self.draft_epoch
    }

    pub fn view(&self, today: NaiveDate) -> BoardView {
        BoardView {
            greeting: self.user.as_ref().map(User::greeting),
            filter: self.filter,
            cards: view::cards(&self.tasks, self.filter, today),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Priority;

    fn task(id: i64) -> Task {
        Task {
            id: TaskId(id),
            title: format!("task {id}"),
            description: None,
            subject: None,
            priority: Priority::Medium,
            due_date: "2024-04-01".into(),
            completed: false,
        }
    }

    #[test]
    fn test_tasks_loaded_replaces_mirror() {
        let mut state = BoardState::new();
        state.apply(BoardEvent::TasksLoaded(vec![task(1), task(2)]));
        state.apply(BoardEvent::TasksLoaded(vec![task(3)]));

        assert_eq!(state.tasks().len(), 1);
        assert_eq!(state.tasks()[0].id, TaskId(3));
    }

    #[test]
    fn test_successful_load_clears_notice() {
        let mut state = BoardState::new();
        state.apply(BoardEvent::Failed(Notice::new("Failed to load tasks")));
        assert!(state.notice().is_some());

        state.apply(BoardEvent::TasksLoaded(vec![]));
        assert!(state.notice().is_none());
    }

    #[test]
    fn test_edit_modal_lifecycle() {
        let mut state = BoardState::new();
        state.apply(BoardEvent::EditOpened(TaskId(1)));
        assert!(state.editing().is_none(), "unknown id must not open the modal");

        state.apply(BoardEvent::TasksLoaded(vec![task(1), task(2)]));
        state.apply(BoardEvent::EditOpened(TaskId(2)));
        assert_eq!(state.editing().map(|t| t.id), Some(TaskId(2)));

        state.apply(BoardEvent::TasksLoaded(vec![task(1)]));
        assert!(state.editing().is_none(), "deleted task closes the modal");

        state.apply(BoardEvent::EditOpened(TaskId(1)));
        state.apply(BoardEvent::EditClosed);
        assert!(state.editing().is_none());
    }

    #[test]
    fn test_view_uses_filter_and_greeting() {
        let mut state = BoardState::new();
        let mut done = task(2);
        done.completed = true;
        state.apply_all([
            BoardEvent::UserLoaded(User {
                first_name: "Ada".into(),
                last_name: None,
                email: None,
                username: None,
            }),
            BoardEvent::TasksLoaded(vec![task(1), done]),
            BoardEvent::FilterChanged(Filter::Completed),
        ]);

        let today = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        let view = state.view(today);
        assert_eq!(view.greeting.as_deref(), Some("Welcome, Ada!"));
        assert_eq!(view.cards.len(), 1);
        assert_eq!(view.cards[0].id, TaskId(2));
    }

    #[test]
    fn test_draft_epoch_bumps() {
        let mut state = BoardState::new();
        state.apply(BoardEvent::DraftSubmitted);
        state.apply(BoardEvent::DraftSubmitted);
        assert_eq!(state.draft_epoch(), 2);
    }
}
