//! Task Board Controller
//!
//! Runs dashboard commands against the backend and reports the outcome as
//! [`BoardEvent`]s. Every mutation is followed, on success, by a reload of
//! the task list so the mirror always reflects the server.

use taskboard_core::{BoardEvent, BoardState, Notice, TaskDraft, TaskId, TaskUpdate};

use crate::api::TaskApi;
use crate::config::ClientConfig;
use crate::error::Result;
use crate::platform::{Confirm, Navigator};

pub const DELETE_PROMPT: &str = "Are you sure you want to delete this task?";

pub const LOAD_FAILED: &str = "Failed to load tasks";
pub const CREATE_FAILED: &str = "Failed to create task";
pub const UPDATE_FAILED: &str = "Failed to update task";
pub const DELETE_FAILED: &str = "Failed to delete task";

/// Dashboard intents
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum BoardCommand {
    LoadUser,
    LoadTasks,
    Add(TaskDraft),
    Edit { id: TaskId, draft: TaskDraft },
    Delete(TaskId),
    ToggleComplete(TaskId),
    Logout,
}

pub struct TaskBoardController<A, N, C> {
    api: A,
    navigator: N,
    confirm: C,
    config: ClientConfig,
}

impl<A: TaskApi, N: Navigator, C: Confirm> TaskBoardController<A, N, C> {
    pub const fn new(api: A, navigator: N, confirm: C, config: ClientConfig) -> Self {
        Self {
            api,
            navigator,
            confirm,
            config,
        }
    }

    pub const fn api(&self) -> &A {
        &self.api
    }

    pub const fn navigator(&self) -> &N {
        &self.navigator
    }

    pub const fn confirm(&self) -> &C {
        &self.confirm
    }

    /// Run `command` against `state` (a snapshot; it is not modified) and
    /// return the events to apply, in order.
    pub async fn dispatch(&self, state: &BoardState, command: BoardCommand) -> Vec<BoardEvent> {
        match command {
            BoardCommand::LoadUser => self.load_user().await,
            BoardCommand::LoadTasks => self.load_tasks().await,
            BoardCommand::Add(draft) => self.add_task(&draft).await,
            BoardCommand::Edit { id, draft } => self.edit_task(state, id, draft).await,
            BoardCommand::Delete(id) => self.delete_task(state, id).await,
            BoardCommand::ToggleComplete(id) => self.toggle_complete(state, id).await,
            BoardCommand::Logout => {
                self.logout().await;
                Vec::new()
            }
        }
    }

    /// Fetch the signed-in user; anything but success sends the page to login.
    pub async fn load_user(&self) -> Vec<BoardEvent> {
        match self.api.current_user().await {
            Ok(user) => vec![BoardEvent::UserLoaded(user)],
            Err(e) => {
                tracing::info!(error = %e, "no session, redirecting to login");
                self.navigator.navigate(&self.config.login_route);
                Vec::new()
            }
        }
    }

    /// Fetch the task list and replace the mirror
    pub async fn load_tasks(&self) -> Vec<BoardEvent> {
        match self.api.list_tasks().await {
            Ok(tasks) => vec![BoardEvent::TasksLoaded(tasks)],
            Err(e) => {
                tracing::error!(error = %e, "error loading tasks");
                vec![BoardEvent::Failed(Notice::new(LOAD_FAILED))]
            }
        }
    }

    pub async fn add_task(&self, draft: &TaskDraft) -> Vec<BoardEvent> {
        tracing::info!(title = %draft.title, "creating task");
        let result = self.api.create_task(draft).await;
        self.refresh_after(result, CREATE_FAILED, Some(BoardEvent::DraftSubmitted))
            .await
    }

    /// Save the edit form; the completion flag comes from the mirror
    pub async fn edit_task(&self, state: &BoardState, id: TaskId, draft: TaskDraft) -> Vec<BoardEvent> {
        let Some(task) = state.task(id) else {
            tracing::debug!(%id, "edit for unknown task ignored");
            return Vec::new();
        };
        let update = TaskUpdate::from_draft(draft, task.completed);
        tracing::info!(%id, "updating task");
        let result = self.api.update_task(id, &update).await;
        self.refresh_after(result, UPDATE_FAILED, Some(BoardEvent::EditClosed))
            .await
    }

    /// Delete after the user confirms; declining sends nothing
    pub async fn delete_task(&self, state: &BoardState, id: TaskId) -> Vec<BoardEvent> {
        if state.task(id).is_none() {
            tracing::debug!(%id, "delete for unknown task ignored");
            return Vec::new();
        }
        if !self.confirm.confirm(DELETE_PROMPT) {
            return Vec::new();
        }
        tracing::info!(%id, "deleting task");
        let result = self.api.delete_task(id).await;
        self.refresh_after(result, DELETE_FAILED, None).await
    }

    pub async fn toggle_complete(&self, state: &BoardState, id: TaskId) -> Vec<BoardEvent> {
        let Some(task) = state.task(id) else {
            tracing::debug!(%id, "toggle for unknown task ignored");
            return Vec::new();
        };
        let update = task.toggled();
        tracing::info!(%id, completed = update.completed, "toggling task");
        let result = self.api.update_task(id, &update).await;
        self.refresh_after(result, UPDATE_FAILED, None).await
    }

    /// End the session and go to login whatever the backend answers
    pub async fn logout(&self) {
        if let Err(e) = self.api.logout().await {
            tracing::warn!(error = %e, "error logging out");
        }
        self.navigator.navigate(&self.config.login_route);
    }

    /// On success: `on_success` (if any) then a fresh `TasksLoaded`.
    /// On failure: a notice, mirror untouched.
    async fn refresh_after(
        &self,
        result: Result<()>,
        failure: &str,
        on_success: Option<BoardEvent>,
    ) -> Vec<BoardEvent> {
        match result {
            Ok(()) => {
                let mut events: Vec<BoardEvent> = on_success.into_iter().collect();
                events.extend(self.load_tasks().await);
                events
            }
            Err(e) => {
                tracing::warn!(error = %e, "{failure}");
                vec![BoardEvent::Failed(Notice::new(failure))]
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::{Endpoint, MemoryTaskApi};
    use crate::platform::{FixedConfirm, RecordingNavigator};
    use chrono::NaiveDate;
    use taskboard_core::{DueDate, Filter, Priority, RegisterRequest, Task};

    type Controller = TaskBoardController<MemoryTaskApi, RecordingNavigator, FixedConfirm>;

    fn task(id: i64, title: &str, due: &str, completed: bool) -> Task {
        Task {
            id: TaskId(id),
            title: title.into(),
            description: Some("notes".into()),
            subject: Some("History".into()),
            priority: Priority::Medium,
            due_date: DueDate::new(due),
            completed,
        }
    }

    fn account() -> RegisterRequest {
        RegisterRequest {
            first_name: "Ada".into(),
            last_name: "Lovelace".into(),
            email: "ada@example.com".into(),
            username: "ada".into(),
            password: "engine".into(),
            confirm_password: "engine".into(),
        }
    }

    fn controller(tasks: Vec<Task>, confirm: bool) -> Controller {
        let api = MemoryTaskApi::new()
            .with_account(account())
            .with_session("ada")
            .with_tasks(tasks);
        TaskBoardController::new(
            api,
            RecordingNavigator::new(),
            FixedConfirm::new(confirm),
            ClientConfig::default(),
        )
    }

    async fn run(board: &Controller, state: &mut BoardState, command: BoardCommand) {
        let events = board.dispatch(state, command).await;
        state.apply_all(events);
    }

    async fn loaded(board: &Controller) -> BoardState {
        let mut state = BoardState::new();
        run(board, &mut state, BoardCommand::LoadUser).await;
        run(board, &mut state, BoardCommand::LoadTasks).await;
        state
    }

    #[tokio::test]
    async fn test_page_load() {
        let board = controller(vec![task(1, "Essay", "2024-01-01", false)], true);
        let state = loaded(&board).await;

        assert_eq!(state.user().map(|u| u.first_name.as_str()), Some("Ada"));
        assert_eq!(state.tasks().len(), 1);
        assert!(board.navigator().visited().is_empty());
    }

    #[tokio::test]
    async fn test_missing_session_redirects_to_login() {
        let api = MemoryTaskApi::new();
        let board = TaskBoardController::new(
            api,
            RecordingNavigator::new(),
            FixedConfirm::new(true),
            ClientConfig::default(),
        );

        let events = board.dispatch(&BoardState::new(), BoardCommand::LoadUser).await;

        assert!(events.is_empty());
        assert_eq!(board.navigator().visited(), vec!["/login"]);
    }

    #[tokio::test]
    async fn test_create_shows_task_exactly_once() {
        let board = controller(vec![], true);
        let mut state = loaded(&board).await;

        let draft = TaskDraft {
            title: "Essay".into(),
            priority: Priority::High,
            due_date: "2024-01-01".into(),
            ..Default::default()
        };
        run(&board, &mut state, BoardCommand::Add(draft)).await;

        let essays: Vec<_> = state.tasks().iter().filter(|t| t.title == "Essay").collect();
        assert_eq!(essays.len(), 1);
        assert_eq!(essays[0].priority, Priority::High);
        assert_eq!(state.draft_epoch(), 1);
        assert_eq!(board.api().call_count(Endpoint::CreateTask), 1);
    }

    #[tokio::test]
    async fn test_create_failure_surfaces_notice() {
        let board = controller(vec![task(1, "Quiz", "2024-02-01", false)], true);
        let mut state = loaded(&board).await;
        board.api().reject(Endpoint::CreateTask, 400, Some("Title is required"));

        run(&board, &mut state, BoardCommand::Add(TaskDraft::default())).await;

        assert_eq!(state.notice().map(|n| n.message.as_str()), Some(CREATE_FAILED));
        assert_eq!(state.draft_epoch(), 0);
        assert_eq!(state.tasks().len(), 1);
        assert_eq!(board.api().call_count(Endpoint::ListTasks), 1, "no reload after failure");
    }

    #[tokio::test]
    async fn test_delete_without_confirmation_sends_nothing() {
        let board = controller(vec![task(1, "Essay", "2024-01-01", false)], false);
        let mut state = loaded(&board).await;

        run(&board, &mut state, BoardCommand::Delete(TaskId(1))).await;

        assert_eq!(board.api().call_count(Endpoint::DeleteTask), 0);
        assert_eq!(board.confirm().prompts(), vec![DELETE_PROMPT]);
        assert_eq!(state.tasks().len(), 1);
    }

    #[tokio::test]
    async fn test_delete_confirmed_reloads() {
        let board = controller(
            vec![task(1, "Essay", "2024-01-01", false), task(2, "Lab", "2024-01-02", false)],
            true,
        );
        let mut state = loaded(&board).await;

        run(&board, &mut state, BoardCommand::Delete(TaskId(1))).await;

        let ids: Vec<_> = state.tasks().iter().map(|t| t.id).collect();
        assert_eq!(ids, vec![TaskId(2)]);
        let calls: Vec<String> = board.api().calls().iter().map(ToString::to_string).collect();
        assert_eq!(
            &calls[2..],
            &["DELETE /api/tasks/1".to_string(), "GET /api/tasks".to_string()]
        );
    }

    #[tokio::test]
    async fn test_toggle_complete_round_trip() {
        let board = controller(vec![task(4, "Essay", "2024-01-01", false)], true);
        let mut state = loaded(&board).await;

        run(&board, &mut state, BoardCommand::ToggleComplete(TaskId(4))).await;
        assert!(state.task(TaskId(4)).unwrap().completed);

        run(&board, &mut state, BoardCommand::ToggleComplete(TaskId(4))).await;
        let task = state.task(TaskId(4)).unwrap();
        assert!(!task.completed);
        assert_eq!(task.description(), Some("notes"));
    }

    #[tokio::test]
    async fn test_edit_keeps_completion_and_closes_modal() {
        let board = controller(vec![task(2, "Lab", "2024-03-01", true)], true);
        let mut state = loaded(&board).await;
        state.apply(BoardEvent::EditOpened(TaskId(2)));

        let mut draft = state.editing().unwrap().draft();
        draft.title = "Lab report".into();
        draft.priority = Priority::Low;
        run(&board, &mut state, BoardCommand::Edit { id: TaskId(2), draft }).await;

        let task = state.task(TaskId(2)).unwrap();
        assert_eq!(task.title, "Lab report");
        assert_eq!(task.priority, Priority::Low);
        assert!(task.completed);
        assert!(state.editing().is_none());
    }

    #[tokio::test]
    async fn test_unknown_task_commands_are_noops() {
        let board = controller(vec![], true);
        let mut state = loaded(&board).await;
        let before = board.api().calls().len();

        run(&board, &mut state, BoardCommand::ToggleComplete(TaskId(99))).await;
        run(&board, &mut state, BoardCommand::Delete(TaskId(99))).await;
        run(
            &board,
            &mut state,
            BoardCommand::Edit {
                id: TaskId(99),
                draft: TaskDraft::default(),
            },
        )
        .await;

        assert_eq!(board.api().calls().len(), before);
        assert!(board.confirm().prompts().is_empty());
    }

    #[tokio::test]
    async fn test_load_failure_surfaces_notice() {
        let board = controller(vec![task(1, "Essay", "2024-01-01", false)], true);
        let mut state = loaded(&board).await;
        board.api().reject(Endpoint::ListTasks, 503, None);

        run(&board, &mut state, BoardCommand::LoadTasks).await;

        assert_eq!(state.notice().map(|n| n.message.as_str()), Some(LOAD_FAILED));
        assert_eq!(state.tasks().len(), 1, "mirror keeps the last good list");
    }

    #[tokio::test]
    async fn test_update_and_delete_failures_surface_notice() {
        let board = controller(vec![task(1, "Essay", "2024-01-01", false)], true);
        let mut state = loaded(&board).await;

        board.api().reject(Endpoint::UpdateTask, 500, None);
        run(&board, &mut state, BoardCommand::ToggleComplete(TaskId(1))).await;
        assert_eq!(state.notice().map(|n| n.message.as_str()), Some(UPDATE_FAILED));

        board.api().reject(Endpoint::DeleteTask, 500, None);
        run(&board, &mut state, BoardCommand::Delete(TaskId(1))).await;
        assert_eq!(state.notice().map(|n| n.message.as_str()), Some(DELETE_FAILED));
    }

    #[tokio::test]
    async fn test_logout_navigates_even_on_failure() {
        let board = controller(vec![], true);
        board.api().reject(Endpoint::Logout, 500, None);

        let events = board.dispatch(&BoardState::new(), BoardCommand::Logout).await;

        assert!(events.is_empty());
        assert_eq!(board.api().call_count(Endpoint::Logout), 1);
        assert_eq!(board.navigator().visited(), vec!["/login"]);
    }

    #[tokio::test]
    async fn test_view_after_reload() {
        let board = controller(
            vec![
                task(1, "Later", "2024-09-01", false),
                task(2, "Done", "2024-01-01", true),
                task(3, "<b>Soon</b>", "2024-02-01", false),
            ],
            true,
        );
        let mut state = loaded(&board).await;
        state.apply(BoardEvent::FilterChanged(Filter::Pending));

        let today = NaiveDate::from_ymd_opt(2024, 6, 1).unwrap();
        let view = state.view(today);
        let ids: Vec<_> = view.cards.iter().map(|c| c.id.0).collect();
        assert_eq!(ids, vec![3, 1]);
        assert!(view.cards[0].overdue);
        assert!(!view.cards[1].overdue);
        assert_eq!(view.cards[0].title, "<b>Soon</b>");
    }
}
