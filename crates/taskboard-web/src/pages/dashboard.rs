//! Dashboard Page
//!
//! Owns the board state. Commands run in the background and their events are
//! applied in one update, after which the task list is re-derived.
//! The controller, and with it the HTTP client, is built once per page.

use std::rc::Rc;

use leptos::ev::{MouseEvent, SubmitEvent};
use leptos::prelude::*;
use taskboard_client::BoardCommand;
use taskboard_core::{
    BoardEvent, BoardState, BoardView, EMPTY_MESSAGE, TaskAction, TaskDraft, TaskId,
};

use crate::browser::{self, BrowserBoard};
use crate::components::{FilterBar, NoticeBanner, TaskCardView, TaskFields};

fn dispatch(controller: Rc<BrowserBoard>, board: RwSignal<BoardState>, command: BoardCommand) {
    let snapshot = board.get_untracked();
    leptos::task::spawn_local(async move {
        let events = controller.dispatch(&snapshot, command).await;
        for event in &events {
            if let BoardEvent::Failed(notice) = event {
                leptos::logging::warn!("{notice}");
            }
        }
        board.update(|state| state.apply_all(events));
    });
}

#[component]
pub fn DashboardPage() -> impl IntoView {
    let controller = StoredValue::new_local(Rc::new(browser::board_controller()));
    let board = RwSignal::new(BoardState::new());
    let draft = RwSignal::new(TaskDraft::default());
    let edit_draft = RwSignal::new(TaskDraft::default());

    let run = move |command: BoardCommand| dispatch(controller.get_value(), board, command);

    run(BoardCommand::LoadUser);
    run(BoardCommand::LoadTasks);

    let view_model = Memo::new(move |_| {
        let today = chrono::Local::now().date_naive();
        board.with(|state| state.view(today))
    });

    // Clear the add form once the backend accepted it.
    let draft_epoch = Memo::new(move |_| board.with(BoardState::draft_epoch));
    Effect::new(move |_| {
        draft_epoch.track();
        draft.set(TaskDraft::default());
    });

    let add_task = move |ev: SubmitEvent| {
        ev.prevent_default();
        run(BoardCommand::Add(draft.get_untracked()));
    };

    let save_edit = move |ev: SubmitEvent| {
        ev.prevent_default();
        if let Some(id) = board.with_untracked(|s| s.editing().map(|t| t.id)) {
            run(BoardCommand::Edit { id, draft: edit_draft.get_untracked() });
        }
    };

    let close_edit = move || board.update(|s| s.apply(BoardEvent::EditClosed));

    let on_action = Callback::new(move |(action, id): (TaskAction, TaskId)| match action {
        TaskAction::Complete => run(BoardCommand::ToggleComplete(id)),
        TaskAction::Delete => run(BoardCommand::Delete(id)),
        TaskAction::Edit => {
            if let Some(task_draft) = board.with_untracked(|s| s.task(id).map(|t| t.draft())) {
                edit_draft.set(task_draft);
                board.update(|s| s.apply(BoardEvent::EditOpened(id)));
            }
        }
    });

    let on_backdrop_click = move |ev: MouseEvent| {
        if ev.target().is_some() && ev.target() == ev.current_target() {
            close_edit();
        }
    };

    view! {
        <div class="dashboard">
            <header class="dashboard-header">
                <h1>"My Tasks"</h1>
                <div class="header-right">
                    <span id="userGreeting">
                        {move || view_model.with(|v| v.greeting.clone().unwrap_or_default())}
                    </span>
                    <button
                        id="logoutBtn"
                        class="btn btn-secondary"
                        on:click=move |_| run(BoardCommand::Logout)
                    >
                        "Logout"
                    </button>
                </div>
            </header>

            <NoticeBanner board=board />

            <div class="dashboard-content">
                <section class="add-task-section">
                    <h2>"Add New Task"</h2>
                    <form id="taskForm" on:submit=add_task>
                        <TaskFields id_prefix="" draft=draft />
                        <button type="submit" class="btn btn-primary">"Add Task"</button>
                    </form>
                </section>

                <section class="tasks-section">
                    <div class="tasks-header">
                        <h2>"Your Tasks"</h2>
                        <FilterBar board=board />
                    </div>
                    <div id="tasksList" class="tasks-list">
                        <Show
                            when=move || !view_model.with(BoardView::is_empty)
                            fallback=|| view! { <p class="empty-message">{EMPTY_MESSAGE}</p> }
                        >
                            <For
                                each=move || view_model.with(|v| v.cards.clone())
                                key=|card| card.clone()
                                children=move |card| view! { <TaskCardView card=card on_action=on_action /> }
                            />
                        </Show>
                    </div>
                </section>
            </div>

            <div
                id="editModal"
                class="modal"
                class:show=move || board.with(|s| s.editing().is_some())
                on:click=on_backdrop_click
            >
                <div class="modal-content">
                    <span class="close" on:click=move |_| close_edit()>"×"</span>
                    <h2>"Edit Task"</h2>
                    <form id="editForm" on:submit=save_edit>
                        <TaskFields id_prefix="edit-" draft=edit_draft />
                        <button type="submit" class="btn btn-primary">"Save Changes"</button>
                    </form>
                </div>
            </div>
        </div>
    }
}
