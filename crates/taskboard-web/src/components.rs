//! UI Components

use leptos::prelude::*;
use taskboard_core::{
    BoardEvent, BoardState, DueDate, Filter, Priority, TaskAction, TaskCard, TaskDraft, TaskId,
};

/// Inline error under an auth form
#[component]
pub fn ErrorMessage(error: ReadSignal<Option<String>>) -> impl IntoView {
    view! {
        <div class="error-message" class:show=move || error.with(Option::is_some)>
            {move || error.get().unwrap_or_default()}
        </div>
    }
}

/// Labelled text input bound to a string signal
#[component]
pub fn TextField(
    id: &'static str,
    label: &'static str,
    #[prop(default = "text")] kind: &'static str,
    value: RwSignal<String>,
) -> impl IntoView {
    view! {
        <div class="form-group">
            <label for=id>{label}</label>
            <input
                type=kind
                id=id
                required
                prop:value=move || value.get()
                on:input=move |ev| value.set(event_target_value(&ev))
            />
        </div>
    }
}

/// Title, description, subject, priority and due date inputs, shared by the
/// add form and the edit modal
#[component]
pub fn TaskFields(id_prefix: &'static str, draft: RwSignal<TaskDraft>) -> impl IntoView {
    let field_id = move |name: &str| format!("{id_prefix}{name}");

    view! {
        <div class="form-group">
            <label for=field_id("title")>"Title"</label>
            <input
                type="text"
                id=field_id("title")
                required
                prop:value=move || draft.with(|d| d.title.clone())
                on:input=move |ev| draft.update(|d| d.title = event_target_value(&ev))
            />
        </div>
        <div class="form-group">
            <label for=field_id("description")>"Description"</label>
            <textarea
                id=field_id("description")
                prop:value=move || draft.with(|d| d.description.clone())
                on:input=move |ev| draft.update(|d| d.description = event_target_value(&ev))
            />
        </div>
        <div class="form-group">
            <label for=field_id("subject")>"Subject"</label>
            <input
                type="text"
                id=field_id("subject")
                prop:value=move || draft.with(|d| d.subject.clone())
                on:input=move |ev| draft.update(|d| d.subject = event_target_value(&ev))
            />
        </div>
        <div class="form-row">
            <div class="form-group">
                <label for=field_id("priority")>"Priority"</label>
                <select
                    id=field_id("priority")
                    prop:value=move || draft.with(|d| d.priority.as_str())
                    on:change=move |ev| {
                        let priority = event_target_value(&ev).parse().unwrap_or_default();
                        draft.update(|d| d.priority = priority);
                    }
                >
                    {Priority::ALL
                        .into_iter()
                        .map(|p| view! { <option value=p.as_str()>{p.label()}</option> })
                        .collect_view()}
                </select>
            </div>
            <div class="form-group">
                <label for=field_id("dueDate")>"Due Date"</label>
                <input
                    type="date"
                    id=field_id("dueDate")
                    required
                    prop:value=move || draft.with(|d| d.due_date.as_str().to_string())
                    on:input=move |ev| draft.update(|d| d.due_date = DueDate::new(event_target_value(&ev)))
                />
            </div>
        </div>
    }
}

/// Dismissible error banner for the dashboard
#[component]
pub fn NoticeBanner(board: RwSignal<BoardState>) -> impl IntoView {
    let message = move || board.with(|s| s.notice().map(ToString::to_string));

    view! {
        <Show when=move || message().is_some()>
            <div class="notice" role="alert">
                <span>{move || message().unwrap_or_default()}</span>
                <button
                    class="close"
                    on:click=move |_| board.update(|s| s.apply(BoardEvent::NoticeDismissed))
                >
                    "×"
                </button>
            </div>
        </Show>
    }
}

/// All / Pending / Completed buttons
#[component]
pub fn FilterBar(board: RwSignal<BoardState>) -> impl IntoView {
    view! {
        <div class="filters">
            {Filter::ALL
                .into_iter()
                .map(|filter| {
                    view! {
                        <button
                            class="filter-btn"
                            class:active=move || board.with(|s| s.filter() == filter)
                            data-filter=filter.as_str()
                            on:click=move |_| board.update(|s| s.apply(BoardEvent::FilterChanged(filter)))
                        >
                            {filter.label()}
                        </button>
                    }
                })
                .collect_view()}
        </div>
    }
}

/// One task in the list. Button clicks are reported through `on_action`.
#[component]
pub fn TaskCardView(card: TaskCard, on_action: Callback<(TaskAction, TaskId)>) -> impl IntoView {
    let id = card.id;
    let class = card.class();
    let priority_class = format!("badge badge-priority-{}", card.priority.as_str());
    let buttons = card
        .actions()
        .into_iter()
        .map(|(action, label)| {
            view! {
                <button
                    class=format!("btn-small btn-{}", action.as_str())
                    on:click=move |_| on_action.run((action, id))
                >
                    {label}
                </button>
            }
        })
        .collect_view();

    view! {
        <div class=class data-task-id=id.to_string()>
            <div class="task-header">
                <h3 class="task-title">{card.title}</h3>
            </div>
            <div class="task-badges">
                {card.subject.map(|subject| view! { <span class="badge badge-subject">{subject}</span> })}
                <span class=priority_class>{card.priority.label()}</span>
                {card.overdue.then(|| view! { <span class="badge badge-overdue">"Overdue"</span> })}
            </div>
            {card
                .description
                .map(|description| view! { <p class="task-description">{description}</p> })}
            <div class="task-meta">"📅 Due: " {card.due_label}</div>
            <div class="task-actions">{buttons}</div>
        </div>
    }
}
