use leptos::ev::DragEvent;
use leptos::logging::warn;
use leptos::prelude::*;

use crate::models::{Column, Task};

#[component]
pub fn TaskCard(
    column: Column,
    index: usize,
    task: Task,
    on_remove: Callback<(Column, usize)>,
    on_drag_start: Callback<(Column, usize)>,
    on_drag_end: Callback<()>,
) -> impl IntoView {
    let added_at = task.added_at();
    let payload = task.label.clone();

    let handle_drag_start = move |ev: DragEvent| {
        // Firefox won't start a drag without a payload
        if let Some(data) = ev.data_transfer() {
            data.set_effect_allowed("move");
            if data.set_data("text/plain", &payload).is_err() {
                warn!("Could not attach drag payload");
            }
        }
        on_drag_start.run((column, index));
    };

    view! {
        <div
            class="task-card"
            draggable="true"
            title=added_at
            on:dragstart=handle_drag_start
            on:dragend=move |_| on_drag_end.run(())
        >
            <span class="task-label">{task.label}</span>
            <div class="task-actions">
                <span class="move-icon" aria-hidden="true">"⇔"</span>
                <button
                    class="task-remove-btn"
                    title="Remove task"
                    on:click=move |_| on_remove.run((column, index))
                >"×"</button>
            </div>
        </div>
    }
}
