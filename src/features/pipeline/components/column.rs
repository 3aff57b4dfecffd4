use leptos::ev::DragEvent;
use leptos::prelude::*;

use super::{DropletOverlay, TaskCard};
use crate::features::pipeline::hooks::BoardHook;
use crate::models::Column;

#[component]
pub fn PipelineColumn(column: Column, hook: BoardHook) -> impl IntoView {
    let BoardHook {
        board,
        dragged,
        add_task,
        remove_task,
        begin_move,
        complete_move,
        cancel_move,
        ..
    } = hook;

    // Highlight every column a drag could land in, i.e. all but its source
    let is_drop_target =
        move || dragged.with(|drag| drag.as_ref().is_some_and(|drag| drag.source != column));

    view! {
        <section
            class="pipeline-column"
            // Without preventDefault the browser refuses the drop
            on:dragover=move |ev: DragEvent| ev.prevent_default()
            on:drop=move |ev: DragEvent| {
                ev.prevent_default();
                complete_move.run(column);
            }
        >
            <div class="column-header">
                <h3>{column.title()}</h3>
                <span class="task-count">{move || board.with(|board| board.len(column))}</span>
            </div>
            <div class="column-pipe">
                <DropletOverlay />
                <div class="pipe-glass" class:drop-target=is_drop_target></div>
                <div class="column-content">
                    {move || {
                        board.with(|board| {
                            board
                                .tasks(column)
                                .iter()
                                .cloned()
                                .enumerate()
                                .map(|(index, task)| {
                                    view! {
                                        <TaskCard
                                            column=column
                                            index=index
                                            task=task
                                            on_remove=remove_task
                                            on_drag_start=begin_move
                                            on_drag_end=cancel_move
                                        />
                                    }
                                })
                                .collect::<Vec<_>>()
                        })
                    }}
                    <button class="btn-primary add-btn" on:click=move |_| add_task.run(column)>
                        <span class="add-icon" aria-hidden="true">"⊕"</span>
                        {format!("Add to {}", column.as_str())}
                    </button>
                </div>
            </div>
        </section>
    }
}
