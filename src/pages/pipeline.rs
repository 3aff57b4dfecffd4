use leptos::prelude::*;

use crate::features::pipeline::{use_board, PipelineBoard, PipelineColumn, TaskInput};
use crate::models::Column;

#[component]
pub fn TaskPipeline() -> impl IntoView {
    // Each pipeline owns its own board; nothing is shared between instances
    let hook = use_board();

    view! {
        <div class="pipeline-page">
            <h2 class="pipeline-title">"Task Pipeline"</h2>
            <TaskInput value=hook.pending_input />
            <PipelineBoard>
                {Column::all()
                    .into_iter()
                    .map(|column| view! { <PipelineColumn column=column hook=hook /> })
                    .collect::<Vec<_>>()}
            </PipelineBoard>
        </div>
    }
}
