use leptos::prelude::*;

#[component]
pub fn PipelineBoard(children: Children) -> impl IntoView {
    view! { <div class="pipeline-board">{children()}</div> }
}
