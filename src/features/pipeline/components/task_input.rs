use leptos::prelude::*;

/// The one text field shared by every column's add button.
#[component]
pub fn TaskInput(value: RwSignal<String>) -> impl IntoView {
    view! {
        <div class="task-input-row">
            <input
                type="text"
                class="task-input"
                placeholder="Enter new task"
                prop:value=move || value.get()
                on:input=move |ev| value.set(event_target_value(&ev))
            />
        </div>
    }
}
