use leptos::prelude::*;

use crate::config::OverlaySettings;
use crate::pages::TaskPipeline;

#[component]
pub fn App() -> impl IntoView {
    provide_context(OverlaySettings::default());

    view! {
        <main class="app">
            <TaskPipeline />
        </main>
    }
}
