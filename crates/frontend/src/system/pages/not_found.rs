use leptos::prelude::*;
use leptos_router::components::A;

#[component]
pub fn NotFoundPage() -> impl IntoView {
    view! {
        <div class="status-page">
            <h1>"Page not found"</h1>
            <A href="/">"Back to dashboard"</A>
        </div>
    }
}
