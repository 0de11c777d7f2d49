use leptos::prelude::*;
use leptos_router::components::A;

#[component]
pub fn AccessDeniedPage() -> impl IntoView {
    view! {
        <div class="status-page">
            <h1>"Access denied"</h1>
            <p>"Your account does not have permission to open this page."</p>
            <A href="/">"Back to dashboard"</A>
        </div>
    }
}
