use leptos::prelude::*;

pub fn active_badge(is_active: bool) -> AnyView {
    if is_active {
        view! { <span class="badge badge--success">"Active"</span> }.into_any()
    } else {
        view! { <span class="badge badge--secondary">"Inactive"</span> }.into_any()
    }
}

/// Comma-separated tags, or a dash when empty.
pub fn tag_list(items: &[String]) -> AnyView {
    if items.is_empty() {
        return view! { <span class="text-muted">"—"</span> }.into_any();
    }
    items
        .iter()
        .map(|item| view! { <span class="badge badge--primary">{item.clone()}</span> })
        .collect_view()
        .into_any()
}
