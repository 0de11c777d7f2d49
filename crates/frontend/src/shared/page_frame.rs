//! PageFrame: standard root wrapper for every routed page.

use leptos::prelude::*;

use crate::shared::icons::icon;

/// Sets the page id on the root element and renders the title bar.
#[component]
pub fn PageFrame(
    /// HTML id in format `{screen}--{category}`, e.g. `"consumers--list"`.
    page_id: &'static str,
    title: &'static str,
    #[prop(optional)]
    icon_name: &'static str,
    /// Record count badge shown next to the title
    #[prop(optional, into)]
    count: Option<Signal<u64>>,
    children: Children,
) -> impl IntoView {
    view! {
        <div class="page" id=page_id>
            <div class="page__header">
                <div class="page__header-left">
                    {(!icon_name.is_empty()).then(|| icon(icon_name))}
                    <h1 class="page__title">{title}</h1>
                    {count.map(|count| view! {
                        <span class="badge badge--primary">{move || count.get().to_string()}</span>
                    })}
                </div>
            </div>
            <div class="page__content">
                {children()}
            </div>
        </div>
    }
}
