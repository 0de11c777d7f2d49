use leptos::prelude::*;

use crate::shared::icons::icon;

/// Quick-search box with a clear button.
///
/// Every keystroke is reported immediately; debouncing happens in the list
/// controller, so the box stays responsive while the query waits.
#[component]
pub fn SearchInput(
    /// Text as typed
    #[prop(into)]
    value: Signal<String>,
    #[prop(into)]
    on_change: Callback<String>,
    #[prop(optional, into)]
    placeholder: String,
) -> impl IntoView {
    let placeholder = if placeholder.is_empty() {
        "Search...".to_string()
    } else {
        placeholder
    };

    let is_filter_active = move || !value.get().trim().is_empty();

    view! {
        <div class="search-input">
            <input
                type="text"
                placeholder={placeholder}
                class="search-input__field"
                class:search-input__field--active=is_filter_active
                prop:value=move || value.get()
                on:input=move |ev| on_change.run(event_target_value(&ev))
            />
            <Show when=move || !value.get().is_empty()>
                <button
                    class="search-input__clear"
                    on:click=move |_| on_change.run(String::new())
                    title="Clear"
                >
                    {icon("x")}
                </button>
            </Show>
        </div>
    }
}
