use contracts::shared::list::ListFilter;
use leptos::prelude::*;

/// Filter set for an "active only" switch.
pub fn active_filter(active_only: bool) -> Vec<ListFilter> {
    if active_only {
        vec![ListFilter::exact("is_active", "true")]
    } else {
        Vec::new()
    }
}

#[component]
pub fn ActiveOnlyToggle(
    #[prop(into)]
    on_change: Callback<bool>,
    #[prop(optional)]
    label: &'static str,
) -> impl IntoView {
    let label = if label.is_empty() { "Active only" } else { label };

    view! {
        <label class="filter-toggle">
            <input
                type="checkbox"
                on:change=move |ev| on_change.run(event_target_checked(&ev))
            />
            {label}
        </label>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_active_filter() {
        assert!(active_filter(false).is_empty());
        let filters = active_filter(true);
        assert_eq!(filters, vec![ListFilter::exact("is_active", "true")]);
        assert!(filters[0].validate().is_ok());
    }
}
