use leptos::prelude::*;
use serde::de::DeserializeOwned;

use crate::shared::icons::icon;
use crate::shared::remote_list::RemoteList;

/// Snapshot of the paging position of a remote list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pager {
    /// Zero-based
    pub page: usize,
    pub page_size: usize,
    pub total_pages: usize,
    pub total_count: u64,
}

impl Pager {
    pub fn has_previous(&self) -> bool {
        self.page > 0
    }

    pub fn has_next(&self) -> bool {
        self.page + 1 < self.total_pages
    }

    pub fn previous(&self) -> Option<usize> {
        self.has_previous().then(|| self.page - 1)
    }

    pub fn next(&self) -> Option<usize> {
        self.has_next().then(|| self.page + 1)
    }

    pub fn last(&self) -> usize {
        self.total_pages.saturating_sub(1)
    }

    /// "21-30 of 45", or "No records" for an empty result.
    pub fn range_label(&self) -> String {
        if self.total_count == 0 {
            return "No records".to_string();
        }
        let first = (self.page * self.page_size) as u64 + 1;
        let last = ((self.page + 1) * self.page_size) as u64;
        format!("{}-{} of {}", first, last.min(self.total_count), self.total_count)
    }
}

/// Page size picked from the selector, if it is one of the offered sizes.
pub fn parse_page_size(raw: &str, options: &[usize]) -> Option<usize> {
    raw.parse::<usize>().ok().filter(|size| options.contains(size))
}

#[component]
pub fn PaginationControls<T>(list: RemoteList<T>, page_size_options: Vec<usize>) -> impl IntoView
where
    T: DeserializeOwned + Clone + Send + Sync + 'static,
{
    let pager = Memo::new(move |_| {
        let query = list.query();
        Pager {
            page: query.page,
            page_size: query.page_size,
            total_pages: list.total_pages(),
            total_count: list.total_count(),
        }
    });
    let options = StoredValue::new(page_size_options);

    view! {
        <div class="pagination-controls">
            <button
                class="pagination-btn"
                on:click=move |_| list.set_page(0)
                disabled=move || !pager.get().has_previous()
                title="First page"
            >
                {icon("chevrons-left")}
            </button>
            <button
                class="pagination-btn"
                on:click=move |_| {
                    if let Some(page) = pager.get_untracked().previous() {
                        list.set_page(page);
                    }
                }
                disabled=move || !pager.get().has_previous()
                title="Previous page"
            >
                {icon("chevron-left")}
            </button>
            <span class="pagination-info">{move || pager.get().range_label()}</span>
            <button
                class="pagination-btn"
                on:click=move |_| {
                    if let Some(page) = pager.get_untracked().next() {
                        list.set_page(page);
                    }
                }
                disabled=move || !pager.get().has_next()
                title="Next page"
            >
                {icon("chevron-right")}
            </button>
            <button
                class="pagination-btn"
                on:click=move |_| list.set_page(pager.get_untracked().last())
                disabled=move || !pager.get().has_next()
                title="Last page"
            >
                {icon("chevrons-right")}
            </button>
            <select
                class="page-size-select"
                on:change=move |ev| {
                    let raw = event_target_value(&ev);
                    match options.with_value(|sizes| parse_page_size(&raw, sizes)) {
                        Some(size) => list.set_page_size(size),
                        None => log::warn!("ignoring page size {:?}", raw),
                    }
                }
                prop:value=move || pager.get().page_size.to_string()
            >
                {options.get_value().into_iter().map(|size| {
                    view! {
                        <option value=size.to_string() selected=move || pager.get().page_size == size>
                            {size.to_string()}
                        </option>
                    }
                }).collect_view()}
            </select>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pager(page: usize, page_size: usize, total_count: u64) -> Pager {
        let total_pages = (total_count as usize).div_ceil(page_size).max(1);
        Pager { page, page_size, total_pages, total_count }
    }

    #[test]
    fn test_navigation_bounds() {
        let first = pager(0, 10, 25);
        assert_eq!(first.previous(), None);
        assert_eq!(first.next(), Some(1));
        assert_eq!(first.last(), 2);

        let last = pager(2, 10, 25);
        assert_eq!(last.previous(), Some(1));
        assert_eq!(last.next(), None);

        let empty = pager(0, 10, 0);
        assert!(!empty.has_previous());
        assert!(!empty.has_next());
        assert_eq!(empty.last(), 0);
    }

    #[test]
    fn test_range_label() {
        assert_eq!(pager(0, 10, 8).range_label(), "1-8 of 8");
        assert_eq!(pager(2, 10, 25).range_label(), "21-25 of 25");
        assert_eq!(pager(1, 25, 100).range_label(), "26-50 of 100");
        assert_eq!(pager(0, 10, 0).range_label(), "No records");
    }

    #[test]
    fn test_parse_page_size() {
        let options = [10, 25, 50, 100];
        assert_eq!(parse_page_size("25", &options), Some(25));
        assert_eq!(parse_page_size("30", &options), None);
        assert_eq!(parse_page_size("abc", &options), None);
    }
}
