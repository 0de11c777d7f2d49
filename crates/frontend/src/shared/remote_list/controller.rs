use contracts::shared::list::{ordering_param, ListFilter, ListPage, SortDirection};

use crate::config::app_config;
use crate::shared::http::ApiError;

/// Static description of a list view, fixed at mount.
#[derive(Debug, Clone, PartialEq)]
pub struct ListOptions {
    pub endpoint: String,
    pub default_page_size: usize,
    pub max_page_size: usize,
    pub search_param: String,
    /// Merged into every request after the query-derived parameters.
    pub static_params: Vec<(String, String)>,
    pub default_sort: Option<SortKey>,
}

impl ListOptions {
    /// Options for `endpoint` with paging and search defaults from the
    /// application configuration.
    pub fn new(endpoint: impl Into<String>) -> Self {
        let list = &app_config().list;
        Self {
            endpoint: endpoint.into(),
            default_page_size: list.default_page_size,
            max_page_size: list.max_page_size,
            search_param: list.search_param.clone(),
            static_params: Vec::new(),
            default_sort: None,
        }
    }

    pub fn with_page_size(mut self, default_page_size: usize, max_page_size: usize) -> Self {
        self.max_page_size = max_page_size.max(1);
        self.default_page_size = default_page_size.clamp(1, self.max_page_size);
        self
    }

    pub fn with_search_param(mut self, name: impl Into<String>) -> Self {
        self.search_param = name.into();
        self
    }

    pub fn with_static_param(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.static_params.push((name.into(), value.into()));
        self
    }

    pub fn with_default_sort(mut self, field: impl Into<String>, direction: SortDirection) -> Self {
        self.default_sort = Some(SortKey {
            field: field.into(),
            direction,
        });
        self
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SortKey {
    pub field: String,
    pub direction: SortDirection,
}

/// Query-affecting state of a list view. `page` is zero-based.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListQueryState {
    pub page: usize,
    pub page_size: usize,
    pub sort: Option<SortKey>,
    pub filters: Vec<ListFilter>,
    /// Debounced, trimmed search text; empty means no search parameter.
    pub quick_search: String,
}

/// Identifies one scheduled quick-search commit. Only the most recently
/// issued ticket can be committed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DebounceTicket(u64);

/// A fetch the caller must perform; its result is handed back to
/// [`ListController::apply_result`] together with `seq`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchRequest {
    pub seq: u64,
    /// Endpoint path with query string, relative to the API base.
    pub url: String,
}

/// State machine behind a remote list view.
///
/// Setters mutate the query synchronously and return the [`FetchRequest`]
/// the change calls for. Results are applied only when they belong to the
/// latest request, so a slow response can never overwrite a newer one.
#[derive(Debug, Clone)]
pub struct ListController<T> {
    options: ListOptions,
    query: ListQueryState,
    pending_search: String,
    search_generation: u64,
    request_seq: u64,
    rows: Vec<T>,
    total_count: u64,
    total_known: bool,
    loading: bool,
    error: Option<String>,
    disposed: bool,
}

impl<T> ListController<T> {
    pub fn new(options: ListOptions) -> Self {
        let query = ListQueryState {
            page: 0,
            page_size: options.default_page_size.clamp(1, options.max_page_size.max(1)),
            sort: options.default_sort.clone(),
            filters: Vec::new(),
            quick_search: String::new(),
        };
        Self {
            options,
            query,
            pending_search: String::new(),
            search_generation: 0,
            request_seq: 0,
            rows: Vec::new(),
            total_count: 0,
            total_known: false,
            loading: false,
            error: None,
            disposed: false,
        }
    }

    pub fn query(&self) -> &ListQueryState {
        &self.query
    }

    pub fn rows(&self) -> &[T] {
        &self.rows
    }

    pub fn total_count(&self) -> u64 {
        self.total_count
    }

    pub fn total_pages(&self) -> usize {
        let total = self.total_count as usize;
        total.div_ceil(self.query.page_size).max(1)
    }

    pub fn loading(&self) -> bool {
        self.loading
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Search text as typed, before debouncing.
    pub fn pending_search(&self) -> &str {
        &self.pending_search
    }

    pub fn set_page(&mut self, page: usize) -> Option<FetchRequest> {
        self.query.page = self.clamp_page(page);
        self.begin_fetch()
    }

    pub fn set_page_size(&mut self, size: usize) -> Option<FetchRequest> {
        self.query.page_size = size.clamp(1, self.options.max_page_size.max(1));
        self.query.page = self.clamp_page(self.query.page);
        self.begin_fetch()
    }

    /// Replace the sort key. Only one column is sorted at a time.
    pub fn set_sort(&mut self, field: impl Into<String>, direction: SortDirection) -> Option<FetchRequest> {
        self.query.sort = Some(SortKey {
            field: field.into(),
            direction,
        });
        self.restart_query();
        self.begin_fetch()
    }

    /// Header click: flip the direction of the active column, or sort a
    /// new column ascending.
    pub fn toggle_sort(&mut self, field: &str) -> Option<FetchRequest> {
        let direction = match &self.query.sort {
            Some(key) if key.field == field => key.direction.toggled(),
            _ => SortDirection::Ascending,
        };
        self.set_sort(field, direction)
    }

    /// Replace the filter set. An invalid filter is rejected before any
    /// request is made: the previous filters stay and the error is exposed.
    pub fn set_filters(&mut self, filters: Vec<ListFilter>) -> Option<FetchRequest> {
        if let Some(err) = filters.iter().find_map(|f| f.validate().err()) {
            self.error = Some(ApiError::Validation(err.to_string()).to_string());
            return None;
        }
        self.query.filters = filters;
        self.restart_query();
        self.begin_fetch()
    }

    /// Record typed search text and issue a ticket for committing it once
    /// input has been quiet. Issuing a ticket invalidates earlier ones.
    pub fn set_quick_search(&mut self, text: impl Into<String>) -> DebounceTicket {
        self.pending_search = text.into();
        self.search_generation += 1;
        DebounceTicket(self.search_generation)
    }

    /// Apply the pending search text if `ticket` is still current and the
    /// effective (trimmed) value changed.
    pub fn commit_quick_search(&mut self, ticket: DebounceTicket) -> Option<FetchRequest> {
        if self.disposed || ticket.0 != self.search_generation {
            return None;
        }
        let normalized = self.pending_search.trim();
        if normalized == self.query.quick_search {
            return None;
        }
        self.query.quick_search = normalized.to_string();
        self.restart_query();
        self.begin_fetch()
    }

    /// Re-issue the current query.
    pub fn refresh(&mut self) -> Option<FetchRequest> {
        self.begin_fetch()
    }

    /// Hand back the outcome of `seq`. Returns `false` when the result was
    /// discarded because a newer request exists or the view is gone.
    pub fn apply_result(&mut self, seq: u64, result: Result<ListPage<T>, ApiError>) -> bool {
        if self.disposed || seq != self.request_seq {
            return false;
        }
        match result {
            Ok(page) => {
                let (rows, count) = page.into_parts();
                self.rows = rows;
                self.total_count = count;
                self.total_known = true;
                self.error = None;
            }
            Err(err) => {
                self.rows = Vec::new();
                self.total_count = 0;
                self.total_known = false;
                self.error = Some(err.to_string());
            }
        }
        self.loading = false;
        true
    }

    /// Called on unmount: in-flight results and pending search commits
    /// become no-ops.
    pub fn dispose(&mut self) {
        self.disposed = true;
        self.search_generation += 1;
        self.loading = false;
    }

    /// Query parameters in wire order: paging, ordering, search, filters,
    /// then static parameters.
    pub fn query_params(&self) -> Vec<(String, String)> {
        let mut params = vec![
            ("page".to_string(), (self.query.page + 1).to_string()),
            ("page_size".to_string(), self.query.page_size.to_string()),
        ];
        if let Some(sort) = &self.query.sort {
            params.push(("ordering".to_string(), ordering_param(&sort.field, sort.direction)));
        }
        if !self.query.quick_search.is_empty() {
            params.push((self.options.search_param.clone(), self.query.quick_search.clone()));
        }
        for filter in &self.query.filters {
            params.push((filter.param_name(), filter.value.clone()));
        }
        params.extend(self.options.static_params.iter().cloned());
        params
    }

    pub fn request_url(&self) -> String {
        let query = self
            .query_params()
            .iter()
            .map(|(key, value)| format!("{}={}", urlencoding::encode(key), urlencoding::encode(value)))
            .collect::<Vec<_>>()
            .join("&");
        let endpoint = &self.options.endpoint;
        let separator = match endpoint.split_once('?') {
            None => "?",
            Some((_, existing)) if existing.is_empty() || existing.ends_with('&') => "",
            Some(_) => "&",
        };
        format!("{}{}{}", endpoint, separator, query)
    }

    /// Back to the first page of a different result set. The previous
    /// count no longer describes it, so paging is not clamped until the
    /// new count arrives.
    fn restart_query(&mut self) {
        self.query.page = 0;
        self.total_known = false;
    }

    fn begin_fetch(&mut self) -> Option<FetchRequest> {
        if self.disposed {
            return None;
        }
        self.request_seq += 1;
        self.loading = true;
        Some(FetchRequest {
            seq: self.request_seq,
            url: self.request_url(),
        })
    }

    /// Keep `page` inside the known result set.
    fn clamp_page(&self, page: usize) -> usize {
        if !self.total_known {
            return page;
        }
        let total = self.total_count as usize;
        if total == 0 {
            return 0;
        }
        page.min((total - 1) / self.query.page_size)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn options(endpoint: &str) -> ListOptions {
        ListOptions {
            endpoint: endpoint.to_string(),
            default_page_size: 10,
            max_page_size: 100,
            search_param: "search".to_string(),
            static_params: Vec::new(),
            default_sort: None,
        }
    }

    fn page_of(rows: Vec<u32>, count: u64) -> Result<ListPage<u32>, ApiError> {
        Ok(ListPage::Paginated { results: rows, count })
    }

    #[test]
    fn test_initial_state() {
        let controller: ListController<u32> = ListController::new(options("/api/consumers/"));
        assert_eq!(controller.query().page, 0);
        assert_eq!(controller.query().page_size, 10);
        assert!(controller.query().filters.is_empty());
        assert!(controller.query().quick_search.is_empty());
        assert!(!controller.loading());
        assert_eq!(controller.total_pages(), 1);
    }

    #[test]
    fn test_debounce_only_last_value_fetches() {
        let mut controller: ListController<u32> = ListController::new(options("/consumers/"));
        let first = controller.set_quick_search("r");
        let second = controller.set_quick_search("ra");
        let last = controller.set_quick_search("ravi");
        assert_eq!(controller.pending_search(), "ravi");
        assert_eq!(controller.query().quick_search, "");

        assert_eq!(controller.commit_quick_search(first), None);
        assert_eq!(controller.commit_quick_search(second), None);
        let request = controller.commit_quick_search(last).expect("one fetch");
        assert!(request.url.contains("search=ravi"));
        assert_eq!(controller.commit_quick_search(last), None);
    }

    #[test]
    fn test_whitespace_search_sends_no_parameter() {
        let mut controller: ListController<u32> = ListController::new(options("/consumers/"));
        let ticket = controller.set_quick_search("ravi");
        controller.commit_quick_search(ticket);
        let ticket = controller.set_quick_search("   ");
        let request = controller.commit_quick_search(ticket).expect("search cleared");
        assert_eq!(request.url, "/consumers/?page=1&page_size=10");
    }

    #[test]
    fn test_query_changes_reset_page() {
        let mut controller: ListController<u32> = ListController::new(options("/consumers/"));
        controller.set_page(4);
        controller.set_sort("name", SortDirection::Ascending);
        assert_eq!(controller.query().page, 0);

        controller.set_page(4);
        controller.set_filters(vec![ListFilter::exact("is_active", "true")]);
        assert_eq!(controller.query().page, 0);

        controller.set_page(4);
        let ticket = controller.set_quick_search("gas");
        assert_eq!(controller.query().page, 4);
        controller.commit_quick_search(ticket);
        assert_eq!(controller.query().page, 0);
    }

    #[test]
    fn test_pagination_and_ordering_parameters() {
        let mut controller: ListController<u32> = ListController::new(options("/consumers/"));
        controller.set_page_size(20);
        let request = controller.set_page(2).unwrap();
        assert_eq!(request.url, "/consumers/?page=3&page_size=20");

        let request = controller.set_sort("name", SortDirection::Descending).unwrap();
        assert!(request.url.contains("ordering=-name"));
        let request = controller.set_sort("name", SortDirection::Ascending).unwrap();
        assert!(request.url.contains("ordering=name"));
        assert!(!request.url.contains("ordering=-name"));
    }

    #[test]
    fn test_toggle_sort() {
        let mut controller: ListController<u32> = ListController::new(options("/routes/"));
        controller.toggle_sort("code");
        assert_eq!(
            controller.query().sort,
            Some(SortKey { field: "code".to_string(), direction: SortDirection::Ascending })
        );
        controller.toggle_sort("code");
        assert_eq!(controller.query().sort.as_ref().unwrap().direction, SortDirection::Descending);
        controller.toggle_sort("name");
        assert_eq!(
            controller.query().sort,
            Some(SortKey { field: "name".to_string(), direction: SortDirection::Ascending })
        );
    }

    #[test]
    fn test_stale_response_rejected() {
        let mut controller: ListController<u32> = ListController::new(options("/consumers/"));
        let a = controller.set_page(1).unwrap();
        let b = controller.set_page(2).unwrap();

        assert!(!controller.apply_result(a.seq, page_of(vec![1, 2], 30)));
        assert!(controller.loading());
        assert!(controller.apply_result(b.seq, page_of(vec![3, 4], 31)));

        assert_eq!(controller.rows(), &[3, 4]);
        assert_eq!(controller.total_count(), 31);
        assert!(!controller.loading());
    }

    #[test]
    fn test_stale_response_after_newer_one_is_ignored() {
        let mut controller: ListController<u32> = ListController::new(options("/consumers/"));
        let a = controller.refresh().unwrap();
        let b = controller.set_sort("name", SortDirection::Descending).unwrap();

        assert!(controller.apply_result(b.seq, page_of(vec![9], 1)));
        assert!(!controller.apply_result(a.seq, page_of(vec![1, 2, 3], 3)));
        assert_eq!(controller.rows(), &[9]);
        assert_eq!(controller.total_count(), 1);
    }

    #[test]
    fn test_failure_clears_rows_and_reports_error() {
        let mut controller: ListController<u32> = ListController::new(options("/consumers/"));
        let first = controller.refresh().unwrap();
        controller.apply_result(first.seq, page_of(vec![1, 2], 2));

        let second = controller.refresh().unwrap();
        let applied = controller.apply_result(
            second.seq,
            Err(ApiError::Status { status: 500, message: "boom".to_string() }),
        );
        assert!(applied);
        assert!(controller.rows().is_empty());
        assert_eq!(controller.total_count(), 0);
        assert!(!controller.loading());
        assert_eq!(controller.error(), Some("Server error 500: boom"));
    }

    #[test]
    fn test_invalid_filter_rejected_without_request() {
        let mut controller: ListController<u32> = ListController::new(options("/consumers/"));
        controller.set_filters(vec![ListFilter::exact("route", "7")]);
        let request = controller.set_filters(vec![ListFilter::new("route", "regex", "7")]);
        assert_eq!(request, None);
        assert_eq!(controller.query().filters, vec![ListFilter::exact("route", "7")]);
        assert!(controller.error().unwrap().contains("regex"));
    }

    #[test]
    fn test_page_clamped_to_last_page() {
        let mut controller: ListController<u32> = ListController::new(options("/consumers/"));
        let request = controller.refresh().unwrap();
        controller.apply_result(request.seq, page_of(vec![1; 10], 25));

        let request = controller.set_page(7).unwrap();
        assert_eq!(controller.query().page, 2);
        assert!(request.url.starts_with("/consumers/?page=3&"));

        controller.set_page_size(50);
        assert_eq!(controller.query().page, 0);
    }

    #[test]
    fn test_page_size_bounded_by_max() {
        let mut controller: ListController<u32> = ListController::new(options("/consumers/"));
        controller.set_page_size(1000);
        assert_eq!(controller.query().page_size, 100);
        controller.set_page_size(0);
        assert_eq!(controller.query().page_size, 1);
    }

    #[test]
    fn test_filters_and_static_params_are_merged() {
        let opts = options("/api/consumers/")
            .with_static_param("route", "7")
            .with_default_sort("name", SortDirection::Ascending);
        let mut controller: ListController<u32> = ListController::new(opts);
        let request = controller
            .set_filters(vec![
                ListFilter::exact("is_active", "true"),
                ListFilter::new("name", "icontains", "sri ram"),
            ])
            .unwrap();
        assert_eq!(
            request.url,
            "/api/consumers/?page=1&page_size=10&ordering=name&is_active=true&name__icontains=sri%20ram&route=7"
        );
    }

    #[test]
    fn test_endpoint_with_existing_query() {
        let mut controller: ListController<u32> = ListController::new(options("/api/users/?is_staff=true"));
        let request = controller.refresh().unwrap();
        assert_eq!(request.url, "/api/users/?is_staff=true&page=1&page_size=10");
    }

    #[test]
    fn test_endpoint_with_trailing_separator() {
        let mut controller: ListController<u32> = ListController::new(options("/api/users/?"));
        let request = controller.refresh().unwrap();
        assert_eq!(request.url, "/api/users/?page=1&page_size=10");

        let mut controller: ListController<u32> = ListController::new(options("/api/users/?is_staff=true&"));
        let request = controller.refresh().unwrap();
        assert_eq!(request.url, "/api/users/?is_staff=true&page=1&page_size=10");
    }

    #[test]
    fn test_no_clamp_against_previous_query_count() {
        let mut controller: ListController<u32> = ListController::new(options("/consumers/"));
        let request = controller
            .set_filters(vec![ListFilter::exact("is_active", "true")])
            .unwrap();
        controller.apply_result(request.seq, page_of(vec![1; 5], 5));

        controller.set_filters(Vec::new());
        let request = controller.set_page(3).unwrap();
        assert_eq!(controller.query().page, 3);
        assert!(request.url.starts_with("/consumers/?page=4&"));

        controller.apply_result(request.seq, page_of(vec![1; 10], 120));
        controller.set_page(20);
        assert_eq!(controller.query().page, 11);
    }

    #[test]
    fn test_sort_and_search_changes_forget_previous_count() {
        let mut controller: ListController<u32> = ListController::new(options("/consumers/"));
        let request = controller.refresh().unwrap();
        controller.apply_result(request.seq, page_of(vec![1; 10], 12));

        controller.set_sort("name", SortDirection::Ascending);
        controller.set_page(5);
        assert_eq!(controller.query().page, 5);

        let request = controller.refresh().unwrap();
        controller.apply_result(request.seq, page_of(vec![1; 10], 12));
        let ticket = controller.set_quick_search("ravi");
        controller.commit_quick_search(ticket);
        controller.set_page(5);
        assert_eq!(controller.query().page, 5);
    }

    #[test]
    fn test_dispose_blocks_late_results_and_commits() {
        let mut controller: ListController<u32> = ListController::new(options("/consumers/"));
        let request = controller.refresh().unwrap();
        let ticket = controller.set_quick_search("ravi");
        controller.dispose();

        assert!(!controller.apply_result(request.seq, page_of(vec![1], 1)));
        assert!(controller.rows().is_empty());
        assert_eq!(controller.commit_quick_search(ticket), None);
        assert_eq!(controller.refresh(), None);
    }

    #[test]
    fn test_consumer_search_scenario() {
        let mut controller: ListController<u32> = ListController::new(options("/consumers/"));
        let ticket = controller.set_quick_search("ravi");
        let request = controller.commit_quick_search(ticket).unwrap();
        assert_eq!(request.url, "/consumers/?page=1&page_size=10&search=ravi");

        assert!(controller.apply_result(request.seq, page_of((1..=8).collect(), 8)));
        assert_eq!(controller.total_count(), 8);
        assert_eq!(controller.rows().len(), 8);
        assert!(!controller.loading());
        assert_eq!(controller.error(), None);
    }

    #[test]
    fn test_bare_array_response() {
        let mut controller: ListController<u32> = ListController::new(options("/lookups/cylinder-types/"));
        let request = controller.refresh().unwrap();
        controller.apply_result(request.seq, Ok(ListPage::Bare(vec![5, 6, 7])));
        assert_eq!(controller.total_count(), 3);
        assert_eq!(controller.total_pages(), 1);
    }
}
