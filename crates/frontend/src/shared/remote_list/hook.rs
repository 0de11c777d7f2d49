use contracts::shared::list::{ListFilter, ListPage};
use gloo_timers::callback::Timeout;
use leptos::prelude::*;
use leptos::task::spawn_local;
use serde::de::DeserializeOwned;

use super::controller::{DebounceTicket, FetchRequest, ListController, ListOptions, ListQueryState};
use crate::config::app_config;
use crate::shared::http::{use_api_client, ApiClient};

/// Reactive handle to a [`ListController`] owned by the current component.
pub struct RemoteList<T: 'static> {
    controller: RwSignal<ListController<T>>,
    search_timer: StoredValue<Option<Timeout>, LocalStorage>,
    client: ApiClient,
    debounce_ms: u32,
}

impl<T: 'static> Clone for RemoteList<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: 'static> Copy for RemoteList<T> {}

/// Mount a remote list and issue its first fetch.
///
/// Unmounting the calling component cancels the pending search timer and
/// turns any in-flight response into a no-op.
pub fn use_remote_list<T>(options: ListOptions) -> RemoteList<T>
where
    T: DeserializeOwned + Clone + Send + Sync + 'static,
{
    let list = RemoteList {
        controller: RwSignal::new(ListController::new(options)),
        search_timer: StoredValue::new_local(None),
        client: use_api_client(),
        debounce_ms: app_config().list.debounce_ms,
    };

    on_cleanup(move || list.dispose());
    list.refresh();
    list
}

impl<T> RemoteList<T>
where
    T: DeserializeOwned + Clone + Send + Sync + 'static,
{
    pub fn rows(&self) -> Vec<T> {
        self.controller.with(|c| c.rows().to_vec())
    }

    pub fn total_count(&self) -> u64 {
        self.controller.with(|c| c.total_count())
    }

    pub fn total_pages(&self) -> usize {
        self.controller.with(|c| c.total_pages())
    }

    pub fn loading(&self) -> bool {
        self.controller.with(|c| c.loading())
    }

    pub fn error(&self) -> Option<String> {
        self.controller.with(|c| c.error().map(str::to_string))
    }

    pub fn query(&self) -> ListQueryState {
        self.controller.with(|c| c.query().clone())
    }

    pub fn pending_search(&self) -> String {
        self.controller.with(|c| c.pending_search().to_string())
    }

    pub fn set_page(&self, page: usize) {
        self.dispatch(|c| c.set_page(page));
    }

    pub fn set_page_size(&self, size: usize) {
        self.dispatch(|c| c.set_page_size(size));
    }

    pub fn toggle_sort(&self, field: &str) {
        self.dispatch(|c| c.toggle_sort(field));
    }

    pub fn set_filters(&self, filters: Vec<ListFilter>) {
        self.dispatch(|c| c.set_filters(filters));
    }

    pub fn refresh(&self) {
        self.dispatch(|c| c.refresh());
    }

    /// Update the typed text now; the query follows after the debounce
    /// interval. Replacing the stored timer drops, and so cancels, the
    /// previous one.
    pub fn set_quick_search(&self, text: String) {
        let Some(ticket) = self.controller.try_update(|c| c.set_quick_search(text)) else {
            return;
        };
        let list = *self;
        let timer = Timeout::new(self.debounce_ms, move || list.commit_quick_search(ticket));
        self.search_timer.set_value(Some(timer));
    }

    fn commit_quick_search(&self, ticket: DebounceTicket) {
        self.dispatch(|c| c.commit_quick_search(ticket));
    }

    fn dispatch(&self, change: impl FnOnce(&mut ListController<T>) -> Option<FetchRequest>) {
        if let Some(Some(request)) = self.controller.try_update(change) {
            self.spawn_fetch(request);
        }
    }

    fn spawn_fetch(&self, request: FetchRequest) {
        let controller = self.controller;
        let client = self.client;
        log::debug!("list fetch #{}: {}", request.seq, request.url);

        spawn_local(async move {
            let outcome = client.get_json::<ListPage<T>>(&request.url).await;
            if let Err(e) = &outcome {
                log::warn!("list fetch #{} failed: {}", request.seq, e);
            }
            // A disposed signal means the view unmounted while waiting.
            match controller.try_update(|c| c.apply_result(request.seq, outcome)) {
                Some(true) => {}
                Some(false) => log::debug!("discarded stale response #{}", request.seq),
                None => log::debug!("list unmounted before response #{}", request.seq),
            }
        });
    }

    fn dispose(&self) {
        self.search_timer.try_update_value(|timer| timer.take());
        self.controller.try_update_untracked(|c| c.dispose());
    }
}
