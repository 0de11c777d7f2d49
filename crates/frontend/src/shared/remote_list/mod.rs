//! Server-driven list state: pagination, single-column sort, filters and
//! debounced quick search, synchronised with a REST list endpoint.

pub mod controller;
pub mod hook;

pub use controller::{DebounceTicket, FetchRequest, ListController, ListOptions, ListQueryState, SortKey};
pub use hook::{use_remote_list, RemoteList};
