pub mod dashboard;
pub mod sidebar;
pub mod top_header;

pub use dashboard::DashboardHome;

use leptos::prelude::*;
use leptos_router::components::Outlet;
use sidebar::Sidebar;
use top_header::TopHeader;

/// Main application shell.
///
/// ```text
/// +------------------------------------------+
/// |              TopHeader                    |
/// +------------------------------------------+
/// |  Sidebar  |          Content             |
/// +------------------------------------------+
/// ```
#[component]
pub fn MainLayout() -> impl IntoView {
    let (sidebar_open, set_sidebar_open) = signal(true);

    view! {
        <div class="app-layout">
            <TopHeader on_toggle_sidebar=Callback::new(move |_| set_sidebar_open.update(|open| *open = !*open)) />
            <div class="app-body">
                <div data-zone="left" class="left" class:hidden=move || !sidebar_open.get()>
                    <Sidebar />
                </div>
                <div class="app-main">
                    <Outlet />
                </div>
            </div>
        </div>
    }
}
