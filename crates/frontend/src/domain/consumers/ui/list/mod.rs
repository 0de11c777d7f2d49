use contracts::domain::consumer::Consumer;
use contracts::shared::list::SortDirection;
use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::use_query_map;

use crate::shared::components::badges::active_badge;
use crate::shared::components::data_grid::{Column, DataGrid};
use crate::shared::components::filter_toggle::{active_filter, ActiveOnlyToggle};
use crate::shared::date_utils::format_optional_date;
use crate::shared::page_frame::PageFrame;
use crate::shared::remote_list::{use_remote_list, ListOptions};

const ENDPOINT: &str = "/api/consumers/";

fn columns() -> Vec<Column<Consumer>> {
    vec![
        Column::text("consumer_number", "Consumer No.", |c: &Consumer| c.consumer_number.clone()).sortable(),
        Column::text("name", "Name", |c: &Consumer| c.name.clone()).sortable(),
        Column::text("phone", "Phone", |c: &Consumer| c.phone.clone().unwrap_or_default()),
        Column::text("address", "Address", |c: &Consumer| c.address.clone().unwrap_or_default()),
        Column::text("route__name", "Route", |c: &Consumer| {
            c.route_name.clone().unwrap_or_else(|| "—".to_string())
        })
        .sortable(),
        Column::text("cylinders_held", "Cylinders", |c: &Consumer| c.cylinders_held.to_string()).sortable(),
        Column::text("last_delivery_on", "Last delivery", |c: &Consumer| {
            format_optional_date(c.last_delivery_on.as_ref())
        })
        .sortable(),
        Column::new("is_active", "Status", |c: &Consumer| active_badge(c.is_active)),
    ]
}

/// Grid for one route (or all consumers). Remounted when the route changes
/// so the static `route` parameter never goes stale.
#[component]
fn ConsumerGrid(route: Option<String>) -> impl IntoView {
    let mut options = ListOptions::new(ENDPOINT).with_default_sort("name", SortDirection::Ascending);
    if let Some(route) = &route {
        options = options.with_static_param("route", route.clone());
    }
    let list = use_remote_list::<Consumer>(options);

    view! {
        <div class="page__toolbar">
            {route.map(|route| view! {
                <span class="page__context">
                    {format!("Route #{}", route)}
                    " "
                    <A href="/consumers">"Show all consumers"</A>
                </span>
            })}
            <ActiveOnlyToggle on_change=move |active: bool| list.set_filters(active_filter(active)) />
            <span class="badge badge--primary">{move || format!("{} consumers", list.total_count())}</span>
        </div>
        <DataGrid
            list=list
            columns=columns()
            search_placeholder="Name, consumer number, phone..."
        />
    }
}

#[component]
pub fn ConsumerListPage() -> impl IntoView {
    let query = use_query_map();
    let route = Memo::new(move |_| query.with(|q| q.get("route")));

    view! {
        <PageFrame page_id="consumers--list" title="Consumers" icon_name="consumers">
            {move || view! { <ConsumerGrid route=route.get() /> }}
        </PageFrame>
    }
}
