use contracts::domain::delivery_route::DeliveryRoute;
use contracts::shared::list::SortDirection;
use leptos::prelude::*;
use leptos_router::components::A;

use crate::shared::components::badges::active_badge;
use crate::shared::components::data_grid::{Column, DataGrid};
use crate::shared::components::filter_toggle::{active_filter, ActiveOnlyToggle};
use crate::shared::page_frame::PageFrame;
use crate::shared::remote_list::{use_remote_list, ListOptions};

const ENDPOINT: &str = "/api/routes/";

fn columns() -> Vec<Column<DeliveryRoute>> {
    vec![
        Column::text("code", "Code", |r: &DeliveryRoute| r.code.clone()).sortable(),
        Column::text("name", "Route", |r: &DeliveryRoute| r.name.clone()).sortable(),
        Column::text("area", "Area", |r: &DeliveryRoute| r.area.clone().unwrap_or_default()).sortable(),
        Column::text("delivery_person__name", "Delivery person", |r: &DeliveryRoute| {
            r.delivery_person_name.clone().unwrap_or_else(|| "Unassigned".to_string())
        }),
        Column::new("consumer_count", "Consumers", |r: &DeliveryRoute| {
            let href = format!("/consumers?route={}", r.id.value());
            let count = r.consumer_count.to_string();
            view! { <A href=href>{count}</A> }.into_any()
        })
        .sortable(),
        Column::new("is_active", "Status", |r: &DeliveryRoute| active_badge(r.is_active)),
    ]
}

#[component]
pub fn DeliveryRouteListPage() -> impl IntoView {
    let list = use_remote_list::<DeliveryRoute>(
        ListOptions::new(ENDPOINT).with_default_sort("code", SortDirection::Ascending),
    );

    view! {
        <PageFrame
            page_id="routes--list"
            title="Delivery routes"
            icon_name="routes"
            count=Signal::derive(move || list.total_count())
        >
            <div class="page__toolbar">
                <ActiveOnlyToggle on_change=move |active: bool| list.set_filters(active_filter(active)) />
            </div>
            <DataGrid list=list columns=columns() search_placeholder="Code, route or area..." />
        </PageFrame>
    }
}
