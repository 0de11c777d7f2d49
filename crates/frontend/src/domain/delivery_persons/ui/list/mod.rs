use contracts::domain::delivery_person::DeliveryPerson;
use contracts::shared::list::SortDirection;
use leptos::prelude::*;

use crate::shared::components::badges::{active_badge, tag_list};
use crate::shared::components::data_grid::{Column, DataGrid};
use crate::shared::components::filter_toggle::{active_filter, ActiveOnlyToggle};
use crate::shared::date_utils::format_optional_date;
use crate::shared::page_frame::PageFrame;
use crate::shared::remote_list::{use_remote_list, ListOptions};

const ENDPOINT: &str = "/api/delivery-persons/";

fn columns() -> Vec<Column<DeliveryPerson>> {
    vec![
        Column::text("name", "Name", |p: &DeliveryPerson| p.name.clone()).sortable(),
        Column::text("phone", "Phone", |p: &DeliveryPerson| p.phone.clone()),
        Column::text("vehicle_number", "Vehicle", |p: &DeliveryPerson| {
            p.vehicle_number.clone().unwrap_or_default()
        }),
        Column::new("routes", "Routes", |p: &DeliveryPerson| tag_list(&p.route_names)),
        Column::text("joined_on", "Joined", |p: &DeliveryPerson| {
            format_optional_date(p.joined_on.as_ref())
        })
        .sortable(),
        Column::new("is_active", "Status", |p: &DeliveryPerson| active_badge(p.is_active)),
    ]
}

#[component]
pub fn DeliveryPersonListPage() -> impl IntoView {
    let list = use_remote_list::<DeliveryPerson>(
        ListOptions::new(ENDPOINT).with_default_sort("name", SortDirection::Ascending),
    );

    view! {
        <PageFrame
            page_id="delivery_persons--list"
            title="Delivery persons"
            icon_name="delivery"
            count=Signal::derive(move || list.total_count())
        >
            <div class="page__toolbar">
                <ActiveOnlyToggle on_change=move |active: bool| list.set_filters(active_filter(active)) />
            </div>
            <DataGrid list=list columns=columns() search_placeholder="Name, phone or vehicle..." />
        </PageFrame>
    }
}
