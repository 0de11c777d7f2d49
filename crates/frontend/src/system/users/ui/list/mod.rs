use contracts::shared::list::SortDirection;
use contracts::system::users::User;
use leptos::prelude::*;

use crate::shared::components::badges::{active_badge, tag_list};
use crate::shared::components::data_grid::{Column, DataGrid};
use crate::shared::components::filter_toggle::{active_filter, ActiveOnlyToggle};
use crate::shared::date_utils::format_datetime;
use crate::shared::page_frame::PageFrame;
use crate::shared::remote_list::{use_remote_list, ListOptions};

const ENDPOINT: &str = "/api/users/";

fn columns() -> Vec<Column<User>> {
    vec![
        Column::text("username", "Username", |u: &User| u.username.clone()).sortable(),
        Column::text("full_name", "Full name", |u: &User| u.full_name.clone().unwrap_or_default()).sortable(),
        Column::text("email", "Email", |u: &User| u.email.clone().unwrap_or_default()).sortable(),
        Column::new("roles", "Roles", |u: &User| {
            if u.is_superuser {
                view! { <span class="badge badge--warning">"Superuser"</span> }.into_any()
            } else {
                tag_list(&u.roles)
            }
        }),
        Column::text("last_login", "Last login", |u: &User| {
            u.last_login
                .as_ref()
                .map(format_datetime)
                .unwrap_or_else(|| "Never".to_string())
        })
        .sortable(),
        Column::new("is_active", "Status", |u: &User| active_badge(u.is_active)),
    ]
}

#[component]
pub fn UserListPage() -> impl IntoView {
    let list = use_remote_list::<User>(
        ListOptions::new(ENDPOINT).with_default_sort("username", SortDirection::Ascending),
    );

    view! {
        <PageFrame
            page_id="users--list"
            title="Users"
            icon_name="users"
            count=Signal::derive(move || list.total_count())
        >
            <div class="page__toolbar">
                <ActiveOnlyToggle on_change=move |active: bool| list.set_filters(active_filter(active)) />
            </div>
            <DataGrid list=list columns=columns() search_placeholder="Username, name or email..." />
        </PageFrame>
    }
}
