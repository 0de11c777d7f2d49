use std::collections::BTreeMap;

use contracts::shared::list::SortDirection;
use contracts::system::access::Permission;
use contracts::system::roles::Role;
use leptos::prelude::*;

use crate::shared::components::data_grid::{Column, DataGrid};
use crate::shared::page_frame::PageFrame;
use crate::shared::remote_list::{use_remote_list, ListOptions};

const ENDPOINT: &str = "/api/roles/";

/// Group `resource.action` codes by resource, e.g.
/// `consumers: create, view`. Codes that do not parse are listed as-is
/// under `other`.
pub fn group_permissions(codes: &[String]) -> Vec<(String, Vec<String>)> {
    let mut grouped: BTreeMap<String, Vec<String>> = BTreeMap::new();
    for code in codes {
        match code.parse::<Permission>() {
            Ok(permission) => grouped
                .entry(permission.resource)
                .or_default()
                .push(permission.action),
            Err(_) => grouped.entry("other".to_string()).or_default().push(code.clone()),
        }
    }
    grouped
        .into_iter()
        .map(|(resource, mut actions)| {
            actions.sort();
            actions.dedup();
            (resource, actions)
        })
        .collect()
}

fn permissions_cell(role: &Role) -> AnyView {
    let groups = group_permissions(&role.permissions);
    if groups.is_empty() {
        return view! { <span class="text-muted">"No permissions"</span> }.into_any();
    }
    groups
        .into_iter()
        .map(|(resource, actions)| {
            view! {
                <div class="permission-group">
                    <strong>{resource}</strong>
                    ": "
                    {actions.join(", ")}
                </div>
            }
        })
        .collect_view()
        .into_any()
}

fn columns() -> Vec<Column<Role>> {
    vec![
        Column::text("name", "Role", |r: &Role| r.name.clone()).sortable(),
        Column::text("description", "Description", |r: &Role| r.description.clone().unwrap_or_default()),
        Column::new("permissions", "Permissions", permissions_cell),
        Column::text("user_count", "Users", |r: &Role| r.user_count.to_string()).sortable(),
    ]
}

#[component]
pub fn RoleListPage() -> impl IntoView {
    let list = use_remote_list::<Role>(
        ListOptions::new(ENDPOINT).with_default_sort("name", SortDirection::Ascending),
    );

    view! {
        <PageFrame
            page_id="roles--list"
            title="Roles & permissions"
            icon_name="shield"
            count=Signal::derive(move || list.total_count())
        >
            <DataGrid list=list columns=columns() search_placeholder="Role name..." />
        </PageFrame>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_group_permissions() {
        let codes = vec![
            "consumers.view".to_string(),
            "routes.view".to_string(),
            "consumers.create".to_string(),
            "consumers.view".to_string(),
            "legacy".to_string(),
        ];
        assert_eq!(
            group_permissions(&codes),
            vec![
                (
                    "consumers".to_string(),
                    vec!["create".to_string(), "view".to_string()]
                ),
                ("other".to_string(), vec!["legacy".to_string()]),
                ("routes".to_string(), vec!["view".to_string()]),
            ]
        );
    }
}
