//! Generic server-driven grid on top of [`RemoteList`].
//!
//! Rows are opaque to the grid: each [`Column`] names the remote field it
//! sorts by and renders its own cell.

use std::sync::Arc;

use contracts::shared::list::SortDirection;
use leptos::prelude::*;
use serde::de::DeserializeOwned;
use thaw::*;

use super::pagination_controls::PaginationControls;
use super::search_input::SearchInput;
use crate::config::app_config;
use crate::shared::remote_list::{RemoteList, SortKey};

pub struct Column<T> {
    /// Remote field name, used as the `ordering` value
    pub field: &'static str,
    pub header: &'static str,
    pub sortable: bool,
    pub render: Arc<dyn Fn(&T) -> AnyView + Send + Sync>,
}

impl<T> Clone for Column<T> {
    fn clone(&self) -> Self {
        Self {
            field: self.field,
            header: self.header,
            sortable: self.sortable,
            render: Arc::clone(&self.render),
        }
    }
}

impl<T: 'static> Column<T> {
    pub fn new(
        field: &'static str,
        header: &'static str,
        render: impl Fn(&T) -> AnyView + Send + Sync + 'static,
    ) -> Self {
        Self {
            field,
            header,
            sortable: false,
            render: Arc::new(render),
        }
    }

    /// Plain text cell.
    pub fn text(
        field: &'static str,
        header: &'static str,
        accessor: impl Fn(&T) -> String + Send + Sync + 'static,
    ) -> Self {
        Self::new(field, header, move |row| view! { <span>{accessor(row)}</span> }.into_any())
    }

    pub fn sortable(mut self) -> Self {
        self.sortable = true;
        self
    }
}

/// Header indicator for `field` under the active sort key.
pub fn sort_indicator(sort: Option<&SortKey>, field: &str) -> &'static str {
    match sort {
        Some(key) if key.field == field => match key.direction {
            SortDirection::Ascending => " ▲",
            SortDirection::Descending => " ▼",
        },
        _ => " ⇅",
    }
}

pub fn sort_class(sort: Option<&SortKey>, field: &str) -> &'static str {
    match sort {
        Some(key) if key.field == field => "table__sort-indicator table__sort-indicator--active",
        _ => "table__sort-indicator",
    }
}

fn header_cell<T>(list: RemoteList<T>, column: &Column<T>) -> AnyView
where
    T: DeserializeOwned + Clone + Send + Sync + 'static,
{
    let field = column.field;
    let header = column.header;
    if !column.sortable {
        return view! { <TableHeaderCell>{header}</TableHeaderCell> }.into_any();
    }

    view! {
        <TableHeaderCell>
            <div class="table__sortable-header" on:click=move |_| list.toggle_sort(field)>
                {header}
                <span class=move || sort_class(list.query().sort.as_ref(), field)>
                    {move || sort_indicator(list.query().sort.as_ref(), field)}
                </span>
            </div>
        </TableHeaderCell>
    }
    .into_any()
}

#[component]
pub fn DataGrid<T>(
    list: RemoteList<T>,
    columns: Vec<Column<T>>,
    #[prop(optional, into)] search_placeholder: String,
) -> impl IntoView
where
    T: DeserializeOwned + Clone + Send + Sync + 'static,
{
    let columns = StoredValue::new(columns);
    let page_size_options = app_config().list.page_size_options.clone();

    view! {
        <div class="data-grid">
            <div class="data-grid__toolbar">
                <SearchInput
                    value=Signal::derive(move || list.pending_search())
                    on_change=Callback::new(move |text: String| list.set_quick_search(text))
                    placeholder=search_placeholder
                />
                <PaginationControls list=list page_size_options=page_size_options />
                <Button
                    appearance=ButtonAppearance::Secondary
                    on_click=move |_| list.refresh()
                    disabled=Signal::derive(move || list.loading())
                >
                    {move || if list.loading() { "Loading..." } else { "Refresh" }}
                </Button>
            </div>

            {move || {
                list.error().map(|err| view! {
                    <div class="alert alert--error">{err}</div>
                })
            }}

            <div class="table-wrapper">
                <Table attr:style="width: 100%;">
                    <TableHeader>
                        <TableRow>
                            {columns.with_value(|cols| {
                                cols.iter().map(|column| header_cell(list, column)).collect_view()
                            })}
                        </TableRow>
                    </TableHeader>
                    <TableBody>
                        {move || {
                            list.rows()
                                .into_iter()
                                .map(|row| {
                                    let cells = columns.with_value(|cols| {
                                        cols.iter()
                                            .map(|column| {
                                                let cell = (column.render)(&row);
                                                view! {
                                                    <TableCell>
                                                        <TableCellLayout truncate=true>{cell}</TableCellLayout>
                                                    </TableCell>
                                                }
                                            })
                                            .collect_view()
                                    });
                                    view! { <TableRow>{cells}</TableRow> }
                                })
                                .collect_view()
                        }}
                    </TableBody>
                </Table>
                <Show when=move || list.rows().is_empty() && !list.loading() && list.error().is_none()>
                    <div class="data-grid__empty">"No records found"</div>
                </Show>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sort_indicator() {
        let key = SortKey {
            field: "name".to_string(),
            direction: SortDirection::Descending,
        };
        assert_eq!(sort_indicator(Some(&key), "name"), " ▼");
        assert_eq!(sort_indicator(Some(&key), "phone"), " ⇅");
        assert_eq!(sort_indicator(None, "name"), " ⇅");
        assert_eq!(
            sort_class(Some(&key), "name"),
            "table__sort-indicator table__sort-indicator--active"
        );
    }
}
